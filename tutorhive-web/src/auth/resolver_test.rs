//! Tests for the session resolver
//!
//! Drives the resolver on a local executor with hand-rolled role sources,
//! including gated ones that let each test decide when a role fetch
//! resolves. This is how the login/logout/login race is made deterministic.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use shared::models::{ApiError, UserRole};
use yew::Callback;

use crate::auth::identity::Identity;
use crate::auth::resolver::{RoleSource, SessionResolver};
use crate::auth::session::Session;

fn identity(email: &str) -> Identity {
    Identity {
        uid: format!("uid-{email}"),
        email: email.to_string(),
        display_name: None,
    }
}

/// Role source answering immediately with a fixed result.
struct FixedRoles(Result<Option<UserRole>, ApiError>);

#[async_trait(?Send)]
impl RoleSource for FixedRoles {
    async fn role_for(&self, _email: &str) -> Result<Option<UserRole>, ApiError> {
        self.0.clone()
    }
}

/// Role source that parks each lookup on a oneshot gate registered by the
/// test, keyed by email.
#[derive(Default)]
struct GatedRoles {
    gates: RefCell<HashMap<String, oneshot::Receiver<Result<Option<UserRole>, ApiError>>>>,
}

impl GatedRoles {
    fn register(&self, email: &str) -> oneshot::Sender<Result<Option<UserRole>, ApiError>> {
        let (sender, receiver) = oneshot::channel();
        self.gates.borrow_mut().insert(email.to_string(), receiver);
        sender
    }
}

#[async_trait(?Send)]
impl RoleSource for GatedRoles {
    async fn role_for(&self, email: &str) -> Result<Option<UserRole>, ApiError> {
        let receiver = self
            .gates
            .borrow_mut()
            .remove(email)
            .expect("gate registered for email");
        receiver.await.expect("gate sender not dropped")
    }
}

#[test]
fn sign_in_resolves_fetched_role() {
    let mut pool = LocalPool::new();
    let resolver = SessionResolver::new(Rc::new(FixedRoles(Ok(Some(UserRole::Admin)))));

    pool.spawner()
        .spawn_local(resolver.on_identity_change(Some(identity("root@example.com"))))
        .unwrap();
    pool.run_until_stalled();

    let session = resolver.snapshot();
    assert!(!session.resolving);
    assert_eq!(session.role, Some(UserRole::Admin));
    assert_eq!(
        session.identity.map(|id| id.email),
        Some("root@example.com".to_string())
    );
}

#[test]
fn resolving_is_true_until_the_fetch_settles() {
    let mut pool = LocalPool::new();
    let roles = Rc::new(GatedRoles::default());
    let gate = roles.register("asha@example.com");
    let resolver = SessionResolver::new(Rc::clone(&roles));

    pool.spawner()
        .spawn_local(resolver.on_identity_change(Some(identity("asha@example.com"))))
        .unwrap();
    pool.run_until_stalled();

    let pending = resolver.snapshot();
    assert!(pending.resolving);
    assert!(pending.identity.is_some());
    assert_eq!(pending.role, None);

    gate.send(Ok(Some(UserRole::User))).unwrap();
    pool.run_until_stalled();

    let settled = resolver.snapshot();
    assert!(!settled.resolving);
    assert_eq!(settled.role, Some(UserRole::User));
}

#[test]
fn sign_out_settles_in_the_synchronous_prefix() {
    let resolver = SessionResolver::new(Rc::new(FixedRoles(Ok(None))));

    // The session must be settled before the returned future is ever polled.
    let pending = resolver.on_identity_change(None);
    let session = resolver.snapshot();
    assert_eq!(session, Session::signed_out());
    drop(pending);
}

#[test]
fn stale_role_fetch_is_discarded_by_ticket() {
    let mut pool = LocalPool::new();
    let roles = Rc::new(GatedRoles::default());
    let first_gate = roles.register("a@x.com");
    let second_gate = roles.register("b@x.com");
    let resolver = SessionResolver::new(Rc::clone(&roles));

    pool.spawner()
        .spawn_local(resolver.on_identity_change(Some(identity("a@x.com"))))
        .unwrap();
    pool.run_until_stalled();
    pool.spawner()
        .spawn_local(resolver.on_identity_change(Some(identity("b@x.com"))))
        .unwrap();
    pool.run_until_stalled();

    // The second notification resolves first.
    second_gate.send(Ok(Some(UserRole::Admin))).unwrap();
    pool.run_until_stalled();
    let session = resolver.snapshot();
    assert!(!session.resolving);
    assert_eq!(session.role, Some(UserRole::Admin));

    // The delayed first fetch must not win, even though it completes later.
    first_gate.send(Ok(Some(UserRole::User))).unwrap();
    pool.run_until_stalled();
    let session = resolver.snapshot();
    assert_eq!(session.role, Some(UserRole::Admin));
    assert_eq!(
        session.identity.map(|id| id.email),
        Some("b@x.com".to_string())
    );
}

#[test]
fn missing_record_defaults_role_to_user() {
    let mut pool = LocalPool::new();
    let resolver = SessionResolver::new(Rc::new(FixedRoles(Ok(None))));

    pool.spawner()
        .spawn_local(resolver.on_identity_change(Some(identity("new@example.com"))))
        .unwrap();
    pool.run_until_stalled();

    assert_eq!(resolver.snapshot().role, Some(UserRole::User));
}

#[test]
fn fetch_failure_defaults_role_to_user_and_settles() {
    let mut pool = LocalPool::new();
    let resolver =
        SessionResolver::new(Rc::new(FixedRoles(Err(ApiError::UnexpectedStatus(500)))));

    pool.spawner()
        .spawn_local(resolver.on_identity_change(Some(identity("user@example.com"))))
        .unwrap();
    pool.run_until_stalled();

    let session = resolver.snapshot();
    assert!(!session.resolving);
    assert_eq!(session.role, Some(UserRole::User));
}

#[test]
fn shutdown_blocks_late_fetch_results() {
    let mut pool = LocalPool::new();
    let roles = Rc::new(GatedRoles::default());
    let gate = roles.register("asha@example.com");
    let resolver = SessionResolver::new(Rc::clone(&roles));

    pool.spawner()
        .spawn_local(resolver.on_identity_change(Some(identity("asha@example.com"))))
        .unwrap();
    pool.run_until_stalled();

    resolver.shutdown();
    gate.send(Ok(Some(UserRole::Admin))).unwrap();
    pool.run_until_stalled();

    // The fetch completed after teardown and must not have been applied.
    let session = resolver.snapshot();
    assert!(session.resolving);
    assert_eq!(session.role, None);
}

#[test]
fn listeners_see_every_visible_change() {
    let mut pool = LocalPool::new();
    let resolver = SessionResolver::new(Rc::new(FixedRoles(Ok(Some(UserRole::User)))));

    let seen: Rc<RefCell<Vec<Session>>> = Rc::default();
    let sink = Rc::clone(&seen);
    resolver.subscribe(Callback::from(move |session| {
        sink.borrow_mut().push(session);
    }));

    pool.spawner()
        .spawn_local(resolver.on_identity_change(Some(identity("asha@example.com"))))
        .unwrap();
    pool.run_until_stalled();
    pool.spawner()
        .spawn_local(resolver.on_identity_change(None))
        .unwrap();
    pool.run_until_stalled();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert!(seen[0].resolving);
    assert_eq!(seen[1].role, Some(UserRole::User));
    assert_eq!(seen[2], Session::signed_out());
}
