use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use shared::models::{ApiError, UserRole};
use thiserror::Error;
use tracing::warn;
use yew::Callback;

use crate::auth::identity::Identity;
use crate::auth::session::Session;

/// Remote role lookup keyed by email; implemented by the REST client and by
/// test doubles.
#[async_trait(?Send)]
pub trait RoleSource {
    /// `Ok(None)` means no record (or no role field) exists for the email.
    async fn role_for(&self, email: &str) -> Result<Option<UserRole>, ApiError>;
}

/// Non-fatal failure of a role lookup. Logged, never surfaced; the session
/// falls back to [`UserRole::User`].
#[derive(Debug, Error)]
#[error("role lookup for {email} failed: {source}")]
pub struct RoleFetchFailure {
    email: String,
    #[source]
    source: ApiError,
}

/// Reconciles push-based identity notifications with the pull-based role
/// lookup and owns the single writable [`Session`].
///
/// Notifications are processed in delivery order. Each one takes a
/// monotonically increasing ticket; a role fetch only applies its result if
/// its ticket is still the latest, so a slow stale lookup can never
/// overwrite a fresher identity's role.
pub struct SessionResolver<R: RoleSource> {
    roles: Rc<R>,
    state: Rc<ResolverState>,
}

struct ResolverState {
    session: RefCell<Session>,
    latest_ticket: Cell<u64>,
    shut_down: Cell<bool>,
    listeners: RefCell<Vec<Callback<Session>>>,
}

impl<R: RoleSource> Clone for SessionResolver<R> {
    fn clone(&self) -> Self {
        Self {
            roles: Rc::clone(&self.roles),
            state: Rc::clone(&self.state),
        }
    }
}

impl<R: RoleSource + 'static> SessionResolver<R> {
    pub fn new(roles: Rc<R>) -> Self {
        Self {
            roles,
            state: Rc::new(ResolverState {
                session: RefCell::new(Session::default()),
                latest_ticket: Cell::new(0),
                shut_down: Cell::new(false),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Current session snapshot.
    pub fn snapshot(&self) -> Session {
        self.state.session.borrow().clone()
    }

    /// Register a listener; it receives a snapshot on every visible change.
    pub fn subscribe(&self, listener: Callback<Session>) {
        self.state.listeners.borrow_mut().push(listener);
    }

    /// Stop publishing. In-flight role fetches completing afterwards are
    /// discarded. Idempotent.
    pub fn shutdown(&self) {
        self.state.shut_down.set(true);
        self.state.listeners.borrow_mut().clear();
    }

    /// Handle an identity-provider notification.
    ///
    /// The synchronous prefix runs at call time, preserving delivery order:
    /// a sign-out settles immediately, a sign-in publishes the identity with
    /// `resolving = true`. The returned future performs the role fetch and
    /// must be spawned by the caller.
    pub fn on_identity_change(&self, identity: Option<Identity>) -> impl Future<Output = ()> + 'static {
        let ticket = self.state.latest_ticket.get() + 1;
        self.state.latest_ticket.set(ticket);

        let pending_email = match identity {
            None => {
                Self::publish(&self.state, Session::signed_out());
                None
            }
            Some(identity) => {
                let email = identity.email.clone();
                Self::publish(
                    &self.state,
                    Session {
                        identity: Some(identity),
                        role: None,
                        resolving: true,
                    },
                );
                Some(email)
            }
        };

        let state = Rc::clone(&self.state);
        let roles = Rc::clone(&self.roles);
        async move {
            let Some(email) = pending_email else {
                return;
            };
            let fetched = roles.role_for(&email).await;
            if state.shut_down.get() || state.latest_ticket.get() != ticket {
                // A newer notification superseded this fetch, or the app
                // unmounted; the result must not be applied.
                return;
            }

            let role = match fetched {
                Ok(Some(role)) => role,
                Ok(None) => UserRole::User,
                Err(source) => {
                    let failure = RoleFetchFailure { email, source };
                    warn!(error = %failure, "defaulting role to user");
                    UserRole::User
                }
            };

            let mut session = state.session.borrow().clone();
            session.role = Some(role);
            session.resolving = false;
            Self::publish(&state, session);
        }
    }

    fn publish(state: &Rc<ResolverState>, session: Session) {
        if state.shut_down.get() {
            return;
        }
        *state.session.borrow_mut() = session.clone();
        for listener in state.listeners.borrow().iter() {
            listener.emit(session.clone());
        }
    }
}
