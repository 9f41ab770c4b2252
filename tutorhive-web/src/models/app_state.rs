use yewdux::Store;

use crate::auth::session::Session;

/// View mirror of the resolver's session; written from exactly one place
/// (the resolver subscription in `app.rs`) and read by components.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: Session,
}
