pub(crate) mod dashboard_layout;
pub(crate) mod header;
pub(crate) mod layout;
