//! Access gate.
//!
//! [`auth::CurrentUser`] extracts the session token from the request and
//! resolves it against the session store. Ownership checks for specific
//! mutations stay with the entity handlers: authentication is generic,
//! authorization is entity-specific.

pub mod auth;
