//! Request handlers.
//!
//! Each submodule owns the lifecycle of one resource: handlers perform the
//! ownership and state checks, delegate storage to `campusbuddy_db`
//! repositories, and map outcomes via [`crate::error::AppError`].

pub mod auth;
pub mod buddy;
pub mod event;
pub mod notification;
