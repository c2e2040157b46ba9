//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Create DTOs for inserts where the entity is created through the API

pub mod buddy_request;
pub mod event;
pub mod notification;
pub mod user;
