//! Repository structs with static async methods, one per table.
//!
//! Repositories speak raw parameterized SQL and return `sqlx` results;
//! ownership and state-transition rules live one layer up in the handlers.

pub mod buddy_request_repo;
pub mod event_repo;
pub mod notification_repo;
pub mod participation_repo;
pub mod user_repo;

pub use buddy_request_repo::BuddyRequestRepo;
pub use event_repo::EventRepo;
pub use notification_repo::NotificationRepo;
pub use participation_repo::ParticipationRepo;
pub use user_repo::UserRepo;
