//! Domain ports defining the edges of the hexagon.
//!
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants.

mod macros;
mod user_repository;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
