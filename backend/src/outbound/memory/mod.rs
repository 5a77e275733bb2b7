//! In-memory adapters. State lives for the lifetime of the process.

mod user_repository;

pub use user_repository::InMemoryUserRepository;
