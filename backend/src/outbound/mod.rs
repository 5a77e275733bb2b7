//! Outbound adapters implementing domain ports.

pub mod memory;
