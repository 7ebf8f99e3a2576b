//! SQLite access to the store carved out of a container.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial module structure

pub mod connection;
pub mod preview;
pub mod queries;
