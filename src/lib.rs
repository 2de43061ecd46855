// ABOUTME: Library root for stackship - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deploy;
pub mod error;
pub mod remote;
pub mod template;
pub mod types;
