//! Taskboard core - authorization and resource-merge subsystem.
//!
//! The library behind a multi-user task-board backend: users own boards,
//! boards own tasks, and every operation is scoped to the authenticated
//! owner. It is consumed by an HTTP gateway which extracts bearer tokens,
//! runs the access checks exposed here before any mutating call, and maps
//! [`errors::AppError`] values to status codes.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and value objects
//! - **services**: Authentication, access control, and merge-update logic
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **errors**: Centralized error handling

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Board, Password, Patch, Priority, Task, User, UserRole};
pub use errors::{AppError, AppResult};
