//! Pet Registry - a pet shelter registry API
//!
//! This crate implements a layered request pipeline over two resources,
//! owners and pets: handlers decode and validate boundary input, pure
//! mappers convert between transfer shapes and entities, services apply
//! business invariants, and repositories own persistence.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, transfer shapes, and mappers
//! - **services**: Business rules and use cases
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared types (pagination)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Owner, Password, Pet, PetStatus};
pub use errors::{AppError, AppResult};
