//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the persistence backend

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{OwnerRepository, OwnerStore, PetFilter, PetRepository, PetStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockOwnerRepository, MockPetRepository};
