//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod owner_repository;
mod pet_repository;

pub use owner_repository::{OwnerRepository, OwnerStore};
pub use pet_repository::{PetFilter, PetRepository, PetStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use owner_repository::MockOwnerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use pet_repository::MockPetRepository;
