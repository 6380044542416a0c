//! Application services layer - use cases and business rules.
//!
//! Services orchestrate domain logic and repositories to fulfill one
//! logical business transaction per public operation. They depend on
//! repository traits for dependency inversion.

mod container;
mod owner_service;
mod pet_service;

pub use container::{ServiceContainer, Services};
pub use owner_service::{OwnerManager, OwnerService};
pub use pet_service::{PetManager, PetService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use owner_service::MockOwnerService;
#[cfg(any(test, feature = "test-utils"))]
pub use pet_service::MockPetService;
