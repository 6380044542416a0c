//! Domain layer - Core business entities and transfer shapes
//!
//! Entities mirror persisted records; `New*` types are the mapper
//! output for the create path; `*Response` types are the declared
//! boundary shapes. Mapping is pure and never touches a repository.

pub mod owner;
pub mod password;
pub mod pet;

pub use owner::{NewOwner, Owner, OwnerResponse};
pub use password::Password;
pub use pet::{NewPet, Pet, PetResponse, PetStatus};
