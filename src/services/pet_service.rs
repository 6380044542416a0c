//! Pet service - business rules for shelter pets.
//!
//! Declarative field constraints are checked at the boundary; the rules
//! here are the cross-record ones the boundary cannot express.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewPet, Pet, PetStatus};
use crate::errors::{AppError, AppResult};
use crate::infra::{OwnerRepository, PetFilter, PetRepository};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Pet service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PetService: Send + Sync {
    /// Register a new pet at the shelter; it starts available, unowned
    async fn register_pet(&self, name: String, species: String, age: i32) -> AppResult<Pet>;

    /// Get pet by ID
    async fn get_pet(&self, id: Uuid) -> AppResult<Pet>;

    /// List pets matching the filter with the page total
    async fn list_pets(
        &self,
        filter: &PetFilter,
        page: &PaginationParams,
    ) -> AppResult<(Vec<Pet>, u64)>;

    /// Update pet details, enforcing the adoption rules
    async fn update_pet(
        &self,
        id: Uuid,
        name: Option<String>,
        age: Option<i32>,
        status: Option<PetStatus>,
        owner_id: Option<Uuid>,
    ) -> AppResult<Pet>;

    /// Delete pet by ID
    async fn delete_pet(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of PetService.
pub struct PetManager {
    pets: Arc<dyn PetRepository>,
    owners: Arc<dyn OwnerRepository>,
}

impl PetManager {
    /// Create new pet service with its repository collaborators
    pub fn new(pets: Arc<dyn PetRepository>, owners: Arc<dyn OwnerRepository>) -> Self {
        Self { pets, owners }
    }
}

#[async_trait]
impl PetService for PetManager {
    async fn register_pet(&self, name: String, species: String, age: i32) -> AppResult<Pet> {
        self.pets.create(NewPet::new(name, species, age)).await
    }

    async fn get_pet(&self, id: Uuid) -> AppResult<Pet> {
        self.pets.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_pets(
        &self,
        filter: &PetFilter,
        page: &PaginationParams,
    ) -> AppResult<(Vec<Pet>, u64)> {
        self.pets.list(filter, page).await
    }

    async fn update_pet(
        &self,
        id: Uuid,
        name: Option<String>,
        age: Option<i32>,
        status: Option<PetStatus>,
        owner_id: Option<Uuid>,
    ) -> AppResult<Pet> {
        let current = self.pets.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        if let Some(owner_id) = owner_id {
            if current.status.is_adopted() {
                return Err(AppError::invalid_state("Pet is already adopted"));
            }
            // Referential check: the adopting owner must exist
            if self.owners.find_by_id(owner_id).await?.is_none() {
                return Err(AppError::NotFound);
            }
        }

        if status == Some(PetStatus::Adopted) && owner_id.is_none() && current.owner_id.is_none() {
            return Err(AppError::invalid_state(
                "Pet cannot be marked adopted without an owner",
            ));
        }

        self.pets.update(id, name, age, status, owner_id).await
    }

    async fn delete_pet(&self, id: Uuid) -> AppResult<()> {
        self.pets.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockOwnerRepository, MockPetRepository};
    use chrono::Utc;

    fn sample_pet(id: Uuid, status: PetStatus, owner_id: Option<Uuid>) -> Pet {
        Pet {
            id,
            name: "Rex".to_string(),
            species: "dog".to_string(),
            age: 3,
            status,
            owner_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(pets: MockPetRepository, owners: MockOwnerRepository) -> PetManager {
        PetManager::new(Arc::new(pets), Arc::new(owners))
    }

    #[tokio::test]
    async fn test_register_fills_defaults() {
        let mut pets = MockPetRepository::new();
        pets.expect_create()
            .withf(|new_pet| {
                new_pet.status == PetStatus::Available && new_pet.owner_id.is_none()
            })
            .returning(|new_pet| {
                Ok(Pet {
                    id: Uuid::new_v4(),
                    name: new_pet.name,
                    species: new_pet.species,
                    age: new_pet.age,
                    status: new_pet.status,
                    owner_id: new_pet.owner_id,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
            });

        let pet = service(pets, MockOwnerRepository::new())
            .register_pet("Rex".to_string(), "dog".to_string(), 3)
            .await
            .unwrap();

        assert_eq!(pet.status, PetStatus::Available);
        assert!(pet.owner_id.is_none());
    }

    #[tokio::test]
    async fn test_get_missing_pet_is_not_found() {
        let mut pets = MockPetRepository::new();
        pets.expect_find_by_id().returning(|_| Ok(None));

        let result = service(pets, MockOwnerRepository::new())
            .get_pet(Uuid::new_v4())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_assigning_owner_to_adopted_pet_is_invalid_state() {
        let pet_id = Uuid::new_v4();
        let mut pets = MockPetRepository::new();
        pets.expect_find_by_id()
            .returning(move |id| Ok(Some(sample_pet(id, PetStatus::Adopted, Some(Uuid::new_v4())))));
        pets.expect_update().times(0);

        let result = service(pets, MockOwnerRepository::new())
            .update_pet(pet_id, None, None, None, Some(Uuid::new_v4()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidState(_)));
    }

    #[tokio::test]
    async fn test_adopting_without_owner_is_invalid_state() {
        let pet_id = Uuid::new_v4();
        let mut pets = MockPetRepository::new();
        pets.expect_find_by_id()
            .returning(move |id| Ok(Some(sample_pet(id, PetStatus::Available, None))));
        pets.expect_update().times(0);

        let result = service(pets, MockOwnerRepository::new())
            .update_pet(pet_id, None, None, Some(PetStatus::Adopted), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidState(_)));
    }

    #[tokio::test]
    async fn test_adoption_with_unknown_owner_is_not_found() {
        let pet_id = Uuid::new_v4();
        let mut pets = MockPetRepository::new();
        pets.expect_find_by_id()
            .returning(move |id| Ok(Some(sample_pet(id, PetStatus::Available, None))));
        pets.expect_update().times(0);

        let mut owners = MockOwnerRepository::new();
        owners.expect_find_by_id().returning(|_| Ok(None));

        let result = service(pets, owners)
            .update_pet(
                pet_id,
                None,
                None,
                Some(PetStatus::Adopted),
                Some(Uuid::new_v4()),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_adoption_with_known_owner_succeeds() {
        let pet_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();

        let mut pets = MockPetRepository::new();
        pets.expect_find_by_id()
            .returning(move |id| Ok(Some(sample_pet(id, PetStatus::Available, None))));
        pets.expect_update().returning(move |id, _, _, status, owner| {
            Ok(sample_pet(id, status.unwrap(), owner))
        });

        let mut owners = MockOwnerRepository::new();
        owners.expect_find_by_id().returning(move |id| {
            Ok(Some(crate::domain::Owner {
                id,
                email: "jane@example.com".to_string(),
                password_hash: "$argon2id$fake".to_string(),
                name: "Jane".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }))
        });

        let pet = service(pets, owners)
            .update_pet(
                pet_id,
                None,
                None,
                Some(PetStatus::Adopted),
                Some(owner_id),
            )
            .await
            .unwrap();

        assert_eq!(pet.status, PetStatus::Adopted);
        assert_eq!(pet.owner_id, Some(owner_id));
    }

    #[tokio::test]
    async fn test_update_missing_pet_is_not_found() {
        let mut pets = MockPetRepository::new();
        pets.expect_find_by_id().returning(|_| Ok(None));
        pets.expect_update().times(0);

        let result = service(pets, MockOwnerRepository::new())
            .update_pet(
                Uuid::new_v4(),
                Some("Rex".to_string()),
                None,
                None,
                None,
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }
}
