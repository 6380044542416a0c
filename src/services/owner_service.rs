//! Owner service - business rules for shelter owners.
//!
//! One public operation is one logical business transaction. Domain
//! errors raised here are distinct from the boundary validation errors
//! resolved before any service call.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewOwner, Owner, Password};
use crate::errors::{AppError, AppResult};
use crate::infra::{OwnerRepository, PetRepository};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Owner service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OwnerService: Send + Sync {
    /// Register a new owner; the email must not be taken
    async fn register(&self, email: String, password: String, name: String) -> AppResult<Owner>;

    /// Get owner by ID
    async fn get_owner(&self, id: Uuid) -> AppResult<Owner>;

    /// List owners with the page total
    async fn list_owners(&self, page: &PaginationParams) -> AppResult<(Vec<Owner>, u64)>;

    /// Update owner details
    async fn update_owner(&self, id: Uuid, name: Option<String>) -> AppResult<Owner>;

    /// Delete owner; refused while pets are still registered to them
    async fn delete_owner(&self, id: Uuid) -> AppResult<()>;

    /// Delete owner together with every pet registered to them
    async fn delete_owner_with_pets(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of OwnerService.
pub struct OwnerManager {
    owners: Arc<dyn OwnerRepository>,
    pets: Arc<dyn PetRepository>,
}

impl OwnerManager {
    /// Create new owner service with its repository collaborators
    pub fn new(owners: Arc<dyn OwnerRepository>, pets: Arc<dyn PetRepository>) -> Self {
        Self { owners, pets }
    }
}

#[async_trait]
impl OwnerService for OwnerManager {
    async fn register(&self, email: String, password: String, name: String) -> AppResult<Owner> {
        // Email format is validated by the handler's ValidatedJson extractor.
        // Uniqueness is checked here, before create, rather than relying on
        // the store's constraint violation as control flow.
        if self.owners.exists_by_email(&email).await? {
            return Err(AppError::conflict("Owner"));
        }

        let password_hash = Password::new(&password)?.into_string();
        self.owners
            .create(NewOwner::new(email, name, password_hash))
            .await
    }

    async fn get_owner(&self, id: Uuid) -> AppResult<Owner> {
        self.owners
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_owners(&self, page: &PaginationParams) -> AppResult<(Vec<Owner>, u64)> {
        self.owners.list(page).await
    }

    async fn update_owner(&self, id: Uuid, name: Option<String>) -> AppResult<Owner> {
        self.owners.update(id, name).await
    }

    async fn delete_owner(&self, id: Uuid) -> AppResult<()> {
        let remaining = self.pets.count_by_owner(id).await?;
        if remaining > 0 {
            return Err(AppError::invalid_state(format!(
                "Owner still has {} registered pet(s); use the cascade delete to remove them together",
                remaining
            )));
        }

        self.owners.delete(id).await
    }

    async fn delete_owner_with_pets(&self, id: Uuid) -> AppResult<()> {
        self.owners.delete_with_pets(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockOwnerRepository, MockPetRepository};
    use chrono::Utc;

    fn sample_owner(id: Uuid, email: &str) -> Owner {
        Owner {
            id,
            email: email.to_string(),
            password_hash: "$argon2id$fake".to_string(),
            name: "Jane".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(owners: MockOwnerRepository, pets: MockPetRepository) -> OwnerManager {
        OwnerManager::new(Arc::new(owners), Arc::new(pets))
    }

    #[tokio::test]
    async fn test_register_conflict_when_email_taken() {
        let mut owners = MockOwnerRepository::new();
        owners.expect_exists_by_email().returning(|_| Ok(true));
        // The first record must be unaffected: no write happens
        owners.expect_create().times(0);

        let result = service(owners, MockPetRepository::new())
            .register(
                "taken@example.com".to_string(),
                "password123".to_string(),
                "Jane".to_string(),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plain_text() {
        let mut owners = MockOwnerRepository::new();
        owners.expect_exists_by_email().returning(|_| Ok(false));
        owners
            .expect_create()
            .withf(|new_owner| {
                new_owner.email == "jane@example.com"
                    && new_owner.password_hash != "password123"
                    && new_owner.password_hash.starts_with("$argon2")
            })
            .returning(|new_owner| {
                let mut owner = sample_owner(Uuid::new_v4(), &new_owner.email);
                owner.password_hash = new_owner.password_hash;
                Ok(owner)
            });

        let result = service(owners, MockPetRepository::new())
            .register(
                "jane@example.com".to_string(),
                "password123".to_string(),
                "Jane".to_string(),
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_missing_owner_is_not_found() {
        let mut owners = MockOwnerRepository::new();
        owners.expect_find_by_id().returning(|_| Ok(None));

        let result = service(owners, MockPetRepository::new())
            .get_owner(Uuid::new_v4())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_refused_while_pets_remain() {
        let mut owners = MockOwnerRepository::new();
        owners.expect_delete().times(0);

        let mut pets = MockPetRepository::new();
        pets.expect_count_by_owner().returning(|_| Ok(2));

        let result = service(owners, pets).delete_owner(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidState(_)));
    }

    #[tokio::test]
    async fn test_delete_succeeds_without_pets() {
        let mut owners = MockOwnerRepository::new();
        owners.expect_delete().returning(|_| Ok(()));

        let mut pets = MockPetRepository::new();
        pets.expect_count_by_owner().returning(|_| Ok(0));

        let result = service(owners, pets).delete_owner(Uuid::new_v4()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_cascade_delete_delegates_to_repository() {
        let mut owners = MockOwnerRepository::new();
        owners.expect_delete_with_pets().returning(|_| Ok(()));

        let result = service(owners, MockPetRepository::new())
            .delete_owner_with_pets(Uuid::new_v4())
            .await;

        assert!(result.is_ok());
    }
}
