//! Service container - centralized service construction and access.
//!
//! Dependencies are passed explicitly at construction time; there is
//! no hidden registry. Handlers reach services through `AppState`.

use std::sync::Arc;

use super::{OwnerManager, OwnerService, PetManager, PetService};
use crate::infra::{OwnerRepository, OwnerStore, PetRepository, PetStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get owner service
    fn owners(&self) -> Arc<dyn OwnerService>;

    /// Get pet service
    fn pets(&self) -> Arc<dyn PetService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    owner_service: Arc<dyn OwnerService>,
    pet_service: Arc<dyn PetService>,
}

impl Services {
    /// Create a new service container with pre-built services
    pub fn new(owner_service: Arc<dyn OwnerService>, pet_service: Arc<dyn PetService>) -> Self {
        Self {
            owner_service,
            pet_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let owner_repo: Arc<dyn OwnerRepository> = Arc::new(OwnerStore::new(db.clone()));
        let pet_repo: Arc<dyn PetRepository> = Arc::new(PetStore::new(db));

        let owner_service = Arc::new(OwnerManager::new(owner_repo.clone(), pet_repo.clone()));
        let pet_service = Arc::new(PetManager::new(pet_repo, owner_repo));

        Self {
            owner_service,
            pet_service,
        }
    }
}

impl ServiceContainer for Services {
    fn owners(&self) -> Arc<dyn OwnerService> {
        self.owner_service.clone()
    }

    fn pets(&self) -> Arc<dyn PetService> {
        self.pet_service.clone()
    }
}
