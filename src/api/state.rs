//! Application state - dependency injection container.
//!
//! Every collaborator is passed in explicitly; there is no global
//! registry behind the handlers.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{OwnerService, PetService, ServiceContainer, Services};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Owner service
    pub owner_service: Arc<dyn OwnerService>,
    /// Pet service
    pub pet_service: Arc<dyn PetService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    pub fn from_config(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            owner_service: container.owners(),
            pet_service: container.pets(),
            database,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        owner_service: Arc<dyn OwnerService>,
        pet_service: Arc<dyn PetService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            owner_service,
            pet_service,
            database,
        }
    }
}
