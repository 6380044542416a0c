//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{owner_handler, pet_handler};
use crate::domain::{OwnerResponse, PetResponse, PetStatus};

/// OpenAPI documentation for the Pet Registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Registry",
        version = "0.1.0",
        description = "Pet shelter registry API with Axum, SeaORM, and clean architecture",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Owner endpoints
        owner_handler::register_owner,
        owner_handler::list_owners,
        owner_handler::get_owner,
        owner_handler::update_owner,
        owner_handler::delete_owner,
        owner_handler::delete_owner_with_pets,
        // Pet endpoints
        pet_handler::create_pet,
        pet_handler::list_pets,
        pet_handler::get_pet,
        pet_handler::update_pet,
        pet_handler::delete_pet,
    ),
    components(
        schemas(
            // Domain types
            PetStatus,
            OwnerResponse,
            PetResponse,
            // Handler request types
            owner_handler::RegisterOwnerRequest,
            owner_handler::UpdateOwnerRequest,
            pet_handler::CreatePetRequest,
            pet_handler::UpdatePetRequest,
        )
    ),
    tags(
        (name = "Owners", description = "Owner registration and management"),
        (name = "Pets", description = "Pet intake, adoption, and management")
    )
)]
pub struct ApiDoc;
