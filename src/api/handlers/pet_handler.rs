//! Pet handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::is_valid_status;
use crate::domain::{PetResponse, PetStatus};
use crate::errors::{AppError, AppResult};
use crate::infra::PetFilter;
use crate::types::{Paginated, PaginationParams};

/// Pet intake request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePetRequest {
    /// Pet name
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[schema(example = "Rex")]
    pub name: String,
    /// Pet species
    #[validate(length(min = 1, max = 50, message = "Species must be 1-50 characters"))]
    #[schema(example = "dog")]
    pub species: String,
    /// Age in years
    #[validate(range(min = 0, max = 50, message = "Age must be between 0 and 50"))]
    #[schema(example = 3)]
    pub age: i32,
}

/// Pet update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePetRequest {
    /// New name
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[schema(example = "Rex")]
    pub name: Option<String>,
    /// New age in years
    #[validate(range(min = 0, max = 50, message = "Age must be between 0 and 50"))]
    #[schema(example = 4)]
    pub age: Option<i32>,
    /// New status ("available" or "adopted")
    #[schema(example = "adopted")]
    pub status: Option<String>,
    /// Adopting owner
    pub owner_id: Option<Uuid>,
}

/// Pet listing filter
#[derive(Debug, Deserialize, IntoParams)]
pub struct PetFilterParams {
    /// Only pets of this species
    pub species: Option<String>,
    /// Only pets with this status ("available" or "adopted")
    pub status: Option<String>,
}

/// Create pet routes
pub fn pet_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_pet).get(list_pets))
        .route("/:id", get(get_pet).put(update_pet).delete(delete_pet))
}

/// Parse an optional status string, rejecting unknown values
fn parse_status(status: Option<&str>) -> AppResult<Option<PetStatus>> {
    match status {
        Some(value) if !is_valid_status(value) => Err(AppError::validation(
            "Invalid status. Must be 'available' or 'adopted'",
        )),
        Some(value) => Ok(Some(PetStatus::from(value))),
        None => Ok(None),
    }
}

/// Register a new pet
#[utoipa::path(
    post,
    path = "/pets",
    tag = "Pets",
    request_body = CreatePetRequest,
    responses(
        (status = 201, description = "Pet registered successfully", body = PetResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_pet(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePetRequest>,
) -> AppResult<(StatusCode, Json<PetResponse>)> {
    let pet = state
        .pet_service
        .register_pet(payload.name, payload.species, payload.age)
        .await?;

    Ok((StatusCode::CREATED, Json(PetResponse::from(pet))))
}

/// List pets, optionally filtered by species and status
#[utoipa::path(
    get,
    path = "/pets",
    tag = "Pets",
    params(PetFilterParams, PaginationParams),
    responses(
        (status = 200, description = "Page of pets, possibly empty"),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn list_pets(
    State(state): State<AppState>,
    Query(filter): Query<PetFilterParams>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<Paginated<PetResponse>>> {
    let filter = PetFilter {
        species: filter.species,
        status: parse_status(filter.status.as_deref())?,
    };

    let (pets, total) = state.pet_service.list_pets(&filter, &pagination).await?;

    Ok(Json(Paginated::new(
        pets.into_iter().map(PetResponse::from).collect(),
        pagination.page,
        pagination.limit(),
        total,
    )))
}

/// Get pet by ID
#[utoipa::path(
    get,
    path = "/pets/{id}",
    tag = "Pets",
    params(
        ("id" = Uuid, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Pet details", body = PetResponse),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PetResponse>> {
    let pet = state.pet_service.get_pet(id).await?;
    Ok(Json(PetResponse::from(pet)))
}

/// Update pet
#[utoipa::path(
    put,
    path = "/pets/{id}",
    tag = "Pets",
    params(
        ("id" = Uuid, Path, description = "Pet ID")
    ),
    request_body = UpdatePetRequest,
    responses(
        (status = 200, description = "Pet updated successfully", body = PetResponse),
        (status = 400, description = "Validation error or invalid state"),
        (status = 404, description = "Pet or referenced owner not found")
    )
)]
pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdatePetRequest>,
) -> AppResult<Json<PetResponse>> {
    let status = parse_status(payload.status.as_deref())?;

    let pet = state
        .pet_service
        .update_pet(id, payload.name, payload.age, status, payload.owner_id)
        .await?;

    Ok(Json(PetResponse::from(pet)))
}

/// Delete pet
#[utoipa::path(
    delete,
    path = "/pets/{id}",
    tag = "Pets",
    params(
        ("id" = Uuid, Path, description = "Pet ID")
    ),
    responses(
        (status = 204, description = "Pet deleted successfully"),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.pet_service.delete_pet(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
