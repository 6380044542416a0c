//! Owner handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::OwnerResponse;
use crate::errors::AppResult;
use crate::types::{Paginated, PaginationParams};

/// Owner registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterOwnerRequest {
    /// Owner email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "owner@example.com")]
    pub email: String,
    /// Portal password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    /// Owner display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
}

/// Owner update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateOwnerRequest {
    /// New display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
}

/// Create owner routes
pub fn owner_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register_owner).get(list_owners))
        .route(
            "/:id",
            get(get_owner).put(update_owner).delete(delete_owner),
        )
        .route("/:id/with-pets", delete(delete_owner_with_pets))
}

/// Register a new owner
#[utoipa::path(
    post,
    path = "/owners",
    tag = "Owners",
    request_body = RegisterOwnerRequest,
    responses(
        (status = 201, description = "Owner registered successfully", body = OwnerResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Owner already exists")
    )
)]
pub async fn register_owner(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterOwnerRequest>,
) -> AppResult<(StatusCode, Json<OwnerResponse>)> {
    let owner = state
        .owner_service
        .register(payload.email, payload.password, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(OwnerResponse::from(owner))))
}

/// List owners
#[utoipa::path(
    get,
    path = "/owners",
    tag = "Owners",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of owners")
    )
)]
pub async fn list_owners(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<Paginated<OwnerResponse>>> {
    let (owners, total) = state.owner_service.list_owners(&pagination).await?;

    Ok(Json(Paginated::new(
        owners.into_iter().map(OwnerResponse::from).collect(),
        pagination.page,
        pagination.limit(),
        total,
    )))
}

/// Get owner by ID
#[utoipa::path(
    get,
    path = "/owners/{id}",
    tag = "Owners",
    params(
        ("id" = Uuid, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Owner profile", body = OwnerResponse),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<OwnerResponse>> {
    let owner = state.owner_service.get_owner(id).await?;
    Ok(Json(OwnerResponse::from(owner)))
}

/// Update owner
#[utoipa::path(
    put,
    path = "/owners/{id}",
    tag = "Owners",
    params(
        ("id" = Uuid, Path, description = "Owner ID")
    ),
    request_body = UpdateOwnerRequest,
    responses(
        (status = 200, description = "Owner updated successfully", body = OwnerResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateOwnerRequest>,
) -> AppResult<Json<OwnerResponse>> {
    let owner = state.owner_service.update_owner(id, payload.name).await?;
    Ok(Json(OwnerResponse::from(owner)))
}

/// Delete owner; refused while pets are still registered to them
#[utoipa::path(
    delete,
    path = "/owners/{id}",
    tag = "Owners",
    params(
        ("id" = Uuid, Path, description = "Owner ID")
    ),
    responses(
        (status = 204, description = "Owner deleted successfully"),
        (status = 400, description = "Owner still has registered pets"),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.owner_service.delete_owner(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete owner together with every pet registered to them
#[utoipa::path(
    delete,
    path = "/owners/{id}/with-pets",
    tag = "Owners",
    params(
        ("id" = Uuid, Path, description = "Owner ID")
    ),
    responses(
        (status = 204, description = "Owner and pets deleted successfully"),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn delete_owner_with_pets(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.owner_service.delete_owner_with_pets(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use tower::util::ServiceExt;

    use crate::domain::Owner;
    use crate::errors::AppError;
    use crate::infra::Database;
    use crate::services::{MockOwnerService, MockPetService};

    fn sample_owner(id: Uuid) -> Owner {
        Owner {
            id,
            email: "jane@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            name: "Jane".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn app(owner_service: MockOwnerService) -> Router {
        let database = Arc::new(Database::from_connection(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        ));
        let state = AppState::new(
            Arc::new(owner_service),
            Arc::new(MockPetService::new()),
            database,
        );
        Router::new().nest("/owners", owner_routes()).with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_returns_created_without_credential_field() {
        let mut service = MockOwnerService::new();
        service
            .expect_register()
            .returning(|email, _, name| {
                let mut owner = sample_owner(Uuid::new_v4());
                owner.email = email;
                owner.name = name;
                Ok(owner)
            });

        let response = app(service)
            .oneshot(post_json(
                "/owners",
                serde_json::json!({
                    "email": "jane@example.com",
                    "password": "password123",
                    "name": "Jane"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["email"], "jane@example.com");
        assert!(body.get("password").is_none());
        assert!(body.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_register_invalid_email_never_reaches_service() {
        let mut service = MockOwnerService::new();
        service.expect_register().times(0);

        let response = app(service)
            .oneshot(post_json(
                "/owners",
                serde_json::json!({
                    "email": "not-an-email",
                    "password": "password123",
                    "name": "Jane"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errorCode"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_register_taken_email_is_conflict() {
        let mut service = MockOwnerService::new();
        service
            .expect_register()
            .returning(|_, _, _| Err(AppError::conflict("Owner")));

        let response = app(service)
            .oneshot(post_json(
                "/owners",
                serde_json::json!({
                    "email": "taken@example.com",
                    "password": "password123",
                    "name": "Jane"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["errorCode"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_delete_with_remaining_pets_is_client_error() {
        let mut service = MockOwnerService::new();
        service
            .expect_delete_owner()
            .returning(|_| Err(AppError::invalid_state("Owner still has 2 registered pet(s)")));

        let response = app(service)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/owners/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errorCode"], "INVALID_STATE");
    }

    #[tokio::test]
    async fn test_delete_unknown_owner_is_not_found() {
        let mut service = MockOwnerService::new();
        service
            .expect_delete_owner()
            .returning(|_| Err(AppError::NotFound));

        let response = app(service)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/owners/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
