//! Owner domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Owner domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unpersisted owner record, produced by the service before a create.
///
/// Identity and audit timestamps are assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewOwner {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

impl NewOwner {
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            email,
            name,
            password_hash,
        }
    }
}

/// Owner response (safe to return to client).
///
/// The credential hash is excluded by construction: this shape
/// simply has no field for it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OwnerResponse {
    /// Unique owner identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Owner email address
    #[schema(example = "owner@example.com")]
    pub email: String,
    /// Owner display name
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Owner> for OwnerResponse {
    fn from(owner: Owner) -> Self {
        Self {
            id: owner.id,
            email: owner.email,
            name: owner.name,
            created_at: owner.created_at,
        }
    }
}
