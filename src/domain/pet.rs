//! Pet domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{STATUS_ADOPTED, STATUS_AVAILABLE};

/// Pet status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Adopted,
}

impl PetStatus {
    /// Check whether the pet has already been adopted
    pub fn is_adopted(&self) -> bool {
        matches!(self, PetStatus::Adopted)
    }
}

impl From<&str> for PetStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_ADOPTED => PetStatus::Adopted,
            _ => PetStatus::Available,
        }
    }
}

impl std::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetStatus::Available => write!(f, "{}", STATUS_AVAILABLE),
            PetStatus::Adopted => write!(f, "{}", STATUS_ADOPTED),
        }
    }
}

/// Pet domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: Uuid,
    pub name: String,
    pub species: String,
    pub age: i32,
    pub status: PetStatus,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unpersisted pet record, built from create input.
///
/// Fields the input omits are filled with their defaults here: a new
/// pet starts `available` with no owner. Identity and audit timestamps
/// are assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub age: i32,
    pub status: PetStatus,
    pub owner_id: Option<Uuid>,
}

impl NewPet {
    pub fn new(name: String, species: String, age: i32) -> Self {
        Self {
            name,
            species,
            age,
            status: PetStatus::Available,
            owner_id: None,
        }
    }
}

/// Pet response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PetResponse {
    /// Unique pet identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Pet name
    #[schema(example = "Rex")]
    pub name: String,
    /// Pet species
    #[schema(example = "dog")]
    pub species: String,
    /// Age in years
    #[schema(example = 3)]
    pub age: i32,
    /// Current shelter status
    pub status: PetStatus,
    /// Adopting owner, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id,
            name: pet.name,
            species: pet.species,
            age: pet.age,
            status: pet.status,
            owner_id: pet.owner_id,
            created_at: pet.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pet_defaults() {
        let new_pet = NewPet::new("Rex".to_string(), "dog".to_string(), 3);

        assert_eq!(new_pet.status, PetStatus::Available);
        assert!(new_pet.owner_id.is_none());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(PetStatus::Available.to_string(), "available");
        assert_eq!(PetStatus::Adopted.to_string(), "adopted");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(PetStatus::from("available"), PetStatus::Available);
        assert_eq!(PetStatus::from("adopted"), PetStatus::Adopted);
        // Unknown stored values fall back to Available
        assert_eq!(PetStatus::from("???"), PetStatus::Available);
    }

    #[test]
    fn test_round_trip_preserves_shared_fields() {
        // Simulates create input -> entity -> response
        let new_pet = NewPet::new("Rex".to_string(), "dog".to_string(), 3);
        let now = Utc::now();
        let stored = Pet {
            id: Uuid::new_v4(),
            name: new_pet.name.clone(),
            species: new_pet.species.clone(),
            age: new_pet.age,
            status: new_pet.status,
            owner_id: new_pet.owner_id,
            created_at: now,
            updated_at: now,
        };

        let response = PetResponse::from(stored);
        assert_eq!(response.name, "Rex");
        assert_eq!(response.species, "dog");
        assert_eq!(response.age, 3);
        assert_eq!(response.status, PetStatus::Available);
    }

    #[test]
    fn test_response_serialization_shape() {
        let now = Utc::now();
        let pet = Pet {
            id: Uuid::new_v4(),
            name: "Rex".to_string(),
            species: "dog".to_string(),
            age: 3,
            status: PetStatus::Available,
            owner_id: None,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(PetResponse::from(pet)).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["name"], "Rex");
        assert_eq!(object["species"], "dog");
        assert_eq!(object["age"], 3);
        assert_eq!(object["status"], "available");
        // owner_id omitted when None, no audit internals beyond created_at
        assert!(!object.contains_key("owner_id"));
        assert!(!object.contains_key("updated_at"));
    }
}
