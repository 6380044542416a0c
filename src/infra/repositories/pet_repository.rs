//! Pet repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::pet::{self, ActiveModel, Entity as PetEntity};
use crate::domain::{NewPet, Pet, PetStatus};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Predicate filter for pet listings. Empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct PetFilter {
    pub species: Option<String>,
    pub status: Option<PetStatus>,
}

/// Pet repository trait for dependency injection.
///
/// Identity and audit timestamps are assigned here, never by callers.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Find pet by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Pet>>;

    /// Create a new pet, assigning identity and timestamps
    async fn create(&self, new_pet: NewPet) -> AppResult<Pet>;

    /// Update pet fields; refreshes the modification timestamp
    async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        age: Option<i32>,
        status: Option<PetStatus>,
        owner_id: Option<Uuid>,
    ) -> AppResult<Pet>;

    /// Delete pet by ID; a repeated delete surfaces the same NotFound
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// List pets matching the filter, newest first, with the page total
    async fn list(&self, filter: &PetFilter, page: &PaginationParams)
        -> AppResult<(Vec<Pet>, u64)>;

    /// Count pets registered to one owner
    async fn count_by_owner(&self, owner_id: Uuid) -> AppResult<u64>;
}

/// Concrete implementation of PetRepository backed by SeaORM
pub struct PetStore {
    db: DatabaseConnection,
}

impl PetStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetRepository for PetStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Pet>> {
        let result = PetEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Pet::from))
    }

    async fn create(&self, new_pet: NewPet) -> AppResult<Pet> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(new_pet.name),
            species: Set(new_pet.species),
            age: Set(new_pet.age),
            status: Set(new_pet.status.to_string()),
            owner_id: Set(new_pet.owner_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Pet::from(model))
    }

    async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        age: Option<i32>,
        status: Option<PetStatus>,
        owner_id: Option<Uuid>,
    ) -> AppResult<Pet> {
        let existing = PetEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(name) = name {
            active.name = Set(name);
        }
        if let Some(age) = age {
            active.age = Set(age);
        }
        if let Some(status) = status {
            active.status = Set(status.to_string());
        }
        if let Some(owner_id) = owner_id {
            active.owner_id = Set(Some(owner_id));
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Pet::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = PetEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(
        &self,
        filter: &PetFilter,
        page: &PaginationParams,
    ) -> AppResult<(Vec<Pet>, u64)> {
        let mut query = PetEntity::find();

        if let Some(ref species) = filter.species {
            query = query.filter(pet::Column::Species.eq(species.as_str()));
        }
        if let Some(status) = filter.status {
            query = query.filter(pet::Column::Status.eq(status.to_string()));
        }

        let paginator = query
            .order_by_desc(pet::Column::CreatedAt)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page.saturating_sub(1)).await?;

        Ok((models.into_iter().map(Pet::from).collect(), total))
    }

    async fn count_by_owner(&self, owner_id: Uuid) -> AppResult<u64> {
        PetEntity::find()
            .filter(pet::Column::OwnerId.eq(owner_id))
            .count(&self.db)
            .await
            .map_err(Into::into)
    }
}
