//! Owner repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::owner::{self, ActiveModel, Entity as OwnerEntity};
use super::entities::pet;
use crate::domain::{NewOwner, Owner};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Owner repository trait for dependency injection.
///
/// Identity and audit timestamps are assigned here, never by callers.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Find owner by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Owner>>;

    /// Check whether an owner with the given email exists
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Create a new owner, assigning identity and timestamps
    async fn create(&self, new_owner: NewOwner) -> AppResult<Owner>;

    /// Update owner fields; refreshes the modification timestamp
    async fn update(&self, id: Uuid, name: Option<String>) -> AppResult<Owner>;

    /// Delete owner by ID; a repeated delete surfaces the same NotFound
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Delete owner and every pet registered to them, atomically
    async fn delete_with_pets(&self, id: Uuid) -> AppResult<()>;

    /// List owners, newest first, with the page total
    async fn list(&self, page: &PaginationParams) -> AppResult<(Vec<Owner>, u64)>;
}

/// Concrete implementation of OwnerRepository backed by SeaORM
pub struct OwnerStore {
    db: DatabaseConnection,
}

impl OwnerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OwnerRepository for OwnerStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Owner>> {
        let result = OwnerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Owner::from))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let result = OwnerEntity::find()
            .filter(owner::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.is_some())
    }

    async fn create(&self, new_owner: NewOwner) -> AppResult<Owner> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(new_owner.email),
            name: Set(new_owner.name),
            password_hash: Set(new_owner.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Owner::from(model))
    }

    async fn update(&self, id: Uuid, name: Option<String>) -> AppResult<Owner> {
        let owner = OwnerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = owner.into();

        if let Some(name) = name {
            active.name = Set(name);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Owner::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = OwnerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn delete_with_pets(&self, id: Uuid) -> AppResult<()> {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        pet::Entity::delete_many()
            .filter(pet::Column::OwnerId.eq(id))
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        let result = OwnerEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Cascade delete rollback failed: {}", rollback_err);
            }
            return Err(AppError::NotFound);
        }

        txn.commit().await.map_err(AppError::from)?;
        Ok(())
    }

    async fn list(&self, page: &PaginationParams) -> AppResult<(Vec<Owner>, u64)> {
        let paginator = OwnerEntity::find()
            .order_by_desc(owner::Column::CreatedAt)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page.saturating_sub(1)).await?;

        Ok((models.into_iter().map(Owner::from).collect(), total))
    }
}
