use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shopping_item::model::{ShoppingItem, ShoppingItemChanges, ShoppingItemDraft};
use business::domain::shopping_item::repository::ShoppingItemRepository;

use super::entity::ShoppingItemEntity;
use crate::db::map_sqlx_error;

pub struct ShoppingItemRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn quantity_column(quantity: u32) -> Result<i32, RepositoryError> {
    i32::try_from(quantity).map_err(|_| RepositoryError::Persistence)
}

#[async_trait]
impl ShoppingItemRepository for ShoppingItemRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<ShoppingItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingItemEntity>(
            "SELECT id, name, quantity, category, checked, created_at FROM shopping_items ORDER BY checked ASC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn insert(&self, draft: &ShoppingItemDraft) -> Result<ShoppingItem, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingItemEntity>(
            r#"INSERT INTO shopping_items (name, quantity, category)
            VALUES ($1, $2, $3)
            RETURNING id, name, quantity, category, checked, created_at"#,
        )
        .bind(&draft.name)
        .bind(quantity_column(draft.quantity)?)
        .bind(&draft.category)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &ShoppingItemChanges,
    ) -> Result<(), RepositoryError> {
        let quantity = changes.quantity.map(quantity_column).transpose()?;
        let result = sqlx::query(
            r#"UPDATE shopping_items SET
                name = COALESCE($2, name),
                quantity = COALESCE($3, quantity),
                category = COALESCE($4, category),
                checked = COALESCE($5, checked)
            WHERE id = $1"#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(quantity)
        .bind(changes.category.as_deref())
        .bind(changes.checked)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shopping_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, RepositoryError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query("DELETE FROM shopping_items WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
