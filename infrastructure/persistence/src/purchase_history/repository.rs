use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::purchase_history::model::{
    NewPurchaseEntry, PurchaseHistoryEntry, TopItemStat,
};
use business::domain::purchase_history::repository::PurchaseHistoryRepository;

use super::entity::{PurchaseHistoryEntity, TopItemEntity};
use crate::db::map_sqlx_error;
use crate::shopping_item::repository::quantity_column;

pub struct PurchaseHistoryRepositoryPostgres {
    pool: PgPool,
}

impl PurchaseHistoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn limit_param(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

#[async_trait]
impl PurchaseHistoryRepository for PurchaseHistoryRepositoryPostgres {
    async fn insert_many(&self, entries: &[NewPurchaseEntry]) -> Result<u64, RepositoryError> {
        if entries.is_empty() {
            return Ok(0);
        }
        let rows = entries
            .iter()
            .map(|entry| Ok((entry, quantity_column(entry.quantity)?)))
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO purchase_history (item_name, quantity, category) ");
        builder.push_values(rows, |mut row, (entry, quantity)| {
            row.push_bind(entry.item_name.clone())
                .push_bind(quantity)
                .push_bind(entry.category.clone());
        });

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn get_recent(&self, limit: usize) -> Result<Vec<PurchaseHistoryEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, PurchaseHistoryEntity>(
            "SELECT id, item_name, quantity, category, purchased_at FROM purchase_history ORDER BY purchased_at DESC LIMIT $1",
        )
        .bind(limit_param(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<PurchaseHistoryEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, PurchaseHistoryEntity>(
            "SELECT id, item_name, quantity, category, purchased_at FROM purchase_history WHERE purchased_at >= $1 ORDER BY purchased_at DESC",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn top_items(&self, limit: usize) -> Result<Vec<TopItemStat>, RepositoryError> {
        let entities = sqlx::query_as::<_, TopItemEntity>(
            "SELECT item_name, purchase_count FROM get_top_items($1)",
        )
        .bind(i32::try_from(limit).unwrap_or(i32::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
