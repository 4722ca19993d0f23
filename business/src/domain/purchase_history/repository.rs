use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::RepositoryError;

use super::model::{NewPurchaseEntry, PurchaseHistoryEntry, TopItemStat};

/// Gateway over the append-only `purchase_history` ledger.
#[async_trait]
pub trait PurchaseHistoryRepository: Send + Sync {
    /// Inserts all entries as a single batch.
    async fn insert_many(&self, entries: &[NewPurchaseEntry]) -> Result<u64, RepositoryError>;
    /// Most recent first.
    async fn get_recent(&self, limit: usize) -> Result<Vec<PurchaseHistoryEntry>, RepositoryError>;
    /// Entries purchased at or after `since`, most recent first.
    async fn get_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<PurchaseHistoryEntry>, RepositoryError>;
    /// Item names ranked by purchase count, highest first.
    async fn top_items(&self, limit: usize) -> Result<Vec<TopItemStat>, RepositoryError>;
}
