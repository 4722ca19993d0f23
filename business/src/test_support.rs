use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::purchase_history::model::{NewPurchaseEntry, PurchaseHistoryEntry, TopItemStat};
use crate::domain::purchase_history::repository::PurchaseHistoryRepository;
use crate::domain::shopping_item::model::{ShoppingItem, ShoppingItemChanges, ShoppingItemDraft};
use crate::domain::shopping_item::repository::ShoppingItemRepository;

mock! {
    pub ShoppingItemRepo {}

    #[async_trait]
    impl ShoppingItemRepository for ShoppingItemRepo {
        async fn get_all(&self) -> Result<Vec<ShoppingItem>, RepositoryError>;
        async fn insert(&self, draft: &ShoppingItemDraft) -> Result<ShoppingItem, RepositoryError>;
        async fn update(&self, id: Uuid, changes: &ShoppingItemChanges) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub PurchaseHistoryRepo {}

    #[async_trait]
    impl PurchaseHistoryRepository for PurchaseHistoryRepo {
        async fn insert_many(&self, entries: &[NewPurchaseEntry]) -> Result<u64, RepositoryError>;
        async fn get_recent(&self, limit: usize) -> Result<Vec<PurchaseHistoryEntry>, RepositoryError>;
        async fn get_since(&self, since: DateTime<Utc>) -> Result<Vec<PurchaseHistoryEntry>, RepositoryError>;
        async fn top_items(&self, limit: usize) -> Result<Vec<TopItemStat>, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn item(name: &str, quantity: u32, checked: bool) -> ShoppingItem {
    ShoppingItem::from_repository(
        Uuid::new_v4(),
        name.to_string(),
        quantity,
        "Other".to_string(),
        checked,
        Utc::now(),
    )
}

pub fn history_entry(name: &str, quantity: u32) -> PurchaseHistoryEntry {
    PurchaseHistoryEntry::from_repository(
        Uuid::new_v4(),
        name.to_string(),
        quantity,
        "Other".to_string(),
        Utc::now(),
    )
}

/// Backend stand-in keeping both collections in memory and counting calls.
#[derive(Default)]
pub struct InMemoryGateway {
    pub items: Mutex<Vec<ShoppingItem>>,
    pub history: Mutex<Vec<PurchaseHistoryEntry>>,
    pub calls: AtomicUsize,
}

impl InMemoryGateway {
    pub fn with_items(items: Vec<ShoppingItem>) -> Self {
        Self {
            items: Mutex::new(items),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ShoppingItemRepository for InMemoryGateway {
    async fn get_all(&self) -> Result<Vec<ShoppingItem>, RepositoryError> {
        self.record_call();
        Ok(self.items.lock().unwrap().clone())
    }

    async fn insert(&self, draft: &ShoppingItemDraft) -> Result<ShoppingItem, RepositoryError> {
        self.record_call();
        let item = ShoppingItem::from_repository(
            Uuid::new_v4(),
            draft.name.clone(),
            draft.quantity,
            draft.category.clone(),
            false,
            Utc::now(),
        );
        self.items.lock().unwrap().insert(0, item.clone());
        Ok(item)
    }

    async fn update(&self, id: Uuid, changes: &ShoppingItemChanges) -> Result<(), RepositoryError> {
        self.record_call();
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(RepositoryError::NotFound)?;
        if let Some(checked) = changes.checked {
            item.checked = checked;
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.record_call();
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, RepositoryError> {
        self.record_call();
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| !ids.contains(&item.id));
        Ok((before - items.len()) as u64)
    }
}

#[async_trait]
impl PurchaseHistoryRepository for InMemoryGateway {
    async fn insert_many(&self, entries: &[NewPurchaseEntry]) -> Result<u64, RepositoryError> {
        self.record_call();
        let mut history = self.history.lock().unwrap();
        for entry in entries {
            history.insert(
                0,
                PurchaseHistoryEntry::from_repository(
                    Uuid::new_v4(),
                    entry.item_name.clone(),
                    entry.quantity,
                    entry.category.clone(),
                    Utc::now(),
                ),
            );
        }
        Ok(entries.len() as u64)
    }

    async fn get_recent(&self, limit: usize) -> Result<Vec<PurchaseHistoryEntry>, RepositoryError> {
        self.record_call();
        Ok(self.history.lock().unwrap().iter().take(limit).cloned().collect())
    }

    async fn get_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<PurchaseHistoryEntry>, RepositoryError> {
        self.record_call();
        Ok(self
            .history
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.purchased_at >= since)
            .cloned()
            .collect())
    }

    async fn top_items(&self, limit: usize) -> Result<Vec<TopItemStat>, RepositoryError> {
        self.record_call();
        let history = self.history.lock().unwrap();
        let mut stats: Vec<TopItemStat> = Vec::new();
        for entry in history.iter() {
            match stats.iter_mut().find(|stat| stat.item_name == entry.item_name) {
                Some(stat) => stat.count += 1,
                None => stats.push(TopItemStat {
                    item_name: entry.item_name.clone(),
                    count: 1,
                }),
            }
        }
        stats.sort_by(|a, b| b.count.cmp(&a.count));
        stats.truncate(limit);
        Ok(stats)
    }
}
