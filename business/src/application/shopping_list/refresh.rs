use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::purchase_history::repository::PurchaseHistoryRepository;
use crate::domain::purchase_history::stats::week_start;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::settings::ShoppingListSettings;
use crate::domain::shopping_list::store::ShoppingListStore;
use crate::domain::shopping_list::use_cases::refresh::{
    RefreshAllUseCase, RefreshHistoryUseCase, RefreshShoppingItemsUseCase,
};

pub struct RefreshShoppingItemsUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub store: Arc<ShoppingListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefreshShoppingItemsUseCase for RefreshShoppingItemsUseCaseImpl {
    async fn execute(&self) -> Result<(), ShoppingListError> {
        let items = self.repository.get_all().await?;
        let count = items.len();

        if self.store.replace_items(items) {
            self.logger
                .debug(&format!("Active list resynced with {} items", count));
        } else {
            self.logger.debug("Store closed, dropping active list refresh");
        }
        Ok(())
    }
}

pub struct RefreshHistoryUseCaseImpl {
    pub repository: Arc<dyn PurchaseHistoryRepository>,
    pub store: Arc<ShoppingListStore>,
    pub settings: ShoppingListSettings,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefreshHistoryUseCase for RefreshHistoryUseCaseImpl {
    async fn execute(&self) -> Result<(), ShoppingListError> {
        let since = week_start(Utc::now());
        let (recent, weekly, top_items) = tokio::join!(
            self.repository
                .get_recent(self.settings.recent_purchases_limit),
            self.repository.get_since(since),
            self.repository.top_items(self.settings.top_items_limit),
        );

        if self.store.is_closed() {
            self.logger.debug("Store closed, dropping history refresh");
            return Ok(());
        }

        // Each view is replaced on its own; a failed read keeps its previous snapshot.
        let mut first_error = None;
        match recent {
            Ok(recent) => {
                self.logger
                    .debug(&format!("Recent purchases resynced with {} entries", recent.len()));
                self.store.replace_history(recent);
            }
            Err(err) => self.record_failure("recent purchases", err, &mut first_error),
        }
        match weekly {
            Ok(weekly) => {
                self.logger
                    .debug(&format!("Weekly history resynced with {} entries", weekly.len()));
                self.store.replace_weekly_history(weekly);
            }
            Err(err) => self.record_failure("weekly history", err, &mut first_error),
        }
        match top_items {
            Ok(top_items) => {
                self.logger
                    .debug(&format!("Top items resynced with {} entries", top_items.len()));
                self.store.replace_top_items(top_items);
            }
            Err(err) => self.record_failure("top items", err, &mut first_error),
        }

        match first_error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

impl RefreshHistoryUseCaseImpl {
    fn record_failure(
        &self,
        view: &str,
        err: RepositoryError,
        first_error: &mut Option<RepositoryError>,
    ) {
        self.logger
            .warn(&format!("Failed to refresh {}: {}", view, err));
        first_error.get_or_insert(err);
    }
}

pub struct RefreshAllUseCaseImpl {
    pub items: Arc<dyn RefreshShoppingItemsUseCase>,
    pub history: Arc<dyn RefreshHistoryUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefreshAllUseCase for RefreshAllUseCaseImpl {
    async fn execute(&self) -> Result<(), ShoppingListError> {
        self.logger.info("Refreshing shopping list and history");

        let (items, history) = tokio::join!(self.items.execute(), self.history.execute());
        items?;
        history?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::purchase_history::model::TopItemStat;
    use crate::test_support::{
        MockPurchaseHistoryRepo, MockShoppingItemRepo, history_entry, item, mock_logger,
    };
    use chrono::{Datelike, Timelike, Weekday};

    #[tokio::test]
    async fn should_overwrite_local_items_with_fetched_snapshot() {
        let store = Arc::new(ShoppingListStore::new());
        store.replace_items(vec![item("Stale", 1, true)]);
        let fresh = vec![item("Bread", 1, false), item("Milk", 2, true)];
        let fetched = fresh.clone();
        let mut mock_repo = MockShoppingItemRepo::new();
        mock_repo
            .expect_get_all()
            .returning(move || Ok(fetched.clone()));

        let result = RefreshShoppingItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            store: store.clone(),
            logger: mock_logger(),
        }
        .execute()
        .await;

        assert!(result.is_ok());
        assert_eq!(store.items(), fresh);
    }

    #[tokio::test]
    async fn should_drop_fetched_items_after_store_closed() {
        let store = Arc::new(ShoppingListStore::new());
        store.close();
        let mut mock_repo = MockShoppingItemRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![item("Bread", 1, false)]));

        let result = RefreshShoppingItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            store: store.clone(),
            logger: mock_logger(),
        }
        .execute()
        .await;

        assert!(result.is_ok());
        assert!(store.items().is_empty());
    }

    #[tokio::test]
    async fn should_fetch_history_with_configured_limits_since_monday() {
        let store = Arc::new(ShoppingListStore::new());
        let mut mock_repo = MockPurchaseHistoryRepo::new();
        mock_repo
            .expect_get_recent()
            .withf(|limit| *limit == 12)
            .returning(|_| Ok(vec![history_entry("Milk", 1), history_entry("Bread", 1)]));
        mock_repo
            .expect_get_since()
            .withf(|since| since.weekday() == Weekday::Mon && since.hour() == 0)
            .returning(|_| Ok(vec![history_entry("Milk", 1)]));
        mock_repo
            .expect_top_items()
            .withf(|limit| *limit == 3)
            .returning(|_| {
                Ok(vec![TopItemStat {
                    item_name: "Milk".to_string(),
                    count: 4,
                }])
            });
        let settings = ShoppingListSettings {
            recent_purchases_limit: 12,
            top_items_limit: 3,
            ..ShoppingListSettings::default()
        };

        let result = RefreshHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            store: store.clone(),
            settings,
            logger: mock_logger(),
        }
        .execute()
        .await;

        assert!(result.is_ok());
        assert_eq!(store.history().len(), 2);
        assert_eq!(store.weekly_history().len(), 1);
        assert_eq!(store.top_items()[0].count, 4);
    }

    #[tokio::test]
    async fn should_keep_previous_history_when_a_read_fails() {
        let store = Arc::new(ShoppingListStore::new());
        store.replace_history(vec![history_entry("Milk", 1)]);
        store.replace_top_items(vec![TopItemStat {
            item_name: "Milk".to_string(),
            count: 1,
        }]);
        let mut mock_repo = MockPurchaseHistoryRepo::new();
        mock_repo
            .expect_get_recent()
            .returning(|_| Err(RepositoryError::DatabaseError));
        mock_repo.expect_get_since().returning(|_| Ok(vec![]));
        mock_repo.expect_top_items().returning(|_| Ok(vec![]));

        let result = RefreshHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            store: store.clone(),
            settings: ShoppingListSettings::default(),
            logger: mock_logger(),
        }
        .execute()
        .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(RepositoryError::DatabaseError)
        ));
        assert_eq!(store.history().len(), 1);
        assert!(store.top_items().is_empty());
    }

    #[tokio::test]
    async fn should_update_recent_purchases_when_top_items_read_fails() {
        let store = Arc::new(ShoppingListStore::new());
        let mut mock_repo = MockPurchaseHistoryRepo::new();
        mock_repo
            .expect_get_recent()
            .returning(|_| Ok(vec![history_entry("Milk", 1)]));
        mock_repo
            .expect_get_since()
            .returning(|_| Ok(vec![history_entry("Milk", 1)]));
        mock_repo
            .expect_top_items()
            .returning(|_| Err(RepositoryError::Unreachable));

        let result = RefreshHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            store: store.clone(),
            settings: ShoppingListSettings::default(),
            logger: mock_logger(),
        }
        .execute()
        .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(RepositoryError::Unreachable)
        ));
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.history()[0].item_name, "Milk");
        assert_eq!(store.weekly_history().len(), 1);
    }

    #[tokio::test]
    async fn should_refresh_items_and_history_together() {
        let store = Arc::new(ShoppingListStore::new());
        let mut item_repo = MockShoppingItemRepo::new();
        item_repo
            .expect_get_all()
            .times(1)
            .returning(|| Ok(vec![item("Bread", 1, false)]));
        let mut history_repo = MockPurchaseHistoryRepo::new();
        history_repo
            .expect_get_recent()
            .times(1)
            .returning(|_| Ok(vec![history_entry("Milk", 1)]));
        history_repo.expect_get_since().times(1).returning(|_| Ok(vec![]));
        history_repo.expect_top_items().times(1).returning(|_| Ok(vec![]));

        let use_case = RefreshAllUseCaseImpl {
            items: Arc::new(RefreshShoppingItemsUseCaseImpl {
                repository: Arc::new(item_repo),
                store: store.clone(),
                logger: mock_logger(),
            }),
            history: Arc::new(RefreshHistoryUseCaseImpl {
                repository: Arc::new(history_repo),
                store: store.clone(),
                settings: ShoppingListSettings::default(),
                logger: mock_logger(),
            }),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.history().len(), 1);
    }

    #[tokio::test]
    async fn should_report_error_when_item_read_fails() {
        let store = Arc::new(ShoppingListStore::new());
        let mut item_repo = MockShoppingItemRepo::new();
        item_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::Unreachable));
        let mut history_repo = MockPurchaseHistoryRepo::new();
        history_repo.expect_get_recent().returning(|_| Ok(vec![]));
        history_repo.expect_get_since().returning(|_| Ok(vec![]));
        history_repo.expect_top_items().returning(|_| Ok(vec![]));

        let use_case = RefreshAllUseCaseImpl {
            items: Arc::new(RefreshShoppingItemsUseCaseImpl {
                repository: Arc::new(item_repo),
                store: store.clone(),
                logger: mock_logger(),
            }),
            history: Arc::new(RefreshHistoryUseCaseImpl {
                repository: Arc::new(history_repo),
                store,
                settings: ShoppingListSettings::default(),
                logger: mock_logger(),
            }),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(RepositoryError::Unreachable)
        ));
    }
}
