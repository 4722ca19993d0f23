use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::purchase_history::model::NewPurchaseEntry;
use crate::domain::purchase_history::repository::PurchaseHistoryRepository;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::store::ShoppingListStore;
use crate::domain::shopping_list::use_cases::refresh::RefreshHistoryUseCase;
use crate::domain::shopping_list::use_cases::validate_purchases::ValidatePurchasesUseCase;

/// Records checked items in history, then removes them from the active list.
///
/// The two remote writes are independent requests. History is always
/// written first so that a failure in between leaves the items checked on
/// the list instead of losing a purchase. Validations run one at a time so
/// that overlapping calls never record the same checked item twice.
pub struct ValidatePurchasesUseCaseImpl {
    pub item_repository: Arc<dyn ShoppingItemRepository>,
    pub history_repository: Arc<dyn PurchaseHistoryRepository>,
    pub store: Arc<ShoppingListStore>,
    pub history_refresher: Arc<dyn RefreshHistoryUseCase>,
    pub in_flight: Mutex<()>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ValidatePurchasesUseCase for ValidatePurchasesUseCaseImpl {
    async fn execute(&self) -> Result<usize, ShoppingListError> {
        // Held for the whole run so a second call only sees the cleared snapshot.
        let _guard = self.in_flight.lock().await;

        let checked = self.store.checked_items();
        if checked.is_empty() {
            self.logger.debug("No checked items to validate");
            return Ok(0);
        }

        let entries: Vec<NewPurchaseEntry> = checked.iter().map(NewPurchaseEntry::from).collect();
        let ids: Vec<Uuid> = checked.iter().map(|item| item.id).collect();

        self.logger
            .info(&format!("Validating {} purchases", ids.len()));

        if let Err(err) = self.history_repository.insert_many(&entries).await {
            self.logger
                .error(&format!("Purchases not recorded: {}", err));
            return Err(ShoppingListError::HistoryWriteFailed(err));
        }

        if let Err(err) = self.item_repository.delete_many(&ids).await {
            self.logger.warn(&format!(
                "{} purchases recorded but still on the list: {}",
                ids.len(),
                err
            ));
            return Err(ShoppingListError::ItemsNotCleared(err));
        }

        let removed = self.store.remove_items(&ids);
        if removed != ids.len() {
            self.logger.debug(&format!(
                "{} validated items were already gone locally",
                ids.len() - removed
            ));
        }

        if let Err(err) = self.history_refresher.execute().await {
            self.logger
                .warn(&format!("History views not refreshed after validation: {}", err));
        }

        self.logger
            .info(&format!("Validated {} purchases", ids.len()));
        Ok(ids.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::shopping_list::refresh::RefreshHistoryUseCaseImpl;
    use crate::domain::errors::RepositoryError;
    use crate::domain::purchase_history::model::{PurchaseHistoryEntry, TopItemStat};
    use crate::domain::shopping_item::model::ShoppingItem;
    use crate::domain::shopping_list::settings::ShoppingListSettings;
    use crate::test_support::{
        InMemoryGateway, MockPurchaseHistoryRepo, MockShoppingItemRepo, history_entry, item,
        mock_logger,
    };
    use chrono::{DateTime, Utc};
    use mockall::Sequence;
    use proptest::prelude::*;

    /// Gives other tasks a turn while the history write is in flight.
    struct SlowHistory(Arc<InMemoryGateway>);

    #[async_trait]
    impl PurchaseHistoryRepository for SlowHistory {
        async fn insert_many(&self, entries: &[NewPurchaseEntry]) -> Result<u64, RepositoryError> {
            tokio::task::yield_now().await;
            self.0.insert_many(entries).await
        }

        async fn get_recent(&self, limit: usize) -> Result<Vec<PurchaseHistoryEntry>, RepositoryError> {
            self.0.get_recent(limit).await
        }

        async fn get_since(
            &self,
            since: DateTime<Utc>,
        ) -> Result<Vec<PurchaseHistoryEntry>, RepositoryError> {
            self.0.get_since(since).await
        }

        async fn top_items(&self, limit: usize) -> Result<Vec<TopItemStat>, RepositoryError> {
            self.0.top_items(limit).await
        }
    }

    fn refresher(
        repository: Arc<dyn PurchaseHistoryRepository>,
        store: Arc<ShoppingListStore>,
    ) -> Arc<dyn RefreshHistoryUseCase> {
        Arc::new(RefreshHistoryUseCaseImpl {
            repository,
            store,
            settings: ShoppingListSettings::default(),
            logger: mock_logger(),
        })
    }

    fn use_case(
        item_repository: Arc<dyn ShoppingItemRepository>,
        history_repository: Arc<dyn PurchaseHistoryRepository>,
        store: Arc<ShoppingListStore>,
    ) -> ValidatePurchasesUseCaseImpl {
        ValidatePurchasesUseCaseImpl {
            item_repository,
            history_repository: history_repository.clone(),
            store: store.clone(),
            history_refresher: refresher(history_repository, store),
            in_flight: Mutex::new(()),
            logger: mock_logger(),
        }
    }

    fn store_with(items: Vec<ShoppingItem>) -> Arc<ShoppingListStore> {
        let store = Arc::new(ShoppingListStore::new());
        store.replace_items(items);
        store
    }

    #[tokio::test]
    async fn should_move_checked_item_into_history() {
        let bread = item("Bread", 1, false);
        let milk = item("Milk", 2, true);
        let milk_id = milk.id;
        let store = store_with(vec![bread.clone(), milk]);

        let mut seq = Sequence::new();
        let mut history_repo = MockPurchaseHistoryRepo::new();
        let mut item_repo = MockShoppingItemRepo::new();
        history_repo
            .expect_insert_many()
            .withf(|entries| {
                entries.len() == 1
                    && entries[0].item_name == "Milk"
                    && entries[0].quantity == 2
                    && entries[0].category == "Other"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(1));
        item_repo
            .expect_delete_many()
            .withf(move |ids| ids.len() == 1 && ids[0] == milk_id)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(1));
        history_repo
            .expect_get_recent()
            .withf(|limit| *limit == 30)
            .returning(|_| Ok(vec![history_entry("Milk", 2)]));
        history_repo
            .expect_get_since()
            .returning(|_| Ok(vec![history_entry("Milk", 2)]));
        history_repo.expect_top_items().returning(|_| {
            Ok(vec![TopItemStat {
                item_name: "Milk".to_string(),
                count: 1,
            }])
        });

        let result = use_case(Arc::new(item_repo), Arc::new(history_repo), store.clone())
            .execute()
            .await;

        assert_eq!(result.unwrap(), 1);
        assert_eq!(store.items(), vec![bread]);
        let history = store.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].item_name, "Milk");
        assert_eq!(history[0].quantity, 2);
        assert_eq!(store.top_items().len(), 1);
    }

    #[tokio::test]
    async fn should_do_nothing_when_no_item_checked() {
        let items = vec![item("Bread", 1, false), item("Milk", 1, false)];
        let store = store_with(items.clone());
        let mut item_repo = MockShoppingItemRepo::new();
        item_repo.expect_delete_many().never();
        let mut history_repo = MockPurchaseHistoryRepo::new();
        history_repo.expect_insert_many().never();
        history_repo.expect_get_recent().never();

        let result = use_case(Arc::new(item_repo), Arc::new(history_repo), store.clone())
            .execute()
            .await;

        assert_eq!(result.unwrap(), 0);
        assert_eq!(store.items(), items);
    }

    #[tokio::test]
    async fn should_keep_items_when_history_write_fails() {
        let items = vec![item("Milk", 1, true)];
        let store = store_with(items.clone());
        let mut item_repo = MockShoppingItemRepo::new();
        item_repo.expect_delete_many().never();
        let mut history_repo = MockPurchaseHistoryRepo::new();
        history_repo
            .expect_insert_many()
            .returning(|_| Err(RepositoryError::Unreachable));

        let result = use_case(Arc::new(item_repo), Arc::new(history_repo), store.clone())
            .execute()
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::HistoryWriteFailed(RepositoryError::Unreachable)
        ));
        assert_eq!(store.items(), items);
    }

    #[tokio::test]
    async fn should_keep_items_checked_when_removal_fails_after_recording() {
        let items = vec![item("Milk", 1, true), item("Eggs", 6, true)];
        let store = store_with(items.clone());
        let mut item_repo = MockShoppingItemRepo::new();
        item_repo
            .expect_delete_many()
            .returning(|_| Err(RepositoryError::Persistence));
        let mut history_repo = MockPurchaseHistoryRepo::new();
        history_repo.expect_insert_many().returning(|_| Ok(2));

        let result = use_case(Arc::new(item_repo), Arc::new(history_repo), store.clone())
            .execute()
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::ItemsNotCleared(RepositoryError::Persistence)
        ));
        assert_eq!(store.items(), items);
        assert_eq!(store.checked_items().len(), 2);
    }

    #[tokio::test]
    async fn should_succeed_when_refresh_after_validation_fails() {
        let store = store_with(vec![item("Milk", 1, true)]);
        let mut item_repo = MockShoppingItemRepo::new();
        item_repo.expect_delete_many().returning(|_| Ok(1));
        let mut history_repo = MockPurchaseHistoryRepo::new();
        history_repo.expect_insert_many().returning(|_| Ok(1));
        history_repo
            .expect_get_recent()
            .returning(|_| Err(RepositoryError::Unreachable));
        history_repo.expect_get_since().returning(|_| Ok(vec![]));
        history_repo.expect_top_items().returning(|_| Ok(vec![]));

        let result = use_case(Arc::new(item_repo), Arc::new(history_repo), store.clone())
            .execute()
            .await;

        assert_eq!(result.unwrap(), 1);
        assert!(store.items().is_empty());
    }

    #[tokio::test]
    async fn should_be_no_op_when_validated_again() {
        let gateway = Arc::new(InMemoryGateway::with_items(vec![
            item("Bread", 1, false),
            item("Milk", 2, true),
        ]));
        let store = store_with(gateway.items.lock().unwrap().clone());
        let use_case = use_case(gateway.clone(), gateway.clone(), store.clone());

        assert_eq!(use_case.execute().await.unwrap(), 1);
        let calls = gateway.call_count();
        assert_eq!(use_case.execute().await.unwrap(), 0);

        assert_eq!(gateway.call_count(), calls);
        assert_eq!(gateway.history.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_record_checked_item_once_when_validations_overlap() {
        let gateway = Arc::new(InMemoryGateway::with_items(vec![
            item("Bread", 1, false),
            item("Milk", 2, true),
        ]));
        let store = store_with(gateway.items.lock().unwrap().clone());
        let use_case = use_case(
            gateway.clone(),
            Arc::new(SlowHistory(gateway.clone())),
            store.clone(),
        );

        let (first, second) = tokio::join!(use_case.execute(), use_case.execute());

        let mut validated = vec![first.unwrap(), second.unwrap()];
        validated.sort();
        assert_eq!(validated, vec![0, 1]);
        let history = gateway.history.lock().unwrap().clone();
        assert_eq!(history.iter().filter(|e| e.item_name == "Milk").count(), 1);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].name, "Bread");
    }

    proptest! {
        #[test]
        fn should_move_exactly_the_checked_items(
            specs in prop::collection::vec(("[A-Za-z]{1,6}", 1u32..5, any::<bool>()), 0..12),
            previous_purchases in 0usize..4,
        ) {
            let items: Vec<ShoppingItem> = specs
                .iter()
                .map(|(name, quantity, checked)| item(name, *quantity, *checked))
                .collect();
            let gateway = Arc::new(InMemoryGateway::with_items(items.clone()));
            for i in 0..previous_purchases {
                gateway.history.lock().unwrap().push(history_entry(&format!("old-{}", i), 1));
            }
            let store = store_with(items.clone());
            let use_case = use_case(gateway.clone(), gateway.clone(), store.clone());
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

            let validated = runtime.block_on(use_case.execute()).unwrap();

            let checked: Vec<&ShoppingItem> = items.iter().filter(|i| i.checked).collect();
            let unchecked: Vec<ShoppingItem> = items.iter().filter(|i| !i.checked).cloned().collect();
            prop_assert_eq!(validated, checked.len());
            prop_assert_eq!(store.items(), unchecked.clone());
            prop_assert_eq!(gateway.items.lock().unwrap().clone(), unchecked);

            let history = gateway.history.lock().unwrap().clone();
            prop_assert_eq!(history.len(), previous_purchases + checked.len());
            for purchased in &checked {
                let recorded = history
                    .iter()
                    .filter(|e| e.item_name == purchased.name && e.quantity == purchased.quantity)
                    .count();
                let expected = checked
                    .iter()
                    .filter(|c| c.name == purchased.name && c.quantity == purchased.quantity)
                    .count();
                prop_assert_eq!(recorded, expected);
            }
        }
    }
}
