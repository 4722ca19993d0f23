use std::sync::Arc;

use tokio::sync::Mutex;

use business::domain::logger::Logger;
use business::domain::shopping_list::settings::ShoppingListSettings;
use business::domain::shopping_list::store::ShoppingListStore;
use business::domain::shopping_list::use_cases::refresh::RefreshAllUseCase;
use business::domain::sync::{ChangeFeed, Subscription};
use logger::TracingLogger;
use persistence::change_feed::PgChangeFeed;
use persistence::purchase_history::repository::PurchaseHistoryRepositoryPostgres;
use persistence::shopping_item::repository::ShoppingItemRepositoryPostgres;

use business::application::purchase_history::get_recent::GetRecentPurchasesUseCaseImpl;
use business::application::purchase_history::get_weekly_stats::GetWeeklyStatsUseCaseImpl;
use business::application::shopping_item::add::AddShoppingItemUseCaseImpl;
use business::application::shopping_item::delete::DeleteShoppingItemUseCaseImpl;
use business::application::shopping_item::get_list::GetShoppingListUseCaseImpl;
use business::application::shopping_item::quick_add::QuickAddUseCaseImpl;
use business::application::shopping_item::toggle_checked::ToggleCheckedUseCaseImpl;
use business::application::shopping_list::refresh::{
    RefreshAllUseCaseImpl, RefreshHistoryUseCaseImpl, RefreshShoppingItemsUseCaseImpl,
};
use business::application::shopping_list::sync::SyncShoppingListUseCaseImpl;
use business::application::shopping_list::validate_purchases::ValidatePurchasesUseCaseImpl;
use business::application::suggestion::get_suggestions::GetSuggestionsUseCaseImpl;
use business::application::suggestion::get_top_items::GetTopItemsUseCaseImpl;

use crate::api::category::routes::CategoryApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::purchase::routes::PurchaseApi;
use crate::api::shopping_item::routes::ShoppingItemApi;
use crate::api::shopping_list::routes::ShoppingListApi;
use crate::api::suggestion::routes::SuggestionApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub category_api: CategoryApi,
    pub shopping_item_api: ShoppingItemApi,
    pub shopping_list_api: ShoppingListApi,
    pub purchase_api: PurchaseApi,
    pub suggestion_api: SuggestionApi,
    pub store: Arc<ShoppingListStore>,
    pub subscription: Box<dyn Subscription>,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, settings: ShoppingListSettings) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let store = Arc::new(ShoppingListStore::new());

        // Infrastructure adapters
        let item_repository = Arc::new(ShoppingItemRepositoryPostgres::new(pool.clone()));
        let history_repository = Arc::new(PurchaseHistoryRepositoryPostgres::new(pool.clone()));
        let change_feed = PgChangeFeed::new(pool);

        // Resynchronization
        let refresh_items = Arc::new(RefreshShoppingItemsUseCaseImpl {
            repository: item_repository.clone(),
            store: store.clone(),
            logger: logger.clone(),
        });
        let refresh_history = Arc::new(RefreshHistoryUseCaseImpl {
            repository: history_repository.clone(),
            store: store.clone(),
            settings: settings.clone(),
            logger: logger.clone(),
        });
        let refresh_all = Arc::new(RefreshAllUseCaseImpl {
            items: refresh_items.clone(),
            history: refresh_history.clone(),
            logger: logger.clone(),
        });
        let sync_listener = Arc::new(SyncShoppingListUseCaseImpl {
            items: refresh_items,
            history: refresh_history.clone(),
            logger: logger.clone(),
        });

        // Shopping item use cases
        let get_list_use_case = Arc::new(GetShoppingListUseCaseImpl {
            store: store.clone(),
        });
        let add_use_case = Arc::new(AddShoppingItemUseCaseImpl {
            repository: item_repository.clone(),
            store: store.clone(),
            logger: logger.clone(),
        });
        let toggle_checked_use_case = Arc::new(ToggleCheckedUseCaseImpl {
            repository: item_repository.clone(),
            store: store.clone(),
            rollback_policy: settings.rollback_policy,
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteShoppingItemUseCaseImpl {
            repository: item_repository.clone(),
            store: store.clone(),
            rollback_policy: settings.rollback_policy,
            logger: logger.clone(),
        });
        let quick_add_use_case = Arc::new(QuickAddUseCaseImpl {
            add_use_case: add_use_case.clone(),
            logger: logger.clone(),
        });
        let validate_use_case = Arc::new(ValidatePurchasesUseCaseImpl {
            item_repository,
            history_repository,
            store: store.clone(),
            history_refresher: refresh_history,
            in_flight: Mutex::new(()),
            logger: logger.clone(),
        });

        // Read models
        let get_recent_use_case = Arc::new(GetRecentPurchasesUseCaseImpl {
            store: store.clone(),
        });
        let get_weekly_stats_use_case = Arc::new(GetWeeklyStatsUseCaseImpl {
            store: store.clone(),
        });
        let get_suggestions_use_case = Arc::new(GetSuggestionsUseCaseImpl {
            store: store.clone(),
            settings,
        });
        let get_top_items_use_case = Arc::new(GetTopItemsUseCaseImpl {
            store: store.clone(),
        });

        // Subscribe before the initial fetch so no change slips in between.
        let subscription = change_feed.subscribe(sync_listener).await?;
        if let Err(err) = refresh_all.execute().await {
            logger.warn(&format!(
                "Initial load failed, serving an empty list until the next change: {}",
                err
            ));
        }

        Ok(Self {
            health_api: HealthApi::new(),
            category_api: CategoryApi::new(),
            shopping_item_api: ShoppingItemApi::new(
                get_list_use_case,
                add_use_case,
                toggle_checked_use_case,
                delete_use_case,
            ),
            shopping_list_api: ShoppingListApi::new(validate_use_case, refresh_all),
            purchase_api: PurchaseApi::new(get_recent_use_case, get_weekly_stats_use_case),
            suggestion_api: SuggestionApi::new(
                get_suggestions_use_case,
                get_top_items_use_case,
                quick_add_use_case,
            ),
            store,
            subscription,
        })
    }
}
