use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::use_cases::refresh::{
    RefreshHistoryUseCase, RefreshShoppingItemsUseCase,
};
use crate::domain::sync::ChangeListener;

/// Reacts to backend change notifications by refetching the affected
/// collection. Refresh failures are logged; the next notification retries.
pub struct SyncShoppingListUseCaseImpl {
    pub items: Arc<dyn RefreshShoppingItemsUseCase>,
    pub history: Arc<dyn RefreshHistoryUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ChangeListener for SyncShoppingListUseCaseImpl {
    async fn on_active_list_changed(&self) {
        self.logger.debug("Active list changed remotely");
        if let Err(err) = self.items.execute().await {
            self.logger
                .error(&format!("Active list resync failed: {}", err));
        }
    }

    async fn on_history_changed(&self) {
        self.logger.debug("Purchase history changed remotely");
        if let Err(err) = self.history.execute().await {
            self.logger.error(&format!("History resync failed: {}", err));
        }
    }
}
