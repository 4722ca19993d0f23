use std::sync::Arc;

use chrono::Utc;

use crate::domain::purchase_history::model::PurchaseHistoryEntry;
use crate::domain::purchase_history::stats::{WeeklyStats, week_start, weekly_stats};
use crate::domain::purchase_history::use_cases::get_weekly_stats::GetWeeklyStatsUseCase;
use crate::domain::shopping_list::store::ShoppingListStore;

pub struct GetWeeklyStatsUseCaseImpl {
    pub store: Arc<ShoppingListStore>,
}

impl GetWeeklyStatsUseCase for GetWeeklyStatsUseCaseImpl {
    fn execute(&self) -> WeeklyStats {
        // The cached week may predate a Monday rollover until the next resync.
        let since = week_start(Utc::now());
        let this_week: Vec<PurchaseHistoryEntry> = self
            .store
            .weekly_history()
            .into_iter()
            .filter(|entry| entry.purchased_at >= since)
            .collect();
        weekly_stats(&this_week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn entry(name: &str, quantity: u32, category: &str, age: Duration) -> PurchaseHistoryEntry {
        PurchaseHistoryEntry::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            quantity,
            category.to_string(),
            week_start(Utc::now()) + age,
        )
    }

    #[test]
    fn should_summarize_current_week() {
        let store = Arc::new(ShoppingListStore::new());
        store.replace_weekly_history(vec![
            entry("Milk", 2, "Dairy", Duration::minutes(5)),
            entry("Milk", 1, "Dairy", Duration::minutes(3)),
            entry("Bread", 1, "Bakery", Duration::minutes(1)),
        ]);

        let stats = GetWeeklyStatsUseCaseImpl { store }.execute();

        assert_eq!(stats.items_purchased, 3);
        assert_eq!(stats.total_units, 4);
        assert_eq!(stats.top_category.as_deref(), Some("Dairy"));
        assert_eq!(stats.top_item.as_deref(), Some("Milk"));
    }

    #[test]
    fn should_ignore_entries_from_previous_week() {
        let store = Arc::new(ShoppingListStore::new());
        store.replace_weekly_history(vec![
            entry("Milk", 1, "Dairy", Duration::minutes(1)),
            entry("Wine", 6, "Drinks", -Duration::hours(2)),
        ]);

        let stats = GetWeeklyStatsUseCaseImpl { store }.execute();

        assert_eq!(stats.items_purchased, 1);
        assert_eq!(stats.total_units, 1);
        assert_eq!(stats.top_category.as_deref(), Some("Dairy"));
    }

    #[test]
    fn should_return_empty_stats_without_purchases() {
        let store = Arc::new(ShoppingListStore::new());

        assert_eq!(GetWeeklyStatsUseCaseImpl { store }.execute(), WeeklyStats::default());
    }
}
