use crate::domain::purchase_history::stats::PurchaseDay;

/// Recent purchases grouped by day, most recent day first.
pub trait GetRecentPurchasesUseCase: Send + Sync {
    fn execute(&self) -> Vec<PurchaseDay>;
}
