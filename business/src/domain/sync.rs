use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Which collection a change notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    ActiveList,
    History,
}

impl ChangeKind {
    pub async fn notify(self, listener: &dyn ChangeListener) {
        match self {
            ChangeKind::ActiveList => listener.on_active_list_changed().await,
            ChangeKind::History => listener.on_history_changed().await,
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeKind::ActiveList => write!(f, "shopping_items"),
            ChangeKind::History => write!(f, "purchase_history"),
        }
    }
}

impl std::str::FromStr for ChangeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shopping_items" => Ok(ChangeKind::ActiveList),
            "purchase_history" => Ok(ChangeKind::History),
            _ => Err(format!("Invalid change kind: {}", s)),
        }
    }
}

/// Receives change notifications from the backend.
#[async_trait]
pub trait ChangeListener: Send + Sync {
    async fn on_active_list_changed(&self);
    async fn on_history_changed(&self);
}

/// Handle on an active subscription.
pub trait Subscription: Send + Sync {
    /// Stops delivering notifications. Calling it twice is harmless.
    fn cancel(&self);
    fn is_active(&self) -> bool;
}

/// Backend change-notification feed.
#[async_trait]
pub trait ChangeFeed: Send + Sync {
    async fn subscribe(
        &self,
        listener: Arc<dyn ChangeListener>,
    ) -> Result<Box<dyn Subscription>, RepositoryError>;
}
