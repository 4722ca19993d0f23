use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgListener;
use tokio::task::JoinHandle;

use business::domain::errors::RepositoryError;
use business::domain::sync::{ChangeFeed, ChangeKind, ChangeListener, Subscription};

use crate::db::map_sqlx_error;

/// Channel the table triggers publish on. The payload is the table name.
pub const CHANGE_CHANNEL: &str = "shopping_changes";

const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Change feed backed by Postgres `LISTEN`/`NOTIFY`.
pub struct PgChangeFeed {
    pool: PgPool,
}

impl PgChangeFeed {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChangeFeed for PgChangeFeed {
    async fn subscribe(
        &self,
        listener: Arc<dyn ChangeListener>,
    ) -> Result<Box<dyn Subscription>, RepositoryError> {
        let mut pg_listener = PgListener::connect_with(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        pg_listener
            .listen(CHANGE_CHANNEL)
            .await
            .map_err(map_sqlx_error)?;

        tracing::info!("Listening for changes on {}", CHANGE_CHANNEL);
        let task = tokio::spawn(forward_notifications(pg_listener, listener));
        Ok(Box::new(PgSubscription::new(task)))
    }
}

async fn forward_notifications(mut pg_listener: PgListener, listener: Arc<dyn ChangeListener>) {
    loop {
        match pg_listener.try_recv().await {
            Ok(Some(notification)) => match notification.payload().parse::<ChangeKind>() {
                Ok(kind) => kind.notify(listener.as_ref()).await,
                Err(err) => tracing::warn!("Ignoring notification: {}", err),
            },
            // Connection dropped; the listener reconnects on the next call.
            Ok(None) => {
                tracing::warn!("Change feed connection lost, resyncing");
                resync(listener.as_ref()).await;
            }
            Err(err) => {
                tracing::error!("Change feed error: {}", err);
                tokio::time::sleep(RETRY_DELAY).await;
                resync(listener.as_ref()).await;
            }
        }
    }
}

// Notifications sent while disconnected are lost.
async fn resync(listener: &dyn ChangeListener) {
    ChangeKind::ActiveList.notify(listener).await;
    ChangeKind::History.notify(listener).await;
}

/// Owns the forwarding task. Cancelling or dropping it stops delivery.
pub struct PgSubscription {
    task: JoinHandle<()>,
    cancelled: AtomicBool,
}

impl PgSubscription {
    fn new(task: JoinHandle<()>) -> Self {
        Self {
            task,
            cancelled: AtomicBool::new(false),
        }
    }
}

impl Subscription for PgSubscription {
    fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            tracing::info!("Change feed subscription cancelled");
        }
        self.task.abort();
    }

    fn is_active(&self) -> bool {
        !self.cancelled.load(Ordering::SeqCst) && !self.task.is_finished()
    }
}

impl Drop for PgSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
