//! Dispatcher: polls the transport and routes every update to its chat's session.
//!
//! The loop never returns. Poll failures are logged and retried after a fixed delay;
//! the only way to stop it is to terminate the process.

use std::sync::Arc;
use std::time::Duration;

use genbot_core::{InboundUpdate, Result, UpdateSource};
use tracing::{error, info, instrument, warn};

use crate::registry::SessionRegistry;

/// Default delay before retrying a failed poll.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

pub struct Dispatcher {
    registry: Arc<SessionRegistry>,
    retry_delay: Duration,
}

impl Dispatcher {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self {
            registry,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    /// Routes one update. Returns false when the update was dropped because its
    /// session could not be created.
    pub fn dispatch(&self, update: InboundUpdate) -> bool {
        let chat_id = update.chat_id();
        match self.registry.enqueue(update) {
            Ok(()) => true,
            Err(e) => {
                error!(chat_id, error = %e, "Dropping update: session unavailable");
                false
            }
        }
    }

    /// One loop iteration: poll once and route the batch. Returns how many updates were queued.
    pub async fn poll_once<S>(&self, source: &mut S) -> Result<usize>
    where
        S: UpdateSource + ?Sized,
    {
        let batch = source.poll().await?;
        let mut queued = 0;
        for update in batch {
            if self.dispatch(update) {
                queued += 1;
            }
        }
        Ok(queued)
    }

    /// Runs the receive loop forever.
    #[instrument(skip(self, source))]
    pub async fn run<S>(&self, mut source: S)
    where
        S: UpdateSource,
    {
        info!(retry_delay_secs = self.retry_delay.as_secs(), "Dispatcher started");
        loop {
            match self.poll_once(&mut source).await {
                Ok(0) => {}
                Ok(queued) => info!(queued, sessions = self.registry.len(), "Dispatched batch"),
                Err(e) => {
                    warn!(error = %e, "Error polling updates; retrying");
                    tokio::time::sleep(self.retry_delay).await;
                }
            }
        }
    }
}
