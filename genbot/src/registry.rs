//! Session registry: one [`ChatSession`] per chat, created on first contact.
//!
//! **Data flow:** `enqueue` → `resolve` (create-if-absent) → per-chat queue → `process_queue_loop` → `ChatSession::handle`.
//! Each chat has its own FIFO queue drained by its own task: inputs for one chat are applied in
//! order, and a slow generation call in one chat never delays another.

use std::sync::Arc;

use dashmap::DashMap;
use generation_client::{CohereGenerationClient, EnvGenerationConfig, GenerationClient};
use genbot_core::{ChatId, GenbotError, InboundUpdate, Result, Transport};
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

use crate::session::ChatSession;

/// Sender to a chat's processing queue.
type QueueSender = mpsc::UnboundedSender<InboundUpdate>;

/// Builds the session for a chat seen for the first time.
pub trait SessionFactory: Send + Sync {
    fn create(&self, chat_id: ChatId) -> Result<ChatSession>;
}

/// Production factory: shared Telegram transport, a fresh Cohere client per session.
pub struct CohereSessionFactory {
    transport: Arc<dyn Transport>,
    generation_config: EnvGenerationConfig,
}

impl CohereSessionFactory {
    pub fn new(transport: Arc<dyn Transport>, generation_config: EnvGenerationConfig) -> Self {
        Self {
            transport,
            generation_config,
        }
    }
}

impl SessionFactory for CohereSessionFactory {
    fn create(&self, chat_id: ChatId) -> Result<ChatSession> {
        let generator = CohereGenerationClient::from_config(&self.generation_config)
            .map_err(|e| GenbotError::Session(format!("generation client: {}", e)))?;
        let generator: Arc<dyn GenerationClient> = Arc::new(generator);
        Ok(ChatSession::new(chat_id, self.transport.clone(), generator))
    }
}

/// A registered session and the sender feeding its queue.
#[derive(Clone)]
struct SessionEntry {
    session: Arc<ChatSession>,
    queue: QueueSender,
}

/// Concurrent chat id → session map with atomic create-if-absent.
pub struct SessionRegistry {
    factory: Arc<dyn SessionFactory>,
    sessions: DashMap<ChatId, SessionEntry>,
}

impl SessionRegistry {
    pub fn new(factory: Arc<dyn SessionFactory>) -> Self {
        Self {
            factory,
            sessions: DashMap::new(),
        }
    }

    /// Returns the chat's session, creating it (and its queue task) if absent.
    /// Construction failures are not cached; the next call retries.
    pub fn resolve(&self, chat_id: ChatId) -> Result<Arc<ChatSession>> {
        Ok(self.resolve_entry(chat_id)?.session)
    }

    /// Existing session for the chat, without creating one.
    pub fn get(&self, chat_id: ChatId) -> Option<Arc<ChatSession>> {
        self.sessions.get(&chat_id).map(|e| e.session.clone())
    }

    /// Number of sessions created so far.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Resolves the update's session and queues the update on it. Must be called inside a tokio runtime.
    #[instrument(skip(self, update), fields(chat_id = update.chat_id(), kind = update.kind()))]
    pub fn enqueue(&self, update: InboundUpdate) -> Result<()> {
        let chat_id = update.chat_id();
        let entry = self.resolve_entry(chat_id)?;
        entry.queue.send(update).map_err(|_| {
            GenbotError::Session(format!("queue for chat {} is closed", chat_id))
        })
    }

    fn resolve_entry(&self, chat_id: ChatId) -> Result<SessionEntry> {
        let entry = self
            .sessions
            .entry(chat_id)
            .or_try_insert_with(|| self.create_entry(chat_id))?;
        Ok(entry.clone())
    }

    fn create_entry(&self, chat_id: ChatId) -> Result<SessionEntry> {
        let session = Arc::new(self.factory.create(chat_id)?);
        let (tx, rx) = mpsc::unbounded_channel::<InboundUpdate>();
        tokio::spawn(process_queue_loop(rx, session.clone()));
        info!(chat_id, "Created chat session");
        Ok(SessionEntry { session, queue: tx })
    }
}

/// Consumes a chat's queue in order, one input at a time.
async fn process_queue_loop(mut rx: mpsc::UnboundedReceiver<InboundUpdate>, session: Arc<ChatSession>) {
    while let Some(update) = rx.recv().await {
        let state = session.handle(update.payload()).await;
        info!(
            chat_id = session.chat_id(),
            kind = update.kind(),
            state = ?state,
            "Processed update"
        );
    }
    warn!(chat_id = session.chat_id(), "Session queue closed");
}

