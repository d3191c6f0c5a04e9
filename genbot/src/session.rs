//! One conversation: dialog state plus handles to the transport and the generation client.

use std::sync::Arc;

use generation_client::GenerationClient;
use genbot_core::{ChatId, Transport};
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::dialog::{
    transition, Action, DialogState, EMPTY_ANSWER_TEXT, GENERATION_ERROR_TEXT, GREETING_TEXT,
    PROMPT_REQUEST_TEXT,
};

/// Per-chat session. The state mutex is held for the whole handling of one input,
/// so inputs for the same chat never interleave.
pub struct ChatSession {
    chat_id: ChatId,
    state: Mutex<DialogState>,
    transport: Arc<dyn Transport>,
    generator: Arc<dyn GenerationClient>,
}

impl ChatSession {
    /// Creates a session in [`DialogState::Idle`].
    pub fn new(
        chat_id: ChatId,
        transport: Arc<dyn Transport>,
        generator: Arc<dyn GenerationClient>,
    ) -> Self {
        Self {
            chat_id,
            state: Mutex::new(DialogState::Idle),
            transport,
            generator,
        }
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    /// Current state; waits for any in-flight input to finish.
    pub async fn state(&self) -> DialogState {
        *self.state.lock().await
    }

    /// Applies one input (message text or callback data) and returns the new state.
    #[instrument(skip(self, input), fields(chat_id = self.chat_id))]
    pub async fn handle(&self, input: &str) -> DialogState {
        let mut state = self.state.lock().await;
        let (next, action) = transition(*state, input);
        debug!(from = ?*state, to = ?next, action = ?action, "Dialog transition");

        match action {
            Action::SendGreeting => self.send(GREETING_TEXT).await,
            Action::RequestPrompt => self.send(PROMPT_REQUEST_TEXT).await,
            Action::Generate => self.generate_and_reply(input).await,
            Action::Ignore => {}
        }

        *state = next;
        next
    }

    async fn generate_and_reply(&self, prompt: &str) {
        if let Err(e) = self.transport.send_typing(self.chat_id).await {
            warn!(chat_id = self.chat_id, error = %e, "Failed to send typing action");
        }

        info!(chat_id = self.chat_id, prompt_len = prompt.len(), "Generating answer");
        match self.generator.generate(prompt).await {
            Ok(text) if text.trim().is_empty() => {
                warn!(chat_id = self.chat_id, "Generation returned empty text");
                self.send(EMPTY_ANSWER_TEXT).await;
            }
            Ok(text) => {
                info!(chat_id = self.chat_id, answer_len = text.len(), "Generation succeeded");
                self.send(&text).await;
            }
            Err(e) => {
                error!(chat_id = self.chat_id, error = %e, "Generation failed");
                self.send(GENERATION_ERROR_TEXT).await;
            }
        }
    }

    /// Sends a message; failures are logged and do not affect the dialog state.
    async fn send(&self, text: &str) {
        if let Err(e) = self.transport.send_message(self.chat_id, text).await {
            error!(chat_id = self.chat_id, error = %e, "Failed to send message");
        }
    }
}
