//! Dialog state machine: `(state, input) -> (next state, action)`.
//!
//! The transition function is pure; [`ChatSession`](crate::session::ChatSession) executes the
//! returned [`Action`] against the transport and the generation client.

/// Reply to `/start`.
pub const GREETING_TEXT: &str = "Hello! Send /generate to ask me something.";
/// Reply to `/generate`.
pub const PROMPT_REQUEST_TEXT: &str = "Please enter a prompt:";
/// Shown when the generation call fails, whatever the cause.
pub const GENERATION_ERROR_TEXT: &str =
    "Sorry, I couldn't generate an answer. Please try again later.";
/// Shown when the model answers with an empty text; Telegram rejects empty messages.
pub const EMPTY_ANSWER_TEXT: &str = "(The model returned an empty answer.)";

const START_COMMAND: &str = "/start";
const GENERATE_COMMAND: &str = "/generate";

/// Per-chat dialog state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    /// Waiting for a recognized command.
    #[default]
    Idle,
    /// The next input is a prompt, not a command.
    AwaitingPrompt,
}

/// Side effect chosen by [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SendGreeting,
    RequestPrompt,
    /// Show typing, run the generation call with the input as prompt, send the result.
    Generate,
    Ignore,
}

/// Command recognized in `Idle` by prefix match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Generate,
}

impl Command {
    /// Prefix match on the input with leading whitespace removed, so `/start@my_bot` counts.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim_start();
        if input.starts_with(START_COMMAND) {
            Some(Command::Start)
        } else if input.starts_with(GENERATE_COMMAND) {
            Some(Command::Generate)
        } else {
            None
        }
    }
}

/// Total transition function. In `AwaitingPrompt` every input, commands included, is a prompt.
pub fn transition(state: DialogState, input: &str) -> (DialogState, Action) {
    match state {
        DialogState::Idle => match Command::parse(input) {
            Some(Command::Start) => (DialogState::Idle, Action::SendGreeting),
            Some(Command::Generate) => (DialogState::AwaitingPrompt, Action::RequestPrompt),
            None => (DialogState::Idle, Action::Ignore),
        },
        DialogState::AwaitingPrompt => (DialogState::Idle, Action::Generate),
    }
}
