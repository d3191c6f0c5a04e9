//! Integration tests for [`ChatSession`]: dialog transitions and their outbound effects.
//!
//! **BDD style**: Given a fresh session, when inputs arrive, then the right messages are sent
//! and the state ends where the transition table says.

mod common;

use common::{drain, MockTransport, Outbound, StubGenerator, StubReply};
use genbot::{
    ChatSession, DialogState, EMPTY_ANSWER_TEXT, GENERATION_ERROR_TEXT, GREETING_TEXT,
    PROMPT_REQUEST_TEXT,
};

const CHAT: i64 = 4242;

/// **Test: /start on a fresh session sends exactly the greeting and stays Idle.**
#[tokio::test]
async fn start_sends_greeting_and_stays_idle() {
    let (transport, mut rx) = MockTransport::with_receiver();
    let generator = StubGenerator::new(StubReply::Echo);
    let session = ChatSession::new(CHAT, transport, generator.clone());

    let state = session.handle("/start").await;

    assert_eq!(state, DialogState::Idle);
    assert_eq!(session.state().await, DialogState::Idle);
    assert_eq!(drain(&mut rx), vec![Outbound::text(CHAT, GREETING_TEXT)]);
    assert!(generator.prompts().is_empty());
}

/// **Test: /generate on a fresh session asks for a prompt and moves to AwaitingPrompt.**
#[tokio::test]
async fn generate_requests_prompt() {
    let (transport, mut rx) = MockTransport::with_receiver();
    let session = ChatSession::new(CHAT, transport, StubGenerator::new(StubReply::Echo));

    let state = session.handle("/generate").await;

    assert_eq!(state, DialogState::AwaitingPrompt);
    assert_eq!(drain(&mut rx), vec![Outbound::text(CHAT, PROMPT_REQUEST_TEXT)]);
}

/// **Test: round trip [/generate, "tell me a joke"] → prompt request, typing, answer; ends Idle.**
#[tokio::test]
async fn generate_round_trip() {
    let (transport, mut rx) = MockTransport::with_receiver();
    let generator = StubGenerator::new(StubReply::Text("why did...".to_string()));
    let session = ChatSession::new(CHAT, transport, generator.clone());

    session.handle("/generate").await;
    let state = session.handle("tell me a joke").await;

    assert_eq!(state, DialogState::Idle);
    assert_eq!(
        drain(&mut rx),
        vec![
            Outbound::text(CHAT, PROMPT_REQUEST_TEXT),
            Outbound::typing(CHAT),
            Outbound::text(CHAT, "why did..."),
        ]
    );
    assert_eq!(generator.prompts(), vec!["tell me a joke".to_string()]);
}

/// **Test: a generation error shows the fixed error text, never the raw error, and returns to Idle.**
#[tokio::test]
async fn generation_error_sends_fixed_message() {
    let (transport, mut rx) = MockTransport::with_receiver();
    let generator = StubGenerator::new(StubReply::Fail("quota exceeded for key abc".to_string()));
    let session = ChatSession::new(CHAT, transport, generator.clone());

    session.handle("/generate").await;
    let state = session.handle("anything").await;

    assert_eq!(state, DialogState::Idle);
    let sent = drain(&mut rx);
    assert_eq!(sent.last(), Some(&Outbound::text(CHAT, GENERATION_ERROR_TEXT)));
    assert!(!sent
        .iter()
        .any(|o| matches!(o, Outbound::Text { text, .. } if text.contains("quota"))));
    assert_eq!(generator.prompts().len(), 1);
}

/// **Test: zero candidates is handled like any other generation error.**
#[tokio::test]
async fn no_candidates_sends_fixed_message() {
    let (transport, mut rx) = MockTransport::with_receiver();
    let session = ChatSession::new(CHAT, transport, StubGenerator::new(StubReply::NoCandidates));

    session.handle("/generate").await;
    let state = session.handle("hello").await;

    assert_eq!(state, DialogState::Idle);
    assert_eq!(drain(&mut rx).last(), Some(&Outbound::text(CHAT, GENERATION_ERROR_TEXT)));
}

/// **Test: /generate while AwaitingPrompt is taken literally as the prompt.**
#[tokio::test]
async fn generate_while_awaiting_is_prompt_text() {
    let (transport, mut rx) = MockTransport::with_receiver();
    let generator = StubGenerator::new(StubReply::Echo);
    let session = ChatSession::new(CHAT, transport, generator.clone());

    session.handle("/generate").await;
    let state = session.handle("/generate").await;

    assert_eq!(state, DialogState::Idle);
    assert_eq!(generator.prompts(), vec!["/generate".to_string()]);
    assert_eq!(drain(&mut rx).last(), Some(&Outbound::text(CHAT, "echo: /generate")));
}

/// **Test: an empty prompt (non-text event) is still sent to the generator.**
#[tokio::test]
async fn empty_prompt_is_passed_through() {
    let (transport, _rx) = MockTransport::with_receiver();
    let generator = StubGenerator::new(StubReply::Echo);
    let session = ChatSession::new(CHAT, transport, generator.clone());

    session.handle("/generate").await;
    session.handle("").await;

    assert_eq!(generator.prompts(), vec![String::new()]);
}

/// **Test: a blank answer is replaced by the fallback text.**
#[tokio::test]
async fn blank_answer_uses_fallback() {
    let (transport, mut rx) = MockTransport::with_receiver();
    let session = ChatSession::new(
        CHAT,
        transport,
        StubGenerator::new(StubReply::Text("  \n".to_string())),
    );

    session.handle("/generate").await;
    session.handle("say nothing").await;

    assert_eq!(drain(&mut rx).last(), Some(&Outbound::text(CHAT, EMPTY_ANSWER_TEXT)));
}

/// **Test: unrecognized input in Idle sends nothing.**
#[tokio::test]
async fn idle_ignores_other_text() {
    let (transport, mut rx) = MockTransport::with_receiver();
    let generator = StubGenerator::new(StubReply::Echo);
    let session = ChatSession::new(CHAT, transport, generator.clone());

    let state = session.handle("hi bot").await;

    assert_eq!(state, DialogState::Idle);
    assert!(drain(&mut rx).is_empty());
    assert!(generator.prompts().is_empty());
}

/// **Test: failing sends do not block the transition.**
#[tokio::test]
async fn send_failure_still_transitions() {
    let (transport, _rx) = MockTransport::failing();
    let session = ChatSession::new(CHAT, transport, StubGenerator::new(StubReply::Echo));

    assert_eq!(session.handle("/generate").await, DialogState::AwaitingPrompt);
    assert_eq!(session.handle("prompt").await, DialogState::Idle);
}
