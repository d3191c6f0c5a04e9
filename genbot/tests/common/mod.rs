//! Test doubles for genbot integration tests.
//!
//! [`MockTransport`] records every outbound call on an mpsc channel so tests can wait for
//! replies produced by background session tasks. [`StubGenerator`] returns scripted answers
//! and records the prompts it was called with.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use generation_client::{GenerationClient, GenerationError};
use genbot::{ChatSession, SessionFactory};
use genbot_core::{ChatId, GenbotError, InboundUpdate, Result, Transport, UpdateSource};
use tokio::sync::{mpsc, Notify};
use tokio::time::Instant;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Text { chat_id: ChatId, text: String },
    Typing { chat_id: ChatId },
}

impl Outbound {
    pub fn text(chat_id: ChatId, text: &str) -> Self {
        Outbound::Text {
            chat_id,
            text: text.to_string(),
        }
    }

    pub fn typing(chat_id: ChatId) -> Self {
        Outbound::Typing { chat_id }
    }
}

/// Transport that records calls; `fail_sends` makes every send_message return an error (after recording).
pub struct MockTransport {
    tx: mpsc::UnboundedSender<Outbound>,
    fail_sends: bool,
}

impl MockTransport {
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<Outbound>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                tx,
                fail_sends: false,
            }),
            rx,
        )
    }

    pub fn failing() -> (Arc<Self>, mpsc::UnboundedReceiver<Outbound>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                tx,
                fail_sends: true,
            }),
            rx,
        )
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<()> {
        let _ = self.tx.send(Outbound::text(chat_id, text));
        if self.fail_sends {
            return Err(GenbotError::Transport("send failed".to_string()));
        }
        Ok(())
    }

    async fn send_typing(&self, chat_id: ChatId) -> Result<()> {
        let _ = self.tx.send(Outbound::typing(chat_id));
        Ok(())
    }
}

/// Scripted behaviour of [`StubGenerator`].
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Always answer with this text.
    Text(String),
    /// Answer `echo: <prompt>`.
    Echo,
    /// Fail with an API error carrying this message.
    Fail(String),
    /// Fail with NoCandidates.
    NoCandidates,
}

/// Generation client returning scripted replies. Prompts equal to `gate_prompt` wait for `gate` first.
pub struct StubGenerator {
    reply: StubReply,
    prompts: Mutex<Vec<String>>,
    gate_prompt: Option<String>,
    gate: Arc<Notify>,
}

impl StubGenerator {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            prompts: Mutex::new(Vec::new()),
            gate_prompt: None,
            gate: Arc::new(Notify::new()),
        })
    }

    /// Like [`new`](Self::new), but a call with `prompt` blocks until the returned Notify fires.
    pub fn gated(reply: StubReply, prompt: &str) -> (Arc<Self>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let stub = Arc::new(Self {
            reply,
            prompts: Mutex::new(Vec::new()),
            gate_prompt: Some(prompt.to_string()),
            gate: gate.clone(),
        });
        (stub, gate)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for StubGenerator {
    async fn generate(&self, prompt: &str) -> generation_client::Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.gate_prompt.as_deref() == Some(prompt) {
            self.gate.notified().await;
        }
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Echo => Ok(format!("echo: {}", prompt)),
            StubReply::Fail(msg) => Err(GenerationError::Api(anyhow::anyhow!(msg.clone()))),
            StubReply::NoCandidates => Err(GenerationError::NoCandidates),
        }
    }
}

/// Factory sharing one transport and one stub generator; counts constructions and can fail for one chat.
pub struct TestSessionFactory {
    transport: Arc<MockTransport>,
    generator: Arc<StubGenerator>,
    created: AtomicUsize,
    fail_for: Mutex<Option<ChatId>>,
}

impl TestSessionFactory {
    pub fn new(transport: Arc<MockTransport>, generator: Arc<StubGenerator>) -> Arc<Self> {
        Arc::new(Self {
            transport,
            generator,
            created: AtomicUsize::new(0),
            fail_for: Mutex::new(None),
        })
    }

    pub fn fail_for(&self, chat_id: Option<ChatId>) {
        *self.fail_for.lock().unwrap() = chat_id;
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl SessionFactory for TestSessionFactory {
    fn create(&self, chat_id: ChatId) -> Result<ChatSession> {
        if *self.fail_for.lock().unwrap() == Some(chat_id) {
            return Err(GenbotError::Session("generation client unavailable".to_string()));
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(ChatSession::new(
            chat_id,
            self.transport.clone(),
            self.generator.clone(),
        ))
    }
}

/// Update source replaying scripted poll results, then pending forever. Records poll times.
pub struct ScriptedSource {
    script: VecDeque<Result<Vec<InboundUpdate>>>,
    pub poll_times: Arc<Mutex<Vec<Instant>>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<Vec<InboundUpdate>>>) -> Self {
        Self {
            script: script.into(),
            poll_times: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl UpdateSource for ScriptedSource {
    async fn poll(&mut self) -> Result<Vec<InboundUpdate>> {
        self.poll_times.lock().unwrap().push(Instant::now());
        match self.script.pop_front() {
            Some(result) => result,
            None => std::future::pending().await,
        }
    }
}

pub fn message(chat_id: ChatId, text: &str) -> InboundUpdate {
    InboundUpdate::Message {
        chat_id,
        text: Some(text.to_string()),
    }
}

/// Receives exactly `n` outbound calls, failing the test after 30 s.
pub async fn recv_n(rx: &mut mpsc::UnboundedReceiver<Outbound>, n: usize) -> Vec<Outbound> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let item = tokio::time::timeout(Duration::from_secs(30), rx.recv())
            .await
            .expect("timed out waiting for outbound call")
            .expect("transport channel closed");
        out.push(item);
    }
    out
}

/// Drains everything already recorded.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<Outbound>) -> Vec<Outbound> {
    let mut out = Vec::new();
    while let Ok(item) = rx.try_recv() {
        out.push(item);
    }
    out
}
