//! Conversation state - messages, the chat session, and the typing reveal.
//!
//! Everything here is synchronous and single-threaded. The "thinking" pause
//! and per-character reveal are presentation affordances: the session exposes
//! their timings as data and lets the host schedule the wall-clock waits, so
//! the matching pipeline itself stays instantaneous.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use wellness_rules::StressLevel;

use crate::composer::{ReplyPayload, ResponseComposer};
use crate::knowledge_base::{KnowledgeStore, TrainingError};
use crate::match_engine::MatchEngine;
use crate::storage::StorageSlot;

/// Artificial pause between receiving user input and matching, purely to
/// simulate thinking. Cancellable only by tearing the session down.
pub const THINKING_DELAY: Duration = Duration::from_secs(1);

/// Per-character delay of the typing reveal.
pub const TYPING_CHAR_DELAY: Duration = Duration::from_millis(15);

/// Maximum accepted message length, in characters.
pub const MAX_INPUT_CHARS: usize = 1000;

/// The assistant message every session opens with.
pub const OPENING_MESSAGE: &str =
    "Hello, Team Alpha. I'm your safe space. How are you feeling right now?";

/// A one-tap conversation starter offered on the empty chat screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStarter {
    pub label: &'static str,
    pub prompt: &'static str,
}

/// The conversation starters shown to a fresh session.
pub const QUICK_STARTERS: [QuickStarter; 4] = [
    QuickStarter {
        label: "I'm feeling anxious",
        prompt: "I'm feeling a bit anxious right now.",
    },
    QuickStarter {
        label: "Help me unwind",
        prompt: "I need help unwinding after a long day.",
    },
    QuickStarter {
        label: "Motivation boost",
        prompt: "I could use a little motivation boost.",
    },
    QuickStarter {
        label: "Just chatting",
        prompt: "Just wanted to check in and chat.",
    },
];

/// Unique identifier for messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    /// Create a new random message ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One line of the visible conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,

    /// Stress signal; set only on assistant messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<StressLevel>,

    /// Suggested action labels; set only on assistant messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,

    /// Whether the content is still being revealed on screen.
    pub pending: bool,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::User,
            content: content.into(),
            created_at: Utc::now(),
            stress_level: None,
            actions: Vec::new(),
            pending: false,
        }
    }

    /// Create an assistant message from a composed payload.
    pub fn assistant(payload: &ReplyPayload) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::Assistant,
            content: payload.text.clone(),
            created_at: Utc::now(),
            stress_level: Some(payload.stress_level),
            actions: payload.actions.clone(),
            pending: true,
        }
    }

    /// Create a non-pending assistant notice (opening line, training
    /// confirmations).
    pub fn assistant_notice(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::Assistant,
            content: content.into(),
            created_at: Utc::now(),
            stress_level: None,
            actions: Vec::new(),
            pending: false,
        }
    }
}

/// Time-sliced progressive disclosure of a reply.
///
/// Pure: given how much wall-clock time has elapsed since the reveal began,
/// returns the prefix the host should display. Superseding a reveal is
/// simply dropping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingReveal {
    text: String,
    char_delay: Duration,
}

impl TypingReveal {
    /// Create a reveal for `text` using the standard per-character delay.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            char_delay: TYPING_CHAR_DELAY,
        }
    }

    /// The full text being revealed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The prefix visible after `elapsed` time.
    pub fn visible_at(&self, elapsed: Duration) -> &str {
        if self.char_delay.is_zero() {
            return &self.text;
        }
        let chars = (elapsed.as_millis() / self.char_delay.as_millis()) as usize;
        match self.text.char_indices().nth(chars) {
            Some((byte_index, _)) => &self.text[..byte_index],
            None => &self.text,
        }
    }

    /// Whether the whole text is visible after `elapsed` time.
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.visible_at(elapsed).len() == self.text.len()
    }

    /// Total time the reveal takes.
    pub fn duration(&self) -> Duration {
        self.char_delay * self.text.chars().count() as u32
    }
}

/// A composed reply ready for timed disclosure.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    /// Id of the assistant message appended to the transcript.
    pub message_id: MessageId,
    /// The composed payload (text, stress level, actions).
    pub payload: ReplyPayload,
    /// Reveal schedule for the payload text.
    pub reveal: TypingReveal,
}

/// Why a send was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("message is {len} characters, the limit is {MAX_INPUT_CHARS}")]
    MessageTooLong { len: usize },

    #[error("a reply is already pending")]
    ReplyPending,
}

/// A single-user chat session over the conversational core.
///
/// Owns the knowledge store, match engine, composer, and random source (a
/// seedable generator, injected so fallback selection is assertable). The
/// send flow is split in two so the host can insert the thinking pause:
/// [`ChatSession::submit`] records the user message, and
/// [`ChatSession::complete_reply`] - called after [`THINKING_DELAY`] - runs
/// the match pipeline and appends the reply.
#[derive(Debug)]
pub struct ChatSession<S: StorageSlot> {
    store: KnowledgeStore<S>,
    engine: MatchEngine,
    composer: ResponseComposer,
    rng: StdRng,
    messages: Vec<Message>,
    pending_input: Option<String>,
}

impl<S: StorageSlot> ChatSession<S> {
    /// Start a session over a loaded store with an entropy-seeded RNG.
    pub fn new(store: KnowledgeStore<S>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Start a session with an explicit random source (deterministic tests).
    pub fn with_rng(store: KnowledgeStore<S>, rng: StdRng) -> Self {
        Self {
            store,
            engine: MatchEngine::new(),
            composer: ResponseComposer::new(),
            rng,
            messages: vec![Message::assistant_notice(OPENING_MESSAGE)],
            pending_input: None,
        }
    }

    /// Record a user message and queue it for matching.
    ///
    /// Rejects blank input, over-length input, and sends while a reply is
    /// still pending (the caller enforces the pause, the session enforces
    /// the rule). Returns the recorded message.
    pub fn submit(&mut self, text: &str) -> Result<&Message, SendError> {
        if self.pending_input.is_some() {
            return Err(SendError::ReplyPending);
        }
        if text.trim().is_empty() {
            return Err(SendError::EmptyMessage);
        }
        let len = text.chars().count();
        if len > MAX_INPUT_CHARS {
            return Err(SendError::MessageTooLong { len });
        }

        self.pending_input = Some(text.to_string());
        self.messages.push(Message::user(text));
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Match and compose the reply for the queued message.
    ///
    /// Intended to run after [`THINKING_DELAY`]. Returns `None` when nothing
    /// was queued. The assistant message is appended in the pending state;
    /// the host drives its reveal and then calls
    /// [`ChatSession::finish_reveal`].
    pub fn complete_reply(&mut self) -> Option<AssistantReply> {
        let input = self.pending_input.take()?;

        let result = self.engine.find_match(&input, &self.store);
        let payload = self.composer.compose(&result, &input, &mut self.rng);

        let message = Message::assistant(&payload);
        let message_id = message.id;
        let reveal = TypingReveal::new(payload.text.clone());
        self.messages.push(message);

        Some(AssistantReply {
            message_id,
            payload,
            reveal,
        })
    }

    /// Mark a revealed assistant message as fully shown.
    pub fn finish_reveal(&mut self, id: MessageId) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
            message.pending = false;
        }
    }

    /// Train a new trigger->response pair and append the confirmation notice.
    ///
    /// Returns the confirmation message on success; on validation failure the
    /// store and the transcript are unchanged.
    pub fn train(&mut self, trigger: &str, response: &str) -> Result<&Message, TrainingError> {
        let item = self.store.add_item(trigger, response)?;
        let confirmation = format!(
            "Create new memory! When you ask \"{}\", I will now reply: \"{}\"",
            item.trigger, item.response
        );
        self.messages.push(Message::assistant_notice(confirmation));
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Whether a send is queued and awaiting its reply.
    pub fn is_awaiting_reply(&self) -> bool {
        self.pending_input.is_some()
    }

    /// The visible transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The session's knowledge store.
    pub fn store(&self) -> &KnowledgeStore<S> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge_base::default_knowledge_base;
    use crate::storage::MemorySlot;

    fn session() -> ChatSession<MemorySlot> {
        let store = KnowledgeStore::load(MemorySlot::new());
        ChatSession::with_rng(store, StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_session_opens_with_greeting() {
        let session = session();
        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Assistant);
        assert_eq!(messages[0].content, OPENING_MESSAGE);
        assert!(!messages[0].pending);
    }

    #[test]
    fn test_submit_then_complete_reply() {
        let mut session = session();

        let user = session.submit("I feel really anxious today").unwrap();
        assert_eq!(user.role, Role::User);
        assert!(session.is_awaiting_reply());

        let reply = session.complete_reply().unwrap();
        assert!(!session.is_awaiting_reply());
        // The bundled "anxious" item wins.
        assert_eq!(reply.payload.stress_level, StressLevel::Medium);
        assert_eq!(reply.payload.actions, vec!["Breathing Exercise"]);

        let last = session.messages().last().unwrap();
        assert_eq!(last.id, reply.message_id);
        assert_eq!(last.role, Role::Assistant);
        assert!(last.pending);
    }

    #[test]
    fn test_hello_matches_bundled_item_not_courtesy() {
        let mut session = session();
        session.submit("hello").unwrap();

        let reply = session.complete_reply().unwrap();
        let bundled = default_knowledge_base();
        let hello = bundled.iter().find(|item| item.trigger == "hello").unwrap();
        assert_eq!(reply.payload.text, hello.response);
    }

    #[test]
    fn test_second_send_while_pending_is_rejected() {
        let mut session = session();
        session.submit("hello").unwrap();

        assert_eq!(session.submit("hi again").unwrap_err(), SendError::ReplyPending);

        session.complete_reply().unwrap();
        assert!(session.submit("hi again").is_ok());
    }

    #[test]
    fn test_blank_and_oversized_sends_rejected() {
        let mut session = session();

        assert_eq!(session.submit("   ").unwrap_err(), SendError::EmptyMessage);

        let long = "a".repeat(MAX_INPUT_CHARS + 1);
        assert!(matches!(
            session.submit(&long).unwrap_err(),
            SendError::MessageTooLong { .. }
        ));
        assert!(!session.is_awaiting_reply());
    }

    #[test]
    fn test_complete_reply_without_submit() {
        let mut session = session();
        assert!(session.complete_reply().is_none());
    }

    #[test]
    fn test_finish_reveal_clears_pending() {
        let mut session = session();
        session.submit("hello").unwrap();
        let reply = session.complete_reply().unwrap();

        session.finish_reveal(reply.message_id);
        let message = session
            .messages()
            .iter()
            .find(|m| m.id == reply.message_id)
            .unwrap();
        assert!(!message.pending);
    }

    #[test]
    fn test_train_then_match_roundtrip() {
        let mut session = session();

        let confirmation = session.train("burnout", "Your energy is worth protecting.").unwrap();
        assert!(confirmation.content.contains("burnout"));
        assert!(confirmation.content.contains("Your energy is worth protecting."));

        session.submit("I think this is burnout").unwrap();
        let reply = session.complete_reply().unwrap();
        assert_eq!(reply.payload.text, "Your energy is worth protecting.");
        assert_eq!(reply.payload.stress_level, StressLevel::Low);
        assert!(reply.payload.actions.is_empty());
    }

    #[test]
    fn test_train_rejects_blank_without_transcript_noise() {
        let mut session = session();
        let before = session.messages().len();

        assert!(session.train("", "x").is_err());
        assert!(session.train("x", "  ").is_err());
        assert_eq!(session.messages().len(), before);
    }

    #[test]
    fn test_typing_reveal_slices() {
        let reveal = TypingReveal::new("breathe");

        assert_eq!(reveal.visible_at(Duration::ZERO), "");
        assert_eq!(reveal.visible_at(TYPING_CHAR_DELAY * 3), "bre");
        assert_eq!(reveal.visible_at(TYPING_CHAR_DELAY * 100), "breathe");
        assert!(reveal.is_complete(reveal.duration()));
    }

    #[test]
    fn test_typing_reveal_respects_char_boundaries() {
        let reveal = TypingReveal::new("día ☀");

        // Every slice must be valid UTF-8 prefix, never mid-codepoint.
        for i in 0..=6 {
            let _ = reveal.visible_at(TYPING_CHAR_DELAY * i);
        }
        assert_eq!(reveal.visible_at(TYPING_CHAR_DELAY * 2), "dí");
    }

    #[test]
    fn test_quick_starters_hit_bundled_items() {
        // The anxiety starter lands on the bundled "anxious" item.
        let store = KnowledgeStore::load(MemorySlot::new());
        let engine = MatchEngine::new();

        let starter = QUICK_STARTERS[0];
        let result = engine.find_match(starter.prompt, &store);
        assert_eq!(result.item().unwrap().trigger, "anxious");
    }
}
