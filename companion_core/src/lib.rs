//! # Companion Core
//!
//! The conversational engine behind the MindfulMe chat companion. This crate
//! interfaces with `wellness_rules`, owns the trainable knowledge base, and
//! turns free-form user text into displayable assistant replies.
//!
//! ## Core Components
//!
//! - **knowledge_base**: Trainable trigger->response entries with a bundled
//!   default set and persist-on-change semantics
//! - **match_engine**: Longest-trigger-wins substring matching
//! - **composer**: Maps a match (or the fallback policy) into a reply payload
//!   and resolves action labels to navigation targets
//! - **storage**: The durable key-value slot the knowledge base persists into
//! - **conversation**: Session state, messages, and the typing-reveal model
//!
//! ## Design Philosophy
//!
//! - **Explainable**: Matching is deterministic substring containment, not
//!   fuzzy scoring - a user can always see why a reply was chosen
//! - **Session-Owned**: The knowledge store is an explicit value constructed
//!   once per session and passed in, never ambient global state
//! - **Never Stalls**: No match is never an error; the fallback policy always
//!   produces a reply

pub mod composer;
pub mod conversation;
pub mod knowledge_base;
pub mod match_engine;
pub mod storage;

pub use composer::*;
pub use conversation::*;
pub use knowledge_base::*;
pub use match_engine::*;
pub use storage::*;
