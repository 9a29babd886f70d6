//! # Wellness Rules
//!
//! The shared vocabulary crate for MindfulMe - stress levels, navigation
//! targets, and the daily wisdom catalog. This crate is the single source of
//! truth for wellness domain values and does not contain any conversational
//! logic.

pub mod navigation;
pub mod stress;
pub mod wisdom;

pub use navigation::*;
pub use stress::*;
pub use wisdom::*;
