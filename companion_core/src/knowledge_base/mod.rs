//! Knowledge Base module - the trainable collection of trigger->response
//! entries.
//!
//! The knowledge base consists of:
//! - **Items**: One stimulus-response unit each, with stress level and actions
//! - **Store**: Ordered collection with load/train/persist semantics
//! - **Defaults**: The bundled starter set shipped with the application

mod defaults;
mod item;
mod store;

pub use defaults::*;
pub use item::*;
pub use store::*;
