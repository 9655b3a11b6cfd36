//! Interactive curation of generated names.
//!
//! A session samples candidates, asks the operator to keep, queue or reject
//! each novel one, resolves the queue on quit and saves the corpus.

/// Operator I/O abstraction and its line-based implementation.
pub mod console;

/// Parsing of operator answers.
pub mod decision;

/// The session state machine.
pub mod machine;

pub use console::{Console, LineConsole};
pub use decision::{Decision, QueueChoice, Resolution};
pub use machine::{CurationSession, Phase, SessionReport};
