//! Character-level Markov model used to generate names.
//!
//! - `PrefixIndex`: prefix → observed successors, built from a corpus
//! - `NameModel`: random walk over the index producing one name per call
//! - `State` / `Successor`: one prefix and what may follow it

/// Prefix → successors index built from the corpus.
pub mod prefix_index;

/// Sampling procedure over a `PrefixIndex`.
pub mod name_model;

/// Single prefix state and its recorded successors.
pub mod state;

pub use name_model::{title_case, NameModel};
pub use prefix_index::PrefixIndex;
pub use state::{State, Successor};
