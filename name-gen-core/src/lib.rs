//! Markov-chain place-name generation library.
//!
//! This crate provides the name generation engine and its curation loop:
//! - Character-level prefix index built from a corpus of names
//! - Random-walk sampling of new names from that index
//! - Interactive curation (keep / queue / reject) folding decisions back into the corpus
//! - Non-interactive batch previews
//! - Line-delimited persistence of the name lists and CSV seed extraction
//!
//! File helpers are kept internal; everything an application needs to drive
//! a session is exposed through the public modules below.

/// Error type shared by every operation of the crate.
pub mod error;

/// Generator configuration (model, session, batch and file locations).
pub mod config;

/// Accepted, real and rejected name lists and their persistence.
pub mod corpus;

/// Prefix index, sampling model and title-casing.
pub mod model;

/// Non-interactive generation of novel names.
pub mod batch;

/// Interactive curation session and its operator console.
pub mod session;

/// Seed list extraction from a geographic places CSV.
pub mod extract;

/// I/O utilities (line lists, output paths).
///
/// Not exposed
pub(crate) mod io;

pub use error::NameGenError;
