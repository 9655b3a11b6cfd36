use std::collections::HashMap;

use super::state::{State, Successor};
use crate::config::validate_prefix_length;
use crate::error::NameGenError;

/// Character used to pad the left edge of every name.
pub const SENTINEL: char = ' ';

/// Maps every fixed-length prefix of the corpus to the successors seen after it.
///
/// # Responsibilities
/// - Slide a window of `prefix_length` characters over each blank-padded name
/// - Record the character (or the terminator) following each window
/// - Answer lookups with an explicit "not found" (`None`)
///
/// # Invariants
/// - `prefix_length` is between 1 and 10
/// - Every key holds exactly `prefix_length` characters
/// - Every stored state has at least one successor
#[derive(Clone, Debug)]
pub struct PrefixIndex {
	prefix_length: usize,
	states: HashMap<String, State>,
}

impl PrefixIndex {
	/// Builds an index from a corpus of names.
	///
	/// Names are trimmed; names that are empty after trimming are ignored.
	/// Casing is kept as is.
	///
	/// # Errors
	/// Returns `Configuration` if `prefix_length` is outside `1..=10`,
	/// before anything is built.
	pub fn build<I, S>(corpus: I, prefix_length: usize) -> Result<Self, NameGenError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		validate_prefix_length(prefix_length)?;

		let mut index = Self { prefix_length, states: HashMap::new() };
		let mut names = 0usize;
		for name in corpus {
			let name = name.as_ref().trim();
			if name.is_empty() {
				continue;
			}
			index.add_name(name);
			names += 1;
		}

		log::debug!(
			"built prefix index: {} names, {} prefixes, prefix length {}",
			names,
			index.states.len(),
			prefix_length
		);
		Ok(index)
	}

	/// Adds one name to the index.
	///
	/// `"Ana"` with a prefix length of 2 records
	/// `"  "→A`, `" A"→n`, `"An"→a`, `"na"→terminator`.
	fn add_name(&mut self, name: &str) {
		let padded: Vec<char> = std::iter::repeat_n(SENTINEL, self.prefix_length)
			.chain(name.chars())
			.collect();
		let len = padded.len() - self.prefix_length;

		for i in 0..len {
			let prefix: String = padded[i..i + self.prefix_length].iter().collect();
			self.record(prefix, Successor::Char(padded[i + self.prefix_length]));
		}

		let last: String = padded[len..].iter().collect();
		self.record(last, Successor::Terminator);
	}

	fn record(&mut self, prefix: String, successor: Successor) {
		self.states
			.entry(prefix)
			.or_insert_with_key(|key| State::new(key))
			.add_successor(successor);
	}

	/// Returns the state recorded for `prefix`, or `None` if no training
	/// name ever produced it.
	pub fn successors_of(&self, prefix: &str) -> Option<&State> {
		self.states.get(prefix)
	}

	/// The all-blank prefix every walk starts from.
	pub fn start_prefix(&self) -> String {
		std::iter::repeat_n(SENTINEL, self.prefix_length).collect()
	}

	pub fn prefix_length(&self) -> usize {
		self.prefix_length
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Iterates over every stored prefix state.
	pub fn states(&self) -> impl Iterator<Item = &State> {
		self.states.values()
	}
}
