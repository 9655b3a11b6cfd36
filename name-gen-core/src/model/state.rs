use rand::Rng;
use rand::seq::IndexedRandom;

/// Something that can follow a prefix: a character or the end of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Successor {
	Char(char),
	Terminator,
}

/// Represents one prefix of the index.
///
/// A `State` corresponds to a fixed-length prefix (`key`) and stores every
/// successor observed after it, in training order, duplicates included.
/// Conceptually this is a node of a Markov chain where each recorded
/// occurrence is one equally weighted outgoing edge.
///
/// ## Invariants
/// - All successors belong to the same `key`
/// - A state stored in the index has at least one successor
#[derive(Clone, Debug)]
pub struct State {
	/// Identifier of the state (the prefix).
	key: String,
	/// Every observed successor, in the order it was seen.
	/// Example: "  " → [A, A, B]
	successors: Vec<Successor>,
}

impl State {
	/// Creates a new empty state for the given prefix.
	pub(crate) fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			successors: Vec::new(),
		}
	}

	/// Records one occurrence of `successor`.
	pub(crate) fn add_successor(&mut self, successor: Successor) {
		self.successors.push(successor);
	}

	/// The prefix this state is keyed by.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Every recorded successor in training order.
	pub fn successors(&self) -> &[Successor] {
		&self.successors
	}

	/// Number of times `successor` was recorded.
	pub fn count(&self, successor: Successor) -> usize {
		self.successors.iter().filter(|s| **s == successor).count()
	}

	/// Draws a successor uniformly among the recorded occurrences.
	///
	/// Because duplicates are kept, a successor seen twice as often is drawn
	/// twice as often.
	///
	/// Returns `None` if the state has no successors.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Successor> {
		self.successors.choose(rng).copied()
	}
}
