use rand::Rng;

use super::prefix_index::PrefixIndex;
use super::state::Successor;
use crate::config::ModelConfig;
use crate::error::NameGenError;

/// Samples new names by walking a `PrefixIndex`.
///
/// The walk starts from the all-blank prefix, draws successors until the
/// terminator comes up, and gives up once `max_length` characters have been
/// produced.
#[derive(Clone, Debug)]
pub struct NameModel {
	index: PrefixIndex,
	max_length: usize,
}

impl NameModel {
	/// Builds a model from a corpus snapshot.
	///
	/// # Errors
	/// Returns `Configuration` if the prefix length is outside `1..=10`
	/// or `max_length` is zero.
	pub fn build<I, S>(corpus: I, config: &ModelConfig) -> Result<Self, NameGenError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		if config.max_length == 0 {
			return Err(NameGenError::Configuration { reason: "max_length must be at least 1".to_owned() });
		}
		let index = PrefixIndex::build(corpus, config.prefix_length)?;
		Ok(Self { index, max_length: config.max_length })
	}

	pub fn index(&self) -> &PrefixIndex {
		&self.index
	}

	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Returns `true` if the index has no starting transition.
	pub fn is_empty(&self) -> bool {
		self.index.successors_of(&self.index.start_prefix()).is_none()
	}

	/// Generates one candidate name, title-cased.
	///
	/// # Behavior
	/// - Draws uniformly among the recorded successors of the current prefix
	/// - Stops on the terminator, on an unknown prefix, or once the name
	///   holds `max_length` characters
	///
	/// # Errors
	/// Returns `EmptyModel` if the all-blank prefix was never recorded
	/// (the corpus was empty).
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, NameGenError> {
		let mut prefix = self.index.start_prefix();
		let mut state = self.index.successors_of(&prefix).ok_or(NameGenError::EmptyModel)?;

		let mut name = String::new();
		let mut length = 0usize;
		while length < self.max_length {
			let c = match state.predict(rng) {
				Some(Successor::Char(c)) => c,
				Some(Successor::Terminator) | None => break,
			};
			name.push(c);
			length += 1;

			prefix = prefix.chars().skip(1).chain(std::iter::once(c)).collect();
			state = match self.index.successors_of(&prefix) {
				Some(next) => next,
				// A recorded character always leads to a recorded prefix.
				None => break,
			};
		}

		Ok(title_case(&name))
	}
}

/// Upper-cases the first character and lower-cases the rest.
///
/// `"aNNA mARIA"` → `"Anna maria"`
pub fn title_case(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
		None => String::new(),
	}
}
