use std::collections::HashSet;

use rand::Rng;

use crate::config::{BatchConfig, ModelConfig};
use crate::corpus::CorpusState;
use crate::error::NameGenError;
use crate::model::NameModel;

/// Lazy, finite sequence of novel names.
///
/// # Behavior
/// - Yields at most `limit` names, each distinct from the others
/// - Skips candidates found among the real seed names or the rejects
/// - Ends early once `attempt_budget` consecutive draws were not novel
/// - Never touches the corpus; once exhausted it stays exhausted
///
/// Created by [`generate_batch`].
pub struct BatchGenerator<'a, R: Rng> {
	corpus: &'a CorpusState,
	model: NameModel,
	rng: R,
	remaining: usize,
	attempt_budget: usize,
	emitted: HashSet<String>,
	exhausted: bool,
}

/// Prepares a batch preview of up to `limit` names.
///
/// The model is built from the corpus as it is now.
///
/// # Errors
/// - `Configuration` for an invalid prefix length or zero budget
/// - `EmptyModel` if the corpus has no names to learn from
pub fn generate_batch<'a, R: Rng>(
	corpus: &'a CorpusState,
	model_config: &ModelConfig,
	batch_config: &BatchConfig,
	limit: usize,
	rng: R,
) -> Result<BatchGenerator<'a, R>, NameGenError> {
	if batch_config.attempt_budget == 0 {
		return Err(NameGenError::Configuration { reason: "attempt_budget must be at least 1".to_owned() });
	}
	let model = NameModel::build(corpus.training_names(), model_config)?;
	if model.is_empty() {
		return Err(NameGenError::EmptyModel);
	}

	Ok(BatchGenerator {
		corpus,
		model,
		rng,
		remaining: limit,
		attempt_budget: batch_config.attempt_budget,
		emitted: HashSet::new(),
		exhausted: false,
	})
}

impl<R: Rng> BatchGenerator<'_, R> {
	/// `true` if the batch ended because the sampling budget ran out.
	pub fn exhausted(&self) -> bool {
		self.exhausted
	}

	fn is_novel(&self, candidate: &str) -> bool {
		!candidate.is_empty() && !self.corpus.is_real_or_rejected(candidate) && !self.emitted.contains(candidate)
	}
}

impl<R: Rng> Iterator for BatchGenerator<'_, R> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		if self.remaining == 0 {
			return None;
		}

		for _ in 0..self.attempt_budget {
			// The model was checked non-empty at construction
			let candidate = self.model.sample(&mut self.rng).ok()?;
			if self.is_novel(&candidate) {
				self.remaining -= 1;
				self.emitted.insert(candidate.clone());
				return Some(candidate);
			}
		}

		log::warn!(
			"batch stopped after {} consecutive known names, {} names short",
			self.attempt_budget,
			self.remaining
		);
		self.remaining = 0;
		self.exhausted = true;
		None
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, Some(self.remaining))
	}
}
