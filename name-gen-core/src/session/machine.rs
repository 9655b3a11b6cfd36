use std::collections::VecDeque;

use rand::Rng;

use super::console::Console;
use super::decision::{Decision, QueueChoice, Resolution};
use crate::config::{ModelConfig, SessionConfig};
use crate::corpus::CorpusState;
use crate::error::NameGenError;
use crate::model::NameModel;

/// Where a curation session currently stands.
///
/// Transitions:
/// - `Sampling` → `Presenting` (novel candidate) or, once the duplicate
///   budget runs out, `QueueResolution` / `Finalize`
/// - `Presenting` → `Sampling` (keep, queue, reject), `Presenting` (invalid
///   input), `QueueResolution` (quit with a queue) or `Finalize`
/// - `QueueResolution` → `Reprocessing` or `Finalize` (discard)
/// - `Reprocessing` → `Reprocessing` (next item) or `Finalize`
/// - `Finalize` → `Done`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
	Sampling,
	Presenting(String),
	QueueResolution,
	Reprocessing,
	Finalize,
	Done,
}

/// Counters reported when a session ends.
///
/// `generated` counts candidates the operator decided on (kept, queued or
/// rejected); silently discarded duplicates and the candidate answered with
/// quit are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
	pub generated: usize,
	pub kept: usize,
	pub queued: usize,
	pub rejected: usize,
	/// Sampling stopped because no novel name could be found.
	pub exhausted: bool,
}

/// Interactive curation loop over a corpus.
///
/// # Responsibilities
/// - Sample candidates and skip the ones already known
/// - Present novel candidates and apply keep / queue / reject / quit
/// - Resolve or discard the queue on quit
/// - Save the corpus and report counters
///
/// With `rebuild_on_accept` the model is rebuilt after every kept name so
/// acceptances feed back into sampling right away; otherwise the model stays
/// the snapshot taken when the session started.
pub struct CurationSession<'a, C: Console, R: Rng> {
	corpus: &'a mut CorpusState,
	model: NameModel,
	model_config: ModelConfig,
	duplicate_budget: usize,
	console: C,
	rng: R,
	queue: VecDeque<String>,
	report: SessionReport,
}

impl<'a, C: Console, R: Rng> CurationSession<'a, C, R> {
	/// Builds the model from the corpus and prepares a session.
	///
	/// # Errors
	/// - `Configuration` for an invalid prefix length, max length or budget
	/// - `EmptyModel` if the corpus has nothing to learn from
	pub fn new(
		corpus: &'a mut CorpusState,
		model_config: ModelConfig,
		session_config: SessionConfig,
		console: C,
		rng: R,
	) -> Result<Self, NameGenError> {
		if session_config.duplicate_budget == 0 {
			return Err(NameGenError::Configuration { reason: "duplicate_budget must be at least 1".to_owned() });
		}
		let model = NameModel::build(corpus.training_names(), &model_config)?;
		if model.is_empty() {
			return Err(NameGenError::EmptyModel);
		}

		Ok(Self {
			corpus,
			model,
			model_config,
			duplicate_budget: session_config.duplicate_budget,
			console,
			rng,
			queue: VecDeque::new(),
			report: SessionReport::default(),
		})
	}

	pub fn report(&self) -> SessionReport {
		self.report
	}

	pub fn model(&self) -> &NameModel {
		&self.model
	}

	/// Candidates deferred and not yet resolved.
	pub fn queue(&self) -> impl Iterator<Item = &str> {
		self.queue.iter().map(String::as_str)
	}

	pub fn corpus(&self) -> &CorpusState {
		&*self.corpus
	}

	/// Runs the session from `Sampling` to `Done`.
	///
	/// # Errors
	/// Console failures and save failures are returned; invalid operator
	/// input never is.
	pub fn run(&mut self) -> Result<SessionReport, NameGenError> {
		let mut phase = Phase::Sampling;
		while phase != Phase::Done {
			phase = self.step(phase)?;
		}
		Ok(self.report)
	}

	/// Executes a single transition.
	pub fn step(&mut self, phase: Phase) -> Result<Phase, NameGenError> {
		match phase {
			Phase::Sampling => self.sample_candidate(),
			Phase::Presenting(candidate) => self.present(candidate),
			Phase::QueueResolution => self.resolve_queue(),
			Phase::Reprocessing => self.reprocess_next(),
			Phase::Finalize => self.finalize(),
			Phase::Done => Ok(Phase::Done),
		}
	}

	fn is_seen(&self, candidate: &str) -> bool {
		candidate.is_empty() || self.corpus.is_known(candidate) || self.queue.iter().any(|q| q == candidate)
	}

	fn sample_candidate(&mut self) -> Result<Phase, NameGenError> {
		for _ in 0..self.duplicate_budget {
			let candidate = self.model.sample(&mut self.rng)?;
			if self.is_seen(&candidate) {
				log::debug!("discarding known candidate {candidate:?}");
				continue;
			}
			return Ok(Phase::Presenting(candidate));
		}

		log::warn!("no novel candidate after {} draws", self.duplicate_budget);
		self.report.exhausted = true;
		self.console.show("No new names could be generated.")?;
		Ok(self.after_quit())
	}

	fn present(&mut self, candidate: String) -> Result<Phase, NameGenError> {
		self.console.show(&candidate)?;
		let decision = match self.console.ask(Decision::PROMPT)? {
			None => Decision::Quit,
			Some(answer) => match answer.parse::<Decision>() {
				Ok(decision) => decision,
				Err(_) => {
					self.console.show(Decision::INVALID)?;
					return Ok(Phase::Presenting(candidate));
				}
			},
		};

		match decision {
			Decision::Keep => {
				self.report.generated += 1;
				self.keep(candidate)?;
			}
			Decision::Queue => {
				self.report.generated += 1;
				self.report.queued += 1;
				self.queue.push_back(candidate);
			}
			Decision::Reject => {
				self.report.generated += 1;
				self.reject(candidate);
			}
			Decision::Quit => return Ok(self.after_quit()),
		}
		Ok(Phase::Sampling)
	}

	fn after_quit(&self) -> Phase {
		if self.queue.is_empty() { Phase::Finalize } else { Phase::QueueResolution }
	}

	fn resolve_queue(&mut self) -> Result<Phase, NameGenError> {
		let items: Vec<&str> = self.queue.iter().map(String::as_str).collect();
		let listing = format!("{} items in queue: {}", items.len(), items.join(", "));
		self.console.show(&listing)?;

		let choice = match self.console.ask(QueueChoice::PROMPT)? {
			None => QueueChoice::Discard,
			Some(answer) => match answer.parse::<QueueChoice>() {
				Ok(choice) => choice,
				Err(_) => {
					self.console.show(QueueChoice::INVALID)?;
					return Ok(Phase::QueueResolution);
				}
			},
		};

		match choice {
			QueueChoice::Reprocess => Ok(Phase::Reprocessing),
			QueueChoice::Discard => {
				self.clear_queue()?;
				Ok(Phase::Finalize)
			}
		}
	}

	fn reprocess_next(&mut self) -> Result<Phase, NameGenError> {
		let Some(candidate) = self.queue.front().cloned() else {
			return Ok(Phase::Finalize);
		};

		self.console.show(&candidate)?;
		let resolution = match self.console.ask(Resolution::PROMPT)? {
			None => Resolution::Abort,
			Some(answer) => match answer.parse::<Resolution>() {
				Ok(resolution) => resolution,
				Err(_) => {
					self.console.show(Resolution::INVALID)?;
					return Ok(Phase::Reprocessing);
				}
			},
		};

		match resolution {
			Resolution::Keep => {
				self.queue.pop_front();
				self.keep(candidate)?;
			}
			Resolution::Reject => {
				self.queue.pop_front();
				self.reject(candidate);
			}
			Resolution::Abort => {
				self.clear_queue()?;
				return Ok(Phase::Finalize);
			}
		}
		Ok(Phase::Reprocessing)
	}

	fn clear_queue(&mut self) -> Result<(), NameGenError> {
		log::debug!("dropping {} queued candidates", self.queue.len());
		self.queue.clear();
		self.console.show("Queue cleared.")?;
		Ok(())
	}

	fn keep(&mut self, candidate: String) -> Result<(), NameGenError> {
		self.report.kept += 1;
		self.corpus.keep(candidate);
		if self.model_config.rebuild_on_accept {
			self.model = NameModel::build(self.corpus.training_names(), &self.model_config)?;
			log::debug!("model rebuilt, {} prefixes", self.model.index().len());
		}
		Ok(())
	}

	fn reject(&mut self, candidate: String) {
		self.report.rejected += 1;
		self.corpus.reject(candidate);
	}

	fn finalize(&mut self) -> Result<Phase, NameGenError> {
		self.console.show("Updating dictionary...")?;
		self.corpus.save()?;

		let report = self.report;
		log::info!(
			"session finished: generated {}, kept {}, queued {}, rejected {}",
			report.generated,
			report.kept,
			report.queued,
			report.rejected
		);
		self.console.show(&format!(
			"Generated {} names. Kept {} and rejected {}.",
			report.generated, report.kept, report.rejected
		))?;
		Ok(Phase::Done)
	}
}
