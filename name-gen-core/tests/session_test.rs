mod common;

use std::fs;
use std::io::Cursor;

use common::{SEED_NAMES, ScriptedConsole};
use name_gen_core::NameGenError;
use name_gen_core::config::{ModelConfig, SessionConfig};
use name_gen_core::corpus::{CorpusPaths, CorpusState};
use name_gen_core::model::Successor;
use name_gen_core::session::{CurationSession, Decision, LineConsole, Phase, Resolution};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seed_corpus() -> CorpusState {
	CorpusState::new(&["Velmora", "Tashik"], SEED_NAMES, &["Blorp"])
}

fn line_count(path: &std::path::Path) -> usize {
	fs::read_to_string(path).unwrap().lines().count()
}

fn start_count<C: name_gen_core::session::Console>(session: &CurationSession<'_, C, StdRng>) -> usize {
	let index = session.model().index();
	index.successors_of(&index.start_prefix()).unwrap().successors().len()
}

#[test]
fn keep_three_reject_two_updates_files() {
	let dir = tempfile::tempdir().unwrap();
	let paths = CorpusPaths {
		fictional: dir.path().join("places.txt"),
		real: dir.path().join("real.txt"),
		rejects: dir.path().join("rejects.txt"),
	};
	fs::write(&paths.fictional, "Velmora\nTashik\n").unwrap();
	fs::write(&paths.real, SEED_NAMES.join("\n")).unwrap();
	fs::write(&paths.rejects, "Blorp\n").unwrap();

	let mut corpus = CorpusState::load(paths.clone()).unwrap();
	let console = LineConsole::new(Cursor::new("1\n1\n1\n3\n3\nq\n"), Vec::new());
	let mut session = CurationSession::new(
		&mut corpus,
		ModelConfig::default(),
		SessionConfig::default(),
		console,
		StdRng::seed_from_u64(42),
	)
	.unwrap();

	let report = session.run().unwrap();
	assert_eq!(report.kept, 3);
	assert_eq!(report.rejected, 2);
	assert_eq!(report.generated, 5);
	assert!(!report.exhausted);

	assert_eq!(line_count(&paths.fictional), 2 + 3);
	assert_eq!(line_count(&paths.rejects), 1 + 2);
	assert_eq!(corpus.fictional().len(), 5);
	assert_eq!(corpus.rejects().len(), 3);
}

#[test]
fn summary_is_printed() {
	let mut corpus = seed_corpus();
	let mut console = LineConsole::new(Cursor::new("1\n3\nq\n"), Vec::new());
	let report = CurationSession::new(
		&mut corpus,
		ModelConfig::default(),
		SessionConfig::default(),
		&mut console,
		StdRng::seed_from_u64(1),
	)
	.unwrap()
	.run()
	.unwrap();

	assert_eq!((report.generated, report.kept, report.rejected), (2, 1, 1));
	let output = String::from_utf8(console.into_output()).unwrap();
	assert!(output.contains("Generated 2 names. Kept 1 and rejected 1."));
}

#[test]
fn queued_names_are_reprocessed() {
	let mut corpus = seed_corpus();
	// queue, queue, quit, reprocess, keep first, reject second
	let mut console = ScriptedConsole::new(&["2", "2", "q", "1", "1", "2"]);
	let mut session = CurationSession::new(
		&mut corpus,
		ModelConfig::default(),
		SessionConfig::default(),
		&mut console,
		StdRng::seed_from_u64(7),
	)
	.unwrap();

	let report = session.run().unwrap();
	assert_eq!(report.queued, 2);
	assert_eq!(report.kept, 1);
	assert_eq!(report.rejected, 1);
	assert_eq!(report.generated, 2);
	assert_eq!(session.queue().count(), 0);
	drop(session);

	assert_eq!(console.remaining(), 0);
	let first = console.candidates[0].clone();
	let second = console.candidates[1].clone();
	assert_eq!(corpus.fictional().last(), Some(&first));
	assert_eq!(corpus.rejects().last(), Some(&second));
}

#[test]
fn aborting_reprocessing_drops_the_rest() {
	let mut corpus = seed_corpus();
	let mut console = ScriptedConsole::new(&["2", "2", "q", "1", "1", "Q"]);
	let report = CurationSession::new(
		&mut corpus,
		ModelConfig::default(),
		SessionConfig::default(),
		&mut console,
		StdRng::seed_from_u64(9),
	)
	.unwrap()
	.run()
	.unwrap();

	assert_eq!(report.kept, 1);
	assert_eq!(report.rejected, 0);
	assert_eq!(corpus.fictional().len(), 3);
	assert_eq!(corpus.rejects().len(), 1);
	assert!(console.shown.iter().any(|line| line == "Queue cleared."));
}

#[test]
fn discarding_the_queue_changes_nothing() {
	let mut corpus = seed_corpus();
	let mut console = ScriptedConsole::new(&["2", "2", "q", "2"]);
	let report = CurationSession::new(
		&mut corpus,
		ModelConfig::default(),
		SessionConfig::default(),
		&mut console,
		StdRng::seed_from_u64(3),
	)
	.unwrap()
	.run()
	.unwrap();

	assert_eq!(report.queued, 2);
	assert_eq!(report.kept + report.rejected, 0);
	assert_eq!(corpus.fictional(), &["Velmora", "Tashik"]);
	assert_eq!(corpus.rejects(), &["Blorp"]);
}

#[test]
fn invalid_input_reprompts_the_same_candidate() {
	let mut corpus = seed_corpus();
	let mut console = ScriptedConsole::new(&["x", "5", "", "1", "q"]);
	let report = CurationSession::new(
		&mut corpus,
		ModelConfig::default(),
		SessionConfig::default(),
		&mut console,
		StdRng::seed_from_u64(5),
	)
	.unwrap()
	.run()
	.unwrap();

	assert_eq!(report.generated, 1);
	assert_eq!(report.kept, 1);
	let invalid = console.shown.iter().filter(|line| *line == Decision::INVALID).count();
	assert_eq!(invalid, 3);
	// Four prompts for the first candidate, one for the second
	assert_eq!(console.candidates.len(), 5);
	assert!(console.candidates[..4].iter().all(|c| *c == console.candidates[0]));
	assert_eq!(corpus.fictional().last(), Some(&console.candidates[0]));
}

#[test]
fn invalid_queue_answers_are_recovered() {
	let mut corpus = seed_corpus();
	let mut console = ScriptedConsole::new(&["2", "q", "9", "1", "maybe", "1"]);
	let report = CurationSession::new(
		&mut corpus,
		ModelConfig::default(),
		SessionConfig::default(),
		&mut console,
		StdRng::seed_from_u64(13),
	)
	.unwrap()
	.run()
	.unwrap();

	assert_eq!(report.kept, 1);
	assert!(console.shown.iter().any(|line| line == Resolution::INVALID));
	assert_eq!(console.remaining(), 0);
}

#[test]
fn known_names_are_never_presented() {
	let mut corpus = seed_corpus();
	let known: Vec<String> = corpus
		.training_names()
		.chain(corpus.rejects().iter().map(String::as_str))
		.map(str::to_owned)
		.collect();

	let mut answers = vec!["3"; 30];
	answers.push("q");
	let mut console = ScriptedConsole::new(&answers);
	let report = CurationSession::new(
		&mut corpus,
		ModelConfig::default(),
		SessionConfig::default(),
		&mut console,
		StdRng::seed_from_u64(21),
	)
	.unwrap()
	.run()
	.unwrap();

	assert_eq!(report.rejected, 30);
	for candidate in &console.candidates {
		assert!(!known.contains(candidate), "{candidate} was already known");
	}
	// Rejected names are not offered twice either
	let mut unique = console.candidates.clone();
	unique.sort();
	unique.dedup();
	assert_eq!(unique.len(), console.candidates.len());
}

#[test]
fn snapshot_mode_keeps_the_session_model() {
	let mut corpus = seed_corpus();
	let before = corpus.training_names().count();
	let mut console = ScriptedConsole::new(&["1", "1", "1", "q"]);
	let mut session = CurationSession::new(
		&mut corpus,
		ModelConfig { rebuild_on_accept: false, ..ModelConfig::default() },
		SessionConfig::default(),
		&mut console,
		StdRng::seed_from_u64(17),
	)
	.unwrap();

	session.run().unwrap();
	assert_eq!(start_count(&session), before);
	assert_eq!(session.corpus().training_names().count(), before + 3);
}

#[test]
fn rebuild_mode_feeds_kept_names_back() {
	let mut corpus = seed_corpus();
	let before = corpus.training_names().count();
	let mut console = ScriptedConsole::new(&["1", "1", "1", "q"]);
	let mut session = CurationSession::new(
		&mut corpus,
		ModelConfig { rebuild_on_accept: true, ..ModelConfig::default() },
		SessionConfig::default(),
		&mut console,
		StdRng::seed_from_u64(17),
	)
	.unwrap();

	session.run().unwrap();
	assert_eq!(start_count(&session), before + 3);

	// Every kept name now ends with a recorded terminator
	let kept: Vec<String> = session.corpus().fictional()[2..].to_vec();
	let index = session.model().index();
	for name in kept {
		let chars: Vec<char> = name.chars().collect();
		let tail: String = if chars.len() >= 2 {
			chars[chars.len() - 2..].iter().collect()
		} else {
			format!(" {name}")
		};
		let state = index.successors_of(&tail).unwrap();
		assert!(state.count(Successor::Terminator) >= 1, "{name}");
	}
}

#[test]
fn rebuild_mode_covers_names_kept_from_the_queue() {
	let mut corpus = seed_corpus();
	let before = corpus.training_names().count();
	// queue, queue, quit, reprocess, keep both
	let mut console = ScriptedConsole::new(&["2", "2", "q", "1", "1", "1"]);
	let mut session = CurationSession::new(
		&mut corpus,
		ModelConfig { rebuild_on_accept: true, ..ModelConfig::default() },
		SessionConfig::default(),
		&mut console,
		StdRng::seed_from_u64(7),
	)
	.unwrap();

	assert_eq!(start_count(&session), before);
	session.run().unwrap();
	let report = session.report();
	assert_eq!((report.queued, report.kept, report.rejected), (2, 2, 0));
	assert_eq!(start_count(&session), before + 2);
	assert_eq!(session.corpus().fictional().len(), 4);
}

#[test]
fn multi_word_real_names_are_never_presented() {
	let mut corpus = CorpusState::new(&[] as &[&str], &["Al Khor", "Al Khab"], &[]);
	let mut console = ScriptedConsole::new(&["1"]);
	let report = CurationSession::new(
		&mut corpus,
		ModelConfig::default(),
		SessionConfig { duplicate_budget: 200 },
		&mut console,
		StdRng::seed_from_u64(1),
	)
	.unwrap()
	.run()
	.unwrap();

	assert!(report.exhausted);
	assert!(console.candidates.is_empty());
	assert!(corpus.fictional().is_empty());
}

#[test]
fn steps_can_be_driven_individually() {
	let mut corpus = seed_corpus();
	let mut console = ScriptedConsole::new(&["1", "3", "q"]);
	let mut session = CurationSession::new(
		&mut corpus,
		ModelConfig::default(),
		SessionConfig::default(),
		&mut console,
		StdRng::seed_from_u64(2),
	)
	.unwrap();

	let next = session.step(Phase::Presenting("Zanoba".into())).unwrap();
	assert_eq!(next, Phase::Sampling);
	assert!(session.corpus().fictional().contains(&"Zanoba".to_owned()));

	let next = session.step(Phase::Presenting("Qorvex".into())).unwrap();
	assert_eq!(next, Phase::Sampling);
	assert!(session.corpus().rejects().contains(&"Qorvex".to_owned()));

	let next = session.step(Phase::Presenting("Ilmar".into())).unwrap();
	assert_eq!(next, Phase::Finalize);
	assert_eq!(session.step(Phase::Finalize).unwrap(), Phase::Done);
	assert_eq!(session.step(Phase::Done).unwrap(), Phase::Done);

	match session.step(Phase::Sampling).unwrap() {
		Phase::Presenting(candidate) => assert!(!session.corpus().is_known(&candidate)),
		other => panic!("unexpected phase {other:?}"),
	}
}

#[test]
fn closed_input_quits_cleanly() {
	let mut corpus = seed_corpus();
	let mut console = ScriptedConsole::new(&[]);
	let report = CurationSession::new(
		&mut corpus,
		ModelConfig::default(),
		SessionConfig::default(),
		&mut console,
		StdRng::seed_from_u64(0),
	)
	.unwrap()
	.run()
	.unwrap();

	assert_eq!(report.generated, 0);
	assert_eq!(console.candidates.len(), 1);
}

#[test]
fn exhausted_model_ends_the_session() {
	let mut corpus = CorpusState::new(&[] as &[&str], &["Harare"], &[]);
	let mut console = ScriptedConsole::new(&["1"]);
	let report = CurationSession::new(
		&mut corpus,
		ModelConfig { prefix_length: 3, ..ModelConfig::default() },
		SessionConfig { duplicate_budget: 25 },
		&mut console,
		StdRng::seed_from_u64(0),
	)
	.unwrap()
	.run()
	.unwrap();

	assert!(report.exhausted);
	assert_eq!(report.generated, 0);
	assert!(console.candidates.is_empty());
	assert_eq!(console.remaining(), 1);
}

#[test]
fn empty_corpus_aborts_before_interaction() {
	let mut corpus = CorpusState::default();
	let console = ScriptedConsole::new(&["1"]);
	let result = CurationSession::new(
		&mut corpus,
		ModelConfig::default(),
		SessionConfig::default(),
		console,
		StdRng::seed_from_u64(0),
	);
	assert!(matches!(result, Err(NameGenError::EmptyModel)));
}

#[test]
fn invalid_prefix_length_aborts_before_interaction() {
	let mut corpus = seed_corpus();
	let result = CurationSession::new(
		&mut corpus,
		ModelConfig { prefix_length: 0, ..ModelConfig::default() },
		SessionConfig::default(),
		ScriptedConsole::new(&[]),
		StdRng::seed_from_u64(0),
	);
	assert!(matches!(result, Err(NameGenError::Configuration { .. })));
}
