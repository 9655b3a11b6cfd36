#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use name_gen_core::session::{Console, Decision};

/// Real place names used as training seed by the integration tests.
pub const SEED_NAMES: &[&str] = &[
	"Tashkent", "Samarkand", "Bukhara", "Namangan", "Andijan", "Nukus", "Fergana", "Qarshi", "Termez",
	"Jizzakh", "Navoiy", "Urgench", "Kokand", "Margilan", "Chirchiq", "Angren", "Gulistan", "Denov",
	"Doha", "Dukhan", "Mesaieed", "Lusail", "Harare", "Bulawayo", "Chitungwiza", "Mutare", "Gweru",
	"Kwekwe", "Kadoma", "Masvingo", "Chinhoyi", "Marondera", "Norton", "Chegutu", "Bindura",
	"Beitbridge", "Hwange", "Zvishavane", "Kariba", "Rusape", "Chiredzi",
];

/// Console that answers from a script and records what was presented.
pub struct ScriptedConsole {
	answers: VecDeque<String>,
	last_shown: Option<String>,
	/// Every line shown, in order.
	pub shown: Vec<String>,
	/// The line shown right before each keep/queue/reject prompt.
	pub candidates: Vec<String>,
}

impl ScriptedConsole {
	pub fn new(answers: &[&str]) -> Self {
		Self {
			answers: answers.iter().map(|a| a.to_string()).collect(),
			last_shown: None,
			shown: Vec::new(),
			candidates: Vec::new(),
		}
	}

	/// Answers that were never consumed.
	pub fn remaining(&self) -> usize {
		self.answers.len()
	}
}

impl Console for ScriptedConsole {
	fn show(&mut self, message: &str) -> io::Result<()> {
		self.shown.push(message.to_owned());
		self.last_shown = Some(message.to_owned());
		Ok(())
	}

	fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
		if prompt == Decision::PROMPT {
			if let Some(candidate) = &self.last_shown {
				self.candidates.push(candidate.clone());
			}
		}
		Ok(self.answers.pop_front())
	}
}
