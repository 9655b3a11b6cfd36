use std::str::FromStr;

use crate::error::NameGenError;

/// Operator answer while a candidate is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
	Keep,
	Queue,
	Reject,
	Quit,
}

impl Decision {
	pub const PROMPT: &'static str = "1 - Keep, 2 - Add to queue, 3 - Reject. Press Q to quit.\n";
	pub const INVALID: &'static str = "Invalid input. Input 1, 2, or 3. Q to quit.";
}

impl FromStr for Decision {
	type Err = NameGenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"1" => Ok(Decision::Keep),
			"2" => Ok(Decision::Queue),
			"3" => Ok(Decision::Reject),
			"q" | "Q" => Ok(Decision::Quit),
			other => Err(NameGenError::invalid_input(other)),
		}
	}
}

/// What to do with the queue when the operator quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueChoice {
	Reprocess,
	Discard,
}

impl QueueChoice {
	pub const PROMPT: &'static str = "Reprocess (1) or discard (2) queue? ";
	pub const INVALID: &'static str = "Invalid input. Input 1 or 2.";
}

impl FromStr for QueueChoice {
	type Err = NameGenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"1" => Ok(QueueChoice::Reprocess),
			"2" => Ok(QueueChoice::Discard),
			other => Err(NameGenError::invalid_input(other)),
		}
	}
}

/// Operator answer for a queued candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	Keep,
	Reject,
	/// Stop reprocessing and drop whatever is left.
	Abort,
}

impl Resolution {
	pub const PROMPT: &'static str = "1 - Keep, 2 - Reject. 'Q' to quit. ";
	pub const INVALID: &'static str = "Invalid input. Input 1 or 2. Q to quit.";
}

impl FromStr for Resolution {
	type Err = NameGenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"1" => Ok(Resolution::Keep),
			"2" => Ok(Resolution::Reject),
			"q" | "Q" => Ok(Resolution::Abort),
			other => Err(NameGenError::invalid_input(other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decisions_parse() {
		assert_eq!("1".parse::<Decision>().unwrap(), Decision::Keep);
		assert_eq!(" 2 ".parse::<Decision>().unwrap(), Decision::Queue);
		assert_eq!("3".parse::<Decision>().unwrap(), Decision::Reject);
		assert_eq!("q".parse::<Decision>().unwrap(), Decision::Quit);
		assert_eq!("Q".parse::<Decision>().unwrap(), Decision::Quit);
	}

	#[test]
	fn anything_else_is_invalid_input() {
		for bad in ["", "4", "keep", "11", "quit"] {
			assert!(matches!(bad.parse::<Decision>(), Err(NameGenError::InvalidInput { .. })), "{bad:?}");
		}
		assert!(matches!("3".parse::<QueueChoice>(), Err(NameGenError::InvalidInput { .. })));
		assert!(matches!("3".parse::<Resolution>(), Err(NameGenError::InvalidInput { .. })));
	}

	#[test]
	fn queue_answers_parse() {
		assert_eq!("1".parse::<QueueChoice>().unwrap(), QueueChoice::Reprocess);
		assert_eq!("2".parse::<QueueChoice>().unwrap(), QueueChoice::Discard);
		assert_eq!("1".parse::<Resolution>().unwrap(), Resolution::Keep);
		assert_eq!("2".parse::<Resolution>().unwrap(), Resolution::Reject);
		assert_eq!("Q".parse::<Resolution>().unwrap(), Resolution::Abort);
	}
}
