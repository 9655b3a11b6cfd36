use name_gen_core::NameGenError;
use name_gen_core::batch::generate_batch;
use name_gen_core::config::GeneratorConfig;
use name_gen_core::corpus::{CorpusState, ListKind};
use name_gen_core::session::{Console, CurationSession};
use rand::Rng;

const MAIN_MENU: [&str; 5] = [
	"Train the name generator.",
	"Generate batch names.",
	"View/edit list of place names.",
	"View/edit list of rejects.",
	"Quit.",
];

const LIST_MENU: [&str; 4] = ["Add names", "Remove names", "Output list to file", "Save and return"];

const NAME_PROMPT: &str = "Enter name or press 'Q' to quit. ";

/// Prints a numbered menu and reads a choice in `1..=entries.len()`.
///
/// Returns `None` when the answer must be asked again, and the last entry
/// once the input is closed.
fn read_choice<C: Console>(console: &mut C, entries: &[&str]) -> Result<Option<usize>, NameGenError> {
	console.show("What would you like to do?")?;
	for (i, entry) in entries.iter().enumerate() {
		console.show(&format!("{} -- {}", i + 1, entry))?;
	}

	let Some(answer) = console.ask("\nInput: ")? else {
		return Ok(Some(entries.len()));
	};
	match answer.trim().parse::<usize>() {
		Err(_) => {
			console.show("\nPlease enter numbers only.\n")?;
			Ok(None)
		}
		Ok(choice) if (1..=entries.len()).contains(&choice) => Ok(Some(choice)),
		Ok(_) => {
			console.show(&format!("\nInvalid input. Please enter a number between 1 and {}.\n", entries.len()))?;
			Ok(None)
		}
	}
}

/// Top-level menu loop. Saves both lists before returning.
pub fn main_menu<C: Console, R: Rng>(
	corpus: &mut CorpusState,
	config: &GeneratorConfig,
	console: &mut C,
	rng: &mut R,
) -> Result<(), NameGenError> {
	loop {
		let Some(choice) = read_choice(console, &MAIN_MENU)? else {
			continue;
		};
		match choice {
			1 => {
				console.show("\nGenerating new names:\n")?;
				train(corpus, config, console, rng)?;
			}
			2 => {
				console.show("\nGenerating batch of names...\n")?;
				batch(corpus, config, console, rng)?;
			}
			3 => {
				console.show("\nAccessing list of places...\n")?;
				list_menu(corpus, ListKind::Fictional, config, console)?;
			}
			4 => {
				console.show("\nAccessing rejected names....\n")?;
				list_menu(corpus, ListKind::Rejects, config, console)?;
			}
			_ => {
				console.show("\nExiting...")?;
				corpus.save()?;
				return Ok(());
			}
		}
	}
}

fn train<C: Console, R: Rng>(
	corpus: &mut CorpusState,
	config: &GeneratorConfig,
	console: &mut C,
	rng: &mut R,
) -> Result<(), NameGenError> {
	let session = CurationSession::new(&mut *corpus, config.model, config.session, &mut *console, &mut *rng);
	let mut session = match session {
		Ok(session) => session,
		Err(NameGenError::EmptyModel) => {
			console.show("There are no names to learn from yet. Add some place names first.")?;
			return Ok(());
		}
		Err(e) => return Err(e),
	};
	session.run()?;
	Ok(())
}

fn batch<C: Console, R: Rng>(
	corpus: &CorpusState,
	config: &GeneratorConfig,
	console: &mut C,
	rng: &mut R,
) -> Result<(), NameGenError> {
	let names = match generate_batch(corpus, &config.model, &config.batch, config.batch.size, &mut *rng) {
		Ok(names) => names,
		Err(NameGenError::EmptyModel) => {
			console.show("There are no names to learn from yet. Add some place names first.")?;
			return Ok(());
		}
		Err(e) => return Err(e),
	};

	let mut count = 0usize;
	for name in names {
		console.show(&name)?;
		count += 1;
	}
	if count < config.batch.size {
		console.show("The model could not produce more new names.")?;
	}
	console.show(&format!("{count} names generated."))?;
	Ok(())
}

/// View/edit loop for one list.
fn list_menu<C: Console>(
	corpus: &mut CorpusState,
	kind: ListKind,
	config: &GeneratorConfig,
	console: &mut C,
) -> Result<(), NameGenError> {
	console.show(&corpus.list(kind).join(", "))?;
	console.show(&format!("There are currently {} names in {}.", corpus.list(kind).len(), kind))?;

	loop {
		let Some(choice) = read_choice(console, &LIST_MENU)? else {
			continue;
		};
		match choice {
			1 => {
				console.show("\nAdding names...\n")?;
				add_names(corpus, kind, console)?;
			}
			2 => {
				console.show("\nRemoving names...\n")?;
				remove_names(corpus, kind, console)?;
			}
			3 => {
				console.show("\nWriting list to new file...\n")?;
				let path = corpus.export(kind, &config.paths.export_dir)?;
				console.show(&format!("Wrote {}.", path.display()))?;
			}
			_ => {
				console.show("\nReturning to main menu\n")?;
				corpus.save()?;
				return Ok(());
			}
		}
	}
}

/// Reads names until `Q`; `None` once the operator is done.
fn next_name<C: Console>(console: &mut C) -> Result<Option<String>, NameGenError> {
	match console.ask(NAME_PROMPT)? {
		None => Ok(None),
		Some(raw) if raw.trim().eq_ignore_ascii_case("q") => Ok(None),
		Some(raw) => Ok(Some(raw)),
	}
}

fn add_names<C: Console>(corpus: &mut CorpusState, kind: ListKind, console: &mut C) -> Result<(), NameGenError> {
	while let Some(raw) = next_name(console)? {
		match corpus.add(kind, &raw) {
			Ok(name) => {
				console.show(&format!("Added {name} to list!"))?;
				console.show(&format!("There are {} names in the list.", corpus.list(kind).len()))?;
			}
			Err(NameGenError::InvalidInput { .. }) => console.show("Names cannot be blank.")?,
			Err(e) => return Err(e),
		}
	}
	console.show("Returning to list menu")?;
	Ok(())
}

fn remove_names<C: Console>(corpus: &mut CorpusState, kind: ListKind, console: &mut C) -> Result<(), NameGenError> {
	while let Some(raw) = next_name(console)? {
		match corpus.remove(kind, &raw) {
			Ok(name) => {
				console.show(&format!("Removed {name} from list!"))?;
				console.show(&format!("There are {} names in the list.", corpus.list(kind).len()))?;
			}
			Err(NameGenError::NotFound { .. }) => console.show("Name not found. Check spelling and try again.")?,
			Err(e) => return Err(e),
		}
	}
	console.show("Returning to list menu")?;
	Ok(())
}
