use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Line-based operator interface.
///
/// Every interactive loop talks to the operator through this trait so it can
/// be driven by a script in tests.
pub trait Console {
	/// Prints one line.
	fn show(&mut self, message: &str) -> io::Result<()>;

	/// Prints `prompt` and reads one line, without its line ending.
	///
	/// Returns `None` once the input is closed.
	fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

impl<C: Console + ?Sized> Console for &mut C {
	fn show(&mut self, message: &str) -> io::Result<()> {
		(**self).show(message)
	}

	fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
		(**self).ask(prompt)
	}
}

/// `Console` over any buffered reader and writer.
pub struct LineConsole<R, W> {
	input: R,
	output: W,
}

impl LineConsole<StdinLock<'static>, Stdout> {
	/// Console bound to the process standard input and output.
	pub fn stdio() -> Self {
		Self::new(io::stdin().lock(), io::stdout())
	}
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}

	pub fn into_output(self) -> W {
		self.output
	}
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
	fn show(&mut self, message: &str) -> io::Result<()> {
		writeln!(self.output, "{message}")?;
		self.output.flush()
	}

	fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
		write!(self.output, "{prompt}")?;
		self.output.flush()?;

		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0 {
			return Ok(None);
		}
		Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
	}
}
