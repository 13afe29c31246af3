use std::{fmt, path::PathBuf, str::FromStr};

use anyhow::{Context, Result, anyhow};
use clap::{Args, ValueHint};
use varbuddy_sdk::{
	editor::{Buffer, Selection},
	session::Session,
};

/// A 1-based `LINE:COLUMN` cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
	pub line: usize,
	pub column: usize,
}

impl FromStr for Position {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (line, column) = s.split_once(':').ok_or_else(|| format!("expected LINE:COLUMN, got `{s}`"))?;
		let parse = |part: &str, what: &str| match part.trim().parse::<usize>() {
			Ok(0) | Err(_) => Err(format!("{what} must be a positive number, got `{part}`")),
			Ok(n) => Ok(n),
		};
		Ok(Position {
			line: parse(line, "line")?,
			column: parse(column, "column")?,
		})
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.line, self.column)
	}
}

/// A file and the cursor positions a property reference should be inserted at.
#[derive(Args, Debug, Clone)]
pub struct Target {
	/// Stylesheet (or any UTF-8 file) to insert into.
	#[arg(long, value_hint = ValueHint::FilePath)]
	pub file: Option<PathBuf>,
	/// Cursor positions as LINE:COLUMN; repeat or separate with commas for several cursors.
	#[arg(long, value_delimiter = ',', requires = "file")]
	pub at: Vec<Position>,
}

impl Target {
	/// Inserts `var(<property>)` at every position and saves the file.
	///
	/// Returns `false` if no file was given.
	pub fn insert(&self, session: &Session, property: &str) -> Result<bool> {
		let Some(path) = &self.file else {
			return Ok(false);
		};
		let text = std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
		let mut buffer = Buffer::new(text);

		let positions = if self.at.is_empty() {
			vec![Position { line: 1, column: 1 }]
		} else {
			self.at.clone()
		};
		let cursors = positions
			.iter()
			.map(|p| {
				buffer
					.offset_of(p.line, p.column)
					.map(Selection::cursor)
					.ok_or_else(|| anyhow!("{} is outside of {}", p, path.display()))
			})
			.collect::<Result<Vec<_>>>()?;
		buffer = buffer.with_selections(cursors)?;

		let mut host = Some(buffer);
		session.insert(&mut host, property)?;
		if let Some(buffer) = host {
			std::fs::write(path, buffer.into_text()).with_context(|| format!("cannot write {}", path.display()))?;
		}
		tracing::info!(file = %path.display(), property, cursors = positions.len(), "Saved insertion");
		Ok(true)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use varbuddy_sdk::{reporter::Reporter, scanner::Scanner};

	#[test]
	fn parses_positions() {
		assert_eq!("3:7".parse::<Position>(), Ok(Position { line: 3, column: 7 }));
		assert!("3".parse::<Position>().is_err());
		assert!("0:1".parse::<Position>().is_err());
		assert!("a:1".parse::<Position>().is_err());
	}

	#[test]
	fn inserts_into_file_at_each_position() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("button.css");
		std::fs::write(&path, ".btn {\n  padding: ;\n  margin: ;\n}\n").unwrap();

		let target = Target {
			file: Some(path.clone()),
			at: vec![Position { line: 2, column: 12 }, Position { line: 3, column: 11 }],
		};
		let session = Session::new(Scanner::default(), Reporter::headless());
		assert!(target.insert(&session, "--space").unwrap());

		assert_eq!(
			std::fs::read_to_string(&path).unwrap(),
			".btn {\n  padding: var(--space);\n  margin: var(--space);\n}\n"
		);
	}

	#[test]
	fn position_outside_file_fails_without_writing() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("a.css");
		std::fs::write(&path, "a {}\n").unwrap();

		let target = Target {
			file: Some(path.clone()),
			at: vec![Position { line: 1, column: 40 }],
		};
		let session = Session::new(Scanner::default(), Reporter::headless());
		assert!(target.insert(&session, "--x").is_err());
		assert_eq!(std::fs::read_to_string(&path).unwrap(), "a {}\n");
	}

	#[test]
	fn no_file_means_nothing_to_do() {
		let target = Target { file: None, at: vec![] };
		let session = Session::new(Scanner::default(), Reporter::headless());
		assert!(!target.insert(&session, "--x").unwrap());
	}
}
