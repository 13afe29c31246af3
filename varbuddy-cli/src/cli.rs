use console::{Emoji, Term, style};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::{io::Error, path::PathBuf, sync::Arc};
use varbuddy_sdk::{
	reporter::ui::UserInterface,
	session::{PropertiesListener, Snapshot},
};
use varbuddy_stdx::path::Expand;

/// The terminal implementation of the UserInterface trait.
///
/// Messages go to stderr so that stdout only ever carries property names or JSON.
pub struct CliUi {
	term: Term,
}

impl CliUi {
	pub fn new() -> Arc<Self> {
		Arc::new(Self { term: Term::stderr() })
	}

	fn println(&self, line: String) {
		if let Err(e) = self.term.write_line(&line) {
			tracing::warn!("Could not write to the terminal: {}", e);
		}
	}

	/// Prints an error that never went through a [`varbuddy_sdk::reporter::Reporter`].
	pub fn print_error(err: &anyhow::Error) {
		let ui = Self { term: Term::stderr() };
		let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
		let hint = (!causes.is_empty()).then(|| causes.join(": "));
		ui.error(&err.to_string(), hint.as_deref());
	}

	// --- Interactive helpers used by `browse` ---

	pub fn select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, Error> {
		Select::with_theme(&ColorfulTheme::default())
			.with_prompt(prompt)
			.items(items)
			.default(0)
			.interact_opt()
	}

	pub fn input(&self, prompt: &str, initial: &str) -> Result<String, Error> {
		Input::<String>::with_theme(&ColorfulTheme::default())
			.with_prompt(prompt)
			.with_initial_text(initial)
			.allow_empty(true)
			.interact_text()
	}
}

impl UserInterface for CliUi {
	fn pick_folder(&self, title: &str) -> Result<Option<PathBuf>, Error> {
		let answer = self.input(&format!("{title} (leave empty to cancel)"), "")?;
		let answer = answer.trim();
		if answer.is_empty() {
			return Ok(None);
		}
		Ok(Some(answer.expand_user()))
	}

	// --- Structured Messaging ---

	fn success(&self, message: &str) {
		self.println(format!("{} {}", style(Emoji("✔", "✓")).green(), message));
	}

	fn info(&self, message: &str) {
		self.println(format!("{} {}", style(Emoji("ℹ", "i")).blue(), message));
	}

	fn warning(&self, message: &str) {
		self.println(format!("{} {}", style(Emoji("⚠", "!")).yellow(), message));
	}

	fn error(&self, message: &str, hint: Option<&str>) {
		let error_prefix = style("Error:").red().bold();
		self.println(format!("{} {}", error_prefix, style(message).red()));

		if let Some(hint_text) = hint {
			let hint_prefix = style("Hint:").cyan();
			self.println(format!("  {} {}", hint_prefix, hint_text));
		}
	}
}

impl PropertiesListener for CliUi {
	fn properties_updated(&self, snapshot: &Snapshot) {
		self.info(&format!(
			"Found {} custom properties in {}",
			snapshot.properties.len(),
			snapshot.root.display()
		));
	}
}
