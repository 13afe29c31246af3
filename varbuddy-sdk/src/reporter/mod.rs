pub mod ui;

use std::{io, path::PathBuf, sync::Arc};

use crate::reporter::ui::UserInterface;

/// Routes user-facing messages to the host's interface and mirrors them into the log.
#[derive(Clone)]
pub struct Reporter {
	pub ui: Arc<dyn UserInterface>,
}

impl Reporter {
	pub fn new(ui: Arc<dyn UserInterface>) -> Self {
		Self { ui }
	}

	pub fn headless() -> Self {
		Self::new(Arc::new(ui::Headless))
	}

	pub fn pick_folder(&self, title: &str) -> Result<Option<PathBuf>, io::Error> {
		let picked = self.ui.pick_folder(title)?;
		tracing::debug!(?picked, "Folder picker closed");
		Ok(picked)
	}

	pub fn success(&self, message: &str) {
		self.ui.success(message);
		tracing::info!(user_message = message, "Shown to user as success");
	}

	pub fn info(&self, message: &str) {
		self.ui.info(message);
		tracing::info!(user_message = message, "Shown to user");
	}

	pub fn warning(&self, message: &str) {
		self.ui.warning(message);
		tracing::warn!(user_message = message, "Shown to user as warning");
	}

	pub fn error(&self, message: &str, hint: Option<&str>) {
		self.ui.error(message, hint);
		tracing::error!(user_message = message, ?hint, "Failure shown to user");
	}
}

impl std::fmt::Debug for Reporter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Reporter").finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Mutex;

	#[derive(Default)]
	struct Transcript {
		lines: Mutex<Vec<String>>,
	}

	impl UserInterface for Transcript {
		fn pick_folder(&self, _title: &str) -> Result<Option<PathBuf>, io::Error> {
			Ok(Some(PathBuf::from("/srv/site/css")))
		}

		fn info(&self, message: &str) {
			self.lines.lock().unwrap().push(format!("info: {message}"));
		}

		fn success(&self, message: &str) {
			self.lines.lock().unwrap().push(format!("success: {message}"));
		}

		fn warning(&self, message: &str) {
			self.lines.lock().unwrap().push(format!("warning: {message}"));
		}

		fn error(&self, message: &str, hint: Option<&str>) {
			self.lines.lock().unwrap().push(format!("error: {message} ({})", hint.unwrap_or("-")));
		}
	}

	#[test]
	fn messages_reach_the_interface() {
		let transcript = Arc::new(Transcript::default());
		let reporter = Reporter::new(transcript.clone());

		reporter.info("Found 3 custom properties");
		reporter.success("Inserted var(--gap)");
		reporter.warning("No folder selected yet");
		reporter.error("Failed to scan /srv/site", Some("check the folder permissions"));

		assert_eq!(
			*transcript.lines.lock().unwrap(),
			vec![
				"info: Found 3 custom properties",
				"success: Inserted var(--gap)",
				"warning: No folder selected yet",
				"error: Failed to scan /srv/site (check the folder permissions)",
			]
		);
	}

	#[test]
	fn picker_answer_is_passed_through() {
		let reporter = Reporter::new(Arc::new(Transcript::default()));
		assert_eq!(reporter.pick_folder("Select CSS Folder").unwrap(), Some(PathBuf::from("/srv/site/css")));
		assert_eq!(Reporter::headless().pick_folder("Select CSS Folder").unwrap(), None);
	}
}
