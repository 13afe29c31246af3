use std::{io::Error, path::PathBuf};

/// An abstract contract for all user-facing interactions of a host.
pub trait UserInterface: Send + Sync {
	// --- User Input ---

	/// Asks the user for a directory. `Ok(None)` means the user cancelled.
	fn pick_folder(&self, title: &str) -> Result<Option<PathBuf>, Error>;

	// --- Structured Messaging ---
	fn info(&self, message: &str);
	fn success(&self, message: &str);
	fn warning(&self, message: &str);
	fn error(&self, message: &str, hint: Option<&str>);
}

/// A user interface that shows nothing and never picks a folder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl UserInterface for Headless {
	fn pick_folder(&self, _title: &str) -> Result<Option<PathBuf>, Error> {
		Ok(None)
	}

	fn info(&self, _message: &str) {}

	fn success(&self, _message: &str) {}

	fn warning(&self, _message: &str) {}

	fn error(&self, _message: &str, _hint: Option<&str>) {}
}
