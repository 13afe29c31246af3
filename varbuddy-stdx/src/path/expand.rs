use std::{ffi::OsStr, path::PathBuf};

pub trait Expand {
	/// Replaces a leading `~` component with the current user's home directory.
	///
	/// Paths without a leading `~`, or systems without a known home directory,
	/// are returned unchanged.
	fn expand_user(self) -> PathBuf
	where
		Self: Sized;
}

impl<T: Into<PathBuf>> Expand for T {
	fn expand_user(self) -> PathBuf {
		let path = self.into();
		let mut components = path.components();
		if let Some(component) = components.next() {
			if component.as_os_str() == OsStr::new("~") {
				if let Some(mut home) = dirs::home_dir() {
					home.extend(components);
					return home;
				}
			}
		}
		path
	}
}
