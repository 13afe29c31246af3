use std::{io, path::PathBuf};

use path_clean::PathClean;

use super::Expand;

pub trait Absolutize {
	/// Turns a user-supplied path into an absolute, lexically cleaned one.
	///
	/// `~` is expanded first; relative paths are resolved against the current
	/// working directory. The filesystem is not consulted, so the path does not
	/// need to exist.
	///
	/// `..` is collapsed lexically: `/site/link/..` becomes `/site` even when
	/// `link` is a symbolic link whose target lives elsewhere.
	fn absolutize(self) -> io::Result<PathBuf>
	where
		Self: Sized;
}

impl<T: Into<PathBuf>> Absolutize for T {
	fn absolutize(self) -> io::Result<PathBuf> {
		let path = self.into().expand_user();
		if path.is_absolute() {
			return Ok(path.clean());
		}
		Ok(std::env::current_dir()?.join(path).clean())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn relative_is_joined_to_cwd() {
		let cwd = std::env::current_dir().unwrap();
		assert_eq!("styles/./tokens".absolutize().unwrap(), cwd.join("styles/tokens"));
	}

	#[test]
	fn absolute_is_cleaned() {
		let dir = tempfile::tempdir().unwrap();
		let messy = dir.path().join("a").join("..").join("b");
		assert_eq!(messy.absolutize().unwrap(), dir.path().join("b"));
	}

	#[cfg(target_family = "unix")]
	#[test]
	fn parent_of_symlink_is_lexical() {
		let dir = tempfile::tempdir().unwrap();
		let elsewhere = tempfile::tempdir().unwrap();
		std::os::unix::fs::symlink(elsewhere.path(), dir.path().join("link")).unwrap();

		let through_link = dir.path().join("link").join("..");
		assert_eq!(through_link.absolutize().unwrap(), dir.path());
	}
}
