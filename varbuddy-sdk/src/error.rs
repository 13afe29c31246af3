use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for scanning, session and editor operations.
#[derive(Error, Debug)]
pub enum Error {
	#[error("Cannot read directory {path:?}")]
	ReadDir {
		#[source]
		source: std::io::Error,
		path: PathBuf,
	},

	#[error("Cannot read stylesheet {path:?}")]
	ReadFile {
		#[source]
		source: std::io::Error,
		path: PathBuf,
	},

	#[error("{0:?} is not a directory")]
	NotADirectory(PathBuf),

	#[error("Symbolic link {path:?} points back to its ancestor {ancestor:?}")]
	SymlinkLoop { path: PathBuf, ancestor: PathBuf },

	#[error("Offset {0} is not a valid insertion point in the document")]
	InvalidPosition(usize),

	#[error("Cannot read configuration file {path:?}")]
	ReadConfig {
		#[source]
		source: std::io::Error,
		path: PathBuf,
	},

	#[error("Invalid configuration in {path:?}")]
	Config {
		#[source]
		source: toml::de::Error,
		path: PathBuf,
	},

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl Error {
	/// Converts a traversal failure, keeping the path that could not be listed.
	pub(crate) fn from_walk(err: walkdir::Error, root: &std::path::Path) -> Self {
		let path = err.path().unwrap_or(root).to_path_buf();
		if let Some(ancestor) = err.loop_ancestor() {
			return Error::SymlinkLoop {
				path,
				ancestor: ancestor.to_path_buf(),
			};
		}
		match err.into_io_error() {
			Some(source) => Error::ReadDir { source, path },
			None => Error::Other(anyhow::anyhow!("traversal of {path:?} failed")),
		}
	}

	/// A short suggestion shown next to the error message, if one applies.
	pub fn hint(&self) -> Option<&'static str> {
		match self {
			Error::ReadDir { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
				Some("the folder may have been moved or deleted; select it again")
			}
			Error::ReadDir { .. } => Some("check the folder permissions"),
			Error::ReadFile { source, .. } if source.kind() == std::io::ErrorKind::InvalidData => {
				Some("stylesheets must be UTF-8 encoded")
			}
			Error::ReadConfig { .. } => Some("pass an existing UTF-8 TOML file with --config"),
			Error::SymlinkLoop { .. } => Some("disable `follow_symlinks` or remove the looping link"),
			_ => None,
		}
	}
}
