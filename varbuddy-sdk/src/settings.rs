use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{error::Error, options::ScanOptions, PROJECT_NAME};

/// User configuration, read from a TOML file.
///
/// ```toml
/// [scan]
/// extensions = [".css", ".scss", ".less"]
/// skip_hidden = true
/// exclude = ["node_modules", "dist"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
	#[serde(default)]
	pub scan: ScanOptions,
}

impl Settings {
	/// `<config_dir>/varbuddy/config.toml`, when the platform has a config directory.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
	}

	/// Loads settings from `explicit` if given, otherwise from [`Settings::default_path`]
	/// when that file exists, otherwise falls back to the defaults.
	pub fn load(explicit: Option<&Path>) -> Result<Self, Error> {
		match explicit {
			Some(path) => Self::from_file(path),
			None => match Self::default_path() {
				Some(path) if path.is_file() => Self::from_file(&path),
				_ => {
					tracing::debug!("No configuration file found, using defaults");
					Ok(Self::default())
				}
			},
		}
	}

	pub fn from_file(path: &Path) -> Result<Self, Error> {
		let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
			source,
			path: path.to_path_buf(),
		})?;
		let settings = toml::from_str(&content).map_err(|source| Error::Config {
			source,
			path: path.to_path_buf(),
		})?;
		tracing::debug!(path = %path.display(), "Loaded configuration");
		Ok(settings)
	}
}
