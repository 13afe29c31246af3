use serde::{Deserialize, Serialize};

fn default_extensions() -> Vec<String> {
	vec![".css".to_string(), ".scss".to_string()]
}

/// Controls which entries a scan visits and which files it reads.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanOptions {
	/// Case-sensitive file name suffixes that mark a stylesheet.
	#[serde(default = "default_extensions")]
	pub extensions: Vec<String>,
	#[serde(default)]
	pub follow_symlinks: bool,
	/// Skip dotfiles and dot-directories below the root.
	#[serde(default)]
	pub skip_hidden: bool,
	/// Entry names (e.g. `node_modules`) that are pruned from the walk.
	#[serde(default)]
	pub exclude: Vec<String>,
}

impl Default for ScanOptions {
	fn default() -> Self {
		Self {
			extensions: default_extensions(),
			follow_symlinks: false,
			skip_hidden: false,
			exclude: Vec::new(),
		}
	}
}

impl ScanOptions {
	#[must_use]
	pub fn is_stylesheet(&self, file_name: &str) -> bool {
		self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
	}

	#[must_use]
	pub fn is_excluded(&self, name: &str) -> bool {
		self.exclude.iter().any(|excluded| excluded == name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_extensions_are_case_sensitive() {
		let options = ScanOptions::default();
		assert!(options.is_stylesheet("theme.css"));
		assert!(options.is_stylesheet("_mixins.scss"));
		assert!(!options.is_stylesheet("THEME.CSS"));
		assert!(!options.is_stylesheet("notes.txt"));
		assert!(!options.is_stylesheet("theme.css.map"));
	}

	#[test]
	fn custom_extensions() {
		let options = ScanOptions {
			extensions: vec![".less".into()],
			..Default::default()
		};
		assert!(options.is_stylesheet("site.less"));
		assert!(!options.is_stylesheet("site.css"));
	}

	#[test]
	fn exclude_matches_whole_names() {
		let options = ScanOptions {
			exclude: vec!["node_modules".into()],
			..Default::default()
		};
		assert!(options.is_excluded("node_modules"));
		assert!(!options.is_excluded("node_modules_backup"));
	}
}
