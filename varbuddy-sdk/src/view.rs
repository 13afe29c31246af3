use std::{fmt, path::Path};

use crate::session::Snapshot;

/// What a property list should show, derived from the published snapshot and the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState<'a> {
	/// No folder has been scanned yet.
	NoRoot,
	/// The folder was scanned but contained no custom properties.
	Empty { root: &'a Path },
	/// The search term matched nothing.
	NoMatches { root: &'a Path, total: usize },
	Showing {
		root: &'a Path,
		properties: Vec<&'a str>,
		total: usize,
	},
}

impl<'a> DisplayState<'a> {
	pub fn new(snapshot: Option<&'a Snapshot>, search: &str) -> Self {
		let Some(snapshot) = snapshot else {
			return Self::NoRoot;
		};
		let root = snapshot.root.as_path();
		let total = snapshot.properties.len();
		if total == 0 {
			return Self::Empty { root };
		}
		let properties = snapshot.properties.filter(search);
		if properties.is_empty() {
			return Self::NoMatches { root, total };
		}
		Self::Showing { root, properties, total }
	}

	/// The entries to list; empty for every state but [`DisplayState::Showing`].
	pub fn properties(&self) -> &[&'a str] {
		match self {
			Self::Showing { properties, .. } => properties,
			_ => &[],
		}
	}
}

impl fmt::Display for DisplayState<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoRoot => write!(f, "Select a folder to scan for CSS custom properties"),
			Self::Empty { root } => write!(f, "No custom properties found in {}", root.display()),
			Self::NoMatches { .. } => write!(f, "No matching properties found"),
			Self::Showing { properties, total, .. } => {
				write!(f, "Showing {} of {} properties", properties.len(), total)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	fn snapshot(properties: &[&str]) -> Snapshot {
		Snapshot {
			root: PathBuf::from("/srv/site/css"),
			properties: properties.iter().copied().collect(),
		}
	}

	#[test]
	fn never_scanned() {
		let state = DisplayState::new(None, "");
		assert_eq!(state, DisplayState::NoRoot);
		assert_eq!(state.to_string(), "Select a folder to scan for CSS custom properties");
	}

	#[test]
	fn scanned_without_properties() {
		let snapshot = snapshot(&[]);
		let state = DisplayState::new(Some(&snapshot), "anything");
		assert!(matches!(state, DisplayState::Empty { .. }));
		assert!(state.properties().is_empty());
	}

	#[test]
	fn filtered_view_counts() {
		let snapshot = snapshot(&["--gap", "--text-color", "--bg-color"]);
		let state = DisplayState::new(Some(&snapshot), "Color");
		assert_eq!(state.properties(), ["--bg-color", "--text-color"]);
		assert_eq!(state.to_string(), "Showing 2 of 3 properties");
	}

	#[test]
	fn filter_without_matches() {
		let snapshot = snapshot(&["--gap"]);
		let state = DisplayState::new(Some(&snapshot), "zzz");
		assert_eq!(state, DisplayState::NoMatches { root: Path::new("/srv/site/css"), total: 1 });
		assert_eq!(state.to_string(), "No matching properties found");
	}
}
