use std::path::{Path, PathBuf};

use varbuddy_stdx::path::IsHidden;
use walkdir::{DirEntry, WalkDir};

use crate::{error::Error, options::ScanOptions};

/// Collects every stylesheet below `root`.
///
/// The first directory that cannot be listed aborts the walk; nothing found
/// before it is returned.
pub fn discover(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, Error> {
	let metadata = std::fs::metadata(root).map_err(|source| Error::ReadDir {
		source,
		path: root.to_path_buf(),
	})?;
	if !metadata.is_dir() {
		return Err(Error::NotADirectory(root.to_path_buf()));
	}

	let walker = WalkDir::new(root).follow_links(options.follow_symlinks);

	let mut files = Vec::new();
	for entry in walker.into_iter().filter_entry(|e| prefilter(e, options)) {
		let entry = entry.map_err(|e| Error::from_walk(e, root))?;
		if postfilter(&entry, options) {
			files.push(entry.into_path());
		}
	}

	tracing::debug!(root = %root.display(), files = files.len(), "Collected stylesheets");
	Ok(files)
}

/// Prunes excluded and hidden entries before walkdir descends into them.
fn prefilter(entry: &DirEntry, options: &ScanOptions) -> bool {
	if entry.depth() == 0 {
		return true;
	}
	let name = entry.file_name().to_string_lossy();
	if options.is_excluded(&name) {
		return false;
	}
	if options.skip_hidden && entry.path().is_hidden().unwrap_or(false) {
		return false;
	}
	true
}

fn postfilter(entry: &DirEntry, options: &ScanOptions) -> bool {
	entry.file_type().is_file() && options.is_stylesheet(&entry.file_name().to_string_lossy())
}
