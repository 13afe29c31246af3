use std::path::{Path, PathBuf};

use futures::{stream, StreamExt, TryStreamExt};

use crate::{error::Error, options::ScanOptions, property::PropertySet};

pub mod extract;
pub mod traverse;

pub use extract::{extract, is_property_name};
pub use traverse::discover;

/// Walks a directory tree and collects the custom properties of every stylesheet in it.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
	options: ScanOptions,
}

impl Scanner {
	pub fn new(options: ScanOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &ScanOptions {
		&self.options
	}

	/// Runs one full scan of `root`.
	///
	/// The scan is all-or-nothing: an unreadable directory, or a stylesheet that
	/// cannot be read or is not valid UTF-8, fails the whole call.
	#[tracing::instrument(skip_all, fields(root = %root.display()))]
	pub async fn scan(&self, root: &Path) -> Result<PropertySet, Error> {
		let files = {
			let root = root.to_path_buf();
			let options = self.options.clone();
			tokio::task::spawn_blocking(move || discover(&root, &options))
				.await
				.map_err(|e| Error::Other(e.into()))??
		};
		let file_count = files.len();

		let per_file: Vec<Vec<String>> = stream::iter(files)
			.map(read_properties)
			.buffer_unordered(num_cpus::get())
			.try_collect()
			.await?;

		let properties: PropertySet = per_file.into_iter().flatten().collect();
		tracing::debug!(files = file_count, properties = properties.len(), "Scan finished");
		Ok(properties)
	}
}

async fn read_properties(path: PathBuf) -> Result<Vec<String>, Error> {
	let content = match tokio::fs::read_to_string(&path).await {
		Ok(content) => content,
		Err(source) => return Err(Error::ReadFile { source, path }),
	};
	let found: Vec<String> = extract(&content).map(str::to_string).collect();
	tracing::trace!(path = %path.display(), matches = found.len(), "Extracted properties");
	Ok(found)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::fs;

	fn fixture() -> tempfile::TempDir {
		let dir = tempfile::tempdir().unwrap();
		fs::write(
			dir.path().join("styles.css"),
			":root { --primary-color: #007bff; --secondary-color: #6c757d; }",
		)
		.unwrap();
		fs::create_dir_all(dir.path().join("sub")).unwrap();
		fs::write(dir.path().join("sub/components.css"), ".c { --padding: 1rem; }").unwrap();
		dir
	}

	#[tokio::test]
	async fn scans_nested_tree() {
		let dir = fixture();
		let properties = Scanner::default().scan(dir.path()).await.unwrap();
		assert_eq!(properties.as_slice(), ["--padding", "--primary-color", "--secondary-color"]);
	}

	#[tokio::test]
	async fn repeated_scans_are_identical() {
		let dir = fixture();
		let scanner = Scanner::default();
		let first = scanner.scan(dir.path()).await.unwrap();
		let second = scanner.scan(dir.path()).await.unwrap();
		assert_eq!(first, second);
	}

	#[tokio::test]
	async fn duplicates_across_files_collapse() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("a.css"), "--gap: 1px; --gap: 2px; --z: 0;").unwrap();
		fs::write(dir.path().join("b.scss"), "$x: var(--gap); --a: 1;").unwrap();
		let properties = Scanner::default().scan(dir.path()).await.unwrap();
		assert_eq!(properties.as_slice(), ["--a", "--gap", "--z"]);
	}

	#[tokio::test]
	async fn other_extensions_are_ignored() {
		let dir = fixture();
		fs::write(dir.path().join("notes.txt"), "--should-not-appear").unwrap();
		let properties = Scanner::default().scan(dir.path()).await.unwrap();
		assert!(!properties.contains("--should-not-appear"));
		assert_eq!(properties.len(), 3);
	}

	#[tokio::test]
	async fn output_is_strictly_ascending_and_well_formed() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(
			dir.path().join("mixed.css"),
			"--b: 1; --B: 2; --a-1: 3; --123-invalid: 4; --invalid@property: 5; --_x: 6; --b: 7;",
		)
		.unwrap();
		let properties = Scanner::default().scan(dir.path()).await.unwrap();
		assert!(properties.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
		assert!(properties.iter().all(is_property_name));
		assert!(!properties.contains("--123-invalid"));
		assert!(!properties.contains("--invalid@property"));
	}

	#[tokio::test]
	async fn empty_root_yields_empty_set() {
		let dir = tempfile::tempdir().unwrap();
		let properties = Scanner::default().scan(dir.path()).await.unwrap();
		assert!(properties.is_empty());
	}

	#[tokio::test]
	async fn stylesheet_without_properties_contributes_nothing() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("plain.css"), "body { margin: 0; }").unwrap();
		assert!(Scanner::default().scan(dir.path()).await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn undecodable_file_aborts_scan() {
		let dir = fixture();
		fs::write(dir.path().join("broken.css"), [0x2d, 0x2d, 0x61, 0xff, 0xfe]).unwrap();
		match Scanner::default().scan(dir.path()).await {
			Err(Error::ReadFile { path, source }) => {
				assert!(path.ends_with("broken.css"));
				assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
			}
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[tokio::test]
	async fn missing_root_fails() {
		let dir = tempfile::tempdir().unwrap();
		let result = Scanner::default().scan(&dir.path().join("missing")).await;
		assert!(matches!(result, Err(Error::ReadDir { .. })));
	}

	#[tokio::test]
	async fn custom_extensions_are_honoured() {
		let dir = fixture();
		fs::write(dir.path().join("theme.less"), "@x: var(--less-only);").unwrap();
		let scanner = Scanner::new(ScanOptions {
			extensions: vec![".less".into()],
			..Default::default()
		});
		assert_eq!(scanner.scan(dir.path()).await.unwrap().as_slice(), ["--less-only"]);
	}
}
