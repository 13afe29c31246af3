use std::{
	path::{Path, PathBuf},
	sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use serde::{Deserialize, Serialize};
use varbuddy_stdx::path::Absolutize;

use crate::{
	editor::{self, EditorHost},
	error::Error,
	property::PropertySet,
	reporter::Reporter,
	scanner::Scanner,
	settings::Settings,
};

/// A scanned root together with the properties found under it.
///
/// Published as a whole, so readers always see a root and the list that belongs to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
	pub root: PathBuf,
	pub properties: PropertySet,
}

/// Receives every newly published [`Snapshot`].
pub trait PropertiesListener: Send + Sync {
	fn properties_updated(&self, snapshot: &Snapshot);
}

/// Owns the selected root and the last property list, and runs scans one at a time.
pub struct Session {
	scanner: Scanner,
	reporter: Reporter,
	published: RwLock<Option<Arc<Snapshot>>>,
	listeners: RwLock<Vec<Arc<dyn PropertiesListener>>>,
	// Held for the whole duration of a scan.
	scanning: tokio::sync::Mutex<()>,
}

impl Session {
	pub fn new(scanner: Scanner, reporter: Reporter) -> Self {
		Self {
			scanner,
			reporter,
			published: RwLock::new(None),
			listeners: RwLock::new(Vec::new()),
			scanning: tokio::sync::Mutex::new(()),
		}
	}

	pub fn from_settings(settings: Settings, reporter: Reporter) -> Self {
		Self::new(Scanner::new(settings.scan), reporter)
	}

	pub fn subscribe(&self, listener: Arc<dyn PropertiesListener>) {
		write(&self.listeners).push(listener);
	}

	/// The last successfully published snapshot, if any scan has succeeded yet.
	pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
		read(&self.published).clone()
	}

	pub fn root(&self) -> Option<PathBuf> {
		read(&self.published).as_ref().map(|s| s.root.clone())
	}

	/// Scans `path` and, if the scan succeeds, makes it the current root.
	///
	/// On failure the error is reported and returned, and the previous snapshot stays published.
	pub async fn select_root(&self, path: impl Into<PathBuf>) -> Result<Arc<Snapshot>, Error> {
		let path = path.into();
		let root = match path.clone().absolutize() {
			Ok(root) => root,
			Err(err) => {
				let err = Error::from(err);
				self.report_failure(&path, &err);
				return Err(err);
			}
		};
		let _scanning = self.scanning.lock().await;
		self.scan_and_publish(root).await
	}

	/// Lets the user pick a folder through the interface and selects it.
	///
	/// A cancelled picker changes nothing and returns `Ok(None)`.
	pub async fn choose_root(&self) -> Result<Option<Arc<Snapshot>>, Error> {
		match self.reporter.pick_folder("Select CSS Folder")? {
			Some(path) => self.select_root(path).await.map(Some),
			None => Ok(None),
		}
	}

	/// Rescans the current root. Without a root this is a no-op returning `Ok(None)`.
	pub async fn refresh(&self) -> Result<Option<Arc<Snapshot>>, Error> {
		let _scanning = self.scanning.lock().await;
		let Some(root) = self.root() else {
			tracing::debug!("Refresh requested before any folder was selected");
			return Ok(None);
		};
		self.scan_and_publish(root).await.map(Some)
	}

	/// Published properties containing `search`, ignoring case, in list order.
	pub fn filter(&self, search: &str) -> Vec<String> {
		match self.snapshot() {
			Some(snapshot) => snapshot.properties.filter(search).into_iter().map(str::to_string).collect(),
			None => Vec::new(),
		}
	}

	/// Inserts `var(<property>)` at every cursor of the host's focused document.
	pub fn insert(&self, host: &mut dyn EditorHost, property: &str) -> Result<bool, Error> {
		editor::insert_reference(host, property)
	}

	async fn scan_and_publish(&self, root: PathBuf) -> Result<Arc<Snapshot>, Error> {
		let properties = match self.scanner.scan(&root).await {
			Ok(properties) => properties,
			Err(err) => {
				self.report_failure(&root, &err);
				return Err(err);
			}
		};

		let snapshot = Arc::new(Snapshot { root, properties });
		*write(&self.published) = Some(snapshot.clone());
		tracing::info!(
			root = %snapshot.root.display(),
			properties = snapshot.properties.len(),
			"Published new property list"
		);

		let listeners = read(&self.listeners).clone();
		for listener in listeners {
			listener.properties_updated(&snapshot);
		}
		Ok(snapshot)
	}

	fn report_failure(&self, root: &Path, err: &Error) {
		let message = format!("Failed to scan {}: {err}", root.display());
		self.reporter.error(&message, err.hint());
	}
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
	lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
	lock.write().unwrap_or_else(PoisonError::into_inner)
}
