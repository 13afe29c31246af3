use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The custom properties found by one scan, sorted by code point and free of duplicates.
///
/// A set is always built in one go from an iterator of names and never edited afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", from = "Vec<String>")]
pub struct PropertySet(Vec<String>);

impl PropertySet {
	#[must_use]
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.0.binary_search_by(|probe| probe.as_str().cmp(name)).is_ok()
	}

	/// Entries whose lowercase form contains the lowercase `term`, in set order.
	#[must_use]
	pub fn filter(&self, term: &str) -> Vec<&str> {
		filter(&self.0, term)
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<String> {
		self.0
	}
}

impl<S: Into<String>> FromIterator<S> for PropertySet {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let unique: BTreeSet<String> = iter.into_iter().map(Into::into).collect();
		Self(unique.into_iter().collect())
	}
}

impl From<Vec<String>> for PropertySet {
	fn from(names: Vec<String>) -> Self {
		names.into_iter().collect()
	}
}

impl From<PropertySet> for Vec<String> {
	fn from(set: PropertySet) -> Self {
		set.0
	}
}

impl<'a> IntoIterator for &'a PropertySet {
	type Item = &'a String;
	type IntoIter = std::slice::Iter<'a, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Case-insensitive substring filter that keeps the relative order of `properties`.
///
/// An empty `term` keeps everything.
pub fn filter<'a, S: AsRef<str>>(properties: &'a [S], term: &str) -> Vec<&'a str> {
	let needle = term.to_lowercase();
	properties
		.iter()
		.map(AsRef::as_ref)
		.filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
		.collect()
}
