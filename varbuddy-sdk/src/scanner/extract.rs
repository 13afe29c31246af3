use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	static ref PROPERTY: Regex = Regex::new(r"--[A-Za-z_][A-Za-z0-9_-]*").unwrap();
	static ref PROPERTY_NAME: Regex = Regex::new(r"^--[A-Za-z_][A-Za-z0-9_-]*$").unwrap();
}

/// Every custom property token in `text`, left to right, non-overlapping.
///
/// No word boundary is required, so `a--gap` still yields `--gap`.
pub fn extract(text: &str) -> impl Iterator<Item = &str> {
	PROPERTY.find_iter(text).map(|m| m.as_str())
}

/// Whether `name` is exactly one custom property identifier.
#[must_use]
pub fn is_property_name(name: &str) -> bool {
	PROPERTY_NAME.is_match(name)
}
