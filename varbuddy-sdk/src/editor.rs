//! The text-editing side of the host: where a chosen property gets inserted.

use crate::error::Error;

/// One cursor or selection. Offsets are byte offsets into the document text;
/// `active` is the end the user is typing at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
	pub anchor: usize,
	pub active: usize,
}

impl Selection {
	pub fn cursor(offset: usize) -> Self {
		Self {
			anchor: offset,
			active: offset,
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.active
	}
}

/// A document that can receive text at several points in one edit.
pub trait TextDocument {
	fn selections(&self) -> &[Selection];

	/// Inserts `text` at every offset in `offsets`, all interpreted against the
	/// text as it was before the edit. Either every insertion lands or none does.
	fn insert_all(&mut self, offsets: &[usize], text: &str) -> Result<(), Error>;
}

/// Gives access to whichever document currently has focus.
pub trait EditorHost {
	fn focused_document(&mut self) -> Option<&mut dyn TextDocument>;
}

/// A host with at most one document; `None` has nothing focused.
impl<D: TextDocument> EditorHost for Option<D> {
	fn focused_document(&mut self) -> Option<&mut dyn TextDocument> {
		self.as_mut().map(|document| document as &mut dyn TextDocument)
	}
}

/// The text inserted for a property, e.g. `var(--gap)`.
pub fn reference(property: &str) -> String {
	format!("var({property})")
}

/// Inserts a reference to `property` at the active end of every selection in
/// the focused document. Returns `false` when nothing has focus.
pub fn insert_reference(host: &mut dyn EditorHost, property: &str) -> Result<bool, Error> {
	let Some(document) = host.focused_document() else {
		tracing::debug!(property, "No focused document, nothing inserted");
		return Ok(false);
	};
	let offsets: Vec<usize> = document.selections().iter().map(|s| s.active).collect();
	document.insert_all(&offsets, &reference(property))?;
	tracing::debug!(property, cursors = offsets.len(), "Inserted property reference");
	Ok(true)
}

/// A plain in-memory text document with any number of selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
	text: String,
	selections: Vec<Selection>,
}

impl Buffer {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			selections: Vec::new(),
		}
	}

	/// Replaces the selections after checking each offset against the text.
	pub fn with_selections(mut self, selections: Vec<Selection>) -> Result<Self, Error> {
		for selection in &selections {
			self.check(selection.anchor)?;
			self.check(selection.active)?;
		}
		self.selections = selections;
		Ok(self)
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn into_text(self) -> String {
		self.text
	}

	/// Byte offset of a 1-based line and 1-based character column.
	///
	/// A column one past the end of the line addresses the line end.
	pub fn offset_of(&self, line: usize, column: usize) -> Option<usize> {
		if line == 0 || column == 0 {
			return None;
		}
		let mut start = 0;
		for _ in 1..line {
			start += self.text[start..].find('\n')? + 1;
		}
		let line_text = self.text[start..].split('\n').next().unwrap_or_default();
		let line_text = line_text.strip_suffix('\r').unwrap_or(line_text);
		let mut chars = line_text.char_indices().map(|(i, _)| i).chain(std::iter::once(line_text.len()));
		chars.nth(column - 1).map(|i| start + i)
	}

	fn check(&self, offset: usize) -> Result<(), Error> {
		if self.text.is_char_boundary(offset) {
			Ok(())
		} else {
			Err(Error::InvalidPosition(offset))
		}
	}
}

impl TextDocument for Buffer {
	fn selections(&self) -> &[Selection] {
		&self.selections
	}

	fn insert_all(&mut self, offsets: &[usize], text: &str) -> Result<(), Error> {
		for &offset in offsets {
			self.check(offset)?;
		}

		let mut descending = offsets.to_vec();
		descending.sort_unstable_by(|a, b| b.cmp(a));
		for &offset in &descending {
			self.text.insert_str(offset, text);
		}

		// A position moves right once for every insertion at or before it, so a
		// cursor sitting on an insertion point ends up after the inserted text.
		let shift = |position: usize| position + text.len() * offsets.iter().filter(|&&o| o <= position).count();
		for selection in &mut self.selections {
			selection.anchor = shift(selection.anchor);
			selection.active = shift(selection.active);
		}
		Ok(())
	}
}
