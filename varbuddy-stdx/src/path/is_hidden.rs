use std::path::Path;

pub trait IsHidden {
	type Err;
	fn is_hidden(&self) -> Result<bool, Self::Err>;
}

#[cfg(target_family = "unix")]
impl IsHidden for Path {
	type Err = std::convert::Infallible;

	fn is_hidden(&self) -> Result<bool, Self::Err> {
		match self.file_name() {
			None => Ok(false),
			Some(filename) => Ok(filename.to_string_lossy().starts_with('.')),
		}
	}
}

#[cfg(target_family = "windows")]
impl IsHidden for Path {
	type Err = std::io::Error;

	fn is_hidden(&self) -> Result<bool, Self::Err> {
		use std::{fs, os::windows::prelude::*};
		let metadata = fs::metadata(self)?;
		let attributes = metadata.file_attributes();
		Ok((attributes & 0x2) > 0)
	}
}
