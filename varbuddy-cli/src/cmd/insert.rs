use std::path::PathBuf;

use anyhow::{Result, bail};
use async_trait::async_trait;
use clap::{Parser, ValueHint};
use varbuddy_sdk::{
	editor::reference, reporter::ui::UserInterface, scanner::is_property_name, settings::Settings,
};

use super::{
	Cmd, session,
	target::{Position, Target},
};
use crate::cli::CliUi;

/// Insert `var(<PROPERTY>)` into a file at one or more cursor positions.
#[derive(Parser, Debug)]
pub struct Insert {
	/// The custom property to reference, including its leading `--`.
	#[arg(allow_hyphen_values = true)]
	property: String,
	#[arg(long, value_hint = ValueHint::FilePath)]
	file: PathBuf,
	/// Cursor positions as LINE:COLUMN; repeat or separate with commas for several cursors.
	#[arg(long, value_delimiter = ',', required = true, num_args = 1..)]
	at: Vec<Position>,
}

#[async_trait]
impl Cmd for Insert {
	async fn run(self, settings: Settings) -> Result<()> {
		if !is_property_name(&self.property) {
			bail!("`{}` is not a custom property name (expected something like `--primary-color`)", self.property);
		}
		let ui = CliUi::new();
		let session = session(settings, &ui);
		let target = Target {
			file: Some(self.file),
			at: self.at,
		};
		target.insert(&session, &self.property)?;
		ui.success(&format!(
			"Inserted {} at {} position(s)",
			reference(&self.property),
			target.at.len()
		));
		Ok(())
	}
}
