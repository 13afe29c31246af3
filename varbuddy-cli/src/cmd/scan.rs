use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use clap::{Parser, ValueHint};
use varbuddy_sdk::{settings::Settings, view::DisplayState};

use super::{Cmd, Reported, session};
use crate::cli::CliUi;
use varbuddy_sdk::reporter::ui::UserInterface;

/// Scan a folder and list its CSS custom properties.
#[derive(Parser, Debug)]
pub struct Scan {
	#[arg(value_hint = ValueHint::DirPath)]
	root: PathBuf,
	/// Only list properties containing this text (case-insensitive).
	#[arg(long, short = 'f', default_value = "")]
	filter: String,
	/// Print the scanned root and the full property list as JSON.
	#[arg(long, conflicts_with = "filter")]
	json: bool,
}

#[async_trait]
impl Cmd for Scan {
	async fn run(self, settings: Settings) -> Result<()> {
		let ui = CliUi::new();
		let session = session(settings, &ui);
		let snapshot = session.select_root(&self.root).await.map_err(|_| Reported)?;

		if self.json {
			println!("{}", serde_json::to_string_pretty(&*snapshot)?);
			return Ok(());
		}

		let state = DisplayState::new(Some(&*snapshot), &self.filter);
		for property in state.properties() {
			println!("{property}");
		}
		ui.info(&state.to_string());
		Ok(())
	}
}
