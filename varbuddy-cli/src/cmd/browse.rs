use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use clap::{Parser, ValueHint};
use varbuddy_sdk::{
	editor::reference, reporter::ui::UserInterface, session::Session, settings::Settings, view::DisplayState,
};

use super::{Cmd, session, target::Target};
use crate::cli::CliUi;

/// Browse the custom properties of a folder interactively and pick one.
#[derive(Parser, Debug)]
pub struct Browse {
	/// Folder to scan; asked for interactively when omitted.
	#[arg(value_hint = ValueHint::DirPath)]
	root: Option<PathBuf>,
	#[command(flatten)]
	target: Target,
}

enum Action {
	Pick(String),
	Filter,
	Refresh,
	SelectFolder,
	Quit,
}

#[async_trait]
impl Cmd for Browse {
	async fn run(self, settings: Settings) -> Result<()> {
		let ui = CliUi::new();
		let session = session(settings, &ui);

		// Scan failures are reported by the session and leave the previous list in place.
		match &self.root {
			Some(root) => {
				let _ = session.select_root(root).await;
			}
			None => {
				let _ = session.choose_root().await;
			}
		}

		let mut search = String::new();
		loop {
			match next_action(&ui, &session, &search)? {
				Action::Pick(property) => return self.finish(&ui, &session, &property),
				Action::Filter => search = ui.input("Filter properties", &search)?,
				Action::Refresh => {
					if session.root().is_none() {
						ui.warning("No folder selected yet");
					}
					let _ = session.refresh().await;
				}
				Action::SelectFolder => {
					let _ = session.choose_root().await;
				}
				Action::Quit => return Ok(()),
			}
		}
	}
}

impl Browse {
	fn finish(&self, ui: &CliUi, session: &Session, property: &str) -> Result<()> {
		if self.target.insert(session, property)? {
			ui.success(&format!("Inserted {}", reference(property)));
		} else {
			println!("{}", reference(property));
		}
		Ok(())
	}
}

fn next_action(ui: &CliUi, session: &Session, search: &str) -> Result<Action> {
	let snapshot = session.snapshot();
	let state = DisplayState::new(snapshot.as_deref(), search);
	ui.info(&state.to_string());

	let properties: Vec<String> = state.properties().iter().map(|p| p.to_string()).collect();
	let mut items = properties.clone();
	items.extend(
		[
			format!("Filter… (current: \"{search}\")"),
			"Refresh".to_string(),
			"Select folder…".to_string(),
			"Quit".to_string(),
		]
		.into_iter(),
	);

	let Some(index) = ui.select("Insert a property", &items)? else {
		return Ok(Action::Quit);
	};
	let action = match index.checked_sub(properties.len()) {
		None => Action::Pick(properties[index].clone()),
		Some(0) => Action::Filter,
		Some(1) => Action::Refresh,
		Some(2) => Action::SelectFolder,
		Some(_) => Action::Quit,
	};
	Ok(action)
}
