use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use clap::{Parser, Subcommand, ValueHint};
use varbuddy_sdk::{reporter::Reporter, session::Session, settings::Settings};

use crate::cli::CliUi;
use browse::Browse;
use insert::Insert;
use scan::Scan;

mod browse;
mod insert;
pub mod logs;
mod scan;
mod target;

#[derive(Subcommand)]
enum Command {
	Scan(Scan),
	Insert(Insert),
	Browse(Browse),
}

#[derive(Parser)]
#[command(about, author, version)]
pub struct App {
	/// Configuration file; defaults to `<config dir>/varbuddy/config.toml` when present.
	#[arg(long, short = 'c', global = true, value_hint = ValueHint::FilePath)]
	config: Option<PathBuf>,
	#[command(subcommand)]
	command: Command,
}

/// The failure was already shown to the user by the session's reporter.
#[derive(Debug, thiserror::Error)]
#[error("the error has already been reported")]
pub struct Reported;

#[async_trait]
pub trait Cmd {
	async fn run(self, settings: Settings) -> Result<()>;
}

impl App {
	pub async fn run(self) -> Result<()> {
		let settings = Settings::load(self.config.as_deref())?;
		match self.command {
			Command::Scan(scan) => scan.run(settings).await,
			Command::Insert(insert) => insert.run(settings).await,
			Command::Browse(browse) => browse.run(settings).await,
		}
	}
}

/// A session that reports through the terminal and prints every published list summary.
fn session(settings: Settings, ui: &Arc<CliUi>) -> Session {
	let session = Session::from_settings(settings, Reporter::new(ui.clone()));
	session.subscribe(ui.clone());
	session
}
