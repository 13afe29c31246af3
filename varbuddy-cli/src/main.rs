use std::process::ExitCode;

use crate::cmd::{App, Reported};
use clap::Parser;
mod cli;
mod cmd;

#[tokio::main]
async fn main() -> ExitCode {
	let app: App = App::parse();
	let _guard = cmd::logs::init();
	match app.run().await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) if err.is::<Reported>() => ExitCode::FAILURE,
		Err(err) => {
			tracing::error!(error = ?err, "Command failed");
			cli::CliUi::print_error(&err);
			ExitCode::FAILURE
		}
	}
}
