use chrono::Local;
use std::path::PathBuf;
use tracing_appender::{non_blocking::WorkerGuard, rolling::RollingFileAppender, rolling::Rotation};
use tracing_subscriber::{
	Layer,
	filter::LevelFilter,
	fmt::{self},
	layer::SubscriberExt,
	util::SubscriberInitExt,
};
use varbuddy_sdk::PROJECT_NAME;

fn logs_dir() -> PathBuf {
	dirs::data_local_dir()
		.map(|dir| dir.join(PROJECT_NAME).join("logs"))
		.unwrap_or_else(|| PathBuf::from(".").join("logs"))
}

/// Installs a file logger for this run. Returns `None` when the log file
/// cannot be created, in which case the run goes unlogged.
pub fn init() -> Option<WorkerGuard> {
	let logs_dir = logs_dir();

	// One file per run, named after the start time.
	let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S%.3f").to_string();
	let file_appender = RollingFileAppender::builder()
		.rotation(Rotation::NEVER)
		.filename_prefix(timestamp)
		.filename_suffix("log")
		.build(&logs_dir)
		.ok()?;
	let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

	let file_layer = fmt::layer()
		.with_writer(non_blocking_writer)
		.with_ansi(false)
		.pretty()
		.with_filter(LevelFilter::TRACE);

	tracing_subscriber::registry().with(file_layer).init();

	tracing::debug!("Logging initialized. Log file in: {}", logs_dir.display());

	Some(guard)
}
