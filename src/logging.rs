//! File-backed `tracing` setup.
//!
//! The terminal is in raw mode while the picker runs, so log lines go to a
//! file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Build the filter: `RUST_LOG` wins, else `level` for every target.
pub fn filter_for(level: &str) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber writing to `path`.
///
/// Only the first call does anything; later calls return `Ok(false)`.
pub fn initialize(level: &str, path: &Path) -> Result<bool> {
	if INITIALIZED.get().is_some() {
		return Ok(false);
	}

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let layer = tracing_subscriber::fmt::layer()
		.with_writer(file)
		.with_ansi(false)
		.with_target(true);
	tracing_subscriber::registry()
		.with(filter_for(level))
		.with(layer)
		.try_init()
		.context("failed to install the tracing subscriber")?;

	let _ = INITIALIZED.set(());
	Ok(true)
}
