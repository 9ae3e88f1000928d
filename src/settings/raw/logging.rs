use std::path::PathBuf;

use serde::Deserialize;

use super::super::resolved::LoggingConfig;
use super::super::util::non_blank;
use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn resolve(self) -> LoggingConfig {
		let defaults = LoggingConfig::default();
		LoggingConfig {
			level: non_blank(self.level).unwrap_or(defaults.level),
			file: self.file,
		}
	}
}
