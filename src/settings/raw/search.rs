use clientes_autocomplete::AutocompleteOptions;
use serde::Deserialize;

use super::super::util::{millis, non_blank};
use crate::cli::CliArgs;

/// Controller tuning as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) min_length: Option<usize>,
	pub(super) max_results: Option<usize>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) blur_grace_ms: Option<u64>,
	pub(super) placeholder: Option<String>,
	pub(super) allow_create: Option<bool>,
	pub(super) show_details: Option<bool>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.min_length {
			self.min_length = Some(value);
		}
		if let Some(value) = cli.max_results {
			self.max_results = Some(value);
		}
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
		if let Some(value) = cli.blur_grace_ms {
			self.blur_grace_ms = Some(value);
		}
		if cli.no_create {
			self.allow_create = Some(false);
		}
	}

	pub(super) fn resolve(self) -> (AutocompleteOptions, bool) {
		let defaults = AutocompleteOptions::default();
		let options = AutocompleteOptions {
			placeholder: non_blank(self.placeholder).unwrap_or(defaults.placeholder),
			min_length: self.min_length.unwrap_or(defaults.min_length),
			max_results: self.max_results.unwrap_or(defaults.max_results),
			debounce: self.debounce_ms.map(millis).unwrap_or(defaults.debounce),
			blur_grace: self.blur_grace_ms.map(millis).unwrap_or(defaults.blur_grace),
			show_details: self.show_details.unwrap_or(defaults.show_details),
		};
		(options, self.allow_create.unwrap_or(true))
	}
}
