use std::path::PathBuf;
use std::time::Duration;

use clientes_autocomplete::{AutocompleteOptions, Presentation};
use clientes_lookup_api::EndpointTemplate;
use url::Url;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where customers are looked up.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderConfig {
	Http {
		base_url: Url,
		endpoint: EndpointTemplate,
		timeout: Duration,
	},
	Fixture {
		path: PathBuf,
		latency: Duration,
	},
}

/// Host screen settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiConfig {
	pub title: Option<String>,
	pub theme: Option<String>,
	pub initial_query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
	/// Filter directive used when `RUST_LOG` is unset.
	pub level: String,
	/// Log destination; the data directory default applies when unset.
	pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			file: None,
		}
	}
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub search: AutocompleteOptions,
	/// Offer the "create new customer" row.
	pub allow_create: bool,
	pub provider: ProviderConfig,
	pub ui: UiConfig,
	pub presentation: Presentation,
	pub logging: LoggingConfig,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
