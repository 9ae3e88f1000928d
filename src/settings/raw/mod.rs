use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod logging;
mod messages;
mod provider;
mod search;
mod ui;

use logging::LoggingSection;
use messages::MessagesSection;
use provider::ProviderSection;
use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	provider: ProviderSection,
	ui: UiSection,
	messages: MessagesSection,
	logging: LoggingSection,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.search.apply_cli_overrides(cli);
		self.provider.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Fill defaults and validate, naming the origin of any bad value.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			max_results: detect_source(
				cli.max_results.is_some(),
				self.search.max_results.is_some(),
				"CLIENTES__SEARCH__MAX_RESULTS",
				"--max-results",
				"search.max_results",
			),
			provider_kind: detect_source(
				cli.provider.is_some(),
				self.provider.kind.is_some(),
				"CLIENTES__PROVIDER__KIND",
				"--provider",
				"provider.kind",
			),
			base_url: detect_source(
				cli.base_url.is_some(),
				self.provider.base_url.is_some(),
				"CLIENTES__PROVIDER__BASE_URL",
				"--base-url",
				"provider.base_url",
			),
			endpoint: detect_source(
				cli.endpoint.is_some(),
				self.provider.endpoint.is_some(),
				"CLIENTES__PROVIDER__ENDPOINT",
				"--endpoint",
				"provider.endpoint",
			),
			timeout: detect_source(
				cli.timeout_ms.is_some(),
				self.provider.timeout_ms.is_some(),
				"CLIENTES__PROVIDER__TIMEOUT_MS",
				"--timeout-ms",
				"provider.timeout_ms",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"CLIENTES__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let (search, allow_create) = self.search.resolve();
		let provider = self.provider.resolve(&sources)?;

		let config = ResolvedConfig {
			search,
			allow_create,
			provider,
			ui: self.ui.resolve(),
			presentation: self.messages.resolve(),
			logging: self.logging.resolve(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
