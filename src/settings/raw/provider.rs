use std::path::PathBuf;
use std::time::Duration;

use clientes_lookup_api::{DEFAULT_ENDPOINT, EndpointTemplate};
use serde::Deserialize;
use url::Url;

use super::super::resolved::{ConfigError, ConfigSources, ProviderConfig};
use super::super::util::{millis, non_blank};
use crate::cli::CliArgs;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";
const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Customer source settings before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ProviderSection {
	pub(super) kind: Option<String>,
	pub(super) base_url: Option<String>,
	pub(super) endpoint: Option<String>,
	pub(super) timeout_ms: Option<u64>,
	pub(super) fixture: Option<PathBuf>,
	pub(super) latency_ms: Option<u64>,
}

impl ProviderSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(kind) = cli.provider {
			self.kind = Some(kind.as_str().to_string());
		}
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(endpoint) = cli.endpoint.clone() {
			self.endpoint = Some(endpoint);
		}
		if let Some(value) = cli.timeout_ms {
			self.timeout_ms = Some(value);
		}
		if let Some(path) = cli.fixture.clone() {
			self.fixture = Some(path);
		}
		if let Some(value) = cli.latency_ms {
			self.latency_ms = Some(value);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<ProviderConfig, ConfigError> {
		let kind = non_blank(self.kind).unwrap_or_else(|| "http".to_string());
		match kind.to_ascii_lowercase().as_str() {
			"http" => {
				let raw_url = non_blank(self.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
				let base_url = Url::parse(&raw_url).map_err(|err| {
					ConfigError::invalid(
						"provider.base_url",
						raw_url.clone(),
						sources.source_for_base_url(),
						err.to_string(),
					)
				})?;

				let raw_endpoint = self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
				let endpoint = EndpointTemplate::parse(raw_endpoint.clone()).map_err(|err| {
					ConfigError::invalid(
						"provider.endpoint",
						raw_endpoint,
						sources.source_for_endpoint(),
						err.to_string(),
					)
				})?;

				Ok(ProviderConfig::Http {
					base_url,
					endpoint,
					timeout: millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)),
				})
			}
			"fixture" => {
				let path = self.fixture.ok_or_else(|| {
					ConfigError::invalid(
						"provider.fixture",
						"(unset)",
						sources.source_for_provider_kind(),
						"the fixture provider needs a customers file",
					)
				})?;
				Ok(ProviderConfig::Fixture {
					path,
					latency: self.latency_ms.map(millis).unwrap_or(Duration::ZERO),
				})
			}
			_ => Err(ConfigError::invalid(
				"provider.kind",
				kind,
				sources.source_for_provider_kind(),
				"expected `http` or `fixture`",
			)),
		}
	}
}
