use std::fmt;

/// Where a configuration value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins of the settings that validation can reject.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) max_results: Option<SettingSource>,
	pub(crate) provider_kind: Option<SettingSource>,
	pub(crate) base_url: Option<SettingSource>,
	pub(crate) endpoint: Option<SettingSource>,
	pub(crate) timeout: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_max_results(&self) -> SettingSource {
		or_key(&self.max_results, "search.max_results")
	}

	pub(crate) fn source_for_provider_kind(&self) -> SettingSource {
		or_key(&self.provider_kind, "provider.kind")
	}

	pub(crate) fn source_for_base_url(&self) -> SettingSource {
		or_key(&self.base_url, "provider.base_url")
	}

	pub(crate) fn source_for_endpoint(&self) -> SettingSource {
		or_key(&self.endpoint, "provider.endpoint")
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		or_key(&self.timeout, "provider.timeout_ms")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}
}
