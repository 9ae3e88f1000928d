use super::{ConfigError, ConfigSources, ProviderConfig, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if config.search.max_results == 0 {
		return Err(ConfigError::invalid(
			"search.max_results",
			"0",
			sources.source_for_max_results(),
			"must be at least 1",
		));
	}

	if let ProviderConfig::Http { timeout, .. } = &config.provider
		&& timeout.is_zero()
	{
		return Err(ConfigError::invalid(
			"provider.timeout_ms",
			"0",
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if let Some(theme) = &config.ui.theme
		&& clientes_tui::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme, expected one of: {}", clientes_tui::names().join(", ")),
		));
	}

	Ok(())
}
