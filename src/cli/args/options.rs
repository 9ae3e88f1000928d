use clap::ValueEnum;

/// Customer sources selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ProviderKindArg {
	Http,
	Fixture,
}

impl ProviderKindArg {
	/// Identifier consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ProviderKindArg::Http => "http",
			ProviderKindArg::Fixture => "fixture",
		}
	}
}

/// How the session outcome is printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
