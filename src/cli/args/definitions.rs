use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, ProviderKindArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `clientes` binary.
#[derive(Parser, Debug)]
#[command(
    name = "clientes",
    version,
    long_version = long_version(),
    about = "Find or register the customer for an order from the terminal",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "CLIENTES_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_enum,
        value_name = "KIND",
        help = "Where customers are looked up (default: http)"
    )]
    pub(crate) provider: Option<ProviderKindArg>,
    #[arg(
        long = "base-url",
        value_name = "URL",
        help = "Base URL of the POS backend (default: http://127.0.0.1:8080/)"
    )]
    pub(crate) base_url: Option<String>,
    #[arg(
        long,
        value_name = "TEMPLATE",
        help = "Lookup path with a {query} placeholder (default: /api/customers/search/{query})"
    )]
    pub(crate) endpoint: Option<String>,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file of customers for the fixture provider (default: none)"
    )]
    pub(crate) fixture: Option<PathBuf>,
    #[arg(
        long = "latency-ms",
        value_name = "MS",
        help = "Artificial delay added to fixture lookups (default: 0)"
    )]
    pub(crate) latency_ms: Option<u64>,
    #[arg(
        long = "timeout-ms",
        value_name = "MS",
        help = "HTTP request timeout (default: 5000)"
    )]
    pub(crate) timeout_ms: Option<u64>,
    #[arg(
        long = "min-length",
        value_name = "CHARS",
        help = "Shortest query that triggers a lookup (default: 1)"
    )]
    pub(crate) min_length: Option<usize>,
    #[arg(
        long = "max-results",
        value_name = "NUM",
        help = "Maximum customers listed (default: 10)"
    )]
    pub(crate) max_results: Option<usize>,
    #[arg(
        long = "debounce-ms",
        value_name = "MS",
        help = "Quiet period after typing before a lookup starts (default: 300)"
    )]
    pub(crate) debounce_ms: Option<u64>,
    #[arg(
        long = "blur-grace-ms",
        value_name = "MS",
        help = "Delay before the list hides after focus leaves (default: 200)"
    )]
    pub(crate) blur_grace_ms: Option<u64>,
    #[arg(
        long = "no-create",
        help = "Hide the option to register a new customer (default: disabled)"
    )]
    pub(crate) no_create: bool,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the input prompt title (default: Cliente)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the outcome (default: plain)"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log filter used when RUST_LOG is unset (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Write logs to this file (default: clientes.log in the data directory)"
    )]
    pub(crate) log_file: Option<PathBuf>,
}
