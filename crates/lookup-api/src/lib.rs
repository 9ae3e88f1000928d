//! Shared lookup contract for `clientes`.
//!
//! Providers implement [`CustomerProvider`]; the autocomplete controller and
//! the terminal host only depend on the types re-exported here.

pub mod endpoint;
pub mod error;
pub mod provider;
pub mod types;

pub use endpoint::{DEFAULT_ENDPOINT, EndpointTemplate, QUERY_PLACEHOLDER, escape_component};
pub use error::{FailureKind, LookupError, TemplateError};
pub use provider::CustomerProvider;
pub use types::Customer;
