use thiserror::Error;

/// Broad class of a failed lookup, used to pick the user-facing handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
	/// The request never produced a response.
	Network,
	/// The provider answered, but not with a usable customer list.
	Server,
}

/// Errors raised by a [`CustomerProvider`](crate::CustomerProvider).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
	/// The request could not be delivered or the connection failed.
	#[error("request to {endpoint} failed: {message}")]
	Network { endpoint: String, message: String },

	/// The provider answered with a non-success status code.
	#[error("{endpoint} answered with status {status}")]
	Status { endpoint: String, status: u16 },

	/// The response body was not a customer list.
	#[error("could not decode customers from {endpoint}: {message}")]
	Decode { endpoint: String, message: String },

	/// The provider itself is not usable (missing data source, shut down).
	#[error("customer provider unavailable: {0}")]
	Unavailable(String),
}

impl LookupError {
	#[must_use]
	pub fn kind(&self) -> FailureKind {
		match self {
			Self::Network { .. } | Self::Unavailable(_) => FailureKind::Network,
			Self::Status { .. } | Self::Decode { .. } => FailureKind::Server,
		}
	}
}

/// Errors raised while parsing an endpoint template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
	#[error("endpoint template is empty")]
	Empty,

	#[error("endpoint template '{template}' contains {count} `{{query}}` placeholders, expected at most one")]
	RepeatedPlaceholder { template: String, count: usize },
}
