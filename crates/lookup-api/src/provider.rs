use std::sync::Arc;

use crate::error::LookupError;
use crate::types::Customer;

/// A source of ranked customer records for a free-text query.
///
/// Implementations block until the lookup completes. Callers that must stay
/// responsive run them on a worker thread.
pub trait CustomerProvider: Send + Sync {
	/// Return customers matching `query`, most relevant first.
	fn lookup(&self, query: &str) -> Result<Vec<Customer>, LookupError>;

	/// Short human readable description used in logs and summaries.
	fn describe(&self) -> String;
}

impl<P> CustomerProvider for Arc<P>
where
	P: CustomerProvider + ?Sized,
{
	fn lookup(&self, query: &str) -> Result<Vec<Customer>, LookupError> {
		(**self).lookup(query)
	}

	fn describe(&self) -> String {
		(**self).describe()
	}
}
