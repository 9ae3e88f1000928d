use std::fmt;

use crate::error::TemplateError;

/// Placeholder replaced by the escaped query.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Lookup path used by the POS server.
pub const DEFAULT_ENDPOINT: &str = "/api/customers/search/{query}";

/// Punctuation left untouched by `encodeURIComponent`, besides ASCII
/// alphanumerics.
const UNRESERVED_MARKS: &[u8] = b"-_.!~*'()";

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Escape a query so it can be embedded in a path segment or query string.
///
/// Every UTF-8 byte outside the unreserved set becomes `%XX`.
#[must_use]
pub fn escape_component(query: &str) -> String {
	let mut escaped = String::with_capacity(query.len());
	for &byte in query.as_bytes() {
		if byte.is_ascii_alphanumeric() || UNRESERVED_MARKS.contains(&byte) {
			escaped.push(char::from(byte));
		} else {
			escaped.push('%');
			escaped.push(char::from(HEX[usize::from(byte >> 4)]));
			escaped.push(char::from(HEX[usize::from(byte & 0x0F)]));
		}
	}
	escaped
}

/// A search endpoint with an optional `{query}` placeholder.
///
/// Templates without a placeholder treat the whole string as a prefix and
/// append the escaped query to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTemplate {
	raw: String,
}

impl EndpointTemplate {
	pub fn parse(raw: impl Into<String>) -> Result<Self, TemplateError> {
		let raw = raw.into();
		if raw.trim().is_empty() {
			return Err(TemplateError::Empty);
		}
		let count = raw.matches(QUERY_PLACEHOLDER).count();
		if count > 1 {
			return Err(TemplateError::RepeatedPlaceholder {
				template: raw,
				count,
			});
		}
		Ok(Self { raw })
	}

	#[must_use]
	pub fn expand(&self, query: &str) -> String {
		let escaped = escape_component(query);
		if self.raw.contains(QUERY_PLACEHOLDER) {
			self.raw.replace(QUERY_PLACEHOLDER, &escaped)
		} else {
			format!("{}{escaped}", self.raw)
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.raw
	}
}

impl Default for EndpointTemplate {
	fn default() -> Self {
		Self {
			raw: DEFAULT_ENDPOINT.to_string(),
		}
	}
}

impl fmt::Display for EndpointTemplate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.raw)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn escapes_like_encode_uri_component() {
		assert_eq!(escape_component("Ana Gómez"), "Ana%20G%C3%B3mez");
		assert_eq!(escape_component("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
		assert_eq!(escape_component("it's-(ok)_!~*."), "it's-(ok)_!~*.");
	}

	#[test]
	fn placeholder_is_substituted() {
		let template = EndpointTemplate::parse("/search?q={query}&limit=10").unwrap();
		assert_eq!(template.expand("ana maría"), "/search?q=ana%20mar%C3%ADa&limit=10");
	}

	#[test]
	fn prefix_templates_append_the_query() {
		let template = EndpointTemplate::parse("/api/customers/search/").unwrap();
		assert_eq!(template.expand("555 01"), "/api/customers/search/555%2001");
	}

	#[test]
	fn default_template_targets_the_pos_search_route() {
		assert_eq!(
			EndpointTemplate::default().expand("zzz"),
			"/api/customers/search/zzz"
		);
	}

	#[test]
	fn rejects_empty_and_repeated_placeholders() {
		assert_eq!(EndpointTemplate::parse("  "), Err(TemplateError::Empty));
		let err = EndpointTemplate::parse("/{query}/{query}").unwrap_err();
		assert!(matches!(err, TemplateError::RepeatedPlaceholder { count: 2, .. }));
	}
}
