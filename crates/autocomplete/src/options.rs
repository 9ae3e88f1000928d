use std::time::Duration;

pub const DEFAULT_PLACEHOLDER: &str = "Buscar cliente por nombre, teléfono o email...";
pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_BLUR_GRACE: Duration = Duration::from_millis(200);

/// Host-supplied controller configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteOptions {
	/// Hint shown while the input is empty.
	pub placeholder: String,
	/// Queries with fewer characters never trigger a search.
	pub min_length: usize,
	/// Upper bound on rendered customer rows.
	pub max_results: usize,
	/// Quiet period between the last keystroke and the lookup.
	pub debounce: Duration,
	/// Delay between losing focus and hiding the list, so clicks on rows
	/// still land.
	pub blur_grace: Duration,
	/// Include phone and email in customer rows.
	pub show_details: bool,
}

impl Default for AutocompleteOptions {
	fn default() -> Self {
		Self {
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			min_length: DEFAULT_MIN_LENGTH,
			max_results: DEFAULT_MAX_RESULTS,
			debounce: DEFAULT_DEBOUNCE,
			blur_grace: DEFAULT_BLUR_GRACE,
			show_details: true,
		}
	}
}

impl AutocompleteOptions {
	/// Whether `text` is long enough to be searched.
	#[must_use]
	pub fn accepts(&self, text: &str) -> bool {
		text.chars().count() >= self.min_length
	}
}
