use std::time::Duration;

/// Trim `value`, treating blank text as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|text| text.trim().to_string())
		.filter(|text| !text.is_empty())
}

pub(super) fn millis(value: u64) -> Duration {
	Duration::from_millis(value)
}
