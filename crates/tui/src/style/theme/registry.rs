use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::builtins::{DEFAULT_THEME_NAME, registrations};
use super::types::{Theme, ThemeDescriptor, ThemeRegistration};

#[derive(Debug)]
struct ThemeEntry {
	display_name: String,
	theme: Theme,
	aliases: Vec<String>,
}

#[derive(Debug, Default)]
struct ThemeRegistry {
	canonical: BTreeMap<String, ThemeEntry>,
	aliases: HashMap<String, String>,
}

impl ThemeRegistry {
	fn register(&mut self, registration: ThemeRegistration) {
		let ThemeRegistration {
			name,
			theme,
			mut aliases,
		} = registration;
		let normalized = normalize_name(&name);

		aliases.retain(|alias| {
			let alias_normalized = normalize_name(alias);
			if alias_normalized == normalized || self.canonical.contains_key(&alias_normalized) {
				return false;
			}
			match self.aliases.get(&alias_normalized) {
				Some(existing) if existing != &normalized => {
					tracing::warn!(alias, existing, attempted = %normalized, "theme alias already taken");
					false
				}
				_ => {
					self.aliases.insert(alias_normalized, normalized.clone());
					true
				}
			}
		});
		aliases.sort_unstable_by_key(|alias| alias.to_ascii_lowercase());

		self.canonical.insert(
			normalized,
			ThemeEntry {
				display_name: name,
				theme,
				aliases,
			},
		);
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let normalized = normalize_name(name);
		if let Some(entry) = self.canonical.get(&normalized) {
			return Some(entry.theme);
		}
		let target = self.aliases.get(&normalized)?;
		self.canonical.get(target).map(|entry| entry.theme)
	}
}

static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();

fn registry() -> &'static ThemeRegistry {
	REGISTRY.get_or_init(|| {
		let mut registry = ThemeRegistry::default();
		for registration in registrations() {
			registry.register(registration);
		}
		registry
	})
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	registry()
		.canonical
		.values()
		.map(|entry| entry.display_name.clone())
		.collect()
}

#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	registry()
		.canonical
		.iter()
		.map(|(key, entry)| ThemeDescriptor {
			name: entry.display_name.clone(),
			aliases: entry.aliases.clone(),
			theme: entry.theme,
			is_default: key == DEFAULT_THEME_NAME,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::style::theme::{LIGHT, SLATE};

	#[test]
	fn builtin_themes_are_registered() {
		assert_eq!(names(), vec!["light".to_string(), "slate".to_string()]);
		assert_eq!(by_name("slate"), Some(SLATE));
	}

	#[test]
	fn lookup_ignores_case_and_accepts_aliases() {
		assert_eq!(by_name("  LIGHT "), Some(LIGHT));
		assert_eq!(by_name("Claro"), Some(LIGHT));
		assert_eq!(by_name("dark"), Some(SLATE));
		assert_eq!(by_name("solarized"), None);
	}

	#[test]
	fn descriptors_flag_the_default() {
		let defaults: Vec<_> = descriptors()
			.into_iter()
			.filter(|descriptor| descriptor.is_default)
			.map(|descriptor| descriptor.name)
			.collect();
		assert_eq!(defaults, vec!["slate".to_string()]);
	}

	#[test]
	fn conflicting_aliases_keep_the_first_owner() {
		let mut registry = ThemeRegistry::default();
		registry.register(ThemeRegistration::new("one", SLATE).aliases(["shared"]));
		registry.register(ThemeRegistration::new("two", LIGHT).aliases(["shared", "Two"]));
		assert_eq!(registry.get("shared"), Some(SLATE));
		assert_eq!(registry.get("two"), Some(LIGHT));
	}
}
