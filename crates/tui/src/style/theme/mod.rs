mod builtins;
mod registry;
mod types;

pub use builtins::{LIGHT, SLATE, default_theme};
pub use registry::{by_name, descriptors, names};
pub use types::{Theme, ThemeDescriptor, ThemeRegistration};

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
