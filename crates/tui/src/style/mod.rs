//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the terminal host. They live in a
//! process-wide registry that is populated once with the built-in schemes.

pub mod theme;

pub use theme::{Theme, ThemeDescriptor, by_name, default_theme, descriptors, names};
