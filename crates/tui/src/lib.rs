//! Terminal host for the customer autocomplete.
//!
//! The host owns the query input, forwards keystrokes, focus changes and
//! clock ticks to an [`Autocomplete`](clientes_autocomplete::Autocomplete)
//! controller, draws the result list it describes, and collects the chosen
//! customer into an order panel.

mod app;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod runtime;
pub mod style;

#[cfg(test)]
mod test_support;

pub use app::App;
pub use config::UiLabels;
pub use input::QueryInput;
pub use outcome::{OrderCustomer, SessionOutcome};
pub use runtime::run;
pub use style::{Theme, ThemeDescriptor, by_name, default_theme, descriptors, names};
