//! Debounced customer autocomplete.
//!
//! The controller is toolkit-neutral: hosts forward input text, keys, focus
//! changes and clock ticks, draw the [`RenderView`] it describes, and drain
//! [`ControllerEvent`]s. Lookups run through a [`LookupDispatch`], normally a
//! [`LookupRuntime`] wrapping a
//! [`CustomerProvider`](clientes_lookup_api::CustomerProvider).

mod controller;
mod events;
mod lookup;
mod options;
pub mod presentation;
mod session;
mod timer;
mod view;

pub use controller::{Autocomplete, InputOutcome, Key, KeyOutcome};
pub use events::ControllerEvent;
pub use lookup::{LookupDispatch, LookupRequest, LookupResponse, LookupRuntime};
pub use options::{
	AutocompleteOptions, DEFAULT_BLUR_GRACE, DEFAULT_DEBOUNCE, DEFAULT_MAX_RESULTS, DEFAULT_MIN_LENGTH,
	DEFAULT_PLACEHOLDER,
};
pub use presentation::Presentation;
pub use session::{SearchSession, Status, Visibility};
pub use view::{RenderRow, RenderView, RowAction, RowKind, render};
