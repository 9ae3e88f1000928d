//! Host application state and behaviour.
//!
//! [`App`] binds one autocomplete controller to the query input. Supporting
//! modules split the implementation into input handling and rendering.

mod actions;
mod render;
mod state;
#[cfg(test)]
mod tests;

pub use state::App;
