//! Application support shared by the `clientes` binary.
//!
//! The lookup contract, controller, providers and terminal host live in the
//! workspace crates; this crate wires them to the command line.

pub mod app_dirs;
pub mod logging;
