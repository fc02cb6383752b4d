//! Middleware del sistema

pub mod logging;

pub use logging::*;
