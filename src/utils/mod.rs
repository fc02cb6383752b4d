//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores compartido por los handlers.

pub mod errors;
