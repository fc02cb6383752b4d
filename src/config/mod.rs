//! Configuración del proyecto
//!
//! Este módulo contiene la configuración leída del entorno.

pub mod environment;

pub use environment::*;
