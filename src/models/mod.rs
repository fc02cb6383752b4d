//! Modelos del sistema
//!
//! Este módulo contiene el registro de automotor que guarda el servicio.

pub mod automotor;
