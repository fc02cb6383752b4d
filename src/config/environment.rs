//! Configuración de variables de entorno
//!
//! El único valor configurable es el puerto, leído una vez al arrancar.

use std::env;
use thiserror::Error;

/// Puerto usado cuando `PORT` no está definido
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a valid number, got '{0}'")]
    InvalidPort(String),
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub port: u16,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(env::var("PORT").ok())
    }

    fn from_port_var(port: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }

    /// Obtener la dirección de escucha
    pub fn server_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_port_falls_back_to_default() {
        let config = EnvironmentConfig::from_port_var(None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn port_is_parsed() {
        let config = EnvironmentConfig::from_port_var(Some("8080".to_string())).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = EnvironmentConfig::from_port_var(Some("ochenta".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(raw) if raw == "ochenta"));
    }
}
