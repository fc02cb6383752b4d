//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;
use tokio::sync::RwLock;
use crate::config::environment::EnvironmentConfig;
use crate::repositories::automotor_repository::AutomotorRepository;

/// Repositorio compartido; todo acceso pasa por un único lock
pub type SharedAutomotores = Arc<RwLock<AutomotorRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub automotores: SharedAutomotores,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, repository: AutomotorRepository) -> Self {
        Self {
            config,
            automotores: Arc::new(RwLock::new(repository)),
        }
    }
}
