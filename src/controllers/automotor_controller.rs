use crate::dto::automotor_dto::ResultadoResponse;
use crate::models::automotor::Automotor;
use crate::state::SharedAutomotores;
use crate::utils::errors::{not_found_error, AppResult};

pub struct AutomotorController {
    repository: SharedAutomotores,
}

impl AutomotorController {
    pub fn new(repository: SharedAutomotores) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Automotor> {
        let repository = self.repository.read().await;
        log::debug!("📋 Listando {} automotores", repository.len());
        repository.read_all().to_vec()
    }

    pub async fn create(&self, automotor: Automotor) -> Automotor {
        let mut repository = self.repository.write().await;
        let created = repository.append(automotor).clone();
        log::info!(
            "🚗 Automotor creado: marca={:?} modelo={:?} fabricacion={:?} puertas={:?} en_venta={:?} (total: {})",
            created.marca(),
            created.modelo(),
            created.fecha_fabricacion(),
            created.cantidad_puertas(),
            created.disponible_venta(),
            repository.len()
        );
        created
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Automotor> {
        let repository = self.repository.read().await;
        let (automotor, _) = repository.resolve(id).ok_or_else(|| not_found_error(id))?;
        Ok(automotor.clone())
    }

    /// Reemplazo completo: los campos ausentes en el cuerpo nuevo se pierden
    pub async fn update(&self, id: &str, automotor: Automotor) -> AppResult<ResultadoResponse> {
        // El lock se mantiene entre resolve y reemplazo
        let mut repository = self.repository.write().await;
        let (_, index) = repository.resolve(id).ok_or_else(|| not_found_error(id))?;

        repository.replace_at(index, automotor.clone());
        log::info!("✏️ Automotor '{}' actualizado en el indice {}", id, index);

        Ok(ResultadoResponse::actualizado(index, automotor))
    }

    pub async fn delete(&self, id: &str) -> AppResult<ResultadoResponse> {
        let mut repository = self.repository.write().await;
        let (_, index) = repository.resolve(id).ok_or_else(|| not_found_error(id))?;

        let removed = repository.remove_at(index);
        log::info!("🗑️ Automotor '{}' borrado del indice {}", id, index);

        Ok(ResultadoResponse::borrado(index, removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use crate::repositories::automotor_repository::AutomotorRepository;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn controller_with(records: Vec<serde_json::Value>) -> AutomotorController {
        let records = records.into_iter().map(Automotor::new).collect();
        AutomotorController::new(Arc::new(RwLock::new(AutomotorRepository::with_records(records))))
    }

    #[tokio::test]
    async fn update_reports_resolved_index() {
        let controller = controller_with(vec![json!({ "id": 1 }), json!({ "id": 7, "marca": "Ford" })]);

        let response = controller
            .update("7", Automotor::new(json!({ "id": 7, "modelo": "Focus" })))
            .await
            .unwrap();

        assert_eq!(response.resultado, "Actualización según el indice: 1");
        assert_eq!(response.valor.modelo(), Some("Focus"));
        assert_eq!(controller.get_by_id("7").await.unwrap().marca(), None);
    }

    #[tokio::test]
    async fn delete_returns_removed_record() {
        let controller = controller_with(vec![json!({ "id": 7, "marca": "Ford" })]);

        let response = controller.delete("7").await.unwrap();
        assert_eq!(response.resultado, "Borrado según el indice: 0");
        assert_eq!(response.valor.marca(), Some("Ford"));
        assert!(controller.list().await.is_empty());
    }

    #[tokio::test]
    async fn missing_id_does_not_mutate() {
        let controller = controller_with(vec![json!({ "id": 1 })]);

        let update = controller.update("2", Automotor::new(json!({ "id": 2 }))).await;
        assert!(matches!(update, Err(AppError::NotFound(_))));

        let delete = controller.delete("2").await;
        assert!(matches!(delete, Err(AppError::NotFound(_))));

        assert_eq!(controller.list().await, vec![Automotor::new(json!({ "id": 1 }))]);
    }
}
