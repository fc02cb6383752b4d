//! Automotores - API CRUD en memoria para registros de vehículos

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};

use dto::automotor_dto::ProgramaResponse;
use middleware::logging::request_logging;
use state::AppState;

pub const PROGRAMA: &str = "Automotores v1.0.0";

/// Crear el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(programa))
        .nest("/automotores", routes::automotor_routes::create_automotor_router())
        .layer(request_logging())
        .with_state(state)
}

/// Descriptor estático del programa
async fn programa() -> Json<ProgramaResponse> {
    Json(ProgramaResponse::new(PROGRAMA))
}
