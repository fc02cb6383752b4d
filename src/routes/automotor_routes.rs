use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};
use crate::controllers::automotor_controller::AutomotorController;
use crate::dto::automotor_dto::ResultadoResponse;
use crate::models::automotor::Automotor;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_automotor_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_automotores).post(create_automotor))
        .route(
            "/:id",
            get(get_automotor).put(update_automotor).delete(delete_automotor),
        )
}

/// Sin `Content-Type: application/json` el cuerpo se toma como objeto vacío.
/// Solo se aceptan objetos o arrays en la raíz; un escalar suelto es 400.
fn automotor_from_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Automotor> {
    match body {
        Ok(Json(value @ (Value::Object(_) | Value::Array(_)))) => Ok(Automotor::new(value)),
        Ok(Json(_)) => Err(AppError::BadRequest(
            "El cuerpo debe ser un objeto o un array JSON".to_string(),
        )),
        Err(JsonRejection::MissingJsonContentType(_)) => {
            Ok(Automotor::new(Value::Object(Map::new())))
        }
        Err(rejection) => Err(rejection.into()),
    }
}

async fn list_automotores(
    State(state): State<AppState>,
) -> Json<Vec<Automotor>> {
    let controller = AutomotorController::new(state.automotores.clone());
    Json(controller.list().await)
}

async fn create_automotor(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Automotor>, AppError> {
    let automotor = automotor_from_body(body)?;
    let controller = AutomotorController::new(state.automotores.clone());
    let response = controller.create(automotor).await;
    Ok(Json(response))
}

async fn get_automotor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Automotor>, AppError> {
    let controller = AutomotorController::new(state.automotores.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn update_automotor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ResultadoResponse>, AppError> {
    let automotor = automotor_from_body(body)?;
    let controller = AutomotorController::new(state.automotores.clone());
    let response = controller.update(&id, automotor).await?;
    Ok(Json(response))
}

async fn delete_automotor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResultadoResponse>, AppError> {
    let controller = AutomotorController::new(state.automotores.clone());
    let response = controller.delete(&id).await?;
    Ok(Json(response))
}
