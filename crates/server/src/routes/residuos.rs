use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::AppState;
use service::errors::ServiceError;
use service::residuo_service;

#[derive(Debug, Deserialize, Serialize)]
pub struct ResiduoInput {
    pub tipo: String,
    pub descripcion: String,
    pub cantidad_kg: i32,
    pub peligroso: bool,
}

#[utoipa::path(
    get, path = "/api/residuos/v1/listarResiduos", tag = "residuos",
    responses(
        (status = 200, description = "Lista de residuos obtenida"),
        (status = 204, description = "Sin residuos registrados")
    )
)]
pub async fn listar(State(state): State<AppState>) -> Result<Response, JsonApiError> {
    let residuos = residuo_service::listar_todos(&state.db)
        .await
        .map_err(|e| JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string())))?;
    // An empty store answers 204 rather than an empty array.
    if residuos.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(residuos).into_response())
}

#[utoipa::path(
    get, path = "/api/residuos/v1/buscarPorId/{id}", tag = "residuos",
    params(("id" = i32, Path, description = "Residuo ID")),
    responses(
        (status = 200, description = "Residuo encontrado"),
        (status = 204, description = "Residuo no encontrado")
    )
)]
pub async fn buscar_por_id(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match residuo_service::buscar_por_id(&state.db, id).await {
        Ok(Some(m)) => Json(m).into_response(),
        // An absent record shares the 204 used for empty listings.
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(err = %e, "find residuo failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[utoipa::path(
    delete, path = "/api/residuos/v1/eliminarPorId/{id}", tag = "residuos",
    params(("id" = i32, Path, description = "Residuo ID")),
    responses(
        (status = 204, description = "Residuo eliminado"),
        (status = 404, description = "Residuo no encontrado")
    )
)]
pub async fn eliminar_por_id(State(state): State<AppState>, Path(id): Path<i32>) -> StatusCode {
    match residuo_service::eliminar_por_id(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted residuo");
            StatusCode::NO_CONTENT
        }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            error!(err = %e, "delete residuo failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[utoipa::path(
    post, path = "/api/residuos/v1/guardarResiduos", tag = "residuos",
    request_body = crate::openapi::ResiduoInputDoc,
    responses(
        (status = 200, description = "Residuo creado exitosamente"),
        (status = 400, description = "Cuerpo vacío")
    )
)]
pub async fn guardar(
    State(state): State<AppState>,
    Json(body): Json<Option<ResiduoInput>>,
) -> StatusCode {
    // A literal JSON `null` body is rejected up front; nothing is persisted.
    let Some(input) = body else {
        return StatusCode::BAD_REQUEST;
    };
    match residuo_service::guardar(&state.db, &input.tipo, &input.descripcion, input.cantidad_kg, input.peligroso).await {
        Ok(m) => {
            info!(id = m.id, tipo = %m.tipo, "created residuo");
            StatusCode::OK
        }
        Err(e) => {
            error!(err = %e, "create residuo failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[utoipa::path(
    patch, path = "/api/residuos/v1/actualizarResiduos/{id}", tag = "residuos",
    params(("id" = i32, Path, description = "Residuo ID")),
    request_body = crate::openapi::ResiduoInputDoc,
    responses(
        (status = 200, description = "Residuo actualizado exitosamente"),
        (status = 404, description = "Residuo no encontrado")
    )
)]
pub async fn actualizar(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ResiduoInput>,
) -> StatusCode {
    match residuo_service::actualizar(&state.db, id, &input.tipo, &input.descripcion, input.cantidad_kg, input.peligroso).await {
        Ok(m) => {
            info!(id = m.id, "updated residuo");
            StatusCode::OK
        }
        Err(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
        Err(e) => {
            error!(err = %e, "update residuo failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
