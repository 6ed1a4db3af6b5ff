use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::AppState;
use service::cliente_service;
use service::errors::ServiceError;

/// Request body for create and update; the id always comes from the store or
/// the path, never from the client.
#[derive(Debug, Deserialize, Serialize)]
pub struct ClienteInput {
    pub rut_empresa: String,
    pub razon_social: String,
    pub giro: String,
    pub direccion: String,
    pub email: String,
}

#[utoipa::path(
    get, path = "/api/v1/clientes/listarTodos", tag = "clientes",
    responses((status = 200, description = "Lista de clientes obtenida"))
)]
pub async fn listar_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::cliente::Model>>, JsonApiError> {
    match cliente_service::listar_todos(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list clientes");
            Ok(Json(list))
        }
        Err(e) => Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string()))),
    }
}

#[utoipa::path(
    get, path = "/api/v1/clientes/obtenerPorId/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente ID")),
    responses(
        (status = 200, description = "Cliente encontrado"),
        (status = 404, description = "Cliente no encontrado")
    )
)]
pub async fn obtener_por_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<models::cliente::Model>, StatusCode> {
    match cliente_service::buscar_por_id(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    get, path = "/api/v1/clientes/obtenerPorRut/{rut}", tag = "clientes",
    params(("rut" = String, Path, description = "RUT de la empresa")),
    responses(
        (status = 200, description = "Empresa encontrada"),
        (status = 404, description = "Empresa no encontrada")
    )
)]
pub async fn obtener_por_rut(
    State(state): State<AppState>,
    Path(rut): Path<String>,
) -> Result<Json<models::cliente::Model>, StatusCode> {
    match cliente_service::buscar_por_rut(&state.db, &rut).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    post, path = "/api/v1/clientes/crearCliente", tag = "clientes",
    request_body = crate::openapi::ClienteInputDoc,
    responses((status = 200, description = "Cliente creado exitosamente"))
)]
pub async fn crear(
    State(state): State<AppState>,
    Json(input): Json<ClienteInput>,
) -> Result<Json<models::cliente::Model>, JsonApiError> {
    match cliente_service::guardar(
        &state.db,
        &input.rut_empresa,
        &input.razon_social,
        &input.giro,
        &input.direccion,
        &input.email,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.id, rut = %m.rut_empresa, "created cliente");
            Ok(Json(m))
        }
        Err(e) => {
            error!(err = %e, "create cliente failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    put, path = "/api/v1/clientes/actualizarClientePorId/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente ID")),
    request_body = crate::openapi::ClienteInputDoc,
    responses(
        (status = 200, description = "Cliente actualizado exitosamente"),
        (status = 404, description = "Cliente no encontrado")
    )
)]
pub async fn actualizar(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ClienteInput>,
) -> Result<Json<models::cliente::Model>, JsonApiError> {
    match cliente_service::actualizar(
        &state.db,
        id,
        &input.rut_empresa,
        &input.razon_social,
        &input.giro,
        &input.direccion,
        &input.email,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.id, "updated cliente");
            Ok(Json(m))
        }
        Err(ServiceError::NotFound(msg)) => {
            Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)))
        }
        Err(e) => {
            error!(err = %e, "update cliente failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    delete, path = "/api/v1/clientes/eliminarClientePorId/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente ID")),
    responses(
        (status = 204, description = "Cliente eliminado exitosamente"),
        (status = 404, description = "Cliente no encontrado")
    )
)]
pub async fn eliminar(State(state): State<AppState>, Path(id): Path<i32>) -> StatusCode {
    match cliente_service::eliminar(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted cliente");
            StatusCode::NO_CONTENT
        }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            error!(err = %e, "delete cliente failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
