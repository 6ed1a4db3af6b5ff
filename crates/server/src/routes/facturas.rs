use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::AppState;
use service::errors::ServiceError;
use service::factura_service;

#[derive(Debug, Deserialize, Serialize)]
pub struct FacturaInput {
    pub rut_emisor: String,
    pub fecha_emision: NaiveDate,
    pub monto_neto: i32,
    pub iva: i32,
    pub monto_total: i32,
}

/// PATCH body carries its own id; the existence lookup runs against it, not
/// the path id.
#[derive(Debug, Deserialize, Serialize)]
pub struct FacturaConId {
    pub id: i32,
    pub rut_emisor: String,
    pub fecha_emision: NaiveDate,
    pub monto_neto: i32,
    pub iva: i32,
    pub monto_total: i32,
}

fn lista_o_no_content(facturas: Vec<models::factura::Model>) -> Response {
    if facturas.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(facturas).into_response()
}

#[utoipa::path(
    get, path = "/api/factura/v1/listar", tag = "facturas",
    responses(
        (status = 200, description = "Lista de facturas obtenida"),
        (status = 204, description = "Sin facturas registradas")
    )
)]
pub async fn listar(State(state): State<AppState>) -> Result<Response, JsonApiError> {
    let facturas = factura_service::listar_facturas(&state.db)
        .await
        .map_err(|e| JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string())))?;
    Ok(lista_o_no_content(facturas))
}

#[utoipa::path(
    get, path = "/api/factura/v1/buscarPorRut/{rut}", tag = "facturas",
    params(("rut" = String, Path, description = "RUT de la empresa emisora")),
    responses(
        (status = 200, description = "Facturas encontradas"),
        (status = 204, description = "Sin facturas para el RUT")
    )
)]
pub async fn buscar_por_rut(
    State(state): State<AppState>,
    Path(rut): Path<String>,
) -> Result<Response, JsonApiError> {
    let facturas = factura_service::buscar_por_rut_empresa(&state.db, &rut)
        .await
        .map_err(|e| JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Find Failed", Some(e.to_string())))?;
    Ok(lista_o_no_content(facturas))
}

#[utoipa::path(
    get, path = "/api/factura/v1/buscarPorId/{id}", tag = "facturas",
    params(("id" = i32, Path, description = "Factura ID")),
    responses(
        (status = 200, description = "Factura encontrada"),
        (status = 204, description = "Sin facturas para el Id")
    )
)]
pub async fn buscar_por_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, JsonApiError> {
    // The lookup stays a zero-or-more query, so the body is an array even here.
    let facturas = factura_service::buscar_por_id(&state.db, id)
        .await
        .map_err(|e| JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Find Failed", Some(e.to_string())))?;
    Ok(lista_o_no_content(facturas))
}

#[utoipa::path(
    delete, path = "/api/factura/v1/eliminarPorId/{id}", tag = "facturas",
    params(("id" = i32, Path, description = "Factura ID")),
    responses((status = 204, description = "Factura eliminada"))
)]
pub async fn eliminar_por_id(State(state): State<AppState>, Path(id): Path<i32>) -> StatusCode {
    // No existence pre-check here, unlike the other two entities: deleting an
    // absent invoice still answers 204.
    match factura_service::eliminar_por_id(&state.db, id).await {
        Ok(()) => {
            info!(id, "deleted factura");
            StatusCode::NO_CONTENT
        }
        Err(e) => {
            error!(err = %e, "delete factura failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[utoipa::path(
    post, path = "/api/factura/v1/guardarFactura", tag = "facturas",
    request_body = crate::openapi::FacturaInputDoc,
    responses((status = 200, description = "Factura creada exitosamente"))
)]
pub async fn guardar(State(state): State<AppState>, Json(input): Json<FacturaInput>) -> StatusCode {
    info!(rut_emisor = %input.rut_emisor, monto_total = input.monto_total, "factura recibida");
    match factura_service::guardar_factura(
        &state.db,
        &input.rut_emisor,
        input.fecha_emision,
        input.monto_neto,
        input.iva,
        input.monto_total,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.id, "created factura");
            StatusCode::OK
        }
        Err(e) => {
            error!(err = %e, "create factura failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[utoipa::path(
    patch, path = "/api/factura/v1/actualizarFactura/{id}", tag = "facturas",
    params(("id" = i32, Path, description = "Factura ID")),
    request_body = crate::openapi::FacturaConIdDoc,
    responses(
        (status = 200, description = "Factura actualizada exitosamente"),
        (status = 404, description = "Factura no encontrada")
    )
)]
pub async fn actualizar(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<FacturaConId>,
) -> StatusCode {
    match factura_service::actualizar_factura(
        &state.db,
        id,
        input.id,
        &input.rut_emisor,
        input.fecha_emision,
        input.monto_neto,
        input.iva,
        input.monto_total,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.id, "updated factura");
            StatusCode::OK
        }
        Err(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
        Err(e) => {
            error!(err = %e, "update factura failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
