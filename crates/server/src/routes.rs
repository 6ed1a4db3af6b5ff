use axum::{
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

pub mod clientes;
pub mod facturas;
pub mod residuos;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: the three entity surfaces, health, and
/// the OpenAPI/Swagger endpoints.
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    let clientes = Router::new()
        .route("/api/v1/clientes/listarTodos", get(clientes::listar_todos))
        .route("/api/v1/clientes/obtenerPorId/:id", get(clientes::obtener_por_id))
        .route("/api/v1/clientes/obtenerPorRut/:rut", get(clientes::obtener_por_rut))
        .route("/api/v1/clientes/crearCliente", post(clientes::crear))
        .route("/api/v1/clientes/actualizarClientePorId/:id", put(clientes::actualizar))
        .route("/api/v1/clientes/eliminarClientePorId/:id", delete(clientes::eliminar));

    let residuos = Router::new()
        .route("/api/residuos/v1/listarResiduos", get(residuos::listar))
        .route("/api/residuos/v1/buscarPorId/:id", get(residuos::buscar_por_id))
        .route("/api/residuos/v1/eliminarPorId/:id", delete(residuos::eliminar_por_id))
        .route("/api/residuos/v1/guardarResiduos", post(residuos::guardar))
        .route("/api/residuos/v1/actualizarResiduos/:id", patch(residuos::actualizar));

    let facturas = Router::new()
        .route("/api/factura/v1/listar", get(facturas::listar))
        .route("/api/factura/v1/buscarPorRut/:rut", get(facturas::buscar_por_rut))
        .route("/api/factura/v1/buscarPorId/:id", get(facturas::buscar_por_id))
        .route("/api/factura/v1/eliminarPorId/:id", delete(facturas::eliminar_por_id))
        .route("/api/factura/v1/guardarFactura", post(facturas::guardar))
        .route("/api/factura/v1/actualizarFactura/:id", patch(facturas::actualizar));

    Router::new()
        .route("/health", get(health))
        .merge(clientes)
        .merge(residuos)
        .merge(facturas)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
