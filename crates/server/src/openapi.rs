use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ClienteInputDoc {
    pub rut_empresa: String,
    pub razon_social: String,
    pub giro: String,
    pub direccion: String,
    pub email: String,
}

#[derive(ToSchema)]
pub struct ResiduoInputDoc {
    pub tipo: String,
    pub descripcion: String,
    pub cantidad_kg: i32,
    pub peligroso: bool,
}

#[derive(ToSchema)]
pub struct FacturaInputDoc {
    pub rut_emisor: String,
    pub fecha_emision: chrono::NaiveDate,
    pub monto_neto: i32,
    pub iva: i32,
    pub monto_total: i32,
}

#[derive(ToSchema)]
pub struct FacturaConIdDoc {
    pub id: i32,
    pub rut_emisor: String,
    pub fecha_emision: chrono::NaiveDate,
    pub monto_neto: i32,
    pub iva: i32,
    pub monto_total: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clientes::listar_todos,
        crate::routes::clientes::obtener_por_id,
        crate::routes::clientes::obtener_por_rut,
        crate::routes::clientes::crear,
        crate::routes::clientes::actualizar,
        crate::routes::clientes::eliminar,
        crate::routes::residuos::listar,
        crate::routes::residuos::buscar_por_id,
        crate::routes::residuos::eliminar_por_id,
        crate::routes::residuos::guardar,
        crate::routes::residuos::actualizar,
        crate::routes::facturas::listar,
        crate::routes::facturas::buscar_por_rut,
        crate::routes::facturas::buscar_por_id,
        crate::routes::facturas::eliminar_por_id,
        crate::routes::facturas::guardar,
        crate::routes::facturas::actualizar,
    ),
    components(
        schemas(
            HealthResponse,
            ClienteInputDoc,
            ResiduoInputDoc,
            FacturaInputDoc,
            FacturaConIdDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "clientes", description = "Operaciones relacionadas con los clientes"),
        (name = "residuos", description = "Operaciones relacionadas con los residuos"),
        (name = "facturas", description = "Operaciones relacionadas con las facturas")
    )
)]
pub struct ApiDoc;
