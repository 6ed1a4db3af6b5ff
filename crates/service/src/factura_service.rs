use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};

use crate::errors::ServiceError;
use models::factura;

pub async fn listar_facturas(db: &DatabaseConnection) -> Result<Vec<factura::Model>, ServiceError> {
    factura::Entity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// All invoices issued by the given company rut.
pub async fn buscar_por_rut_empresa(db: &DatabaseConnection, rut: &str) -> Result<Vec<factura::Model>, ServiceError> {
    factura::Entity::find()
        .filter(factura::Column::RutEmisor.eq(rut))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Lookup by id as a zero-or-more query. The id is nominally unique, so callers
/// should expect at most one element.
pub async fn buscar_por_id(db: &DatabaseConnection, id: i32) -> Result<Vec<factura::Model>, ServiceError> {
    factura::Entity::find()
        .filter(factura::Column::Id.eq(id))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Persist a new invoice; the store assigns the id.
pub async fn guardar_factura(
    db: &DatabaseConnection,
    rut_emisor: &str,
    fecha_emision: NaiveDate,
    monto_neto: i32,
    iva: i32,
    monto_total: i32,
) -> Result<factura::Model, ServiceError> {
    let am = factura::ActiveModel {
        id: NotSet,
        rut_emisor: Set(rut_emisor.to_string()),
        fecha_emision: Set(fecha_emision),
        monto_neto: Set(monto_neto),
        iva: Set(iva),
        monto_total: Set(monto_total),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Replace an invoice. The existence lookup runs against the id carried in the
/// body; the path id must then appear among the returned rows, otherwise
/// nothing is written. Consequence: a body id that differs from the path id
/// always yields `NotFound`, even when both rows exist.
pub async fn actualizar_factura(
    db: &DatabaseConnection,
    id: i32,
    body_id: i32,
    rut_emisor: &str,
    fecha_emision: NaiveDate,
    monto_neto: i32,
    iva: i32,
    monto_total: i32,
) -> Result<factura::Model, ServiceError> {
    let existentes = buscar_por_id(db, body_id).await?;
    if !existentes.iter().any(|f| f.id == id) {
        return Err(ServiceError::not_found("factura"));
    }
    let am = factura::ActiveModel {
        id: Set(body_id),
        rut_emisor: Set(rut_emisor.to_string()),
        fecha_emision: Set(fecha_emision),
        monto_neto: Set(monto_neto),
        iva: Set(iva),
        monto_total: Set(monto_total),
    };
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete by id without checking existence first; removing an absent invoice
/// is not an error.
pub async fn eliminar_por_id(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    factura::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}
