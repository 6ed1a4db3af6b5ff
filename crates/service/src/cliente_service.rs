use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};

use crate::errors::ServiceError;
use models::cliente;

/// List every registered client.
pub async fn listar_todos(db: &DatabaseConnection) -> Result<Vec<cliente::Model>, ServiceError> {
    cliente::Entity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Find a client by id.
pub async fn buscar_por_id(db: &DatabaseConnection, id: i32) -> Result<Option<cliente::Model>, ServiceError> {
    cliente::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Find a client by its tax id (alternate lookup key).
pub async fn buscar_por_rut(db: &DatabaseConnection, rut: &str) -> Result<Option<cliente::Model>, ServiceError> {
    cliente::Entity::find()
        .filter(cliente::Column::RutEmpresa.eq(rut))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Persist a new client; the store assigns the id.
pub async fn guardar(
    db: &DatabaseConnection,
    rut_empresa: &str,
    razon_social: &str,
    giro: &str,
    direccion: &str,
    email: &str,
) -> Result<cliente::Model, ServiceError> {
    let am = cliente::ActiveModel {
        id: NotSet,
        rut_empresa: Set(rut_empresa.to_string()),
        razon_social: Set(razon_social.to_string()),
        giro: Set(giro.to_string()),
        direccion: Set(direccion.to_string()),
        email: Set(email.to_string()),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Replace an existing client wholesale. The path id wins over anything the
/// body carries; a missing target is `NotFound`.
pub async fn actualizar(
    db: &DatabaseConnection,
    id: i32,
    rut_empresa: &str,
    razon_social: &str,
    giro: &str,
    direccion: &str,
    email: &str,
) -> Result<cliente::Model, ServiceError> {
    buscar_por_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("cliente"))?;
    let am = cliente::ActiveModel {
        id: Set(id),
        rut_empresa: Set(rut_empresa.to_string()),
        razon_social: Set(razon_social.to_string()),
        giro: Set(giro.to_string()),
        direccion: Set(direccion.to_string()),
        email: Set(email.to_string()),
    };
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete by id; reports whether a row was actually removed.
pub async fn eliminar(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = cliente::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
