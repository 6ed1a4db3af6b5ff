use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set,
};

use crate::errors::ServiceError;
use models::residuo;

pub async fn listar_todos(db: &DatabaseConnection) -> Result<Vec<residuo::Model>, ServiceError> {
    residuo::Entity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn buscar_por_id(db: &DatabaseConnection, id: i32) -> Result<Option<residuo::Model>, ServiceError> {
    residuo::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Persist a new waste record; the store assigns the id.
pub async fn guardar(
    db: &DatabaseConnection,
    tipo: &str,
    descripcion: &str,
    cantidad_kg: i32,
    peligroso: bool,
) -> Result<residuo::Model, ServiceError> {
    let am = residuo::ActiveModel {
        id: NotSet,
        tipo: Set(tipo.to_string()),
        descripcion: Set(descripcion.to_string()),
        cantidad_kg: Set(cantidad_kg),
        peligroso: Set(peligroso),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Replace an existing record under the path id; a missing target is `NotFound`.
pub async fn actualizar(
    db: &DatabaseConnection,
    id: i32,
    tipo: &str,
    descripcion: &str,
    cantidad_kg: i32,
    peligroso: bool,
) -> Result<residuo::Model, ServiceError> {
    buscar_por_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("residuo"))?;
    let am = residuo::ActiveModel {
        id: Set(id),
        tipo: Set(tipo.to_string()),
        descripcion: Set(descripcion.to_string()),
        cantidad_kg: Set(cantidad_kg),
        peligroso: Set(peligroso),
    };
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete by id; reports whether a row was actually removed.
pub async fn eliminar_por_id(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = residuo::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
