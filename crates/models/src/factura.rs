use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// `rut_emisor` is deliberately non-unique: one company issues many invoices.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "factura")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rut_emisor: String,
    pub fecha_emision: Date,
    pub monto_neto: i32,
    pub iva: i32,
    pub monto_total: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}
