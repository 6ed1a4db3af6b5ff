//! Create `factura` table.
//!
//! `rut_emisor` is non-unique: a company issues many invoices.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Factura::Table)
                    .if_not_exists()
                    .col(pk_auto(Factura::Id))
                    .col(string_len(Factura::RutEmisor, 16).not_null())
                    .col(date(Factura::FechaEmision).not_null())
                    .col(integer(Factura::MontoNeto).not_null())
                    .col(integer(Factura::Iva).not_null())
                    .col(integer(Factura::MontoTotal).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Factura::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Factura { Table, Id, RutEmisor, FechaEmision, MontoNeto, Iva, MontoTotal }
