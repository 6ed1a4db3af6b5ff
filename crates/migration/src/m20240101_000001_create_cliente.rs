//! Create `cliente` table.
//!
//! `rut_empresa` is the business tax id and doubles as an alternate lookup key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cliente::Table)
                    .if_not_exists()
                    .col(pk_auto(Cliente::Id))
                    .col(string_len(Cliente::RutEmpresa, 16).unique_key().not_null())
                    .col(string_len(Cliente::RazonSocial, 128).not_null())
                    .col(string_len(Cliente::Giro, 128).not_null())
                    .col(string_len(Cliente::Direccion, 256).not_null())
                    .col(string_len(Cliente::Email, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cliente::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cliente { Table, Id, RutEmpresa, RazonSocial, Giro, Direccion, Email }
