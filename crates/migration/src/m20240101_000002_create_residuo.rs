//! Create `residuo` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Residuo::Table)
                    .if_not_exists()
                    .col(pk_auto(Residuo::Id))
                    .col(string_len(Residuo::Tipo, 64).not_null())
                    .col(string_len(Residuo::Descripcion, 256).not_null())
                    .col(integer(Residuo::CantidadKg).not_null())
                    .col(boolean(Residuo::Peligroso).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Residuo::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Residuo { Table, Id, Tipo, Descripcion, CantidadKg, Peligroso }
