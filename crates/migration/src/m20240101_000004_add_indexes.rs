use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Factura: lookups filter on the issuing company's rut
        manager
            .create_index(
                Index::create()
                    .name("idx_factura_rut_emisor")
                    .table(Factura::Table)
                    .col(Factura::RutEmisor)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_factura_rut_emisor").table(Factura::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Factura { Table, RutEmisor }
