//! Create `empleados` table.
//!
//! Ids are assigned by the database on insert.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Empleado::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Empleado::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Empleado::Nombre).string_len(255).not_null())
                    .col(ColumnDef::new(Empleado::Apellido).string_len(255).not_null())
                    .col(ColumnDef::new(Empleado::Email).string_len(255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Empleado::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Empleado {
    #[sea_orm(iden = "empleados")]
    Table,
    Id,
    Nombre,
    Apellido,
    Email,
}
