use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Email uniqueness is enforced here for every write, not only by the create pre-check.
        manager
            .create_index(
                Index::create()
                    .name("uniq_empleados_email")
                    .table(Empleado::Table)
                    .col(Empleado::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_empleados_email").table(Empleado::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Empleado {
    #[sea_orm(iden = "empleados")]
    Table,
    Email,
}
