use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ControlPoint::Table)
                    .if_not_exists()
                    .col(pk_auto(ControlPoint::Id))
                    .col(string(ControlPoint::Name))
                    .col(string(ControlPoint::Direction))
                    .to_owned(),
            )
            .await?;

        // Every installation starts with one gate lane per direction
        let seed = Query::insert()
            .into_table(ControlPoint::Table)
            .columns([ControlPoint::Name, ControlPoint::Direction])
            .values_panic(["Main gate entry".into(), "entry".into()])
            .values_panic(["Main gate exit".into(), "exit".into()])
            .to_owned();

        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ControlPoint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ControlPoint {
    Table,
    Id,
    Name,
    Direction,
}
