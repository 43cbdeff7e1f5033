use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string_uniq(Person::DocumentId))
                    .col(string(Person::Name))
                    .col(string(Person::Kind))
                    .col(string_null(Person::Email))
                    .col(string_null(Person::Phone))
                    .col(boolean(Person::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Person::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Person {
    Table,
    Id,
    DocumentId,
    Name,
    Kind,
    Email,
    Phone,
    Active,
    CreatedAt,
}
