use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_person_table::Person;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_uniq(Vehicle::Plate))
                    .col(string(Vehicle::Kind))
                    .col(string_null(Vehicle::Brand))
                    .col(string_null(Vehicle::Model))
                    .col(string_null(Vehicle::Color))
                    .col(integer(Vehicle::PersonId))
                    .col(boolean(Vehicle::Inside).default(false))
                    .col(
                        timestamp_with_time_zone(Vehicle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_person_id")
                            .from(Vehicle::Table, Vehicle::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Plate,
    Kind,
    Brand,
    Model,
    Color,
    PersonId,
    Inside,
    CreatedAt,
}
