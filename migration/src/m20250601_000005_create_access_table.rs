use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_user_table::User, m20250601_000003_create_vehicle_table::Vehicle,
    m20250601_000004_create_control_point_table::ControlPoint,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Access::Table)
                    .if_not_exists()
                    .col(pk_auto(Access::Id))
                    .col(
                        timestamp_with_time_zone(Access::OccurredAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Access::Direction))
                    .col(string(Access::Result))
                    .col(string_null(Access::Plate))
                    .col(text_null(Access::Observations))
                    .col(integer_null(Access::VehicleId))
                    .col(integer_null(Access::ControlPointId))
                    .col(integer_null(Access::GuardId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_vehicle_id")
                            .from(Access::Table, Access::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_control_point_id")
                            .from(Access::Table, Access::ControlPointId)
                            .to(ControlPoint::Table, ControlPoint::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_guard_id")
                            .from(Access::Table, Access::GuardId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_access_occurred_at")
                    .table(Access::Table)
                    .col(Access::OccurredAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Access::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Access {
    Table,
    Id,
    OccurredAt,
    Direction,
    Result,
    Plate,
    Observations,
    VehicleId,
    ControlPointId,
    GuardId,
}
