use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_user_table::User, m20250601_000005_create_access_table::Access,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alert::Table)
                    .if_not_exists()
                    .col(pk_auto(Alert::Id))
                    .col(string(Alert::Category))
                    .col(text(Alert::Detail))
                    .col(string(Alert::Severity))
                    .col(integer_null(Alert::AccessId))
                    .col(integer_null(Alert::GuardId))
                    .col(
                        timestamp_with_time_zone(Alert::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alert_access_id")
                            .from(Alert::Table, Alert::AccessId)
                            .to(Access::Table, Access::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alert_guard_id")
                            .from(Alert::Table, Alert::GuardId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alert::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Alert {
    Table,
    Id,
    Category,
    Detail,
    Severity,
    AccessId,
    GuardId,
    CreatedAt,
}
