use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "alert")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub detail: String,
    /// `low`, `medium` or `high`
    pub severity: String,
    pub access_id: Option<i32>,
    pub guard_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::access::Entity",
        from = "Column::AccessId",
        to = "super::access::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Access,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::GuardId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Guard,
}

impl Related<super::access::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Access.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
