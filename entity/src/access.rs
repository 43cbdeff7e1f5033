use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "access")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub occurred_at: DateTimeUtc,
    /// `entry` or `exit`
    pub direction: String,
    /// `authorized`, `denied` or `failed`
    pub result: String,
    pub plate: Option<String>,
    pub observations: Option<String>,
    pub vehicle_id: Option<i32>,
    pub control_point_id: Option<i32>,
    pub guard_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Vehicle,
    #[sea_orm(
        belongs_to = "super::control_point::Entity",
        from = "Column::ControlPointId",
        to = "super::control_point::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ControlPoint,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::GuardId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Guard,
    #[sea_orm(has_many = "super::alert::Entity")]
    Alert,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::control_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ControlPoint.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guard.def()
    }
}

impl Related<super::alert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alert.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
