use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::access::Direction;

pub struct ControlPointRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ControlPointRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::ControlPoint::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Id of the lowest-numbered control point serving the given direction.
    pub async fn default_for(&self, direction: Direction) -> Result<Option<i32>, DbErr> {
        let point = entity::prelude::ControlPoint::find()
            .filter(entity::control_point::Column::Direction.eq(direction.as_str()))
            .order_by_asc(entity::control_point::Column::Id)
            .one(self.db)
            .await?;

        Ok(point.map(|p| p.id))
    }
}
