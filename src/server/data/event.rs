use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::{Event, EventParams};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an unverified event.
    pub async fn create(&self, params: EventParams, creator_id: i32) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            location: ActiveValue::Set(params.location),
            category: ActiveValue::Set(params.category),
            starts_at: ActiveValue::Set(params.starts_at),
            ends_at: ActiveValue::Set(params.ends_at),
            creator_id: ActiveValue::Set(Some(creator_id)),
            verified: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        Ok(entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .map(Event::from_entity))
    }

    /// Gets every event, latest start first.
    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        Ok(entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::StartsAt)
            .order_by_desc(entity::event::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect())
    }

    /// Overwrites the descriptive fields and dates. Creator and verification are kept.
    pub async fn update(&self, id: i32, params: EventParams) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            location: ActiveValue::Set(params.location),
            category: ActiveValue::Set(params.category),
            starts_at: ActiveValue::Set(params.starts_at),
            ends_at: ActiveValue::Set(params.ends_at),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn set_verified(&self, id: i32, verified: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::update_many()
            .col_expr(entity::event::Column::Verified, Expr::value(verified))
            .filter(entity::event::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
