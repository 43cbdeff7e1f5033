use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::access::guard_names,
    model::alert::{Alert, AlertRecord, NewAlert},
};

pub struct AlertRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AlertRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, alert: NewAlert) -> Result<Alert, DbErr> {
        let entity = entity::alert::ActiveModel {
            category: ActiveValue::Set(alert.category),
            detail: ActiveValue::Set(alert.detail),
            severity: ActiveValue::Set(alert.severity.as_str().to_string()),
            access_id: ActiveValue::Set(alert.access_id),
            guard_id: ActiveValue::Set(alert.guard_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Alert::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Alert>, DbErr> {
        entity::prelude::Alert::find_by_id(id)
            .one(self.db)
            .await?
            .map(Alert::from_entity)
            .transpose()
    }

    /// Gets every open alert, newest first.
    pub async fn get_all(&self) -> Result<Vec<AlertRecord>, DbErr> {
        self.get_records(None).await
    }

    /// Gets the alerts reported by one guard, newest first.
    pub async fn get_by_guard(&self, guard_id: i32) -> Result<Vec<AlertRecord>, DbErr> {
        self.get_records(Some(guard_id)).await
    }

    /// Deletes an alert, which resolves it.
    ///
    /// # Returns
    /// - `Ok(true)` - Alert deleted
    /// - `Ok(false)` - No alert with this id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Alert::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Alert::find().count(self.db).await
    }

    async fn get_records(&self, guard_id: Option<i32>) -> Result<Vec<AlertRecord>, DbErr> {
        let mut query = entity::prelude::Alert::find().find_also_related(entity::prelude::Access);
        if let Some(guard_id) = guard_id {
            query = query.filter(entity::alert::Column::GuardId.eq(guard_id));
        }

        let rows = query
            .order_by_desc(entity::alert::Column::CreatedAt)
            .order_by_desc(entity::alert::Column::Id)
            .all(self.db)
            .await?;

        let guard_ids = rows.iter().filter_map(|(a, _)| a.guard_id).collect();
        let guards = guard_names(self.db, guard_ids).await?;

        rows.into_iter()
            .map(|(alert, access)| {
                let guard_name = alert.guard_id.and_then(|id| guards.get(&id).cloned());

                Ok(AlertRecord {
                    alert: Alert::from_entity(alert)?,
                    access_at: access.as_ref().map(|a| a.occurred_at),
                    plate: access.and_then(|a| a.plate),
                    guard_name,
                })
            })
            .collect()
    }
}
