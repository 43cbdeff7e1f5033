//! Audit log repository.
//!
//! The audit log is append-only. This repository exposes an insert and read queries;
//! there is no update or delete.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::audit::{AuditEntry, NewAuditEntry};

pub struct AuditRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends one audit row stamped with the current time.
    pub async fn create(&self, entry: NewAuditEntry) -> Result<(), DbErr> {
        entity::audit_log::ActiveModel {
            occurred_at: ActiveValue::Set(Utc::now()),
            user_id: ActiveValue::Set(entry.user_id),
            entity: ActiveValue::Set(entry.entity.to_string()),
            entity_id: ActiveValue::Set(entry.entity_id),
            action: ActiveValue::Set(entry.action.as_str().to_string()),
            previous_state: ActiveValue::Set(entry.previous_state),
            new_state: ActiveValue::Set(entry.new_state),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets one page of audit entries, newest first.
    ///
    /// # Arguments
    /// - `entity` - Only entries about this entity when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of entries per page
    ///
    /// # Returns
    /// - `Ok((entries, total))` - Entries on the page and total matching entries
    /// - `Err(DbErr)` - Database error or an unreadable stored row
    pub async fn get_paginated(
        &self,
        entity: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<AuditEntry>, u64), DbErr> {
        let mut query =
            entity::prelude::AuditLog::find().find_also_related(entity::prelude::User);
        if let Some(entity) = entity {
            query = query.filter(entity::audit_log::Column::Entity.eq(entity));
        }

        let paginator = query
            .order_by_desc(entity::audit_log::Column::OccurredAt)
            .order_by_desc(entity::audit_log::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entries = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(|(entry, user)| AuditEntry::from_entity(entry, user))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((entries, total))
    }
}
