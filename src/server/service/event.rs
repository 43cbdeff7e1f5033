use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::audit::AuditAction,
    server::{
        data::event::EventRepository,
        error::AppError,
        model::event::{Event, EventParams},
        service::audit::AuditTrail,
    },
};

/// Facility calendar.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, AppError> {
        Ok(EventRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create(&self, actor: i32, params: EventParams) -> Result<Event, AppError> {
        let txn = self.db.begin().await?;

        let event = EventRepository::new(&txn).create(params, actor).await?;

        AuditTrail::new(&txn, Some(actor))
            .record(AuditAction::Create, None, Some(&event))
            .await?;
        txn.commit().await?;

        Ok(event)
    }

    /// # Returns
    /// - `Ok(Some(Event))` - The updated event
    /// - `Ok(None)` - No event with this id
    pub async fn update(
        &self,
        actor: i32,
        id: i32,
        params: EventParams,
    ) -> Result<Option<Event>, AppError> {
        let txn = self.db.begin().await?;
        let repo = EventRepository::new(&txn);

        let Some(previous) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let event = repo.update(id, params).await?;

        AuditTrail::new(&txn, Some(actor))
            .record(AuditAction::Update, Some(&previous), Some(&event))
            .await?;
        txn.commit().await?;

        Ok(Some(event))
    }

    /// Marks an event as checked (or unchecked) by the guard on duty.
    pub async fn set_verified(
        &self,
        actor: i32,
        id: i32,
        verified: bool,
    ) -> Result<Option<Event>, AppError> {
        let txn = self.db.begin().await?;
        let repo = EventRepository::new(&txn);

        let Some(previous) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        repo.set_verified(id, verified).await?;
        let event = Event {
            verified,
            ..previous.clone()
        };

        AuditTrail::new(&txn, Some(actor))
            .record(AuditAction::Update, Some(&previous), Some(&event))
            .await?;
        txn.commit().await?;

        Ok(Some(event))
    }

    pub async fn delete(&self, actor: i32, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = EventRepository::new(&txn);

        let Some(previous) = repo.find_by_id(id).await? else {
            return Ok(false);
        };

        repo.delete(id).await?;

        AuditTrail::new(&txn, Some(actor))
            .record(AuditAction::Delete, Some(&previous), None)
            .await?;
        txn.commit().await?;

        Ok(true)
    }
}
