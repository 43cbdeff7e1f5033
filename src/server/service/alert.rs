use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::audit::AuditAction,
    server::{
        data::{access::AccessRepository, alert::AlertRepository},
        error::AppError,
        model::alert::{Alert, AlertRecord, NewAlert},
        service::audit::AuditTrail,
    },
};

pub struct AlertService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every open alert, newest first.
    pub async fn get_all(&self) -> Result<Vec<AlertRecord>, AppError> {
        Ok(AlertRepository::new(self.db).get_all().await?)
    }

    /// Gets the incidents a guard reported, newest first.
    pub async fn get_reported_by(&self, guard_id: i32) -> Result<Vec<AlertRecord>, AppError> {
        Ok(AlertRepository::new(self.db).get_by_guard(guard_id).await?)
    }

    /// Files a manual incident report.
    ///
    /// # Returns
    /// - `Ok(Alert)` - The created alert
    /// - `Err(AppError::BadRequest)` - The referenced access does not exist
    pub async fn report(&self, alert: NewAlert) -> Result<Alert, AppError> {
        let txn = self.db.begin().await?;

        if let Some(access_id) = alert.access_id {
            if !AccessRepository::new(&txn).exists(access_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Access {} does not exist",
                    access_id
                )));
            }
        }

        let actor = alert.guard_id;
        let created = AlertRepository::new(&txn).create(alert).await?;

        AuditTrail::new(&txn, actor)
            .record(AuditAction::Create, None, Some(&created))
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Guard {:?} reported {} incident {}",
            actor,
            created.severity.as_str(),
            created.id
        );

        Ok(created)
    }

    /// Resolves an alert by deleting it.
    ///
    /// # Returns
    /// - `Ok(true)` - Alert resolved
    /// - `Ok(false)` - No alert with this id
    pub async fn resolve(&self, actor: i32, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = AlertRepository::new(&txn);

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
