//! Audit trail recording and listing.
//!
//! [`AuditTrail`] is the single entry point every mutating service goes through. It is
//! constructed over the same transaction as the mutation it records, so a rolled back
//! mutation leaves no audit row behind and a committed one leaves exactly one.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::audit::{AuditAction, AuditFilterParams},
    server::{
        data::audit::AuditRepository,
        error::{internal::InternalError, AppError},
        model::audit::{Auditable, NewAuditEntry, PaginatedAudit},
    },
};

/// Writes audit rows on behalf of one acting user.
pub struct AuditTrail<'a, C: ConnectionTrait> {
    db: &'a C,
    actor: Option<i32>,
}

impl<'a, C: ConnectionTrait> AuditTrail<'a, C> {
    /// # Arguments
    /// - `db` - The transaction the audited mutation runs in
    /// - `actor` - Id of the acting user
    pub fn new(db: &'a C, actor: Option<i32>) -> Self {
        Self { db, actor }
    }

    /// Records one mutation of `T`.
    ///
    /// The entity id is taken from whichever snapshot is present, the new one first.
    ///
    /// # Arguments
    /// - `action` - What happened
    /// - `previous` - State before the mutation, `None` for creations
    /// - `new` - State after the mutation, `None` for deletions
    ///
    /// # Returns
    /// - `Ok(())` - Audit row written
    /// - `Err(AppError::InternalErr)` - A snapshot could not be serialized
    /// - `Err(AppError::InternalError)` - Neither snapshot was given
    /// - `Err(AppError::DbErr)` - Insert failed
    pub async fn record<T: Auditable>(
        &self,
        action: AuditAction,
        previous: Option<&T>,
        new: Option<&T>,
    ) -> Result<(), AppError> {
        let entity_id = new
            .or(previous)
            .map(|model| model.audit_id())
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Audit of {} {} recorded without any state",
                    T::ENTITY,
                    action.as_str()
                ))
            })?;

        self.record_raw(
            T::ENTITY,
            entity_id,
            action,
            previous.map(snapshot).transpose()?,
            new.map(snapshot).transpose()?,
        )
        .await
    }

    /// Records an action whose snapshot is not a full model, such as a login.
    pub async fn record_raw(
        &self,
        entity: &'static str,
        entity_id: i32,
        action: AuditAction,
        previous_state: Option<String>,
        new_state: Option<String>,
    ) -> Result<(), AppError> {
        AuditRepository::new(self.db)
            .create(NewAuditEntry {
                user_id: self.actor,
                entity,
                entity_id,
                action,
                previous_state,
                new_state,
            })
            .await?;

        tracing::debug!(
            "Audit {} {} #{} by {:?}",
            action.as_str(),
            entity,
            entity_id,
            self.actor
        );

        Ok(())
    }
}

fn snapshot<T: Auditable>(model: &T) -> Result<String, AppError> {
    serde_json::to_string(model).map_err(|source| {
        InternalError::AuditSnapshot {
            entity: T::ENTITY,
            source,
        }
        .into()
    })
}

pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of the audit log, newest first.
    ///
    /// # Returns
    /// - `Ok(PaginatedAudit)` - Requested page with totals
    /// - `Err(AppError::BadRequest)` - Page size of zero
    pub async fn get_paginated(
        &self,
        params: AuditFilterParams,
    ) -> Result<PaginatedAudit, AppError> {
        if params.entries == 0 {
            return Err(AppError::BadRequest(
                "entries must be greater than zero".to_string(),
            ));
        }

        let entity = params
            .entity
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty());

        let (entries, total) = AuditRepository::new(self.db)
            .get_paginated(entity, params.page, params.entries)
            .await?;

        Ok(PaginatedAudit {
            entries,
            total,
            page: params.page,
            per_page: params.entries,
            total_pages: total.div_ceil(params.entries),
        })
    }
}
