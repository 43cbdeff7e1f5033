//! Access data repository.
//!
//! Access rows are append-only: this repository inserts and reads them but never updates
//! or deletes one. Listing queries join the vehicle in the same statement and resolve guard
//! and owner names with one batched lookup per page.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::{
        access::{AccessResult, Direction},
        vehicle::VehicleKind,
    },
    server::{
        model::{
            access::{Access, AccessFilter, AccessRecord, NewAccess},
            dashboard::AccessReportRow,
        },
        util::parse::parse_stored,
    },
};

/// Entry that opened a vehicle's current stay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryMark {
    pub access_id: i32,
    pub occurred_at: DateTime<Utc>,
}

pub struct AccessRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccessRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an access row stamped with the current time.
    pub async fn create(&self, access: NewAccess) -> Result<Access, DbErr> {
        let entity = entity::access::ActiveModel {
            occurred_at: ActiveValue::Set(Utc::now()),
            direction: ActiveValue::Set(access.direction.as_str().to_string()),
            result: ActiveValue::Set(access.result.as_str().to_string()),
            plate: ActiveValue::Set(access.plate),
            observations: ActiveValue::Set(access.observations),
            vehicle_id: ActiveValue::Set(access.vehicle_id),
            control_point_id: ActiveValue::Set(access.control_point_id),
            guard_id: ActiveValue::Set(access.guard_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Access::from_entity(entity)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Access::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Gets one page of the access history, newest first.
    ///
    /// # Arguments
    /// - `filter` - Parsed filter; `plate` is a substring match on the plate as read
    ///
    /// # Returns
    /// - `Ok((records, total))` - Records on the requested page and the total number of
    ///   matching rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_filtered(
        &self,
        filter: &AccessFilter,
    ) -> Result<(Vec<AccessRecord>, u64), DbErr> {
        let mut query =
            entity::prelude::Access::find().find_also_related(entity::prelude::Vehicle);

        if let Some(plate) = &filter.plate {
            query = query.filter(entity::access::Column::Plate.contains(plate.as_str()));
        }
        if let Some(kind) = filter.vehicle_kind {
            query = query.filter(entity::vehicle::Column::Kind.eq(kind.as_str()));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::access::Column::OccurredAt.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::access::Column::OccurredAt.lt(to));
        }

        let paginator = query
            .order_by_desc(entity::access::Column::OccurredAt)
            .order_by_desc(entity::access::Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(filter.page).await?;

        Ok((self.with_guard_names(rows).await?, total))
    }

    /// Gets the latest access rows, newest first.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<AccessRecord>, DbErr> {
        let rows = entity::prelude::Access::find()
            .find_also_related(entity::prelude::Vehicle)
            .order_by_desc(entity::access::Column::OccurredAt)
            .order_by_desc(entity::access::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.with_guard_names(rows).await
    }

    /// Finds the latest authorized entry of each given vehicle.
    pub async fn latest_entries(
        &self,
        vehicle_ids: &[i32],
    ) -> Result<HashMap<i32, EntryMark>, DbErr> {
        if vehicle_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entries = entity::prelude::Access::find()
            .filter(entity::access::Column::VehicleId.is_in(vehicle_ids.to_vec()))
            .filter(entity::access::Column::Direction.eq(Direction::Entry.as_str()))
            .filter(entity::access::Column::Result.eq(AccessResult::Authorized.as_str()))
            .order_by_desc(entity::access::Column::OccurredAt)
            .order_by_desc(entity::access::Column::Id)
            .all(self.db)
            .await?;

        let mut marks = HashMap::new();
        for entry in entries {
            if let Some(vehicle_id) = entry.vehicle_id {
                marks.entry(vehicle_id).or_insert(EntryMark {
                    access_id: entry.id,
                    occurred_at: entry.occurred_at,
                });
            }
        }

        Ok(marks)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Access::find().count(self.db).await
    }

    /// Gets every access joined with vehicle and owner details, newest first.
    pub async fn get_report_rows(&self) -> Result<Vec<AccessReportRow>, DbErr> {
        let rows = entity::prelude::Access::find()
            .find_also_related(entity::prelude::Vehicle)
            .order_by_desc(entity::access::Column::OccurredAt)
            .order_by_desc(entity::access::Column::Id)
            .all(self.db)
            .await?;

        let owner_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, vehicle)| vehicle.as_ref().map(|v| v.person_id))
            .collect();
        let owners: HashMap<i32, String> = if owner_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Person::find()
                .filter(entity::person::Column::Id.is_in(owner_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p.name))
                .collect()
        };

        rows.into_iter()
            .map(|(access, vehicle)| {
                let result = parse_stored("access.result", &access.result, AccessResult::parse)?;
                let vehicle_kind = vehicle
                    .as_ref()
                    .map(|v| parse_stored("vehicle.kind", &v.kind, VehicleKind::parse))
                    .transpose()?;

                Ok(AccessReportRow {
                    access_id: access.id,
                    occurred_at: access.occurred_at,
                    plate: access.plate,
                    vehicle_kind,
                    color: vehicle.as_ref().and_then(|v| v.color.clone()),
                    owner_name: vehicle.and_then(|v| owners.get(&v.person_id).cloned()),
                    result,
                })
            })
            .collect()
    }

    async fn with_guard_names(
        &self,
        rows: Vec<(entity::access::Model, Option<entity::vehicle::Model>)>,
    ) -> Result<Vec<AccessRecord>, DbErr> {
        let guard_ids: Vec<i32> = rows.iter().filter_map(|(a, _)| a.guard_id).collect();
        let guards = guard_names(self.db, guard_ids).await?;

        rows.into_iter()
            .map(|(access, vehicle)| {
                let guard_name = access.guard_id.and_then(|id| guards.get(&id).cloned());
                let vehicle_kind = vehicle
                    .map(|v| parse_stored("vehicle.kind", &v.kind, VehicleKind::parse))
                    .transpose()?;

                Ok(AccessRecord {
                    access: Access::from_entity(access)?,
                    vehicle_kind,
                    guard_name,
                })
            })
            .collect()
    }
}

/// Resolves user ids to display names with a single query.
pub(super) async fn guard_names<C: ConnectionTrait>(
    db: &C,
    ids: Vec<i32>,
) -> Result<HashMap<i32, String>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(entity::prelude::User::find()
        .filter(entity::user::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|u| (u.id, u.name))
        .collect())
}
