//! Gate validation and access history.
//!
//! A validation reads the plate from the camera frame first, then decides and records
//! the outcome inside one transaction: the occupancy flip, the access row and any alert
//! either all commit or none do. The flip is a compare-and-set on `vehicle.inside`, so
//! when two scans of the same plate race only one of them is authorized.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        access::{AccessResult, Direction},
        alert::Severity,
    },
    server::{
        data::{
            access::AccessRepository, alert::AlertRepository,
            control_point::ControlPointRepository, vehicle::VehicleRepository,
        },
        error::AppError,
        model::{
            access::{
                AccessFilter, AccessOutcome, AccessRecord, NewAccess, PaginatedAccesses,
                ValidateAccessParams,
            },
            alert::{NewAlert, UNAUTHORIZED_ACCESS_CATEGORY},
            vehicle::VehicleInside,
        },
        service::ocr::PlateRecognizer,
        util::{image::decode_image_payload, plate::extract_from_candidates},
    },
};

const REASON_UNREADABLE: &str = "no plate could be read from the image";
const REASON_NOT_REGISTERED: &str = "vehicle is not registered";
const REASON_OWNER_INACTIVE: &str = "vehicle owner is inactive";
const REASON_ALREADY_INSIDE: &str = "vehicle is already inside";
const REASON_NO_OPEN_ENTRY: &str = "vehicle has no open entry";

pub struct AccessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates a gate scan and records its outcome.
    ///
    /// Unreadable frames and recognizer errors are a `failed` outcome, not an error.
    /// Unregistered plates and inactive owners are denied and raise a medium alert.
    /// Entries of a vehicle already inside and exits of a vehicle not inside are denied.
    ///
    /// # Arguments
    /// - `recognizer` - OCR backend
    /// - `params` - Frame, direction, optional control point and the guard on duty
    ///
    /// # Returns
    /// - `Ok(AccessOutcome)` - The recorded outcome
    /// - `Err(AppError::BadRequest)` - Empty image or unknown control point
    /// - `Err(AppError::DbErr)` - Database error; nothing was recorded
    pub async fn validate(
        &self,
        recognizer: &dyn PlateRecognizer,
        params: ValidateAccessParams,
    ) -> Result<AccessOutcome, AppError> {
        if params.image_base64.trim().is_empty() {
            return Err(AppError::BadRequest("An image is required".to_string()));
        }

        let control_point_id = self
            .resolve_control_point(params.direction, params.control_point_id)
            .await?;

        let plate = read_plate(recognizer, &params.image_base64).await;

        let txn = self.db.begin().await?;
        let gate = Gate {
            db: &txn,
            direction: params.direction,
            control_point_id,
            guard_id: params.guard_id,
        };

        let outcome = match plate {
            Some(plate) => gate.decide(plate).await?,
            None => gate.fail().await?,
        };
        txn.commit().await?;

        match outcome.result {
            AccessResult::Authorized => tracing::info!(
                "Authorized {} of {}",
                outcome.direction.as_str(),
                outcome.plate.as_deref().unwrap_or_default()
            ),
            AccessResult::Denied => tracing::warn!(
                "Denied {} of {}: {}",
                outcome.direction.as_str(),
                outcome.plate.as_deref().unwrap_or_default(),
                outcome.reason.as_deref().unwrap_or_default()
            ),
            AccessResult::Failed => tracing::warn!(
                "Failed {} scan by guard {}",
                outcome.direction.as_str(),
                params.guard_id
            ),
        }

        Ok(outcome)
    }

    /// Gets one page of the access history.
    pub async fn get_history(&self, filter: AccessFilter) -> Result<PaginatedAccesses, AppError> {
        let (accesses, total) = AccessRepository::new(self.db)
            .get_filtered(&filter)
            .await?;

        Ok(PaginatedAccesses {
            accesses,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: total.div_ceil(filter.per_page),
        })
    }

    /// Gets the latest access rows, newest first.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<AccessRecord>, AppError> {
        Ok(AccessRepository::new(self.db).get_recent(limit).await?)
    }

    /// Gets vehicles currently inside with the entry that let them in.
    pub async fn get_vehicles_inside(&self) -> Result<Vec<VehicleInside>, AppError> {
        let vehicles = VehicleRepository::new(self.db).get_inside().await?;

        let ids: Vec<i32> = vehicles.iter().map(|v| v.vehicle.id).collect();
        let entries = AccessRepository::new(self.db).latest_entries(&ids).await?;

        Ok(vehicles
            .into_iter()
            .map(|v| {
                let entry = entries.get(&v.vehicle.id);

                VehicleInside {
                    owner_name: v.owner.map(|o| o.name),
                    entry_access_id: entry.map(|e| e.access_id),
                    entered_at: entry.map(|e| e.occurred_at),
                    vehicle: v.vehicle,
                }
            })
            .collect())
    }

    async fn resolve_control_point(
        &self,
        direction: Direction,
        requested: Option<i32>,
    ) -> Result<Option<i32>, AppError> {
        let repo = ControlPointRepository::new(self.db);

        match requested {
            Some(id) if repo.exists(id).await? => Ok(Some(id)),
            Some(id) => Err(AppError::BadRequest(format!(
                "Control point {} does not exist",
                id
            ))),
            None => Ok(repo.default_for(direction).await?),
        }
    }
}

/// Decodes the frame and asks the recognizer for text. Any failure yields `None`.
async fn read_plate(recognizer: &dyn PlateRecognizer, image_base64: &str) -> Option<String> {
    let image = match decode_image_payload(image_base64) {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!("Discarding undecodable gate image: {}", e);
            return None;
        }
    };

    match recognizer.read_text(&image).await {
        Ok(texts) => extract_from_candidates(&texts),
        Err(e) => {
            tracing::warn!("Plate recognizer failed: {}", e);
            None
        }
    }
}

/// One scan being decided inside its transaction.
struct Gate<'a, C: ConnectionTrait> {
    db: &'a C,
    direction: Direction,
    control_point_id: Option<i32>,
    guard_id: i32,
}

impl<'a, C: ConnectionTrait> Gate<'a, C> {
    async fn fail(&self) -> Result<AccessOutcome, AppError> {
        let access = AccessRepository::new(self.db)
            .create(self.new_access(AccessResult::Failed, None, None, REASON_UNREADABLE))
            .await?;

        Ok(AccessOutcome {
            access_id: access.id,
            result: AccessResult::Failed,
            direction: self.direction,
            plate: None,
            reason: Some(REASON_UNREADABLE.to_string()),
            owner_name: None,
            alert_id: None,
        })
    }

    async fn decide(&self, plate: String) -> Result<AccessOutcome, AppError> {
        let vehicles = VehicleRepository::new(self.db);

        let Some(found) = vehicles.find_by_plate(&plate).await? else {
            return self.deny_with_alert(plate, None, None, REASON_NOT_REGISTERED).await;
        };

        let vehicle_id = found.vehicle.id;
        let owner = match found.owner {
            Some(owner) if owner.active => owner,
            owner => {
                return self
                    .deny_with_alert(
                        plate,
                        Some(vehicle_id),
                        owner.map(|o| o.name),
                        REASON_OWNER_INACTIVE,
                    )
                    .await;
            }
        };

        let entering = self.direction == Direction::Entry;
        let (result, reason) = if vehicles.set_inside_if(vehicle_id, entering).await? {
            (AccessResult::Authorized, None)
        } else if entering {
            (AccessResult::Denied, Some(REASON_ALREADY_INSIDE))
        } else {
            (AccessResult::Denied, Some(REASON_NO_OPEN_ENTRY))
        };

        let access = AccessRepository::new(self.db)
            .create(self.new_access(
                result,
                Some(plate.clone()),
                Some(vehicle_id),
                reason.unwrap_or_default(),
            ))
            .await?;

        Ok(AccessOutcome {
            access_id: access.id,
            result,
            direction: self.direction,
            plate: Some(plate),
            reason: reason.map(str::to_string),
            owner_name: Some(owner.name),
            alert_id: None,
        })
    }

    async fn deny_with_alert(
        &self,
        plate: String,
        vehicle_id: Option<i32>,
        owner_name: Option<String>,
        reason: &str,
    ) -> Result<AccessOutcome, AppError> {
        let access = AccessRepository::new(self.db)
            .create(self.new_access(
                AccessResult::Denied,
                Some(plate.clone()),
                vehicle_id,
                reason,
            ))
            .await?;

        let alert = AlertRepository::new(self.db)
            .create(NewAlert {
                category: UNAUTHORIZED_ACCESS_CATEGORY.to_string(),
                detail: format!(
                    "{} attempt by {}: {}",
                    self.direction.as_str(),
                    plate,
                    reason
                ),
                severity: Severity::Medium,
                access_id: Some(access.id),
                guard_id: Some(self.guard_id),
            })
            .await?;

        Ok(AccessOutcome {
            access_id: access.id,
            result: AccessResult::Denied,
            direction: self.direction,
            plate: Some(plate),
            reason: Some(reason.to_string()),
            owner_name,
            alert_id: Some(alert.id),
        })
    }

    fn new_access(
        &self,
        result: AccessResult,
        plate: Option<String>,
        vehicle_id: Option<i32>,
        observations: &str,
    ) -> NewAccess {
        NewAccess {
            direction: self.direction,
            result,
            plate,
            observations: Some(observations.to_string()).filter(|o| !o.is_empty()),
            vehicle_id,
            control_point_id: self.control_point_id,
            guard_id: Some(self.guard_id),
        }
    }
}
