use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        access::AccessRepository, alert::AlertRepository, person::PersonRepository,
        vehicle::VehicleRepository,
    },
    error::AppError,
    model::dashboard::{AccessReportRow, AdminSummary, GuardDashboard},
};

/// Number of accesses shown on the guard dashboard.
pub const GUARD_DASHBOARD_RECENT: u64 = 5;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registry and activity totals for the admin overview.
    pub async fn admin_summary(&self) -> Result<AdminSummary, AppError> {
        let vehicles = VehicleRepository::new(self.db);

        Ok(AdminSummary {
            total_vehicles: vehicles.count().await?,
            total_accesses: AccessRepository::new(self.db).count().await?,
            total_alerts: AlertRepository::new(self.db).count().await?,
            vehicles_inside: vehicles.count_inside().await?,
            active_persons: PersonRepository::new(self.db).count_active().await?,
        })
    }

    /// Latest accesses plus alert and vehicle counts for the guard screen.
    pub async fn guard_dashboard(&self) -> Result<GuardDashboard, AppError> {
        Ok(GuardDashboard {
            recent_accesses: AccessRepository::new(self.db)
                .get_recent(GUARD_DASHBOARD_RECENT)
                .await?,
            active_alerts: AlertRepository::new(self.db).count().await?,
            total_vehicles: VehicleRepository::new(self.db).count().await?,
        })
    }

    /// Access report rows, newest first. Also feeds the PDF and Excel exports.
    pub async fn access_report(&self) -> Result<Vec<AccessReportRow>, AppError> {
        Ok(AccessRepository::new(self.db).get_report_rows().await?)
    }
}
