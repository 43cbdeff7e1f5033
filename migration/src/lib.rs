pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_person_table;
mod m20250601_000003_create_vehicle_table;
mod m20250601_000004_create_control_point_table;
mod m20250601_000005_create_access_table;
mod m20250601_000006_create_alert_table;
mod m20250601_000007_create_audit_log_table;
mod m20250601_000008_create_event_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_person_table::Migration),
            Box::new(m20250601_000003_create_vehicle_table::Migration),
            Box::new(m20250601_000004_create_control_point_table::Migration),
            Box::new(m20250601_000005_create_access_table::Migration),
            Box::new(m20250601_000006_create_alert_table::Migration),
            Box::new(m20250601_000007_create_audit_log_table::Migration),
            Box::new(m20250601_000008_create_event_table::Migration),
        ]
    }
}
