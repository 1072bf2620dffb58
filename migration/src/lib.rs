pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_owner_profile_table;
mod m20260105_000003_create_session_table;
mod m20260106_000004_create_business_table;
mod m20260106_000005_create_event_table;
mod m20260106_000006_create_booking_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_owner_profile_table::Migration),
            Box::new(m20260105_000003_create_session_table::Migration),
            Box::new(m20260106_000004_create_business_table::Migration),
            Box::new(m20260106_000005_create_event_table::Migration),
            Box::new(m20260106_000006_create_booking_table::Migration),
        ]
    }
}
