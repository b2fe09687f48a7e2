pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_cc_status_table;
mod m20251020_000002_create_cc_timestamp_table;
mod m20251020_000003_create_cc_alert_chans_table;
mod m20251020_000004_create_cc_cooldown_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_cc_status_table::Migration),
            Box::new(m20251020_000002_create_cc_timestamp_table::Migration),
            Box::new(m20251020_000003_create_cc_alert_chans_table::Migration),
            Box::new(m20251020_000004_create_cc_cooldown_table::Migration),
        ]
    }
}
