pub use sea_orm_migration::prelude::*;

mod m20260820_000001_create_hero_table;
mod m20260820_000002_create_power_table;
mod m20260820_000003_create_hero_power_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260820_000001_create_hero_table::Migration),
            Box::new(m20260820_000002_create_power_table::Migration),
            Box::new(m20260820_000003_create_hero_power_table::Migration),
        ]
    }
}
