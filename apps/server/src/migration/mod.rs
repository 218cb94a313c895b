//! SeaORM migrations for the baseline schema.
//!
//! Later schema changes are LMS upgrade steps keyed by `dbinfo.dbversion`,
//! see [`crate::upgrade`].

pub use sea_orm_migration::prelude::*;

mod m20060810_000001_create_base_schema;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20060810_000001_create_base_schema::Migration)]
    }
}
