pub use sea_orm_migration::prelude::*;

mod m20230726_000001_create_user_table;
mod m20230726_000002_create_message_table;
mod m20230726_000003_create_vote_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230726_000001_create_user_table::Migration),
            Box::new(m20230726_000002_create_message_table::Migration),
            Box::new(m20230726_000003_create_vote_table::Migration),
        ]
    }
}
