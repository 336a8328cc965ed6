use sea_orm_migration::prelude::*;

/// Runs the migration CLI against `DATABASE_URL`.
///
/// `cargo run -p migration -- up` brings the schema to the latest revision.
#[tokio::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
