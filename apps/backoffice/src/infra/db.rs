use db_infra::config::db::{DbKind, DbOwner, PoolPurpose, RuntimeEnv};
use db_infra::{connect_pool, orchestrate_migration, orchestrate_migration_internal};
use migration::MigrationCommand;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::error::AppError;

/// Connects and brings the schema up to date.
///
/// Postgres and SQLite files migrate through a separate owner pool, then the
/// service connects as the application role. An in-memory database exists
/// only inside its single connection, so that connection is migrated and
/// returned as-is.
pub async fn bootstrap_db(env: RuntimeEnv, db_kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = match db_kind {
        DbKind::SqliteMemory => {
            let conn = connect_pool(env, db_kind, DbOwner::Owner, PoolPurpose::Migration).await?;
            orchestrate_migration_internal(&conn, env, db_kind, MigrationCommand::Up).await?;
            conn
        }
        DbKind::Postgres | DbKind::SqliteFile => {
            orchestrate_migration(env, db_kind, MigrationCommand::Up).await?;
            connect_pool(env, db_kind, DbOwner::App, PoolPurpose::Runtime).await?
        }
    };

    info!(env = ?env, db_kind = ?db_kind, "db=ready");
    Ok(conn)
}
