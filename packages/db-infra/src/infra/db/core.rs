use std::future::Future;
use std::time::{Duration, Instant};

use migration::{migrate, MigrationCommand, MigrationName, Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use tracing::{info, trace, warn};

use crate::config::db::{
    make_conn_spec, pool_settings, sqlite_file_path, validate_db_config, DbKind, DbOwner,
    PoolPurpose, RuntimeEnv,
};
use crate::error::DbInfraError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

fn get_db_engine(db_kind: DbKind) -> &'static str {
    match db_kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, DbInfraError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbInfraError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(
                        "connection_retry=success attempts={} interval_ms={}",
                        attempt, interval_ms
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    warn!(
                        "connection_retry=failed attempt={} max_attempts={} interval_ms={}",
                        attempt, max_attempts, interval_ms
                    );
                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| DbInfraError::connect("no connection attempt was made")))
}

/// Opens a pool for the given environment, engine and role.
///
/// Postgres connections are retried a few times so the service can start
/// alongside its database container. Does NOT run migrations.
pub async fn connect_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
    purpose: PoolPurpose,
) -> Result<DatabaseConnection, DbInfraError> {
    validate_db_config(env, db_kind)?;
    let url = make_conn_spec(env, db_kind, owner)?;

    if matches!(db_kind, DbKind::SqliteFile) {
        let path = sqlite_file_path(env)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DbInfraError::config(format!(
                    "failed to create SQLite directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let settings = pool_settings(db_kind, purpose);
    let mut opt = ConnectOptions::new(url.clone());
    opt.min_connections(settings.min_connections)
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .sqlx_logging(false);

    info!(
        engine = get_db_engine(db_kind),
        url = %sanitize_db_url(&url),
        owner = ?owner,
        purpose = ?purpose,
        "db=connect"
    );

    if matches!(db_kind, DbKind::Postgres) {
        retry_connection(
            || {
                let opt = opt.clone();
                async move {
                    Database::connect(opt).await.map_err(|e| {
                        DbInfraError::connect(format!("failed to connect to Postgres: {e}"))
                    })
                }
            },
            CONNECT_ATTEMPTS,
            CONNECT_INTERVAL_MS,
        )
        .await
    } else {
        Database::connect(opt)
            .await
            .map_err(|e| DbInfraError::connect(format!("failed to connect to SQLite: {e}")))
    }
}

/// Single-connection owner pool used for schema changes.
pub async fn build_admin_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    connect_pool(env, db_kind, DbOwner::Owner, PoolPurpose::Migration).await
}

/// Masks the password in a connection string for logging.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.rsplit_once('@') else {
        return url.to_string();
    };
    match auth_part.rfind(':') {
        // `postgresql://user` keeps its scheme colon; only mask after the user
        Some(colon_pos) if auth_part[..colon_pos].contains("//") => {
            format!("{}:***@{}", &auth_part[..colon_pos], host_part)
        }
        _ => url.to_string(),
    }
}

async fn fast_path_schema_check(conn: &DatabaseConnection) -> Result<bool, DbInfraError> {
    let expected_count = Migrator::migrations().len();
    let expected_last = Migrator::migrations()
        .last()
        .map(|m| m.name().to_string())
        .unwrap_or_default();

    let applied = match Migrator::get_applied_migrations(conn).await {
        Ok(migrations) => migrations,
        Err(DbErr::Exec(_) | DbErr::Query(_)) => {
            trace!(fastpath = "miss", reason = "migration_table_missing");
            return Ok(false);
        }
        Err(e) => {
            return Err(DbInfraError::migration(format!(
                "failed to get applied migrations: {e}"
            )));
        }
    };

    let current_last = applied.last().map(|m| m.name().to_string());
    let is_up_to_date = applied.len() == expected_count
        && !expected_last.is_empty()
        && current_last.as_deref() == Some(expected_last.as_str());

    trace!(
        fastpath = if is_up_to_date { "hit" } else { "miss" },
        current_count = applied.len(),
        expected_count = expected_count,
        current_last = %current_last.as_deref().unwrap_or(""),
        expected_last = %expected_last
    );

    Ok(is_up_to_date)
}

/// Connects with the owner role and runs `command`.
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    let admin_pool = build_admin_pool(env, db_kind).await?;
    orchestrate_migration_internal(&admin_pool, env, db_kind, command).await
}

/// Runs `command` on an already-open pool and verifies the resulting
/// migration count.
pub async fn orchestrate_migration_internal(
    pool: &DatabaseConnection,
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    let start = Instant::now();
    info!(
        "migrate=start env={:?} db_kind={:?} engine={} cmd={:?}",
        env,
        db_kind,
        get_db_engine(db_kind),
        command
    );

    if matches!(command, MigrationCommand::Up) && fast_path_schema_check(pool).await? {
        info!("migrate=skipped up_to_date=true");
        return Ok(());
    }

    if matches!(db_kind, DbKind::SqliteFile) {
        setup_sqlite_file_prerequisites(pool).await?;
    }

    migrate(pool, command)
        .await
        .map_err(|e| DbInfraError::migration(format!("migration execution failed: {e}")))?;

    let expected_count = Migrator::migrations().len();
    let applied_count = Migrator::get_applied_migrations(pool)
        .await
        .map(|m| m.len())
        .unwrap_or(0);

    match command {
        MigrationCommand::Reset if applied_count != 0 => {
            return Err(DbInfraError::migration(format!(
                "reset should leave 0 migrations applied, but {applied_count} were found (env={env:?}, db_kind={db_kind:?})"
            )));
        }
        MigrationCommand::Up | MigrationCommand::Fresh | MigrationCommand::Refresh
            if applied_count != expected_count =>
        {
            return Err(DbInfraError::migration(format!(
                "expected {expected_count} migrations, but {applied_count} were applied (env={env:?}, db_kind={db_kind:?})"
            )));
        }
        _ => {}
    }

    info!(
        migrate = "done",
        expected_count = expected_count,
        applied_count = applied_count,
        elapsed_ms = start.elapsed().as_millis() as u64
    );
    Ok(())
}

async fn setup_sqlite_file_prerequisites(pool: &DatabaseConnection) -> Result<(), DbInfraError> {
    for pragma in ["PRAGMA journal_mode = WAL;", "PRAGMA synchronous = NORMAL;"] {
        pool.execute(Statement::from_string(sea_orm::DatabaseBackend::Sqlite, pragma))
            .await
            .map_err(|e| DbInfraError::config(format!("failed to apply `{pragma}`: {e}")))?;
    }
    Ok(())
}
