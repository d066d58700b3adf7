use std::env;
use std::path::PathBuf;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use sea_orm::DatabaseBackend;

use crate::error::DbInfraError;

/// Runtime environment the process is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Enforces the `_test` database-name safety rule
    Test,
}

/// Storage engine behind the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl DbKind {
    /// Parses the `BACKOFFICE_DB` style spelling.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "sqlite-file" | "sqlite_file" => Some(Self::SqliteFile),
            "sqlite-memory" | "sqlite_memory" => Some(Self::SqliteMemory),
            _ => None,
        }
    }

    pub fn is_sqlite(&self) -> bool {
        matches!(self, Self::SqliteFile | Self::SqliteMemory)
    }
}

impl From<DbKind> for DatabaseBackend {
    fn from(kind: DbKind) -> Self {
        match kind {
            DbKind::Postgres => DatabaseBackend::Postgres,
            DbKind::SqliteFile | DbKind::SqliteMemory => DatabaseBackend::Sqlite,
        }
    }
}

/// Database role used for the connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolPurpose {
    Runtime,
    Migration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

/// Pool sizing per engine and purpose.
///
/// In-memory SQLite is pinned to a single connection: every new
/// connection would otherwise open its own empty database.
pub fn pool_settings(db_kind: DbKind, purpose: PoolPurpose) -> PoolSettings {
    match (db_kind, purpose) {
        (DbKind::SqliteMemory, _) | (_, PoolPurpose::Migration) => PoolSettings {
            min_connections: 1,
            max_connections: 1,
            acquire_timeout: Duration::from_secs(2),
        },
        (DbKind::SqliteFile, PoolPurpose::Runtime) => PoolSettings {
            min_connections: 1,
            max_connections: 4,
            acquire_timeout: Duration::from_secs(5),
        },
        (DbKind::Postgres, PoolPurpose::Runtime) => PoolSettings {
            min_connections: 1,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        },
    }
}

/// Rejects env/engine combinations that make no sense.
pub fn validate_db_config(env: RuntimeEnv, db_kind: DbKind) -> Result<(), DbInfraError> {
    if matches!(db_kind, DbKind::SqliteMemory) && env != RuntimeEnv::Test {
        return Err(DbInfraError::config(
            "in-memory SQLite is only supported for the test environment",
        ));
    }
    Ok(())
}

/// Builds the connection string for the given environment, engine and role.
pub fn make_conn_spec(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<String, DbInfraError> {
    match db_kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = db_name(env)?;
            let (username, password) = credentials(owner)?;
            let username = utf8_percent_encode(&username, NON_ALPHANUMERIC);
            let password = utf8_percent_encode(&password, NON_ALPHANUMERIC);
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = sqlite_file_path(env)?;
            Ok(format!("sqlite://{}?mode=rwc", path.display()))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Location of the SQLite database file: `$SQLITE_DB_DIR/<db name>.db`.
pub fn sqlite_file_path(env: RuntimeEnv) -> Result<PathBuf, DbInfraError> {
    let dir = env::var("SQLITE_DB_DIR").unwrap_or_else(|_| "./data/sqlite".to_string());
    Ok(PathBuf::from(dir).join(format!("{}.db", db_name(env)?)))
}

fn db_name(env: RuntimeEnv) -> Result<String, DbInfraError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(DbInfraError::config(format!(
                    "Test environment requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), DbInfraError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("BACKOFFICE_OWNER_USER")?,
            must_var("BACKOFFICE_OWNER_PASSWORD")?,
        )),
    }
}

fn must_var(name: &str) -> Result<String, DbInfraError> {
    env::var(name).map_err(|_| {
        DbInfraError::config(format!("Required environment variable '{name}' is not set"))
    })
}
