//! Service configuration read from `BACKOFFICE_*` environment variables.

use db_infra::config::db::{DbKind, RuntimeEnv};

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_kind: DbKind,
    /// Prefix for every admin link, e.g. `/backoffice`. Empty when the admin
    /// is served from the root.
    pub base_path: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("BACKOFFICE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("BACKOFFICE_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!(
                    "BACKOFFICE_PORT must be a valid port number, got {raw:?}"
                ))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let db_kind = match std::env::var("BACKOFFICE_DB") {
            Ok(raw) => DbKind::parse(&raw).ok_or_else(|| {
                AppError::config(format!(
                    "BACKOFFICE_DB must be one of postgres, sqlite-file, sqlite-memory; got {raw:?}"
                ))
            })?,
            Err(_) => DbKind::Postgres,
        };

        let base_path =
            normalize_base_path(&std::env::var("BACKOFFICE_BASE_PATH").unwrap_or_default());

        Ok(Self {
            host,
            port,
            db_kind,
            base_path,
        })
    }

    /// An in-memory database lives only as long as the process, so it always
    /// runs under the test environment rules.
    pub fn runtime_env(&self) -> RuntimeEnv {
        match self.db_kind {
            DbKind::SqliteMemory => RuntimeEnv::Test,
            _ => RuntimeEnv::Prod,
        }
    }
}

/// `"backoffice/"` and `"/backoffice"` both become `"/backoffice"`; blank
/// input becomes `""`.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
