use db_infra::config::db::{DbKind, RuntimeEnv};

use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::routes::links::AdminLinks;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
    links: AdminLinks,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            env: RuntimeEnv::Prod,
            db_kind: None,
            links: AdminLinks::default(),
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    pub fn with_db(mut self, db_kind: DbKind) -> Self {
        self.db_kind = Some(db_kind);
        self
    }

    pub fn with_links(mut self, links: AdminLinks) -> Self {
        self.links = links;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_kind {
            // single entrypoint: connect + migrate
            Some(db_kind) => {
                let conn = bootstrap_db(self.env, db_kind).await?;
                Ok(AppState::new(conn, self.links))
            }
            None => Ok(AppState::new_without_db(self.links)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
