use sea_orm::DatabaseConnection;

use crate::routes::links::AdminLinks;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that never touch storage)
    pub db: Option<DatabaseConnection>,
    /// Link builders for the admin pages
    pub links: AdminLinks,
}

impl AppState {
    pub fn new(db: DatabaseConnection, links: AdminLinks) -> Self {
        Self {
            db: Some(db),
            links,
        }
    }

    pub fn new_without_db(links: AdminLinks) -> Self {
        Self { db: None, links }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
