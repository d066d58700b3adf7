//! Link builders for the admin pages.
//!
//! Each builder corresponds to one named admin route and yields the path a
//! page should link to, prefixed with the configured base path.
//!
//! | Route name               | Method | Path                    |
//! |--------------------------|--------|-------------------------|
//! | `admin.district.index`   | GET    | `/admin/district`       |
//! | `admin.district.show`    | GET    | `/admin/district/{id}`  |
//! | `admin.district.destroy` | DELETE | `/admin/district/{id}`  |
//! | `admin.city.edit`        | GET    | `/admin/city/{id}/edit` |
//! | `admin.city.update`      | POST   | `/admin/city/{id}`      |

use crate::config::app::normalize_base_path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminLinks {
    base_path: String,
}

impl AdminLinks {
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: normalize_base_path(base_path),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// `admin.district.index`
    pub fn district_index(&self) -> String {
        format!("{}/admin/district", self.base_path)
    }

    /// `admin.district.show`
    pub fn district_show(&self, district_id: i32) -> String {
        format!("{}/admin/district/{district_id}", self.base_path)
    }

    /// `admin.district.destroy`; same path as show, reached with DELETE.
    pub fn district_destroy(&self, district_id: i32) -> String {
        format!("{}/admin/district/{district_id}", self.base_path)
    }

    /// `admin.city.edit`
    pub fn city_edit(&self, city_id: i32) -> String {
        format!("{}/admin/city/{city_id}/edit", self.base_path)
    }

    /// `admin.city.update`
    pub fn city_update(&self, city_id: i32) -> String {
        format!("{}/admin/city/{city_id}", self.base_path)
    }
}
