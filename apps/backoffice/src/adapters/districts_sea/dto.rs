//! DTOs for districts_sea adapter.

use sea_orm::FromQueryResult;

/// DTO for creating a new district.
#[derive(Debug, Clone)]
pub struct DistrictCreate {
    pub city_id: i32,
    pub parent_id: Option<i32>,
    pub name: String,
}

impl DistrictCreate {
    pub fn new(city_id: i32, name: impl Into<String>) -> Self {
        Self {
            city_id,
            parent_id: None,
            name: name.into(),
        }
    }

    pub fn with_parent(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// One pre-joined row of the district grid (district ⋈ city ⋈ state).
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct DistrictGridRow {
    pub id: i32,
    pub name: String,
    pub city_name: String,
    pub state_name: String,
    pub has_district: bool,
}
