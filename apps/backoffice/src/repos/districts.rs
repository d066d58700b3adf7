//! Repository layer for districts.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::cities_sea;
use crate::adapters::districts_sea::{self as adapter, DistrictCreate, DistrictGridRow};
use crate::entities::districts;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct District {
    pub id: i32,
    pub city_id: i32,
    pub parent_id: Option<i32>,
    pub name: String,
}

impl From<districts::Model> for District {
    fn from(model: districts::Model) -> Self {
        Self {
            id: model.id,
            city_id: model.city_id,
            parent_id: model.parent_id,
            name: model.name,
        }
    }
}

/// One row of the district grid, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistrictRow {
    pub id: i32,
    pub name: String,
    pub city_name: String,
    pub state_name: String,
    /// True when at least one district is nested under this one.
    pub has_district: bool,
}

impl From<DistrictGridRow> for DistrictRow {
    fn from(row: DistrictGridRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            city_name: row.city_name,
            state_name: row.state_name,
            has_district: row.has_district,
        }
    }
}

/// Input for [`create`].
#[derive(Debug, Clone)]
pub struct NewDistrict {
    pub city_id: i32,
    pub parent_id: Option<i32>,
    pub name: String,
}

/// Grid rows for top-level districts, or for the districts nested directly
/// under `parent_id`.
pub async fn list_grid_rows<C: ConnectionTrait>(
    conn: &C,
    parent_id: Option<i32>,
) -> Result<Vec<DistrictRow>, DomainError> {
    let rows = adapter::list_grid_rows(conn, parent_id).await?;
    Ok(rows.into_iter().map(DistrictRow::from).collect())
}

pub async fn find<C: ConnectionTrait>(conn: &C, district_id: i32) -> Result<District, DomainError> {
    adapter::find_by_id(conn, district_id)
        .await?
        .map(District::from)
        .ok_or_else(|| not_found(district_id))
}

/// Inserts a district after checking that its city (and parent, when given)
/// exist.
pub async fn create<C: ConnectionTrait>(
    conn: &C,
    input: NewDistrict,
) -> Result<District, DomainError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Other("district_name".into()),
            "district name must not be empty",
        ));
    }

    if cities_sea::find_by_id(conn, input.city_id).await?.is_none() {
        return Err(DomainError::not_found(
            NotFoundKind::City,
            format!("city {} not found", input.city_id),
        ));
    }

    let mut dto = DistrictCreate::new(input.city_id, name);
    if let Some(parent_id) = input.parent_id {
        find(conn, parent_id).await?;
        dto = dto.with_parent(parent_id);
    }

    Ok(adapter::create(conn, dto).await?.into())
}

/// Deletes a district together with everything nested under it.
pub async fn delete<C: ConnectionTrait>(conn: &C, district_id: i32) -> Result<(), DomainError> {
    match adapter::delete_by_id(conn, district_id).await? {
        0 => Err(not_found(district_id)),
        _ => Ok(()),
    }
}

fn not_found(district_id: i32) -> DomainError {
    DomainError::not_found(
        NotFoundKind::District,
        format!("district {district_id} not found"),
    )
}
