//! Repository layer for cities.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::cities_sea::{self as adapter, CityCreate};
use crate::adapters::states_sea;
use crate::entities::cities;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};

pub const CITY_NAME_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    pub id: i32,
    pub state_id: i32,
    pub name: String,
}

impl From<cities::Model> for City {
    fn from(model: cities::Model) -> Self {
        Self {
            id: model.id,
            state_id: model.state_id,
            name: model.name,
        }
    }
}

/// A city together with the name of the state it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityWithState {
    pub city: City,
    pub state_name: String,
}

/// Trims the submitted name and checks it is non-empty and at most
/// `CITY_NAME_MAX_CHARS` characters.
pub fn validate_city_name(raw: &str) -> Result<String, DomainError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::CityName,
            "city name must not be empty",
        ));
    }
    if name.chars().count() > CITY_NAME_MAX_CHARS {
        return Err(DomainError::validation(
            ValidationKind::CityName,
            format!("city name must be at most {CITY_NAME_MAX_CHARS} characters"),
        ));
    }
    Ok(name.to_string())
}

pub async fn find_with_state<C: ConnectionTrait>(
    conn: &C,
    city_id: i32,
) -> Result<CityWithState, DomainError> {
    let (city, state) = adapter::find_with_state(conn, city_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::City, format!("city {city_id} not found"))
        })?;
    let state = state.ok_or_else(|| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("city {city_id} references missing state {}", city.state_id),
        )
    })?;
    Ok(CityWithState {
        city: city.into(),
        state_name: state.name,
    })
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    state_id: i32,
    name: &str,
) -> Result<City, DomainError> {
    let name = validate_city_name(name)?;
    if states_sea::find_by_id(conn, state_id).await?.is_none() {
        return Err(DomainError::not_found(
            NotFoundKind::State,
            format!("state {state_id} not found"),
        ));
    }
    Ok(adapter::create(conn, CityCreate::new(state_id, name))
        .await?
        .into())
}

pub async fn rename<C: ConnectionTrait>(
    conn: &C,
    city_id: i32,
    name: &str,
) -> Result<City, DomainError> {
    let name = validate_city_name(name)?;
    let existing = adapter::find_by_id(conn, city_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::City, format!("city {city_id} not found"))
    })?;
    Ok(adapter::set_name(conn, existing, &name).await?.into())
}
