//! SeaORM adapter for cities.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};

use crate::entities::{cities, states};

/// DTO for creating a new city.
#[derive(Debug, Clone)]
pub struct CityCreate {
    pub state_id: i32,
    pub name: String,
}

impl CityCreate {
    pub fn new(state_id: i32, name: impl Into<String>) -> Self {
        Self {
            state_id,
            name: name.into(),
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    city_id: i32,
) -> Result<Option<cities::Model>, sea_orm::DbErr> {
    cities::Entity::find_by_id(city_id).one(conn).await
}

pub async fn find_with_state<C: ConnectionTrait>(
    conn: &C,
    city_id: i32,
) -> Result<Option<(cities::Model, Option<states::Model>)>, sea_orm::DbErr> {
    cities::Entity::find_by_id(city_id)
        .find_also_related(states::Entity)
        .one(conn)
        .await
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    dto: CityCreate,
) -> Result<cities::Model, sea_orm::DbErr> {
    let active = cities::ActiveModel {
        id: NotSet,
        state_id: Set(dto.state_id),
        name: Set(dto.name),
    };
    active.insert(conn).await
}

pub async fn set_name<C: ConnectionTrait>(
    conn: &C,
    city: cities::Model,
    name: &str,
) -> Result<cities::Model, sea_orm::DbErr> {
    let mut active: cities::ActiveModel = city.into();
    active.name = Set(name.to_string());
    active.update(conn).await
}
