//! SeaORM adapter for states.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};

use crate::entities::states;

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    state_id: i32,
) -> Result<Option<states::Model>, sea_orm::DbErr> {
    states::Entity::find_by_id(state_id).one(conn).await
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<states::Model, sea_orm::DbErr> {
    let active = states::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
    };
    active.insert(conn).await
}
