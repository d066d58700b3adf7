//! Repository layer for states.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::states_sea as adapter;
use crate::entities::states;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    pub id: i32,
    pub name: String,
}

impl From<states::Model> for State {
    fn from(model: states::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

pub async fn create<C: ConnectionTrait>(conn: &C, name: &str) -> Result<State, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Other("state_name".into()),
            "state name must not be empty",
        ));
    }
    Ok(adapter::create(conn, name).await?.into())
}
