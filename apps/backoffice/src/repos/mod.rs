//! Repository layer: domain types over the SeaORM adapters.

pub mod cities;
pub mod districts;
pub mod product_packages;
pub mod states;
