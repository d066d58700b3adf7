//! SeaORM adapters: the only layer that builds queries.

pub mod cities_sea;
pub mod districts_sea;
pub mod product_packages_sea;
pub mod states_sea;
