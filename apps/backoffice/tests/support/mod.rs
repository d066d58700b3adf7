pub mod app_builder;
pub mod factory;
pub mod logging;

pub use app_builder::{create_test_app, memory_state};
pub use factory::{seed_geography, Geography};
