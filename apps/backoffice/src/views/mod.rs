//! Server-rendered admin HTML.
//!
//! Every renderer is a pure function from already-loaded data to a
//! `String`; handlers do the database work and pick the layout.

pub mod city_form;
pub mod district_grid;
pub mod escape;
pub mod layout;

pub use city_form::render_city_edit_form;
pub use district_grid::{render_district_grid, PLACEHOLDER_IMAGE};
pub use escape::escape_html;
pub use layout::render_page;

#[cfg(test)]
mod tests_props_grid;
