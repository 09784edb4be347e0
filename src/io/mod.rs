//! Reading city files and drawing tours.
//!
//! - [`parse_cities`] / [`read_cities`]: plain-text coordinate lists
//! - [`render_svg`] / [`write_svg`]: SVG drawing of a tour

mod loader;
mod svg;

pub use loader::{parse_cities, read_cities, CityMap};
pub use svg::{render_svg, write_svg};
