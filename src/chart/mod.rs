//! Ring (donut) chart output
//!
//! Scores are laid out in a fixed three-column grid, one ring per score,
//! and written as a single transparent PNG cropped to its content.

pub mod layout;
pub mod render;

pub use layout::{normalize, GridLayout, COLUMNS};
pub use render::{crop_to_content, RingChart, RingStyle};
