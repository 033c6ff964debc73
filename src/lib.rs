//! hexcover - Tile a country outline with a selectable hexagonal region grid

pub mod boundary;
pub mod config;
pub mod geometry;
pub mod grid;
pub mod render;

pub use boundary::{Boundary, BoundaryError};
pub use geometry::Viewport;
pub use grid::{Hexagon, tile};
