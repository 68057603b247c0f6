//! Grid model module.

pub mod grid;

pub use grid::Grid;
