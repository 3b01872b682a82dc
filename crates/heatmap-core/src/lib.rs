//! **heatmap-core** — grid primitives shared by the heat-map crates.
//!
//! This crate provides the geometry types used to address grid cells and a
//! bit-packed boolean grid used as a "visited" mask by the flood fill in
//! `heatmap-paths`.

pub mod bitgrid;
pub mod geom;

pub use bitgrid::BitGrid;
pub use geom::{Point, Range, RangeIter};
