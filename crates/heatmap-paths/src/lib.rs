//! Multi-source distance fields ("heat maps") for grid-based games.
//!
//! A heat map holds, for every cell of a rectangular grid, the minimum number
//! of 8-connected steps to the nearest goal cell, never stepping through an
//! obstacle. Every step costs 1, diagonals included, so on an open grid the
//! value is the [`chebyshev`] distance to the nearest goal.
//!
//! - [`burn_heat_map`] and friends fill a caller-owned `i32` buffer in place:
//!   on entry `0` is passable and anything else an obstacle; on return each
//!   cell holds its distance or [`UNREACHED`].
//! - [`HeatMap`] owns its buffer and offers a non-destructive
//!   [`HeatMap::compute`].
//! - [`FrontierQueue`] is the growable ring buffer driving the search.
//!
//! Movement logic built on top typically steps to the neighbour with the
//! smallest non-negative value.

mod burn;
mod config;
mod distance;
mod error;
mod frontier;
mod heatmap;

pub use burn::{BurnStats, burn_heat_map, burn_heat_map_with, burn_heat_map_xy};
pub use config::BurnConfig;
pub use distance::chebyshev;
pub use error::BurnError;
pub use frontier::FrontierQueue;
pub use heatmap::HeatMap;

/// Cell value meaning "no goal reached this cell".
///
/// With the default [`BurnConfig`] obstacles read the same way.
pub const UNREACHED: i32 = -1;
