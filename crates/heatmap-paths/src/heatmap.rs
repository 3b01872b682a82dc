use heatmap_core::{Point, Range};

use crate::burn::{BurnStats, burn_heat_map_with};
use crate::config::BurnConfig;
use crate::error::BurnError;

/// An owned heat map: a row-major grid of `i32` cells.
///
/// Before [`burn`](Self::burn) the cells describe terrain (`0` passable,
/// anything else an obstacle); afterwards they hold distances as described in
/// [`burn_heat_map`](crate::burn_heat_map).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawHeatMap"))]
pub struct HeatMap {
    rng: Range,
    cells: Vec<i32>,
}

/// Unchecked wire form of [`HeatMap`]; shape is validated on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHeatMap {
    rng: Range,
    cells: Vec<i32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHeatMap> for HeatMap {
    type Error = BurnError;

    fn try_from(raw: RawHeatMap) -> Result<Self, BurnError> {
        if raw.rng.min != Point::ZERO {
            return Err(BurnError::InvalidSize {
                width: raw.rng.width(),
                height: raw.rng.height(),
            });
        }
        Self::from_cells(raw.rng.width(), raw.rng.height(), raw.cells)
    }
}

impl HeatMap {
    /// Create a fully passable `width × height` map.
    pub fn new(width: i32, height: i32) -> Self {
        let rng = Range::with_size(width, height);
        Self {
            rng,
            cells: vec![0; rng.len()],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_cells(width: i32, height: i32, cells: Vec<i32>) -> Result<Self, BurnError> {
        if width <= 0 || height <= 0 {
            return Err(BurnError::InvalidSize { width, height });
        }
        let rng = Range::with_size(width, height);
        if cells.len() != rng.len() {
            return Err(BurnError::BufferLength {
                expected: rng.len(),
                actual: cells.len(),
            });
        }
        Ok(Self { rng, cells })
    }

    /// Burn a fresh heat map from an obstacle grid, leaving `obstacles`
    /// untouched.
    pub fn compute(
        width: i32,
        height: i32,
        obstacles: &[i32],
        goals: &[Point],
        config: &BurnConfig,
    ) -> Result<Self, BurnError> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(obstacles.len())?;
        cells.extend_from_slice(obstacles);
        let mut hm = Self::from_cells(width, height, cells)?;
        hm.burn(goals, config)?;
        Ok(hm)
    }

    /// Burn the map in place. Obstacle information is consumed.
    pub fn burn(&mut self, goals: &[Point], config: &BurnConfig) -> Result<BurnStats, BurnError> {
        burn_heat_map_with(
            config,
            self.rng.width(),
            self.rng.height(),
            &mut self.cells,
            goals,
        )
    }

    /// Mark `p` as an obstacle or clear it. Does nothing if out of bounds.
    pub fn set_obstacle(&mut self, p: Point, blocked: bool) {
        if let Some(i) = self.rng.index(p) {
            self.cells[i] = blocked as i32;
        }
    }

    /// Raw cell value at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<i32> {
        self.rng.index(p).map(|i| self.cells[i])
    }

    /// Distance to the nearest goal, or `None` if `p` was not reached or is
    /// out of bounds.
    pub fn distance(&self, p: Point) -> Option<i32> {
        self.at(p).filter(|&d| d >= 0)
    }

    /// The grid rectangle covered by the map.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    /// The row-major cell buffer.
    #[inline]
    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    /// Consume the map, returning its buffer.
    pub fn into_cells(self) -> Vec<i32> {
        self.cells
    }
}
