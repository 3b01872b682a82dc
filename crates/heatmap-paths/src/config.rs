use crate::UNREACHED;
use crate::error::BurnError;

/// Options controlling a heat-map burn.
///
/// The default reproduces the plain flood fill: unbounded expansion, with
/// obstacles left at [`UNREACHED`] just like cells no goal could reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BurnConfig {
    /// Value written to cells that were obstacles on input.
    ///
    /// Must be negative, so walls never read as distances. Use a value
    /// other than [`UNREACHED`] to tell walls apart from open cells that are
    /// cut off from every goal.
    pub obstacle: i32,
    /// Cells farther than this from every goal are left unreached. Must not
    /// be negative; goals are always written as 0.
    pub max_cost: Option<i32>,
}

impl Default for BurnConfig {
    fn default() -> Self {
        Self {
            obstacle: UNREACHED,
            max_cost: None,
        }
    }
}

impl BurnConfig {
    /// Default config with a distinct marker for obstacle cells.
    pub fn with_obstacle(obstacle: i32) -> Self {
        Self {
            obstacle,
            ..Self::default()
        }
    }

    /// Default config that stops expanding past `max_cost` steps.
    pub fn with_max_cost(max_cost: i32) -> Self {
        Self {
            max_cost: Some(max_cost),
            ..Self::default()
        }
    }

    /// Reject markers that could be mistaken for distances and cutoffs
    /// below the goals' own cost.
    pub fn validate(&self) -> Result<(), BurnError> {
        if self.obstacle >= 0 {
            return Err(BurnError::InvalidObstacle(self.obstacle));
        }
        match self.max_cost {
            Some(max) if max < 0 => Err(BurnError::InvalidMaxCost(max)),
            _ => Ok(()),
        }
    }

    /// Whether a cell at distance `cost` may be written.
    #[inline]
    pub(crate) fn allows(&self, cost: i32) -> bool {
        self.max_cost.is_none_or(|max| cost <= max)
    }
}
