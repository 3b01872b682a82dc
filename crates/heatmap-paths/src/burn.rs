//! Multi-source breadth-first flood fill over a caller-owned grid.

use heatmap_core::{BitGrid, Point, Range};

use crate::config::BurnConfig;
use crate::error::BurnError;
use crate::frontier::FrontierQueue;
use crate::UNREACHED;

/// Summary of a finished burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BurnStats {
    /// Cells that received a distance, goals included.
    pub reached: usize,
    /// Largest distance written, or [`UNREACHED`] if there were no goals.
    pub max_cost: i32,
}

/// Burn a heat map in place with the default [`BurnConfig`].
///
/// `cells` is a row-major `width × height` buffer. On entry `0` marks a
/// passable cell and any other value an obstacle. On success every cell holds
/// its step distance to the nearest goal, `0` for the goals themselves, or
/// [`UNREACHED`] for obstacles and for cells no goal can reach.
///
/// Size and goal errors are reported before anything is written. After a
/// [`BurnError::Alloc`] the buffer contents are meaningless.
pub fn burn_heat_map(
    width: i32,
    height: i32,
    cells: &mut [i32],
    goals: &[Point],
) -> Result<BurnStats, BurnError> {
    burn_heat_map_with(&BurnConfig::default(), width, height, cells, goals)
}

/// Like [`burn_heat_map`], with goals given as parallel x and y lists.
pub fn burn_heat_map_xy(
    width: i32,
    height: i32,
    cells: &mut [i32],
    goal_xs: &[i32],
    goal_ys: &[i32],
) -> Result<BurnStats, BurnError> {
    if goal_xs.len() != goal_ys.len() {
        return Err(BurnError::GoalListMismatch {
            xs: goal_xs.len(),
            ys: goal_ys.len(),
        });
    }
    let mut goals = Vec::new();
    goals.try_reserve_exact(goal_xs.len())?;
    goals.extend(goal_xs.iter().zip(goal_ys).map(|(&x, &y)| Point::new(x, y)));
    burn_heat_map(width, height, cells, &goals)
}

/// Burn a heat map in place using `config`.
pub fn burn_heat_map_with(
    config: &BurnConfig,
    width: i32,
    height: i32,
    cells: &mut [i32],
    goals: &[Point],
) -> Result<BurnStats, BurnError> {
    config.validate()?;
    let rng = check(width, height, cells.len(), goals)?;
    match burn(config, rng, cells, goals) {
        Ok(stats) => {
            log::debug!(
                "burned {}x{} heat map from {} goals: {} cells reached, max cost {}",
                width,
                height,
                goals.len(),
                stats.reached,
                stats.max_cost
            );
            Ok(stats)
        }
        Err(e) => {
            log::warn!("heat map burn aborted: {e}");
            Err(e)
        }
    }
}

fn check(width: i32, height: i32, len: usize, goals: &[Point]) -> Result<Range, BurnError> {
    if width <= 0 || height <= 0 {
        return Err(BurnError::InvalidSize { width, height });
    }
    let rng = Range::with_size(width, height);
    if len != rng.len() {
        return Err(BurnError::BufferLength {
            expected: rng.len(),
            actual: len,
        });
    }
    if let Some(&g) = goals.iter().find(|&&g| !rng.contains(g)) {
        return Err(BurnError::GoalOutOfBounds(g));
    }
    Ok(rng)
}

fn burn(
    config: &BurnConfig,
    rng: Range,
    cells: &mut [i32],
    goals: &[Point],
) -> Result<BurnStats, BurnError> {
    let mut frontier: FrontierQueue<Point> = FrontierQueue::try_new()?;
    let mut used = BitGrid::try_new(rng)?;

    // From here on the buffer only holds distances; walls live in `used`.
    for (p, cell) in rng.iter().zip(cells.iter_mut()) {
        if *cell != 0 {
            used.set(p);
            *cell = config.obstacle;
        } else {
            *cell = UNREACHED;
        }
    }

    let mut stats = BurnStats {
        reached: 0,
        max_cost: UNREACHED,
    };

    for &g in goals {
        let Some(gi) = rng.index(g) else {
            continue;
        };
        if cells[gi] == 0 {
            // Same goal listed twice; walls and unreached cells are negative.
            continue;
        }
        used.set(g);
        cells[gi] = 0;
        frontier.push(g)?;
        stats.reached += 1;
        stats.max_cost = 0;
    }

    while let Some(p) = frontier.pop() {
        let Some(pi) = rng.index(p) else {
            continue;
        };
        let cost = cells[pi] + 1;
        if !config.allows(cost) {
            // Pops come in non-decreasing cost order.
            break;
        }
        for n in rng.block_around(p) {
            if n == p || used.get(n) {
                continue;
            }
            let Some(ni) = rng.index(n) else {
                continue;
            };
            used.set(n);
            cells[ni] = cost;
            frontier.push(n)?;
            stats.reached += 1;
            stats.max_cost = cost;
        }
    }

    Ok(stats)
}
