use crate::{Axis, Grid, Position, Tile, ISOLATED_PLAY_POINTS};
use std::collections::BTreeSet;
use tracing::trace;

/// Counts the occupied squares met when walking from `position` along `axis`, one direction
/// at a time, until an empty or [out of bounds](Position::is_in_bounds) square is reached.
/// `position` itself counts as occupied whether or not it is in `grid`.
///
/// # Arguments
///
/// * `grid`: A map of [positions](Position) to [tiles](Tile) on the board.
/// * `position`: The square the run goes through.
/// * `axis`: The direction of the run.
///
/// # See Also
///
/// * [placement_points]
///
/// # Returns
///
/// The length of the run through `position`, which is at least `1`, or `0` when `position`
/// is out of bounds.
pub fn run_len(grid: &Grid, position: Position, axis: Axis) -> usize {
    if !position.is_in_bounds() {
        return 0;
    }

    let decreasing = (1..)
        .map(|offset| position.step(axis, -offset))
        .take_while(|next| next.is_in_bounds() && grid.contains_key(next))
        .count();
    let increasing = (1..)
        .map(|offset| position.step(axis, offset))
        .take_while(|next| next.is_in_bounds() && grid.contains_key(next))
        .count();

    decreasing + 1 + increasing
}

/// Scores a [tile](Tile) placed at `position`.
///
/// # Points Calculation
///
/// Each [axis](Axis) earns the length of the run through `position` when that run holds at
/// least `2` [tiles](Tile), and nothing otherwise. The points of both axes are added, so a
/// [tile](Tile) joining a horizontal and a vertical run is counted twice. A [tile](Tile) with
/// no neighbor on either axis earns [ISOLATED_PLAY_POINTS]. A [tile](Tile) cannot be placed
/// [out of bounds](Position::is_in_bounds), so such a `position` earns nothing.
///
/// # Arguments
///
/// * `grid`: A map of [positions](Position) to [tiles](Tile) on the board, with or without
/// the placed [tile](Tile).
/// * `position`: The square of the placed [tile](Tile).
///
/// # See Also
///
/// * [Board::play_tile](crate::Board::play_tile)
///
/// # Returns
///
/// The earned points.
pub fn placement_points(grid: &Grid, position: Position) -> usize {
    if !position.is_in_bounds() {
        return 0;
    }

    let points: usize = Axis::axes()
        .into_iter()
        .map(|axis| run_len(grid, position, axis))
        .filter(|&len| len >= 2)
        .sum();

    if points == 0 {
        trace!(?position, "isolated placement");
        ISOLATED_PLAY_POINTS
    } else {
        trace!(?position, points, "placement joins runs");
        points
    }
}

/// Finds the orthogonal neighbors of `position` that `tile` may not sit next to, which are
/// the neighbors sharing both or neither of [color](crate::Color) and
/// [shape](crate::Shape) with `tile`.
///
/// # Returns
///
/// The [positions](Position) of the incompatible neighbors, which is empty when `position` is
/// [out of bounds](Position::is_in_bounds).
pub fn incompatible_neighbors(grid: &Grid, position: Position, tile: &Tile) -> BTreeSet<Position> {
    if !position.is_in_bounds() {
        return BTreeSet::new();
    }

    position
        .adjacent_positions()
        .into_iter()
        .filter(|adjacent| {
            grid.get(adjacent)
                .map_or(false, |neighbor| !tile.is_compatible(neighbor))
        })
        .collect()
}
