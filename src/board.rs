use crate::{incompatible_neighbors, placement_points, Grid, Player, Position, Tile, TILES_LEN};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Describes the reason why a [tile](Tile) could not be [played](Board::play_tile).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum PlayTileError {
    /// Attempting [to play](Board::play_tile) too far away from the center of the board.
    OutOfBounds {
        /// The [position](Position) where the absolute value of some component is
        /// greater than or equal to the [position limit](crate::POSITION_LIMIT).
        position: Position,
    },
    /// Attempting [to play](Board::play_tile) at an already occupied [position](Position).
    Occupied {
        /// The occupied [position](Position).
        position: Position,
        /// The [tile](Tile) already at `position`.
        occupant: Tile,
    },
    /// Attempting [to play](Board::play_tile) next to [tiles](Tile) that share both or
    /// neither of [color](crate::Color) and [shape](crate::Shape).
    Incompatible {
        /// [Positions](Position) of the neighbors that do not match the [tile](Tile).
        neighbors: BTreeSet<Position>,
    },
    /// Attempting [to play](Board::play_tile) a [tile](Tile) not in the player's rack.
    NotInRack {
        /// The missing [tile](Tile).
        tile: Tile,
    },
}

/// Owns the [tiles](Tile) placed so far, keyed by [position](Position). Placed [tiles](Tile)
/// are never moved or removed.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Board {
    /// This is a map of [positions](Position) to [tiles](Tile) that have been played.
    grid: Grid,
}

impl Board {
    /// # Returns
    ///
    /// An empty [`Board`].
    pub fn new() -> Board {
        Board {
            grid: Grid::with_capacity(TILES_LEN),
        }
    }

    /// Checks if `tile` may be placed at `position` by `player`, then inserts `tile` into
    /// the board, removes one instance of `tile` from the player's rack, and adds the earned
    /// points to the player. Nothing is changed when some check fails.
    ///
    /// # Points Calculation
    ///
    /// See [placement_points](crate::placement_points).
    ///
    /// # Arguments
    ///
    /// * `position`: Where to place `tile`.
    /// * `tile`: The [tile](Tile) taken from the player's rack.
    /// * `player`: The player placing `tile`.
    ///
    /// # Errors
    ///
    /// * [PlayTileError::OutOfBounds] Attempting [to play](Board::play_tile) too far away
    /// from the center of the board.
    /// * [PlayTileError::Occupied] Attempting [to play](Board::play_tile) at an already
    /// occupied [position](Position).
    /// * [PlayTileError::Incompatible] Attempting [to play](Board::play_tile) next to
    /// [tiles](Tile) that share both or neither of [color](crate::Color) and
    /// [shape](crate::Shape).
    /// * [PlayTileError::NotInRack] Attempting [to play](Board::play_tile) a [tile](Tile)
    /// not in the player's rack.
    ///
    /// # Returns
    ///
    /// The earned points.
    pub fn play_tile(
        &mut self,
        position: Position,
        tile: Tile,
        player: &mut Player,
    ) -> Result<usize, HashSet<PlayTileError>> {
        let points = self.check_play(position, &tile, player)?;

        if let Some(occupant) = self.grid.insert(position, tile) {
            dbg!(position, occupant, tile);
            unreachable!(
                "position ({:?}) should be unoccupied since check_play rejects \
                occupied positions.",
                position
            );
        }
        player.remove_from_rack(&tile);
        player.add_points(points);

        debug!(?position, ?tile, points, "tile played");
        Ok(points)
    }

    /// Checks whether the placement matches various error conditions and returns all found
    /// errors. Otherwise, returns the points the placement would earn.
    ///
    /// # Errors
    ///
    /// See [Board::play_tile].
    ///
    /// # Returns
    ///
    /// The points `tile` would earn at `position`.
    pub fn check_play(
        &self,
        position: Position,
        tile: &Tile,
        player: &Player,
    ) -> Result<usize, HashSet<PlayTileError>> {
        let mut errors = HashSet::with_capacity(4);

        if let Some(&occupant) = self.grid.get(&position) {
            errors.insert(PlayTileError::Occupied { position, occupant });
        }

        if !position.is_in_bounds() {
            errors.insert(PlayTileError::OutOfBounds { position });
        }

        let neighbors = incompatible_neighbors(&self.grid, position, tile);
        if !neighbors.is_empty() {
            errors.insert(PlayTileError::Incompatible { neighbors });
        }

        if !player.holds(tile) {
            errors.insert(PlayTileError::NotInRack { tile: *tile });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(placement_points(&self.grid, position))
    }

    /// # Returns
    ///
    /// The [tile](Tile) at `position` or [None] if `position` is empty.
    #[inline]
    pub fn get(&self, position: &Position) -> Option<&Tile> {
        self.grid.get(position)
    }

    /// Whether some [tile](Tile) is at `position`.
    #[inline]
    pub fn contains(&self, position: &Position) -> bool {
        self.grid.contains_key(position)
    }

    /// The orthogonal neighbors of `position` that hold a [tile](Tile). Nothing is placed
    /// [out of bounds](Position::is_in_bounds), so such a `position` has no neighbors.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = (Position, Tile)> + '_ {
        position
            .is_in_bounds()
            .then(|| position.adjacent_positions())
            .into_iter()
            .flatten()
            .filter_map(|adjacent| self.grid.get(&adjacent).map(|&tile| (adjacent, tile)))
    }

    /// The number of placed [tiles](Tile).
    #[inline]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Whether no [tile](Tile) has been placed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// All placed [tiles](Tile) and their [positions](Position) in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Tile)> {
        self.grid.iter()
    }

    /// A map of [positions](Position) to [tiles](Tile) that have been played.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
