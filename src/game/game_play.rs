use crate::{Game, Phase, PlayTileError, Position, Tile, EXTRA_MOVE_COST, FREE_MOVES_PER_TURN};
use std::collections::HashSet;
use tracing::debug;

/// Describes the reason why the current player could not [play](Game::play_tile)
/// a [tile](Tile).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum PlayError {
    /// Attempting [to play](Game::play_tile) before the game has started.
    NotStarted,
    /// Attempting [to play](Game::play_tile) after the game has ended.
    HasEnded,
    /// Attempting [to play](Game::play_tile) after the free moves of the turn are used up
    /// without enough points to pay for another move.
    NotEnoughPoints {
        /// The current player's points.
        points: usize,
        /// The points another move costs.
        cost: usize,
    },
    /// The board rejected the placement.
    Board(PlayTileError),
}

impl Game {
    /// Checks if the current player may place `tile` at `position`, then
    /// [plays the tile on the board](crate::Board::play_tile) for the current player and
    /// [checks](Game::check_over) whether the game has ended. The turn is not passed, so the
    /// current player may keep placing [tiles](Tile) before calling [Game::next_player].
    ///
    /// # Free Moves
    ///
    /// The first [FREE_MOVES_PER_TURN] placements of a turn cost nothing. Every further
    /// placement in the same turn removes [EXTRA_MOVE_COST] points from the current player
    /// and is only allowed when the player has at least that many points before placing.
    ///
    /// # Errors
    ///
    /// * [PlayError::NotStarted] Attempting [to play](Game::play_tile) before the game
    /// has started.
    /// * [PlayError::HasEnded] Attempting [to play](Game::play_tile) after the game has ended.
    /// * [PlayError::NotEnoughPoints] Attempting [to play](Game::play_tile) after the free
    /// moves of the turn are used up without enough points to pay for another move.
    /// * [PlayError::Board] The board rejected the placement. See
    /// [Board::play_tile](crate::Board::play_tile).
    ///
    /// # Returns
    ///
    /// The points earned by the placement, before any move cost is removed.
    pub fn play_tile(&mut self, position: Position, tile: Tile) -> Result<usize, HashSet<PlayError>> {
        let cost = self.check_play(position, &tile)?;

        let index = self.current_player.index();
        let player = &mut self.players[index];
        let points = self
            .board
            .play_tile(position, tile, player)
            .map_err(|errors| errors.into_iter().map(PlayError::Board).collect::<HashSet<_>>())?;
        if !player.remove_points(cost) {
            dbg!(player.points(), cost);
            unreachable!("points should cover the cost since check_play rejects moves it cannot.");
        }
        self.moves += 1;

        debug!(
            player = ?self.current_player,
            moves = self.moves,
            cost,
            points,
            "move made"
        );
        self.check_over();
        Ok(points)
    }

    /// Checks whether the placement matches various error conditions and returns all found
    /// errors.
    ///
    /// # Errors
    ///
    /// See [Game::play_tile].
    ///
    /// # Returns
    ///
    /// The points the placement costs.
    fn check_play(&self, position: Position, tile: &Tile) -> Result<usize, HashSet<PlayError>> {
        let mut errors = HashSet::with_capacity(5);
        match self.phase {
            Phase::NotStarted => {
                errors.insert(PlayError::NotStarted);
                return Err(errors);
            }
            Phase::Over => {
                errors.insert(PlayError::HasEnded);
                return Err(errors);
            }
            Phase::InProgress => {}
        }

        let player = self.current_player();
        let cost = if self.moves < FREE_MOVES_PER_TURN {
            0
        } else {
            EXTRA_MOVE_COST
        };
        let points = player.points();
        if points < cost {
            errors.insert(PlayError::NotEnoughPoints { points, cost });
        }

        if let Err(board_errors) = self.board.check_play(position, tile, player) {
            errors.extend(board_errors.into_iter().map(PlayError::Board));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(cost)
    }
}
