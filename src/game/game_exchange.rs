use crate::{Exchanges, Game, Phase};
use itertools::Itertools;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Describes the reason why the current player could not [exchange](Game::exchange)
/// [tiles](crate::Tile).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum ExchangeError {
    /// Attempting [to exchange](Game::exchange) before the game has started.
    NotStarted,
    /// Attempting [to exchange](Game::exchange) after the game has ended.
    HasEnded,
    /// Attempting [to exchange](Game::exchange) no [tiles](crate::Tile).
    EmptyTiles,
    /// Attempting [to exchange](Game::exchange) after placing a [tile](crate::Tile) during
    /// the same turn.
    AlreadyMoved {
        /// The number of [tiles](crate::Tile) placed during the current turn.
        moves: usize,
    },
    /// Attempting [to exchange](Game::exchange) [tiles](crate::Tile) not in the player's rack.
    IndexesOutOfBounds {
        /// Exchanges where the index is greater than or equal to `rack_len`.
        illegal_exchanges: Exchanges,
        /// The number of [tiles](crate::Tile) in the current player's rack.
        rack_len: usize,
    },
    /// Attempting [to exchange](Game::exchange) more [tiles](crate::Tile) than the current
    /// player has left in their pool.
    NotEnoughTiles {
        /// The number of legal indexes being exchanged.
        legal_exchanges: usize,
        /// The number of [tiles](crate::Tile) in the current player's pool.
        pool_len: usize,
    },
}

impl Game {
    /// Checks whether `exchanges` matches various error conditions and returns all found
    /// errors. Otherwise, takes the [tiles](crate::Tile) at `exchanges` out of the current
    /// player's rack, [refills the rack](crate::Player::fill_rack) from their pool, puts the
    /// returned [tiles](crate::Tile) back into the pool at random, and passes the turn.
    ///
    /// An exchange replaces placing: it is only allowed before the first placement of a turn
    /// and it ends the turn, but it costs no points.
    ///
    /// # Arguments
    ///
    /// * `exchanges`: An ordered set of rack indexes of [tiles](crate::Tile) to be exchanged.
    ///
    /// # Errors
    ///
    /// * [ExchangeError::NotStarted] Attempting [to exchange](Game::exchange) before the game
    /// has started.
    /// * [ExchangeError::HasEnded] Attempting [to exchange](Game::exchange) after the game
    /// has ended.
    /// * [ExchangeError::EmptyTiles] Attempting [to exchange](Game::exchange) no
    /// [tiles](crate::Tile).
    /// * [ExchangeError::AlreadyMoved] Attempting [to exchange](Game::exchange) after placing
    /// a [tile](crate::Tile) during the same turn.
    /// * [ExchangeError::IndexesOutOfBounds] Attempting [to exchange](Game::exchange)
    /// [tiles](crate::Tile) not in the player's rack.
    /// * [ExchangeError::NotEnoughTiles] Attempting [to exchange](Game::exchange) more
    /// [tiles](crate::Tile) than the current player has left in their pool.
    ///
    /// # See Also
    ///
    /// [Game::next_player] to end the turn without exchanging.
    pub fn exchange(&mut self, exchanges: &Exchanges) -> Result<(), HashSet<ExchangeError>> {
        self.exchange_with(&mut rand::thread_rng(), exchanges)
    }

    /// Same as [Game::exchange] but shuffles with `rng`.
    ///
    /// # Errors
    ///
    /// See [Game::exchange].
    pub fn exchange_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        exchanges: &Exchanges,
    ) -> Result<(), HashSet<ExchangeError>> {
        self.check_exchanges(exchanges)?;

        let player = self.current_player_mut();
        let rack_len = player.rack().len();
        let returned = exchanges
            .iter()
            .rev()
            .map(|&index| player.rack_mut().remove(index))
            .collect_vec();

        // Refill before returning tiles so that returned tiles stay out of the rack.
        player.fill_rack(rack_len);
        for tile in returned {
            let index = rng.gen_range(0..=player.pool().len());
            player.pool_mut().insert(index, tile);
        }

        debug!(
            player = ?self.current_player,
            exchanged = exchanges.len(),
            "tiles exchanged"
        );
        self.pass_turn();
        Ok(())
    }

    /// Checks whether `exchanges` matches various error conditions and returns all found
    /// errors.
    ///
    /// # Errors
    ///
    /// See [Game::exchange].
    fn check_exchanges(&self, exchanges: &Exchanges) -> Result<(), HashSet<ExchangeError>> {
        let mut errors = HashSet::with_capacity(4);
        match self.phase {
            Phase::NotStarted => {
                errors.insert(ExchangeError::NotStarted);
                return Err(errors);
            }
            Phase::Over => {
                errors.insert(ExchangeError::HasEnded);
                return Err(errors);
            }
            Phase::InProgress => {}
        }

        if self.moves > 0 {
            errors.insert(ExchangeError::AlreadyMoved { moves: self.moves });
        }

        if exchanges.is_empty() {
            errors.insert(ExchangeError::EmptyTiles);
            return Err(errors);
        }

        let player = self.current_player();
        let rack_len = player.rack().len();
        let illegal_exchanges: Exchanges = exchanges.range(rack_len..).copied().collect();
        if !illegal_exchanges.is_empty() {
            errors.insert(ExchangeError::IndexesOutOfBounds {
                illegal_exchanges,
                rack_len,
            });
        }

        let legal_exchanges = exchanges.range(..rack_len).count();
        let pool_len = player.pool().len();
        if legal_exchanges > pool_len {
            errors.insert(ExchangeError::NotEnoughTiles {
                legal_exchanges,
                pool_len,
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
