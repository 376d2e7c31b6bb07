use crate::{tiles, Game, Phase, PlayerId};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;
use tracing::info;

/// Describes the reason why a [Game] could not be set up.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum SetupError {
    /// Attempting [to divide tiles](Game::divide_tiles) or [to start](Game::start) after
    /// the game has started.
    AlreadyStarted,
}

impl Game {
    /// Gives each player one shuffled copy of every [tile](crate::Tile) variant as their pool
    /// and empties their rack. The two pools are independent, so each holds
    /// [TILES_LEN](crate::TILES_LEN) [tiles](crate::Tile).
    ///
    /// # Errors
    ///
    /// * [SetupError::AlreadyStarted] Attempting [to divide tiles](Game::divide_tiles) after
    /// the game has started.
    pub fn divide_tiles(&mut self) -> Result<(), SetupError> {
        self.divide_tiles_with(&mut rand::thread_rng())
    }

    /// Same as [Game::divide_tiles] but shuffles with `rng`.
    ///
    /// # Errors
    ///
    /// * [SetupError::AlreadyStarted] Attempting [to divide tiles](Game::divide_tiles) after
    /// the game has started.
    pub fn divide_tiles_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SetupError> {
        if self.phase != Phase::NotStarted {
            return Err(SetupError::AlreadyStarted);
        }

        for player in &mut self.players {
            player.set_pool(tiles().to_vec().tap_mut(|pool| pool.shuffle(rng)));
            player.rack_mut().clear();
        }
        Ok(())
    }

    /// [Divides tiles](Game::divide_tiles), fills each player's rack up to
    /// [the rack length](Game::rack_len) from their own pool, and gives the first turn to
    /// [PlayerId::One].
    ///
    /// # Errors
    ///
    /// * [SetupError::AlreadyStarted] Attempting [to start](Game::start) after the game
    /// has started.
    pub fn start(&mut self) -> Result<(), SetupError> {
        self.start_with(&mut rand::thread_rng())
    }

    /// Same as [Game::start] but shuffles with `rng`.
    ///
    /// # Errors
    ///
    /// * [SetupError::AlreadyStarted] Attempting [to start](Game::start) after the game
    /// has started.
    pub fn start_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SetupError> {
        self.divide_tiles_with(rng)?;

        let rack_len = self.rack_len;
        for player in &mut self.players {
            player.fill_rack(rack_len);
        }

        self.current_player = PlayerId::One;
        self.turns = 0;
        self.cycles = 0;
        self.moves = 0;
        self.phase = Phase::InProgress;

        info!(rack_len, max_cycles = self.max_cycles, "game started");
        Ok(())
    }
}
