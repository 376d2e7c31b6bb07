use crate::{Game, Phase, PLAYERS_LEN};
use tracing::debug;

/// Describes the reason why the turn could not be [passed](Game::next_player).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum TurnError {
    /// Attempting [to pass the turn](Game::next_player) before the game has started.
    NotStarted,
    /// Attempting [to pass the turn](Game::next_player) after the game has ended.
    HasEnded,
}

impl Game {
    /// Fills the current player's rack up to [the rack length](Game::rack_len) from their
    /// pool, passes the turn to the other player, and [checks](Game::check_over) whether
    /// the game has ended.
    ///
    /// # Cycles
    ///
    /// After the turn has been passed `n` times, [cycles](Game::cycles) is `(n - 1) / 2`
    /// rounded down, or `0` when `n` is `0`.
    ///
    /// # Errors
    ///
    /// * [TurnError::NotStarted] Attempting [to pass the turn](Game::next_player) before
    /// the game has started.
    /// * [TurnError::HasEnded] Attempting [to pass the turn](Game::next_player) after
    /// the game has ended.
    pub fn next_player(&mut self) -> Result<(), TurnError> {
        match self.phase {
            Phase::NotStarted => return Err(TurnError::NotStarted),
            Phase::Over => return Err(TurnError::HasEnded),
            Phase::InProgress => {}
        }

        let rack_len = self.rack_len;
        let drawn = self.current_player_mut().fill_rack(rack_len);
        debug!(player = ?self.current_player, drawn, "rack refilled");

        self.pass_turn();
        Ok(())
    }

    /// Passes the turn without drawing, advances the counters, and
    /// [checks](Game::check_over) whether the game has ended.
    pub(super) fn pass_turn(&mut self) {
        self.current_player = self.current_player.other();
        self.moves = 0;
        self.turns += 1;
        self.cycles = num::integer::div_floor(self.turns - 1, PLAYERS_LEN);

        debug!(
            player = ?self.current_player,
            turns = self.turns,
            cycles = self.cycles,
            "turn passed"
        );
        self.check_over();
    }
}
