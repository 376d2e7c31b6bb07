use crate::{Board, Player, PlayerId, DEFAULT_RACK_LEN, MAX_CYCLES, PLAYERS_LEN, TILES_LEN};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::info;

pub use game_exchange::*;
pub use game_play::*;
pub use game_setup::*;
pub use game_turn::*;
pub use game_view::*;

mod game_exchange;
mod game_play;
mod game_setup;
mod game_turn;
mod game_view;
#[cfg(test)]
mod test_setup;

/// The phases a [Game] moves through. Phases only move forward.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Before [Game::start]. Pools may be [divided](Game::divide_tiles).
    NotStarted,
    /// After [Game::start] and before the game has ended.
    InProgress,
    /// After [Game::check_over] has found the game ended.
    Over,
}

/// Describes the reason why a [Game] could not be created with
/// [custom settings](Game::with_settings).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum NewError {
    /// Attempting to create a game where racks hold no [tiles](crate::Tile).
    EmptyRack,
    /// Attempting to create a game where a rack holds more [tiles](crate::Tile) than
    /// a full pool.
    RackTooLarge {
        /// The requested rack length.
        rack_len: usize,
        /// The number of [tiles](crate::Tile) in a full pool.
        tiles_len: usize,
    },
    /// Attempting to create a game that ends before any rotation is played.
    NoCycles,
}

/// Owns both players, the board, and the turn and cycle counters of one match. Created from
/// [Game::new] or [Game::with_settings] and advanced with [Game::start],
/// [Game::play_tile], [Game::exchange], and [Game::next_player].
#[derive(Debug, Clone)]
pub struct Game {
    /// Both players indexed by [PlayerId::index].
    players: [Player; PLAYERS_LEN],
    /// The [tiles](crate::Tile) placed so far.
    board: Board,
    /// The player whose turn it is.
    current_player: PlayerId,
    /// The number of times the turn has been passed.
    turns: usize,
    /// The number of full rotations completed before the most recently ended turn began.
    cycles: usize,
    /// The number of [tiles](crate::Tile) placed during the current turn.
    moves: usize,
    /// The phase of the game.
    phase: Phase,
    /// The number of [tiles](crate::Tile) a rack is filled up to.
    rack_len: usize,
    /// The number of full rotations after which the game ends.
    max_cycles: usize,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// # Returns
    ///
    /// A [Game] which has not started, with empty pools and racks, a rack length of
    /// [DEFAULT_RACK_LEN], and a cycle limit of [MAX_CYCLES].
    pub fn new() -> Game {
        Game {
            players: [Player::new(), Player::new()],
            board: Board::new(),
            current_player: PlayerId::One,
            turns: 0,
            cycles: 0,
            moves: 0,
            phase: Phase::NotStarted,
            rack_len: DEFAULT_RACK_LEN,
            max_cycles: MAX_CYCLES,
        }
    }

    /// Checks that `rack_len` is non-zero and no larger than a full pool and that
    /// `max_cycles` is non-zero. When `rack_len` and/or `max_cycles` are [None], default values
    /// [DEFAULT_RACK_LEN] and [MAX_CYCLES] are used respectively.
    ///
    /// # Arguments
    ///
    /// * `rack_len`: The number of [tiles](crate::Tile) each rack is filled up to.
    /// * `max_cycles`: The number of full rotations after which the game ends.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyRack] Attempting to create a game where racks hold
    /// no [tiles](crate::Tile).
    /// * [NewError::RackTooLarge] Attempting to create a game where a rack holds more
    /// [tiles](crate::Tile) than a full pool.
    /// * [NewError::NoCycles] Attempting to create a game that ends before any rotation
    /// is played.
    ///
    /// # Returns
    ///
    /// A [Game] which has not started.
    pub fn with_settings(
        rack_len: Option<usize>,
        max_cycles: Option<usize>,
    ) -> Result<Game, HashSet<NewError>> {
        let rack_len = rack_len.unwrap_or(DEFAULT_RACK_LEN);
        let max_cycles = max_cycles.unwrap_or(MAX_CYCLES);

        let mut errors = HashSet::with_capacity(2);
        if rack_len == 0 {
            errors.insert(NewError::EmptyRack);
        } else if rack_len > TILES_LEN {
            errors.insert(NewError::RackTooLarge {
                rack_len,
                tiles_len: TILES_LEN,
            });
        }
        if max_cycles == 0 {
            errors.insert(NewError::NoCycles);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Game {
            rack_len,
            max_cycles,
            ..Game::new()
        })
    }

    /// The phase of the game.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the game has ended.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// The id of the player whose turn it is.
    #[inline]
    pub fn current_player_id(&self) -> PlayerId {
        self.current_player
    }

    /// The player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> &Player {
        self.player(self.current_player)
    }

    /// The player seated at `id`.
    #[inline]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The player who moves first.
    #[inline]
    pub fn player1(&self) -> &Player {
        self.player(PlayerId::One)
    }

    /// The player who moves second.
    #[inline]
    pub fn player2(&self) -> &Player {
        self.player(PlayerId::Two)
    }

    /// The [tiles](crate::Tile) placed so far.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The number of times the turn has been passed.
    #[inline]
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// The number of full rotations completed before the most recently ended turn began.
    /// It stays `0` until the turn has been passed `3` times and then grows by one every
    /// second pass.
    #[inline]
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// The number of [tiles](crate::Tile) placed during the current turn.
    #[inline]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// The number of [tiles](crate::Tile) a rack is filled up to.
    #[inline]
    pub fn rack_len(&self) -> usize {
        self.rack_len
    }

    /// The number of full rotations after which the game ends.
    #[inline]
    pub fn max_cycles(&self) -> usize {
        self.max_cycles
    }

    /// Ends the game when either the current player has no [tiles](crate::Tile) left in
    /// both their pool and their rack or both players have passed the turn
    /// [max_cycles](Game::max_cycles) times. Does nothing unless the game is in progress,
    /// so calling it again after the game has ended changes nothing.
    ///
    /// # Returns
    ///
    /// Whether the game has ended.
    pub fn check_over(&mut self) -> bool {
        if self.phase != Phase::InProgress {
            return self.is_over();
        }

        let out_of_tiles = self.current_player().is_out_of_tiles();
        let cycle_limit = self.turns >= self.max_cycles * PLAYERS_LEN;
        if out_of_tiles || cycle_limit {
            self.phase = Phase::Over;
            info!(
                winner = ?self.winner(),
                out_of_tiles,
                cycle_limit,
                turns = self.turns,
                "game over"
            );
        }

        self.is_over()
    }

    /// Compares the number of [tiles](crate::Tile) each player has left in their pool and
    /// their rack. Pools count as well as racks, since [next_player](Game::next_player)
    /// refills both racks to [the rack length](Game::rack_len) and comparing racks alone
    /// would almost always tie once [max_cycles](Game::max_cycles) ends the game.
    ///
    /// # Returns
    ///
    /// The player with strictly fewer [tiles](crate::Tile) left or [None] when both players
    /// have the same number left.
    pub fn winner(&self) -> Option<PlayerId> {
        match self
            .player1()
            .tiles_left()
            .cmp(&self.player2().tiles_left())
        {
            Ordering::Less => Some(PlayerId::One),
            Ordering::Greater => Some(PlayerId::Two),
            Ordering::Equal => None,
        }
    }

    /// A mutable reference to the player whose turn it is.
    fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_macro::hash_set;
    use rand::Rng;

    #[test]
    fn new_not_started() {
        let game = Game::new();

        assert_eq!(Phase::NotStarted, game.phase());
        assert!(!game.is_over());
        assert!(game.board().is_empty());
        assert!(game.player1().is_out_of_tiles());
        assert!(game.player2().is_out_of_tiles());
        assert_eq!(0, game.cycles());
        assert_eq!(DEFAULT_RACK_LEN, game.rack_len());
        assert_eq!(MAX_CYCLES, game.max_cycles());
    }

    #[test]
    fn with_settings_none() {
        let game = Game::with_settings(None, None).expect("with_settings should return Ok");

        assert_eq!(DEFAULT_RACK_LEN, game.rack_len());
        assert_eq!(MAX_CYCLES, game.max_cycles());
    }

    #[test]
    fn with_settings_some() {
        let mut rng = rand::thread_rng();
        let rack_len = rng.gen_range(1..=TILES_LEN);
        let max_cycles = rng.gen_range(1..100);

        let game = Game::with_settings(Some(rack_len), Some(max_cycles))
            .expect("with_settings should return Ok");

        assert_eq!(rack_len, game.rack_len());
        assert_eq!(max_cycles, game.max_cycles());
    }

    #[test]
    fn with_settings_empty_rack_no_cycles() {
        test_with_settings_errors(
            Some(0),
            Some(0),
            hash_set! { NewError::EmptyRack, NewError::NoCycles },
        );
    }

    #[test]
    fn with_settings_rack_too_large() {
        test_with_settings_errors(
            Some(TILES_LEN + 1),
            None,
            hash_set! { NewError::RackTooLarge {
                rack_len: TILES_LEN + 1,
                tiles_len: TILES_LEN,
            }},
        );
    }

    #[test]
    fn check_over_not_started() {
        let mut game = Game::new();

        assert!(!game.check_over());
        assert_eq!(Phase::NotStarted, game.phase());
    }

    #[test]
    fn check_over_out_of_tiles() {
        let mut game = Game::new();
        game.start().expect("start should return Ok");
        let player = game.current_player_mut();
        player.pool_mut().clear();
        player.rack_mut().clear();

        assert!(game.check_over());
        assert!(game.is_over());
    }

    #[test]
    fn check_over_other_player_out_of_tiles() {
        let mut game = Game::new();
        game.start().expect("start should return Ok");
        let player = game.player_mut(PlayerId::Two);
        player.pool_mut().clear();
        player.rack_mut().clear();

        assert!(!game.check_over());
        assert_eq!(Phase::InProgress, game.phase());
    }

    #[test]
    fn check_over_only_rack_empty() {
        let mut game = Game::new();
        game.start().expect("start should return Ok");
        game.current_player_mut().rack_mut().clear();

        assert!(!game.check_over());
    }

    #[test]
    fn check_over_idempotent() {
        let mut game = Game::new();
        game.start().expect("start should return Ok");
        let player = game.current_player_mut();
        player.pool_mut().clear();
        player.rack_mut().clear();
        game.check_over();
        let winner = game.winner();

        assert!(game.check_over());
        assert!(game.is_over());
        assert_eq!(winner, game.winner());
        assert_eq!(Some(PlayerId::One), winner);
    }

    #[test]
    fn winner_player1_fewer_tiles() {
        let mut game = Game::new();
        game.start().expect("start should return Ok");
        game.player_mut(PlayerId::One).rack_mut().truncate(2);

        assert_eq!(Some(PlayerId::One), game.winner());
    }

    #[test]
    fn winner_player2_fewer_tiles() {
        let mut game = Game::new();
        game.start().expect("start should return Ok");
        let rack = game.player1().rack()[..2].to_vec();
        game.player_mut(PlayerId::Two).set_rack(rack);

        assert_eq!(Some(PlayerId::Two), game.winner());
    }

    #[test]
    fn winner_counts_pool() {
        let mut game = Game::new();
        game.start().expect("start should return Ok");
        game.player_mut(PlayerId::Two).pool_mut().pop();

        assert_eq!(Some(PlayerId::Two), game.winner());
    }

    #[test]
    fn winner_at_cycle_limit_with_full_racks() {
        let mut game = Game::with_settings(None, Some(1)).expect("with_settings should return Ok");
        game.start().expect("start should return Ok");
        game.player_mut(PlayerId::One).pool_mut().truncate(2);

        game.next_player().expect("next_player should return Ok");
        game.next_player().expect("next_player should return Ok");

        assert!(game.is_over());
        assert_eq!(game.player1().rack().len(), game.player2().rack().len());
        assert_eq!(Some(PlayerId::One), game.winner());
    }

    #[test]
    fn winner_tie() {
        let mut game = Game::new();
        game.start().expect("start should return Ok");

        assert_eq!(None, game.winner());
    }

    fn test_with_settings_errors(
        rack_len: Option<usize>,
        max_cycles: Option<usize>,
        expected_errors: HashSet<NewError>,
    ) {
        let actual_errors = Game::with_settings(rack_len, max_cycles)
            .expect_err("with_settings should return Err");

        assert_eq!(expected_errors, actual_errors);
    }
}
