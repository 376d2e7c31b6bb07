use crate::{Board, Game, Phase, PlayerId, Rack, PLAYERS_LEN};

/// Immutably borrows the publicly visible properties of a [Game].
#[derive(Debug)]
pub struct GameView<'a> {
    /// The [tiles](crate::Tile) placed so far.
    pub board: &'a Board,
    /// The points of each player indexed by [PlayerId::index].
    pub points: [usize; PLAYERS_LEN],
    /// The number of [tiles](crate::Tile) in each player's rack.
    pub rack_lens: [usize; PLAYERS_LEN],
    /// The number of [tiles](crate::Tile) in each player's pool.
    pub pool_lens: [usize; PLAYERS_LEN],
    /// The player whose turn it is.
    pub current_player: PlayerId,
    /// See [Game::cycles].
    pub cycles: usize,
    /// The phase of the game.
    pub phase: Phase,
    /// The [winner](Game::winner) once the game has ended, otherwise [None].
    pub winner: Option<PlayerId>,
}

impl Game {
    /// # Returns
    ///
    /// A new [GameView] which immutably borrows the board, but with each rack and pool
    /// replaced by its length.
    pub fn view(&self) -> GameView<'_> {
        let [one, two] = &self.players;
        GameView {
            board: &self.board,
            points: [one.points(), two.points()],
            rack_lens: [one.rack().len(), two.rack().len()],
            pool_lens: [one.pool().len(), two.pool().len()],
            current_player: self.current_player,
            cycles: self.cycles,
            phase: self.phase,
            winner: self.is_over().then(|| self.winner()).flatten(),
        }
    }

    /// # Returns
    ///
    /// The [tiles](crate::Tile) held by the player seated at `id`.
    pub fn rack(&self, id: PlayerId) -> &Rack {
        self.player(id).rack()
    }
}
