use crate::{Board, Game, Phase, Player, PlayerId};

impl Game {
    /// A mutable reference to the player seated at `id`.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// A mutable reference to `self.moves`.
    pub fn mut_moves(&mut self) -> &mut usize {
        &mut self.moves
    }

    /// A mutable reference to `self.phase`.
    pub fn mut_phase(&mut self) -> &mut Phase {
        &mut self.phase
    }

    /// Mutable references to `self.board` and the player seated at `id` at the same time.
    pub fn board_and_player_mut(&mut self, id: PlayerId) -> (&mut Board, &mut Player) {
        (&mut self.board, &mut self.players[id.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Tile};
    use rand::Rng;

    #[test]
    fn board_and_player_mut() {
        let mut game = Game::new();
        let tile: Tile = rand::thread_rng().gen();
        let (board, player) = game.board_and_player_mut(PlayerId::Two);
        player.set_rack([tile]);

        board
            .play_tile(Position::new(0, 0), tile, player)
            .expect("play_tile should return Ok");

        assert_eq!(Some(&tile), game.board().get(&Position::new(0, 0)));
        assert_eq!(2, game.player2().points());
        assert_eq!(0, game.player1().points());
    }
}
