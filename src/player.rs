use crate::{Pool, Rack, Tile, TILES_LEN};

/// Names one of the two seats at the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum PlayerId {
    /// The player who moves first. `0`.
    One = 0,
    /// The player who moves second. `1`.
    Two = 1,
}

impl PlayerId {
    /// # Returns
    ///
    /// The opponent of `self`.
    #[inline]
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// # Returns
    ///
    /// The index of `self` in `0..`[PLAYERS_LEN](crate::PLAYERS_LEN).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Describes the reason why a [tile](Tile) could not be [drawn](Player::draw).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum DrawError {
    /// Attempting to draw from an empty pool.
    EmptyPool,
}

/// Owns one player's pool, rack, and points.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Player {
    /// This is a pool of the [tiles](Tile) that haven't been drawn yet.
    pool: Pool,
    /// This is a rack of the [tiles](Tile) available to play.
    rack: Rack,
    /// The points earned so far.
    points: usize,
}

impl Player {
    /// # Returns
    ///
    /// A [`Player`] with an empty pool, an empty rack, and `0` points.
    pub fn new() -> Player {
        Player {
            pool: Pool::with_capacity(TILES_LEN),
            rack: Rack::new(),
            points: 0,
        }
    }

    /// The [tiles](Tile) that haven't been drawn yet.
    #[inline]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// A mutable reference to the pool.
    #[inline]
    pub fn pool_mut(&mut self) -> &mut Pool {
        &mut self.pool
    }

    /// Replaces the pool.
    pub fn set_pool(&mut self, pool: Pool) {
        self.pool = pool;
    }

    /// The [tiles](Tile) available to play.
    #[inline]
    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    /// A mutable reference to the rack.
    #[inline]
    pub fn rack_mut(&mut self) -> &mut Rack {
        &mut self.rack
    }

    /// Replaces the rack.
    pub fn set_rack(&mut self, rack: impl IntoIterator<Item = Tile>) {
        self.rack = rack.into_iter().collect();
    }

    /// The points earned so far.
    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Adds `points` to the total.
    pub fn add_points(&mut self, points: usize) {
        self.points += points;
    }

    /// Removes `points` from the total if the total is large enough.
    ///
    /// # Returns
    ///
    /// Whether the points were removed. When `false`, the total is unchanged.
    pub fn remove_points(&mut self, points: usize) -> bool {
        match self.points.checked_sub(points) {
            Some(remaining) => {
                self.points = remaining;
                true
            }
            None => false,
        }
    }

    /// Removes one instance of `tile` from the pool.
    ///
    /// # Returns
    ///
    /// Whether some instance was removed. Removing an absent [tile](Tile) does nothing.
    pub fn remove_from_pool(&mut self, tile: &Tile) -> bool {
        let Some(index) = self.pool.iter().position(|other| other == tile) else {
            return false;
        };
        self.pool.remove(index);
        true
    }

    /// Removes one instance of `tile` from the rack and keeps the order of the others.
    ///
    /// # Returns
    ///
    /// Whether some instance was removed. Removing an absent [tile](Tile) does nothing.
    pub fn remove_from_rack(&mut self, tile: &Tile) -> bool {
        let Some(index) = self.rack.iter().position(|other| other == tile) else {
            return false;
        };
        self.rack.remove(index);
        true
    }

    /// Whether some instance of `tile` is in the rack.
    #[inline]
    pub fn holds(&self, tile: &Tile) -> bool {
        self.rack.contains(tile)
    }

    /// Moves the last [tile](Tile) of the pool into the rack.
    ///
    /// # Errors
    ///
    /// * [DrawError::EmptyPool] Attempting to draw from an empty pool.
    ///
    /// # Returns
    ///
    /// The drawn [tile](Tile).
    pub fn draw(&mut self) -> Result<Tile, DrawError> {
        let tile = self.pool.pop().ok_or(DrawError::EmptyPool)?;
        self.rack.push(tile);
        Ok(tile)
    }

    /// Draws [tiles](Tile) until the rack holds `rack_len` [tiles](Tile) or the pool is empty.
    ///
    /// # Returns
    ///
    /// The number of drawn [tiles](Tile).
    pub fn fill_rack(&mut self, rack_len: usize) -> usize {
        let mut drawn = 0;
        while self.rack.len() < rack_len {
            if self.draw().is_err() {
                break;
            }
            drawn += 1;
        }
        drawn
    }

    /// # Returns
    ///
    /// The number of [tiles](Tile) left in both the pool and the rack.
    #[inline]
    pub fn tiles_left(&self) -> usize {
        self.pool.len() + self.rack.len()
    }

    /// Whether both the pool and the rack are empty.
    #[inline]
    pub fn is_out_of_tiles(&self) -> bool {
        self.pool.is_empty() && self.rack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{random_pool, random_rack, tiles, Color, Shape};
    use rand::Rng;

    #[test]
    fn other() {
        assert_eq!(PlayerId::Two, PlayerId::One.other());
        assert_eq!(PlayerId::One, PlayerId::Two.other());
    }

    #[test]
    fn index() {
        assert_eq!(0, PlayerId::One.index());
        assert_eq!(1, PlayerId::Two.index());
    }

    #[test]
    fn new_is_empty() {
        let player = Player::new();

        assert!(player.pool().is_empty());
        assert!(player.rack().is_empty());
        assert_eq!(0, player.points());
        assert!(player.is_out_of_tiles());
    }

    #[test]
    fn remove_from_pool_counts() {
        let tile = Tile::new(Color::Orange, Shape::Star);
        for copies in 0..=2 {
            let mut player = Player::new();
            player.set_pool(vec![tile; copies]);
            player.pool_mut().push(Tile::new(Color::Red, Shape::Star));

            for _ in 0..2 {
                player.remove_from_pool(&tile);
            }

            assert!(!player.pool().contains(&tile));
            assert_eq!(1, player.pool().len());
        }
    }

    #[test]
    fn remove_from_pool_absent() {
        let mut player = Player::new();
        player.set_pool(vec![Tile::new(Color::Blue, Shape::Circle)]);

        assert!(!player.remove_from_pool(&Tile::new(Color::Blue, Shape::Square)));
        assert_eq!(1, player.pool().len());
    }

    #[test]
    fn remove_from_rack_one_instance() {
        let tile = Tile::new(Color::Green, Shape::Cross);
        let other = Tile::new(Color::Green, Shape::Clover);
        let mut player = Player::new();
        player.set_rack([tile, other, tile]);

        assert!(player.remove_from_rack(&tile));

        assert_eq!(&[other, tile][..], &player.rack()[..]);
    }

    #[test]
    fn remove_from_rack_absent() {
        let mut rng = rand::thread_rng();
        let mut player = Player::new();
        random_rack(&mut rng, player.rack_mut());
        let rack = player.rack().clone();
        let absent = tiles()
            .into_iter()
            .find(|tile| !rack.contains(tile))
            .expect("a random rack should never hold every tile");

        assert!(!player.remove_from_rack(&absent));
        assert_eq!(rack, *player.rack());
    }

    #[test]
    fn remove_points_enough() {
        let mut player = Player::new();
        player.add_points(5);

        assert!(player.remove_points(2));
        assert_eq!(3, player.points());
    }

    #[test]
    fn remove_points_not_enough() {
        let mut player = Player::new();
        player.add_points(1);

        assert!(!player.remove_points(2));
        assert_eq!(1, player.points());
    }

    #[test]
    fn draw_moves_last_tile() {
        let mut rng = rand::thread_rng();
        let mut player = Player::new();
        let pool_len = random_pool(&mut rng, player.pool_mut());
        let last = *player.pool().last().expect("random pool should not be empty");

        let drawn = player.draw().expect("draw should return Ok");

        assert_eq!(last, drawn);
        assert_eq!(pool_len - 1, player.pool().len());
        assert_eq!(&[drawn][..], &player.rack()[..]);
    }

    #[test]
    fn draw_empty_pool() {
        let mut player = Player::new();

        assert_eq!(Err(DrawError::EmptyPool), player.draw());
        assert!(player.rack().is_empty());
    }

    #[test]
    fn fill_rack_enough_tiles() {
        let mut rng = rand::thread_rng();
        let mut player = Player::new();
        let pool_len = random_pool(&mut rng, player.pool_mut());
        let rack_len = rng.gen_range(1..=pool_len);

        let drawn = player.fill_rack(rack_len);

        assert_eq!(rack_len, drawn);
        assert_eq!(rack_len, player.rack().len());
        assert_eq!(pool_len, player.tiles_left());
    }

    #[test]
    fn fill_rack_not_enough_tiles() {
        let mut player = Player::new();
        player.set_pool(tiles()[..2].to_vec());

        let drawn = player.fill_rack(6);

        assert_eq!(2, drawn);
        assert!(player.pool().is_empty());
        assert_eq!(2, player.rack().len());
    }

    #[test]
    fn fill_rack_already_full() {
        let mut player = Player::new();
        player.set_pool(tiles().to_vec());
        player.set_rack(tiles()[..3].iter().copied());

        assert_eq!(0, player.fill_rack(3));
        assert_eq!(tiles().len(), player.pool().len());
    }
}
