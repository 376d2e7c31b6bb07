use crate::{Color, Pool, Position, Rack, Shape, Tile, POSITION_LIMIT, RACK_CAPACITY};
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// It inserts a random, small, non-zero number of [tiles](Tile) into the pool.
///
/// # Returns
///
/// The number of additional [tiles](Tile) in the pool.
pub fn random_pool<R: Rng + ?Sized>(rng: &mut R, pool: &mut Pool) -> usize {
    let pool_len = rng.gen_range(10..20);
    pool.extend((0..pool_len).map(|_| rng.gen::<Tile>()));

    pool_len
}

/// Pushes a random, small, non-zero number of [tiles](Tile) into the rack without going
/// over [RACK_CAPACITY].
///
/// # Returns
///
/// The number of additional [tiles](Tile) in the rack.
pub fn random_rack<R: Rng + ?Sized>(rng: &mut R, rack: &mut Rack) -> usize {
    let rack_len = rng.gen_range(2..=RACK_CAPACITY.max(2));
    rack.extend((0..rack_len).map(|_| rng.gen::<Tile>()));

    rack_len
}

/// A new [tile](Tile) with a random, different [shape](Shape) but the same [color](Color).
pub fn random_different_shape_same_color<R: Rng + ?Sized>(rng: &mut R, tile: Tile) -> Tile {
    let possible_indexes = Uniform::from(0..Shape::SHAPES_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // removing the shape at its own index in the array shapes
    let random_different_index =
        random_index + if random_index < tile.shape as usize { 0 } else { 1 };
    Tile::new(tile.color, Shape::shapes()[random_different_index])
}

/// A new [tile](Tile) with a random, different [color](Color) but the same [shape](Shape).
pub fn random_different_color_same_shape<R: Rng + ?Sized>(rng: &mut R, tile: Tile) -> Tile {
    let possible_indexes = Uniform::from(0..Color::COLORS_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // removing the color at its own index in the array colors
    let random_different_index =
        random_index + if random_index < tile.color as usize { 0 } else { 1 };
    Tile::new(Color::colors()[random_different_index], tile.shape)
}

/// An [iterator](Iterator) of [positions](Position) where the values of both components lie
/// inside the range -[POSITION_LIMIT] exclusive to [POSITION_LIMIT] exclusive.
pub fn random_legal_positions<R: Rng + ?Sized>(rng: &mut R) -> impl Iterator<Item = Position> {
    let possible_legal_components = Uniform::from(0..POSITION_LIMIT);
    [(-1, -1), (-1, 1), (1, -1), (1, 1)]
        .map(|(row_sign, col_sign)| {
            Position::new(
                row_sign * possible_legal_components.sample(rng),
                col_sign * possible_legal_components.sample(rng),
            )
        })
        .tap_mut(|positions| positions.shuffle(rng))
        .into_iter()
}

/// An [iterator](Iterator) of [positions](Position) where the value of some component lies
/// outside the range -[POSITION_LIMIT] exclusive to [POSITION_LIMIT] exclusive.
pub fn random_illegal_positions<R: Rng + ?Sized>(rng: &mut R) -> impl Iterator<Item = Position> {
    let possible_components = Uniform::from(0..isize::MAX);
    let possible_illegal_components = Uniform::from(POSITION_LIMIT..isize::MAX);
    [
        Position::new(
            -possible_components.sample(rng),
            -possible_illegal_components.sample(rng),
        ),
        Position::new(
            -possible_illegal_components.sample(rng),
            possible_components.sample(rng),
        ),
        Position::new(
            possible_illegal_components.sample(rng),
            -possible_components.sample(rng),
        ),
        Position::new(
            possible_components.sample(rng),
            possible_illegal_components.sample(rng),
        ),
    ]
    .tap_mut(|positions| positions.shuffle(rng))
    .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pool_empty() {
        let mut pool = Pool::new();

        let pool_len = random_pool(&mut rand::thread_rng(), &mut pool);

        assert_eq!(pool.len(), pool_len);
    }

    #[test]
    fn random_rack_empty() {
        let mut rack = Rack::new();

        let rack_len = random_rack(&mut rand::thread_rng(), &mut rack);

        assert_eq!(rack.len(), rack_len);
        assert!(rack_len >= 2);
    }

    #[test]
    fn random_different_shape_same_color_single_sample() {
        let mut rng = rand::thread_rng();
        let tile: Tile = rng.gen();

        let other = random_different_shape_same_color(&mut rng, tile);

        assert_eq!(tile.color, other.color);
        assert_ne!(tile.shape, other.shape);
    }

    #[test]
    fn random_different_color_same_shape_single_sample() {
        let mut rng = rand::thread_rng();
        let tile: Tile = rng.gen();

        let other = random_different_color_same_shape(&mut rng, tile);

        assert_ne!(tile.color, other.color);
        assert_eq!(tile.shape, other.shape);
    }
}
