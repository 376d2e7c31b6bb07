use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// The number of [`Tile`] variants. 36 tiles from 6 colors and 6 shapes.
pub const TILES_LEN: usize = Color::COLORS_LEN * Shape::SHAPES_LEN;

/// Describes a tile with [`Color`] and [`Shape`] in a game. Two tiles are equal when both
/// their colors and their shapes are equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Tile {
    /// The color printed on the tile.
    pub color: Color,
    /// The shape printed on the tile.
    pub shape: Shape,
}

impl Tile {
    /// # Returns
    ///
    /// A [`Tile`] with `color` and `shape`.
    #[inline]
    pub const fn new(color: Color, shape: Shape) -> Tile {
        Tile { color, shape }
    }

    /// Whether `self` and `other` may sit next to each other on the board, which is when
    /// they share exactly one of [`Color`] or [`Shape`].
    ///
    /// # Returns
    ///
    /// `true` when the tiles share the color but not the shape or the shape but not
    /// the color. `false` when they share both or neither.
    #[inline]
    pub fn is_compatible(&self, other: &Tile) -> bool {
        (self.color == other.color) != (self.shape == other.shape)
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        Tile::new(rng.gen(), rng.gen())
    }
}

/// # Returns
///
/// An array of all [`Tile`] variants in color then shape order.
pub fn tiles() -> [Tile; TILES_LEN] {
    let mut tiles = [Tile::new(Color::Red, Shape::Circle); TILES_LEN];
    for (index, tile) in tiles.iter_mut().enumerate() {
        *tile = Tile::new(
            Color::colors()[index / Shape::SHAPES_LEN],
            Shape::shapes()[index % Shape::SHAPES_LEN],
        );
    }
    tiles
}

/// Describes the color on a [`Tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, FromPrimitive)]
pub enum Color {
    /// `0`.
    Red = 0,
    /// `1`.
    Orange = 1,
    /// `2`.
    Yellow = 2,
    /// `3`.
    Green = 3,
    /// `4`.
    Blue = 4,
    /// `5`.
    Purple = 5,
}

impl Color {
    /// The number of [`Color`] variants. 6 colors.
    pub const COLORS_LEN: usize = 6;

    /// # Returns
    ///
    /// An array of all [`Color`] variants in order.
    #[inline]
    pub fn colors() -> [Color; Color::COLORS_LEN] {
        [
            Color::Red,
            Color::Orange,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Purple,
        ]
    }
}

impl Distribution<Color> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let index = rng.gen_range(0..Color::COLORS_LEN);
        num_traits::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Color::COLORS_LEN);
            unreachable!(
                "index ({:?}) should be matched since colors cover all indexes \
                in range 0..Color::COLORS_LEN (0..{:?}).",
                index,
                Color::COLORS_LEN
            );
        })
    }
}

/// Describes the shape on a [`Tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, FromPrimitive)]
pub enum Shape {
    /// `0`.
    Circle = 0,
    /// `1`.
    Clover = 1,
    /// `2`.
    Diamond = 2,
    /// `3`.
    Square = 3,
    /// `4`.
    Star = 4,
    /// `5`.
    Cross = 5,
}

impl Shape {
    /// The number of [`Shape`] variants. 6 shapes.
    pub const SHAPES_LEN: usize = 6;

    /// # Returns
    ///
    /// An array of all [`Shape`] variants in order.
    #[inline]
    pub fn shapes() -> [Shape; Shape::SHAPES_LEN] {
        [
            Shape::Circle,
            Shape::Clover,
            Shape::Diamond,
            Shape::Square,
            Shape::Star,
            Shape::Cross,
        ]
    }
}

impl Distribution<Shape> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        let index = rng.gen_range(0..Shape::SHAPES_LEN);
        num_traits::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Shape::SHAPES_LEN);
            unreachable!(
                "index ({:?}) should be matched since shapes cover all indexes \
                in range 0..Shape::SHAPES_LEN (0..{:?}).",
                index,
                Shape::SHAPES_LEN
            );
        })
    }
}
