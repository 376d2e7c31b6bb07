use crate::POSITION_LIMIT;

/// A row and a column locating one square on the board. The origin is `(0, 0)` and both
/// components may be negative.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [PlayTileError](crate::PlayTileError)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Position {
    /// The vertical component.
    pub row: isize,
    /// The horizontal component.
    pub col: isize,
}

/// One of the two directions a run of [tiles](crate::Tile) can extend along.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Along a row, changing the column.
    Horizontal,
    /// Along a column, changing the row.
    Vertical,
}

impl Axis {
    /// # Returns
    ///
    /// Both axes, horizontal first.
    #[inline]
    pub fn axes() -> [Axis; 2] {
        [Axis::Horizontal, Axis::Vertical]
    }
}

impl Position {
    /// # Returns
    ///
    /// A [`Position`] at `row` and `col`.
    #[inline]
    pub const fn new(row: isize, col: isize) -> Position {
        Position { row, col }
    }

    /// Whether both components lie inside the range -[POSITION_LIMIT] exclusive to
    /// [POSITION_LIMIT] exclusive.
    #[inline]
    pub fn is_in_bounds(&self) -> bool {
        -POSITION_LIMIT < self.row
            && self.row < POSITION_LIMIT
            && -POSITION_LIMIT < self.col
            && self.col < POSITION_LIMIT
    }

    /// Moves `steps` squares along `axis`. Negative `steps` move up or left. Components
    /// saturate at [isize::MIN] and [isize::MAX].
    ///
    /// # Returns
    ///
    /// The [`Position`] `steps` squares away.
    #[inline]
    pub fn step(&self, axis: Axis, steps: isize) -> Position {
        match axis {
            Axis::Horizontal => Position::new(self.row, self.col.saturating_add(steps)),
            Axis::Vertical => Position::new(self.row.saturating_add(steps), self.col),
        }
    }

    /// Finds the adjacent [positions](Position) where adjacent is 4 directional
    /// and not diagonal.
    ///
    /// # Returns
    ///
    /// An array of 4 [positions](Position) in natural lexicographic order. Components
    /// saturate, so a [position](Position) on the edge of [isize] is adjacent to itself.
    pub fn adjacent_positions(&self) -> [Position; 4] {
        [
            self.step(Axis::Vertical, -1),
            self.step(Axis::Horizontal, -1),
            self.step(Axis::Horizontal, 1),
            self.step(Axis::Vertical, 1),
        ]
    }
}

impl From<(isize, isize)> for Position {
    #[inline]
    fn from((row, col): (isize, isize)) -> Position {
        Position::new(row, col)
    }
}
