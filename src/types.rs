use crate::{Position, Tile, RACK_CAPACITY};
use smallvec::SmallVec;
use std::collections::{BTreeSet, HashMap};

/// A player's private reserve of [tiles](Tile) that haven't been drawn yet. Tiles are drawn
/// from the back.
///
/// # See Also
///
/// * [Tile]
/// * [Player](crate::Player)
pub type Pool = Vec<Tile>;
/// A player's hand of [tiles](Tile) currently available to play.
///
/// # See Also
///
/// * [Tile]
/// * [RACK_CAPACITY]
/// * [Player](crate::Player)
pub type Rack = SmallVec<[Tile; RACK_CAPACITY]>;
/// This is a map of [positions](Position) to [tiles](Tile) that have been played.
///
/// # See Also
///
/// * [Position]
/// * [Tile]
/// * [Board](crate::Board)
pub type Grid = HashMap<Position, Tile>;
/// An ordered set of rack indexes of [tiles](Tile) to be exchanged.
///
/// # See Also
///
/// * [Game::exchange](crate::Game::exchange)
pub type Exchanges = BTreeSet<usize>;
