//! A two-player tile matching game where each player draws from their own pool of
//! [tiles](Tile) and places them one at a time on a shared board, which is large but bounded
//! by [POSITION_LIMIT].
//!
//! ## Summary
//!
//! Every [tile](Tile) has a [color](Color) and a [shape](Shape). Each player owns a full set
//! of [every tile variant](tiles) as their pool and keeps a few [tiles](Tile) in their rack.
//! During their turn, the current player [places](Game::play_tile) [tiles](Tile) from their
//! rack on the board or [exchanges](Game::exchange) some of them with their pool, then
//! [passes the turn](Game::next_player) which refills their rack. The game ends when the
//! current player has no [tiles](Tile) left or after [a number of cycles](Game::max_cycles).
//! The player with fewer [tiles](Tile) left wins.
//!
//! ## How is the game created?
//!
//! [Game::new] and [Game::with_settings] create the game before it has started.
//! [Game::start] [divides the tiles](Game::divide_tiles) and fills both racks.
//!
//! ## How are tiles placed?
//!
//! A [tile](Tile) may be placed on any empty, [in bounds](Position::is_in_bounds)
//! [position](Position) as long as it is [compatible](Tile::is_compatible) with every
//! occupied neighbor, which is when both [tiles](Tile) share exactly one of
//! [color](Color) or [shape](Shape). The first [FREE_MOVES_PER_TURN] placements of a turn are
//! free and every further placement costs [EXTRA_MOVE_COST] points.
//!
//! ## How are points calculated?
//!
//! The points earned by a placement is the sum of the lengths of the horizontal and
//! vertical lines through the placed [tile](Tile), counting only lines of at least `2`
//! [tiles](Tile). A placement without occupied neighbors earns [ISOLATED_PLAY_POINTS].
//!
//! ## How is the game viewed?
//!
//! [Game::view] borrows what is visible to both players. [Game::rack] shares the private
//! rack of each individual player.
//!
//! ## How are games tested when properties are private?
//!
//! The `test` build configuration adds methods to get mutable references to the private
//! properties of a [Game] and helpers to generate random data.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use board::*;
pub use consts::*;
pub use game::*;
pub use player::*;
pub use position::*;
#[cfg(test)]
pub use random::*;
pub use scoring::*;
pub use tile::*;
pub use types::*;

mod board;
mod consts;
mod game;
mod player;
mod position;
#[cfg(test)]
mod random;
mod scoring;
mod tile;
mod types;
