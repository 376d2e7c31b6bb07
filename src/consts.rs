use crate::TILES_LEN;
use konst::primitive::{parse_isize, parse_usize};
use konst::{option, result};

/// The number of players in every game. `2` players.
///
/// # See Also
///
/// * [PlayerId](crate::PlayerId)
/// * [Game](crate::Game)
pub const PLAYERS_LEN: usize = 2;
/// The default maximum number of full rotations before the game is forced to end. If the
/// environment variable named `MAX_CYCLES` is present at compile time and is able to be parsed
/// into a `usize`, set to the value of the environment variable. Otherwise, it is set to `10`.
///
/// # Panics
///
/// * When the given value is `0`
///
/// # See Also
///
/// * [Game::with_settings](crate::Game::with_settings)
/// * [Game::check_over](crate::Game::check_over)
pub const MAX_CYCLES: usize = option::unwrap_or!(
    option::and_then!(option_env!("MAX_CYCLES"), |str| result::ok!(parse_usize(
        str
    ))),
    10
);
const _: () = assert!(MAX_CYCLES > 0);
/// The default number of [tiles](crate::Tile) each player holds in their rack. If the
/// environment variable named `DEFAULT_RACK_LEN` is present at compile time and is able to be
/// parsed into a `usize`, set to the value of the environment variable. Otherwise, it is set
/// to `6`.
///
/// # Panics
///
/// * When the given value is `0` or greater than [TILES_LEN]
///
/// # See Also
///
/// * [Game::with_settings](crate::Game::with_settings)
/// * [RACK_CAPACITY]
pub const DEFAULT_RACK_LEN: usize = option::unwrap_or!(
    option::and_then!(option_env!("DEFAULT_RACK_LEN"), |str| result::ok!(
        parse_usize(str)
    )),
    6
);
const _: () = assert!(DEFAULT_RACK_LEN > 0);
const _: () = assert!(DEFAULT_RACK_LEN <= TILES_LEN);
/// Racks are stored on the stack until the number of [tiles](crate::Tile) in a rack becomes
/// greater than `RACK_CAPACITY`. If the environment variable named `RACK_CAPACITY` is present
/// at compile time and is able to be parsed into a `usize`, set to the value of the environment
/// variable. Otherwise, it is set to [DEFAULT_RACK_LEN].
///
/// # See Also
///
/// * [Rack](crate::Rack)
pub const RACK_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("RACK_CAPACITY"), |str| result::ok!(parse_usize(
        str
    ))),
    DEFAULT_RACK_LEN
);
/// The exclusive maximum absolute value of a component in a [position](crate::Position).
/// If the environment variable named `POSITION_LIMIT` is present at compile time,
/// is able to be parsed into a `isize`, is not `0` and would not cause an overflow,
/// set to the saturating absolute value of the environment variable.
/// Otherwise, it is set to `1_000`.
///
/// # Panics
///
/// * When the given value is `0`, [isize::MIN], [isize::MIN] `+ 1` or [isize::MAX]
///
/// # See Also
///
/// * [Position::is_in_bounds](crate::Position::is_in_bounds)
/// * [Board::play_tile](crate::Board::play_tile)
pub const POSITION_LIMIT: isize = option::unwrap_or!(
    option::and_then!(option_env!("POSITION_LIMIT"), |str| result::ok!(
        parse_isize(str)
    )),
    1_000
)
.saturating_abs();
const _: () = assert!(POSITION_LIMIT > 0);
// cannot use assert_ne! in a const context
const _: () = assert!(POSITION_LIMIT != isize::MAX);
/// The points earned by a [tile](crate::Tile) placed without any neighbor on either axis.
/// `2` points.
///
/// # See Also
///
/// * [placement_points](crate::placement_points)
pub const ISOLATED_PLAY_POINTS: usize = 2;
/// The number of placements each player may make per turn without paying for them. `1` move.
///
/// # See Also
///
/// * [EXTRA_MOVE_COST]
/// * [Game::play_tile](crate::Game::play_tile)
pub const FREE_MOVES_PER_TURN: usize = 1;
/// The points removed from a player for every placement after their
/// [free moves](FREE_MOVES_PER_TURN) in the same turn. `2` points.
///
/// # See Also
///
/// * [Game::play_tile](crate::Game::play_tile)
pub const EXTRA_MOVE_COST: usize = 2;
