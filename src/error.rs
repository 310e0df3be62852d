//! The error type shared by every fallible operation in the crate.

use thiserror::Error;
use crate::{GameStatus, Position};

/// Errors produced while configuring, building or playing a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The grid size is outside of `1..=256`.
    #[error("grid size {0} is outside of the supported range 1..=256")]
    InvalidGridSize(u16),
    /// The mine odds are below 2, which would turn every tile into a mine.
    #[error("mine odds must be at least 2, got {0}")]
    InvalidMineOdds(u32),
    /// The screen cannot give every tile at least one pixel.
    #[error("a {screen_size}px screen is too small for a {grid_size}x{grid_size} grid")]
    ScreenTooSmall {
        /// The configured screen size, in pixels.
        screen_size: u32,
        /// The configured grid size, in tiles.
        grid_size: u16,
    },
    /// A position does not exist on the grid.
    #[error("position {position} is outside of a {size}x{size} grid")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
        /// The size of the grid the position was checked against.
        size: u16,
    },
    /// Tile storage does not match the grid size.
    #[error("tile storage holds {actual} tiles, expected {expected}")]
    StorageMismatch {
        /// `size * size`.
        expected: usize,
        /// The length of the storage that was supplied.
        actual: usize,
    },
    /// The session has ended and accepts no further moves.
    #[error("the game is already over ({0:?})")]
    SessionOver(GameStatus),
}
