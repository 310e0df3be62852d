use core::{
    fmt::{self, Display, Formatter},
    num::{NonZeroU8, NonZeroUsize},
};
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};

/// The coordinates of a tile on a grid.
///
/// Rows grow downwards and columns grow to the right, so `Position::new(0, 0)` is the top left corner. Both coordinates fit into a `u8` because grids are at most 256 tiles wide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Position {
    /// The row index (Y coordinate), starting from zero at the top.
    pub row: u8,
    /// The column index (X coordinate), starting from zero at the left.
    pub col: u8,
}
impl Position {
    /// Creates a position from a row and a column.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}
impl From<(u8, u8)> for Position {
    /// Interprets the tuple as `(row, col)`.
    #[inline]
    fn from((row, col): (u8, u8)) -> Self {
        Self { row, col }
    }
}
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a tile holds. Decided once during setup and never changed afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum TileKind {
    /// A safe tile without any neighbouring mines. Revealing it opens a clearing.
    Blank,
    /// A safe tile with 1 to 8 neighbouring mines.
    Count(NonZeroU8),
    /// A tile with a mine inside.
    Mine,
}
impl TileKind {
    /// Returns the kind of a safe tile with the given amount of neighbouring mines.
    #[inline]
    pub fn from_neighbouring_mines(mines: u8) -> Self {
        NonZeroU8::new(mines).map_or(Self::Blank, Self::Count)
    }
    /// Returns `true` if the tile contains a mine, `false` otherwise.
    #[inline]
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
    /// Returns `true` if revealing this tile does not end the game, `false` otherwise.
    #[inline]
    pub const fn is_safe(self) -> bool {
        !self.is_mine()
    }
    /// Returns the amount of neighbouring mines, which is zero for blanks and mines.
    #[inline]
    pub const fn count(self) -> u8 {
        match self {
            Self::Count(n) => n.get(),
            _ => 0,
        }
    }
}
impl Default for TileKind {
    /// Returns the `Blank` variant.
    #[inline]
    fn default() -> Self {
        Self::Blank
    }
}

/// Represents the state of a flag on a hidden tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Flag {
    /// The player didn't mark this tile yet.
    ///
    /// Returned by the `Default` trait implementation.
    NotFlagged,
    /// The player believes that the tile this flag is applied to contains a mine.
    Flagged,
}
impl Flag {
    /// Returns the opposite flag state.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::NotFlagged => Self::Flagged,
            Self::Flagged => Self::NotFlagged,
        }
    }
    /// Returns `true` for `Flagged`.
    #[inline]
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}
impl Default for Flag {
    /// Returns the `NotFlagged` state.
    #[inline]
    fn default() -> Self {
        Self::NotFlagged
    }
}

/// A tile on a grid.
///
/// The `kind` never changes once the grid has been set up. `revealed` only ever goes from `false` to `true`, and only through [`Grid::reveal`][reveal]. The flag can only be changed while the tile is hidden.
///
/// [reveal]: struct.Grid.html#method.reveal "reveal — reveals a tile, flood-filling clearings"
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Tile {
    /// Where the tile is located on its grid.
    pub position: Position,
    /// What the tile holds.
    pub kind: TileKind,
    pub(crate) revealed: bool,
    pub(crate) flag: Flag,
}
impl Tile {
    /// Creates a hidden, unflagged tile.
    #[inline]
    pub const fn new(position: Position, kind: TileKind) -> Self {
        Self { position, kind, revealed: false, flag: Flag::NotFlagged }
    }
    /// Returns `true` if the tile has been revealed.
    #[inline]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }
    /// Returns `true` if the tile is still hidden.
    #[inline]
    pub const fn is_hidden(&self) -> bool {
        !self.revealed
    }
    /// Returns `true` if the tile contains a mine.
    #[inline]
    pub const fn is_mine(&self) -> bool {
        self.kind.is_mine()
    }
    /// Returns `true` if a flag is placed on this tile.
    #[inline]
    pub const fn is_flagged(&self) -> bool {
        self.flag.is_flagged()
    }
    /// Returns the flag installed on this tile, or `None` if this tile is revealed and thus cannot hold a flag.
    #[inline]
    pub const fn flag_state(&self) -> Option<Flag> {
        if self.revealed { None } else { Some(self.flag) }
    }
    /// Returns `true` if this tile has to be revealed in order for the game to be won.
    ///
    /// This is `true` only for hidden safe tiles, flagged or not.
    #[inline]
    pub const fn is_required_to_open(&self) -> bool {
        !self.revealed && self.kind.is_safe()
    }
}

/// The event produced after revealing a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum RevealOutcome {
    /// The tile was already revealed. Nothing changed.
    AlreadyRevealed,
    /// The tile is flagged and has to be unflagged before it can be revealed. Nothing changed.
    Flagged,
    /// A tile with a number was revealed.
    OpenNumber(NonZeroU8),
    /// A clearing was opened. Holds the amount of tiles revealed in the process, including the number tiles on its border. A clearing of only one blank tile is still a clearing.
    ///
    /// Flagged tiles stop the clearing and are neither opened nor counted, so the count can be smaller than the connected region of safe tiles.
    OpenClearing(NonZeroUsize),
    /// A mine was revealed, ending the game.
    Explosion,
}
impl RevealOutcome {
    /// Returns `true` if the reveal changed the grid.
    #[inline]
    pub const fn changed_anything(self) -> bool {
        !matches!(self, Self::AlreadyRevealed | Self::Flagged)
    }
}
