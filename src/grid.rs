//! The grid engine.
//!
//! Everything that happens during a game happens here: mines are placed, adjacency counts are derived, tiles get revealed and flagged. Sessions, viewports and renderers only ever read from a `Grid` or call [`reveal`][m_reveal] and [`toggle_flag`][m_toggle_flag] on it.
//!
//! [m_reveal]: struct.Grid.html#method.reveal "reveal — reveals a tile, flood-filling clearings"
//! [m_toggle_flag]: struct.Grid.html#method.toggle_flag "toggle_flag — places or removes a flag on a hidden tile"

use core::{
    fmt::{self, Display, Formatter},
    num::NonZeroUsize,
    ops::Index,
    slice,
};
use alloc::{
    vec,
    vec::Vec,
};
use log::trace;
#[cfg(feature = "generation")]
use log::debug;
#[cfg(feature = "generation")]
use rand::{Rng, SeedableRng, rngs::StdRng};
#[cfg(feature = "serialization")]
use serde::{
    Serialize, Deserialize,
    ser::{Serializer, SerializeStruct},
    de::{self, Deserializer, Visitor, MapAccess, SeqAccess},
};
use crate::{
    config::check_grid_size,
    Error, Flag, GridRowsIter, Position, RevealOutcome, RowIter, Tile, TileKind,
};
#[cfg(feature = "generation")]
use crate::{config::check_mine_odds, GridConfig};

/// The neighbours of a tile.
///
/// The entries are the adjacent & diagonal positions in this fixed order: ↖, ↑, ↗, ←, →, ↙, ↓, ↘. Positions which would fall outside of the grid are `None`, so a corner tile has 3 present neighbours, an edge tile has 5 and an interior tile has 8.
pub type Neighbours = [Option<Position>; 8];

/// Row and column offsets of the neighbours, in the order used by `Neighbours`.
const NEIGHBOUR_OFFSETS: [(i16, i16); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A square Minesweeper grid.
///
/// Tiles are stored in row-major order. The kind of every tile is decided when the grid is built and is never changed afterwards; only the revealed and flag states of tiles mutate during a game.
///
/// # Usage
/// ```
/// # use minegrid::{Grid, Position, RevealOutcome};
/// let mut grid = Grid::from_mines(3, &[Position::new(0, 0)])?;
/// assert_eq!(grid[Position::new(1, 1)].kind.count(), 1);
///
/// // The bottom right corner is blank, so the clearing spreads over every safe tile.
/// let outcome = grid.reveal(Position::new(2, 2))?;
/// assert!(matches!(outcome, RevealOutcome::OpenClearing(n) if n.get() == 8));
/// assert!(grid.is_cleared());
/// # Ok::<(), minegrid::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: u16,
    storage: Vec<Tile>,
    // Safe tiles which are still hidden. Zero means the grid has been cleared.
    hidden_safe: usize,
}
impl Grid {
    /// Generates a grid from a seed, placing every mine independently with a probability of `1 / mine_odds`.
    ///
    /// The same configuration and seed always produce the same grid.
    #[cfg(feature = "generation")]
    pub fn generate(config: &GridConfig, seed: u64) -> Result<Self, Error> {
        Self::generate_with_rng(config, &mut StdRng::seed_from_u64(seed))
    }
    /// Generates a grid seeded from the thread-local random number generator.
    #[cfg(all(feature = "generation", feature = "std"))]
    pub fn generate_random(config: &GridConfig) -> Result<Self, Error> {
        Self::generate_with_rng(config, &mut rand::thread_rng())
    }
    /// Generates a grid using the given random number generator.
    ///
    /// Tiles are visited in row-major order and each one draws a number in `0..mine_odds`; a zero places a mine. The total amount of mines is therefore random, not fixed.
    #[cfg(feature = "generation")]
    pub fn generate_with_rng<R: Rng>(config: &GridConfig, rng: &mut R) -> Result<Self, Error> {
        let size = check_grid_size(config.grid_size)?;
        let odds = check_mine_odds(config.mine_odds)?;
        let grid = Self::build(size, |_| rng.gen_range(0..odds) == 0);
        debug!(
            target: "minegrid::grid",
            "generated a {0}x{0} grid with {1} mines (odds 1 in {2})",
            size, grid.mine_count(), odds
        );
        Ok(grid)
    }
    /// Builds a grid with mines at exactly the given positions. Duplicate positions are allowed.
    pub fn from_mines(size: u16, mines: &[Position]) -> Result<Self, Error> {
        let size = check_grid_size(size)?;
        let mut mask = vec![false; area(size)];
        for &mine in mines {
            let index = index_in(size, mine).ok_or(Error::OutOfBounds { position: mine, size })?;
            mask[index] = true;
        }
        Ok(Self::build(size, |position| mask[index_unchecked(size, position)]))
    }
    /// Rebuilds a grid from tiles given in row-major order, keeping their revealed and flag states.
    ///
    /// Only the mines are taken from the kinds of the given tiles: positions and adjacency counts are derived again, so the result always satisfies the grid invariants. A revealed tile loses its flag.
    pub fn from_storage(size: u16, mut storage: Vec<Tile>) -> Result<Self, Error> {
        let size = check_grid_size(size)?;
        if storage.len() != area(size) {
            return Err(Error::StorageMismatch { expected: area(size), actual: storage.len() });
        }
        for (index, tile) in storage.iter_mut().enumerate() {
            tile.position = position_of(size, index);
            if tile.revealed {
                tile.flag = Flag::NotFlagged;
            }
        }
        let mut grid = Self { size, storage, hidden_safe: 0 };
        grid.derive_counts();
        Ok(grid)
    }

    fn build(size: u16, mut is_mine: impl FnMut(Position) -> bool) -> Self {
        let storage = (0..area(size))
            .map(|index| {
                let position = position_of(size, index);
                let kind = if is_mine(position) { TileKind::Mine } else { TileKind::Blank };
                Tile::new(position, kind)
            })
            .collect();
        let mut grid = Self { size, storage, hidden_safe: 0 };
        grid.derive_counts();
        grid
    }
    // Second setup pass: turns every safe tile into a blank or a count, then recounts the hidden safe tiles.
    fn derive_counts(&mut self) {
        for index in 0..self.storage.len() {
            let tile = self.storage[index];
            if tile.is_mine() {
                continue;
            }
            let mines = self.mines_around(tile.position);
            self.storage[index].kind = TileKind::from_neighbouring_mines(mines);
        }
        self.hidden_safe = self.storage.iter().filter(|tile| tile.is_required_to_open()).count();
    }
    fn mines_around(&self, position: Position) -> u8 {
        neighbours_of(self.size, position)
            .iter()
            .flatten()
            .filter(|&&neighbour| self.storage[index_unchecked(self.size, neighbour)].is_mine())
            .fold(0, |count, _| count + 1)
    }

    /// Returns the width and height of the grid, in tiles.
    #[inline]
    pub const fn size(&self) -> u16 {
        self.size
    }
    /// Returns `true` if the position exists on this grid.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        index_in(self.size, position).is_some()
    }
    /// Returns the tile at the given position, or `None` if the position is out of bounds.
    #[inline]
    pub fn get(&self, position: Position) -> Option<&Tile> {
        index_in(self.size, position).map(|index| &self.storage[index])
    }
    fn checked_index(&self, position: Position) -> Result<usize, Error> {
        index_in(self.size, position).ok_or(Error::OutOfBounds { position, size: self.size })
    }

    /// Returns the neighbours of a tile in the order described by [`Neighbours`][neighbours], with out-of-grid slots set to `None`.
    ///
    /// [neighbours]: type.Neighbours.html "Neighbours — the neighbours of a tile"
    pub fn neighbours(&self, position: Position) -> Result<Neighbours, Error> {
        self.checked_index(position)?;
        Ok(neighbours_of(self.size, position))
    }
    /// Counts all neighbouring mines around a tile.
    ///
    /// All directly and diagonally adjacent mines are considered neighbouring. If the tile is a mine, the tile itself isn't counted.
    pub fn count_neighbouring_mines(&self, position: Position) -> Result<u8, Error> {
        self.checked_index(position)?;
        Ok(self.mines_around(position))
    }

    /// Reveals a tile and returns the outcome.
    ///
    /// - Revealed and flagged tiles are left alone, reported as `AlreadyRevealed` and `Flagged` respectively.
    /// - A mine is revealed and reported as an `Explosion`.
    /// - A number tile is revealed on its own.
    /// - A blank tile opens a clearing: the flood fill spreads through every connected blank tile and also reveals the number tiles on the border of the region, without spreading past them. Flagged tiles stop the fill.
    ///
    /// The flood fill keeps its work list on the heap, so even a 256x256 clearing doesn't grow the call stack.
    pub fn reveal(&mut self, position: Position) -> Result<RevealOutcome, Error> {
        let index = self.checked_index(position)?;
        let tile = self.storage[index];
        let outcome = if tile.revealed {
            RevealOutcome::AlreadyRevealed
        } else if tile.is_flagged() {
            RevealOutcome::Flagged
        } else {
            match tile.kind {
                TileKind::Mine => {
                    self.open(index);
                    RevealOutcome::Explosion
                }
                TileKind::Count(n) => {
                    self.open(index);
                    RevealOutcome::OpenNumber(n)
                }
                TileKind::Blank => RevealOutcome::OpenClearing(self.open_clearing(index)),
            }
        };
        trace!(target: "minegrid::grid", "reveal {} -> {:?}", position, outcome);
        Ok(outcome)
    }
    // Reveals the blank tile at `anchor` and everything reachable from it through blank tiles.
    fn open_clearing(&mut self, anchor: usize) -> NonZeroUsize {
        let mut stack = Vec::with_capacity(16);
        self.open(anchor);
        stack.push(anchor);
        let mut opened = NonZeroUsize::MIN;
        while let Some(index) = stack.pop() {
            let here = self.storage[index].position;
            for &neighbour in neighbours_of(self.size, here).iter().flatten() {
                let neighbour_index = index_unchecked(self.size, neighbour);
                let tile = self.storage[neighbour_index];
                if tile.revealed || tile.is_flagged() || tile.is_mine() {
                    continue;
                }
                self.open(neighbour_index);
                opened = opened.saturating_add(1);
                if tile.kind == TileKind::Blank {
                    stack.push(neighbour_index);
                }
            }
        }
        opened
    }
    fn open(&mut self, index: usize) {
        let tile = &mut self.storage[index];
        tile.revealed = true;
        tile.flag = Flag::NotFlagged;
        if tile.kind.is_safe() {
            self.hidden_safe -= 1;
        }
    }
    /// Places or removes a flag on a hidden tile and returns the new flag state, or `None` if the tile is revealed, in which case nothing happens.
    pub fn toggle_flag(&mut self, position: Position) -> Result<Option<Flag>, Error> {
        let index = self.checked_index(position)?;
        let tile = &mut self.storage[index];
        if tile.revealed {
            return Ok(None);
        }
        tile.flag = tile.flag.toggled();
        trace!(target: "minegrid::grid", "flag {} -> {:?}", position, tile.flag);
        Ok(Some(tile.flag))
    }
    /// Reveals every mine which is still hidden, removing flags from them. Returns the amount of mines revealed.
    ///
    /// Meant for showing the board after a loss. Safe tiles are left untouched.
    pub fn reveal_mines(&mut self) -> usize {
        let mut revealed = 0;
        for index in 0..self.storage.len() {
            let tile = self.storage[index];
            if tile.is_mine() && tile.is_hidden() {
                self.open(index);
                revealed += 1;
            }
        }
        revealed
    }

    /// Returns an iterator over every tile, in row-major order.
    #[inline]
    pub fn tiles(&self) -> slice::Iter<'_, Tile> {
        self.storage.iter()
    }
    /// Returns an iterator over a single row.
    ///
    /// # Panics
    /// Panics if the specified row is out of range.
    #[inline]
    #[track_caller]
    pub fn row(&self, row: u8) -> RowIter<'_> {
        RowIter::new(self, row)
    }
    /// Returns an iterator over the grid's rows.
    #[inline]
    pub fn rows(&self) -> GridRowsIter<'_> {
        GridRowsIter::new(self)
    }
    pub(crate) fn row_slice(&self, row: u8) -> Option<&[Tile]> {
        let width = usize::from(self.size);
        let start = usize::from(row) * width;
        self.storage.get(start..start + width)
    }

    /// Returns the amount of mines on the grid.
    pub fn mine_count(&self) -> usize {
        self.tiles().filter(|tile| tile.is_mine()).count()
    }
    /// Returns the amount of flags currently placed.
    pub fn flag_count(&self) -> usize {
        self.tiles().filter(|tile| tile.is_flagged()).count()
    }
    /// Returns the amount of safe tiles which still have to be revealed to win.
    #[inline]
    pub const fn hidden_safe_tiles(&self) -> usize {
        self.hidden_safe
    }
    /// Returns `true` if every safe tile has been revealed (the win condition), `false` otherwise.
    #[inline]
    pub const fn is_cleared(&self) -> bool {
        self.hidden_safe == 0
    }
}
impl Index<Position> for Grid {
    type Output = Tile;
    /// Returns the tile at the given position.
    ///
    /// # Panics
    /// Panics if the position is out of bounds. For a version which returns an `Option` instead, see `get`.
    #[inline]
    #[track_caller]
    fn index(&self, position: Position) -> &Self::Output {
        match self.get(position) {
            Some(tile) => tile,
            None => panic!("position {0} is out of bounds for a {1}x{1} grid", position, self.size),
        }
    }
}
impl Display for Grid {
    /// Draws the grid as text, one line per row: `#` hidden, `F` flagged, `.` blank, digits for counts and `*` for mines.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", tile.appearance().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[inline]
fn area(size: u16) -> usize {
    usize::from(size) * usize::from(size)
}
#[inline]
fn index_in(size: u16, position: Position) -> Option<usize> {
    if u16::from(position.row) < size && u16::from(position.col) < size {
        Some(index_unchecked(size, position))
    } else {
        None
    }
}
#[inline]
fn index_unchecked(size: u16, position: Position) -> usize {
    usize::from(position.row) * usize::from(size) + usize::from(position.col)
}
#[inline]
#[allow(clippy::cast_possible_truncation)] // Both coordinates are below the size, which is at most 256.
fn position_of(size: u16, index: usize) -> Position {
    let size = usize::from(size);
    Position::new((index / size) as u8, (index % size) as u8)
}
fn neighbours_of(size: u16, position: Position) -> Neighbours {
    let mut result = [None; 8];
    for (slot, (d_row, d_col)) in result.iter_mut().zip(NEIGHBOUR_OFFSETS) {
        let row = u8::try_from(i16::from(position.row) + d_row).ok();
        let col = u8::try_from(i16::from(position.col) + d_col).ok();
        if let (Some(row), Some(col)) = (row, col) {
            let neighbour = Position::new(row, col);
            if index_in(size, neighbour).is_some() {
                *slot = Some(neighbour);
            }
        }
    }
    result
}

#[cfg(feature = "serialization")]
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut s = s.serialize_struct("Grid", 2)?;
        s.serialize_field("size", &self.size)?;
        s.serialize_field("storage", &self.storage)?;
        s.end()
    }
}
#[cfg(feature = "serialization")]
impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        const FIELDS: &[&str] = &["size", "storage"];
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum StructField { Size, Storage }

        struct GridVisitor;
        impl<'de> Visitor<'de> for GridVisitor {
            type Value = Grid;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("struct Grid")
            }
            fn visit_seq<V: SeqAccess<'de>>(self, mut seq: V) -> Result<Self::Value, V::Error> {
                let size = seq.next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let storage = seq.next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Grid::from_storage(size, storage).map_err(de::Error::custom)
            }
            fn visit_map<V: MapAccess<'de>>(self, mut map: V) -> Result<Self::Value, V::Error> {
                let mut size: Option<u16> = None;
                let mut storage: Option<Vec<Tile>> = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        StructField::Size => {
                            if size.is_some() {
                                return Err(de::Error::duplicate_field("size"));
                            }
                            size = Some(map.next_value()?);
                        }
                        StructField::Storage => {
                            if storage.is_some() {
                                return Err(de::Error::duplicate_field("storage"));
                            }
                            storage = Some(map.next_value()?);
                        }
                    }
                }
                let size = size.ok_or_else(|| de::Error::missing_field("size"))?;
                let storage = storage.ok_or_else(|| de::Error::missing_field("storage"))?;
                Grid::from_storage(size, storage).map_err(de::Error::custom)
            }
        }
        d.deserialize_struct("Grid", FIELDS, GridVisitor)
    }
}
