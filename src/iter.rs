//! Iterators useful for traversing a grid row by row, the way renderers draw it.
//!
//! Currently available:
//! - [`RowIter`][rowiter] — iterates over a single grid row
//! - [`GridRowsIter`][gri] — iterates over the rows of a grid (each item is a [`RowIter`][rowiter])
//!
//! For a flat walk over every tile, use [`Grid::tiles`][tiles].
//!
//! [rowiter]: struct.RowIter.html "RowIter — iterates over a single grid row"
//! [gri]: struct.GridRowsIter.html "GridRowsIter — an iterator over the rows of a grid"
//! [tiles]: struct.Grid.html#method.tiles "tiles — iterates over every tile in row-major order"

use core::{
    ops::{Index, Range},
    iter::FusedIterator,
};
use crate::{
    Grid,
    Tile,
};

/// Iterates over a single grid row, from left to right.
///
/// Can also be indexed by column to pull arbitrary tiles from the row, regardless of the iterator state.
///
/// # Usage
/// ```
/// # use minegrid::{Grid, Position};
/// let grid = Grid::from_mines(4, &[Position::new(3, 2)])?; // Create a grid with a single mine
/// let mut row = grid.row(3); // Create an iterator over the fourth row
/// let mine = row.nth(2) // Find the third tile in the row
///     .unwrap(); // Get rid of the Option wrap
/// assert!(mine.is_mine());
/// assert_eq!(row.len(), 1); // Only the last column is left
/// # Ok::<(), minegrid::Error>(())
/// ```
#[derive(Clone)]
pub struct RowIter<'g> {
    tiles: &'g [Tile],
    row: u8,
    index: Range<usize>,
}
impl<'g> RowIter<'g> {
    /// Creates an iterator over the specified row of the specified grid.
    ///
    /// # Panics
    /// Panics if the row is out of range.
    #[track_caller]
    pub fn new(grid: &'g Grid, row: u8) -> Self {
        match grid.row_slice(row) {
            Some(tiles) => Self { tiles, row, index: 0..tiles.len() },
            None => panic!("row {0} is out of bounds for a {1}x{1} grid", row, grid.size()),
        }
    }
    /// Returns the tile at the specified column, or `None` if such a column doesn't exist.
    #[inline]
    pub fn get(&self, column: u8) -> Option<&'g Tile> {
        self.tiles.get(usize::from(column))
    }
    /// Returns the index of the row this iterator walks.
    #[inline]
    pub const fn row(&self) -> u8 {
        self.row
    }
}
impl<'g> Iterator for RowIter<'g> {
    type Item = &'g Tile;
    fn next(&mut self) -> Option<Self::Item> {
        let column = self.index.next()?;
        self.tiles.get(column)
    }
    /// Returns the remaining amount of tiles to iterate upon.
    ///
    /// See `len` from the `ExactSizeIterator` trait.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl DoubleEndedIterator for RowIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let column = self.index.next_back()?;
        self.tiles.get(column)
    }
}
impl ExactSizeIterator for RowIter<'_> {
    /// Returns the remaining amount of tiles to iterate upon.
    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }
}
impl FusedIterator for RowIter<'_> {}
impl Index<u8> for RowIter<'_> {
    type Output = Tile;
    /// Returns the tile at the specified column.
    ///
    /// Used as a convenience function, allowing you to write `grid.row(y)[x]` to find specific tiles.
    #[inline]
    #[track_caller]
    fn index(&self, column: u8) -> &Tile {
        &self.tiles[usize::from(column)]
    }
}

/// An iterator over the rows of a grid, from top to bottom.
///
/// # Usage
/// ```
/// # use minegrid::{Grid, Position};
/// let grid = Grid::from_mines(5, &[Position::new(3, 1)])?;
/// let mut row_with_mine = None; // Keep track of our findings using an Option
/// for mut row in grid.rows() { // In each row...
///     if row.any(|tile| tile.is_mine()) { // If the row contains a mine...
///         row_with_mine = Some(row.row()); //...take the row number out of the loop.
///     }
/// }
/// assert_eq!(row_with_mine, Some(3)); // We indeed have found a mine in the 4th row.
/// # Ok::<(), minegrid::Error>(())
/// ```
#[derive(Clone)]
pub struct GridRowsIter<'g> {
    grid: &'g Grid,
    index: Range<u16>,
}
impl<'g> GridRowsIter<'g> {
    /// Returns an iterator over the specified grid's rows.
    #[inline]
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid, index: 0..grid.size() }
    }
    #[allow(clippy::cast_possible_truncation)] // Rows are below the grid size, which is at most 256.
    fn row_at(&self, row: u16) -> RowIter<'g> {
        self.grid.row(row as u8)
    }
}
impl<'g> Iterator for GridRowsIter<'g> {
    type Item = RowIter<'g>;
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.index.next()?;
        Some(self.row_at(row))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl DoubleEndedIterator for GridRowsIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let row = self.index.next_back()?;
        Some(self.row_at(row))
    }
}
impl ExactSizeIterator for GridRowsIter<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }
}
impl FusedIterator for GridRowsIter<'_> {}
