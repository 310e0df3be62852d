//! Translation between screen pixels and grid positions.
//!
//! The grid is drawn as a square of `grid_size` cells, each `screen_size / grid_size` pixels wide, anchored at the top left corner of the screen. When the screen size isn't a multiple of the grid size, a strip of unused pixels remains on the right and at the bottom; clicks there are not on the grid.

use log::trace;
use crate::{Error, GridConfig, InputEvent, Position};

/// A rectangle on the screen, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

/// The mouse button behind a click.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button. Reveals tiles.
    Primary,
    /// Usually the right button. Toggles flags.
    Secondary,
}

/// Maps pixels to grid positions and back for a validated configuration.
///
/// # Usage
/// ```
/// # use minegrid::{GridConfig, InputEvent, PointerButton, Position, Viewport};
/// let viewport = Viewport::new(&GridConfig::default())?; // 20x20 grid on 500px, 25px per cell
/// assert_eq!(viewport.cell_size(), 25);
/// assert_eq!(viewport.tile_at(60, 30), Some(Position::new(1, 2)));
/// assert_eq!(
///     viewport.translate(PointerButton::Secondary, 499, 0),
///     Some(InputEvent::SecondaryClick(Position::new(0, 19)))
/// );
/// assert_eq!(viewport.tile_at(-1, 10), None);
/// # Ok::<(), minegrid::Error>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    grid_size: u16,
    cell_size: u32,
}
impl Viewport {
    /// Creates a viewport for the given configuration, validating it first.
    pub fn new(config: &GridConfig) -> Result<Self, Error> {
        let config = config.validate()?;
        Ok(Self {
            grid_size: config.grid_size,
            cell_size: config.screen_size / u32::from(config.grid_size),
        })
    }
    /// Returns the width and height of a single cell, in pixels.
    #[inline]
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }
    /// Returns the width and height of the area covered by the grid, in pixels.
    #[inline]
    pub fn grid_extent(&self) -> u32 {
        self.cell_size * u32::from(self.grid_size)
    }
    /// Returns the position of the tile under a pixel, or `None` if the pixel isn't on the grid.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<Position> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        if x >= self.grid_extent() || y >= self.grid_extent() {
            return None;
        }
        let row = u8::try_from(y / self.cell_size).ok()?;
        let col = u8::try_from(x / self.cell_size).ok()?;
        Some(Position::new(row, col))
    }
    /// Returns the rectangle a tile occupies on the screen, or `None` if the position is outside of the grid.
    pub fn tile_rect(&self, position: Position) -> Option<PixelRect> {
        if u16::from(position.row) >= self.grid_size || u16::from(position.col) >= self.grid_size {
            return None;
        }
        Some(PixelRect {
            x: u32::from(position.col) * self.cell_size,
            y: u32::from(position.row) * self.cell_size,
            w: self.cell_size,
            h: self.cell_size,
        })
    }
    /// Turns a click at a pixel into an input event, or `None` if the click missed the grid.
    pub fn translate(&self, button: PointerButton, x: i32, y: i32) -> Option<InputEvent> {
        let Some(position) = self.tile_at(x, y) else {
            trace!(target: "minegrid::viewport", "click at ({}, {}) is off the grid", x, y);
            return None;
        };
        Some(match button {
            PointerButton::Primary => InputEvent::PrimaryClick(position),
            PointerButton::Secondary => InputEvent::SecondaryClick(position),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(grid_size: u16, screen_size: u32) -> Viewport {
        Viewport::new(&GridConfig { grid_size, screen_size, ..GridConfig::default() }).unwrap()
    }

    #[test]
    fn leftover_pixels_are_off_the_grid() {
        // 510 / 20 = 25, so pixels 500..510 are not covered by any cell.
        let viewport = viewport(20, 510);
        assert_eq!(viewport.grid_extent(), 500);
        assert_eq!(viewport.tile_at(499, 499), Some(Position::new(19, 19)));
        assert_eq!(viewport.tile_at(500, 10), None);
        assert_eq!(viewport.tile_at(10, 505), None);
    }

    #[test]
    fn rect_round_trips_through_tile_at() {
        let viewport = viewport(25, 500);
        let position = Position::new(7, 13);
        let rect = viewport.tile_rect(position).unwrap();
        assert_eq!(rect, PixelRect { x: 260, y: 140, w: 20, h: 20 });
        assert_eq!(viewport.tile_at(rect.x as i32 + 19, rect.y as i32 + 19), Some(position));
        assert_eq!(viewport.tile_rect(Position::new(25, 0)), None);
    }

    #[test]
    fn largest_grid_on_a_tight_screen() {
        let viewport = viewport(256, 256);
        assert_eq!(viewport.cell_size(), 1);
        assert_eq!(viewport.tile_at(255, 0), Some(Position::new(0, 255)));
        assert_eq!(viewport.tile_at(256, 0), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GridConfig { grid_size: 300, ..GridConfig::default() };
        assert_eq!(Viewport::new(&config), Err(Error::InvalidGridSize(300)));
    }

    #[test]
    fn buttons_map_to_events() {
        let viewport = viewport(10, 100);
        assert_eq!(
            viewport.translate(PointerButton::Primary, 15, 95),
            Some(InputEvent::PrimaryClick(Position::new(9, 1)))
        );
        assert_eq!(viewport.translate(PointerButton::Primary, 15, -3), None);
    }
}
