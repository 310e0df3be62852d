//! How tiles look to a renderer.
//!
//! The crate never draws anything itself. A renderer asks each tile for its [`Appearance`][appearance] and picks the fill colour and the optional glyph from it.
//!
//! [appearance]: enum.Appearance.html "Appearance — what a renderer should draw for a tile"

use core::num::NonZeroU8;
use crate::{Tile, TileKind};

/// An opaque 24-bit colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colour of the background, which hidden tiles show through.
pub const BACKGROUND_COLOR: Rgb = Rgb(0x99, 0x99, 0x99);
/// Fill colour of revealed safe tiles.
pub const REVEALED_COLOR: Rgb = Rgb(0xCC, 0xCC, 0xCC);
/// Fill colour of flagged tiles.
pub const FLAG_COLOR: Rgb = Rgb(0xFF, 0x00, 0x00);
/// Fill colour of revealed mines.
pub const MINE_COLOR: Rgb = Rgb(0x00, 0x00, 0x00);
/// Colour of the digits drawn on number tiles.
pub const NUMBER_COLOR: Rgb = Rgb(0x00, 0x00, 0xFF);

/// What a renderer should draw for a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Appearance {
    /// Not revealed and not flagged.
    Hidden,
    /// Not revealed, with a flag on top.
    Flagged,
    /// Revealed, no neighbouring mines.
    Blank,
    /// Revealed, with a digit showing the amount of neighbouring mines.
    Number(NonZeroU8),
    /// A revealed mine.
    Mine,
}
impl Appearance {
    /// Returns the colour the tile's rectangle should be filled with.
    pub const fn fill_color(self) -> Rgb {
        match self {
            Self::Hidden => BACKGROUND_COLOR,
            Self::Flagged => FLAG_COLOR,
            Self::Blank | Self::Number(_) => REVEALED_COLOR,
            Self::Mine => MINE_COLOR,
        }
    }
    /// Returns the number to draw on top of the fill, if any.
    #[inline]
    pub const fn number(self) -> Option<NonZeroU8> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }
    /// Returns a single character standing for this appearance, as used by the text rendering of a grid.
    pub fn glyph(self) -> char {
        match self {
            Self::Hidden => '#',
            Self::Flagged => 'F',
            Self::Blank => '.',
            Self::Number(n) => char::from_digit(u32::from(n.get()), 10).unwrap_or('?'),
            Self::Mine => '*',
        }
    }
}

impl Tile {
    /// Returns what a renderer should draw for this tile.
    pub const fn appearance(&self) -> Appearance {
        if !self.revealed {
            return if self.flag.is_flagged() { Appearance::Flagged } else { Appearance::Hidden };
        }
        match self.kind {
            TileKind::Blank => Appearance::Blank,
            TileKind::Count(n) => Appearance::Number(n),
            TileKind::Mine => Appearance::Mine,
        }
    }
}
