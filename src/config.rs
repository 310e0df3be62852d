//! Runtime configuration of a game.

#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};
use crate::Error;

/// The largest supported grid size. Coordinates are stored in a `u8`.
pub const MAX_GRID_SIZE: u16 = 256;
/// The smallest mine odds accepted. Odds of 1 would fill the grid with mines.
pub const MIN_MINE_ODDS: u32 = 2;

/// The three knobs of a game: how many tiles, how many mines and how many pixels.
///
/// Loadable from any serde format with missing keys falling back to the defaults, which are a 20x20 grid, a 1-in-6 chance of a mine per tile and a 500px square screen.
///
/// # Usage
/// ```
/// # use minegrid::{GridConfig, Error};
/// let config = GridConfig { grid_size: 25, ..GridConfig::default() };
/// assert_eq!(config.validate(), Ok(config));
///
/// let broken = GridConfig { mine_odds: 1, ..GridConfig::default() };
/// assert_eq!(broken.validate(), Err(Error::InvalidMineOdds(1)));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct GridConfig {
    /// Width and height of the grid, in tiles. Must be in `1..=256`.
    pub grid_size: u16,
    /// Each tile becomes a mine with a probability of `1 / mine_odds`. Must be at least 2.
    pub mine_odds: u32,
    /// Width and height of the drawing area, in pixels. Must be at least `grid_size`.
    pub screen_size: u32,
}
impl GridConfig {
    /// Returns the configuration unchanged if every value is in range, or the first violation found.
    pub fn validate(self) -> Result<Self, Error> {
        check_grid_size(self.grid_size)?;
        check_mine_odds(self.mine_odds)?;
        if self.screen_size < u32::from(self.grid_size) {
            return Err(Error::ScreenTooSmall {
                screen_size: self.screen_size,
                grid_size: self.grid_size,
            });
        }
        Ok(self)
    }
}
impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            mine_odds: 6,
            screen_size: 500,
        }
    }
}

pub(crate) fn check_grid_size(size: u16) -> Result<u16, Error> {
    if (1..=MAX_GRID_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(Error::InvalidGridSize(size))
    }
}

pub(crate) fn check_mine_odds(odds: u32) -> Result<u32, Error> {
    if odds >= MIN_MINE_ODDS {
        Ok(odds)
    } else {
        Err(Error::InvalidMineOdds(odds))
    }
}
