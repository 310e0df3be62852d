//! A single game from the first click to a win or a loss.

use log::info;
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};
use crate::{Error, Flag, Grid, Position, RevealOutcome};
#[cfg(feature = "generation")]
use crate::GridConfig;

/// Where a game stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A mine was revealed. Terminal.
    Lost,
    /// Every safe tile was revealed. Terminal.
    Won,
}
impl GameStatus {
    /// Returns `true` for `Lost` and `Won`.
    #[inline]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A discrete input, already translated from pixels to grid positions.
///
/// Frontends usually get these from [`Viewport::translate`][translate], which drops clicks that miss the grid.
///
/// [translate]: struct.Viewport.html#method.translate "translate — turns a click at a pixel into an input event"
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// The player closed the window.
    Quit,
    /// Reveal the tile.
    PrimaryClick(Position),
    /// Toggle the flag on the tile.
    SecondaryClick(Position),
}

/// What happened in response to an [`InputEvent`][event].
///
/// [event]: enum.InputEvent.html "InputEvent — a discrete input"
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventResponse {
    /// The frontend should stop its event loop.
    Quit,
    /// A reveal was attempted.
    Revealed(RevealOutcome),
    /// A flag was toggled, holding the new flag, or `None` if the tile was already revealed.
    Flagged(Option<Flag>),
}

/// Owns the grid of one game together with its status.
///
/// All moves go through the session so that the status is kept in sync: a revealed mine loses the game, revealing the last safe tile wins it, and once either happened every further move is rejected with [`Error::SessionOver`][over].
///
/// # Usage
/// ```
/// # use minegrid::{GameSession, GameStatus, Grid, InputEvent, Position};
/// let grid = Grid::from_mines(2, &[Position::new(0, 0)])?;
/// let mut session = GameSession::from_grid(grid);
/// for position in [Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)] {
///     session.handle_event(InputEvent::PrimaryClick(position))?;
/// }
/// assert_eq!(session.status(), GameStatus::Won);
/// assert!(session.handle_event(InputEvent::PrimaryClick(Position::new(0, 0))).is_err());
/// # Ok::<(), minegrid::Error>(())
/// ```
///
/// [over]: enum.Error.html#variant.SessionOver "SessionOver — the game is already over"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    grid: Grid,
    status: GameStatus,
}
impl GameSession {
    /// Starts a game on a freshly generated grid.
    #[cfg(feature = "generation")]
    pub fn new(config: &GridConfig, seed: u64) -> Result<Self, Error> {
        Grid::generate(config, seed).map(Self::from_grid)
    }
    /// Starts a game on the given grid.
    ///
    /// A grid with a revealed mine is already lost, and a grid without any hidden safe tile is already won.
    pub fn from_grid(grid: Grid) -> Self {
        let status = if grid.tiles().any(|tile| tile.is_mine() && tile.is_revealed()) {
            GameStatus::Lost
        } else if grid.is_cleared() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        Self { grid, status }
    }
    /// Returns the grid, for rendering.
    #[inline]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }
    /// Consumes the session and returns its grid.
    #[inline]
    pub fn into_grid(self) -> Grid {
        self.grid
    }
    /// Returns the status of the game.
    #[inline]
    pub const fn status(&self) -> GameStatus {
        self.status
    }
    fn ensure_in_progress(&self) -> Result<(), Error> {
        if self.status.is_finished() {
            Err(Error::SessionOver(self.status))
        } else {
            Ok(())
        }
    }
    /// Reveals a tile and updates the status accordingly.
    pub fn reveal(&mut self, position: Position) -> Result<RevealOutcome, Error> {
        self.ensure_in_progress()?;
        let outcome = self.grid.reveal(position)?;
        if outcome == RevealOutcome::Explosion {
            self.status = GameStatus::Lost;
            info!(target: "minegrid::session", "mine revealed at {}, game lost", position);
        } else if self.grid.is_cleared() {
            self.status = GameStatus::Won;
            info!(target: "minegrid::session", "every safe tile revealed, game won");
        }
        Ok(outcome)
    }
    /// Toggles the flag on a hidden tile. See [`Grid::toggle_flag`][toggle_flag].
    ///
    /// [toggle_flag]: struct.Grid.html#method.toggle_flag "toggle_flag — places or removes a flag on a hidden tile"
    pub fn toggle_flag(&mut self, position: Position) -> Result<Option<Flag>, Error> {
        self.ensure_in_progress()?;
        self.grid.toggle_flag(position)
    }
    /// Applies an input event. `Quit` is always accepted, clicks only while the game is in progress.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<EventResponse, Error> {
        match event {
            InputEvent::Quit => Ok(EventResponse::Quit),
            InputEvent::PrimaryClick(position) => self.reveal(position).map(EventResponse::Revealed),
            InputEvent::SecondaryClick(position) => self.toggle_flag(position).map(EventResponse::Flagged),
        }
    }
}
