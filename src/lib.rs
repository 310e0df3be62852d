//! The grid engine of a Minesweeper game.
//!
//! The crate owns everything about a game that isn't drawing or input handling: random mine placement, adjacency counts, neighbour lookup, flood-fill reveal of clearings, flags, and the lost/won status of a session. A frontend built on a graphics toolkit only has to translate clicks with a [`Viewport`][viewport], feed them to a [`GameSession`][session] and draw each tile's [`Appearance`][appearance].
//!
//! # Feature gates
//! - `std` — enable a dependency on the hosted standard library (**enabled by default**)
//!
//!   Without this feature, the crate only depends on `core` and `alloc`, so it can run wherever a memory allocator is available.
//!
//! - `generation` — enable random generation (**enabled by default**)
//!
//!   Enables the dependency on `rand`, used for generating random grids from a seed. Disable to remove said dependency if you build grids yourself with [`Grid::from_mines`][from_mines].
//!
//! - `serialization` — enable support for serialization (**enabled by default**, disable to speed up compilation)
//!
//!   Enables the dependency on `serde` and its derive macros, which allows one to store a grid or a configuration in any format supported by serde. See the `serde` crate for more.
//!
//! # Logging
//! Events are reported through the `log` facade under the `minegrid::*` targets: `debug` for generated grids, `trace` for every reveal and flag, `info` when a session ends. Install any logger to see them.
//!
//! [viewport]: struct.Viewport.html "Viewport — maps pixels to grid positions and back"
//! [session]: struct.GameSession.html "GameSession — owns the grid of one game together with its status"
//! [appearance]: enum.Appearance.html "Appearance — what a renderer should draw for a tile"
//! [from_mines]: struct.Grid.html#method.from_mines "from_mines — builds a grid with mines at exactly the given positions"

#![warn(clippy::pedantic, clippy::cargo, clippy::nursery)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
extern crate alloc;

mod appearance;
pub use appearance::*;
pub mod config;
pub use config::GridConfig;
mod error;
pub use error::*;
mod grid;
pub use grid::*;
pub mod iter;
pub use iter::*;
mod session;
pub use session::*;
mod tile;
pub use tile::*;
mod viewport;
pub use viewport::*;
