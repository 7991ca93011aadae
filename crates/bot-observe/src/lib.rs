//! `bot-observe`: what an agent can see during one tick.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`raster`]      | `Raster` 2-D code grid, `Layer` plane names                |
//! | [`observation`] | `Observation` (legal actions + planes), `TimeStep`         |
//! | [`reader`]      | `CellSet`, mask extraction by faction or unit type         |
//! | [`select`]      | centroid, nearest-to-reference, extreme-by-axis selectors  |
//! | [`error`]       | `ObserveError`, `ObserveResult<T>`                         |
//!
//! Everything here is read-only with respect to the observation.  The reader
//! and selectors are pure functions; the only owned state is the
//! observation itself, which the environment replaces every tick.

pub mod error;
pub mod observation;
pub mod raster;
pub mod reader;
pub mod select;


pub use error::{ObserveError, ObserveResult};
pub use observation::{Observation, StepKind, TimeStep};
pub use raster::{Layer, Raster};
pub use reader::{CellSet, cells_matching, faction_cells, own_units_of_type, unit_cells};
pub use select::{Axis, Extremum, centroid, extreme, nearest, nearest_outside};
