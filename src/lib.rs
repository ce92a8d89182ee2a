//! Plan which valves to open, and in what order, to release as much pressure as possible from a
//! volcano before it erupts.
//!
//! A [`Volcano`] is loaded from parsed room records (or the puzzle text), [`ShortestPaths`]
//! reduces it to distances between the rooms worth visiting, and [`best_itinerary`] or
//! [`best_dual_itinerary`] search those for the best plan.

pub mod cli;
pub mod dual;
pub mod error;
pub mod itinerary;
pub mod paths;
pub mod volcano;

pub use cli::{init_logger, CliArgs};
pub use dual::{best_dual_itinerary, DualItinerary, DUAL_TIME_BUDGET};
pub use error::{Error, Result};
pub use itinerary::{best_itinerary, Itinerary, SOLO_TIME_BUDGET};
pub use paths::{Path, ShortestPaths};
pub use volcano::{RoomHandle, RoomRecord, Volcano, START_ROOM};
