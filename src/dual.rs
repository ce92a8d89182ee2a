use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::itinerary::{best_itinerary, Itinerary};
use crate::paths::ShortestPaths;
use crate::volcano::RoomHandle;

/// Minutes each agent has once four are spent teaching the elephant.
pub const DUAL_TIME_BUDGET: i64 = 26;

/// Itineraries for two agents working at the same time, e.g. you and an elephant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualItinerary {
    pub first: Itinerary,
    pub second: Itinerary,
}

impl DualItinerary {
    pub fn released(&self) -> usize {
        self.first.released() + self.second.released()
    }
}

/// Plan the best itinerary for the first agent on its own, then the best itinerary for the second
/// agent over the valves the first one left closed.
///
/// This isn't guaranteed to find the best split of valves between the two agents. If the first
/// agent has time to open every valve, the second one gets nothing to do.
pub fn best_dual_itinerary(
    start: RoomHandle,
    paths: &ShortestPaths,
    time_budget: i64,
) -> Result<DualItinerary> {
    let first = best_itinerary(start, paths, time_budget, &HashSet::new())?;
    let claimed: HashSet<RoomHandle> = first.opened().iter().copied().collect();
    let second = best_itinerary(start, paths, time_budget, &claimed)?;
    if first.released().checked_add(second.released()).is_none() {
        return Err(Error::PressureOverflow { rooms: first.opened().len() + second.opened().len() });
    }
    log::debug!(
        "first agent released {}, second agent released {}",
        first.released(),
        second.released(),
    );
    Ok(DualItinerary { first, second })
}
