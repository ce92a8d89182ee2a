use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::paths::ShortestPaths;
use crate::volcano::{RoomHandle, Volcano};

/// Minutes one agent has on its own.
pub const SOLO_TIME_BUDGET: i64 = 30;

/// A plan for one agent: the rooms whose valves it opens, in order, after the start room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    visited: Vec<RoomHandle>,
    remaining: usize,
    released: usize,
    // Combined flow rate of every valve opened so far.
    flow: usize,
}

impl Itinerary {
    fn new(start: RoomHandle, time: usize) -> Self {
        Itinerary { visited: vec![start], remaining: time, released: 0, flow: 0 }
    }

    /// Every room visited, starting with the start room.
    pub fn visited(&self) -> &[RoomHandle] {
        &self.visited
    }

    /// The rooms whose valves were opened, i.e. everything but the start room.
    pub fn opened(&self) -> &[RoomHandle] {
        &self.visited[1..]
    }

    pub fn released(&self) -> usize {
        self.released
    }

    pub fn route<'a>(&self, volcano: &'a Volcano) -> Vec<&'a str> {
        self.visited.iter().map(|&rh| volcano.name(rh)).collect()
    }

    fn current(&self) -> RoomHandle {
        self.visited[self.visited.len() - 1]
    }

    // Spend `minutes` walking to `room` and opening its valve. Valves that are already open keep
    // releasing pressure in the meantime. None if the totals don't fit in a usize.
    fn open(&self, room: RoomHandle, minutes: usize, flow: usize) -> Option<Self> {
        let mut visited = self.visited.clone();
        visited.push(room);
        Some(Itinerary {
            visited,
            remaining: self.remaining - minutes,
            released: self.flow.checked_mul(minutes)?.checked_add(self.released)?,
            flow: self.flow.checked_add(flow)?,
        })
    }

    // Let the open valves run until time is up.
    fn idle(&self) -> Option<Self> {
        Some(Itinerary {
            visited: self.visited.clone(),
            remaining: 0,
            released: self.flow.checked_mul(self.remaining)?.checked_add(self.released)?,
            flow: self.flow,
        })
    }
}

struct Search<'a> {
    paths: &'a ShortestPaths,
    excluded: &'a HashSet<RoomHandle>,
    nstates: usize,
}

impl Search<'_> {
    // Depth-first over every order of opening valves that fits in the remaining time. Each branch
    // gets its own copy of the itinerary, so siblings never see each other's visits.
    fn explore(&mut self, itinerary: &Itinerary) -> Result<Itinerary> {
        self.nstates += 1;
        let paths = self.paths;
        let excluded = self.excluded;

        let mut best = itinerary.idle().ok_or_else(|| overflow(itinerary))?;
        for path in paths.paths_from(itinerary.current()) {
            let room = path.to();
            let minutes = path.cost() + 1;

            // The valve needs at least a minute left once it's open to release anything.
            if minutes >= itinerary.remaining
                || excluded.contains(&room)
                || itinerary.visited.contains(&room)
            {
                continue;
            }

            let next = itinerary
                .open(room, minutes, paths.flow(room))
                .ok_or_else(|| overflow(itinerary))?;
            let candidate = self.explore(&next)?;
            if candidate.released > best.released {
                best = candidate;
            }
        }
        Ok(best)
    }
}

fn overflow(itinerary: &Itinerary) -> Error {
    Error::PressureOverflow { rooms: itinerary.opened().len() }
}

/// Find the itinerary from `start` that releases the most pressure in `time_budget` minutes,
/// treating the `excluded` valves as already open.
///
/// Every feasible order is tried; ties go to the first one found, following the order of
/// [`ShortestPaths::paths_from`].
pub fn best_itinerary(
    start: RoomHandle,
    paths: &ShortestPaths,
    time_budget: i64,
    excluded: &HashSet<RoomHandle>,
) -> Result<Itinerary> {
    let Ok(time) = usize::try_from(time_budget) else {
        return Err(Error::InvalidBudget(time_budget));
    };

    let mut search = Search { paths, excluded, nstates: 0 };
    let best = search.explore(&Itinerary::new(start, time))?;
    log::debug!(
        "nstates={} time={} excluded={} released={}",
        search.nstates,
        time,
        excluded.len(),
        best.released,
    );
    Ok(best)
}
