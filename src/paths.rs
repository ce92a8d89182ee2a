use std::collections::{HashMap, VecDeque};

use crate::error::{Error, Result};
use crate::volcano::{RoomHandle, Volcano};

/// A shortest route between two rooms, both endpoints included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    rooms: Vec<RoomHandle>,
}

impl Path {
    fn new(rooms: Vec<RoomHandle>) -> Self {
        debug_assert!(!rooms.is_empty());
        Path { rooms }
    }

    pub fn from(&self) -> RoomHandle {
        self.rooms[0]
    }

    pub fn to(&self) -> RoomHandle {
        self.rooms[self.rooms.len() - 1]
    }

    /// Number of tunnels walked. Opening the valve at the end isn't included.
    pub fn cost(&self) -> usize {
        self.rooms.len() - 1
    }

    pub fn rooms(&self) -> &[RoomHandle] {
        &self.rooms
    }
}

/// Shortest paths from each interesting room to every room with a working valve.
///
/// Rooms without a valve only ever show up in the middle of a path. Alongside the paths, the
/// flow rate of each interesting room is kept so the search doesn't need the whole volcano.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    paths_from: HashMap<RoomHandle, Vec<Path>>,
    flow_for: HashMap<RoomHandle, usize>,
    valves: Vec<RoomHandle>,
}

impl ShortestPaths {
    pub fn new(volcano: &Volcano) -> Result<Self> {
        Self::between(volcano, &volcano.interesting_rooms())
    }

    /// Compute paths from every room in `interesting` to every room in it that has a working
    /// valve. Paths under each source are ordered like `interesting`.
    pub fn between(volcano: &Volcano, interesting: &[RoomHandle]) -> Result<Self> {
        let mut destinations: Vec<RoomHandle> = Vec::new();
        for &rh in interesting {
            if volcano.flow(rh) > 0 && !destinations.contains(&rh) {
                destinations.push(rh);
            }
        }

        let mut paths_from: HashMap<RoomHandle, Vec<Path>> = HashMap::new();
        let mut flow_for: HashMap<RoomHandle, usize> = HashMap::new();
        for &src in interesting {
            if paths_from.contains_key(&src) {
                continue;
            }
            flow_for.insert(src, volcano.flow(src));

            let came_from = breadth_first(volcano, src);
            let mut paths = Vec::with_capacity(destinations.len());
            for &dst in destinations.iter().filter(|&&dst| dst != src) {
                let Some(path) = trace(&came_from, src, dst) else {
                    return Err(Error::UnreachableRoom {
                        from: volcano.name(src).to_string(),
                        to: volcano.name(dst).to_string(),
                    });
                };
                paths.push(path);
            }
            log::debug!(
                "{}: {}",
                volcano.name(src),
                paths
                    .iter()
                    .map(|p| format!("{}={}", volcano.name(p.to()), p.cost()))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
            paths_from.insert(src, paths);
        }

        Ok(ShortestPaths { paths_from, flow_for, valves: destinations })
    }

    /// Paths leaving `src`. Empty if `src` isn't interesting.
    pub fn paths_from(&self, src: RoomHandle) -> &[Path] {
        self.paths_from.get(&src).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, src: RoomHandle, dst: RoomHandle) -> Option<&Path> {
        self.paths_from(src).iter().find(|p| p.to() == dst)
    }

    pub fn flow(&self, rh: RoomHandle) -> usize {
        self.flow_for.get(&rh).copied().unwrap_or(0)
    }

    /// Every room with a working valve that paths lead to, in the order they were given.
    pub fn valves(&self) -> &[RoomHandle] {
        &self.valves
    }
}

// Unweighted edges, so the first time BFS reaches a room is along a shortest route. Each entry
// holds the room it was reached from; the source points at itself.
fn breadth_first(volcano: &Volcano, src: RoomHandle) -> Vec<Option<RoomHandle>> {
    let mut came_from: Vec<Option<RoomHandle>> = vec![None; volcano.room_count()];
    let mut frontier: VecDeque<RoomHandle> = VecDeque::new();

    came_from[src.as_usize()] = Some(src);
    frontier.push_back(src);
    while let Some(room) = frontier.pop_front() {
        for &next in volcano.neighbors(room) {
            if came_from[next.as_usize()].is_none() {
                came_from[next.as_usize()] = Some(room);
                frontier.push_back(next);
            }
        }
    }
    came_from
}

fn trace(came_from: &[Option<RoomHandle>], src: RoomHandle, dst: RoomHandle) -> Option<Path> {
    let mut rooms = vec![dst];
    let mut cur = dst;
    while cur != src {
        cur = came_from[cur.as_usize()]?;
        rooms.push(cur);
    }
    rooms.reverse();
    Some(Path::new(rooms))
}
