use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::error::{Error, Result};

/// Name of the room every agent starts in.
pub const START_ROOM: &str = "AA";

// RoomHandle is a u8.
const MAX_ROOMS: usize = u8::MAX as usize + 1;

/// One room as described by the input, before neighbor names are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    pub name: String,
    pub flow: usize,
    pub leads_to: Vec<String>,
}

impl RoomRecord {
    pub fn new(name: &str, flow: usize, leads_to: &[&str]) -> Self {
        RoomRecord {
            name: name.to_string(),
            flow,
            leads_to: leads_to.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FromStr for RoomRecord {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        // eg: Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
        static LINE_RE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^Valve ([A-Z]{2}) has flow rate=(\d+); tunnels? leads? to valves? ([A-Z]{2}(?:, [A-Z]{2})*)$").unwrap()
        });

        let Some(caps) = LINE_RE.captures(line.trim_end()) else {
            return Err(Error::BadLine(line.to_string()));
        };
        let flow = caps[2].parse().map_err(|source| Error::BadFlowRate {
            line: line.to_string(),
            source,
        })?;
        Ok(RoomRecord {
            name: caps[1].to_string(),
            flow,
            leads_to: caps[3].split(", ").map(str::to_string).collect(),
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomHandle(u8);

impl RoomHandle {
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for RoomHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct Room {
    name: String,
    flow: usize,
    leads_to: Vec<RoomHandle>,
}

/// The tunnel graph. Immutable once loaded.
#[derive(Debug)]
pub struct Volcano {
    rooms: Vec<Room>,
    handle_for: HashMap<String, RoomHandle>,
    start: RoomHandle,
}

impl Volcano {
    /// Build the graph from already-parsed records. Handles are assigned in record order.
    pub fn load<I>(records: I, start: &str) -> Result<Self>
    where
        I: IntoIterator<Item = RoomRecord>,
    {
        let records: Vec<RoomRecord> = records.into_iter().collect();
        if records.len() > MAX_ROOMS {
            return Err(Error::TooManyRooms(records.len()));
        }

        let mut handle_for: HashMap<String, RoomHandle> = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            if handle_for.insert(record.name.clone(), RoomHandle(i as u8)).is_some() {
                return Err(Error::DuplicateRoom(record.name.clone()));
            }
        }

        let rooms = records
            .into_iter()
            .map(|record| -> Result<Room> {
                let leads_to = record
                    .leads_to
                    .iter()
                    .map(|name| {
                        handle_for.get(name).copied().ok_or_else(|| Error::UndefinedNeighbor {
                            room: record.name.clone(),
                            neighbor: name.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Room { name: record.name, flow: record.flow, leads_to })
            })
            .collect::<Result<Vec<_>>>()?;

        let Some(&start) = handle_for.get(start) else {
            return Err(Error::MissingStart(start.to_string()));
        };

        let volcano = Volcano { rooms, handle_for, start };
        log::debug!(
            "loaded {} rooms, {} with a working valve",
            volcano.room_count(),
            volcano.handles().filter(|&rh| volcano.flow(rh) > 0).count(),
        );
        Ok(volcano)
    }

    /// Parse the puzzle text and load it with the given start room. Blank lines are ignored.
    pub fn parse(s: &str, start: &str) -> Result<Self> {
        let records = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(RoomRecord::from_str)
            .collect::<Result<Vec<_>>>()?;
        Self::load(records, start)
    }

    pub fn start(&self) -> RoomHandle {
        self.start
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn handle(&self, name: &str) -> Option<RoomHandle> {
        self.handle_for.get(name).copied()
    }

    pub fn name(&self, rh: RoomHandle) -> &str {
        &self.rooms[rh.as_usize()].name
    }

    pub fn flow(&self, rh: RoomHandle) -> usize {
        self.rooms[rh.as_usize()].flow
    }

    pub fn neighbors(&self, rh: RoomHandle) -> &[RoomHandle] {
        &self.rooms[rh.as_usize()].leads_to
    }

    pub fn handles(&self) -> impl Iterator<Item = RoomHandle> + '_ {
        (0..self.rooms.len()).map(|i| RoomHandle(i as u8))
    }

    /// The start room followed by every room with a working valve, in load order.
    pub fn interesting_rooms(&self) -> Vec<RoomHandle> {
        let mut rooms = vec![self.start];
        rooms.extend(self.handles().filter(|&rh| rh != self.start && self.flow(rh) > 0));
        rooms
    }
}

impl FromStr for Volcano {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, START_ROOM)
    }
}
