use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("room {room} leads to undefined room {neighbor}")]
    UndefinedNeighbor { room: String, neighbor: String },

    #[error("start room {0} is not defined")]
    MissingStart(String),

    #[error("room {0} is defined more than once")]
    DuplicateRoom(String),

    #[error("too many rooms: {0} (at most 256)")]
    TooManyRooms(usize),

    #[error("unexpected line format: {0}")]
    BadLine(String),

    #[error("bad flow rate in line {line:?}: {source}")]
    BadFlowRate { line: String, source: ParseIntError },

    #[error("no route from room {from} to room {to}")]
    UnreachableRoom { from: String, to: String },

    #[error("time budget must not be negative, given {0}")]
    InvalidBudget(i64),

    #[error("released pressure overflows after opening {rooms} valve(s)")]
    PressureOverflow { rooms: usize },
}
