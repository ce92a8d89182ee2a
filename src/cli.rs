use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::volcano::START_ROOM;

/// Work out how much pressure can be released from the volcano's valves before it erupts.
///
/// Set RUST_LOG=debug to see the shortest paths and how many states were searched.
#[derive(Debug, Parser)]
pub struct CliArgs {
    /// File with the valve scan. Read from stdin if omitted.
    pub input_path: Option<PathBuf>,

    /// Room to start in.
    #[arg(long, default_value = START_ROOM)]
    pub start: String,

    /// Minutes until the eruption.
    #[arg(long = "time", allow_negative_numbers = true)]
    pub time_budget: Option<i64>,
}

impl CliArgs {
    pub fn read_input(&self) -> io::Result<String> {
        match &self.input_path {
            Some(path) => std::fs::read_to_string(path),
            None => io::read_to_string(io::stdin().lock()),
        }
    }

    pub fn input_name(&self) -> String {
        match &self.input_path {
            Some(path) => path.display().to_string(),
            None => "stdin".to_string(),
        }
    }
}

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
