use std::collections::HashSet;

use anyhow::{Context, Result};
use clap::Parser;
use valve_itinerary::{best_itinerary, CliArgs, ShortestPaths, Volcano, SOLO_TIME_BUDGET};

fn main() -> Result<()> {
    valve_itinerary::init_logger();
    let args = CliArgs::parse();
    let input = args
        .read_input()
        .with_context(|| format!("Failed to read valve scan from {}.", args.input_name()))?;
    let volcano = Volcano::parse(&input, &args.start)
        .with_context(|| format!("Failed to load volcano from {}.", args.input_name()))?;
    let paths = ShortestPaths::new(&volcano)?;

    let time = args.time_budget.unwrap_or(SOLO_TIME_BUDGET);
    let best = best_itinerary(volcano.start(), &paths, time, &HashSet::new())?;
    log::info!("route: {}", best.route(&volcano).join(" -> "));

    println!("{}", best.released());
    Ok(())
}
