use anyhow::{Context, Result};
use clap::Parser;
use valve_itinerary::{best_dual_itinerary, CliArgs, ShortestPaths, Volcano, DUAL_TIME_BUDGET};

fn main() -> Result<()> {
    valve_itinerary::init_logger();
    let args = CliArgs::parse();
    let input = args
        .read_input()
        .with_context(|| format!("Failed to read valve scan from {}.", args.input_name()))?;
    let volcano = Volcano::parse(&input, &args.start)
        .with_context(|| format!("Failed to load volcano from {}.", args.input_name()))?;
    let paths = ShortestPaths::new(&volcano)?;

    let time = args.time_budget.unwrap_or(DUAL_TIME_BUDGET);
    let dual = best_dual_itinerary(volcano.start(), &paths, time)?;
    log::info!("you: {}", dual.first.route(&volcano).join(" -> "));
    log::info!("elephant: {}", dual.second.route(&volcano).join(" -> "));

    println!("{}", dual.released());
    Ok(())
}
