use std::path::{Path, PathBuf};

use clap::Parser;

use contagion::log::{info, set_log_level, LevelFilter};
use contagion::prelude::*;

/// Command line arguments for the contagion runner.
#[derive(Parser, Debug)]
#[command(name = "contagion")]
struct Args {
    /// Random seed (overrides the value from the config file)
    #[arg(short, long)]
    random_seed: Option<u64>,

    /// Optional path for a JSON parameters file
    #[arg(short, long, default_value = "")]
    config: String,

    /// Optional directory for CSV report output
    #[arg(short, long, default_value = "")]
    output_dir: String,

    /// Number of days to simulate (overrides the config file)
    #[arg(short, long)]
    days: Option<u32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<(), ContagionError> {
    let args = Args::parse();
    set_log_level(args.log_level);

    let mut parameters = if args.config.is_empty() {
        Parameters::default()
    } else {
        info!("loading parameters from: {}", args.config);
        Parameters::from_json_file(Path::new(&args.config))?
    };
    if let Some(seed) = args.random_seed {
        parameters.seed = seed;
    }
    if let Some(days) = args.days {
        parameters.days = days;
    }

    let mut simulation = Simulation::from_parameters(&parameters);

    let department = DepartmentOfHealth::new();
    let hospitalizations = department.hospitalization_count();
    simulation
        .context_mut()
        .set_health_authority(Box::new(department));

    let mut report = if args.output_dir.is_empty() {
        None
    } else {
        let path = PathBuf::from(&args.output_dir).join("prevalence.csv");
        info!("writing prevalence report to: {}", path.display());
        Some(PrevalenceReport::create(&path)?)
    };

    for _ in 0..parameters.days {
        simulation.step_day();
        let counts = simulation.state_counts();
        info!(
            "day {}: {} healthy, {} incubating, {} sick, {} dead",
            simulation.day(),
            counts.healthy,
            counts.asymptomatic,
            counts.symptomatic,
            counts.dead
        );
        if let Some(report) = report.as_mut() {
            report.record(simulation.day(), &counts)?;
        }
    }

    let counts = simulation.state_counts();
    println!(
        "Simulated {} days over a population of {}: {} healthy, {} incubating, {} sick, {} dead; {} hospital referrals",
        simulation.day(),
        counts.total(),
        counts.healthy,
        counts.asymptomatic,
        counts.symptomatic,
        counts.dead,
        hospitalizations.get()
    );
    Ok(())
}
