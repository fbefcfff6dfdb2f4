//! Custom hodograph creator.
//!
//! Prompts for (or loads) the winds at the standard pressure levels, then prints a text
//! hodograph with the Bunkers storm motions, storm relative helicity, and deep layer shear.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use hodograph_analysis::{
    summary, title, AnalysisError, HodographAnalysis, HodographConfig, HodographPlot, Prompter,
    StormMotionReference,
};
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tracing::{debug, Level};

/// Make a hodograph from the winds at 1000, 850, 600, 350, and 150 hPa.
#[derive(Parser, Debug)]
#[command(name = "hodograph", version, about)]
struct CmdLineArgs {
    /// Load the hodograph from a TOML file instead of asking for it.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Deviation of the storm motions from the mean wind in knots.
    #[arg(long, value_name = "KT")]
    deviation: Option<f64>,

    /// Top of the helicity layer in hPa.
    #[arg(long, value_name = "HPA")]
    top: Option<f64>,

    /// Storm motion the helicity is relative to: ground, right-moving, or left-moving.
    #[arg(long, value_name = "MOTION")]
    storm_motion: Option<StormMotionReference>,

    /// Only print the numbers, skip the plot.
    #[arg(long)]
    no_plot: bool,

    /// More logging, repeat for even more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(ref e) = run() {
        eprintln!("error: {}", e);

        for cause in e.chain().skip(1) {
            eprintln!("caused by: {}", cause);
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CmdLineArgs::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "starting");

    let anal = match args.config {
        Some(ref path) => {
            let config = HodographConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?;
            let config = apply_overrides(config, &args);
            analyze(&config)?
        }
        None => interactive(&args)?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", title(anal.sounding()))?;
    if !args.no_plot {
        write!(out, "{}", HodographPlot::new().render(&anal))?;
    }
    write!(out, "{}", summary(&anal))?;

    Ok(())
}

fn apply_overrides(mut config: HodographConfig, args: &CmdLineArgs) -> HodographConfig {
    if let Some(deviation) = args.deviation {
        config.deviation_kt = deviation;
    }
    if let Some(top) = args.top {
        config.helicity_top_hpa = top;
    }
    if let Some(storm_motion) = args.storm_motion {
        config.storm_motion = storm_motion;
    }
    config
}

fn analyze(config: &HodographConfig) -> Result<HodographAnalysis> {
    let snd = config.to_sounding()?;
    Ok(HodographAnalysis::analyze(snd, &config.analysis_params())?)
}

// Keep asking for winds until they make a hodograph that can be analyzed.
fn interactive(args: &CmdLineArgs) -> Result<HodographAnalysis> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    println!("Custom Hodograph Creator");
    println!("A program that is a part of the TempestPy Weather Enthusiast Suite");
    println!("Version {}", env!("CARGO_PKG_VERSION"));
    println!("===========================");

    let mut config = apply_overrides(prompter.collect_config()?, args);

    loop {
        println!("Processing your data and creating a hodograph out of it......");

        let snd = config.to_sounding()?;
        match HodographAnalysis::analyze(snd, &config.analysis_params()) {
            Ok(anal) => return Ok(anal),
            Err(err @ AnalysisError::DegenerateShear) => {
                println!("{}. Please enter the winds again.", err);
                config.levels = prompter.collect_levels()?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}
