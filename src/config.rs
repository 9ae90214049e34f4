use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::error::{Error, Result};
use crate::models::{Distribution, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "gate-sim")]
pub struct Args {
    #[arg(long, help = "TOML or JSON scenario file; flags override its values")]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub gates: Option<usize>,
    #[arg(long)]
    pub priority_gates: Option<usize>,
    #[arg(long)]
    pub fans: Option<usize>,
    #[arg(long, help = "Add a block of 500 ultras arriving together at -60 min")]
    pub ultras: bool,
    #[arg(long, help = "Pack the approaches: 2000 extra fans and a later close")]
    pub overload: bool,
    #[arg(long)]
    pub season_percent: Option<f64>,
    #[arg(long, help = "Reserve the first gates for season ticket holders")]
    pub priority: bool,
    #[arg(long, help = "Let 30% of fans jump to a shorter queue once")]
    pub impatient: bool,
    #[arg(long, value_enum)]
    pub dist: Option<DistArg>,
    #[arg(long, allow_negative_numbers = true)]
    pub mean: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub season_mean: Option<f64>,
    #[arg(long)]
    pub std_dev: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<f64>,
    #[arg(long)]
    pub alpha: Option<f64>,
    #[arg(long)]
    pub beta: Option<f64>,
    #[arg(long, help = "Seed for the arrival and service draws; omit for seed 0")]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value = "human")]
    pub format: FormatArg,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum DistArg {
    Normal,
    Uniform,
    Beta,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum FormatArg {
    Human,
    Summary,
    Json,
}

pub fn parse_args() -> Result<Args> {
    Args::try_parse().map_err(|e| Error::Cli(e.to_string()))
}

pub fn load_config(path: &Path) -> Result<SimulationConfig> {
    let contents = fs::read_to_string(path).map_err(|err| {
        Error::ConfigIo(format!(
            "failed to read config '{}': {}",
            path.display(),
            err
        ))
    })?;
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("");

    match ext {
        "toml" => toml::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse TOML: {}", err))),
        "json" => serde_json::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse JSON: {}", err))),
        "" => Err(Error::UnsupportedConfigFormat("unknown".to_string())),
        _ => Err(Error::UnsupportedConfigFormat(ext.to_string())),
    }
}

/// Resolve the scenario: config file first when given, then flag overrides
/// on top. Returns the scenario plus the chosen output format.
pub fn build_config(args: Args) -> Result<(SimulationConfig, FormatArg)> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(gates) = args.gates {
        config.num_gates = gates;
    }
    if let Some(priority_gates) = args.priority_gates {
        config.num_priority_gates = priority_gates;
    }
    if let Some(fans) = args.fans {
        config.total_fans = fans;
    }
    if args.ultras {
        config.add_ultras = true;
    }
    if args.overload {
        config.overload_mode = true;
    }
    if let Some(percent) = args.season_percent {
        config.season_ticket_percent = percent;
    }
    if args.priority {
        config.season_ticket_priority = true;
    }
    if args.impatient {
        config.impatient_fans = true;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.distribution = build_distribution(&args, &config.distribution);

    Ok((config, args.format))
}

/// All distribution parameters coexist with defaults; the selected kind
/// picks which ones matter. Parameters carried by the current distribution
/// survive a kind change unless a flag overrides them.
fn build_distribution(args: &Args, current: &Distribution) -> Distribution {
    let mut mean = -45.0;
    let mut season_mean = None;
    let mut std_dev = 10.0;
    let mut start = -120.0;
    let mut end = 0.0;
    let mut alpha = 5.0;
    let mut beta = 2.0;

    match *current {
        Distribution::Normal {
            mean: m,
            season_mean: sm,
            std_dev: sd,
        } => {
            mean = m;
            season_mean = sm;
            std_dev = sd;
        }
        Distribution::Uniform { start: s, end: e } => {
            start = s;
            end = e;
        }
        Distribution::Beta { alpha: a, beta: b } => {
            alpha = a;
            beta = b;
        }
    }

    if let Some(value) = args.mean {
        mean = value;
    }
    if let Some(value) = args.season_mean {
        season_mean = Some(value);
    }
    if let Some(value) = args.std_dev {
        std_dev = value;
    }
    if let Some(value) = args.start {
        start = value;
    }
    if let Some(value) = args.end {
        end = value;
    }
    if let Some(value) = args.alpha {
        alpha = value;
    }
    if let Some(value) = args.beta {
        beta = value;
    }

    let kind = match (&args.dist, current) {
        (Some(arg), _) => arg.clone(),
        (None, Distribution::Normal { .. }) => DistArg::Normal,
        (None, Distribution::Uniform { .. }) => DistArg::Uniform,
        (None, Distribution::Beta { .. }) => DistArg::Beta,
    };
    match kind {
        DistArg::Normal => Distribution::Normal {
            mean,
            season_mean,
            std_dev,
        },
        DistArg::Uniform => Distribution::Uniform { start, end },
        DistArg::Beta => Distribution::Beta { alpha, beta },
    }
}
