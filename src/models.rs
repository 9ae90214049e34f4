use serde::{Deserialize, Serialize};

/// Earliest arrival, in seconds relative to kickoff.
pub const START_TIME: i64 = -7200;
/// Kickoff is the scenario origin; everything is measured against it.
pub const KICKOFF: i64 = 0;
/// Simulation step in seconds.
pub const TICK_SECS: i64 = 60;
/// Gates keep serving this long past kickoff.
pub const END_TIME: i64 = 3600;
/// Extended closing time when overload mode is on.
pub const END_TIME_OVERLOAD: i64 = 7200;
/// Walk-ups added on top of `total_fans` in overload mode.
pub const OVERLOAD_EXTRA_FANS: usize = 2000;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimulationConfig {
    #[serde(default = "default_num_gates")]
    pub num_gates: usize,
    #[serde(default)]
    pub num_priority_gates: usize,
    #[serde(default = "default_total_fans")]
    pub total_fans: usize,
    #[serde(default)]
    pub add_ultras: bool,
    #[serde(default)]
    pub overload_mode: bool,
    #[serde(default = "default_season_ticket_percent")]
    pub season_ticket_percent: f64,
    #[serde(default)]
    pub season_ticket_priority: bool,
    #[serde(default)]
    pub impatient_fans: bool,
    #[serde(default = "default_distribution")]
    pub distribution: Distribution,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Distribution {
    /// Gaussian arrivals centered `mean` minutes from kickoff. Season
    /// ticket holders draw around `season_mean` when one is set.
    Normal {
        mean: f64,
        #[serde(default)]
        season_mean: Option<f64>,
        std_dev: f64,
    },
    /// Flat arrivals over `[start, end]` minutes from kickoff.
    Uniform { start: f64, end: f64 },
    /// Beta(alpha, beta) arrivals stretched over the whole window.
    Beta { alpha: f64, beta: f64 },
}

impl SimulationConfig {
    /// Closing time for this run, in seconds relative to kickoff.
    pub fn end_time(&self) -> i64 {
        if self.overload_mode {
            END_TIME_OVERLOAD
        } else {
            END_TIME
        }
    }

    /// Number of regular fans to generate, before any ultras block.
    pub fn fan_count(&self) -> usize {
        if self.overload_mode {
            self.total_fans + OVERLOAD_EXTRA_FANS
        } else {
            self.total_fans
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_gates: default_num_gates(),
            num_priority_gates: 0,
            total_fans: default_total_fans(),
            add_ultras: false,
            overload_mode: false,
            season_ticket_percent: default_season_ticket_percent(),
            season_ticket_priority: false,
            impatient_fans: false,
            distribution: default_distribution(),
            seed: None,
        }
    }
}

fn default_num_gates() -> usize {
    6
}

fn default_total_fans() -> usize {
    6000
}

fn default_season_ticket_percent() -> f64 {
    40.0
}

fn default_distribution() -> Distribution {
    Distribution::Normal {
        mean: -45.0,
        season_mean: None,
        std_dev: 10.0,
    }
}
