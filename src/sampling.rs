use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::Rng;

use crate::models::{Distribution, KICKOFF, START_TIME};

/// Out-of-window normal draws are rejected up to this many times, then the
/// last draw is clamped to the window edge.
const MAX_NORMAL_ATTEMPTS: u32 = 50;

/// Draws integer arrival offsets in seconds relative to kickoff, always
/// inside `[START_TIME, KICKOFF]`.
#[derive(Clone, Debug)]
pub struct ArrivalSampler {
    distribution: Distribution,
}

impl ArrivalSampler {
    pub fn new(distribution: Distribution) -> Self {
        Self { distribution }
    }

    /// Sample one arrival time. Season ticket holders use the separate
    /// season mean when the normal distribution carries one.
    pub fn sample(&self, rng: &mut StdRng, season_ticket: bool) -> i64 {
        match self.distribution {
            Distribution::Normal {
                mean,
                season_mean,
                std_dev,
            } => {
                let mean = if season_ticket {
                    season_mean.unwrap_or(mean)
                } else {
                    mean
                };
                sample_normal(rng, mean * 60.0, std_dev * 60.0)
            }
            Distribution::Uniform { start, end } => sample_uniform(rng, start * 60.0, end * 60.0),
            Distribution::Beta { alpha, beta } => sample_beta(rng, alpha, beta),
        }
    }
}

/// Uniform(0, 1] with the lower bound nudged off zero so logs stay finite.
fn uniform_nonzero(rng: &mut StdRng) -> f64 {
    let u = rng.gen::<f64>();
    if u <= f64::MIN_POSITIVE {
        f64::MIN_POSITIVE
    } else {
        u
    }
}

/// Standard normal variate via the Box-Muller transform.
fn standard_normal(rng: &mut StdRng) -> f64 {
    let u = uniform_nonzero(rng);
    let v = uniform_nonzero(rng);
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

fn sample_normal(rng: &mut StdRng, mean_sec: f64, std_dev_sec: f64) -> i64 {
    let mut attempts = 0;
    loop {
        let t = (standard_normal(rng) * std_dev_sec + mean_sec).floor() as i64;
        attempts += 1;
        if (START_TIME..=KICKOFF).contains(&t) {
            return t;
        }
        if attempts >= MAX_NORMAL_ATTEMPTS {
            return t.clamp(START_TIME, KICKOFF);
        }
    }
}

fn sample_uniform(rng: &mut StdRng, start_sec: f64, end_sec: f64) -> i64 {
    let t = (rng.gen::<f64>() * (end_sec - start_sec) + start_sec).floor() as i64;
    t.clamp(START_TIME, KICKOFF)
}

/// Beta(alpha, beta) as a ratio of gamma variates, mapped over the whole
/// admission window. The map is total, so no rejection is needed.
fn sample_beta(rng: &mut StdRng, alpha: f64, beta: f64) -> i64 {
    let x = sample_gamma(rng, alpha);
    let y = sample_gamma(rng, beta);
    let b = x / (x + y);
    let range = (KICKOFF - START_TIME) as f64;
    (START_TIME as f64 + b * range).floor() as i64
}

/// Marsaglia-Tsang gamma variate. Shapes below one are drawn through
/// Gamma(1 + shape) and rescaled by U^(1/shape).
fn sample_gamma(rng: &mut StdRng, shape: f64) -> f64 {
    if shape < 1.0 {
        let boost = uniform_nonzero(rng).powf(1.0 / shape);
        return boost * sample_gamma(rng, 1.0 + shape);
    }
    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();
    loop {
        let mut x;
        let mut v;
        loop {
            x = standard_normal(rng);
            v = 1.0 + c * x;
            if v > 0.0 {
                break;
            }
        }
        v = v * v * v;
        let u = rng.gen::<f64>();
        if u < 1.0 - 0.0331 * x * x * x * x {
            return d * v;
        }
        if u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln()) {
            return d * v;
        }
    }
}
