use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assignment::{eligible_range, pick_gate, shortest_queue};
use crate::error::{Error, Result};
use crate::models::{Distribution, SimulationConfig, START_TIME, TICK_SECS};
use crate::population::build_population;
use crate::state::{
    Fan, FanCategory, Gate, InsideCounts, QueuedFan, SimulationResult, TimelineFrame,
};
use crate::stats::compute_stats;

/// Queued fans start shopping for a shorter line after this many seconds.
const IMPATIENCE_THRESHOLD: i64 = 600;

pub struct SimulationEngine {
    pub config: SimulationConfig,
    pub rng: StdRng,
}

impl SimulationEngine {
    pub fn new(config: SimulationConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or(0));
        Self { config, rng }
    }

    pub fn run(&mut self) -> Result<SimulationResult> {
        validate_config(&self.config)?;
        let mut fans = build_population(&self.config, &mut self.rng);
        let total_fans = fans.len();

        let mut gates: Vec<Gate> = (0..self.config.num_gates).map(Gate::new).collect();
        let mut inside = InsideCounts::default();
        let mut completed: Vec<usize> = Vec::with_capacity(total_fans);
        let mut timeline_data = Vec::new();
        let mut cursor = 0usize;

        let end_time = self.config.end_time();
        let mut t = START_TIME;
        while t <= end_time {
            let arrival_types = admit_arrivals(&self.config, t, &fans, &mut gates, &mut cursor);
            serve_gates(t, &mut fans, &mut gates, &mut completed, &mut inside);
            if self.config.impatient_fans {
                reassign_impatient(t, &mut fans, &mut gates, &mut inside);
            }
            timeline_data.push(snapshot(t, arrival_types, inside, &fans, &gates));
            t += TICK_SECS;
        }

        let stats = compute_stats(&fans, &completed, total_fans, inside.lane_changes);
        Ok(SimulationResult {
            timeline_data,
            stats,
        })
    }
}

pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationResult> {
    let mut engine = SimulationEngine::new(config.clone());
    engine.run()
}

/// Admit every fan whose arrival time has passed, in arrival order. Each
/// joins the shortest queue among the gates their category may use.
fn admit_arrivals(
    config: &SimulationConfig,
    t: i64,
    fans: &[Fan],
    gates: &mut [Gate],
    cursor: &mut usize,
) -> Vec<FanCategory> {
    let mut admitted = Vec::new();
    while *cursor < fans.len() && fans[*cursor].arrival <= t {
        let fan = &fans[*cursor];
        let range = eligible_range(
            fan.category,
            config.num_gates,
            config.num_priority_gates,
            config.season_ticket_priority,
        );
        let gate = pick_gate(gates, range);
        gates[gate].queue.push_back(*cursor);
        admitted.push(fan.category);
        *cursor += 1;
    }
    admitted
}

/// Serve each gate front to back. A fan completes only when both the service
/// start and finish fall within the current tick; the first unservable fan
/// blocks the rest of the queue.
fn serve_gates(
    t: i64,
    fans: &mut [Fan],
    gates: &mut [Gate],
    completed: &mut Vec<usize>,
    inside: &mut InsideCounts,
) {
    let tick_end = t as f64;
    for gate in gates.iter_mut() {
        while let Some(&idx) = gate.queue.front() {
            let fan = &fans[idx];
            let start = (fan.arrival as f64).max(gate.free_at);
            let finish = start + fan.service_duration;
            if start > tick_end || finish > tick_end {
                break;
            }
            gate.free_at = finish;
            let served = gate.queue.pop_front();
            debug_assert_eq!(served, Some(idx));
            completed.push(idx);

            let fan = &mut fans[idx];
            fan.finish_time = Some(finish);
            inside.total += 1;
            match fan.category {
                FanCategory::Normal => inside.normal += 1,
                FanCategory::Season => inside.season += 1,
                FanCategory::Ultra => inside.ultra += 1,
            }
            if fan.has_switched {
                inside.switched_inside += 1;
            }
        }
    }
}

/// Let impatient fans who have queued past the threshold jump to the
/// globally shortest queue. Each fan moves at most once per run, and a move
/// re-enters at the back of the target queue.
fn reassign_impatient(t: i64, fans: &mut [Fan], gates: &mut [Gate], inside: &mut InsideCounts) {
    for gate_idx in 0..gates.len() {
        let mut pos = 0;
        while pos < gates[gate_idx].queue.len() {
            let fan_idx = gates[gate_idx].queue[pos];
            let fan = &fans[fan_idx];
            if !fan.is_impatient || fan.has_switched || t - fan.arrival < IMPATIENCE_THRESHOLD {
                pos += 1;
                continue;
            }
            let target = shortest_queue(gates);
            if target == gate_idx {
                pos += 1;
                continue;
            }
            let moved = gates[gate_idx].queue.remove(pos);
            debug_assert_eq!(moved, Some(fan_idx));
            gates[target].queue.push_back(fan_idx);
            fans[fan_idx].has_switched = true;
            inside.lane_changes += 1;
            // The fan behind the mover slid into `pos`; revisit it.
        }
    }
}

fn snapshot(
    t: i64,
    arrival_types: Vec<FanCategory>,
    inside: InsideCounts,
    fans: &[Fan],
    gates: &[Gate],
) -> TimelineFrame {
    let gate_queues: Vec<Vec<QueuedFan>> = gates
        .iter()
        .map(|gate| {
            gate.queue
                .iter()
                .map(|&idx| QueuedFan {
                    category: fans[idx].category,
                    has_switched: fans[idx].has_switched,
                })
                .collect()
        })
        .collect();
    TimelineFrame {
        time: t / TICK_SECS,
        arrivals: arrival_types.len(),
        arrival_types,
        inside,
        queue_length: gates.iter().map(|gate| gate.queue.len()).sum(),
        gates: gate_queues,
    }
}

fn validate_config(config: &SimulationConfig) -> Result<()> {
    if config.num_gates == 0 {
        return Err(Error::NoGates);
    }
    if config.num_priority_gates > config.num_gates {
        return Err(Error::TooManyPriorityGates(
            config.num_priority_gates,
            config.num_gates,
        ));
    }
    if config.total_fans == 0 {
        return Err(Error::FansZero);
    }
    if !(0.0..=100.0).contains(&config.season_ticket_percent) {
        return Err(Error::InvalidSeasonPercent(config.season_ticket_percent));
    }

    match config.distribution {
        Distribution::Normal { std_dev, .. } => {
            if std_dev <= 0.0 {
                return Err(Error::InvalidStdDev(std_dev));
            }
        }
        Distribution::Uniform { start, end } => {
            if start > end {
                return Err(Error::InvalidUniformWindow(start, end));
            }
        }
        Distribution::Beta { alpha, beta } => {
            if alpha <= 0.0 || beta <= 0.0 {
                return Err(Error::InvalidBetaShape(alpha, beta));
            }
        }
    }

    Ok(())
}
