use std::collections::VecDeque;

use serde::Serialize;

use crate::models::START_TIME;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FanCategory {
    Normal,
    Season,
    Ultra,
}

/// One attendee. Fans live in a single arena vector; gate queues refer to
/// them by arena index.
#[derive(Clone, Debug, PartialEq)]
pub struct Fan {
    pub id: usize,
    pub category: FanCategory,
    /// Seconds relative to kickoff, negative is early.
    pub arrival: i64,
    /// Turnstile handling time in seconds.
    pub service_duration: f64,
    /// Set exactly once, when a gate finishes serving the fan.
    pub finish_time: Option<f64>,
    pub is_impatient: bool,
    pub has_switched: bool,
}

impl Fan {
    pub fn is_season_ticket(&self) -> bool {
        self.category == FanCategory::Season
    }

    /// Time spent queueing, excluding the service itself.
    pub fn wait_time(&self) -> Option<f64> {
        self.finish_time
            .map(|finish| finish - self.arrival as f64 - self.service_duration)
    }
}

/// A single-server FIFO entry point.
#[derive(Clone, Debug)]
pub struct Gate {
    pub index: usize,
    /// Availability watermark in seconds; never decreases.
    pub free_at: f64,
    /// Arena indices of queued fans, front is served next.
    pub queue: VecDeque<usize>,
}

impl Gate {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            free_at: START_TIME as f64,
            queue: VecDeque::new(),
        }
    }
}

/// Snapshot entry for one queued fan.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedFan {
    pub category: FanCategory,
    pub has_switched: bool,
}

/// Cumulative completed-entry counters plus switch bookkeeping.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsideCounts {
    pub normal: u32,
    pub season: u32,
    pub ultra: u32,
    pub total: u32,
    /// Completed fans that changed lanes before being served.
    pub switched_inside: u32,
    /// All lane changes so far, including fans still queued.
    pub lane_changes: u32,
}

/// Per-minute snapshot of the whole simulation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFrame {
    /// Minutes relative to kickoff.
    pub time: i64,
    /// Fans admitted to a queue during this tick.
    pub arrivals: usize,
    /// Category of each fan admitted this tick.
    pub arrival_types: Vec<FanCategory>,
    pub inside: InsideCounts,
    /// Queued fans across all gates.
    pub queue_length: usize,
    /// Queue contents per gate, front of the queue first.
    pub gates: Vec<Vec<QueuedFan>>,
}

/// Aggregate metrics for a finished run. The serialized key names are part
/// of the output contract; downstream consumers key on them.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_fans: usize,
    pub inside_by_kickoff: f64,
    pub missed_kickoff_count: usize,
    pub avg_wait_sec: f64,
    pub avg_patient_wait_sec: f64,
    pub avg_impatient_wait_sec: f64,
    pub last_fan_minutes_late: f64,
    pub total_lane_changes: u32,
    pub avg_switched_wait_sec: f64,
    pub avg_not_switched_wait_sec: f64,
    pub avg_wait_sec_season: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub timeline_data: Vec<TimelineFrame>,
    pub stats: Stats,
}

impl SimulationResult {
    /// Largest single-tick admission count across the timeline.
    pub fn peak_arrivals(&self) -> usize {
        self.timeline_data
            .iter()
            .map(|frame| frame.arrivals)
            .max()
            .unwrap_or(0)
    }
}
