use crate::models::KICKOFF;
use crate::state::{Fan, FanCategory, Stats};

/// Reduce a finished run into the flat metric block. `completed` holds the
/// arena indices of fans that were actually served; `total_fans` is the
/// whole population, including fans still queued at close.
pub fn compute_stats(
    fans: &[Fan],
    completed: &[usize],
    total_fans: usize,
    lane_changes: u32,
) -> Stats {
    let mut waits = Vec::with_capacity(completed.len());
    let mut patient_waits = Vec::new();
    let mut impatient_waits = Vec::new();
    let mut switched_waits = Vec::new();
    let mut not_switched_waits = Vec::new();
    let mut season_waits = Vec::new();
    let mut missed_kickoff_count = 0usize;
    let mut last_finish = 0.0f64;

    for &idx in completed {
        let fan = &fans[idx];
        let finish = match fan.finish_time {
            Some(finish) => finish,
            None => continue,
        };
        let wait = finish - fan.arrival as f64 - fan.service_duration;
        waits.push(wait);
        if fan.is_impatient {
            impatient_waits.push(wait);
        } else {
            patient_waits.push(wait);
        }
        if fan.has_switched {
            switched_waits.push(wait);
        } else {
            not_switched_waits.push(wait);
        }
        if fan.category == FanCategory::Season {
            season_waits.push(wait);
        }
        if finish > KICKOFF as f64 {
            missed_kickoff_count += 1;
        }
        if finish > last_finish {
            last_finish = finish;
        }
    }

    let inside_by_kickoff = if total_fans == 0 {
        0.0
    } else {
        (total_fans - missed_kickoff_count) as f64 / total_fans as f64 * 100.0
    };
    let last_fan_minutes_late = if last_finish > KICKOFF as f64 {
        last_finish / 60.0
    } else {
        0.0
    };

    Stats {
        total_fans,
        inside_by_kickoff: round1(inside_by_kickoff),
        missed_kickoff_count,
        avg_wait_sec: round1(mean(&waits)),
        avg_patient_wait_sec: round1(mean(&patient_waits)),
        avg_impatient_wait_sec: round1(mean(&impatient_waits)),
        last_fan_minutes_late: round1(last_fan_minutes_late),
        total_lane_changes: lane_changes,
        avg_switched_wait_sec: round1(mean(&switched_waits)),
        avg_not_switched_wait_sec: round1(mean(&not_switched_waits)),
        avg_wait_sec_season: round1(mean(&season_waits)),
    }
}

/// Average that reports an empty subset as zero instead of dividing by it.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
