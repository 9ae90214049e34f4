use crate::config::FormatArg;
use crate::state::SimulationResult;

pub trait Formatter {
    fn write(&self, result: &SimulationResult) -> String;
}

/// Timeline highlights, the wait-time breakdown and the summary block.
pub struct HumanFormatter;

/// Just the summary block.
pub struct SummaryFormatter;

/// The full result as pretty JSON, for downstream visualizers.
pub struct JsonFormatter;

pub fn formatter_for(format: &FormatArg) -> Box<dyn Formatter> {
    match format {
        FormatArg::Human => Box::new(HumanFormatter),
        FormatArg::Summary => Box::new(SummaryFormatter),
        FormatArg::Json => Box::new(JsonFormatter),
    }
}

impl Formatter for SummaryFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let stats = &result.stats;
        let last_entry = if stats.last_fan_minutes_late > 0.0 {
            format!("{:.1} min late", stats.last_fan_minutes_late)
        } else {
            "on time".to_string()
        };

        let mut out = String::new();
        out.push_str("Summary:\n");
        out.push_str(&format!("total fans: {}\n", stats.total_fans));
        out.push_str(&format!(
            "inside by kickoff: {:.1}%\n",
            stats.inside_by_kickoff
        ));
        out.push_str(&format!("missed kickoff: {}\n", stats.missed_kickoff_count));
        out.push_str(&format!("last entry: {}\n", last_entry));
        out.push_str(&format!("lane changes: {}\n", stats.total_lane_changes));
        out.push_str(&format!(
            "avg wait: {}\n",
            format_wait_time(stats.avg_wait_sec)
        ));
        out
    }
}

impl Formatter for HumanFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let stats = &result.stats;
        let closing_queue = result
            .timeline_data
            .last()
            .map(|frame| frame.queue_length)
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str("Timeline:\n");
        out.push_str(&format!("frames: {}\n", result.timeline_data.len()));
        out.push_str(&format!("peak arrivals: {}\n", result.peak_arrivals()));
        out.push_str(&format!("closing queue: {}\n", closing_queue));
        out.push_str("Waits:\n");
        out.push_str(&format!(
            "overall: {}\n",
            format_wait_time(stats.avg_wait_sec)
        ));
        out.push_str(&format!(
            "patient: {}\n",
            format_wait_time(stats.avg_patient_wait_sec)
        ));
        out.push_str(&format!(
            "impatient: {}\n",
            format_wait_time(stats.avg_impatient_wait_sec)
        ));
        out.push_str(&format!(
            "switched: {}\n",
            format_wait_time(stats.avg_switched_wait_sec)
        ));
        out.push_str(&format!(
            "not switched: {}\n",
            format_wait_time(stats.avg_not_switched_wait_sec)
        ));
        out.push_str(&format!(
            "season ticket: {}\n",
            format_wait_time(stats.avg_wait_sec_season)
        ));
        out.push_str(&SummaryFormatter.write(result));
        out
    }
}

impl Formatter for JsonFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out =
            serde_json::to_string_pretty(result).expect("simulation result serializes to JSON");
        out.push('\n');
        out
    }
}

/// Seconds under a minute stay in seconds, anything longer reads as
/// "X min Y sec".
pub fn format_wait_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "N/A".to_string();
    }
    if seconds < 60.0 {
        return format!("{:.1} sec", seconds);
    }
    let mins = (seconds / 60.0).floor() as i64;
    let secs = (seconds % 60.0).round() as i64;
    format!("{} min {} sec", mins, secs)
}
