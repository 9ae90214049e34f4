use rand::rngs::StdRng;
use rand::Rng;

use crate::models::{SimulationConfig, KICKOFF};
use crate::sampling::ArrivalSampler;
use crate::state::{Fan, FanCategory};

/// Size of the ultras block appended when `add_ultras` is set.
pub const ULTRA_COUNT: usize = 500;
/// Ultras march in together one hour before kickoff.
pub const ULTRA_ARRIVAL: i64 = -3600;
/// Season ticket holders with a reserved lane show up this much later.
const PRIORITY_ARRIVAL_OFFSET: i64 = 900;
/// Share of regular fans that will go looking for a shorter queue.
const IMPATIENT_SHARE: f64 = 0.3;

/// Build the full fan set in admission order: ascending arrival, ties in
/// creation order. Ids record creation order and survive the sort.
pub fn build_population(config: &SimulationConfig, rng: &mut StdRng) -> Vec<Fan> {
    let sampler = ArrivalSampler::new(config.distribution.clone());
    let count = config.fan_count();
    let ultras = if config.add_ultras { ULTRA_COUNT } else { 0 };
    let mut fans = Vec::with_capacity(count + ultras);

    for id in 0..count {
        let season = rng.gen::<f64>() < config.season_ticket_percent / 100.0;
        let mut arrival = sampler.sample(rng, season);
        if season && config.season_ticket_priority {
            // A reserved lane lets holders cut the margin closer, but not
            // past kickoff.
            arrival = (arrival + PRIORITY_ARRIVAL_OFFSET).min(KICKOFF);
        }
        let (category, service_duration) = if season {
            (FanCategory::Season, 3.0 + rng.gen_range(-1.0..1.0))
        } else {
            (FanCategory::Normal, 6.0 + rng.gen_range(-3.0..3.0))
        };
        fans.push(Fan {
            id,
            category,
            arrival,
            service_duration,
            finish_time: None,
            is_impatient: rng.gen::<f64>() < IMPATIENT_SHARE,
            has_switched: false,
        });
    }

    for offset in 0..ultras {
        fans.push(Fan {
            id: count + offset,
            category: FanCategory::Ultra,
            arrival: ULTRA_ARRIVAL,
            service_duration: 6.0 + rng.gen_range(-3.0..3.0),
            finish_time: None,
            is_impatient: false,
            has_switched: false,
        });
    }

    fans.sort_by_key(|fan| fan.arrival);
    fans
}
