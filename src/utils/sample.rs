//! Random network generators for demos and tests.

use rand::Rng;

use crate::config::PlannerConfig;
use crate::graph::Station;

/// Random latitude within the allowed range.
pub fn random_latitude<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(PlannerConfig::MIN_LAT..=PlannerConfig::MAX_LAT)
}

/// Random longitude within the allowed range.
pub fn random_longitude<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(PlannerConfig::MIN_LNG..=PlannerConfig::MAX_LNG)
}

/// Random integral weight within the allowed path weight range.
pub fn random_weight<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(PlannerConfig::MIN_PATH_WEIGHT as i64..=PlannerConfig::MAX_PATH_WEIGHT as i64)
        as f64
}

/// Random station with the given title.
pub fn random_station<R: Rng>(rng: &mut R, title: impl Into<String>) -> Station {
    Station::new(title, random_latitude(rng), random_longitude(rng))
}

/// Random adjacency list with roughly 30% edge density.
///
/// When `len > 0`, at least one entry is forced nonzero so the new station
/// stays connected to the rest of the network.
pub fn random_adjacency<R: Rng>(rng: &mut R, len: usize) -> Vec<Option<f64>> {
    let mut adjacency: Vec<Option<f64>> = (0..len)
        .map(|_| {
            if rng.gen_bool(0.3) {
                Some(random_weight(rng))
            } else {
                None
            }
        })
        .collect();

    if len > 0 {
        let forced = rng.gen_range(0..len);
        adjacency[forced] = Some(random_weight(rng));
    }

    adjacency
}
