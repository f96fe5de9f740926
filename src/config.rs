//! Planner configuration and validation bounds.

use serde::{Deserialize, Serialize};

use crate::graph::LatLng;

/// Display-oriented configuration consumed by map-rendering collaborators.
///
/// The coordinate and path weight bounds are associated constants rather than
/// fields: the validation rules treat them as fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Display name for the planned network
    pub name: String,
    /// URL template for the map tile layer
    pub map_tile_layer_url_template: String,
    /// Initial map center
    pub map_initial_lat_lng: LatLng,
    /// Map viewport height in pixels
    pub map_height: u32,
}

impl PlannerConfig {
    /// Smallest allowed nonzero path weight
    pub const MIN_PATH_WEIGHT: f64 = 1.0;
    /// Largest allowed path weight
    pub const MAX_PATH_WEIGHT: f64 = 10.0;

    pub const MIN_LAT: f64 = -90.0;
    pub const MAX_LAT: f64 = 90.0;
    pub const MIN_LNG: f64 = -180.0;
    pub const MAX_LNG: f64 = 180.0;
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            name: "Station network".to_string(),
            map_tile_layer_url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
                .to_string(),
            map_initial_lat_lng: LatLng {
                lat: -34.521961,
                lng: -58.700218,
            },
            map_height: 500,
        }
    }
}
