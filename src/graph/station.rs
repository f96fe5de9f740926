//! Station and coordinate types.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A named point in the station network. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Display title; not part of station identity
    pub title: String,
    /// Coordinates, serialized under the `latLng` wire name
    #[serde(rename = "latLng")]
    pub lat_lng: LatLng,
}

impl Station {
    /// Create a new station
    pub fn new(title: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            title: title.into(),
            lat_lng: LatLng { lat, lng },
        }
    }

    pub fn latitude(&self) -> f64 {
        self.lat_lng.lat
    }

    pub fn longitude(&self) -> f64 {
        self.lat_lng.lng
    }

    /// Whether this station occupies the same coordinates as another.
    ///
    /// Exact equality, no tolerance; the title does not participate.
    pub fn same_coordinates(&self, other: &Station) -> bool {
        self.lat_lng.lat == other.lat_lng.lat && self.lat_lng.lng == other.lat_lng.lng
    }
}
