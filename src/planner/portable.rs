//! Portable text representation of the station graph.

use serde::Serialize;
use serde_json::Value;

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::graph::{Station, StationGraph};

/// Wire shape of an exported graph.
///
/// Field names are part of the exchange format and must not change:
/// `locations` is the station list and `matrix` the literal 2-D weight
/// array. No computed fields are added.
#[derive(Debug, Clone, Serialize)]
pub struct PortableGraph {
    pub locations: Vec<Station>,
    pub matrix: Vec<Vec<f64>>,
}

impl PortableGraph {
    /// Capture a graph for export.
    pub fn from_graph(graph: &StationGraph) -> Self {
        Self {
            locations: graph.stations().to_vec(),
            matrix: graph.matrix().to_vec(),
        }
    }

    /// Parse exported text.
    ///
    /// Text that is not valid JSON, or valid JSON without the top-level
    /// `locations`/`matrix` keys, is a [`PlannerError::MalformedInput`].
    /// Content that parses as JSON but carries a wrong-typed field (a
    /// numeric title, a string coordinate, a non-array row) is a
    /// [`PlannerError::Validation`] naming the offending index or field.
    pub fn parse(text: &str) -> Result<Self, PlannerError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|err| PlannerError::MalformedInput(err.to_string()))?;

        let root = value
            .as_object()
            .ok_or_else(|| PlannerError::MalformedInput("expected a JSON object".to_string()))?;
        let locations = root
            .get("locations")
            .ok_or_else(|| PlannerError::MalformedInput("missing locations".to_string()))?;
        let matrix = root
            .get("matrix")
            .ok_or_else(|| PlannerError::MalformedInput("missing matrix".to_string()))?;

        Ok(Self {
            locations: parse_locations(locations)?,
            matrix: parse_matrix(matrix)?,
        })
    }

    /// Re-validate every structural invariant and build a graph.
    ///
    /// Checks each location's coordinate ranges, the matrix dimensions,
    /// every cell's weight range, the zero diagonal, and symmetry, in that
    /// order. Errors name the offending index or cell.
    pub fn into_graph(self) -> Result<StationGraph, PlannerError> {
        for (i, station) in self.locations.iter().enumerate() {
            let lat = station.latitude();
            if !(PlannerConfig::MIN_LAT..=PlannerConfig::MAX_LAT).contains(&lat) {
                return Err(PlannerError::Validation(format!(
                    "location[{i}].latLng.lat out of range: {lat}"
                )));
            }
            let lng = station.longitude();
            if !(PlannerConfig::MIN_LNG..=PlannerConfig::MAX_LNG).contains(&lng) {
                return Err(PlannerError::Validation(format!(
                    "location[{i}].latLng.lng out of range: {lng}"
                )));
            }
        }

        let n = self.locations.len();
        if self.matrix.len() != n {
            return Err(PlannerError::Validation(format!(
                "matrix length {} does not match station count {n}",
                self.matrix.len()
            )));
        }

        for (r, row) in self.matrix.iter().enumerate() {
            if row.len() != n {
                return Err(PlannerError::Validation(format!(
                    "matrix[{r}] length {} does not match station count {n}",
                    row.len()
                )));
            }
            for (c, &cell) in row.iter().enumerate() {
                if cell != 0.0
                    && !(PlannerConfig::MIN_PATH_WEIGHT..=PlannerConfig::MAX_PATH_WEIGHT)
                        .contains(&cell)
                {
                    return Err(PlannerError::Validation(format!(
                        "matrix[{r}][{c}] weight out of range: {cell}"
                    )));
                }
            }
        }

        for r in 0..n {
            if self.matrix[r][r] != 0.0 {
                return Err(PlannerError::Validation(format!(
                    "matrix[{r}][{r}] diagonal entry is not zero"
                )));
            }
            for c in (r + 1)..n {
                if self.matrix[r][c] != self.matrix[c][r] {
                    return Err(PlannerError::Validation(format!(
                        "matrix[{r}][{c}] does not match matrix[{c}][{r}]"
                    )));
                }
            }
        }

        Ok(StationGraph::from_parts(self.locations, self.matrix))
    }
}

/// Walk the untyped `locations` entries, type-checking every field.
fn parse_locations(value: &Value) -> Result<Vec<Station>, PlannerError> {
    let entries = value
        .as_array()
        .ok_or_else(|| PlannerError::Validation("locations is not an array".to_string()))?;

    let mut locations = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let title = entry
            .get("title")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                PlannerError::Validation(format!("location[{i}].title is not a string"))
            })?;
        let lat_lng = entry.get("latLng").and_then(Value::as_object).ok_or_else(|| {
            PlannerError::Validation(format!("location[{i}].latLng is not an object"))
        })?;
        let lat = lat_lng.get("lat").and_then(Value::as_f64).ok_or_else(|| {
            PlannerError::Validation(format!("location[{i}].latLng.lat is not a number"))
        })?;
        let lng = lat_lng.get("lng").and_then(Value::as_f64).ok_or_else(|| {
            PlannerError::Validation(format!("location[{i}].latLng.lng is not a number"))
        })?;

        locations.push(Station::new(title, lat, lng));
    }

    Ok(locations)
}

/// Walk the untyped `matrix` rows, type-checking every cell.
fn parse_matrix(value: &Value) -> Result<Vec<Vec<f64>>, PlannerError> {
    let rows = value
        .as_array()
        .ok_or_else(|| PlannerError::Validation("matrix is not an array".to_string()))?;

    let mut matrix = Vec::with_capacity(rows.len());
    for (r, row_value) in rows.iter().enumerate() {
        let cells = row_value
            .as_array()
            .ok_or_else(|| PlannerError::Validation(format!("matrix[{r}] is not an array")))?;

        let mut row = Vec::with_capacity(cells.len());
        for (c, cell) in cells.iter().enumerate() {
            let number = cell.as_f64().ok_or_else(|| {
                PlannerError::Validation(format!("matrix[{r}][{c}] is not a number"))
            })?;
            row.push(number);
        }
        matrix.push(row);
    }

    Ok(matrix)
}
