//! Country name -> map coordinate join for the bubble map.
//!
//! Boundary geometry is opaque here: only `Point` features carrying a
//! `name` property contribute coordinates, everything else is ignored.
use crate::error::{AppError, Result};
use crate::types::{BubbleItem, CompositionRecord};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// `[longitude, latitude]` keyed by country display name.
pub type Coordinates = HashMap<String, [f64; 2]>;

pub fn load_point_coordinates(path: &Path) -> Result<Coordinates> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    point_coordinates(&value)
}

pub fn point_coordinates(collection: &Value) -> Result<Coordinates> {
    let features = collection
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::Geo("expected a FeatureCollection with `features`".to_string()))?;

    let mut coords = Coordinates::new();
    for feature in features {
        let Some(name) = feature.pointer("/properties/name").and_then(Value::as_str) else {
            continue;
        };
        let Some(geometry) = feature.get("geometry") else {
            continue;
        };
        if geometry.get("type").and_then(Value::as_str) != Some("Point") {
            continue;
        }
        let pair = geometry
            .get("coordinates")
            .and_then(Value::as_array)
            .and_then(|c| Some([c.first()?.as_f64()?, c.get(1)?.as_f64()?]));
        if let Some(pair) = pair {
            coords.insert(name.to_string(), pair);
        }
    }
    log::debug!("Loaded {} point coordinates", coords.len());
    Ok(coords)
}

/// One bubble per composition record whose country has coordinates.
pub fn bubble_items(records: &[CompositionRecord], coords: &Coordinates) -> Vec<BubbleItem> {
    records
        .iter()
        .filter_map(|r| {
            let coordinates = *coords.get(&r.country_name)?;
            Some(BubbleItem {
                id: r.country_code.clone(),
                name: r.country_name.clone(),
                value: r.total_employed,
                coordinates,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_named_points_only() {
        let fc = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "Tonga"},
                 "geometry": {"type": "Point", "coordinates": [-175.2, -21.1]}},
                {"type": "Feature", "properties": {"name": "Fiji"},
                 "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0]]]}},
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}}
            ]
        });
        let coords = point_coordinates(&fc).unwrap();
        assert_eq!(coords.len(), 1);
        assert_eq!(coords["Tonga"], [-175.2, -21.1]);
    }

    #[test]
    fn rejects_non_collections() {
        assert!(matches!(point_coordinates(&json!({"type": "Point"})), Err(AppError::Geo(_))));
    }
}
