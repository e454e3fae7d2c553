//! Grouping of co-located records into map markers.
//!
//! The map renders one marker per exact coordinate; all records sharing that
//! coordinate are listed in the marker's expandable popup. Grouping is by
//! exact equality of the (lat, lng) pair.

use std::collections::HashMap;

use serde::Serialize;

/// One rendered map marker: a coordinate plus every record located there.
#[derive(Debug, Clone, Serialize)]
pub struct MapMarker<T> {
    pub latitude: f64,
    pub longitude: f64,
    pub records: Vec<T>,
}

/// Group records by exact coordinate, preserving first-seen marker order and
/// the input order of records within each marker.
///
/// `coord` extracts the (lat, lng) pair from a record. Coordinates are keyed
/// on their bit patterns, so `0.0` and `-0.0` are distinct.
pub fn group_markers<T, F>(records: Vec<T>, mut coord: F) -> Vec<MapMarker<T>>
where
    F: FnMut(&T) -> (f64, f64),
{
    let mut index: HashMap<(u64, u64), usize> = HashMap::new();
    let mut markers: Vec<MapMarker<T>> = Vec::new();

    for record in records {
        let (lat, lng) = coord(&record);
        let key = (lat.to_bits(), lng.to_bits());
        match index.get(&key) {
            Some(&i) => markers[i].records.push(record),
            None => {
                index.insert(key, markers.len());
                markers.push(MapMarker {
                    latitude: lat,
                    longitude: lng,
                    records: vec![record],
                });
            }
        }
    }

    markers
}
