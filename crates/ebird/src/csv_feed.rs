//! Parsing of the headerless hotspot CSV feed.
//!
//! eBird's hotspot reference endpoint returns CSV without a header row.
//! The column order is fixed:
//!
//! ```text
//! locId, countryCode, subnational1, subnational2,
//! latitude, longitude, name, lastVisit, speciesCount
//! ```
//!
//! Trailing columns are sometimes missing for rarely-visited hotspots, so
//! the reader runs in flexible mode and short rows are padded with empty
//! strings before deserialization.

use crate::client::EbirdError;
use crate::records::HotspotCsvRecord;

/// Number of columns in the hotspot feed.
const HOTSPOT_COLUMNS: usize = 9;

/// Parse the raw hotspot CSV body into typed records.
pub fn parse_hotspot_csv(text: &str) -> Result<Vec<HotspotCsvRecord>, EbirdError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(EbirdError::Csv)?;
        if row.is_empty() || (row.len() == 1 && row[0].trim().is_empty()) {
            continue;
        }

        // Pad short rows so positional deserialization still lines up.
        let mut padded = csv::StringRecord::new();
        for i in 0..HOTSPOT_COLUMNS {
            padded.push_field(row.get(i).unwrap_or(""));
        }

        let record: HotspotCsvRecord = padded.deserialize(None).map_err(EbirdError::Csv)?;
        records.push(record);
    }

    Ok(records)
}
