//! Primitive domain types.

use serde::{Deserialize, Serialize};

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The only region this deployment serves. Singapore, per product scope.
pub const REGION_CODE: &str = "SG";

/// Whether the submitter actually saw the bird or is reporting a miss.
///
/// Canonical wire/database values are `seen` and `not_seen`. Older
/// clients sent `sighted`/`unsighted` and `not seen`; those spellings
/// are still accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SightingStatus {
    #[serde(alias = "sighted")]
    Seen,
    #[serde(alias = "unsighted", alias = "not seen")]
    NotSeen,
}

impl SightingStatus {
    /// Canonical string form, matching the database CHECK constraint.
    pub fn as_str(&self) -> &'static str {
        match self {
            SightingStatus::Seen => "seen",
            SightingStatus::NotSeen => "not_seen",
        }
    }
}

impl std::fmt::Display for SightingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SightingStatus {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seen" | "sighted" => Ok(SightingStatus::Seen),
            "not_seen" | "not seen" | "unsighted" => Ok(SightingStatus::NotSeen),
            other => Err(crate::error::CoreError::Validation(format!(
                "Unknown sighting status: {other}"
            ))),
        }
    }
}

/// Which record sets the map feed draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Observations,
    Sightings,
    #[default]
    Both,
}

impl DataSource {
    pub fn includes_observations(&self) -> bool {
        matches!(self, DataSource::Observations | DataSource::Both)
    }

    pub fn includes_sightings(&self) -> bool {
        matches!(self, DataSource::Sightings | DataSource::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_canonical_values() {
        assert_eq!(
            serde_json::from_str::<SightingStatus>("\"seen\"").unwrap(),
            SightingStatus::Seen
        );
        assert_eq!(
            serde_json::to_string(&SightingStatus::NotSeen).unwrap(),
            "\"not_seen\""
        );
    }

    #[test]
    fn status_accepts_legacy_spellings() {
        for (input, expected) in [
            ("\"sighted\"", SightingStatus::Seen),
            ("\"unsighted\"", SightingStatus::NotSeen),
            ("\"not seen\"", SightingStatus::NotSeen),
        ] {
            assert_eq!(
                serde_json::from_str::<SightingStatus>(input).unwrap(),
                expected,
                "input: {input}"
            );
        }
    }

    #[test]
    fn data_source_defaults_to_both() {
        let ds = DataSource::default();
        assert!(ds.includes_observations());
        assert!(ds.includes_sightings());
    }
}
