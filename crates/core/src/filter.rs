//! Map feed filtering.
//!
//! One filter type covers both record sets so the observation and sighting
//! paths cannot drift apart.

use serde::Deserialize;

use crate::types::{DataSource, SightingStatus};

/// Filter criteria for the map feed.
///
/// Empty/absent fields match everything. Species matching is exact string
/// equality on the stored names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapFilter {
    #[serde(default)]
    pub data_source: DataSource,
    pub common_name: Option<String>,
    pub sci_name: Option<String>,
    /// Only meaningful for sightings; observations carry no status.
    pub status: Option<SightingStatus>,
}

impl MapFilter {
    /// Does a record with these species names pass the species criteria?
    pub fn matches_species(&self, common_name: &str, sci_name: &str) -> bool {
        if let Some(want) = &self.common_name {
            if !want.is_empty() && want != common_name {
                return false;
            }
        }
        if let Some(want) = &self.sci_name {
            if !want.is_empty() && want != sci_name {
                return false;
            }
        }
        true
    }

    /// Does a sighting with this status pass the status criteria?
    pub fn matches_status(&self, status: SightingStatus) -> bool {
        match self.status {
            Some(want) => want == status,
            None => true,
        }
    }
}

/// Apply a predicate to a record list, preserving the original relative
/// order of the records that pass.
pub fn apply_filter<T, F>(records: Vec<T>, mut pred: F) -> Vec<T>
where
    F: FnMut(&T) -> bool,
{
    records.into_iter().filter(|r| pred(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec {
        common: &'static str,
        sci: &'static str,
        status: SightingStatus,
    }

    fn sample() -> Vec<Rec> {
        vec![
            Rec {
                common: "Olive-backed Sunbird",
                sci: "Cinnyris jugularis",
                status: SightingStatus::Seen,
            },
            Rec {
                common: "Javan Myna",
                sci: "Acridotheres javanicus",
                status: SightingStatus::Seen,
            },
            Rec {
                common: "Olive-backed Sunbird",
                sci: "Cinnyris jugularis",
                status: SightingStatus::NotSeen,
            },
        ]
    }

    #[test]
    fn common_name_filter_keeps_only_matches_in_order() {
        let filter = MapFilter {
            common_name: Some("Olive-backed Sunbird".to_string()),
            ..Default::default()
        };
        let out = apply_filter(sample(), |r| filter.matches_species(r.common, r.sci));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].status, SightingStatus::Seen);
        assert_eq!(out[1].status, SightingStatus::NotSeen);
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = MapFilter::default();
        let out = apply_filter(sample(), |r| {
            filter.matches_species(r.common, r.sci) && filter.matches_status(r.status)
        });
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn status_filter_applies_to_sightings() {
        let filter = MapFilter {
            status: Some(SightingStatus::NotSeen),
            ..Default::default()
        };
        let out = apply_filter(sample(), |r| filter.matches_status(r.status));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].common, "Olive-backed Sunbird");
    }

    #[test]
    fn empty_string_criteria_are_ignored() {
        let filter = MapFilter {
            common_name: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.matches_species("Javan Myna", "Acridotheres javanicus"));
    }
}
