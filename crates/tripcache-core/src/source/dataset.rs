//! Named reference datasets and their retrieval policy.

use std::fmt;

/// Whether a dataset's retrieval failure fails the whole snapshot build or
/// degrades to a fixed fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Retrieval failure aborts the build; no snapshot is produced.
    Required,
    /// Retrieval failure (or a wrong-shaped payload) falls back to an
    /// empty collection / default record and never surfaces as an error.
    Optional,
}

/// One named reference dataset, served as a static JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Locations,
    Adventures,
    LocationAdventures,
    Ferries,
    Cabs,
    Scooters,
    Bicycles,
    Islands,
    Meta,
}

impl Dataset {
    pub const ALL: [Dataset; 9] = [
        Dataset::Locations,
        Dataset::Adventures,
        Dataset::LocationAdventures,
        Dataset::Ferries,
        Dataset::Cabs,
        Dataset::Scooters,
        Dataset::Bicycles,
        Dataset::Islands,
        Dataset::Meta,
    ];

    /// File each dataset is served from under `/data/`.
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Locations => "locations.json",
            Dataset::Adventures => "adventures.json",
            Dataset::LocationAdventures => "location_adventures.json",
            Dataset::Ferries => "ferries.json",
            Dataset::Cabs => "cabs.json",
            Dataset::Scooters => "scooters.json",
            // The host serves this one in the singular.
            Dataset::Bicycles => "bicycle.json",
            Dataset::Islands => "islands.json",
            Dataset::Meta => "meta.json",
        }
    }

    pub fn policy(self) -> FetchPolicy {
        match self {
            Dataset::Locations
            | Dataset::Adventures
            | Dataset::Ferries
            | Dataset::Cabs
            | Dataset::Scooters => FetchPolicy::Required,
            Dataset::LocationAdventures
            | Dataset::Bicycles
            | Dataset::Islands
            | Dataset::Meta => FetchPolicy::Optional,
        }
    }

    pub fn is_required(self) -> bool {
        self.policy() == FetchPolicy::Required
    }

    fn name(self) -> &'static str {
        match self {
            Dataset::Locations => "locations",
            Dataset::Adventures => "adventures",
            Dataset::LocationAdventures => "location_adventures",
            Dataset::Ferries => "ferries",
            Dataset::Cabs => "cabs",
            Dataset::Scooters => "scooters",
            Dataset::Bicycles => "bicycles",
            Dataset::Islands => "islands",
            Dataset::Meta => "meta",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn policy_table_matches_the_loader_contract() {
        let required: Vec<Dataset> = Dataset::ALL
            .iter()
            .copied()
            .filter(|dataset| dataset.is_required())
            .collect();
        assert_eq!(
            required,
            [
                Dataset::Locations,
                Dataset::Adventures,
                Dataset::Ferries,
                Dataset::Cabs,
                Dataset::Scooters,
            ]
        );
        assert_eq!(Dataset::LocationAdventures.policy(), FetchPolicy::Optional);
        assert_eq!(Dataset::Bicycles.policy(), FetchPolicy::Optional);
        assert_eq!(Dataset::Islands.policy(), FetchPolicy::Optional);
        assert_eq!(Dataset::Meta.policy(), FetchPolicy::Optional);
    }

    #[test]
    fn every_dataset_has_a_distinct_file() {
        let files: HashSet<&str> = Dataset::ALL.iter().map(|d| d.file_name()).collect();
        assert_eq!(files.len(), Dataset::ALL.len());
    }
}
