//! Region to city lookup tables.
//!
//! Both tables are static and feed the same pipeline; only their content
//! differs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocationEntry {
    pub region: &'static str,
    pub city: &'static str,
}

const fn entry(region: &'static str, city: &'static str) -> LocationEntry {
    LocationEntry { region, city }
}

const STATE_CAPITALS: &[LocationEntry] = &[
    entry("Andhra Pradesh", "Amaravati"),
    entry("Arunachal Pradesh", "Itanagar"),
    entry("Assam", "Dispur"),
    entry("Bihar", "Patna"),
    entry("Chhattisgarh", "Raipur"),
    entry("Goa", "Panaji"),
    entry("Gujarat", "Gandhinagar"),
    entry("Haryana", "Chandigarh"),
    entry("Himachal Pradesh", "Shimla"),
    entry("Jharkhand", "Ranchi"),
    entry("Karnataka", "Bengaluru"),
    entry("Kerala", "Thiruvananthapuram"),
    entry("Madhya Pradesh", "Bhopal"),
    entry("Maharashtra", "Mumbai"),
    entry("Manipur", "Imphal"),
    entry("Meghalaya", "Shillong"),
    entry("Mizoram", "Aizawl"),
    entry("Nagaland", "Kohima"),
    entry("Odisha", "Bhubaneswar"),
    entry("Punjab", "Chandigarh"),
    entry("Rajasthan", "Jaipur"),
    entry("Sikkim", "Gangtok"),
    entry("Tamil Nadu", "Chennai"),
    entry("Telangana", "Hyderabad"),
    entry("Tripura", "Agartala"),
    entry("Uttar Pradesh", "Lucknow"),
    entry("Uttarakhand", "Dehradun"),
    entry("West Bengal", "Kolkata"),
];

const METROS: &[LocationEntry] = &[
    entry("New Delhi", "New Delhi"),
    entry("Mumbai", "Mumbai"),
    entry("Bangalore", "Bangalore"),
    entry("Kolkata", "Kolkata"),
    entry("Chennai", "Chennai"),
    entry("Hyderabad", "Hyderabad"),
    entry("Pune", "Pune"),
];

/// Which lookup table backs a [`Catalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    #[default]
    StateCapitals,
    Metros,
}

impl CatalogKind {
    fn table(self) -> &'static [LocationEntry] {
        match self {
            CatalogKind::StateCapitals => STATE_CAPITALS,
            CatalogKind::Metros => METROS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::StateCapitals => "state_capitals",
            CatalogKind::Metros => "metros",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    kind: CatalogKind,
    entries: Vec<LocationEntry>,
}

impl Catalog {
    pub fn new(kind: CatalogKind) -> Self {
        let mut entries = kind.table().to_vec();
        entries.sort_by(|a, b| a.region.cmp(b.region));
        entries.dedup_by(|a, b| a.region == b.region);
        Self { kind, entries }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// Entries in display order (ascending by region).
    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }

    pub fn regions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.region)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve_city(&self, region: &str) -> Result<&'static str> {
        self.entries
            .binary_search_by(|entry| entry.region.cmp(region))
            .map(|index| self.entries[index].city)
            .map_err(|_| TrackerError::UnknownRegion(region.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(CatalogKind::default())
    }
}
