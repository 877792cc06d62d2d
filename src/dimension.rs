//! The axes along which the statistics API slices its data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Country,
    Genre,
    Department,
    Year,
    Company,
}

impl Dimension {
    /// All dimensions in the order the dashboard shows them.
    pub const ALL: [Dimension; 5] = [
        Dimension::Country,
        Dimension::Genre,
        Dimension::Department,
        Dimension::Year,
        Dimension::Company,
    ];

    /// Path segment appended to the statistics base URL.
    pub fn segment(self) -> &'static str {
        match self {
            Dimension::Country => "country",
            Dimension::Genre => "genre",
            Dimension::Department => "department",
            Dimension::Year => "year",
            Dimension::Company => "company",
        }
    }

    /// Name of the record field holding this dimension's key.
    pub fn key_field(self) -> &'static str {
        self.segment()
    }

    /// Human readable label used on tabs.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Country => "Country",
            Dimension::Genre => "Genre",
            Dimension::Department => "Department",
            Dimension::Year => "Year",
            Dimension::Company => "Company",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Dimension::Country => "movie production countries",
            Dimension::Genre => "genres",
            Dimension::Department => "departments",
            Dimension::Year => "release years",
            Dimension::Company => "production companies",
        }
    }

    /// Message recorded in the shared error state when a fetch fails.
    pub fn failure_message(self) -> String {
        format!("Failed to fetch gender statistics for {}", self.description())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dimension: {0}")]
pub struct UnknownDimension(pub String);

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.segment() == s)
            .ok_or_else(|| UnknownDimension(s.to_string()))
    }
}
