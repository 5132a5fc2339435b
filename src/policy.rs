//! Write and read policy names and their driver equivalents.
//!
//! Both sets are closed: they mirror the named constants the MongoDB
//! drivers expose, and resolving any other name is an error.

use std::fmt;
use std::str::FromStr;

use mongodb::options::{
    Acknowledgment, ReadPreference as DriverReadPreference, SelectionCriteria,
    WriteConcern as DriverWriteConcern,
};
use serde::{Deserialize, Serialize};

use crate::error::{DatasourceError, DatasourceResult};

/// Write durability level required before a write counts as successful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WriteConcern {
    /// Wait for acknowledgement from the primary.
    Acknowledged,
    /// Fire and forget.
    Unacknowledged,
    /// Wait for the primary to commit to its journal.
    Journaled,
    /// Wait for acknowledgement from a majority of nodes.
    Majority,
    /// Wait for acknowledgement from one node.
    W1,
    /// Wait for acknowledgement from two nodes.
    W2,
    /// Wait for acknowledgement from three nodes.
    W3,
}

impl WriteConcern {
    /// Resolve a symbolic write concern name.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace;
    /// anything outside the known set is rejected.
    pub fn from_name(name: &str) -> DatasourceResult<Self> {
        match name.trim().to_uppercase().as_str() {
            "ACKNOWLEDGED" => Ok(Self::Acknowledged),
            "UNACKNOWLEDGED" => Ok(Self::Unacknowledged),
            "JOURNALED" => Ok(Self::Journaled),
            "MAJORITY" => Ok(Self::Majority),
            "W1" => Ok(Self::W1),
            "W2" => Ok(Self::W2),
            "W3" => Ok(Self::W3),
            _ => Err(DatasourceError::UnknownWriteConcern(name.to_string())),
        }
    }

    /// The canonical symbolic name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Acknowledged => "ACKNOWLEDGED",
            Self::Unacknowledged => "UNACKNOWLEDGED",
            Self::Journaled => "JOURNALED",
            Self::Majority => "MAJORITY",
            Self::W1 => "W1",
            Self::W2 => "W2",
            Self::W3 => "W3",
        }
    }

    /// Convert to the driver's write concern.
    pub fn to_driver(self) -> DriverWriteConcern {
        match self {
            Self::Acknowledged => DriverWriteConcern::builder()
                .w(Acknowledgment::Nodes(1))
                .build(),
            Self::Unacknowledged => DriverWriteConcern::builder()
                .w(Acknowledgment::Nodes(0))
                .build(),
            // Journaled acknowledgement implies the primary has committed.
            Self::Journaled => DriverWriteConcern::builder()
                .w(Acknowledgment::Nodes(1))
                .journal(true)
                .build(),
            Self::Majority => DriverWriteConcern::builder()
                .w(Acknowledgment::Majority)
                .build(),
            Self::W1 => DriverWriteConcern::builder()
                .w(Acknowledgment::Nodes(1))
                .build(),
            Self::W2 => DriverWriteConcern::builder()
                .w(Acknowledgment::Nodes(2))
                .build(),
            Self::W3 => DriverWriteConcern::builder()
                .w(Acknowledgment::Nodes(3))
                .build(),
        }
    }
}

impl fmt::Display for WriteConcern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WriteConcern {
    type Err = DatasourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Routing rule determining which cluster member serves a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadPreference {
    /// Read from the primary only.
    Primary,
    /// Read from the primary, falling back to a secondary.
    PrimaryPreferred,
    /// Read from a secondary only.
    Secondary,
    /// Read from a secondary, falling back to the primary.
    SecondaryPreferred,
    /// Read from the member with the lowest latency.
    Nearest,
}

impl ReadPreference {
    /// Resolve a symbolic read preference name.
    ///
    /// Matching is case-insensitive, ignores surrounding whitespace, and
    /// accepts both `PRIMARY_PREFERRED` and `primaryPreferred` spellings.
    pub fn from_name(name: &str) -> DatasourceResult<Self> {
        match name.trim().to_uppercase().as_str() {
            "PRIMARY" => Ok(Self::Primary),
            "PRIMARY_PREFERRED" | "PRIMARYPREFERRED" => Ok(Self::PrimaryPreferred),
            "SECONDARY" => Ok(Self::Secondary),
            "SECONDARY_PREFERRED" | "SECONDARYPREFERRED" => Ok(Self::SecondaryPreferred),
            "NEAREST" => Ok(Self::Nearest),
            _ => Err(DatasourceError::UnknownReadPreference(name.to_string())),
        }
    }

    /// The canonical symbolic name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::PrimaryPreferred => "PRIMARY_PREFERRED",
            Self::Secondary => "SECONDARY",
            Self::SecondaryPreferred => "SECONDARY_PREFERRED",
            Self::Nearest => "NEAREST",
        }
    }

    /// Convert to the driver's selection criteria.
    pub fn to_selection_criteria(self) -> SelectionCriteria {
        let preference = match self {
            Self::Primary => DriverReadPreference::Primary,
            Self::PrimaryPreferred => DriverReadPreference::PrimaryPreferred {
                options: Default::default(),
            },
            Self::Secondary => DriverReadPreference::Secondary {
                options: Default::default(),
            },
            Self::SecondaryPreferred => DriverReadPreference::SecondaryPreferred {
                options: Default::default(),
            },
            Self::Nearest => DriverReadPreference::Nearest {
                options: Default::default(),
            },
        };
        SelectionCriteria::ReadPreference(preference)
    }
}

impl fmt::Display for ReadPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReadPreference {
    type Err = DatasourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
