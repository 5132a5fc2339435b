//! Property accumulation and validation for one lookup request.

use mongodb::options::{Credential, ServerAddress};
use tracing::error;

use crate::endpoint;
use crate::error::DatasourceResult;
use crate::policy::{ReadPreference, WriteConcern};
use crate::secret::Secret;

/// Property naming a single `host<:port>` endpoint.
pub const PROPERTY_ADDRESS: &str = "address";

/// Property naming a `host<:port>,host1<:port1>,...` seed list.
pub const PROPERTY_SEEDS: &str = "seeds";

/// Property naming the database to bind.
pub const PROPERTY_DATABASE: &str = "database";

/// Property naming the authentication username.
pub const PROPERTY_USERNAME: &str = "username";

/// Property carrying the authentication password.
pub const PROPERTY_PASSWORD: &str = "password";

/// Property naming one of the [`WriteConcern`] levels.
pub const PROPERTY_WRITE_CONCERN: &str = "writeConcern";

/// Property naming one of the [`ReadPreference`] modes.
pub const PROPERTY_READ_PREFERENCE: &str = "readPreference";

/// Check whether an optional string is missing, empty, or all whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

/// Accumulated connection properties for one lookup request.
///
/// Properties are applied one at a time in the order the directory
/// delivers them. Scalar keys are last-write-wins; `seeds` appends. A
/// fresh instance is expected per request.
#[derive(Debug, Default)]
pub struct DatasourceConfig {
    address: Option<String>,
    seeds: Vec<ServerAddress>,
    database: Option<String>,
    username: Option<String>,
    password: Secret,
    write_concern: Option<WriteConcern>,
    read_preference: Option<ReadPreference>,
}

impl DatasourceConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one named property.
    ///
    /// Recognized names are the `PROPERTY_*` constants, matched exactly.
    /// Scalar values are stored verbatim, without trimming. Unknown names
    /// are ignored so directory entries written for a newer version still
    /// resolve here.
    pub fn apply(&mut self, name: &str, value: &str) -> DatasourceResult<()> {
        match name {
            PROPERTY_ADDRESS => self.address = Some(value.to_string()),
            PROPERTY_SEEDS => self.add_seeds(value)?,
            PROPERTY_DATABASE => self.database = Some(value.to_string()),
            PROPERTY_USERNAME => self.username = Some(value.to_string()),
            PROPERTY_PASSWORD => self.password = Secret::new(value),
            PROPERTY_WRITE_CONCERN => self.write_concern = Some(WriteConcern::from_name(value)?),
            PROPERTY_READ_PREFERENCE => {
                self.read_preference = Some(ReadPreference::from_name(value)?)
            }
            _ => {}
        }
        Ok(())
    }

    /// Append endpoints parsed from a seed list value.
    ///
    /// Repeated application is additive and keeps the input order; a blank
    /// value is a no-op.
    pub fn add_seeds(&mut self, list: &str) -> DatasourceResult<()> {
        if !is_blank(Some(list)) {
            self.seeds.extend(endpoint::parse_seed_list(list)?);
        }
        Ok(())
    }

    /// The single endpoint address, verbatim as applied.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// The accumulated seed endpoints, in application order.
    pub fn seeds(&self) -> &[ServerAddress] {
        &self.seeds
    }

    /// The database name, verbatim as applied.
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// The username, verbatim as applied.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The applied write concern, if any.
    pub fn write_concern(&self) -> Option<WriteConcern> {
        self.write_concern
    }

    /// The applied read preference, if any.
    pub fn read_preference(&self) -> Option<ReadPreference> {
        self.read_preference
    }

    /// Check that the required properties are present.
    ///
    /// An unsatisfied configuration is the soft "not applicable" outcome
    /// rather than an error; the missing property is logged.
    pub fn is_satisfied(&self) -> bool {
        if is_blank(self.address.as_deref()) && self.seeds.is_empty() {
            error!("either an address or a seeds property is required");
            return false;
        }
        if is_blank(self.database.as_deref()) {
            error!("a database property is required");
            return false;
        }
        true
    }

    /// Assemble the authentication credential.
    ///
    /// A credential exists only when a username was supplied: the password
    /// (defaulting to empty) becomes its secret and the database name its
    /// authentication source, so the result is meaningful once the
    /// configuration is satisfied.
    pub fn credential(&self) -> Option<Credential> {
        if is_blank(self.username.as_deref()) {
            return None;
        }
        Some(
            Credential::builder()
                .username(self.username.clone())
                .password(self.password.expose().to_string())
                .source(self.database.clone())
                .build(),
        )
    }
}
