//! Object factory resolving directory references into connections.

use std::any::Any;

use tracing::info;

use crate::config::{DatasourceConfig, is_blank};
use crate::connection::Connection;
use crate::connector::{Connector, DriverConnector};
use crate::endpoint;
use crate::error::DatasourceResult;

/// An ordered collection of named string properties describing a datasource.
///
/// Entry order is preserved: scalar properties are last-write-wins while
/// `seeds` accumulates, so the order entries arrive in is part of the
/// contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reference {
    entries: Vec<(String, String)>,
}

impl Reference {
    /// Create an empty reference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property, consuming and returning the reference.
    pub fn entry(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(name, value);
        self
    }

    /// Append a property in place.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Iterate the properties in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the reference carries no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Object factory turning named properties into datasource connections.
///
/// Resolution is soft where the input is merely incomplete and hard where
/// it is wrong: a reference missing required properties yields `Ok(None)`,
/// while an invalid property value or a failed connection attempt is an
/// error.
#[derive(Debug, Default)]
pub struct DatasourceFactory<C = DriverConnector> {
    connector: C,
}

impl DatasourceFactory {
    /// Create a factory backed by the default driver connector.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Connector> DatasourceFactory<C> {
    /// Create a factory backed by the given connector.
    pub fn with_connector(connector: C) -> Self {
        Self { connector }
    }

    /// The connector in use.
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Resolve an opaque object into a connection.
    ///
    /// Only [`Reference`] values resolve; any other object yields `None`
    /// without side effects.
    pub async fn resolve(
        &self,
        object: &(dyn Any + Send + Sync),
    ) -> DatasourceResult<Option<Connection>> {
        match object.downcast_ref::<Reference>() {
            Some(reference) => self.resolve_reference(reference).await,
            None => Ok(None),
        }
    }

    /// Resolve a reference by applying its properties in order.
    ///
    /// The first invalid property value aborts resolution.
    pub async fn resolve_reference(
        &self,
        reference: &Reference,
    ) -> DatasourceResult<Option<Connection>> {
        let mut config = DatasourceConfig::new();
        for (name, value) in reference.entries() {
            config.apply(name, value)?;
        }
        self.connect(config).await
    }

    /// Connect using an accumulated configuration.
    ///
    /// An unsatisfied configuration yields `None`. When both an address
    /// and seeds are present, the address wins.
    pub async fn connect(&self, config: DatasourceConfig) -> DatasourceResult<Option<Connection>> {
        if !config.is_satisfied() {
            return Ok(None);
        }

        let database = match config.database() {
            Some(name) => name,
            None => return Ok(None),
        };
        let credential = config.credential();

        let mut connection = match config.address() {
            Some(address) if !is_blank(Some(address)) => {
                let endpoint = endpoint::parse_endpoint(address)?;
                self.connector
                    .connect_address(&endpoint, database, credential)
                    .await?
            }
            _ => {
                self.connector
                    .connect_seeds(config.seeds(), database, credential)
                    .await?
            }
        };

        if let Some(concern) = config.write_concern() {
            connection.set_write_concern(concern);
        }
        if let Some(preference) = config.read_preference() {
            connection.set_read_preference(preference);
        }

        info!(database = %database, "datasource connection created");
        Ok(Some(connection))
    }
}
