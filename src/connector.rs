//! Pluggable connector between resolved endpoints and a live client.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::Client;
use mongodb::options::{ClientOptions, Credential, ServerAddress};
use tracing::debug;

use crate::connection::Connection;
use crate::error::{DatasourceError, DatasourceResult};

/// Strategy for turning resolved endpoints into a [`Connection`].
///
/// The factory drives this trait, so substituting it swaps out the real
/// deployment. Tests connect against a stub; production code uses
/// [`DriverConnector`].
#[async_trait]
pub trait Connector: Send + Sync {
    /// Connect directly to a single endpoint.
    async fn connect_address(
        &self,
        address: &ServerAddress,
        database: &str,
        credential: Option<Credential>,
    ) -> DatasourceResult<Connection>;

    /// Connect to a seed list, leaving member discovery to the driver.
    async fn connect_seeds(
        &self,
        seeds: &[ServerAddress],
        database: &str,
        credential: Option<Credential>,
    ) -> DatasourceResult<Connection>;
}

/// The default connector, backed by the MongoDB driver.
///
/// Endpoint hostnames are resolved eagerly before the client is built,
/// so an unresolvable host surfaces as a connection error at lookup time
/// instead of on first use.
#[derive(Debug, Clone)]
pub struct DriverConnector {
    app_name: Option<String>,
    connect_timeout: Option<Duration>,
    server_selection_timeout: Option<Duration>,
    resolve_hosts: bool,
}

impl Default for DriverConnector {
    fn default() -> Self {
        Self {
            app_name: Some("mongo-datasource".to_string()),
            connect_timeout: None,
            server_selection_timeout: None,
            resolve_hosts: true,
        }
    }
}

impl DriverConnector {
    /// Create a connector with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application name (shown in server logs).
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Set the server selection timeout.
    pub fn server_selection_timeout(mut self, duration: Duration) -> Self {
        self.server_selection_timeout = Some(duration);
        self
    }

    /// Enable or disable eager host resolution.
    pub fn resolve_hosts(mut self, enabled: bool) -> Self {
        self.resolve_hosts = enabled;
        self
    }

    async fn resolve(&self, hosts: &[ServerAddress]) -> DatasourceResult<()> {
        if !self.resolve_hosts {
            return Ok(());
        }
        for address in hosts {
            if let ServerAddress::Tcp { host, port } = address {
                let mut resolved = tokio::net::lookup_host((host.as_str(), port.unwrap_or(27017)))
                    .await
                    .map_err(|e| {
                        DatasourceError::connection(format!(
                            "failed to resolve host '{}': {}",
                            host, e
                        ))
                    })?;
                if resolved.next().is_none() {
                    return Err(DatasourceError::connection(format!(
                        "host '{}' resolved to no addresses",
                        host
                    )));
                }
            }
        }
        Ok(())
    }

    fn build_client(
        &self,
        hosts: Vec<ServerAddress>,
        credential: Option<Credential>,
        direct: bool,
    ) -> DatasourceResult<Client> {
        let mut options = ClientOptions::builder().hosts(hosts).build();
        options.app_name = self.app_name.clone();
        options.connect_timeout = self.connect_timeout;
        options.server_selection_timeout = self.server_selection_timeout;
        options.credential = credential;
        if direct {
            options.direct_connection = Some(true);
        }

        Client::with_options(options)
            .map_err(|e| DatasourceError::connection(format!("failed to create client: {}", e)))
    }
}

#[async_trait]
impl Connector for DriverConnector {
    async fn connect_address(
        &self,
        address: &ServerAddress,
        database: &str,
        credential: Option<Credential>,
    ) -> DatasourceResult<Connection> {
        self.resolve(std::slice::from_ref(address)).await?;

        debug!(address = %address, database = %database, "connecting to single endpoint");
        let client = self.build_client(vec![address.clone()], credential, true)?;
        Ok(Connection::new(client, database))
    }

    async fn connect_seeds(
        &self,
        seeds: &[ServerAddress],
        database: &str,
        credential: Option<Credential>,
    ) -> DatasourceResult<Connection> {
        self.resolve(seeds).await?;

        debug!(seeds = seeds.len(), database = %database, "connecting to seed list");
        let client = self.build_client(seeds.to_vec(), credential, false)?;
        Ok(Connection::new(client, database))
    }
}
