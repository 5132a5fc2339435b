//! # mongo-datasource
//!
//! Directory-style object factory for MongoDB connections.
//!
//! This crate provides:
//! - A [`Reference`] of named string properties describing a datasource
//! - Property validation with soft and hard failure modes
//! - Seed list parsing with additive accumulation
//! - Write concern and read preference selection by name
//! - A pluggable [`Connector`] seam for tests and alternative transports
//!
//! ## Example
//!
//! ```rust,ignore
//! use mongo_datasource::{DatasourceFactory, Reference};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reference = Reference::new()
//!         .entry("address", "127.0.0.1:27017")
//!         .entry("database", "orders")
//!         .entry("writeConcern", "MAJORITY");
//!
//!     // A reference missing its required properties resolves to None
//!     // instead of failing, so lookups stay soft.
//!     let factory = DatasourceFactory::new();
//!     if let Some(connection) = factory.resolve_reference(&reference).await? {
//!         let orders = connection.database();
//!         println!("bound to {}", orders.name());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connection;
pub mod connector;
pub mod endpoint;
pub mod error;
pub mod factory;
pub mod policy;
pub mod secret;

pub use config::DatasourceConfig;
pub use connection::Connection;
pub use connector::{Connector, DriverConnector};
pub use error::{DatasourceError, DatasourceResult};
pub use factory::{DatasourceFactory, Reference};
pub use policy::{ReadPreference, WriteConcern};
pub use secret::Secret;

pub use mongodb::options::{Credential, ServerAddress};
pub use mongodb::{Client, Database};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::DatasourceConfig;
    pub use crate::connection::Connection;
    pub use crate::connector::{Connector, DriverConnector};
    pub use crate::error::{DatasourceError, DatasourceResult};
    pub use crate::factory::{DatasourceFactory, Reference};
    pub use crate::policy::{ReadPreference, WriteConcern};
    pub use crate::secret::Secret;
    pub use mongodb::options::{Credential, ServerAddress};
}
