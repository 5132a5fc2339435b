//! Error types for datasource resolution.

use thiserror::Error;

/// Result type for datasource operations.
pub type DatasourceResult<T> = Result<T, DatasourceError>;

/// Errors that can occur while translating properties into a connection.
///
/// Missing required properties are deliberately not represented here: the
/// factory reports them by resolving to `None` so that a directory lookup
/// can move on to its next candidate.
#[derive(Error, Debug)]
pub enum DatasourceError {
    /// MongoDB driver error.
    #[error("mongodb error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// A `writeConcern` property named a level outside the known set.
    #[error("unknown write concern '{0}'")]
    UnknownWriteConcern(String),

    /// A `readPreference` property named a mode outside the known set.
    #[error("unknown read preference '{0}'")]
    UnknownReadPreference(String),

    /// An address or seed token is not a valid `host` or `host:port`.
    #[error("invalid endpoint '{address}': {message}")]
    InvalidEndpoint {
        /// The offending token as it appeared in the property value.
        address: String,
        /// What the parser objected to.
        message: String,
    },

    /// The connector could not produce a client for the configuration.
    #[error("connection error: {0}")]
    Connection(String),
}

impl DatasourceError {
    /// Create an invalid endpoint error.
    pub fn invalid_endpoint(address: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            address: address.into(),
            message: message.into(),
        }
    }

    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Check if this is a rejected property value (write concern or read
    /// preference name outside the known sets).
    pub fn is_invalid_value(&self) -> bool {
        matches!(
            self,
            Self::UnknownWriteConcern(_) | Self::UnknownReadPreference(_)
        )
    }

    /// Check if this is a malformed endpoint token.
    pub fn is_invalid_endpoint(&self) -> bool {
        matches!(self, Self::InvalidEndpoint { .. })
    }

    /// Check if this is a connection-level failure.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
