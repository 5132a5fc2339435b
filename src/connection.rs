//! Connection handle pairing a live client with its bound database.

use bson::{Document, doc};
use mongodb::options::DatabaseOptions;
use mongodb::{Client, Database};

use crate::error::{DatasourceError, DatasourceResult};
use crate::policy::{ReadPreference, WriteConcern};

/// A resolved datasource connection.
///
/// The driver pools connections internally, so this is a cheap handle:
/// it pairs the shared client with the database name the lookup bound
/// and the durability policies applied to it.
#[derive(Clone, Debug)]
pub struct Connection {
    client: Client,
    name: String,
    write_concern: Option<WriteConcern>,
    read_preference: Option<ReadPreference>,
}

impl Connection {
    /// Create a connection bound to a database name.
    pub fn new(client: Client, name: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
            write_concern: None,
            read_preference: None,
        }
    }

    /// Set the write concern applied to the bound database.
    pub fn set_write_concern(&mut self, concern: WriteConcern) {
        self.write_concern = Some(concern);
    }

    /// Set the read preference applied to the bound database.
    pub fn set_read_preference(&mut self, preference: ReadPreference) {
        self.read_preference = Some(preference);
    }

    /// The write concern in effect, if one was applied.
    pub fn write_concern(&self) -> Option<WriteConcern> {
        self.write_concern
    }

    /// The read preference in effect, if one was applied.
    pub fn read_preference(&self) -> Option<ReadPreference> {
        self.read_preference
    }

    /// The name of the bound database.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The bound database, with the applied policies in effect.
    ///
    /// Policies left unset stay at the driver's defaults.
    pub fn database(&self) -> Database {
        let mut options = DatabaseOptions::default();
        options.write_concern = self.write_concern.map(|concern| concern.to_driver());
        options.selection_criteria = self
            .read_preference
            .map(|preference| preference.to_selection_criteria());
        self.client.database_with_options(&self.name, options)
    }

    /// Run a database command.
    pub async fn run_command(&self, command: Document) -> DatasourceResult<Document> {
        let result = self
            .database()
            .run_command(command, None)
            .await
            .map_err(DatasourceError::from)?;
        Ok(result)
    }

    /// Check if the connection is healthy by pinging the server.
    pub async fn is_healthy(&self) -> bool {
        self.run_command(doc! { "ping": 1 }).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use mongodb::options::{ClientOptions, SelectionCriteria, ServerAddress};

    use super::*;

    // The driver connects lazily, so a client built from parsed options
    // never dials anything in these tests. Construction still spawns the
    // topology worker, which needs the tokio runtime.
    fn offline_client() -> Client {
        let options = ClientOptions::builder()
            .hosts(vec![ServerAddress::parse("127.0.0.1:27017").unwrap()])
            .build();
        Client::with_options(options).unwrap()
    }

    #[tokio::test]
    async fn test_connection_binds_database_name() {
        let connection = Connection::new(offline_client(), "some_db");
        assert_eq!(connection.name(), "some_db");
        assert_eq!(connection.database().name(), "some_db");
    }

    #[tokio::test]
    async fn test_policies_default_to_unset() {
        let connection = Connection::new(offline_client(), "some_db");
        assert_eq!(connection.write_concern(), None);
        assert_eq!(connection.read_preference(), None);

        let database = connection.database();
        assert!(database.write_concern().is_none());
        assert!(database.selection_criteria().is_none());
    }

    #[tokio::test]
    async fn test_policies_observable_after_set() {
        let mut connection = Connection::new(offline_client(), "some_db");
        connection.set_write_concern(WriteConcern::Majority);
        connection.set_read_preference(ReadPreference::Nearest);

        assert_eq!(connection.write_concern(), Some(WriteConcern::Majority));
        assert_eq!(connection.read_preference(), Some(ReadPreference::Nearest));
    }

    #[tokio::test]
    async fn test_database_carries_applied_policies() {
        let mut connection = Connection::new(offline_client(), "some_db");
        connection.set_write_concern(WriteConcern::Majority);
        connection.set_read_preference(ReadPreference::Nearest);

        let database = connection.database();
        assert!(database.write_concern().is_some());
        assert!(matches!(
            database.selection_criteria(),
            Some(SelectionCriteria::ReadPreference(
                mongodb::options::ReadPreference::Nearest { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_debug_names_bound_database() {
        let connection = Connection::new(offline_client(), "some_db");
        let rendered = format!("{connection:?}");
        assert!(rendered.contains("some_db"));
    }
}
