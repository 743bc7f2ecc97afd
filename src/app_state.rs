//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::{Error, config::AppConfig, db::Database};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Where the database and generated files live.
    pub config: Arc<AppConfig>,

    /// The handle used to open database connections.
    pub database: Database,
}

impl AppState {
    /// Create a new [AppState] from `config`.
    ///
    /// This function will create the database file and its tables if they do
    /// not exist yet.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(config: AppConfig) -> Result<Self, Error> {
        let database = Database::open(&config.db_path)?;

        Ok(Self {
            config: Arc::new(config),
            database,
        })
    }
}
