//! The storage layer: a handle to the SQLite database file that hands out
//! short-lived connections.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, expense::create_expense_table};

/// A handle to the application database file.
///
/// The handle only stores the path. Each call to [Database::with_connection]
/// opens its own connection and closes it again before returning, so no
/// connection outlives the request that needed it.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Open the database at `path`, creating the file and the tables if they
    /// do not exist yet.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the file cannot be opened or the tables
    /// cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let database = Self {
            path: path.as_ref().to_path_buf(),
        };

        database.with_connection(initialize)?;

        Ok(database)
    }

    /// The path to the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `f` with a fresh connection to the database.
    ///
    /// The connection is closed when this function returns, whether `f`
    /// succeeded or not.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the connection cannot be opened, or
    /// whatever error `f` returns.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&Connection) -> Result<T, Error>,
    {
        let connection = Connection::open(&self.path)?;

        f(&connection)
    }
}

/// Create the tables for the domain models.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an error if a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
