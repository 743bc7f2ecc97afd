//! Defines the expense model and the database queries for expenses.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    database_id::{DatabaseId, ExpenseId},
};

// ============================================================================
// MODELS
// ============================================================================

/// A record of money spent on an item.
///
/// To create a new `Expense`, use [Expense::build].
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense, assigned by the database.
    pub id: DatabaseId,
    /// What the money was spent on.
    pub item_name: String,
    /// How much was spent. Never negative.
    pub amount: f64,
    /// When the expense was recorded, formatted as `YYYY-MM-DD HH:MM:SS` local time.
    pub date: String,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [ExpenseBuilder] for discoverability.
    pub fn build(item_name: &str, amount: f64) -> ExpenseBuilder {
        ExpenseBuilder {
            item_name: item_name.to_owned(),
            amount,
            date: None,
        }
    }
}

/// A builder for creating [Expense] instances.
///
/// The builder does not check its fields, validation happens where user
/// input is parsed (see [crate::expense::ExpenseForm]).
#[derive(Debug, PartialEq, Clone)]
pub struct ExpenseBuilder {
    /// What the money was spent on.
    pub item_name: String,

    /// How much was spent.
    pub amount: f64,

    /// When the expense was recorded.
    ///
    /// - `Some(date)` - Stored as given, e.g. `"2025-10-05 09:30:00"`
    /// - `None` - The database fills in the current local time
    pub date: Option<String>,
}

impl ExpenseBuilder {
    /// Set the date for the expense.
    pub fn date(mut self, date: Option<&str>) -> Self {
        self.date = date.map(str::to_owned);
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new expense in the database from a builder.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn insert_expense(builder: ExpenseBuilder, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "INSERT INTO expense (item_name, amount, date)
             VALUES (?1, ?2, COALESCE(?3, datetime('now', 'localtime')))
             RETURNING id, item_name, amount, date",
        )?
        .query_row(
            (builder.item_name, builder.amount, builder.date),
            map_expense_row,
        )?;

    Ok(expense)
}

/// Retrieve every expense, latest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare("SELECT id, item_name, amount, date FROM expense ORDER BY id DESC")?
        .query_map([], map_expense_row)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::from)
}

/// Retrieve the amount of every expense, in no particular order.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_amounts(connection: &Connection) -> Result<Vec<f64>, Error> {
    connection
        .prepare("SELECT amount FROM expense")?
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::from)
}

pub type RowsAffected = usize;

/// Delete the expense with `id`.
///
/// Deleting an expense that does not exist is not an error, zero rows are
/// affected instead.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])
        .map_err(|err| err.into())
}

/// Get the total number of expenses in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
#[cfg(test)]
pub fn count_expenses(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM expense;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the expense table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                item_name TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL DEFAULT (datetime('now', 'localtime'))
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to an Expense.
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let item_name = row.get(1)?;
    let amount = row.get(2)?;
    let date = row.get(3)?;

    Ok(Expense {
        id,
        item_name,
        amount,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================
