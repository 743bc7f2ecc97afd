//! Defines the endpoint for adding a new expense.
use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;

use crate::{
    AppState, Error, endpoints,
    db::Database,
    expense::{ExpenseForm, insert_expense},
};

/// The state needed to add an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The handle used to open database connections.
    pub database: Database,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            database: state.database.clone(),
        }
    }
}

/// A route handler for adding an expense, always redirects to the expense list.
///
/// Invalid input is logged and otherwise ignored, the user is sent back to the
/// unchanged list either way.
///
/// # Errors
/// Returns an error if the expense could not be stored.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Result<Response, Error> {
    let expense = match form.validate() {
        Ok(expense) => expense,
        Err(error) => {
            tracing::warn!("Error when adding item: {error}");
            return Ok(Redirect::to(endpoints::ROOT).into_response());
        }
    };

    let expense = state
        .database
        .with_connection(|connection| insert_expense(expense, connection))
        .inspect_err(|error| tracing::error!("could not create expense: {error}"))?;

    tracing::info!(
        "Added expense {} \"{}\" for {}",
        expense.id,
        expense.item_name,
        expense.amount
    );

    Ok(Redirect::to(endpoints::ROOT).into_response())
}
