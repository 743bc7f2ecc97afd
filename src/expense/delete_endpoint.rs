use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    AppState, Error, database_id::ExpenseId, db::Database, endpoints, expense::delete_expense,
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The handle used to open database connections.
    pub database: Database,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            database: state.database.clone(),
        }
    }
}

/// A route handler for deleting an expense, redirects to the expense list.
///
/// Deleting an expense that does not exist does nothing.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Response, Error> {
    let rows_affected = state
        .database
        .with_connection(|connection| delete_expense(expense_id, connection))
        .inspect_err(|error| tracing::error!("Could not delete expense {expense_id}: {error}"))?;

    if rows_affected == 0 {
        tracing::info!("Expense {expense_id} was already gone, nothing to delete");
    }

    Ok(Redirect::to(endpoints::ROOT).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        expense::{Expense, delete_expense_endpoint, get_all_expenses},
        test_utils::{TestApp, assert_redirects_to},
    };

    use super::DeleteExpenseState;

    fn delete_state(app: &TestApp) -> DeleteExpenseState {
        DeleteExpenseState {
            database: app.state.database.clone(),
        }
    }

    #[tokio::test]
    async fn deletes_expense() {
        let app = TestApp::new();
        let coffee = app.insert(Expense::build("Coffee", 4.5));
        let tea = app.insert(Expense::build("Tea", 3.0));

        let response = delete_expense_endpoint(State(delete_state(&app)), Path(coffee.id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_redirects_to(&response, "/");
        let expenses = app.state.database.with_connection(get_all_expenses).unwrap();
        assert_eq!(expenses, vec![tea]);
    }

    #[tokio::test]
    async fn deleting_missing_expense_redirects_and_changes_nothing() {
        let app = TestApp::new();
        let coffee = app.insert(Expense::build("Coffee", 4.5));

        let response = delete_expense_endpoint(State(delete_state(&app)), Path(coffee.id + 100))
            .await
            .unwrap();

        assert_redirects_to(&response, "/");
        let expenses = app.state.database.with_connection(get_all_expenses).unwrap();
        assert_eq!(expenses, vec![coffee]);
    }
}
