use tempfile::TempDir;

use crate::{
    AppState,
    config::AppConfig,
    expense::{Expense, ExpenseBuilder, insert_expense},
};

/// An [AppState] backed by a database and output directory in a temporary
/// directory that is deleted when the `TestApp` is dropped.
///
/// The output directory is not created up front.
pub(crate) struct TestApp {
    pub state: AppState,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temporary directory");
        let config = AppConfig::new(dir.path().join("cashflow.db"), dir.path().join("static"));
        let state = AppState::new(config).expect("Could not create app state");

        Self { state, _dir: dir }
    }

    #[track_caller]
    pub fn insert(&self, expense: ExpenseBuilder) -> Expense {
        self.state
            .database
            .with_connection(|connection| insert_expense(expense, connection))
            .expect("Could not insert expense")
    }
}
