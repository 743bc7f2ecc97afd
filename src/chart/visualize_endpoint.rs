use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::{AppState, Error, chart::generate_chart, config::AppConfig, db::Database, endpoints};

/// The state needed to regenerate the spending chart.
#[derive(Debug, Clone)]
pub struct VisualizeState {
    /// The handle used to open database connections.
    pub database: Database,
    /// Where the chart is written.
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for VisualizeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            database: state.database.clone(),
            config: state.config.clone(),
        }
    }
}

/// A route handler that redraws the spending chart and redirects to the
/// expense list, where the new chart is shown.
///
/// # Errors
/// Returns an error if the chart could not be generated.
pub async fn visualize_endpoint(State(state): State<VisualizeState>) -> Result<Response, Error> {
    generate_chart(&state.database, &state.config)?;

    Ok(Redirect::to(endpoints::ROOT).into_response())
}
