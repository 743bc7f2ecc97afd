//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    chart::visualize_endpoint,
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_expenses_page, send_email_endpoint,
    },
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// Files in the output directory, such as the spending chart, are served
/// under [endpoints::STATIC].
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.output_dir);

    Router::new()
        .route(
            endpoints::ROOT,
            get(get_expenses_page).post(create_expense_endpoint),
        )
        .route(endpoints::DELETE_EXPENSE, post(delete_expense_endpoint))
        .route(endpoints::SEND_EMAIL, post(send_email_endpoint))
        .route(endpoints::VISUALIZE, get(visualize_endpoint))
        .nest_service(endpoints::STATIC, static_files)
        .fallback(get_404_not_found)
        .with_state(state)
}
