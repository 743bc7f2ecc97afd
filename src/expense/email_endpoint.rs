//! Accepts an email address from the expense list page.
//!
//! The address is only checked and logged, it is never stored.

use axum::{extract::State, response::Response};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    Error,
    email::Email,
    expense::{ExpensesPageState, expenses_page::render_expenses_page},
};

/// The form data for submitting an email address.
#[derive(Debug, Default, Deserialize)]
pub struct EmailForm {
    #[serde(default)]
    pub email: Option<String>,
}

/// A route handler for submitting an email address.
///
/// Responds with the expense list page, with a confirmation message if the
/// address looked valid.
pub async fn send_email_endpoint(
    State(state): State<ExpensesPageState>,
    Form(form): Form<EmailForm>,
) -> Result<Response, Error> {
    let raw_email = form.email.unwrap_or_default();

    let email_received = match Email::new(&raw_email) {
        Ok(_) => {
            tracing::info!("Email address received");
            true
        }
        Err(_) => {
            tracing::warn!("Invalid email address received");
            false
        }
    };

    render_expenses_page(&state, email_received)
}
