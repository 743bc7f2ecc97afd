//! Defines the app level error type and its conversion to rendered HTML pages.
use axum::response::{IntoResponse, Response};

use crate::internal_server_error::InternalServerError;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The item name of an expense was missing or only contained whitespace.
    #[error("item name cannot be empty")]
    EmptyItemName,

    /// The price field of the expense form was missing or empty.
    #[error("price cannot be empty")]
    MissingPrice,

    /// The price could not be parsed as a finite number.
    ///
    /// Callers should pass in the raw price string that caused the error.
    #[error("could not parse \"{0}\" as a price")]
    InvalidPrice(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// The directory for the chart image could not be created.
    #[error("could not create the output directory \"{0}\": {1}")]
    OutputDirectoryError(String, String),

    /// The spending chart could not be drawn or written to disk.
    #[error("could not render the spending chart: {0}")]
    ChartError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::OutputDirectoryError(_, _) => {
                tracing::error!("Could not generate the chart: {self}");
                InternalServerError {
                    description: "Could not create the spending chart.",
                    fix: "Check that the server can write to its output directory.",
                }
                .into_response()
            }
            Error::ChartError(_) => {
                tracing::error!("Could not generate the chart: {self}");
                InternalServerError {
                    description: "Could not create the spending chart.",
                    fix: "Check the server logs, an amount may be too large to chart.",
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
