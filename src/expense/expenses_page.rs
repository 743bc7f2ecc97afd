//! The expense list page, which is also the home page.

use std::path::PathBuf;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    db::Database,
    expense::{Expense, get_all_expenses},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
    },
};

/// The state needed to render the expense list page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    /// The handle used to open database connections.
    pub database: Database,
    /// Where the spending chart is written on disk.
    pub chart_path: PathBuf,
    /// The URL the spending chart is served from.
    pub chart_url: String,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            database: state.database.clone(),
            chart_path: state.config.chart_path(),
            chart_url: endpoints::static_file(&state.config.chart_file_name),
        }
    }
}

/// Render the list of expenses, latest first.
pub async fn get_expenses_page(State(state): State<ExpensesPageState>) -> Result<Response, Error> {
    render_expenses_page(&state, false)
}

/// Render the expense list page.
///
/// `email_received` shows a confirmation that an email address was accepted.
/// The chart is only shown if the chart file currently exists.
pub(super) fn render_expenses_page(
    state: &ExpensesPageState,
    email_received: bool,
) -> Result<Response, Error> {
    let expenses = state
        .database
        .with_connection(get_all_expenses)
        .inspect_err(|error| tracing::error!("Failed to retrieve expenses: {error}"))?;

    let chart_url = state
        .chart_path
        .is_file()
        .then_some(state.chart_url.as_str());

    Ok(expenses_view(&expenses, chart_url, email_received).into_response())
}

fn expenses_view(expenses: &[Expense], chart_url: Option<&str>, email_received: bool) -> Markup {
    let table_row = |expense: &Expense| {
        let delete_url = endpoints::format_endpoint(endpoints::DELETE_EXPENSE, expense.id);

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE) { (expense.item_name) }
                td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }
                td class=(TABLE_CELL_STYLE) { (expense.date) }
                td class=(TABLE_CELL_STYLE)
                {
                    form method="post" action=(delete_url)
                    {
                        button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                    }
                }
            }
        )
    };

    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Expenses" }

            section id="add-expense"
            {
                form method="post" action=(endpoints::ROOT) class=(FORM_CONTAINER_STYLE)
                {
                    div
                    {
                        label for="item" class=(FORM_LABEL_STYLE) { "Item" }
                        input
                            type="text"
                            name="item"
                            id="item"
                            placeholder="Coffee"
                            class=(FORM_TEXT_INPUT_STYLE)
                            required
                            autofocus;
                    }

                    div
                    {
                        label for="price" class=(FORM_LABEL_STYLE) { "Price" }
                        input
                            type="text"
                            name="price"
                            id="price"
                            placeholder="4.50"
                            inputmode="decimal"
                            class=(FORM_TEXT_INPUT_STYLE)
                            required;
                    }

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add expense" }
                }
            }

            section id="expenses"
            {
                table
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Item" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for expense in expenses {
                            (table_row(expense))
                        }

                        @if expenses.is_empty() {
                            tr
                            {
                                td colspan="4" class=(TABLE_CELL_STYLE)
                                {
                                    "No expenses recorded yet."
                                }
                            }
                        }
                    }
                }
            }

            section id="chart"
            {
                h2 { "Spending" }

                a href=(endpoints::VISUALIZE) class=(LINK_STYLE) { "Visualize spending" }

                @if let Some(chart_url) = chart_url {
                    img src=(chart_url) alt="Spending distribution chart" class="chart";
                }
            }

            section id="email"
            {
                form method="post" action=(endpoints::SEND_EMAIL) class=(FORM_CONTAINER_STYLE)
                {
                    div
                    {
                        label for="email" class=(FORM_LABEL_STYLE) { "Email" }
                        input
                            type="email"
                            name="email"
                            id="email"
                            placeholder="you@example.com"
                            class=(FORM_TEXT_INPUT_STYLE)
                            required;
                    }

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Send" }
                }

                @if email_received {
                    p class="notice" { "Thanks! We received your email address." }
                }
            }
        }
    );

    base("Expenses", &content)
}
