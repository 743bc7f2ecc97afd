//! Expense management.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and `ExpenseBuilder` for creating expenses
//! - Database functions for storing, listing, and deleting expenses
//! - The list page and the endpoints for adding and deleting expenses and
//!   submitting an email address

mod core;
mod create_endpoint;
mod delete_endpoint;
mod email_endpoint;
mod expenses_page;
mod form;

pub use core::{
    Expense, ExpenseBuilder, create_expense_table, delete_expense, get_all_amounts,
    get_all_expenses, insert_expense,
};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use email_endpoint::send_email_endpoint;
pub use expenses_page::{ExpensesPageState, get_expenses_page};
pub use form::ExpenseForm;

#[cfg(test)]
pub use core::count_expenses;
