//! Parsing and validation of the form used to add an expense.

use serde::Deserialize;

use crate::{
    Error,
    expense::{Expense, ExpenseBuilder},
};

/// The form data for adding an expense.
///
/// Both fields are optional so that a form with missing or empty fields still
/// deserializes and can be rejected by [ExpenseForm::validate] instead of the
/// extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseForm {
    /// What the money was spent on.
    #[serde(default)]
    pub item: Option<String>,
    /// The amount in dollars as typed by the user, e.g. "1,250.00".
    #[serde(default)]
    pub price: Option<String>,
}

impl ExpenseForm {
    /// Check the form and convert it into an expense ready to be inserted.
    ///
    /// The item name is trimmed. Negative prices become `0.0`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyItemName] if the item name is missing or blank,
    /// - or [Error::MissingPrice] if the price is missing or empty,
    /// - or [Error::InvalidPrice] if the price is not a finite number.
    pub fn validate(self) -> Result<ExpenseBuilder, Error> {
        let item_name = match self.item.as_deref().map(str::trim) {
            Some(item_name) if !item_name.is_empty() => item_name,
            _ => return Err(Error::EmptyItemName),
        };

        let price = match self.price.as_deref() {
            Some(price) if !price.is_empty() => price,
            _ => return Err(Error::MissingPrice),
        };

        let amount = parse_price(price)?;

        Ok(Expense::build(item_name, amount))
    }
}

/// Parse a price typed by a user into a non-negative amount.
///
/// Surrounding whitespace and thousands separators (commas) are ignored.
/// Negative prices are clamped to `0.0`.
///
/// # Errors
/// Returns an [Error::InvalidPrice] if `raw_price` is not a finite number.
pub fn parse_price(raw_price: &str) -> Result<f64, Error> {
    let amount = raw_price
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| Error::InvalidPrice(raw_price.to_owned()))?;

    if !amount.is_finite() {
        return Err(Error::InvalidPrice(raw_price.to_owned()));
    }

    Ok(if amount <= 0.0 { 0.0 } else { amount })
}


#[cfg(test)]
mod expense_form_tests {
    use crate::{Error, expense::Expense};

    use super::ExpenseForm;

    fn form(item: Option<&str>, price: Option<&str>) -> ExpenseForm {
        ExpenseForm {
            item: item.map(str::to_owned),
            price: price.map(str::to_owned),
        }
    }

    #[test]
    fn valid_form_becomes_expense() {
        let result = form(Some("Coffee"), Some("4.50")).validate();

        assert_eq!(result, Ok(Expense::build("Coffee", 4.5)));
    }

    #[test]
    fn item_name_is_trimmed() {
        let result = form(Some("  Coffee \n"), Some("4.50")).validate();

        assert_eq!(result, Ok(Expense::build("Coffee", 4.5)));
    }

    #[test]
    fn negative_price_becomes_zero() {
        let result = form(Some("Rent"), Some("-200")).validate();

        assert_eq!(result, Ok(Expense::build("Rent", 0.0)));
    }

    #[test]
    fn blank_item_name_is_rejected() {
        assert_eq!(form(Some(""), Some("10")).validate(), Err(Error::EmptyItemName));
        assert_eq!(form(Some("   "), Some("10")).validate(), Err(Error::EmptyItemName));
        assert_eq!(form(None, Some("10")).validate(), Err(Error::EmptyItemName));
    }

    #[test]
    fn missing_price_is_rejected() {
        assert_eq!(form(Some("Coffee"), Some("")).validate(), Err(Error::MissingPrice));
        assert_eq!(form(Some("Coffee"), None).validate(), Err(Error::MissingPrice));
    }

    #[test]
    fn item_name_is_checked_before_price() {
        assert_eq!(form(None, None).validate(), Err(Error::EmptyItemName));
    }

    #[test]
    fn deserializes_empty_fields_as_none() {
        let form: ExpenseForm = serde_html_form::from_str("item=&price=").unwrap();

        assert_eq!(form.item, None);
        assert_eq!(form.price, None);
    }

    #[test]
    fn deserializes_missing_fields_as_none() {
        let form: ExpenseForm = serde_html_form::from_str("").unwrap();

        assert_eq!(form.item, None);
        assert_eq!(form.price, None);
    }
}
