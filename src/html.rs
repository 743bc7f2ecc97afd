use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

// Link styles
pub const LINK_STYLE: &str = "link";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button button-primary";

pub const BUTTON_DELETE_STYLE: &str = "button-delete";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "form-container";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-input";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "table-header";

pub const TABLE_ROW_STYLE: &str = "table-row";

pub const TABLE_CELL_STYLE: &str = "table-cell";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page";

const STYLESHEET: &str = r#"
    body {
        margin: 0;
        font-family: system-ui, sans-serif;
        color: #111827;
        background: #f9fafb;
    }

    .page {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1.5rem;
        max-width: 56rem;
        margin: 0 auto;
        padding: 2rem 1.5rem;
    }

    .page > section {
        width: 100%;
    }

    .form-container {
        display: flex;
        flex-wrap: wrap;
        align-items: flex-end;
        gap: 1rem;
    }

    .form-label {
        display: block;
        margin-bottom: 0.5rem;
        font-size: 0.875rem;
        font-weight: 500;
    }

    .form-input {
        padding: 0.6rem;
        border: 1px solid #d1d5db;
        border-radius: 0.25rem;
        background: #fff;
    }

    .button {
        padding: 0.6rem 1rem;
        border: none;
        border-radius: 0.25rem;
        cursor: pointer;
    }

    .button-primary {
        color: #fff;
        background: #3b82f6;
    }

    .button-primary:hover {
        background: #2563eb;
    }

    .button-delete {
        padding: 0;
        border: none;
        background: transparent;
        color: #dc2626;
        text-decoration: underline;
        cursor: pointer;
    }

    .link {
        color: #2563eb;
        text-decoration: underline;
    }

    table {
        width: 100%;
        border-collapse: collapse;
        font-size: 0.875rem;
        text-align: left;
    }

    .table-header {
        font-size: 0.75rem;
        text-transform: uppercase;
        background: #f3f4f6;
    }

    .table-row {
        background: #fff;
        border-bottom: 1px solid #e5e7eb;
    }

    .table-cell {
        padding: 1rem 1.5rem;
    }

    .notice {
        padding: 1rem;
        border-radius: 0.25rem;
        color: #166534;
        background: #dcfce7;
    }

    .chart {
        max-width: 100%;
        height: auto;
    }
"#;

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Cashflow" }

                style { (PreEscaped(STYLESHEET)) }
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { (header) }

            p { (description) }

            p { (fix) }

            a href="/" class=(LINK_STYLE)
            {
                "Back to Homepage"
            }
        }
    );

    base(title, &content)
}

/// Format a non-negative dollar amount, e.g. `$1,234.50`.
pub fn format_currency(number: f64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("'$' is a valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number > 0.0 {
        fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits trailing zeros, so we must pad to two decimal places ourselves.
    // For example, "12.30" is rendered as "12.3" and "12.00" as "12".
    match formatted_string.find('.') {
        None => formatted_string.push_str(".00"),
        Some(dot) if formatted_string.len() - dot == 2 => formatted_string.push('0'),
        Some(_) => {}
    }

    formatted_string
}
