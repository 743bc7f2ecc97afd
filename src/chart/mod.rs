//! The spending chart.
//!
//! The chart is a histogram of every recorded amount, written to a single
//! file in the output directory. It is rebuilt from scratch each time it is
//! requested and overwrites the previous file.

mod histogram;
mod render;
mod visualize_endpoint;

use std::{fs, path::PathBuf};

pub use visualize_endpoint::visualize_endpoint;

use crate::{
    Error, chart::histogram::Histogram, chart::render::render_histogram_svg, config::AppConfig,
    db::Database, expense::get_all_amounts,
};

/// Draw a histogram of every expense amount to [AppConfig::chart_path].
///
/// Returns the path of the chart, or `None` if there are no expenses, in which
/// case no file is written and any existing chart is left as is.
///
/// # Errors
/// This function will return a:
/// - [Error::SqlError] if the amounts could not be read,
/// - or [Error::OutputDirectoryError] if the output directory could not be created,
/// - or [Error::ChartError] if the chart could not be drawn or written.
pub fn generate_chart(database: &Database, config: &AppConfig) -> Result<Option<PathBuf>, Error> {
    let amounts = database.with_connection(get_all_amounts)?;

    let Some(histogram) = Histogram::from_amounts(&amounts)? else {
        tracing::info!("No expenses recorded, skipping chart generation");
        return Ok(None);
    };

    let svg = render_histogram_svg(&histogram)?;

    fs::create_dir_all(&config.output_dir).map_err(|error| {
        Error::OutputDirectoryError(config.output_dir.display().to_string(), error.to_string())
    })?;

    let chart_path = config.chart_path();
    fs::write(&chart_path, svg).map_err(|error| {
        Error::ChartError(format!("could not write {}: {error}", chart_path.display()))
    })?;

    tracing::info!(
        "Chart of {} expenses is now at: {}",
        amounts.len(),
        chart_path.display()
    );

    Ok(Some(chart_path))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::{Error, expense::Expense, test_utils::TestApp};

    use super::generate_chart;

    #[test]
    fn no_expenses_produces_no_chart() {
        let app = TestApp::new();

        let result = generate_chart(&app.state.database, &app.state.config);

        assert_eq!(result, Ok(None));
        assert!(!app.state.config.chart_path().exists());
    }

    #[test]
    fn creates_output_directory_and_chart() {
        let app = TestApp::new();
        app.insert(Expense::build("Coffee", 4.5));
        assert!(!app.state.config.output_dir.exists());

        let result = generate_chart(&app.state.database, &app.state.config);

        let chart_path = app.state.config.chart_path();
        assert_eq!(result, Ok(Some(chart_path.clone())));
        let svg = fs::read_to_string(chart_path).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn overwrites_existing_chart() {
        let app = TestApp::new();
        let chart_path = app.state.config.chart_path();
        fs::create_dir_all(&app.state.config.output_dir).unwrap();
        fs::write(&chart_path, "stale").unwrap();
        app.insert(Expense::build("Rent", 900.0));

        generate_chart(&app.state.database, &app.state.config).unwrap();

        let svg = fs::read_to_string(chart_path).unwrap();
        assert_ne!(svg, "stale");
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn no_expenses_leaves_existing_chart() {
        let app = TestApp::new();
        let chart_path = app.state.config.chart_path();
        fs::create_dir_all(&app.state.config.output_dir).unwrap();
        fs::write(&chart_path, "previous").unwrap();

        let result = generate_chart(&app.state.database, &app.state.config);

        assert_eq!(result, Ok(None));
        assert_eq!(fs::read_to_string(chart_path).unwrap(), "previous");
    }

    #[test]
    fn fails_when_output_directory_is_a_file() {
        let app = TestApp::new();
        fs::write(&app.state.config.output_dir, "not a directory").unwrap();
        app.insert(Expense::build("Coffee", 4.5));

        let result = generate_chart(&app.state.database, &app.state.config);

        assert!(
            matches!(result, Err(Error::OutputDirectoryError(_, _))),
            "want output directory error, got {result:?}"
        );
    }

    #[test]
    fn huge_amount_is_chart_error_without_writing_file() {
        let app = TestApp::new();
        app.insert(Expense::build("Coffee", 4.5));
        app.insert(Expense::build("Yacht", 1e20));

        let result = generate_chart(&app.state.database, &app.state.config);

        assert!(
            matches!(result, Err(Error::ChartError(_))),
            "want chart error, got {result:?}"
        );
        assert!(!app.state.config.chart_path().exists());
    }
}
