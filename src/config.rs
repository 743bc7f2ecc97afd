//! Startup configuration for the server.

use std::path::{Path, PathBuf};

/// Where the application keeps its database and generated files.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// File path to the SQLite database. Created on first use if absent.
    pub db_path: PathBuf,
    /// The folder the spending chart is written to and static files are served from.
    pub output_dir: PathBuf,
    /// The file name of the spending chart inside [AppConfig::output_dir].
    pub chart_file_name: String,
}

impl AppConfig {
    /// The default database file name.
    pub const DEFAULT_DB_PATH: &str = "cashflow.db";
    /// The default output folder.
    pub const DEFAULT_OUTPUT_DIR: &str = "static";
    /// The default chart file name.
    pub const DEFAULT_CHART_FILE_NAME: &str = "cashflow_analysis.svg";

    /// Create a config with the default chart file name.
    pub fn new(db_path: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            chart_file_name: Self::DEFAULT_CHART_FILE_NAME.to_owned(),
        }
    }

    /// Set the file name of the spending chart.
    pub fn chart_file_name(mut self, chart_file_name: &str) -> Self {
        self.chart_file_name = chart_file_name.to_owned();
        self
    }

    /// The full path of the spending chart.
    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.chart_file_name)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DB_PATH, Self::DEFAULT_OUTPUT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::AppConfig;

    #[test]
    fn chart_path_joins_output_dir_and_file_name() {
        let config = AppConfig::new("data.db", "out").chart_file_name("chart.svg");

        assert_eq!(config.chart_path(), PathBuf::from("out").join("chart.svg"));
    }

    #[test]
    fn default_uses_cashflow_paths() {
        let config = AppConfig::default();

        assert_eq!(config.db_path, PathBuf::from("cashflow.db"));
        assert_eq!(
            config.chart_path(),
            PathBuf::from("static").join("cashflow_analysis.svg")
        );
    }
}
