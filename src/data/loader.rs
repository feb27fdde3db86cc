//! CSV Data Loader Module
//! Reads the EDB export into a wide DataFrame using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file with every column read as text and trimmed header names.
    ///
    /// Schema inference is disabled so that year columns carrying markers such as
    /// `(D)` reach the reshape step intact; typing happens there.
    pub fn load_csv(file_path: &Path) -> Result<DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }

        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .with_truncate_ragged_lines(true)
            .finish()?
            .collect()?;

        let df = Self::trim_column_names(df)?;
        info!(
            path = %file_path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded csv"
        );
        Ok(df)
    }

    /// Strip surrounding whitespace from every column name.
    pub fn trim_column_names(df: DataFrame) -> Result<DataFrame, LoaderError> {
        let columns: Vec<Column> = df
            .take_columns()
            .into_iter()
            .map(|mut column| {
                let trimmed = column.name().trim().to_string();
                column.rename(trimmed.into());
                column
            })
            .collect();

        Ok(DataFrame::new(columns)?)
    }
}
