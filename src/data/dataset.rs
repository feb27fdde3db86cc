//! Long-form record set held for the whole session.

use super::columns::{DESCRIPTION, LOCATION_CODE, LOCATION_NAME, REGION, VALUE, YEAR};
use super::loader::{DataLoader, LoaderError};
use super::processor::{DataProcessor, ProcessorError};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Process(#[from] ProcessorError),
}

/// One row of the long-form table.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub location_code: String,
    pub location_name: String,
    pub region: String,
    pub description: String,
    pub year: i32,
    pub value: f64,
}

/// The cleaned, reshaped record set. Read-only once built.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Load, clean and reshape the CSV at `path`.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let wide = DataLoader::load_csv(path)?;
        let mut dataset = Self::from_wide(&wide)?;
        dataset.source = Some(path.to_path_buf());
        Ok(dataset)
    }

    /// Build from an already-read wide table (source labels, text cells).
    pub fn from_wide(wide: &DataFrame) -> Result<Self, ProcessorError> {
        let cleaned = DataProcessor::clean(wide)?;
        let frame = DataProcessor::melt_years(&cleaned)?;
        info!(
            source_rows = wide.height(),
            records = frame.height(),
            "dataset ready"
        );
        Ok(Self {
            frame,
            source: None,
        })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }
}

/// Extract typed rows from a long-form frame.
pub fn observations(df: &DataFrame) -> PolarsResult<Vec<Observation>> {
    let codes = df.column(LOCATION_CODE)?.str()?;
    let names = df.column(LOCATION_NAME)?.str()?;
    let regions = df.column(REGION)?.str()?;
    let descriptions = df.column(DESCRIPTION)?.str()?;
    let years = df.column(YEAR)?.i32()?;
    let values = df.column(VALUE)?.f64()?;

    let rows = (0..df.height())
        .filter_map(|i| {
            Some(Observation {
                location_code: codes.get(i)?.to_string(),
                location_name: names.get(i)?.to_string(),
                region: regions.get(i)?.to_string(),
                description: descriptions.get(i)?.to_string(),
                year: years.get(i)?,
                value: values.get(i).unwrap_or(0.0),
            })
        })
        .collect();

    Ok(rows)
}
