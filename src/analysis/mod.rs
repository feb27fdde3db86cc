//! Analysis module - selection, filtering and aggregation over the long-form table

mod aggregator;
mod filter;
mod selection;

use polars::prelude::PolarsError;
use thiserror::Error;

pub use aggregator::{Aggregator, Distribution, LocationShare, LocationTotal, YearPoint};
pub use filter::SelectionFilter;
pub use selection::{Selection, SelectionOptions};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::data::columns::{DESCRIPTION, LOCATION_CODE, LOCATION_NAME, REGION, VALUE, YEAR};
    use polars::prelude::*;

    /// Long-form fixture: three East/GDP rows, one West row, one East/Income row.
    pub(crate) fn example_frame() -> DataFrame {
        df!(
            LOCATION_CODE => ["01", "02", "01", "03", "01"],
            LOCATION_NAME => ["A", "B", "A", "C", "A"],
            REGION => ["East", "East", "East", "West", "East"],
            DESCRIPTION => ["GDP", "GDP", "GDP", "GDP", "Income"],
            YEAR => [2000i32, 2000, 2001, 2000, 2000],
            VALUE => [10.0f64, -5.0, 20.0, 7.0, 3.0],
        )
        .unwrap()
    }
}
