//! Everything the page shows for one Selection, recomputed whenever it changes.

use crate::analysis::{
    AnalysisError, Aggregator, Distribution, LocationTotal, Selection, SelectionFilter, YearPoint,
};
use crate::data::{observations, Dataset, Observation};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selection: Selection,
    /// Filtered rows for the table.
    pub rows: Vec<Observation>,
    /// Bar chart input, non-positive totals included.
    pub location_totals: Vec<LocationTotal>,
    /// Pie chart input.
    pub distribution: Distribution,
    /// Line chart input, across all years.
    pub evolution: Vec<YearPoint>,
}

impl DashboardView {
    pub fn build(dataset: &Dataset, selection: &Selection) -> Result<Self, AnalysisError> {
        let filtered = SelectionFilter::apply(dataset.frame(), selection)?;

        let view = Self {
            selection: selection.clone(),
            rows: observations(&filtered)?,
            location_totals: Aggregator::by_location(&filtered)?,
            distribution: Aggregator::distribution(&filtered)?,
            evolution: Aggregator::temporal_evolution(dataset.frame(), selection)?,
        };

        debug!(
            rows = view.rows.len(),
            locations = view.location_totals.len(),
            years = view.evolution.len(),
            "view rebuilt"
        );
        Ok(view)
    }
}
