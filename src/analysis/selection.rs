//! Selection value object and the selectable domains it is drawn from.

use crate::data::columns::{DESCRIPTION, REGION, YEAR};
use crate::data::DataProcessor;
use polars::prelude::*;

/// The (year, region, description) triple driving every filter.
///
/// `None`, an empty string or year `0` leaves that dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub year: Option<i32>,
    pub region: Option<String>,
    pub description: Option<String>,
}

impl Selection {
    pub fn new(year: Option<i32>, region: Option<&str>, description: Option<&str>) -> Self {
        Self {
            year,
            region: region.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    pub fn with_year(self, year: Option<i32>) -> Self {
        Self { year, ..self }
    }

    pub fn with_region(self, region: Option<String>) -> Self {
        Self { region, ..self }
    }

    pub fn with_description(self, description: Option<String>) -> Self {
        Self {
            description,
            ..self
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.year.filter(|&y| y != 0)
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn year_label(&self) -> String {
        self.year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "Todos".to_string())
    }

    pub fn region_label(&self) -> &str {
        self.region().unwrap_or("Todas")
    }

    pub fn description_label(&self) -> &str {
        self.description().unwrap_or("Todas as métricas")
    }
}

/// Distinct values offered by the three pickers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionOptions {
    /// Most recent first.
    pub years: Vec<i32>,
    /// First-seen order.
    pub regions: Vec<String>,
    /// First-seen order.
    pub descriptions: Vec<String>,
}

impl SelectionOptions {
    pub fn from_frame(df: &DataFrame) -> PolarsResult<Self> {
        let years = df
            .clone()
            .lazy()
            .select([col(YEAR)
                .unique()
                .drop_nulls()
                .sort(SortOptions::default().with_order_descending(true))])
            .collect()?;
        let years: Vec<i32> = years.column(YEAR)?.i32()?.into_iter().flatten().collect();

        Ok(Self {
            years,
            regions: DataProcessor::unique_in_order(df, REGION)?,
            descriptions: DataProcessor::unique_in_order(df, DESCRIPTION)?,
        })
    }

    /// First entry of each domain.
    pub fn default_selection(&self) -> Selection {
        Selection::new(
            self.years.first().copied(),
            self.regions.first().map(String::as_str),
            self.descriptions.first().map(String::as_str),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        df!(
            REGION => ["East", "West", "East", "North"],
            DESCRIPTION => ["GDP", "GDP", "Income", "GDP"],
            YEAR => [2000i32, 2002, 2001, 2002],
        )
        .unwrap()
    }

    #[test]
    fn years_descend_and_others_keep_first_seen_order() {
        let options = SelectionOptions::from_frame(&frame()).unwrap();
        assert_eq!(options.years, vec![2002, 2001, 2000]);
        assert_eq!(options.regions, vec!["East", "West", "North"]);
        assert_eq!(options.descriptions, vec!["GDP", "Income"]);
    }

    #[test]
    fn default_selection_takes_first_of_each_domain() {
        let options = SelectionOptions::from_frame(&frame()).unwrap();
        assert_eq!(
            options.default_selection(),
            Selection::new(Some(2002), Some("East"), Some("GDP"))
        );
    }

    #[test]
    fn empty_domains_give_unconstrained_selection() {
        let options = SelectionOptions::default();
        assert_eq!(options.default_selection(), Selection::default());
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let selection = Selection::new(None, Some(""), Some("GDP"));
        assert_eq!(selection.region(), None);
        assert_eq!(selection.description(), Some("GDP"));
        assert_eq!(selection.year_label(), "Todos");
    }

    #[test]
    fn year_zero_counts_as_unset() {
        let selection = Selection::new(Some(0), Some("East"), None);
        assert_eq!(selection.year(), None);
        assert_eq!(selection.year_label(), "Todos");
    }
}
