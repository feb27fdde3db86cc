//! Aggregator Module
//! Group-and-sum derivations feeding the bar, pie and line charts.

use super::filter::{FilterScope, SelectionFilter};
use super::selection::Selection;
use super::AnalysisError;
use crate::data::columns::{LOCATION_NAME, VALUE, YEAR};
use polars::prelude::*;

/// Summed value for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationTotal {
    pub location: String,
    pub total: f64,
}

/// A location's slice of the distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationShare {
    pub location: String,
    pub total: f64,
    /// 0..=100
    pub percent: f64,
}

/// Summed value for one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearPoint {
    pub year: i32,
    pub total: f64,
}

/// Input for the distribution (pie) view.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Shares(Vec<LocationShare>),
    /// No location has a positive total.
    InsufficientData,
}

pub struct Aggregator;

impl Aggregator {
    /// Sum `Valor` per `Localidade`, in first-seen location order.
    pub fn by_location(filtered: &DataFrame) -> Result<Vec<LocationTotal>, AnalysisError> {
        let grouped = Self::sum_by_location(filtered.clone().lazy()).collect()?;
        Self::location_totals(&grouped)
    }

    /// Per-location totals restricted to positive values, with percentage shares.
    pub fn distribution(filtered: &DataFrame) -> Result<Distribution, AnalysisError> {
        let grouped = Self::sum_by_location(filtered.clone().lazy())
            .filter(col(VALUE).gt(lit(0.0)))
            .collect()?;
        let totals = Self::location_totals(&grouped)?;

        let sum: f64 = totals.iter().map(|t| t.total).sum();
        if totals.is_empty() || sum <= 0.0 {
            return Ok(Distribution::InsufficientData);
        }

        let shares = totals
            .into_iter()
            .map(|t| LocationShare {
                percent: t.total / sum * 100.0,
                location: t.location,
                total: t.total,
            })
            .collect();
        Ok(Distribution::Shares(shares))
    }

    /// Sum `Valor` per year over the full dataset for the selected region and description.
    ///
    /// The selected year is not applied. Points are sorted by year.
    pub fn temporal_evolution(
        full: &DataFrame,
        selection: &Selection,
    ) -> Result<Vec<YearPoint>, AnalysisError> {
        let scoped = SelectionFilter::apply_scoped(full, selection, FilterScope::AllYears)?;
        let grouped = scoped
            .lazy()
            .group_by([col(YEAR)])
            .agg([col(VALUE).sum()])
            .collect()?;

        let years = grouped.column(YEAR)?.i32()?;
        let totals = grouped.column(VALUE)?.f64()?;

        let mut points: Vec<YearPoint> = years
            .into_iter()
            .zip(totals)
            .filter_map(|(year, total)| {
                Some(YearPoint {
                    year: year?,
                    total: total.unwrap_or(0.0),
                })
            })
            .collect();
        points.sort_by_key(|p| p.year);
        Ok(points)
    }

    fn sum_by_location(frame: LazyFrame) -> LazyFrame {
        frame
            .group_by_stable([col(LOCATION_NAME)])
            .agg([col(VALUE).sum()])
    }

    fn location_totals(grouped: &DataFrame) -> Result<Vec<LocationTotal>, AnalysisError> {
        let names = grouped.column(LOCATION_NAME)?.str()?;
        let totals = grouped.column(VALUE)?.f64()?;

        Ok(names
            .into_iter()
            .zip(totals)
            .filter_map(|(name, total)| {
                Some(LocationTotal {
                    location: name?.to_string(),
                    total: total.unwrap_or(0.0),
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::example_frame;

    fn filtered(selection: &Selection) -> DataFrame {
        SelectionFilter::apply(&example_frame(), selection).unwrap()
    }

    #[test]
    fn by_location_sums_per_location() {
        let selection = Selection::new(Some(2000), Some("East"), None);
        let totals = Aggregator::by_location(&filtered(&selection)).unwrap();
        assert_eq!(
            totals,
            vec![
                LocationTotal {
                    location: "A".into(),
                    total: 13.0
                },
                LocationTotal {
                    location: "B".into(),
                    total: -5.0
                },
            ]
        );
    }

    #[test]
    fn by_location_conserves_total() {
        for selection in [
            Selection::default(),
            Selection::new(Some(2000), None, None),
            Selection::new(None, Some("East"), Some("GDP")),
        ] {
            let rows = filtered(&selection);
            let expected: f64 = rows.column(VALUE).unwrap().f64().unwrap().into_iter().flatten().sum();
            let grouped: f64 = Aggregator::by_location(&rows)
                .unwrap()
                .iter()
                .map(|t| t.total)
                .sum();
            assert!((expected - grouped).abs() < 1e-9);
        }
    }

    #[test]
    fn distribution_excludes_non_positive_totals() {
        let rows = filtered(&Selection::default());
        let Distribution::Shares(shares) = Aggregator::distribution(&rows).unwrap() else {
            panic!("expected shares");
        };
        assert!(shares.iter().all(|s| s.total > 0.0));
        assert!(shares.iter().all(|s| s.location != "B"));

        let percent: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn distribution_without_positive_totals_is_insufficient() {
        let only_b = example_frame()
            .lazy()
            .filter(col(LOCATION_NAME).eq(lit("B")))
            .collect()
            .unwrap();
        assert_eq!(
            Aggregator::distribution(&only_b).unwrap(),
            Distribution::InsufficientData
        );

        let empty = filtered(&Selection::new(Some(1900), None, None));
        assert_eq!(
            Aggregator::distribution(&empty).unwrap(),
            Distribution::InsufficientData
        );
    }

    #[test]
    fn temporal_evolution_ignores_selected_year() {
        let selection = Selection::new(Some(2000), Some("East"), Some("GDP"));
        let points = Aggregator::temporal_evolution(&example_frame(), &selection).unwrap();
        assert_eq!(
            points,
            vec![
                YearPoint {
                    year: 2000,
                    total: 5.0
                },
                YearPoint {
                    year: 2001,
                    total: 20.0
                },
            ]
        );
    }

    #[test]
    fn temporal_evolution_of_unknown_region_is_empty() {
        let selection = Selection::new(Some(2000), Some("Nowhere"), Some("GDP"));
        let points = Aggregator::temporal_evolution(&example_frame(), &selection).unwrap();
        assert!(points.is_empty());
    }
}
