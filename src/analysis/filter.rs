//! Narrow the long-form table to one Selection.

use super::selection::Selection;
use super::AnalysisError;
use crate::data::columns::{DESCRIPTION, REGION, YEAR};
use polars::prelude::*;

/// Which parts of a Selection a predicate should honour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterScope {
    /// Year, region and description.
    Full,
    /// Region and description only; the year is left open.
    AllYears,
}

pub struct SelectionFilter;

impl SelectionFilter {
    /// Rows matching every set field of `selection`. An empty result is valid.
    pub fn apply(df: &DataFrame, selection: &Selection) -> Result<DataFrame, AnalysisError> {
        Self::apply_scoped(df, selection, FilterScope::Full)
    }

    pub fn apply_scoped(
        df: &DataFrame,
        selection: &Selection,
        scope: FilterScope,
    ) -> Result<DataFrame, AnalysisError> {
        let Some(predicate) = Self::predicate(selection, scope) else {
            return Ok(df.clone());
        };
        Ok(df.clone().lazy().filter(predicate).collect()?)
    }

    /// AND of the equality tests for each set field, or `None` when nothing is set.
    pub fn predicate(selection: &Selection, scope: FilterScope) -> Option<Expr> {
        let year = match scope {
            FilterScope::Full => selection.year().map(|year| col(YEAR).eq(lit(year))),
            FilterScope::AllYears => None,
        };
        let region = selection.region().map(|region| col(REGION).eq(lit(region)));
        let description = selection
            .description()
            .map(|description| col(DESCRIPTION).eq(lit(description)));

        [year, region, description]
            .into_iter()
            .flatten()
            .reduce(|acc, expr| acc.and(expr))
    }
}
