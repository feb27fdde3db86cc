//! Data Processor Module
//! Handles data cleaning and the wide-to-long transformation (melt on year columns).

use super::columns::{self, KEYS, SOURCE_KEYS, VALUE, YEAR};
use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Text written into cells that are missing after the key check.
const FILL_VALUE: &str = "0";

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Required column '{0}' is missing")]
    MissingColumn(String),
}

/// Handles data cleaning and transformation operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Clean the wide table read from disk.
    ///
    /// Drops rows missing any identifying field, fills every other missing cell with zero,
    /// renames columns to the target vocabulary and keeps only the identifying columns plus
    /// year columns. All output columns are text.
    pub fn clean(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let key_columns = SOURCE_KEYS
            .iter()
            .map(|name| Self::text_column(df, name))
            .collect::<Result<Vec<_>, _>>()?;
        let key_values = key_columns
            .iter()
            .map(|column| column.str())
            .collect::<PolarsResult<Vec<_>>>()?;

        let kept_rows: Vec<usize> = (0..df.height())
            .filter(|&i| key_values.iter().all(|ca| ca.get(i).is_some()))
            .collect();

        let dropped = df.height() - kept_rows.len();
        if dropped > 0 {
            info!(dropped, "dropped rows with missing identifying fields");
        }

        // Identifying columns first, then year columns in header order.
        let mut selected: Vec<(String, &str)> = Vec::new();
        for key in KEYS {
            let source = df
                .get_column_names()
                .into_iter()
                .find(|name| columns::rename(name) == key)
                .map(|name| name.to_string())
                .ok_or_else(|| ProcessorError::MissingColumn(key.to_string()))?;
            selected.push((source, key));
        }
        for name in df.get_column_names() {
            let renamed = columns::rename(name);
            if columns::is_year_label(renamed) {
                selected.push((name.to_string(), renamed));
            }
        }

        let mut output = Vec::with_capacity(selected.len());
        for (source, target) in selected {
            let column = Self::text_column(df, &source)?;
            let ca = column.str()?;
            let values: Vec<String> = kept_rows
                .iter()
                .map(|&i| ca.get(i).unwrap_or(FILL_VALUE).to_string())
                .collect();
            output.push(Column::new(target.into(), values));
        }

        Ok(DataFrame::new(output)?)
    }

    /// Transform the cleaned wide table to long format.
    ///
    /// Output columns: the identifying columns, `Ano` (Int32) and `Valor` (Float64).
    /// Year columns whose label is not an integer are dropped; cell values that are not
    /// numeric become zero.
    pub fn melt_years(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let id_columns = KEYS
            .iter()
            .map(|name| Self::text_column(df, name))
            .collect::<Result<Vec<_>, _>>()?;
        let id_values = id_columns
            .iter()
            .map(|column| column.str())
            .collect::<PolarsResult<Vec<_>>>()?;

        let mut ids: Vec<Vec<String>> = vec![Vec::new(); KEYS.len()];
        let mut years: Vec<i32> = Vec::new();
        let mut values: Vec<f64> = Vec::new();

        for name in df.get_column_names() {
            if KEYS.contains(&name.as_str()) {
                continue;
            }
            let Ok(year) = name.parse::<i32>() else {
                warn!(column = %name, "discarding column with unparseable year");
                continue;
            };

            let column = Self::text_column(df, name)?;
            let cells = column.str()?;

            for i in 0..df.height() {
                for (target, source) in ids.iter_mut().zip(id_values.iter()) {
                    target.push(source.get(i).unwrap_or_default().to_string());
                }
                years.push(year);
                values.push(Self::parse_value(cells.get(i)));
            }
        }

        let mut output: Vec<Column> = KEYS
            .iter()
            .zip(ids)
            .map(|(name, values)| Column::new((*name).into(), values))
            .collect();
        output.push(Column::new(YEAR.into(), years));
        output.push(Column::new(VALUE.into(), values));

        let long = DataFrame::new(output)?;
        debug!(rows = long.height(), "reshaped to long form");
        Ok(long)
    }

    /// Coerce a cell to a number; anything unparseable counts as zero.
    pub fn parse_value(cell: Option<&str>) -> f64 {
        cell.and_then(|text| text.trim().parse::<f64>().ok())
            .filter(|value| !value.is_nan())
            .unwrap_or(0.0)
    }

    /// Fetch a column as text, reporting a missing column by name.
    fn text_column(df: &DataFrame, name: &str) -> Result<Column, ProcessorError> {
        let column = df
            .column(name)
            .map_err(|_| ProcessorError::MissingColumn(name.to_string()))?;
        Ok(column.cast(&DataType::String)?)
    }

    /// Distinct non-null values of a text column in first-seen order.
    pub fn unique_in_order(df: &DataFrame, column: &str) -> PolarsResult<Vec<String>> {
        let unique = df
            .clone()
            .lazy()
            .select([col(column)
                .cast(DataType::String)
                .unique_stable()
                .drop_nulls()])
            .collect()?;

        Ok(unique
            .column(column)?
            .str()?
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::columns::{DESCRIPTION, LOCATION_CODE, LOCATION_NAME, REGION};

    fn text(name: &str, values: &[Option<&str>]) -> Column {
        Column::new(name.into(), values.to_vec())
    }

    fn wide() -> DataFrame {
        DataFrame::new(vec![
            text("GeoFIPS", &[Some("01000"), Some("02000"), None, Some("04000")]),
            text("GeoName", &[Some("Alabama"), Some("Alaska"), Some("X"), Some("Arizona")]),
            text("Region", &[Some("5"), Some("8"), Some("5"), None]),
            text("TableName", &[Some("SAGDP"), None, Some("SAGDP"), Some("SAGDP")]),
            text("Description", &[Some("GDP"), Some("GDP"), Some("GDP"), Some("GDP")]),
            text("Unit", &[Some("USD"), Some("USD"), Some("USD"), Some("USD")]),
            text("1998", &[Some("10"), None, Some("1"), Some("1")]),
            text("1999", &[Some("(D)"), Some("7.5"), Some("1"), Some("1")]),
        ])
        .unwrap()
    }

    fn names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn clean_drops_rows_missing_keys() {
        let cleaned = DataProcessor::clean(&wide()).unwrap();
        assert_eq!(cleaned.height(), 2);
        for key in KEYS {
            assert_eq!(cleaned.column(key).unwrap().null_count(), 0);
        }
    }

    #[test]
    fn clean_renames_and_keeps_keys_and_years() {
        let cleaned = DataProcessor::clean(&wide()).unwrap();
        assert_eq!(
            names(&cleaned),
            vec![LOCATION_CODE, LOCATION_NAME, REGION, DESCRIPTION, "1998", "1999"]
        );
    }

    #[test]
    fn clean_fills_missing_cells_with_zero() {
        let cleaned = DataProcessor::clean(&wide()).unwrap();
        let col = cleaned.column("1998").unwrap();
        let ca = col.str().unwrap();
        assert_eq!(ca.get(1), Some("0"));
    }

    #[test]
    fn clean_reports_missing_key_column() {
        let df = DataFrame::new(vec![text("GeoName", &[Some("A")])]).unwrap();
        let err = DataProcessor::clean(&df).unwrap_err();
        assert!(matches!(err, ProcessorError::MissingColumn(_)));
    }

    #[test]
    fn melt_produces_one_row_per_location_and_year() {
        let cleaned = DataProcessor::clean(&wide()).unwrap();
        let long = DataProcessor::melt_years(&cleaned).unwrap();

        assert_eq!(long.height(), 4);
        assert_eq!(long.column(YEAR).unwrap().dtype(), &DataType::Int32);
        assert_eq!(long.column(VALUE).unwrap().dtype(), &DataType::Float64);

        let years: Vec<Option<i32>> = long.column(YEAR).unwrap().i32().unwrap().into_iter().collect();
        assert_eq!(years, vec![Some(1998), Some(1998), Some(1999), Some(1999)]);

        let values: Vec<Option<f64>> =
            long.column(VALUE).unwrap().f64().unwrap().into_iter().collect();
        // "(D)" and the filled gap both count as zero.
        assert_eq!(values, vec![Some(10.0), Some(0.0), Some(0.0), Some(7.5)]);
    }

    #[test]
    fn melt_drops_columns_with_unparseable_year() {
        let df = DataFrame::new(vec![
            text(LOCATION_CODE, &[Some("01000")]),
            text(LOCATION_NAME, &[Some("Alabama")]),
            text(REGION, &[Some("5")]),
            text(DESCRIPTION, &[Some("GDP")]),
            text("2000", &[Some("3")]),
            text("99999999999", &[Some("4")]),
        ])
        .unwrap();

        let long = DataProcessor::melt_years(&df).unwrap();
        assert_eq!(long.height(), 1);
        assert_eq!(long.column(YEAR).unwrap().i32().unwrap().get(0), Some(2000));
    }

    #[test]
    fn parse_value_defaults_to_zero() {
        assert_eq!(DataProcessor::parse_value(Some(" 12.5 ")), 12.5);
        assert_eq!(DataProcessor::parse_value(Some("(NA)")), 0.0);
        assert_eq!(DataProcessor::parse_value(Some("NaN")), 0.0);
        assert_eq!(DataProcessor::parse_value(None), 0.0);
    }

    #[test]
    fn unique_in_order_keeps_first_seen_order() {
        let df = DataFrame::new(vec![text(
            REGION,
            &[Some("West"), Some("East"), Some("West"), None, Some("North")],
        )])
        .unwrap();
        assert_eq!(
            DataProcessor::unique_in_order(&df, REGION).unwrap(),
            vec!["West", "East", "North"]
        );
        assert!(DataProcessor::unique_in_order(&df, "Missing").is_err());
    }
}
