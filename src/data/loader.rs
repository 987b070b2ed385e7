//! CSV Dataset Loader Module
//! Handles CSV file loading and record extraction using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

use crate::data::{StateRecord, XMetric, YMetric};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

/// Loads the state statistics CSV with Polars.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Read a CSV file into records.
    ///
    /// Any Polars failure (unreachable file, malformed CSV, missing column)
    /// surfaces as a single load error; there is no retry or partial result.
    pub fn read_records(path: &Path) -> Result<Vec<StateRecord>, LoaderError> {
        let path_str = path.to_string_lossy().to_string();

        let df = LazyCsvReader::new(&path_str)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        Self::extract_records(&df)
    }

    /// Pull the six chart columns out of a DataFrame.
    ///
    /// Unparseable numeric cells become `f64::NAN`; rows with a missing state
    /// name or abbreviation are dropped.
    pub fn extract_records(df: &DataFrame) -> Result<Vec<StateRecord>, LoaderError> {
        let state = df.column("state")?;
        let abbr = df.column("abbr")?;
        let poverty = Self::numeric_column(df, XMetric::Poverty.column())?;
        let age = Self::numeric_column(df, XMetric::Age.column())?;
        let healthcare = Self::numeric_column(df, YMetric::Healthcare.column())?;
        let obese = Self::numeric_column(df, YMetric::Obese.column())?;

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            if let (Ok(s), Ok(a)) = (state.get(i), abbr.get(i)) {
                if s.is_null() || a.is_null() {
                    continue;
                }
                records.push(StateRecord {
                    state: s.to_string().trim_matches('"').to_string(),
                    abbr: a.to_string().trim_matches('"').to_string(),
                    poverty: poverty.get(i).unwrap_or(f64::NAN),
                    age: age.get(i).unwrap_or(f64::NAN),
                    healthcare: healthcare.get(i).unwrap_or(f64::NAN),
                    obese: obese.get(i).unwrap_or(f64::NAN),
                });
            }
        }

        if records.is_empty() {
            return Err(LoaderError::NoData);
        }
        Ok(records)
    }

    fn numeric_column(df: &DataFrame, name: &str) -> Result<Float64Chunked, LoaderError> {
        Ok(df.column(name)?.cast(&DataType::Float64)?.f64()?.clone())
    }
}
