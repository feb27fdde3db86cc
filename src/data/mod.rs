//! Data module - CSV loading, cleaning and reshaping

pub mod columns;
mod dataset;
mod loader;
mod processor;

pub use dataset::{observations, Dataset, Observation};
pub use processor::DataProcessor;
