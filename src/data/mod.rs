//! Data module - CSV loading and record types

mod loader;
mod record;

pub use loader::{DatasetLoader, LoaderError};
pub use record::{StateRecord, XMetric, YMetric};
