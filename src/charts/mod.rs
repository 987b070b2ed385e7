//! Charts module - scales, transitions, chart state, and export

mod controller;
mod export;
pub mod scale;
mod transition;

pub use controller::ChartController;
pub use export::{export_png, ExportError};
