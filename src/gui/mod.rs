//! GUI module - application window and chart canvas

mod app;
mod chart_view;

pub use app::ScatterApp;
pub use chart_view::ChartView;
