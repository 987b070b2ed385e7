//! Static Chart Export Module
//! Renders the current scatter to a PNG with plotters, using the same
//! geometry and metric selection as the on-screen chart.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use thiserror::Error;

use crate::charts::controller::ChartController;
use crate::charts::scale::{CANVAS_HEIGHT, CANVAS_WIDTH, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Chart domain is degenerate, nothing to export")]
    DegenerateDomain,
}

const POINT_COLOR: RGBColor = RGBColor(137, 195, 222);
const POINT_RADIUS: i32 = 10;

/// Write the current chart to `path` as an 800x600 PNG.
pub fn export_png(controller: &ChartController, path: &Path) -> Result<(), ExportError> {
    let (x0, x1) = controller.x_scale().domain();
    let (_, y_max) = controller.y_scale().domain();
    if !x0.is_finite() || !x1.is_finite() || !y_max.is_finite() {
        return Err(ExportError::DegenerateDomain);
    }

    let root = BitMapBackend::new(path, (CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32))
        .into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin_top(MARGIN_TOP as u32)
        .margin_right(MARGIN_RIGHT as u32)
        .x_label_area_size(MARGIN_BOTTOM as u32)
        .y_label_area_size(MARGIN_LEFT as u32)
        .build_cartesian_2d(x0..x1, 0.0..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(controller.chosen_x().label())
        .y_desc(controller.chosen_y().label())
        .axis_desc_style(("sans-serif", 16))
        .label_style(("sans-serif", 12))
        .draw()
        .map_err(render_err)?;

    let x_metric = controller.chosen_x();
    let y_metric = controller.chosen_y();
    let plotted = controller
        .records()
        .iter()
        .map(|r| (x_metric.value(r), y_metric.value(r), r.abbr.clone()))
        .filter(|(x, y, _)| x.is_finite() && y.is_finite());

    chart
        .draw_series(
            plotted
                .clone()
                .map(|(x, y, _)| Circle::new((x, y), POINT_RADIUS, POINT_COLOR.filled())),
        )
        .map_err(render_err)?;

    let label_style = ("sans-serif", 10)
        .into_font()
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(plotted.map(|(x, y, abbr)| Text::new(abbr, (x, y), label_style.clone())))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn render_err(err: impl std::fmt::Display) -> ExportError {
    ExportError::Render(err.to_string())
}
