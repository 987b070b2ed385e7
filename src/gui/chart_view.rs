//! Chart View Widget
//! Paints the fixed-size scatter canvas: axes, circles, state labels,
//! clickable x-axis captions, and hover tooltips.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::charts::scale::{
    CANVAS_HEIGHT, CANVAS_WIDTH, MARGIN_LEFT, MARGIN_TOP, PLOT_HEIGHT, PLOT_WIDTH,
};
use crate::charts::ChartController;
use crate::data::{XMetric, YMetric};

const POINT_RADIUS: f32 = 10.0;
const POINT_COLOR: Color32 = Color32::from_rgb(137, 195, 222);
const TICK_LEN: f32 = 6.0;
const TICK_TARGET: usize = 10;
const CAPTION_ROW_H: f32 = 20.0;

/// Draws the scatter chart and routes caption clicks back to the controller.
pub struct ChartView;

impl ChartView {
    pub fn show(ui: &mut egui::Ui, controller: &mut ChartController) {
        let now = ui.input(|i| i.time);
        let (response, painter) =
            ui.allocate_painter(Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT), Sense::hover());

        let plot_origin = response.rect.min + egui::vec2(MARGIN_LEFT, MARGIN_TOP);
        let plot_w = PLOT_WIDTH as f32;
        let plot_h = PLOT_HEIGHT as f32;
        let axis_color = ui.visuals().weak_text_color();
        let axis_stroke = Stroke::new(1.0, axis_color);

        // Axis lines
        let x_axis_y = plot_origin.y + plot_h;
        painter.line_segment(
            [
                Pos2::new(plot_origin.x, x_axis_y),
                Pos2::new(plot_origin.x + plot_w, x_axis_y),
            ],
            axis_stroke,
        );
        painter.line_segment(
            [plot_origin, Pos2::new(plot_origin.x, x_axis_y)],
            axis_stroke,
        );

        // Bottom axis ticks follow the transition-interpolated scale, so axis,
        // points, and labels all move together.
        let x_scale = controller.display_x_scale(now);
        for tick in x_scale.ticks(TICK_TARGET) {
            let px = plot_origin.x + x_scale.map(tick) as f32;
            if !px.is_finite() {
                continue;
            }
            painter.line_segment(
                [Pos2::new(px, x_axis_y), Pos2::new(px, x_axis_y + TICK_LEN)],
                axis_stroke,
            );
            painter.text(
                Pos2::new(px, x_axis_y + TICK_LEN + 2.0),
                Align2::CENTER_TOP,
                format_tick(tick),
                FontId::proportional(11.0),
                axis_color,
            );
        }

        let y_scale = controller.y_scale();
        for tick in y_scale.ticks(TICK_TARGET) {
            let py = plot_origin.y + y_scale.map(tick) as f32;
            if !py.is_finite() {
                continue;
            }
            painter.line_segment(
                [
                    Pos2::new(plot_origin.x - TICK_LEN, py),
                    Pos2::new(plot_origin.x, py),
                ],
                axis_stroke,
            );
            painter.text(
                Pos2::new(plot_origin.x - TICK_LEN - 2.0, py),
                Align2::RIGHT_CENTER,
                format_tick(tick),
                FontId::proportional(11.0),
                axis_color,
            );
        }

        // Circles and state abbreviation labels
        let mut hovered = None;
        let hover_pos = response.hover_pos();
        for record in controller.records() {
            let (x, y) = controller.point_position(record, now);
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let center = Pos2::new(plot_origin.x + x as f32, plot_origin.y + y as f32);
            painter.circle(
                center,
                POINT_RADIUS,
                POINT_COLOR,
                Stroke::new(1.0, Color32::WHITE),
            );
            painter.text(
                center,
                Align2::CENTER_CENTER,
                &record.abbr,
                FontId::proportional(9.0),
                Color32::WHITE,
            );
            if let Some(pos) = hover_pos {
                if pos.distance(center) <= POINT_RADIUS && hovered.is_none() {
                    hovered = Some(record.clone());
                }
            }
        }

        // X-axis caption controls, exactly one active at a time
        let caption_x = plot_origin.x + plot_w / 2.0;
        let caption_base_y = x_axis_y + CAPTION_ROW_H;
        let mut clicked = None;
        for (i, metric) in XMetric::ALL.iter().enumerate() {
            let center = Pos2::new(caption_x, caption_base_y + CAPTION_ROW_H * (i + 1) as f32);
            let active = *metric == controller.chosen_x();
            let color = if active {
                ui.visuals().strong_text_color()
            } else {
                ui.visuals().weak_text_color()
            };

            let galley =
                painter.layout_no_wrap(metric.label().to_string(), FontId::proportional(14.0), color);
            let rect = Rect::from_center_size(center, galley.size());
            let caption =
                ui.interact(rect.expand(2.0), response.id.with(("x_caption", i)), Sense::click());
            painter.galley(rect.min, galley, color);

            if caption.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                clicked = Some(*metric);
            }
        }
        if let Some(metric) = clicked {
            controller.select_x_metric(metric, now);
        }

        // Rotated y captions. The healthcare caption is the active metric;
        // the obese caption is present but inert.
        Self::draw_y_caption(
            &painter,
            plot_origin,
            plot_h,
            YMetric::Healthcare.label(),
            17.0,
            ui.visuals().strong_text_color(),
        );
        Self::draw_y_caption(
            &painter,
            plot_origin,
            plot_h,
            YMetric::Obese.label(),
            0.0,
            ui.visuals().weak_text_color().gamma_multiply(0.6),
        );

        if let Some(record) = hovered {
            egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                response.id.with("tooltip"),
                |ui| {
                    ui.label(egui::RichText::new(&record.state).strong());
                    let x_metric = controller.chosen_x();
                    let y_metric = controller.chosen_y();
                    ui.label(format!("{}: {}", x_metric.label(), x_metric.value(&record)));
                    ui.label(format!("{}: {}", y_metric.label(), y_metric.value(&record)));
                },
            );
        }

        if controller.is_animating(now) {
            ui.ctx().request_repaint();
        }
    }

    fn draw_y_caption(
        painter: &egui::Painter,
        plot_origin: Pos2,
        plot_h: f32,
        text: &str,
        inset: f32,
        color: Color32,
    ) {
        let galley = painter.layout_no_wrap(text.to_string(), FontId::proportional(14.0), color);
        let pos = Pos2::new(
            plot_origin.x - MARGIN_LEFT + inset,
            plot_origin.y + plot_h / 2.0 + galley.size().x / 2.0,
        );
        let mut shape = egui::epaint::TextShape::new(pos, galley, color);
        shape.angle = -std::f32::consts::FRAC_PI_2;
        painter.add(shape);
    }
}

/// Short tick label, trailing zeros trimmed.
fn format_tick(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_labels_are_trimmed() {
        assert_eq!(format_tick(30.0), "30");
        assert_eq!(format_tick(12.5), "12.5");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(-0.0), "0");
    }
}
