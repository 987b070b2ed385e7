//! Chart Controller Module
//! Owns the chart's runtime state and keeps scales, point positions, and the
//! active metric selection synchronized.

use crate::charts::scale::{self, LinearScale};
use crate::charts::transition::DomainTransition;
use crate::data::{StateRecord, XMetric, YMetric};

/// Runtime state of the scatter chart.
///
/// Created once after a successful load and kept until the window closes.
/// The record values are immutable; the only mutable piece is which x metric
/// is selected (plus the transition animating towards it).
pub struct ChartController {
    records: Vec<StateRecord>,
    chosen_x: XMetric,
    chosen_y: YMetric,
    x_scale: LinearScale,
    y_scale: LinearScale,
    transition: Option<DomainTransition>,
}

impl ChartController {
    pub fn new(records: Vec<StateRecord>) -> Self {
        let chosen_x = XMetric::default();
        let chosen_y = YMetric::default();
        let x_scale = scale::x_scale(&records, chosen_x);
        let y_scale = scale::y_scale(&records, chosen_y);
        Self {
            records,
            chosen_x,
            chosen_y,
            x_scale,
            y_scale,
            transition: None,
        }
    }

    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    pub fn chosen_x(&self) -> XMetric {
        self.chosen_x
    }

    pub fn chosen_y(&self) -> YMetric {
        self.chosen_y
    }

    /// The settled x scale for the chosen metric.
    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    /// Handle a click on an x-axis caption.
    ///
    /// Clicking the already-active metric is a guarded no-op. Otherwise the
    /// scale is rebuilt for the new metric and a transition starts from the
    /// domain currently on screen, which may itself be mid-animation.
    /// Returns whether the selection changed.
    pub fn select_x_metric(&mut self, metric: XMetric, now: f64) -> bool {
        if metric == self.chosen_x {
            return false;
        }

        let from = self.display_x_scale(now).domain();
        self.chosen_x = metric;
        self.x_scale = scale::x_scale(&self.records, metric);
        self.transition = Some(DomainTransition::new(from, self.x_scale.domain(), now));
        true
    }

    /// The x scale as displayed at `now`: interpolated while a transition is
    /// running, the settled scale otherwise.
    pub fn display_x_scale(&self, now: f64) -> LinearScale {
        match &self.transition {
            Some(t) if !t.is_finished(now) => self.x_scale.with_domain(t.domain_at(now)),
            _ => self.x_scale,
        }
    }

    /// Pixel position of a record inside the plot area at `now`.
    pub fn point_position(&self, record: &StateRecord, now: f64) -> (f64, f64) {
        (
            self.display_x_scale(now).map(self.chosen_x.value(record)),
            self.y_scale.map(self.chosen_y.value(record)),
        )
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.transition.map(|t| !t.is_finished(now)).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::scale::PLOT_WIDTH;

    fn sample_records() -> Vec<StateRecord> {
        vec![
            StateRecord {
                state: "Alabama".to_string(),
                abbr: "AL".to_string(),
                poverty: 18.5,
                age: 38.8,
                healthcare: 11.5,
                obese: 30.0,
            },
            StateRecord {
                state: "Alaska".to_string(),
                abbr: "AK".to_string(),
                poverty: 12.8,
                age: 33.0,
                healthcare: 19.6,
                obese: 25.0,
            },
            StateRecord {
                state: "Arizona".to_string(),
                abbr: "AZ".to_string(),
                poverty: 18.2,
                age: 36.8,
                healthcare: 13.6,
                obese: 23.7,
            },
        ]
    }

    #[test]
    fn initial_state_uses_the_poverty_scale() {
        let controller = ChartController::new(sample_records());

        assert_eq!(controller.chosen_x(), XMetric::Poverty);
        assert_eq!(controller.chosen_y(), YMetric::Healthcare);

        let (d0, d1) = controller.x_scale().domain();
        assert!((d0 - 10.24).abs() < 1e-9);
        assert!((d1 - 22.2).abs() < 1e-9);
        assert!(!controller.is_animating(0.0));
    }

    #[test]
    fn clicking_the_active_caption_is_a_no_op() {
        let mut controller = ChartController::new(sample_records());
        let before = *controller.x_scale();
        let positions: Vec<_> = controller
            .records()
            .iter()
            .map(|r| controller.point_position(r, 0.0))
            .collect();

        assert!(!controller.select_x_metric(XMetric::Poverty, 0.0));

        assert_eq!(controller.chosen_x(), XMetric::Poverty);
        assert_eq!(*controller.x_scale(), before);
        assert!(!controller.is_animating(0.0));
        let after: Vec<_> = controller
            .records()
            .iter()
            .map(|r| controller.point_position(r, 0.0))
            .collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn clicking_the_inactive_caption_flips_the_metric() {
        let mut controller = ChartController::new(sample_records());

        assert!(controller.select_x_metric(XMetric::Age, 0.0));
        assert_eq!(controller.chosen_x(), XMetric::Age);

        let (d0, d1) = controller.x_scale().domain();
        assert!((d0 - 26.4).abs() < 1e-9);
        assert!((d1 - 46.56).abs() < 1e-9);
        assert!(controller.is_animating(0.5));
    }

    #[test]
    fn positions_settle_on_the_new_scale_after_the_transition() {
        let mut controller = ChartController::new(sample_records());
        controller.select_x_metric(XMetric::Age, 0.0);

        // Well past the 1 s transition.
        let now = 2.0;
        assert!(!controller.is_animating(now));

        let scale = controller.display_x_scale(now);
        for record in controller.records() {
            let (x, _) = controller.point_position(record, now);
            assert!((x - scale.map(record.age)).abs() < 1e-9);
        }

        // The padded age minimum sits on the left plot edge, and the padded
        // maximum on the right one.
        assert!((scale.map(26.4) - 0.0).abs() < 1e-9);
        assert!((scale.map(46.56) - PLOT_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn mid_transition_click_takes_over_from_the_displayed_domain() {
        let mut controller = ChartController::new(sample_records());
        controller.select_x_metric(XMetric::Age, 0.0);

        let mid_domain = controller.display_x_scale(0.5).domain();
        controller.select_x_metric(XMetric::Poverty, 0.5);

        // The new transition starts exactly where the old one was.
        let start = controller.display_x_scale(0.5).domain();
        assert!((start.0 - mid_domain.0).abs() < 1e-9);
        assert!((start.1 - mid_domain.1).abs() < 1e-9);

        // And lands on the poverty domain.
        let settled = controller.display_x_scale(5.0).domain();
        assert!((settled.0 - 10.24).abs() < 1e-9);
        assert!((settled.1 - 22.2).abs() < 1e-9);
    }

    #[test]
    fn y_positions_are_untouched_by_x_changes() {
        let mut controller = ChartController::new(sample_records());
        let before: Vec<_> = controller
            .records()
            .iter()
            .map(|r| controller.point_position(r, 0.0).1)
            .collect();

        controller.select_x_metric(XMetric::Age, 0.0);

        let after: Vec<_> = controller
            .records()
            .iter()
            .map(|r| controller.point_position(r, 0.5).1)
            .collect();
        assert_eq!(before, after);
    }
}
