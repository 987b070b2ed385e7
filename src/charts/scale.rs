//! Linear Scale Module
//! Pure numeric-to-pixel mappings and tick generation for the chart axes.

use crate::data::{StateRecord, XMetric, YMetric};

/// Fixed drawing surface: an 800x600 logical canvas whose margins leave a
/// 700x500 inner plot area.
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const MARGIN_TOP: f32 = 20.0;
pub const MARGIN_RIGHT: f32 = 40.0;
pub const MARGIN_BOTTOM: f32 = 80.0;
pub const MARGIN_LEFT: f32 = 60.0;
pub const PLOT_WIDTH: f64 = (CANVAS_WIDTH - MARGIN_LEFT - MARGIN_RIGHT) as f64;
pub const PLOT_HEIGHT: f64 = (CANVAS_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM) as f64;

/// A linear mapping from a numeric domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to its pixel coordinate.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Same range, different domain. Used while a transition interpolates.
    pub fn with_domain(&self, domain: (f64, f64)) -> Self {
        Self {
            domain,
            range: self.range,
        }
    }

    /// Tick values at a round step covering the domain, roughly `target` of
    /// them. Empty for degenerate or non-finite domains.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        let span = hi - lo;
        if !span.is_finite() || span <= 0.0 || target == 0 {
            return Vec::new();
        }

        let step = nice_step(span / target as f64);
        let start = (lo / step).ceil() * step;

        let mut ticks = Vec::new();
        let mut i = 0u32;
        loop {
            let v = start + f64::from(i) * step;
            if v > hi + step * 1e-9 {
                break;
            }
            ticks.push(v);
            i += 1;
        }
        ticks
    }
}

/// Round a raw step up to the nearest 1/2/5 x 10^k.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

/// Scale for the chosen x metric.
///
/// The domain is padded to `[min * 0.8, max * 1.2]` to keep extreme points
/// away from the plot edges; the range spans the plot width left to right.
pub fn x_scale(records: &[StateRecord], metric: XMetric) -> LinearScale {
    let (min, max) = extent(records.iter().map(|r| metric.value(r)));
    LinearScale::new((min * 0.8, max * 1.2), (0.0, PLOT_WIDTH))
}

/// Scale for the chosen y metric: domain `[0, max]`, range inverted because
/// screen y grows downward.
pub fn y_scale(records: &[StateRecord], metric: YMetric) -> LinearScale {
    let (_, max) = extent(records.iter().map(|r| metric.value(r)));
    LinearScale::new((0.0, max), (PLOT_HEIGHT, 0.0))
}

/// Min and max over the finite values; `(NAN, NAN)` when there are none.
fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        (f64::NAN, f64::NAN)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn x_scale_pads_the_domain_and_spans_the_plot_width() {
        let scale = x_scale(&sample_records(), XMetric::Poverty);

        let (d0, d1) = scale.domain();
        assert!((d0 - 12.8 * 0.8).abs() < 1e-12);
        assert!((d1 - 18.5 * 1.2).abs() < 1e-12);

        assert!((scale.map(d0) - 0.0).abs() < 1e-9);
        assert!((scale.map(d1) - PLOT_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn x_scale_for_age_matches_the_sample_domain() {
        let scale = x_scale(&sample_records(), XMetric::Age);
        let (d0, d1) = scale.domain();
        assert!((d0 - 26.4).abs() < 1e-12);
        assert!((d1 - 46.56).abs() < 1e-12);
        // The padded minimum sits on the left plot edge.
        assert!((scale.map(26.4) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn y_scale_is_inverted() {
        let scale = y_scale(&sample_records(), YMetric::Healthcare);
        assert_eq!(scale.domain(), (0.0, 19.6));
        assert!((scale.map(0.0) - PLOT_HEIGHT).abs() < 1e-9);
        assert!((scale.map(19.6) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn map_interpolates_linearly() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert!((scale.map(2.5) - 25.0).abs() < 1e-12);
        assert!((scale.map(-1.0) + 10.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.map(5.0), 0.0);
    }

    #[test]
    fn with_domain_keeps_the_range() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, PLOT_WIDTH));
        let shifted = scale.with_domain((5.0, 15.0));
        assert_eq!(shifted.range(), scale.range());
        assert_eq!(shifted.domain(), (5.0, 15.0));
    }

    #[test]
    fn ticks_use_a_round_step_inside_the_domain() {
        let scale = LinearScale::new((10.24, 22.2), (0.0, PLOT_WIDTH));
        let ticks = scale.ticks(10);

        assert!(!ticks.is_empty());
        let step = ticks[1] - ticks[0];
        assert!((step - 1.0).abs() < 1e-9 || (step - 2.0).abs() < 1e-9);
        for t in &ticks {
            assert!(*t >= 10.24 - 1e-9 && *t <= 22.2 + 1e-9);
        }
    }

    #[test]
    fn ticks_are_empty_for_non_finite_domains() {
        let scale = LinearScale::new((f64::NAN, f64::NAN), (0.0, PLOT_WIDTH));
        assert!(scale.ticks(10).is_empty());

        let empty: Vec<StateRecord> = Vec::new();
        let scale = x_scale(&empty, XMetric::Poverty);
        assert!(scale.ticks(10).is_empty());
    }

    #[test]
    fn extent_skips_nan_values() {
        let mut records = sample_records();
        records[0].poverty = f64::NAN;
        let scale = x_scale(&records, XMetric::Poverty);
        let (d0, d1) = scale.domain();
        assert!((d0 - 12.8 * 0.8).abs() < 1e-12);
        assert!((d1 - 18.2 * 1.2).abs() < 1e-12);
    }
}
