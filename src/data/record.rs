//! Record Types Module
//! One dataset row per U.S. state, plus the axis metric selectors.

/// One row of the dataset: a single state's statistics.
///
/// Numeric fields are parsed once at load time and never mutated; only the
/// selection of which field drives which screen axis changes afterwards.
/// A non-numeric cell parses to `f64::NAN` and the point is skipped when drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct StateRecord {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub healthcare: f64,
    pub obese: f64,
}

/// Metrics selectable for the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XMetric {
    #[default]
    Poverty,
    Age,
}

impl XMetric {
    /// Both metrics, in caption display order.
    pub const ALL: [XMetric; 2] = [XMetric::Poverty, XMetric::Age];

    /// CSV column name.
    pub fn column(&self) -> &'static str {
        match self {
            XMetric::Poverty => "poverty",
            XMetric::Age => "age",
        }
    }

    /// Caption and tooltip label.
    pub fn label(&self) -> &'static str {
        match self {
            XMetric::Poverty => "In Poverty (%)",
            XMetric::Age => "Age (Median)",
        }
    }

    pub fn value(&self, record: &StateRecord) -> f64 {
        match self {
            XMetric::Poverty => record.poverty,
            XMetric::Age => record.age,
        }
    }
}

/// Metrics selectable for the y axis.
///
/// `Obese` is carried in the data model but its caption control is rendered
/// disabled; the chart always plots `Healthcare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YMetric {
    #[default]
    Healthcare,
    Obese,
}

impl YMetric {
    pub fn column(&self) -> &'static str {
        match self {
            YMetric::Healthcare => "healthcare",
            YMetric::Obese => "obese",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            YMetric::Healthcare => "Lacks Healthcare (%)",
            YMetric::Obese => "Obese (%)",
        }
    }

    pub fn value(&self, record: &StateRecord) -> f64 {
        match self {
            YMetric::Healthcare => record.healthcare,
            YMetric::Obese => record.obese,
        }
    }
}
