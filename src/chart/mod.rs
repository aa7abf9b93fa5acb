//! Declarative chart descriptions built from aggregated expenses.
//!
//! Builders return `None` for an empty input; callers show a placeholder
//! message in that case instead of an empty chart. The descriptions are
//! plain data: the TUI draws them and the CLI prints them as JSON.

mod color;

pub(crate) use color::{ColorScale, Rgb};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Expense;
use crate::report::{category_totals, monthly_totals};

const TOTAL_AXIS_LABEL: &str = "Total Expense ($)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SliceText {
    PercentAndLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PieSlice {
    pub(crate) label: String,
    pub(crate) value: f64,
    pub(crate) color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PieChart {
    pub(crate) title: String,
    pub(crate) slices: Vec<PieSlice>,
    pub(crate) slice_text: SliceText,
    pub(crate) show_legend: bool,
}

impl PieChart {
    /// Share of each slice as a percentage of the whole, in slice order.
    pub(crate) fn percentages(&self) -> Vec<f64> {
        let sum: f64 = self.slices.iter().map(|s| s.value).sum();
        self.slices
            .iter()
            .map(|s| if sum > 0.0 { s.value / sum * 100.0 } else { 0.0 })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Orientation {
    /// Categories along x, values up y.
    Vertical,
    /// Categories down y, values along x.
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Axis {
    pub(crate) label: String,
    /// Tick label rotation in degrees; negative tilts labels up to the right.
    pub(crate) tick_angle: i16,
    /// Tick labels longer than this are truncated when space is short.
    pub(crate) max_tick_chars: Option<usize>,
}

impl Axis {
    fn plain(label: &str) -> Self {
        Self {
            label: label.into(),
            tick_angle: 0,
            max_tick_chars: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct BarEntry {
    pub(crate) label: String,
    pub(crate) value: f64,
    pub(crate) color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct BarChart {
    pub(crate) title: String,
    pub(crate) orientation: Orientation,
    pub(crate) category_axis: Axis,
    pub(crate) value_axis: Axis,
    pub(crate) bars: Vec<BarEntry>,
    pub(crate) color_scale: Option<ColorScale>,
}

impl BarChart {
    pub(crate) fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

/// All three charts for one filtered set, for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ChartSet {
    pub(crate) category_pie: Option<PieChart>,
    pub(crate) monthly_bar: Option<BarChart>,
    pub(crate) category_comparison: Option<BarChart>,
}

impl ChartSet {
    pub(crate) fn build(expenses: &[Expense]) -> Self {
        Self {
            category_pie: category_pie(expenses),
            monthly_bar: monthly_bar(expenses),
            category_comparison: category_comparison(expenses),
        }
    }
}

fn to_f64(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or(0.0)
}

/// One slice per category present, largest first.
pub(crate) fn category_pie(expenses: &[Expense]) -> Option<PieChart> {
    if expenses.is_empty() {
        return None;
    }

    let slices = category_totals(expenses)
        .into_iter()
        .zip(color::PASTEL.iter().cycle())
        .map(|(t, color)| PieSlice {
            label: t.category.to_string(),
            value: to_f64(t.total),
            color: *color,
        })
        .collect();

    Some(PieChart {
        title: "Expenses by Category".into(),
        slices,
        slice_text: SliceText::PercentAndLabel,
        show_legend: false,
    })
}

/// One bar per month in chronological order.
pub(crate) fn monthly_bar(expenses: &[Expense]) -> Option<BarChart> {
    if expenses.is_empty() {
        return None;
    }

    let bars = monthly_totals(expenses)
        .into_iter()
        .map(|m| BarEntry {
            label: m.month,
            value: to_f64(m.total),
            color: color::BAR_BLUE,
        })
        .collect();

    Some(BarChart {
        title: "Monthly Expense Trends".into(),
        orientation: Orientation::Vertical,
        category_axis: Axis {
            label: "Month".into(),
            tick_angle: -45,
            max_tick_chars: Some(10),
        },
        value_axis: Axis::plain(TOTAL_AXIS_LABEL),
        bars,
        color_scale: None,
    })
}

/// Horizontal bars per category, each colored by where its total falls
/// between the smallest and largest total.
pub(crate) fn category_comparison(expenses: &[Expense]) -> Option<BarChart> {
    if expenses.is_empty() {
        return None;
    }

    let totals = category_totals(expenses);
    let values: Vec<f64> = totals.iter().map(|t| to_f64(t.total)).collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let scale = ColorScale::magnitude(min, max);

    let bars = totals
        .iter()
        .zip(values)
        .map(|(t, value)| BarEntry {
            label: t.category.to_string(),
            value,
            color: scale.color_for(value),
        })
        .collect();

    Some(BarChart {
        title: "Expense Comparison by Category".into(),
        orientation: Orientation::Horizontal,
        category_axis: Axis::plain("Category"),
        value_axis: Axis::plain(TOTAL_AXIS_LABEL),
        bars,
        color_scale: Some(scale),
    })
}
