//! Outreach ROI estimator.
//!
//! Keeps the numeric inputs and their on-screen text side by side: sliders
//! write both, free-text edits are sanitized into a number while the typed
//! text is kept, and blur re-formats the text from the stored number.

pub mod format;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub use format::{format_currency, format_number, format_percent};

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("static pattern"));
static NON_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("static pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoiField {
    MonthlyLeadVolume,
    ReplyRate,
    CloseRate,
    AvgDealValue,
}

impl RoiField {
    pub const ALL: [RoiField; 4] = [
        RoiField::MonthlyLeadVolume,
        RoiField::ReplyRate,
        RoiField::CloseRate,
        RoiField::AvgDealValue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoiField::MonthlyLeadVolume => "Monthly Lead Volume",
            RoiField::ReplyRate => "Reply Rate %",
            RoiField::CloseRate => "Close Rate %",
            RoiField::AvgDealValue => "Average Deal Value",
        }
    }

    pub fn is_percent(&self) -> bool {
        matches!(self, RoiField::ReplyRate | RoiField::CloseRate)
    }

    /// Slider bounds for the field.
    pub fn range(&self) -> InputRange {
        match self {
            RoiField::MonthlyLeadVolume | RoiField::AvgDealValue => InputRange {
                min: 500.0,
                max: 50_000.0,
                step: 500.0,
            },
            RoiField::ReplyRate => InputRange {
                min: 1.0,
                max: 15.0,
                step: 0.5,
            },
            RoiField::CloseRate => InputRange {
                min: 1.0,
                max: 50.0,
                step: 1.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputRange {
    /// Clamps into bounds and snaps to the nearest step, as a slider would.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInputs {
    pub monthly_lead_volume: f64,
    /// Percent, e.g. `5.0` for 5%.
    pub reply_rate: f64,
    pub close_rate: f64,
    pub avg_deal_value: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            monthly_lead_volume: 5000.0,
            reply_rate: 5.0,
            close_rate: 10.0,
            avg_deal_value: 5000.0,
        }
    }
}

impl RoiInputs {
    pub fn get(&self, field: RoiField) -> f64 {
        match field {
            RoiField::MonthlyLeadVolume => self.monthly_lead_volume,
            RoiField::ReplyRate => self.reply_rate,
            RoiField::CloseRate => self.close_rate,
            RoiField::AvgDealValue => self.avg_deal_value,
        }
    }

    fn set(&mut self, field: RoiField, value: f64) {
        match field {
            RoiField::MonthlyLeadVolume => self.monthly_lead_volume = value,
            RoiField::ReplyRate => self.reply_rate = value,
            RoiField::CloseRate => self.close_rate = value,
            RoiField::AvgDealValue => self.avg_deal_value = value,
        }
    }

    pub fn project(&self) -> RoiProjection {
        let replies = self.monthly_lead_volume * (self.reply_rate / 100.0);
        let closed_deals = replies * (self.close_rate / 100.0);
        let monthly_revenue = closed_deals * self.avg_deal_value;
        RoiProjection {
            replies,
            closed_deals,
            monthly_revenue,
            annual_revenue: monthly_revenue * 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    pub replies: f64,
    pub closed_deals: f64,
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
}

impl RoiProjection {
    /// Label/value pairs as shown in the results panel.
    pub fn display_rows(&self) -> [(&'static str, String); 4] {
        [
            ("Expected Replies/Month", format_number(self.replies)),
            ("Closed Deals/Month", format_number(self.closed_deals)),
            (
                "Potential Monthly Revenue",
                format_currency(self.monthly_revenue),
            ),
            (
                "Potential Annual Revenue",
                format_currency(self.annual_revenue),
            ),
        ]
    }
}

/// Inputs plus the text currently shown in each input box.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiEstimator {
    inputs: RoiInputs,
    display: [String; 4],
}

impl Default for RoiEstimator {
    fn default() -> Self {
        Self::new(RoiInputs::default())
    }
}

impl RoiEstimator {
    pub fn new(inputs: RoiInputs) -> Self {
        let display = RoiField::ALL.map(|field| formatted(field, inputs.get(field)));
        Self { inputs, display }
    }

    pub fn inputs(&self) -> &RoiInputs {
        &self.inputs
    }

    pub fn display(&self, field: RoiField) -> &str {
        &self.display[index(field)]
    }

    pub fn projection(&self) -> RoiProjection {
        self.inputs.project()
    }

    /// Slider movement: the value is snapped to the slider's range.
    pub fn set_slider(&mut self, field: RoiField, value: f64) {
        let value = field.range().snap(value);
        self.inputs.set(field, value);
        self.display[index(field)] = formatted(field, value);
    }

    /// Free-text edit: strips everything but digits (and `.` for percents).
    /// Text that still fails to parse counts as zero.
    pub fn set_text(&mut self, field: RoiField, raw: &str) {
        let pattern = if field.is_percent() {
            &*NON_DECIMAL
        } else {
            &*NON_DIGIT
        };
        let clean = pattern.replace_all(raw, "").into_owned();
        let value = clean.parse::<f64>().unwrap_or(0.0);
        self.inputs.set(field, value);
        self.display[index(field)] = clean;
    }

    /// Focus left the text box: show the canonical formatting again.
    pub fn blur(&mut self, field: RoiField) {
        self.display[index(field)] = formatted(field, self.inputs.get(field));
    }
}

fn formatted(field: RoiField, value: f64) -> String {
    if field.is_percent() {
        format_percent(value)
    } else {
        format_number(value)
    }
}

fn index(field: RoiField) -> usize {
    match field {
        RoiField::MonthlyLeadVolume => 0,
        RoiField::ReplyRate => 1,
        RoiField::CloseRate => 2,
        RoiField::AvgDealValue => 3,
    }
}
