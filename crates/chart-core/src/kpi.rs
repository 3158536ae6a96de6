// File: crates/chart-core/src/kpi.rs
// Summary: Key performance indicator cards listed beside the chart.

const CARD_DESCRIPTION: &str = "This describes variable two and what the shown data means.";

/// A headline figure with its pre-formatted value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KpiCard {
    pub title: String,
    pub value: String,
    pub description: String,
}

impl KpiCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), value: value.into(), description: description.into() }
    }

    /// The four charging-station cards shown on the dashboard.
    pub fn sample() -> Vec<KpiCard> {
        [
            ("Infrastructure Units", "€421.07"),
            ("Charging Growth", "33.07"),
            ("Localization change", "21.9%"),
            ("Fleet growth", "7.03%"),
        ]
        .into_iter()
        .map(|(title, value)| KpiCard::new(title, value, CARD_DESCRIPTION))
        .collect()
    }
}
