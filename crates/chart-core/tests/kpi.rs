// File: crates/chart-core/tests/kpi.rs
// Purpose: Sample KPI cards keep their order and pre-formatted values.

use chart_core::KpiCard;

#[test]
fn sample_cards_in_dashboard_order() {
    let cards = KpiCard::sample();
    let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Infrastructure Units", "Charging Growth", "Localization change", "Fleet growth"]);
    assert_eq!(cards[0].value, "€421.07");
    assert_eq!(cards[3].value, "7.03%");
    assert!(cards.iter().all(|c| !c.description.is_empty()));
}
