// File: crates/demo/src/loader.rs
// Summary: CSV loader for monthly series rows.

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{DataPoint, DataSeries};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(alias = "month", alias = "Month", alias = "Period")]
    period: String,
    #[serde(alias = "Value")]
    value: f64,
    #[serde(alias = "Target")]
    target: f64,
    #[serde(alias = "percentageChange", alias = "change")]
    percentage_change: f64,
}

pub fn load_series_csv(path: &Path) -> Result<DataSeries> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut points = Vec::new();
    for (i, rec) in rdr.deserialize::<Row>().enumerate() {
        let row = rec.with_context(|| format!("row {}", i + 1))?;
        points.push(DataPoint::new(row.period, row.value, row.target, row.percentage_change));
    }
    Ok(DataSeries::new(points)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_month_header_csv() {
        let dir = std::env::temp_dir().join("kpi_dashboard_demo_loader");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("series.csv");
        std::fs::write(&path, "month,value,target,percentageChange\nApr,32000,30000,6.7\nMay,45000,42000,7.1\n").unwrap();
        let s = load_series_csv(&path).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.points()[1].percentage_change, 7.1);
    }

    #[test]
    fn rejects_duplicate_periods() {
        let dir = std::env::temp_dir().join("kpi_dashboard_demo_loader_dup");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("series.csv");
        std::fs::write(&path, "period,value,target,percentage_change\nApr,1,1,1\nApr,2,2,2\n").unwrap();
        let err = load_series_csv(&path).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }
}
