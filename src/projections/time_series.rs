use crate::index::{headline_totals, ObservationIndex};
use crate::types::{TimeSeriesPoint, TimeSeriesRecord};
use log::debug;

/// Yearly employed totals per country, sorted by country name.
///
/// A year's value is the explicit employment-status total when present,
/// else full-time + part-time. Years with no workers are left out, and a
/// country needs at least one remaining year to appear.
pub fn project(index: &ObservationIndex) -> Vec<TimeSeriesRecord> {
    let mut out: Vec<TimeSeriesRecord> = index
        .countries()
        .filter_map(|entry| {
            let points: Vec<TimeSeriesPoint> = entry
                .years()
                .filter_map(|year| {
                    let value = headline_totals(index.year_rows(entry, year)).effective_total();
                    (value > 0.0).then_some(TimeSeriesPoint { year, value })
                })
                .collect();
            if points.is_empty() {
                return None;
            }
            Some(TimeSeriesRecord {
                country_code: entry.code.clone(),
                country_name: entry.name.clone(),
                points,
            })
        })
        .collect();
    out.sort_by(|a, b| {
        a.country_name
            .cmp(&b.country_name)
            .then_with(|| a.country_code.cmp(&b.country_code))
    });
    debug!("Time series: {} countries", out.len());
    out
}
