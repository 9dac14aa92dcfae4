use super::desc;
use crate::index::{headline_totals, ObservationIndex};
use crate::types::{CompositionRecord, Sex};
use log::debug;

/// Latest-year full-time/part-time split of every country, largest
/// workforce first. Countries without a positive breakdown are dropped.
pub fn project(index: &ObservationIndex) -> Vec<CompositionRecord> {
    let mut out: Vec<CompositionRecord> = Vec::new();
    for entry in index.countries() {
        let Some(year) = index.latest_year(entry, |r| r.sex == Sex::Total) else {
            continue;
        };
        let totals = headline_totals(index.year_rows(entry, year));
        let total_employed = totals.full_time + totals.part_time;
        if total_employed <= 0.0 {
            debug!("Composition: {} has no FT/PT breakdown in {}", entry.code, year);
            continue;
        }
        out.push(CompositionRecord {
            country_code: entry.code.clone(),
            country_name: entry.name.clone(),
            year,
            full_time: totals.full_time,
            part_time: totals.part_time,
            total_employed,
        });
    }
    out.sort_by(|a, b| {
        desc(a.total_employed, b.total_employed).then_with(|| a.country_name.cmp(&b.country_name))
    });
    debug!("Composition: {} countries", out.len());
    out
}
