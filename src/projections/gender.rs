use crate::index::ObservationIndex;
use crate::types::{AgeGroup, EmploymentStatus, GenderPoint, GenderTrendRecord, Sex};
use std::collections::BTreeMap;

/// Male and female all-ages counts per year for one country and one
/// employment status. Years with neither male nor female workers are absent.
///
/// `None` only when the country code is unknown.
pub fn project(
    index: &ObservationIndex,
    country_code: &str,
    status: EmploymentStatus,
) -> Option<GenderTrendRecord> {
    let entry = index.country(country_code)?;

    let mut by_year: BTreeMap<i32, (f64, f64)> = BTreeMap::new();
    for r in index
        .country_rows(entry)
        .filter(|r| r.status == status && r.age == AgeGroup::Total)
    {
        let slot = by_year.entry(r.year).or_insert((0.0, 0.0));
        match r.sex {
            Sex::Male => slot.0 += r.value,
            Sex::Female => slot.1 += r.value,
            Sex::Total | Sex::Other => {}
        }
    }

    let trend = by_year
        .into_iter()
        .filter(|(_, (male, female))| *male > 0.0 || *female > 0.0)
        .map(|(year, (male, female))| GenderPoint { year, male, female })
        .collect();

    Some(GenderTrendRecord {
        country_code: entry.code.clone(),
        country_name: entry.name.clone(),
        trend,
    })
}
