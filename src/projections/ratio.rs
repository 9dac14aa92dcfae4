use crate::index::{ObservationIndex, StatusTotals};
use crate::types::{AgeGroup, Ratio, RatioPoint, RatioTrendRecord, Sex};
use log::debug;
use std::collections::BTreeMap;

/// Full-time/part-time shares per year for one country, measured against
/// the explicit status total when it is positive and FT + PT otherwise.
///
/// Years are dropped when the denominator is zero, when both shares are
/// zero, or when a share exceeds 100% (FT or PT larger than the reported
/// total). `None` only when the country code is unknown.
pub fn project(index: &ObservationIndex, country_code: &str) -> Option<RatioTrendRecord> {
    let entry = index.country(country_code)?;

    let mut by_year: BTreeMap<i32, StatusTotals> = BTreeMap::new();
    for r in index
        .country_rows(entry)
        .filter(|r| r.sex == Sex::Total && r.age == AgeGroup::Total)
    {
        by_year.entry(r.year).or_default().add(r);
    }

    let points: Vec<RatioPoint> = by_year
        .into_iter()
        .filter_map(|(year, t)| ratio_point(year, &t))
        .collect();
    debug!("Ratio trend: {} has {} points", country_code, points.len());

    Some(RatioTrendRecord {
        country_code: entry.code.clone(),
        country_name: entry.name.clone(),
        points,
    })
}

fn ratio_point(year: i32, t: &StatusTotals) -> Option<RatioPoint> {
    let effective_total = t.effective_total();
    if effective_total <= 0.0 {
        return None;
    }
    let full_time_pct = t.full_time / effective_total * 100.0;
    let part_time_pct = t.part_time / effective_total * 100.0;
    if full_time_pct == 0.0 && part_time_pct == 0.0 {
        return None;
    }
    if full_time_pct > 100.0 || part_time_pct > 100.0 {
        debug!("Ratio trend: dropping {} (share above 100%)", year);
        return None;
    }
    let ratio = if t.part_time > 0.0 {
        Ratio::Finite(t.full_time / t.part_time)
    } else {
        Ratio::Unbounded
    };
    Some(RatioPoint {
        year,
        full_time_count: t.full_time,
        part_time_count: t.part_time,
        effective_total,
        full_time_pct,
        part_time_pct,
        ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(full_time: f64, part_time: f64, total: f64) -> StatusTotals {
        StatusTotals { full_time, part_time, total }
    }

    #[test]
    fn explicit_total_is_preferred() {
        let p = ratio_point(2020, &totals(60.0, 20.0, 100.0)).unwrap();
        assert_eq!(p.effective_total, 100.0);
        assert_eq!(p.full_time_pct, 60.0);
        assert_eq!(p.part_time_pct, 20.0);
        assert_eq!(p.ratio, Ratio::Finite(3.0));
    }

    #[test]
    fn falls_back_to_sum() {
        let p = ratio_point(2020, &totals(75.0, 25.0, 0.0)).unwrap();
        assert_eq!(p.effective_total, 100.0);
        assert_eq!(p.full_time_pct, 75.0);
    }

    #[test]
    fn guards() {
        assert!(ratio_point(2020, &totals(0.0, 0.0, 0.0)).is_none());
        assert!(ratio_point(2020, &totals(0.0, 0.0, 50.0)).is_none());
        assert!(ratio_point(2020, &totals(150.0, 10.0, 100.0)).is_none());
        let p = ratio_point(2020, &totals(40.0, 0.0, 0.0)).unwrap();
        assert_eq!(p.ratio, Ratio::Unbounded);
        assert_eq!(p.full_time_pct, 100.0);
    }
}
