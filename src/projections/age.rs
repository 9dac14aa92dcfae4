use crate::config::Vocabulary;
use crate::index::ObservationIndex;
use crate::types::{AgeBracket, AgeBreakdownRecord, AgeGroup, EmploymentStatus, Sex};
use log::debug;

/// Full-time/part-time split per age bracket for one country's latest year.
///
/// `None` when the country is unknown or has no `sex == Total` rows. A
/// known country without bracket detail yields an empty bracket list.
/// Brackets keep the order in which their codes first appear.
pub fn project(
    index: &ObservationIndex,
    vocab: &Vocabulary,
    country_code: &str,
) -> Option<AgeBreakdownRecord> {
    let entry = index.country(country_code)?;
    let year = index.latest_year(entry, |r| r.sex == Sex::Total)?;

    let mut acc: Vec<(String, f64, f64)> = Vec::new();
    for r in index.year_rows(entry, year).filter(|r| r.sex == Sex::Total) {
        let AgeGroup::Bracket(code) = &r.age else {
            continue;
        };
        let pos = match acc.iter().position(|(c, _, _)| c == code) {
            Some(p) => p,
            None => {
                acc.push((code.clone(), 0.0, 0.0));
                acc.len() - 1
            }
        };
        match r.status {
            EmploymentStatus::FullTime => acc[pos].1 += r.value,
            EmploymentStatus::PartTime => acc[pos].2 += r.value,
            _ => {}
        }
    }

    let brackets: Vec<AgeBracket> = acc
        .into_iter()
        .filter(|(_, ft, pt)| *ft > 0.0 || *pt > 0.0)
        .map(|(code, full_time, part_time)| AgeBracket {
            age_group: vocab.age_label(&code),
            full_time,
            part_time,
        })
        .collect();
    if brackets.is_empty() {
        debug!("Age breakdown: {} has no brackets in {}", country_code, year);
    }

    Some(AgeBreakdownRecord {
        country_code: entry.code.clone(),
        country_name: entry.name.clone(),
        year,
        brackets,
    })
}
