//! Grouped lookup over the parsed observation table.
//!
//! Rows are stored once in an arena and indexed by country, then year.
//! Projectors query the index instead of re-scanning the whole table.
use crate::types::{AgeGroup, EmploymentStatus, Observation, Sex};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct CountryEntry {
    pub code: String,
    /// First non-empty name seen for the code, or the code itself.
    pub name: String,
    years: BTreeMap<i32, Vec<usize>>,
}

impl CountryEntry {
    pub fn years(&self) -> impl DoubleEndedIterator<Item = i32> + '_ {
        self.years.keys().copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObservationIndex {
    rows: Vec<Observation>,
    countries: BTreeMap<String, CountryEntry>,
}

impl ObservationIndex {
    pub fn build(rows: Vec<Observation>) -> Self {
        let mut countries: BTreeMap<String, CountryEntry> = BTreeMap::new();
        for (id, r) in rows.iter().enumerate() {
            let e = countries
                .entry(r.country_code.clone())
                .or_insert_with(|| CountryEntry {
                    code: r.country_code.clone(),
                    name: String::new(),
                    years: BTreeMap::new(),
                });
            if e.name.is_empty() && !r.country_name.is_empty() {
                e.name = r.country_name.clone();
            }
            e.years.entry(r.year).or_default().push(id);
        }
        for e in countries.values_mut() {
            if e.name.is_empty() {
                e.name = e.code.clone();
            }
        }
        Self { rows, countries }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn country(&self, code: &str) -> Option<&CountryEntry> {
        self.countries.get(code)
    }

    /// Countries in code order.
    pub fn countries(&self) -> impl Iterator<Item = &CountryEntry> {
        self.countries.values()
    }

    pub fn year_rows<'a>(
        &'a self,
        entry: &'a CountryEntry,
        year: i32,
    ) -> impl Iterator<Item = &'a Observation> + 'a {
        entry
            .years
            .get(&year)
            .into_iter()
            .flatten()
            .map(move |&id| &self.rows[id])
    }

    /// All rows of a country, ascending by year.
    pub fn country_rows<'a>(
        &'a self,
        entry: &'a CountryEntry,
    ) -> impl Iterator<Item = &'a Observation> + 'a {
        entry.years.values().flatten().map(move |&id| &self.rows[id])
    }

    /// Latest year in which the country has a row matching `pred`.
    pub fn latest_year<F>(&self, entry: &CountryEntry, pred: F) -> Option<i32>
    where
        F: Fn(&Observation) -> bool,
    {
        entry
            .years
            .iter()
            .rev()
            .find(|(_, ids)| ids.iter().any(|&id| pred(&self.rows[id])))
            .map(|(year, _)| *year)
    }
}

/// Maximum year of an already-filtered subset; `None` when it is empty.
pub fn latest_year<'a, I>(rows: I) -> Option<i32>
where
    I: IntoIterator<Item = &'a Observation>,
{
    rows.into_iter().map(|r| r.year).max()
}

/// Full-time, part-time and explicit total sums of one slice of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusTotals {
    pub full_time: f64,
    pub part_time: f64,
    pub total: f64,
}

impl StatusTotals {
    pub fn add(&mut self, r: &Observation) {
        match r.status {
            EmploymentStatus::FullTime => self.full_time += r.value,
            EmploymentStatus::PartTime => self.part_time += r.value,
            EmploymentStatus::Total => self.total += r.value,
            EmploymentStatus::Other => {}
        }
    }

    /// Explicit total when positive, else the full-time + part-time sum.
    pub fn effective_total(&self) -> f64 {
        if self.total > 0.0 {
            self.total
        } else {
            self.full_time + self.part_time
        }
    }
}

/// Totals for the `sex == Total` rows of one country-year. For each
/// employment status the all-ages rows are used when present, otherwise
/// that status's age brackets are summed. Mixing both would count every
/// worker twice.
pub fn headline_totals<'a, I>(rows: I) -> StatusTotals
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut all_ages = StatusTotals::default();
    let mut brackets = StatusTotals::default();
    let (mut ft_seen, mut pt_seen, mut total_seen) = (false, false, false);
    for r in rows.into_iter().filter(|r| r.sex == Sex::Total) {
        if r.age == AgeGroup::Total {
            all_ages.add(r);
            match r.status {
                EmploymentStatus::FullTime => ft_seen = true,
                EmploymentStatus::PartTime => pt_seen = true,
                EmploymentStatus::Total => total_seen = true,
                EmploymentStatus::Other => {}
            }
        } else {
            brackets.add(r);
        }
    }
    let pick = |seen: bool, a: f64, b: f64| if seen { a } else { b };
    StatusTotals {
        full_time: pick(ft_seen, all_ages.full_time, brackets.full_time),
        part_time: pick(pt_seen, all_ages.part_time, brackets.part_time),
        total: pick(total_seen, all_ages.total, brackets.total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(code: &str, name: &str, year: i32, age: AgeGroup, status: EmploymentStatus, value: f64) -> Observation {
        Observation {
            country_code: code.to_string(),
            country_name: name.to_string(),
            year,
            sex: Sex::Total,
            age,
            status,
            value,
        }
    }

    #[test]
    fn first_non_empty_name_wins() {
        let idx = ObservationIndex::build(vec![
            obs("TO", "", 2020, AgeGroup::Total, EmploymentStatus::FullTime, 1.0),
            obs("TO", "Tonga", 2021, AgeGroup::Total, EmploymentStatus::FullTime, 1.0),
            obs("TO", "Kingdom of Tonga", 2019, AgeGroup::Total, EmploymentStatus::FullTime, 1.0),
            obs("NU", "", 2019, AgeGroup::Total, EmploymentStatus::FullTime, 1.0),
        ]);
        assert_eq!(idx.country("TO").unwrap().name, "Tonga");
        assert_eq!(idx.country("NU").unwrap().name, "NU");
        assert!(idx.country("XX").is_none());
    }

    #[test]
    fn latest_year_respects_predicate() {
        let mut male = obs("TO", "Tonga", 2022, AgeGroup::Total, EmploymentStatus::FullTime, 1.0);
        male.sex = Sex::Male;
        let idx = ObservationIndex::build(vec![
            obs("TO", "Tonga", 2018, AgeGroup::Total, EmploymentStatus::FullTime, 1.0),
            obs("TO", "Tonga", 2021, AgeGroup::Total, EmploymentStatus::FullTime, 1.0),
            obs("TO", "Tonga", 2019, AgeGroup::Total, EmploymentStatus::FullTime, 1.0),
            male,
        ]);
        let to = idx.country("TO").unwrap();
        assert_eq!(idx.latest_year(to, |r| r.sex == Sex::Total), Some(2021));
        assert_eq!(idx.latest_year(to, |_| true), Some(2022));
        assert_eq!(idx.latest_year(to, |r| r.sex == Sex::Female), None);
        assert_eq!(latest_year(std::iter::empty()), None);
    }

    #[test]
    fn headline_prefers_all_ages_rows() {
        let rows = vec![
            obs("TO", "Tonga", 2020, AgeGroup::Total, EmploymentStatus::FullTime, 90.0),
            obs("TO", "Tonga", 2020, AgeGroup::Bracket("Y15T24".into()), EmploymentStatus::FullTime, 40.0),
            obs("TO", "Tonga", 2020, AgeGroup::Total, EmploymentStatus::PartTime, 10.0),
        ];
        let t = headline_totals(&rows);
        assert_eq!(t.full_time, 90.0);
        assert_eq!(t.part_time, 10.0);
        assert_eq!(t.effective_total(), 100.0);

        let t = headline_totals(&rows[1..2]);
        assert_eq!(t.full_time, 40.0);

        // All-ages total only, breakdown available per bracket.
        let rows = vec![
            obs("FJ", "Fiji", 2020, AgeGroup::Total, EmploymentStatus::Total, 500.0),
            obs("FJ", "Fiji", 2020, AgeGroup::Bracket("Y15T24".into()), EmploymentStatus::FullTime, 200.0),
            obs("FJ", "Fiji", 2020, AgeGroup::Bracket("Y25T54".into()), EmploymentStatus::FullTime, 250.0),
            obs("FJ", "Fiji", 2020, AgeGroup::Bracket("Y25T54".into()), EmploymentStatus::PartTime, 50.0),
        ];
        let t = headline_totals(&rows);
        assert_eq!(t, StatusTotals { full_time: 450.0, part_time: 50.0, total: 500.0 });
    }
}
