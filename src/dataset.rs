use crate::config::Vocabulary;
use crate::error::Result;
use crate::geo::{self, Coordinates};
use crate::index::ObservationIndex;
use crate::loader::{self, LoadReport};
use crate::projections::{age, composition, gender, ratio, time_series};
use crate::types::{
    AgeBreakdownRecord, BubbleItem, CompositionRecord, CountryOption, EmploymentStatus,
    GenderTrendRecord, Observation, RatioTrendRecord, TimeSeriesRecord,
};
use std::io::Read;
use std::path::Path;

/// Immutable snapshot of one parsed extract. Every query is a pure
/// function of the snapshot, so repeated calls return identical results.
#[derive(Debug, Clone)]
pub struct Dataset {
    index: ObservationIndex,
    vocabulary: Vocabulary,
    report: LoadReport,
}

impl Dataset {
    pub fn load(path: &Path, vocabulary: Vocabulary) -> Result<Self> {
        let (rows, report) = loader::load_from_path(path, &vocabulary)?;
        Ok(Self::from_parts(rows, vocabulary, report))
    }

    pub fn from_reader<R: Read>(reader: R, vocabulary: Vocabulary) -> Result<Self> {
        let (rows, report) = loader::load_from_reader(reader, &vocabulary)?;
        Ok(Self::from_parts(rows, vocabulary, report))
    }

    pub fn from_observations(rows: Vec<Observation>, vocabulary: Vocabulary) -> Self {
        let report = LoadReport {
            total_rows: rows.len(),
            kept_rows: rows.len(),
            ..LoadReport::default()
        };
        Self::from_parts(rows, vocabulary, report)
    }

    fn from_parts(rows: Vec<Observation>, vocabulary: Vocabulary, report: LoadReport) -> Self {
        Self {
            index: ObservationIndex::build(rows),
            vocabulary,
            report,
        }
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn index(&self) -> &ObservationIndex {
        &self.index
    }

    pub fn composition(&self) -> Vec<CompositionRecord> {
        composition::project(&self.index)
    }

    pub fn time_series(&self) -> Vec<TimeSeriesRecord> {
        time_series::project(&self.index)
    }

    pub fn age_breakdown(&self, country_code: &str) -> Option<AgeBreakdownRecord> {
        age::project(&self.index, &self.vocabulary, country_code)
    }

    pub fn gender_trend(
        &self,
        country_code: &str,
        status: EmploymentStatus,
    ) -> Option<GenderTrendRecord> {
        gender::project(&self.index, country_code, status)
    }

    pub fn ratio_trend(&self, country_code: &str) -> Option<RatioTrendRecord> {
        ratio::project(&self.index, country_code)
    }

    /// Selectable countries (those with a time series), sorted by name.
    pub fn country_options(&self) -> Vec<CountryOption> {
        self.time_series()
            .into_iter()
            .map(|s| CountryOption {
                code: s.country_code,
                name: s.country_name,
            })
            .collect()
    }

    /// Tonga when available, otherwise the first selectable country.
    pub fn default_country(&self) -> Option<CountryOption> {
        let options = self.country_options();
        let tonga = options
            .iter()
            .position(|c| c.name.to_lowercase().contains("tonga"));
        options.into_iter().nth(tonga.unwrap_or(0))
    }

    pub fn bubble_items(&self, coords: &Coordinates) -> Vec<BubbleItem> {
        geo::bubble_items(&self.composition(), coords)
    }
}
