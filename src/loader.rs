use crate::config::Vocabulary;
use crate::error::{AppError, Result};
use crate::types::{Observation, RawRow, REQUIRED_COLUMNS};
use crate::util::{non_empty, parse_obs_value, parse_period};
use csv::{ErrorKind, ReaderBuilder, Trim};
use log::{debug, info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub total_rows: usize,
    pub kept_rows: usize,
    /// Rows dropped for an unusable country code or year, or an undecodable record.
    pub skipped_rows: usize,
    /// Non-blank values that were not a non-negative number and became 0.
    pub coerced_values: usize,
}

pub fn load_from_path(path: &Path, vocab: &Vocabulary) -> Result<(Vec<Observation>, LoadReport)> {
    info!("Loading observations from {}", path.display());
    let file = File::open(path)?;
    load_from_reader(file, vocab)
}

/// Parse the observation table. A missing expected column or a broken
/// stream fails the whole load; malformed individual rows do not.
pub fn load_from_reader<R: Read>(
    reader: R,
    vocab: &Vocabulary,
) -> Result<(Vec<Observation>, LoadReport)> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == col) {
            return Err(AppError::MissingColumn(col.to_string()));
        }
    }

    let mut report = LoadReport::default();
    let mut observations = Vec::new();

    for result in rdr.deserialize::<RawRow>() {
        report.total_rows += 1;
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                let row_level = matches!(
                    e.kind(),
                    ErrorKind::Deserialize { .. } | ErrorKind::UnequalLengths { .. }
                );
                if !row_level {
                    return Err(e.into());
                }
                debug!("Skipping undecodable row {}: {}", report.total_rows, e);
                report.skipped_rows += 1;
                continue;
            }
        };

        let Some(country_code) = non_empty(row.country_code.as_deref()) else {
            report.skipped_rows += 1;
            continue;
        };
        let Some(year) = parse_period(row.time_period.as_deref()) else {
            report.skipped_rows += 1;
            continue;
        };

        let (value, coerced) = parse_obs_value(row.obs_value.as_deref());
        if coerced {
            report.coerced_values += 1;
        }

        let country_name = non_empty(row.country_name.as_deref()).unwrap_or_default();

        observations.push(Observation {
            country_code: country_code.to_string(),
            country_name: country_name.to_string(),
            year,
            sex: vocab.sex(row.sex.as_deref().unwrap_or_default()),
            age: vocab.age(row.age.as_deref().unwrap_or_default()),
            status: vocab.status(row.ftpt.as_deref().unwrap_or_default()),
            value,
        });
    }

    report.kept_rows = observations.len();
    if report.skipped_rows > 0 {
        warn!(
            "{} of {} rows skipped (missing country code or unparsable period)",
            report.skipped_rows, report.total_rows
        );
    }
    if report.coerced_values > 0 {
        warn!("{} non-numeric or negative values treated as 0", report.coerced_values);
    }
    info!("Parsed {} observations", report.kept_rows);
    Ok((observations, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AgeGroup, EmploymentStatus, Sex};

    const HEADER: &str = "STRUCTURE,GEO_PICT,Pacific Island Countries and territories,SEX,AGE,FTPT,TIME_PERIOD,OBS_VALUE,UNIT_MEASURE\n";

    #[test]
    fn parses_rows_and_counts_malformed_ones() {
        let csv = format!(
            "{HEADER}\
             DATAFLOW,TO,Tonga,_T,Y15T24,FT,2020,100,PERSON\n\
             DATAFLOW,TO,,_T,Y15T24,PT,2020,,PERSON\n\
             DATAFLOW,TO,Tonga,_T,_T,PT,unknown,5,PERSON\n\
             DATAFLOW,,Nowhere,_T,_T,PT,2020,5,PERSON\n\
             DATAFLOW,FJ,Fiji,M,_T,_T,2019,abc,PERSON\n"
        );
        let (obs, report) = load_from_reader(csv.as_bytes(), &Vocabulary::default()).unwrap();
        assert_eq!(report.total_rows, 5);
        assert_eq!(report.kept_rows, 3);
        assert_eq!(report.skipped_rows, 2);
        assert_eq!(report.coerced_values, 1);

        assert_eq!(obs[0].sex, Sex::Total);
        assert_eq!(obs[0].age, AgeGroup::Bracket("Y15T24".to_string()));
        assert_eq!(obs[0].status, EmploymentStatus::FullTime);
        assert_eq!(obs[0].value, 100.0);
        // Blank name stays blank here, blank value becomes zero.
        assert_eq!(obs[1].country_name, "");
        assert_eq!(obs[1].value, 0.0);
        assert_eq!(obs[2].sex, Sex::Male);
        assert_eq!(obs[2].status, EmploymentStatus::Total);
    }

    #[test]
    fn missing_column_is_fatal() {
        let csv = "GEO_PICT,SEX,AGE,FTPT,TIME_PERIOD,OBS_VALUE\nTO,_T,_T,FT,2020,1\n";
        let err = load_from_reader(csv.as_bytes(), &Vocabulary::default()).unwrap_err();
        assert!(
            matches!(err, AppError::MissingColumn(ref c) if c == "Pacific Island Countries and territories")
        );
    }
}
