use serde::{Deserialize, Serialize};
use tabled::Tabled;

pub const COL_COUNTRY_CODE: &str = "GEO_PICT";
pub const COL_COUNTRY_NAME: &str = "Pacific Island Countries and territories";
pub const COL_PERIOD: &str = "TIME_PERIOD";
pub const COL_SEX: &str = "SEX";
pub const COL_AGE: &str = "AGE";
pub const COL_STATUS: &str = "FTPT";
pub const COL_VALUE: &str = "OBS_VALUE";

/// Columns the loader depends on literally. Any other column is ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_COUNTRY_CODE,
    COL_COUNTRY_NAME,
    COL_PERIOD,
    COL_SEX,
    COL_AGE,
    COL_STATUS,
    COL_VALUE,
];

#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "GEO_PICT")]
    pub country_code: Option<String>,
    #[serde(rename = "Pacific Island Countries and territories")]
    pub country_name: Option<String>,
    #[serde(rename = "TIME_PERIOD")]
    pub time_period: Option<String>,
    #[serde(rename = "SEX")]
    pub sex: Option<String>,
    #[serde(rename = "AGE")]
    pub age: Option<String>,
    #[serde(rename = "FTPT")]
    pub ftpt: Option<String>,
    #[serde(rename = "OBS_VALUE")]
    pub obs_value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    Male,
    Female,
    Total,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    FullTime,
    PartTime,
    Total,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AgeGroup {
    Total,
    Bracket(String),
}

/// One parsed CSV row. Rows without a usable country code or year never
/// become observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub country_code: String,
    pub country_name: String,
    pub year: i32,
    pub sex: Sex,
    pub age: AgeGroup,
    pub status: EmploymentStatus,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionRecord {
    pub country_code: String,
    pub country_name: String,
    pub year: i32,
    pub full_time: f64,
    pub part_time: f64,
    pub total_employed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesRecord {
    pub country_code: String,
    pub country_name: String,
    pub points: Vec<TimeSeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBracket {
    pub age_group: String,
    pub full_time: f64,
    pub part_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBreakdownRecord {
    pub country_code: String,
    pub country_name: String,
    pub year: i32,
    pub brackets: Vec<AgeBracket>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenderPoint {
    pub year: i32,
    pub male: f64,
    pub female: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderTrendRecord {
    pub country_code: String,
    pub country_name: String,
    pub trend: Vec<GenderPoint>,
}

/// Full-time to part-time ratio. `Unbounded` marks years with full-time
/// workers but no part-time workers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Ratio {
    Finite(f64),
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioPoint {
    pub year: i32,
    pub full_time_count: f64,
    pub part_time_count: f64,
    pub effective_total: f64,
    pub full_time_pct: f64,
    pub part_time_pct: f64,
    pub ratio: Ratio,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioTrendRecord {
    pub country_code: String,
    pub country_name: String,
    pub points: Vec<RatioPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryOption {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleItem {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub coordinates: [f64; 2],
}

// Flattened rows for CSV export and console previews.

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct CompositionRow {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: i32,
    #[serde(rename = "FullTime")]
    #[tabled(rename = "FullTime")]
    pub full_time: String,
    #[serde(rename = "PartTime")]
    #[tabled(rename = "PartTime")]
    pub part_time: String,
    #[serde(rename = "TotalEmployed")]
    #[tabled(rename = "TotalEmployed")]
    pub total_employed: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct TrendRow {
    #[serde(rename = "CountryCode")]
    #[tabled(rename = "CountryCode")]
    pub country_code: String,
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Employed")]
    #[tabled(rename = "Employed")]
    pub value: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct AgeRow {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: i32,
    #[serde(rename = "AgeGroup")]
    #[tabled(rename = "AgeGroup")]
    pub age_group: String,
    #[serde(rename = "FullTime")]
    #[tabled(rename = "FullTime")]
    pub full_time: String,
    #[serde(rename = "PartTime")]
    #[tabled(rename = "PartTime")]
    pub part_time: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct GenderRow {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Male")]
    #[tabled(rename = "Male")]
    pub male: String,
    #[serde(rename = "Female")]
    #[tabled(rename = "Female")]
    pub female: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct RatioRow {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: i32,
    #[serde(rename = "FullTimePct")]
    #[tabled(rename = "FullTimePct")]
    pub full_time_pct: String,
    #[serde(rename = "PartTimePct")]
    #[tabled(rename = "PartTimePct")]
    pub part_time_pct: String,
    #[serde(rename = "Ratio")]
    #[tabled(rename = "Ratio")]
    pub ratio: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct CountryRow {
    #[serde(rename = "Code")]
    #[tabled(rename = "Code")]
    pub code: String,
    #[serde(rename = "Name")]
    #[tabled(rename = "Name")]
    pub name: String,
}
