// Export and console rendering of projector output.
//
// Records are flattened into one row per (country, year[, bracket]) so they
// can be written as CSV and previewed as markdown tables.
use crate::error::Result;
use crate::types::{
    AgeBreakdownRecord, AgeRow, CompositionRecord, CompositionRow, CountryOption, CountryRow,
    GenderRow, GenderTrendRecord, Ratio, RatioRow, RatioTrendRecord, TimeSeriesRecord, TrendRow,
};
use crate::util::format_number;
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Markdown table of the first `max_rows` rows, or `(no rows)`.
pub fn render_table<T>(rows: &[T], max_rows: usize) -> String
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        return "(no rows)".to_string();
    }
    Table::new(slice).with(Style::markdown()).to_string()
}

pub fn preview<T>(title: &str, note: Option<&str>, rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    println!("{}", title);
    if let Some(n) = note {
        println!("({})", n);
    }
    println!();
    println!("{}\n", render_table(rows, max_rows));
}

pub fn composition_rows(records: &[CompositionRecord]) -> Vec<CompositionRow> {
    records
        .iter()
        .map(|r| CompositionRow {
            country: r.country_name.clone(),
            year: r.year,
            full_time: format_number(r.full_time, 0),
            part_time: format_number(r.part_time, 0),
            total_employed: format_number(r.total_employed, 0),
        })
        .collect()
}

pub fn trend_rows(records: &[TimeSeriesRecord]) -> Vec<TrendRow> {
    records
        .iter()
        .flat_map(|r| {
            r.points.iter().map(move |p| TrendRow {
                country_code: r.country_code.clone(),
                country: r.country_name.clone(),
                year: p.year,
                value: format_number(p.value, 0),
            })
        })
        .collect()
}

pub fn age_rows(record: &AgeBreakdownRecord) -> Vec<AgeRow> {
    record
        .brackets
        .iter()
        .map(|b| AgeRow {
            country: record.country_name.clone(),
            year: record.year,
            age_group: b.age_group.clone(),
            full_time: format_number(b.full_time, 0),
            part_time: format_number(b.part_time, 0),
        })
        .collect()
}

pub fn gender_rows(record: &GenderTrendRecord) -> Vec<GenderRow> {
    record
        .trend
        .iter()
        .map(|p| GenderRow {
            country: record.country_name.clone(),
            year: p.year,
            male: format_number(p.male, 0),
            female: format_number(p.female, 0),
        })
        .collect()
}

pub fn ratio_rows(record: &RatioTrendRecord) -> Vec<RatioRow> {
    record
        .points
        .iter()
        .map(|p| RatioRow {
            country: record.country_name.clone(),
            year: p.year,
            full_time_pct: format_number(p.full_time_pct, 2),
            part_time_pct: format_number(p.part_time_pct, 2),
            ratio: match p.ratio {
                Ratio::Finite(v) => format_number(v, 2),
                Ratio::Unbounded => "no part-time".to_string(),
            },
        })
        .collect()
}

pub fn country_rows(options: &[CountryOption]) -> Vec<CountryRow> {
    options
        .iter()
        .map(|c| CountryRow {
            code: c.code.clone(),
            name: c.name.clone(),
        })
        .collect()
}
