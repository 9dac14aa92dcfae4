#![allow(dead_code)]
use pict_employment::{Dataset, Vocabulary};
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str = "STRUCTURE,GEO_PICT,Pacific Island Countries and territories,SEX,AGE,FTPT,TIME_PERIOD,OBS_VALUE,UNIT_MEASURE";

/// Builder for small SPC-shaped CSV extracts.
#[derive(Default)]
pub struct Extract {
    lines: Vec<String>,
}

impl Extract {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation row. `value` is written verbatim so blanks and
    /// junk can be exercised.
    pub fn row(
        mut self,
        code: &str,
        name: &str,
        year: &str,
        sex: &str,
        age: &str,
        status: &str,
        value: &str,
    ) -> Self {
        self.lines.push(format!(
            "DATAFLOW,{},{},{},{},{},{},{},PERSON",
            code, name, sex, age, status, year, value
        ));
        self
    }

    pub fn csv(&self) -> String {
        let mut s = String::from(HEADER);
        s.push('\n');
        for l in &self.lines {
            s.push_str(l);
            s.push('\n');
        }
        s
    }

    pub fn dataset(&self) -> Dataset {
        Dataset::from_reader(self.csv().as_bytes(), Vocabulary::default())
            .expect("fixture parses")
    }

    /// Write the extract to a fresh temp dir and return (dir, csv path).
    pub fn write(&self) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("extract.csv");
        fs::write(&path, self.csv()).expect("write extract");
        (dir, path)
    }
}

/// A few countries with aggregate and detailed rows across several years.
pub fn pacific() -> Extract {
    Extract::new()
        // Tonga: all-ages FT/PT/Total for 2018, 2019, 2021 plus 2021 brackets.
        .row("TO", "Tonga", "2018", "_T", "_T", "FT", "20000")
        .row("TO", "Tonga", "2018", "_T", "_T", "PT", "5000")
        .row("TO", "Tonga", "2018", "_T", "_T", "_T", "25000")
        .row("TO", "Tonga", "2019", "_T", "_T", "FT", "21000")
        .row("TO", "Tonga", "2019", "_T", "_T", "PT", "4000")
        .row("TO", "Tonga", "2021", "_T", "_T", "FT", "24000")
        .row("TO", "Tonga", "2021", "_T", "_T", "PT", "6000")
        .row("TO", "Tonga", "2021", "_T", "_T", "_T", "30000")
        .row("TO", "Tonga", "2021", "_T", "Y15T24", "FT", "4000")
        .row("TO", "Tonga", "2021", "_T", "Y15T24", "PT", "2500")
        .row("TO", "Tonga", "2021", "_T", "Y25T54", "FT", "17000")
        .row("TO", "Tonga", "2021", "_T", "Y25T54", "PT", "3000")
        .row("TO", "Tonga", "2021", "_T", "Y55T64", "FT", "0")
        .row("TO", "Tonga", "2021", "_T", "Y55T64", "PT", "")
        .row("TO", "Tonga", "2021", "_T", "Y70T79", "FT", "3000")
        // Tonga by sex.
        .row("TO", "Tonga", "2018", "M", "_T", "_T", "15000")
        .row("TO", "Tonga", "2018", "F", "_T", "_T", "10000")
        .row("TO", "Tonga", "2021", "F", "_T", "_T", "13000")
        .row("TO", "Tonga", "2021", "M", "_T", "_T", "17000")
        .row("TO", "Tonga", "2021", "M", "_T", "FT", "14000")
        .row("TO", "Tonga", "2020", "M", "_T", "_T", "")
        // Fiji: larger, breakdown only, no explicit status total.
        .row("FJ", "Fiji", "2019", "_T", "_T", "FT", "200000")
        .row("FJ", "Fiji", "2019", "_T", "_T", "PT", "50000")
        .row("FJ", "Fiji", "2019", "M", "_T", "FT", "120000")
        // Niue: only an employment-status total, no breakdown.
        .row("NU", "Niue", "2017", "_T", "_T", "_T", "700")
        // Kiribati: only zero values.
        .row("KI", "Kiribati", "2020", "_T", "_T", "FT", "0")
        .row("KI", "Kiribati", "2020", "_T", "_T", "PT", "0")
}
