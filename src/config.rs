// Code vocabulary and application configuration.
//
// The coding used by the SPC extract (e.g. `_T` for totals) is data, not
// structure, so every code the projectors compare against lives here and
// can be overridden from a YAML file.
use crate::error::{AppError, Result};
use crate::types::{AgeGroup, EmploymentStatus, Sex};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "SPC,DF_EMPLOYED_FTPT,1.0+A....._T._T..csv";

static DEFAULT_AGE_LABELS: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
    [
        ("Y15T24", "15-24 years"),
        ("Y25T54", "25-54 years"),
        ("Y55T64", "55-64 years"),
        ("Y65T999", "65-99 years"),
        ("Y65+", "65+ years"),
        ("Y15T19", "15-19 years"),
        ("Y20T24", "20-24 years"),
        ("Y15T29", "15-29 years"),
        ("Y25+", "25+ years"),
        ("Y30T34", "30-34 years"),
        ("Y35T39", "35-39 years"),
        ("Y40T44", "40-44 years"),
        ("Y45T49", "45-49 years"),
        ("Y50T54", "50-54 years"),
        ("Y55T59", "55-59 years"),
        ("Y60T64", "60-64 years"),
    ]
    .into_iter()
    .map(|(code, label)| (code.to_string(), label.to_string()))
    .collect()
});

/// Codes used by the source table for sex, employment status and age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub sex_male: String,
    pub sex_female: String,
    pub sex_total: String,
    pub status_full_time: String,
    pub status_part_time: String,
    pub status_total: String,
    /// Every code in this list is treated as the all-ages aggregate.
    pub age_total: Vec<String>,
    /// Bracket code -> display label. Codes missing here are shown verbatim.
    pub age_labels: BTreeMap<String, String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            sex_male: "M".to_string(),
            sex_female: "F".to_string(),
            sex_total: "_T".to_string(),
            status_full_time: "FT".to_string(),
            status_part_time: "PT".to_string(),
            status_total: "_T".to_string(),
            age_total: vec!["_T".to_string(), "TOTAL".to_string()],
            age_labels: DEFAULT_AGE_LABELS.clone(),
        }
    }
}

impl Vocabulary {
    pub fn sex(&self, code: &str) -> Sex {
        let code = code.trim();
        if code == self.sex_total {
            Sex::Total
        } else if code == self.sex_male {
            Sex::Male
        } else if code == self.sex_female {
            Sex::Female
        } else {
            Sex::Other
        }
    }

    pub fn status(&self, code: &str) -> EmploymentStatus {
        let code = code.trim();
        if code == self.status_total {
            EmploymentStatus::Total
        } else if code == self.status_full_time {
            EmploymentStatus::FullTime
        } else if code == self.status_part_time {
            EmploymentStatus::PartTime
        } else {
            EmploymentStatus::Other
        }
    }

    pub fn age(&self, code: &str) -> AgeGroup {
        let code = code.trim();
        if self.age_total.iter().any(|t| t == code) {
            AgeGroup::Total
        } else {
            AgeGroup::Bracket(code.to_string())
        }
    }

    pub fn age_label(&self, code: &str) -> String {
        self.age_labels
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    /// Reject vocabularies where one code would map to two roles.
    pub fn validate(&self) -> Result<()> {
        let sex = [&self.sex_male, &self.sex_female, &self.sex_total];
        let status = [
            &self.status_full_time,
            &self.status_part_time,
            &self.status_total,
        ];
        for (group, codes) in [("sex", sex), ("employment status", status)] {
            if codes.iter().any(|c| c.trim().is_empty()) {
                return Err(AppError::Config(format!("empty {} code", group)));
            }
            if codes[0] == codes[1] || codes[0] == codes[2] || codes[1] == codes[2] {
                return Err(AppError::Config(format!("duplicate {} code", group)));
            }
        }
        if self.age_total.is_empty() {
            return Err(AppError::Config("no age total code configured".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub vocabulary: Vocabulary,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            vocabulary: Vocabulary::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, or return defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: AppConfig = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.vocabulary.validate()?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(cfg)
    }
}
