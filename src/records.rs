//! Certification Records - External Data Source
//!
//! Records come from the site's certification config; only records with a
//! recognized badge path are eligible for grid placement.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Badge paths must start with this prefix to be eligible for placement.
/// Anything else (e.g. a DONT-SHOW sentinel) is silently excluded.
pub const BADGE_PATH_PREFIX: &str = "/badges/";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to read records from {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("Malformed record file {0}: {1}")]
    Parse(String, #[source] serde_yaml::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    /// Award month in `YYYY-MM` form.
    pub date: String,
    /// 1 = foundational, 2 = associate, 3 = professional.
    #[serde(default)]
    pub tier: Option<u32>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub certificate: Option<CertificateRef>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRef {
    pub link: String,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Certification {
    /// Eligibility is the only filtering rule: the badge path must carry
    /// the recognized prefix.
    pub fn is_eligible(&self) -> bool {
        self.badge
            .as_deref()
            .map_or(false, |b| b.starts_with(BADGE_PATH_PREFIX))
    }

    /// Final path segment of the badge path, directory components stripped.
    pub fn badge_basename(&self) -> Option<&str> {
        self.badge.as_deref()?.rsplit('/').next()
    }
}

/// Load the certification list from a YAML record file.
pub fn load_from_file(path: &Path) -> Result<Vec<Certification>, RecordError> {
    let content = fs::read_to_string(path)
        .map_err(|e| RecordError::Read(path.display().to_string(), e))?;
    serde_yaml::from_str(&content)
        .map_err(|e| RecordError::Parse(path.display().to_string(), e))
}
