use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

// ---------------------------------------------------------------------------
// Release – one model release record
// ---------------------------------------------------------------------------

/// A single model release.  Field names mirror the dataset JSON schema and
/// the declaration order is the order records serialize with on export.
/// Absent optional fields stay absent when re-serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Release {
    pub id: String,
    pub name: String,
    pub provider: String,
    /// ISO-8601 date string, e.g. "2019-02-14".
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    /// Parameter count with unit suffix, e.g. "175B", "1.8T".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    /// Context window in thousands of tokens.  Kept as a raw JSON number so
    /// exports reproduce it exactly as loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, rename = "notableAchievements", skip_serializing_if = "Option::is_none")]
    pub notable_achievements: Option<Vec<String>>,
    #[serde(default, rename = "trainingData", skip_serializing_if = "Option::is_none")]
    pub training_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, rename = "publicAccess", skip_serializing_if = "Option::is_none")]
    pub public_access: Option<bool>,
    #[serde(default, rename = "apiAvailable", skip_serializing_if = "Option::is_none")]
    pub api_available: Option<bool>,
}

impl Release {
    /// Parse `release_date` as a calendar date.  `None` for malformed dates;
    /// callers degrade locally instead of failing the pipeline.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok()
    }

    /// Short human-readable date, e.g. "Feb 14, 2019".  Falls back to the
    /// raw string when the date does not parse.
    pub fn formatted_date(&self) -> String {
        match self.parsed_date() {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => self.release_date.clone(),
        }
    }

    /// Modality tags, empty when the field is absent.
    pub fn modality_tags(&self) -> &[String] {
        self.modality.as_deref().unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded timeline
// ---------------------------------------------------------------------------

/// The full parsed dataset: releases in source order plus opaque metadata.
/// Immutable for the session; reloading replaces it wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub releases: Vec<Release>,
    /// Arbitrary dataset metadata, passed through verbatim on export and
    /// never interpreted.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Dataset {
    /// Number of releases.
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_parseable_dates_short_form() {
        let release = Release {
            release_date: "2019-02-14".to_string(),
            ..Default::default()
        };
        assert_eq!(release.parsed_date(), NaiveDate::from_ymd_opt(2019, 2, 14));
        assert_eq!(release.formatted_date(), "Feb 14, 2019");
    }

    #[test]
    fn malformed_date_falls_back_to_raw_string() {
        let release = Release {
            release_date: "sometime in 2019".to_string(),
            ..Default::default()
        };
        assert_eq!(release.parsed_date(), None);
        assert_eq!(release.formatted_date(), "sometime in 2019");
    }

    #[test]
    fn optional_fields_stay_absent_on_serialization() {
        let release = Release {
            id: "gpt2".to_string(),
            name: "GPT-2".to_string(),
            provider: "OpenAI".to_string(),
            release_date: "2019-02-14".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&release).unwrap();
        assert!(!json.contains("parameters"));
        assert!(!json.contains("modality"));
        assert!(json.contains("\"releaseDate\":\"2019-02-14\""));
    }

    #[test]
    fn dataset_parses_schema_with_metadata_passthrough() {
        let dataset: Dataset = serde_json::from_str(
            r#"{
                "releases": [
                    {"id": "gpt2", "name": "GPT-2", "provider": "OpenAI",
                     "releaseDate": "2019-02-14", "parameters": "1.5B",
                     "context_window": 1, "modality": ["text"]}
                ],
                "metadata": {"source": "curated", "version": 3}
            }"#,
        )
        .unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.releases[0].parameters.as_deref(), Some("1.5B"));
        assert_eq!(dataset.metadata["source"], "curated");
    }
}
