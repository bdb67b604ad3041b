use std::str::FromStr;

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::data::model::Release;

// ---------------------------------------------------------------------------
// Export formats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Json,
        ExportFormat::Csv,
        ExportFormat::Markdown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "markdown",
        }
    }

    /// Label shown in the export selector.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
            ExportFormat::Markdown => "Markdown",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" => Ok(ExportFormat::Markdown),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported export format {0:?}")]
    UnsupportedFormat(String),
    #[error("failed to encode JSON payload")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Artifact
// ---------------------------------------------------------------------------

/// A fully serialized export: payload plus file descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub content: String,
    pub filename: &'static str,
    pub media_type: &'static str,
}

/// Destination for generated artifacts.  Production hands the file to the
/// user through a save dialog; tests capture it in memory.
pub trait ArtifactSink {
    fn emit(&mut self, artifact: &Artifact) -> anyhow::Result<()>;
}

/// Saves an artifact through a native save dialog.  Cancelling the dialog
/// is not an error.
pub struct SaveDialogSink;

impl ArtifactSink for SaveDialogSink {
    fn emit(&mut self, artifact: &Artifact) -> anyhow::Result<()> {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Export timeline")
            .set_file_name(artifact.filename)
            .save_file()
        else {
            return Ok(());
        };
        std::fs::write(&path, &artifact.content)
            .with_context(|| format!("writing export to {}", path.display()))?;
        log::info!(
            "Exported {} bytes ({}) to {}",
            artifact.content.len(),
            artifact.media_type,
            path.display()
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Key order of the JSON envelope is part of the export contract.
#[derive(Serialize)]
struct Envelope<'a> {
    timestamp: String,
    models: &'a [&'a Release],
    metadata: &'a Map<String, Value>,
}

/// Serialize the current view to the requested format.
///
/// Deterministic: identical (view, metadata, format, timestamp) inputs
/// always yield identical content.  Unknown format strings produce
/// [`ExportError::UnsupportedFormat`] and no output.
pub fn serialize(
    view: &[&Release],
    metadata: &Map<String, Value>,
    format: &str,
    timestamp: DateTime<Utc>,
) -> Result<Artifact, ExportError> {
    let format = ExportFormat::from_str(format)?;
    let stamp = timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);

    let artifact = match format {
        ExportFormat::Json => Artifact {
            content: serde_json::to_string_pretty(&Envelope {
                timestamp: stamp,
                models: view,
                metadata,
            })?,
            filename: "llm_timeline.json",
            media_type: "application/json",
        },
        ExportFormat::Csv => Artifact {
            content: to_csv(view),
            filename: "llm_timeline.csv",
            media_type: "text/csv",
        },
        ExportFormat::Markdown => Artifact {
            content: to_markdown(view, &stamp),
            filename: "llm_timeline.md",
            media_type: "text/markdown",
        },
    };
    Ok(artifact)
}

const CSV_HEADER: &str =
    r#""Model Name","Release Date","Company","Parameters","Context Window","Modality""#;

/// Known limitation, kept for compatibility with the reference exporter:
/// fields are always double-quoted but embedded quotes and commas are NOT
/// escaped.
fn to_csv(view: &[&Release]) -> String {
    let mut lines = Vec::with_capacity(view.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for release in view {
        let parameters = release.parameters.as_deref().unwrap_or("N/A");
        let context_window = release
            .context_window
            .as_ref()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let modality = release.modality_tags().join("; ");
        lines.push(format!(
            "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
            release.name,
            release.formatted_date(),
            release.provider,
            parameters,
            context_window,
            modality
        ));
    }
    lines.join("\n")
}

fn to_markdown(view: &[&Release], stamp: &str) -> String {
    let mut content = format!("# LLM Timeline\n\nExported: {stamp}\n\n");
    content.push_str("| Model | Date | Company | Parameters |\n");
    content.push_str("|-------|------|---------|------------|\n");
    for release in view {
        content.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            release.name,
            release.formatted_date(),
            release.provider,
            release.parameters.as_deref().unwrap_or("N/A")
        ));
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Dataset;
    use crate::data::view::{build_view, SortCriterion, ALL_PROVIDERS};
    use chrono::TimeZone;

    fn release(id: &str, name: &str, date: &str, params: Option<&str>) -> Release {
        Release {
            id: id.to_string(),
            name: name.to_string(),
            provider: "OpenAI".to_string(),
            release_date: date.to_string(),
            parameters: params.map(str::to_string),
            modality: Some(vec!["text".to_string()]),
            ..Default::default()
        }
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn metadata() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("source".to_string(), Value::from("curated"));
        map
    }

    #[test]
    fn unsupported_format_is_an_error() {
        let err = serialize(&[], &metadata(), "xml", stamp()).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat(f) if f == "xml"));
    }

    #[test]
    fn json_envelope_keys_are_ordered_and_indented() {
        let gpt2 = release("gpt2", "GPT-2", "2019-02-14", Some("1.5B"));
        let view = [&gpt2];
        let artifact = serialize(&view, &metadata(), "json", stamp()).unwrap();

        assert_eq!(artifact.filename, "llm_timeline.json");
        assert_eq!(artifact.media_type, "application/json");
        assert!(artifact.content.starts_with("{\n  \"timestamp\""));
        let ts = artifact.content.find("\"timestamp\"").unwrap();
        let models = artifact.content.find("\"models\"").unwrap();
        let meta = artifact.content.find("\"metadata\"").unwrap();
        assert!(ts < models && models < meta);
        assert!(artifact
            .content
            .contains("\"timestamp\": \"2024-05-01T12:00:00.000Z\""));
    }

    #[test]
    fn csv_header_is_the_exact_literal_and_rows_match_view_length() {
        let gpt2 = release("gpt2", "GPT-2", "2019-02-14", Some("1.5B"));
        let gpt3 = release("gpt3", "GPT-3", "2020-06-11", None);
        let view = [&gpt2, &gpt3];
        let artifact = serialize(&view, &metadata(), "csv", stamp()).unwrap();

        assert_eq!(artifact.filename, "llm_timeline.csv");
        assert_eq!(artifact.media_type, "text/csv");
        let lines: Vec<&str> = artifact.content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            r#""Model Name","Release Date","Company","Parameters","Context Window","Modality""#
        );
        assert_eq!(
            lines[1],
            r#""GPT-2","Feb 14, 2019","OpenAI","1.5B","N/A","text""#
        );
        // Missing parameters and context_window render as the literal N/A.
        assert_eq!(
            lines[2],
            r#""GPT-3","Jun 11, 2020","OpenAI","N/A","N/A","text""#
        );
    }

    #[test]
    fn csv_does_not_escape_embedded_quotes_or_commas() {
        let odd = release("odd", r#"The "Big, Odd" Model"#, "2021-01-01", None);
        let view = [&odd];
        let artifact = serialize(&view, &metadata(), "csv", stamp()).unwrap();
        assert!(artifact
            .content
            .contains(r#""The "Big, Odd" Model","Jan 1, 2021""#));
    }

    #[test]
    fn markdown_heading_timestamp_and_row_count() {
        let gpt2 = release("gpt2", "GPT-2", "2019-02-14", Some("1.5B"));
        let gpt3 = release("gpt3", "GPT-3", "2020-06-11", None);
        let view = [&gpt2, &gpt3];
        let artifact = serialize(&view, &metadata(), "markdown", stamp()).unwrap();

        assert_eq!(artifact.filename, "llm_timeline.md");
        assert_eq!(artifact.media_type, "text/markdown");
        let lines: Vec<&str> = artifact.content.lines().collect();
        assert_eq!(lines[0], "# LLM Timeline");
        assert_eq!(lines[2], "Exported: 2024-05-01T12:00:00.000Z");
        assert_eq!(lines[4], "| Model | Date | Company | Parameters |");
        let rows = lines.iter().filter(|l| l.starts_with("| ")).count();
        assert_eq!(rows, view.len() + 1); // header row + one per record
        assert!(lines.last().unwrap().contains("| N/A |"));
    }

    #[test]
    fn identical_inputs_yield_identical_content() {
        let gpt2 = release("gpt2", "GPT-2", "2019-02-14", Some("1.5B"));
        let view = [&gpt2];
        for format in ["json", "csv", "markdown"] {
            let a = serialize(&view, &metadata(), format, stamp()).unwrap();
            let b = serialize(&view, &metadata(), format, stamp()).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn end_to_end_sort_then_export() {
        let dataset = Dataset {
            releases: vec![
                release("gpt3", "GPT-3", "2020-06-11", Some("175B")),
                release("gpt2", "GPT-2", "2019-02-14", Some("1.5B")),
            ],
            metadata: metadata(),
        };

        let by_date = build_view(&dataset, ALL_PROVIDERS, SortCriterion::DateAsc);
        assert_eq!(by_date, vec![1, 0]);
        let by_params = build_view(&dataset, ALL_PROVIDERS, SortCriterion::ParamsDesc);
        assert_eq!(by_params, vec![0, 1]);

        let view: Vec<&Release> = by_date.iter().map(|&i| &dataset.releases[i]).collect();
        let artifact = serialize(&view, &dataset.metadata, "csv", stamp()).unwrap();
        assert_eq!(artifact.content.lines().count(), 3);
    }

    #[test]
    fn memory_sink_captures_artifacts() {
        struct MemorySink(Vec<Artifact>);
        impl ArtifactSink for MemorySink {
            fn emit(&mut self, artifact: &Artifact) -> anyhow::Result<()> {
                self.0.push(artifact.clone());
                Ok(())
            }
        }

        let gpt2 = release("gpt2", "GPT-2", "2019-02-14", Some("1.5B"));
        let view = [&gpt2];
        let artifact = serialize(&view, &metadata(), "markdown", stamp()).unwrap();

        let mut sink = MemorySink(Vec::new());
        sink.emit(&artifact).unwrap();
        assert_eq!(sink.0.len(), 1);
        assert_eq!(sink.0[0].filename, "llm_timeline.md");
    }
}
