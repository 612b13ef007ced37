//! Renders a term set to JSON, TSV or a Markdown table.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

use super::{TermSet, tsv};
use crate::fs::atomic_write;

/// Supported export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Tsv,
    Md,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Tsv => "tsv",
            Self::Md => "md",
        }
    }

    /// Appends this format's extension unless `output` already ends with it.
    pub fn output_path(self, output: &str) -> PathBuf {
        let suffix = format!(".{}", self.extension());
        if output.ends_with(&suffix) {
            PathBuf::from(output)
        } else {
            PathBuf::from(format!("{output}{suffix}"))
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Renders `terms` in the given format.
pub fn render(terms: &TermSet, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(terms).context("Failed to serialize terms as JSON")
        }
        ExportFormat::Tsv => {
            let mut body = tsv::serialize(terms)?;
            if !body.is_empty() {
                body.push('\n');
            }
            Ok(body)
        }
        ExportFormat::Md => Ok(render_markdown(terms)),
    }
}

fn render_markdown(terms: &TermSet) -> String {
    let mut out = String::from("# Glossary Terms\n\n");
    out.push_str("| Source | Target | Type |\n");
    out.push_str("|--------|--------|------|\n");
    for entry in terms {
        let kind = if entry.is_kept() { "keep" } else { "translate" };
        out.push_str(&format!(
            "| {} | {} | {kind} |\n",
            escape_cell(&entry.source),
            escape_cell(&entry.target)
        ));
    }
    out
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Writes `terms` to `output` (extension added if missing) and returns the path.
pub fn export_terms(terms: &TermSet, format: ExportFormat, output: &str) -> Result<PathBuf> {
    let path = format.output_path(output);
    let content = render(terms, format)?;
    atomic_write(&path, &content)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    Ok(path)
}
