use anyhow::Result;
use std::path::Path;

use crate::deepl::{GlossaryRecord, plugin_secret};

/// Written to the working directory after a glossary is created.
pub const INFO_FILE: &str = "deepl_glossary_info.txt";

/// Renders the id and plugin key of a freshly created glossary.
pub fn render_info(record: &GlossaryRecord, api_key: &str) -> String {
    format!(
        "Glossary ID: {}\n\
         Plugin Secret: {}\n\
         \n\
         Name: {}\n\
         Languages: {} → {}\n\
         Created: {}\n\
         Entry Count: {}\n",
        record.glossary_id,
        plugin_secret(api_key, &record.glossary_id),
        record.name,
        record.source_lang,
        record.target_lang,
        record.creation_time,
        record.entry_count
    )
}

pub fn write_info(path: &Path, record: &GlossaryRecord, api_key: &str) -> Result<()> {
    crate::fs::atomic_write(path, &render_info(record, api_key))
}
