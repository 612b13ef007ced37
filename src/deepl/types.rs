use serde::{Deserialize, Serialize};

/// A glossary as DeepL reports it.
///
/// Owned by the remote service; the client only holds one for the duration
/// of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryRecord {
    pub glossary_id: String,
    pub name: String,
    #[serde(default = "ready_by_default")]
    pub ready: bool,
    pub source_lang: String,
    pub target_lang: String,
    pub creation_time: String,
    pub entry_count: u64,
}

const fn ready_by_default() -> bool {
    true
}

impl GlossaryRecord {
    /// One-line summary used in confirmation prompts and logs.
    pub fn describe(&self) -> String {
        format!(
            "{} ({}, {} → {}, {} entries)",
            self.name, self.glossary_id, self.source_lang, self.target_lang, self.entry_count
        )
    }
}

/// What to create: glossary name and language pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossarySpec {
    pub name: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Result of a delete request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// DeepL removed the glossary (204).
    Deleted,
    /// The glossary was already gone (404).
    AlreadyGone,
}

/// A single `/v2/translate` call.
#[derive(Debug, Clone, Copy)]
pub struct TranslateRequest<'a> {
    pub text: &'a str,
    pub source_lang: &'a str,
    pub target_lang: &'a str,
    /// Apply this glossary; `None` means default translation.
    pub glossary_id: Option<&'a str>,
}

/// Builds the key the "Translate for Zotero" plugin expects: `<api_key>#<glossary_id>`.
pub fn plugin_secret(api_key: &str, glossary_id: &str) -> String {
    format!("{api_key}#{glossary_id}")
}
