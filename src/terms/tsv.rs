//! DeepL glossary entry format: one `source<TAB>target` pair per line.

use thiserror::Error;

use super::TermSet;

/// A term that cannot be represented in the TSV entry format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("term {term:?} contains a tab or line break and cannot be encoded")]
pub struct EncodingError {
    pub term: String,
}

fn is_encodable(term: &str) -> bool {
    !term.contains(['\t', '\n', '\r'])
}

/// Serializes a term set into DeepL's TSV entry format.
///
/// Entries are joined with `\n`; there is no trailing newline.
pub fn serialize(terms: &TermSet) -> Result<String, EncodingError> {
    let mut lines = Vec::with_capacity(terms.len());

    for entry in terms {
        for term in [&entry.source, &entry.target] {
            if !is_encodable(term) {
                return Err(EncodingError { term: term.clone() });
            }
        }
        lines.push(format!("{}\t{}", entry.source, entry.target));
    }

    Ok(lines.join("\n"))
}

/// Parses DeepL's TSV entry format.
///
/// Best effort: lines without a tab are skipped, and only the first tab
/// separates source from target.
pub fn deserialize(text: &str) -> TermSet {
    text.lines()
        .filter_map(|line| line.split_once('\t'))
        .collect()
}
