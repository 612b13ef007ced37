use super::error::GlossaryError;
use super::types::{DeleteOutcome, GlossaryRecord, GlossarySpec, TranslateRequest};
use crate::terms::TermSet;

/// The remote operations the glossary workflow depends on.
///
/// [`GlossaryClient`](super::GlossaryClient) talks to DeepL; tests substitute
/// an in-memory implementation.
#[allow(async_fn_in_trait)]
pub trait GlossaryApi {
    /// Creates a glossary from `terms`.
    async fn create(&self, spec: &GlossarySpec, terms: &TermSet)
    -> Result<GlossaryRecord, GlossaryError>;

    /// Lists all glossaries of the account. Empty when there are none.
    async fn list(&self) -> Result<Vec<GlossaryRecord>, GlossaryError>;

    /// Fetches a single glossary's metadata.
    async fn get(&self, id: &str) -> Result<GlossaryRecord, GlossaryError>;

    /// Fetches a glossary's entries.
    async fn get_entries(&self, id: &str) -> Result<TermSet, GlossaryError>;

    /// Deletes a glossary. A glossary that is already gone is not an error.
    async fn delete(&self, id: &str) -> Result<DeleteOutcome, GlossaryError>;

    /// Translates one text, optionally applying a glossary.
    async fn translate(&self, request: &TranslateRequest<'_>) -> Result<String, GlossaryError>;
}
