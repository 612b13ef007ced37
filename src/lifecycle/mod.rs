//! Glossary lifecycle under DeepL's "one glossary per account" constraint.
//!
//! DeepL offers no in-place update of glossary entries, and Free accounts
//! may hold a single glossary, so updating means delete-then-recreate.
//! Every deletion goes through a [`ConfirmGate`] first.

mod gate;

pub use gate::{ConfirmGate, DestructiveAction};

use crate::deepl::{DeleteOutcome, GlossaryApi, GlossaryError, GlossaryRecord, GlossarySpec};
use crate::terms::TermSet;

/// Result of [`GlossaryManager::ensure_single_up_to_date`].
#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(UpdateReport),
    /// The user declined replacing the existing glossaries; nothing changed.
    Cancelled { existing: Vec<GlossaryRecord> },
}

#[derive(Debug)]
pub struct UpdateReport {
    pub created: GlossaryRecord,
    /// Glossaries deleted to make room, in deletion order.
    pub replaced: Vec<GlossaryRecord>,
}

impl UpdateReport {
    /// More than one glossary existed before the update.
    pub fn had_multiple(&self) -> bool {
        self.replaced.len() > 1
    }
}

/// Result of [`GlossaryManager::delete_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDecision {
    Declined,
    Completed(DeleteOutcome),
}

/// Result of [`GlossaryManager::delete_all`].
#[derive(Debug)]
pub enum BulkDeleteOutcome {
    /// The account had no glossaries; nothing was asked.
    NothingToDelete,
    Declined { count: usize },
    Done(BulkDeleteReport),
}

#[derive(Debug, Default)]
pub struct BulkDeleteReport {
    pub deleted: Vec<GlossaryRecord>,
    pub already_gone: Vec<GlossaryRecord>,
    pub failed: Vec<(GlossaryRecord, GlossaryError)>,
}

impl BulkDeleteReport {
    pub fn total(&self) -> usize {
        self.deleted.len() + self.already_gone.len() + self.failed.len()
    }

    pub fn succeeded(&self) -> usize {
        self.deleted.len() + self.already_gone.len()
    }
}

fn describe_all(records: &[GlossaryRecord]) -> String {
    records
        .iter()
        .map(|r| format!("  - {}", r.describe()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Orchestrates create / replace / delete against a [`GlossaryApi`].
pub struct GlossaryManager<'a, A> {
    api: &'a A,
}

impl<'a, A: GlossaryApi> GlossaryManager<'a, A> {
    pub const fn new(api: &'a A) -> Self {
        Self { api }
    }

    pub async fn create(
        &self,
        spec: &GlossarySpec,
        terms: &TermSet,
    ) -> Result<GlossaryRecord, GlossaryError> {
        self.api.create(spec, terms).await
    }

    pub async fn list(&self) -> Result<Vec<GlossaryRecord>, GlossaryError> {
        self.api.list().await
    }

    pub async fn entries(&self, id: &str) -> Result<TermSet, GlossaryError> {
        self.api.get_entries(id).await
    }

    /// The first glossary of the account, used when no id is configured.
    pub async fn first_glossary(&self) -> Result<Option<GlossaryRecord>, GlossaryError> {
        Ok(self.api.list().await?.into_iter().next())
    }

    /// Makes the account hold exactly one glossary built from `terms`.
    ///
    /// With no existing glossary this is a single create. Otherwise all
    /// existing glossaries are deleted (after confirmation) and a fresh one
    /// is created. A failed delete aborts before anything is created.
    pub async fn ensure_single_up_to_date(
        &self,
        spec: &GlossarySpec,
        terms: &TermSet,
        gate: &mut impl ConfirmGate,
    ) -> Result<UpdateOutcome, GlossaryError> {
        let existing = self.api.list().await?;

        if existing.is_empty() {
            let created = self.api.create(spec, terms).await?;
            return Ok(UpdateOutcome::Updated(UpdateReport {
                created,
                replaced: Vec::new(),
            }));
        }

        if existing.len() > 1 {
            tracing::warn!(
                count = existing.len(),
                "more than one glossary exists; all of them will be replaced"
            );
        }

        let description = format!(
            "Delete {} existing glossar{}:\n{}\nand create '{}' ({} → {}) with {} terms.",
            existing.len(),
            if existing.len() == 1 { "y" } else { "ies" },
            describe_all(&existing),
            spec.name,
            spec.source_lang,
            spec.target_lang,
            terms.len()
        );
        if !gate.confirm(DestructiveAction::Replace, &description) {
            return Ok(UpdateOutcome::Cancelled { existing });
        }

        for record in &existing {
            let outcome = self.api.delete(&record.glossary_id).await?;
            if outcome == DeleteOutcome::AlreadyGone {
                tracing::debug!(id = record.glossary_id.as_str(), "glossary already gone");
            }
        }

        let created = self.api.create(spec, terms).await?;
        Ok(UpdateOutcome::Updated(UpdateReport {
            created,
            replaced: existing,
        }))
    }

    /// Deletes one glossary after confirmation.
    ///
    /// An id that does not exist is reported as already gone without asking.
    pub async fn delete_one(
        &self,
        id: &str,
        gate: &mut impl ConfirmGate,
    ) -> Result<DeleteDecision, GlossaryError> {
        let record = match self.api.get(id).await {
            Ok(record) => record,
            Err(GlossaryError::NotFound(_)) => {
                return Ok(DeleteDecision::Completed(DeleteOutcome::AlreadyGone));
            }
            Err(e) => return Err(e),
        };

        let description = format!("Delete glossary {}?", record.describe());
        if !gate.confirm(DestructiveAction::Delete, &description) {
            return Ok(DeleteDecision::Declined);
        }

        let outcome = self.api.delete(id).await?;
        Ok(DeleteDecision::Completed(outcome))
    }

    /// Deletes every glossary of the account after a single confirmation.
    ///
    /// Individual failures are collected; they do not stop the batch.
    pub async fn delete_all(
        &self,
        gate: &mut impl ConfirmGate,
    ) -> Result<BulkDeleteOutcome, GlossaryError> {
        let existing = self.api.list().await?;
        if existing.is_empty() {
            return Ok(BulkDeleteOutcome::NothingToDelete);
        }

        let description = format!(
            "Delete all {} glossaries:\n{}",
            existing.len(),
            describe_all(&existing)
        );
        if !gate.confirm(DestructiveAction::DeleteAll, &description) {
            return Ok(BulkDeleteOutcome::Declined {
                count: existing.len(),
            });
        }

        let mut report = BulkDeleteReport::default();
        for record in existing {
            match self.api.delete(&record.glossary_id).await {
                Ok(DeleteOutcome::Deleted) => report.deleted.push(record),
                Ok(DeleteOutcome::AlreadyGone) => report.already_gone.push(record),
                Err(e) => {
                    tracing::warn!(id = record.glossary_id.as_str(), "delete failed: {e}");
                    report.failed.push((record, e));
                }
            }
        }

        Ok(BulkDeleteOutcome::Done(report))
    }
}
