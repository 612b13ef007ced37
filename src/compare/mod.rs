//! Checks whether a glossary changes DeepL's output.
//!
//! Each test case is translated twice, without and with the glossary, and
//! the expected terms are looked up in the glossary translation.

mod cases;
mod summary;

pub use cases::{TestCase, preset_cases};
pub use summary::RunSummary;

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::deepl::{GlossaryApi, GlossaryError, TranslateRequest};
use crate::terms::TermSet;

/// Overall outcome of one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every expected term found and the glossary changed the output.
    Passed,
    /// Every expected term found, but both translations are identical.
    MatchedNoDifference,
    /// Some expected terms found.
    Partial,
    /// No expected term found.
    Failed,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::MatchedNoDifference => "matched, no difference",
            Self::Partial => "partial",
            Self::Failed => "failed",
        }
    }
}

/// Classifies a comparison from its term counts and whether the outputs differ.
pub const fn classify(found: usize, expected: usize, has_difference: bool) -> Verdict {
    if found == expected {
        if has_difference {
            Verdict::Passed
        } else {
            Verdict::MatchedNoDifference
        }
    } else if found > 0 {
        Verdict::Partial
    } else {
        Verdict::Failed
    }
}

/// How an expected term showed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermFinding {
    /// Present with the glossary, absent from the default translation.
    Applied,
    /// Present in both translations (or the default one is unavailable).
    AlreadyDefault,
    /// Absent from the glossary translation.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCheck {
    pub term: String,
    /// The term is meant to stay in the source language.
    pub keep_original: bool,
    pub finding: TermFinding,
}

/// Outcome of translating one text with and without a glossary.
#[derive(Debug)]
pub struct ComparisonResult {
    pub original: String,
    /// `None` when the default translation failed.
    pub without_glossary: Option<String>,
    /// Why the default translation failed.
    pub without_error: Option<GlossaryError>,
    pub with_glossary: String,
    pub checks: Vec<TermCheck>,
    pub has_difference: bool,
    pub verdict: Verdict,
}

impl ComparisonResult {
    pub fn found_terms(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| c.finding != TermFinding::Missing)
            .map(|c| c.term.as_str())
            .collect()
    }

    pub fn missing_terms(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| c.finding == TermFinding::Missing)
            .map(|c| c.term.as_str())
            .collect()
    }

    /// (found, expected) among the terms meant to stay untranslated.
    pub fn kept_counts(&self) -> (usize, usize) {
        let kept = self.checks.iter().filter(|c| c.keep_original);
        let expected = kept.clone().count();
        let found = kept.filter(|c| c.finding != TermFinding::Missing).count();
        (found, expected)
    }
}

/// Checks each expected term against both translations.
pub fn check_terms(case: &TestCase, with: &str, without: Option<&str>) -> Vec<TermCheck> {
    case.expected_terms
        .iter()
        .map(|term| {
            let finding = if !with.contains(term.as_str()) {
                TermFinding::Missing
            } else if without.is_some_and(|w| !w.contains(term.as_str())) {
                TermFinding::Applied
            } else {
                TermFinding::AlreadyDefault
            };
            TermCheck {
                term: term.clone(),
                keep_original: case.keep_original.contains(term),
                finding,
            }
        })
        .collect()
}

/// Wraps each occurrence of the given terms in `【】`.
///
/// One pass over `text`; at each position the longest matching term wins, so
/// duplicates and terms nested in longer ones are wrapped once.
pub fn highlight(text: &str, terms: &[&str]) -> String {
    let mut terms: Vec<&str> = terms.iter().copied().filter(|t| !t.is_empty()).collect();
    terms.sort_unstable_by_key(|t| (Reverse(t.len()), *t));
    terms.dedup();

    let mut highlighted = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if let Some(term) = terms.iter().find(|t| rest.starts_with(**t)) {
            highlighted.push('【');
            highlighted.push_str(term);
            highlighted.push('】');
            rest = &rest[term.len()..];
        } else {
            highlighted.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    highlighted
}

/// Distinct glossary targets that occur in `text`, in term-set order.
pub fn targets_in<'a>(terms: &'a TermSet, text: &str) -> Vec<&'a str> {
    let mut targets: Vec<&str> = Vec::new();
    for entry in terms.iter() {
        let target = entry.target.as_str();
        if text.contains(target) && !targets.contains(&target) {
            targets.push(target);
        }
    }
    targets
}

/// Whitespace-separated words that appear in only one of the two texts.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WordDiff {
    pub only_without: BTreeSet<String>,
    pub only_with: BTreeSet<String>,
}

impl WordDiff {
    pub fn is_empty(&self) -> bool {
        self.only_without.is_empty() && self.only_with.is_empty()
    }
}

pub fn word_diff(without: &str, with: &str) -> WordDiff {
    let a: BTreeSet<String> = without.split_whitespace().map(str::to_string).collect();
    let b: BTreeSet<String> = with.split_whitespace().map(str::to_string).collect();

    WordDiff {
        only_without: a.difference(&b).cloned().collect(),
        only_with: b.difference(&a).cloned().collect(),
    }
}

/// Both translations of one text.
#[derive(Debug)]
pub struct TranslationPair {
    /// The default translation, or why it failed.
    pub without: Result<String, GlossaryError>,
    pub with: String,
}

/// Runs translations for a language pair through a [`GlossaryApi`].
pub struct Comparator<'a, A> {
    api: &'a A,
    source_lang: &'a str,
    target_lang: &'a str,
}

impl<'a, A: GlossaryApi> Comparator<'a, A> {
    pub const fn new(api: &'a A, source_lang: &'a str, target_lang: &'a str) -> Self {
        Self {
            api,
            source_lang,
            target_lang,
        }
    }

    async fn translate(&self, text: &str, glossary_id: Option<&str>) -> Result<String, GlossaryError> {
        self.api
            .translate(&TranslateRequest {
                text,
                source_lang: self.source_lang,
                target_lang: self.target_lang,
                glossary_id,
            })
            .await
    }

    /// Translates `text` without, then with the glossary.
    ///
    /// A failed default translation is kept in the pair; a failed glossary
    /// translation is returned as the error.
    pub async fn translate_pair(
        &self,
        text: &str,
        glossary_id: &str,
    ) -> Result<TranslationPair, GlossaryError> {
        let without = self.translate(text, None).await;
        if let Err(e) = &without {
            tracing::warn!("translation without glossary failed: {e}");
        }
        let with = self.translate(text, Some(glossary_id)).await?;
        Ok(TranslationPair { without, with })
    }

    pub async fn compare(
        &self,
        case: &TestCase,
        glossary_id: &str,
    ) -> Result<ComparisonResult, GlossaryError> {
        let TranslationPair { without, with } =
            self.translate_pair(&case.text, glossary_id).await?;
        let (without, without_error) = match without {
            Ok(text) => (Some(text), None),
            Err(e) => (None, Some(e)),
        };

        let has_difference = without.as_deref().is_some_and(|w| w != with);
        let checks = check_terms(case, &with, without.as_deref());
        let found = checks
            .iter()
            .filter(|c| c.finding != TermFinding::Missing)
            .count();
        let verdict = classify(found, checks.len(), has_difference);

        Ok(ComparisonResult {
            original: case.text.clone(),
            without_glossary: without,
            without_error,
            with_glossary: with,
            checks,
            has_difference,
            verdict,
        })
    }
}
