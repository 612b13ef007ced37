//! In-memory `GlossaryApi` that records every call.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use deepl_glossary::deepl::{
    DeleteOutcome, GlossaryApi, GlossaryError, GlossaryRecord, GlossarySpec, TranslateRequest,
};
use deepl_glossary::terms::TermSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(String),
    List,
    Get(String),
    GetEntries(String),
    Delete(String),
    Translate { text: String, glossary: Option<String> },
}

#[derive(Default)]
struct State {
    glossaries: Vec<(GlossaryRecord, TermSet)>,
    calls: Vec<Call>,
    next_id: usize,
    failing_deletes: Vec<String>,
    failing_default_translation: bool,
}

/// Fake DeepL account.
///
/// Translation looks each word up in `default_dictionary`, or in the
/// glossary's terms first when a glossary id is given.
#[derive(Default)]
pub struct FakeApi {
    state: RefCell<State>,
    default_dictionary: HashMap<String, String>,
}

pub fn record(id: &str) -> GlossaryRecord {
    GlossaryRecord {
        glossary_id: id.to_string(),
        name: format!("glossary {id}"),
        ready: true,
        source_lang: "en".to_string(),
        target_lang: "zh".to_string(),
        creation_time: "2024-01-01T00:00:00Z".to_string(),
        entry_count: 1,
    }
}

pub fn spec() -> GlossarySpec {
    GlossarySpec {
        name: "Academic_AI_Terms".to_string(),
        source_lang: "en".to_string(),
        target_lang: "zh".to_string(),
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glossaries(ids: &[&str]) -> Self {
        let api = Self::new();
        {
            let mut state = api.state.borrow_mut();
            for id in ids {
                state
                    .glossaries
                    .push((record(id), [("agent", "agent")].into_iter().collect()));
            }
        }
        api
    }

    pub fn with_dictionary(mut self, words: &[(&str, &str)]) -> Self {
        self.default_dictionary = words
            .iter()
            .map(|(s, t)| ((*s).to_string(), (*t).to_string()))
            .collect();
        self
    }

    pub fn fail_delete_of(&self, id: &str) {
        self.state.borrow_mut().failing_deletes.push(id.to_string());
    }

    /// Makes every translation without a glossary fail with a 503.
    pub fn fail_default_translation(&self) {
        self.state.borrow_mut().failing_default_translation = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// Calls other than `list` / `get`, in order.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Create(_) | Call::Delete(_)))
            .collect()
    }

    pub fn ids(&self) -> Vec<String> {
        self.state
            .borrow()
            .glossaries
            .iter()
            .map(|(r, _)| r.glossary_id.clone())
            .collect()
    }

    fn push(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl GlossaryApi for FakeApi {
    async fn create(
        &self,
        spec: &GlossarySpec,
        terms: &TermSet,
    ) -> Result<GlossaryRecord, GlossaryError> {
        self.push(Call::Create(spec.name.clone()));
        let mut state = self.state.borrow_mut();
        state.next_id += 1;

        let record = GlossaryRecord {
            glossary_id: format!("new-{}", state.next_id),
            name: spec.name.clone(),
            ready: true,
            source_lang: spec.source_lang.clone(),
            target_lang: spec.target_lang.clone(),
            creation_time: "2024-06-01T00:00:00Z".to_string(),
            entry_count: terms.len() as u64,
        };
        state.glossaries.push((record.clone(), terms.clone()));
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<GlossaryRecord>, GlossaryError> {
        self.push(Call::List);
        Ok(self
            .state
            .borrow()
            .glossaries
            .iter()
            .map(|(r, _)| r.clone())
            .collect())
    }

    async fn get(&self, id: &str) -> Result<GlossaryRecord, GlossaryError> {
        self.push(Call::Get(id.to_string()));
        self.state
            .borrow()
            .glossaries
            .iter()
            .find(|(r, _)| r.glossary_id == id)
            .map(|(r, _)| r.clone())
            .ok_or_else(|| GlossaryError::NotFound(id.to_string()))
    }

    async fn get_entries(&self, id: &str) -> Result<TermSet, GlossaryError> {
        self.push(Call::GetEntries(id.to_string()));
        self.state
            .borrow()
            .glossaries
            .iter()
            .find(|(r, _)| r.glossary_id == id)
            .map(|(_, t)| t.clone())
            .ok_or_else(|| GlossaryError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<DeleteOutcome, GlossaryError> {
        self.push(Call::Delete(id.to_string()));
        let mut state = self.state.borrow_mut();
        if state.failing_deletes.iter().any(|f| f == id) {
            return Err(GlossaryError::UnexpectedStatus {
                status: 500,
                message: "Internal error".to_string(),
            });
        }

        let before = state.glossaries.len();
        state.glossaries.retain(|(r, _)| r.glossary_id != id);
        if state.glossaries.len() < before {
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::AlreadyGone)
        }
    }

    async fn translate(&self, request: &TranslateRequest<'_>) -> Result<String, GlossaryError> {
        self.push(Call::Translate {
            text: request.text.to_string(),
            glossary: request.glossary_id.map(str::to_string),
        });

        let glossary = match request.glossary_id {
            Some(id) => Some(self.get_entries_now(id)?),
            None if self.state.borrow().failing_default_translation => {
                return Err(GlossaryError::Translation {
                    status: 503,
                    message: "Service unavailable".to_string(),
                });
            }
            None => None,
        };

        let words: Vec<String> = request
            .text
            .split_whitespace()
            .map(|word| {
                let key = word.to_lowercase();
                glossary
                    .as_ref()
                    .and_then(|g| g.get(&key))
                    .or_else(|| self.default_dictionary.get(&key).map(String::as_str))
                    .unwrap_or(word)
                    .to_string()
            })
            .collect();
        Ok(words.join(" "))
    }
}

impl FakeApi {
    fn get_entries_now(&self, id: &str) -> Result<TermSet, GlossaryError> {
        self.state
            .borrow()
            .glossaries
            .iter()
            .find(|(r, _)| r.glossary_id == id)
            .map(|(_, t)| t.clone())
            .ok_or_else(|| GlossaryError::NotFound(id.to_string()))
    }
}
