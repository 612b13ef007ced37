mod api;
mod client;
mod error;
mod language;
mod types;

pub use api::GlossaryApi;
pub use client::{
    ClientConfig, DEFAULT_TIMEOUT, FREE_ENDPOINT, GlossaryClient, PRO_ENDPOINT,
    default_endpoint_for_key,
};
pub use error::{GlossaryError, QUOTA_EXCEEDED_STATUS, glossary_error, translation_error};
pub use language::{GLOSSARY_LANGUAGES, print_languages, validate_language};
pub use types::{
    DeleteOutcome, GlossaryRecord, GlossarySpec, TranslateRequest, plugin_secret,
};
