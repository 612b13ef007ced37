//! Configuration file management and setting resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_GLOSSARY_NAME, DEFAULT_SOURCE_LANG,
    DEFAULT_TARGET_LANG, GlossarySettings, ResolveOptions, ResolvedConfig, resolve_config,
    resolve_terms,
};
