//! # deepl-glossary - DeepL Glossary Manager
//!
//! `deepl-glossary` maintains a DeepL glossary of academic AI terms and checks
//! whether the glossary actually changes DeepL's translations.
//!
//! ## Features
//!
//! - **Lifecycle**: create, list, inspect and delete glossaries; keep exactly
//!   one up-to-date glossary under the Free tier's one-glossary limit
//! - **Confirmation**: every deletion goes through a confirmation gate
//! - **Comparison**: translate texts with and without the glossary and check
//!   the expected terms
//! - **Export**: write the term set as JSON, TSV or a Markdown table
//!
//! ## Quick Start
//!
//! ```bash
//! export DEEPL_API_KEY="your-key:fx"
//!
//! # Interactive management menu
//! deepl-glossary
//!
//! # Run the preset comparison cases
//! deepl-glossary test
//!
//! # Export the terms
//! deepl-glossary export --format md --output terms
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/deepl-glossary/config.toml`:
//!
//! ```toml
//! [glossary]
//! name = "Academic_AI_Terms"
//! source_lang = "en"
//! target_lang = "zh"
//! api_key_env = "DEEPL_API_KEY"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Translation comparison with and without a glossary.
pub mod compare;

/// Configuration file management and setting resolution.
pub mod config;

/// DeepL glossary and translate API client.
pub mod deepl;

/// File system utilities.
pub mod fs;

/// Glossary lifecycle and confirmation gate.
pub mod lifecycle;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Term sets and their TSV / export encodings.
pub mod terms;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;
