//! Subcommand implementations.

/// Term export command handler.
pub mod export;

/// Glossary info file written after create / update.
pub mod info;

/// Interactive management menu.
pub mod menu;

/// Term set listing.
pub mod terms;
