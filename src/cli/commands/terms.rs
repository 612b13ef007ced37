//! Term set listing command handler.

use crate::terms::TermSet;
use crate::ui::Style;

/// Prints every term, marking the ones that stay untranslated.
pub fn print_terms(terms: &TermSet) {
    println!("{}", Style::header("Glossary terms"));
    for (i, entry) in terms.iter().enumerate() {
        let marker = if entry.is_kept() {
            Style::hint(" (kept)")
        } else {
            String::new()
        };
        println!(
            "  {:>3}. {} → {}{marker}",
            i + 1,
            Style::term(&entry.source),
            Style::value(&entry.target)
        );
    }
    println!();
    println!(
        "{} {} terms, {} kept in the source language",
        Style::label("Total:"),
        terms.len(),
        terms.kept_count()
    );
}
