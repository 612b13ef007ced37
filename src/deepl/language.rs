//! Language codes DeepL accepts for glossaries.

use anyhow::Result;

use crate::ui::Style;

/// Glossary-capable language codes and their names.
pub const GLOSSARY_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("nb", "Norwegian (Bokmål)"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
];

/// Prints all glossary language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Glossary language codes"));
    for (code, name) in GLOSSARY_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Normalizes a language code to the lower-case form used by glossary endpoints.
///
/// # Errors
///
/// Returns an error if DeepL does not support glossaries for the language.
pub fn validate_language(lang: &str) -> Result<String> {
    let normalized = lang.trim().to_lowercase();
    if GLOSSARY_LANGUAGES
        .iter()
        .any(|(code, _)| *code == normalized)
    {
        Ok(normalized)
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             DeepL glossaries support: en, de, fr, ja, zh, ...\n\
             Run 'deepl-glossary languages' to see all supported codes."
        )
    }
}
