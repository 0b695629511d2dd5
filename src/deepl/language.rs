//! DeepL target language codes.
//!
//! The list is informational. Codes typed at the prompt are passed through
//! as-is and DeepL decides whether it accepts them.

use super::error::DeeplError;
use crate::ui::Style;

/// Target language codes accepted by DeepL and their names.
pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("AR", "Arabic"),
    ("BG", "Bulgarian"),
    ("CS", "Czech"),
    ("DA", "Danish"),
    ("DE", "German"),
    ("EL", "Greek"),
    ("EN-GB", "English (British)"),
    ("EN-US", "English (American)"),
    ("ES", "Spanish"),
    ("ET", "Estonian"),
    ("FI", "Finnish"),
    ("FR", "French"),
    ("HU", "Hungarian"),
    ("ID", "Indonesian"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Lithuanian"),
    ("LV", "Latvian"),
    ("NB", "Norwegian (Bokmål)"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    ("PT-BR", "Portuguese (Brazilian)"),
    ("PT-PT", "Portuguese (European)"),
    ("RO", "Romanian"),
    ("RU", "Russian"),
    ("SK", "Slovak"),
    ("SL", "Slovenian"),
    ("SV", "Swedish"),
    ("TR", "Turkish"),
    ("UK", "Ukrainian"),
    ("ZH", "Chinese (unspecified variant)"),
    ("ZH-HANS", "Chinese (Simplified)"),
    ("ZH-HANT", "Chinese (Traditional)"),
];

/// Prints all known target language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("DeepL target languages"));
    for (code, name) in TARGET_LANGUAGES {
        println!("  {:8} {}", Style::code(code), Style::secondary(name));
    }
}

/// Trims a language code typed at the prompt.
///
/// # Errors
///
/// Returns [`DeeplError::InvalidArgument`] when nothing but whitespace was entered.
pub fn parse_target_language(input: &str) -> Result<String, DeeplError> {
    let code = input.trim();
    if code.is_empty() {
        return Err(DeeplError::InvalidArgument(
            "Target language code is empty. Run 'dlt languages' to see the codes DeepL accepts."
                .to_string(),
        ));
    }
    Ok(code.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_language_trims() {
        assert_eq!(parse_target_language("  EN-US \n").unwrap(), "EN-US");
    }

    #[test]
    fn test_parse_target_language_keeps_unknown_codes() {
        // DeepL is the judge of which codes exist.
        assert_eq!(parse_target_language("xx").unwrap(), "xx");
    }

    #[test]
    fn test_parse_target_language_rejects_blank() {
        let err = parse_target_language("   ").unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_examples_from_prompt_are_listed() {
        for code in ["EN-US", "KO", "DE"] {
            assert!(TARGET_LANGUAGES.iter().any(|(c, _)| *c == code));
        }
    }
}
