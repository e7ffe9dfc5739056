//! Speaker and language selectors.
//!
//! Both are closed enumerations scoped to a single synthesis request; the
//! backend receives the speaker name unmodified and the language as its
//! engine-specific code.

mod catalog;

pub use catalog::{Language, Speaker};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    // ===========================================
    // Language mapping tests
    // ===========================================

    #[test]
    fn test_language_codes_total_and_nonempty() {
        for language in Language::ALL {
            assert!(!language.code().is_empty(), "{language} has an empty code");
            assert!(!language.name().is_empty(), "{language} has an empty name");
        }
    }

    #[test]
    fn test_language_code_mapping_stable() {
        assert_eq!(Language::Luxembourgish.code(), "x-lb");
        assert_eq!(Language::German.code(), "x-de");
        assert_eq!(Language::French.code(), "fr-fr");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Portuguese.code(), "pt-br");
    }

    #[test]
    fn test_language_default_is_luxembourgish() {
        assert_eq!(Language::default(), Language::Luxembourgish);
    }

    #[test]
    fn test_language_parses_engine_code_alias() {
        let parsed = Language::from_str("x-lb", true).unwrap();
        assert_eq!(parsed, Language::Luxembourgish);

        let parsed = Language::from_str("pt-br", true).unwrap();
        assert_eq!(parsed, Language::Portuguese);
    }

    #[test]
    fn test_language_parses_human_name() {
        let parsed = Language::from_str("german", true).unwrap();
        assert_eq!(parsed, Language::German);
    }

    #[test]
    fn test_language_rejects_unknown() {
        assert!(Language::from_str("x-nl", true).is_err());
    }

    // ===========================================
    // Speaker tests
    // ===========================================

    #[test]
    fn test_speaker_names_total_and_nonempty() {
        for speaker in Speaker::ALL {
            assert!(!speaker.as_str().is_empty());
        }
    }

    #[test]
    fn test_speaker_all_has_eight_voices() {
        assert_eq!(Speaker::ALL.len(), 8);
    }

    #[test]
    fn test_speaker_default_is_judith() {
        assert_eq!(Speaker::default(), Speaker::Judith);
    }

    #[test]
    fn test_speaker_names_preserve_case() {
        // The backend matches embedded voice names exactly.
        assert_eq!(Speaker::Bernard.as_str(), "Bernard");
        assert_eq!(Speaker::Thorsten.as_str(), "Thorsten");
    }

    #[test]
    fn test_speaker_parses_lowercase() {
        let parsed = Speaker::from_str("judith", true).unwrap();
        assert_eq!(parsed, Speaker::Judith);
    }
}
