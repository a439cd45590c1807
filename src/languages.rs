//! Languages supported for transcription and translation.

/// A supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code (with region for Chinese)
    pub code: &'static str,
    /// English display name
    pub name: &'static str,
}

/// Source code meaning "detect the language"
pub const AUTO: &str = "auto";

static LANGUAGES: [Language; 11] = [
    Language { code: "en", name: "English" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "zh-CN", name: "Chinese (Simplified)" },
    Language { code: "ru", name: "Russian" },
    Language { code: "ar", name: "Arabic" },
];

/// All supported languages, in display order
pub fn all() -> &'static [Language] {
    &LANGUAGES
}

/// Look up the display name for a code
pub fn name(code: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|l| l.code == code).map(|l| l.name)
}

/// Check if a code can be a translation target
pub fn is_valid_target(code: &str) -> bool {
    name(code).is_some()
}

/// Check if a code can be a translation source
pub fn is_valid_source(code: &str) -> bool {
    code == AUTO || is_valid_target(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(name("hi"), Some("Hindi"));
        assert_eq!(name("zh-CN"), Some("Chinese (Simplified)"));
        assert_eq!(name("zh"), None);
    }

    #[test]
    fn test_auto_only_as_source() {
        assert!(is_valid_source("auto"));
        assert!(!is_valid_target("auto"));
        assert!(is_valid_source("fr"));
    }

    #[test]
    fn test_order() {
        assert_eq!(all().len(), 11);
        assert_eq!(all()[0].code, "en");
        assert_eq!(all()[10].code, "ar");
    }
}
