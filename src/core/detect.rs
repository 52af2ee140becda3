// CyrLat - core/detect.rs
//
// Script detection for the Auto direction: count Cyrillic letters against
// Latin ones and pick whichever dominates. A tie (including the all-digits
// and empty cases) is malformed input for Auto, not a silent default.

use crate::core::mapping::{is_cyrillic, lowercase};
use crate::core::model::ScriptKind;
use crate::util::error::TranslitError;

/// Decide which script dominates `text`.
///
/// Any Cyrillic-block letter counts toward Cyrillic, including non-Russian
/// ones — the forward direction then reports the precise offending letter.
/// ASCII letters and ë count toward Latin; digits, punctuation, and the
/// prime sign characters count toward neither.
pub fn detect_script(text: &str) -> Result<ScriptKind, TranslitError> {
    let mut cyrillic = 0usize;
    let mut latin = 0usize;

    for ch in text.chars() {
        if is_cyrillic(ch) {
            cyrillic += 1;
        } else if ch.is_ascii_alphabetic() || lowercase(ch) == 'ë' {
            latin += 1;
        }
    }

    if cyrillic > latin {
        Ok(ScriptKind::Cyrillic)
    } else if latin > cyrillic {
        Ok(ScriptKind::Latin)
    } else {
        Err(TranslitError::DirectionUndetermined { cyrillic, latin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyrillic_text_detected() {
        assert_eq!(detect_script("Привет, мир!").unwrap(), ScriptKind::Cyrillic);
    }

    #[test]
    fn latin_text_detected() {
        assert_eq!(detect_script("Privet, mir!").unwrap(), ScriptKind::Latin);
    }

    #[test]
    fn mixed_text_follows_majority() {
        // Nine Cyrillic letters vs five Latin ones.
        assert_eq!(
            detect_script("Привет мир hello").unwrap(),
            ScriptKind::Cyrillic
        );
    }

    #[test]
    fn tie_is_undetermined() {
        assert!(matches!(
            detect_script("ab аб"),
            Err(TranslitError::DirectionUndetermined {
                cyrillic: 2,
                latin: 2
            })
        ));
    }

    #[test]
    fn no_letters_is_undetermined() {
        assert!(matches!(
            detect_script("123 !?"),
            Err(TranslitError::DirectionUndetermined {
                cyrillic: 0,
                latin: 0
            })
        ));
        assert!(detect_script("").is_err());
    }

    #[test]
    fn e_diaeresis_counts_as_latin() {
        assert_eq!(detect_script("yëzh").unwrap(), ScriptKind::Latin);
    }
}
