// CyrLat - core/engine.rs
//
// The three public transliteration operations. Pure text-to-text; all
// failure modes are typed (util::error::TranslitError) and carry the
// character position so the UI can point at the offending input.

use crate::core::detect::detect_script;
use crate::core::mapping::{
    self, is_cyrillic, is_russian_letter, is_ye_trigger, lowercase, match_latin,
};
use crate::core::model::ScriptKind;
use crate::util::error::TranslitError;

/// Romanize Russian Cyrillic text per BGN/PCGN 1947.
///
/// `ascii_only` replaces ё's diaeresis rendering with `yo` and the prime
/// sign characters with ASCII quotes. Non-Cyrillic characters pass through
/// unchanged; Cyrillic letters outside the Russian alphabet are rejected.
pub fn transliterate_ru_to_bgn(text: &str, ascii_only: bool) -> Result<String, TranslitError> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 2);

    for (i, &ch) in chars.iter().enumerate() {
        let lower = lowercase(ch);
        let Some(map) = mapping::russian_letter(lower) else {
            if is_cyrillic(ch) {
                return Err(TranslitError::UnsupportedChar { ch, index: i });
            }
            out.push(ch);
            continue;
        };

        let rendered = if ascii_only && map.ascii.is_some() {
            map.ascii.unwrap_or(map.default)
        } else if map.initial.is_some() && at_ye_position(&chars, i) {
            map.initial.unwrap_or(map.default)
        } else {
            map.default
        };

        if ch.is_uppercase() {
            push_cased(&mut out, rendered, neighbour_is_uppercase(&chars, i));
        } else {
            out.push_str(rendered);
        }
    }

    Ok(out)
}

/// Decode BGN/PCGN romanized text back to Russian Cyrillic.
///
/// Greedy longest-match over the reverse pattern table; bare `y` reads as
/// й after a vowel and ы otherwise. Latin letters that never occur in
/// BGN/PCGN output are rejected; non-letters pass through unchanged.
pub fn transliterate_bgn_to_ru(text: &str) -> Result<String, TranslitError> {
    let chars: Vec<char> = text.chars().collect();
    let lowered: Vec<char> = chars.iter().map(|&c| lowercase(c)).collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let low = lowered[i];

        if mapping::SOFT_MARKS.contains(&low) {
            out.push('ь');
            i += 1;
            continue;
        }
        if mapping::HARD_MARKS.contains(&low) {
            out.push('ъ');
            i += 1;
            continue;
        }
        if !ch.is_alphabetic() {
            out.push(ch);
            i += 1;
            continue;
        }

        if let Some((len, ru)) = match_latin(&lowered[i..]) {
            out.push(cased(ru, ch.is_uppercase()));
            i += len;
            continue;
        }

        // Bare y: й continues a vowel, ы follows a consonant or starts a word.
        if low == 'y' {
            let ru = if ends_with_russian_vowel(&out) { 'й' } else { 'ы' };
            out.push(cased(ru, ch.is_uppercase()));
            i += 1;
            continue;
        }

        return Err(TranslitError::UnsupportedSequence {
            fragment: ch.to_string(),
            index: i,
        });
    }

    Ok(out)
}

/// Detect the input script and convert in the corresponding direction.
///
/// `ascii_only` applies only when the Cyrillic-to-Latin direction is chosen.
pub fn transliterate_auto(text: &str, ascii_only: bool) -> Result<String, TranslitError> {
    match detect_script(text)? {
        ScriptKind::Cyrillic => transliterate_ru_to_bgn(text, ascii_only),
        ScriptKind::Latin => transliterate_bgn_to_ru(text),
    }
}

/// True when the letter at `i` is word-initial or follows a vowel or й/ъ/ь.
fn at_ye_position(chars: &[char], i: usize) -> bool {
    match i.checked_sub(1).and_then(|j| chars.get(j)) {
        None => true,
        Some(&prev) => {
            let prev = lowercase(prev);
            !is_russian_letter(prev) || is_ye_trigger(prev)
        }
    }
}

/// True when an adjacent character is an uppercase letter. Decides whether
/// a multi-character rendering is fully uppercased (ЩИ -> SHCHI) or
/// title-cased (Щи -> Shchi).
fn neighbour_is_uppercase(chars: &[char], i: usize) -> bool {
    let upper = |ch: &char| ch.is_alphabetic() && ch.is_uppercase();
    i.checked_sub(1)
        .and_then(|j| chars.get(j))
        .is_some_and(upper)
        || chars.get(i + 1).is_some_and(upper)
}

/// Append `rendered` with the casing derived from an uppercase source letter.
fn push_cased(out: &mut String, rendered: &str, all_caps: bool) {
    if all_caps {
        out.push_str(&rendered.to_uppercase());
    } else {
        let mut it = rendered.chars();
        if let Some(first) = it.next() {
            out.extend(first.to_uppercase());
        }
        out.push_str(it.as_str());
    }
}

/// Uppercase a single Russian letter when the source window was uppercase.
fn cased(ru: char, upper: bool) -> char {
    if upper {
        ru.to_uppercase().next().unwrap_or(ru)
    } else {
        ru
    }
}

/// True when the last emitted character is a Russian vowel.
fn ends_with_russian_vowel(out: &str) -> bool {
    out.chars().next_back().is_some_and(|ch| {
        matches!(
            lowercase(ch),
            'а' | 'е' | 'ё' | 'и' | 'о' | 'у' | 'ы' | 'э' | 'ю' | 'я'
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- RU -> LAT ----

    #[test]
    fn simple_word_romanizes() {
        assert_eq!(transliterate_ru_to_bgn("Москва", false).unwrap(), "Moskva");
    }

    #[test]
    fn ye_at_word_start_and_after_vowel() {
        assert_eq!(
            transliterate_ru_to_bgn("Екатеринбург", false).unwrap(),
            "Yekaterinburg"
        );
        // е after а (vowel) takes the glide; after т it does not.
        assert_eq!(transliterate_ru_to_bgn("заем", false).unwrap(), "zayem");
        assert_eq!(transliterate_ru_to_bgn("тем", false).unwrap(), "tem");
    }

    #[test]
    fn ye_after_hard_and_soft_signs() {
        assert_eq!(
            transliterate_ru_to_bgn("объект", false).unwrap(),
            "ob\u{02BA}yekt"
        );
        assert_eq!(
            transliterate_ru_to_bgn("пьеса", false).unwrap(),
            "p\u{02B9}yesa"
        );
    }

    #[test]
    fn yo_with_and_without_diaeresis() {
        assert_eq!(transliterate_ru_to_bgn("ёж", false).unwrap(), "yëzh");
        assert_eq!(transliterate_ru_to_bgn("тёплый", false).unwrap(), "tëplyy");
        assert_eq!(transliterate_ru_to_bgn("ёж", true).unwrap(), "yozh");
        assert_eq!(transliterate_ru_to_bgn("тёплый", true).unwrap(), "tyoplyy");
    }

    #[test]
    fn ascii_mode_degrades_signs() {
        assert_eq!(
            transliterate_ru_to_bgn("съезд", true).unwrap(),
            "s\"yezd"
        );
        assert_eq!(
            transliterate_ru_to_bgn("Севастополь", true).unwrap(),
            "Sevastopol'"
        );
    }

    #[test]
    fn multichar_case_follows_neighbours() {
        assert_eq!(transliterate_ru_to_bgn("Щи", false).unwrap(), "Shchi");
        assert_eq!(transliterate_ru_to_bgn("ЩИ", false).unwrap(), "SHCHI");
        assert_eq!(transliterate_ru_to_bgn("Щ", false).unwrap(), "Shch");
        assert_eq!(transliterate_ru_to_bgn("БОРЩ", false).unwrap(), "BORSHCH");
    }

    #[test]
    fn passthrough_of_non_cyrillic() {
        assert_eq!(
            transliterate_ru_to_bgn("цена: 10 руб.", false).unwrap(),
            "tsena: 10 rub."
        );
    }

    #[test]
    fn non_russian_cyrillic_is_rejected() {
        let err = transliterate_ru_to_bgn("Київ", false).unwrap_err();
        assert_eq!(err, TranslitError::UnsupportedChar { ch: 'ї', index: 2 });
    }

    // ---- LAT -> RU ----

    #[test]
    fn simple_word_decodes() {
        assert_eq!(transliterate_bgn_to_ru("Moskva").unwrap(), "Москва");
    }

    #[test]
    fn digraphs_win_over_letter_pairs() {
        assert_eq!(transliterate_bgn_to_ru("Shchi").unwrap(), "Щи");
        assert_eq!(transliterate_bgn_to_ru("zhizn'").unwrap(), "жизнь");
        assert_eq!(transliterate_bgn_to_ru("Khabarovsk").unwrap(), "Хабаровск");
    }

    #[test]
    fn ye_and_yo_decode() {
        assert_eq!(
            transliterate_bgn_to_ru("Yekaterinburg").unwrap(),
            "Екатеринбург"
        );
        assert_eq!(transliterate_bgn_to_ru("yozh").unwrap(), "ёж");
        assert_eq!(transliterate_bgn_to_ru("yëzh").unwrap(), "ёж");
        assert_eq!(transliterate_bgn_to_ru("tëplyy").unwrap(), "тёплый");
    }

    #[test]
    fn bare_y_reads_from_context() {
        // After a vowel: й. After a consonant: ы.
        assert_eq!(transliterate_bgn_to_ru("Tolstoy").unwrap(), "Толстой");
        assert_eq!(transliterate_bgn_to_ru("byt").unwrap(), "быт");
        assert_eq!(transliterate_bgn_to_ru("Krasnyy").unwrap(), "Красный");
    }

    #[test]
    fn sign_marks_decode() {
        assert_eq!(transliterate_bgn_to_ru("ob\u{02BA}yekt").unwrap(), "объект");
        assert_eq!(transliterate_bgn_to_ru("s\"yezd").unwrap(), "съезд");
        assert_eq!(transliterate_bgn_to_ru("Sevastopol'").unwrap(), "Севастополь");
        assert_eq!(
            transliterate_bgn_to_ru("Sevastopol\u{2019}").unwrap(),
            "Севастополь"
        );
    }

    #[test]
    fn uppercase_digraph_window_decodes_uppercase() {
        assert_eq!(transliterate_bgn_to_ru("SHCHI").unwrap(), "ЩИ");
        assert_eq!(transliterate_bgn_to_ru("BORSHCH").unwrap(), "БОРЩ");
    }

    #[test]
    fn letters_outside_bgn_output_are_rejected() {
        let err = transliterate_bgn_to_ru("quiz").unwrap_err();
        assert_eq!(
            err,
            TranslitError::UnsupportedSequence {
                fragment: "q".to_string(),
                index: 0
            }
        );
        // Bare h only occurs inside digraphs.
        assert!(transliterate_bgn_to_ru("aha").is_err());
    }

    #[test]
    fn punctuation_passes_through() {
        assert_eq!(
            transliterate_bgn_to_ru("da, net; 42!").unwrap(),
            "да, нет; 42!"
        );
    }

    // ---- Auto ----

    #[test]
    fn auto_detects_each_direction() {
        assert_eq!(transliterate_auto("Москва", false).unwrap(), "Moskva");
        assert_eq!(transliterate_auto("Moskva", false).unwrap(), "Москва");
    }

    #[test]
    fn auto_honours_ascii_flag_for_cyrillic_input() {
        assert_eq!(transliterate_auto("ёлка", true).unwrap(), "yolka");
        assert_eq!(transliterate_auto("ёлка", false).unwrap(), "yëlka");
    }

    #[test]
    fn auto_rejects_undetectable_input() {
        assert!(matches!(
            transliterate_auto("12345", false),
            Err(TranslitError::DirectionUndetermined {
                cyrillic: 0,
                latin: 0
            })
        ));
    }
}
