// CyrLat - core/mapping.rs
//
// Static BGN/PCGN 1947 romanization tables for Russian, both directions,
// plus the character-class helpers shared by the engine and the script
// detector.
//
// The forward table is keyed by lowercase Russian letter; case is
// reconstructed by the engine. The reverse table is ordered longest pattern
// first so the engine's greedy scan always prefers digraphs (ts -> ц, never
// т + с).

/// One Russian letter's romanization.
#[derive(Debug, Clone, Copy)]
pub struct RuMapping {
    /// Rendering in the default position.
    pub default: &'static str,

    /// Rendering at a ye-position: word-initially or after a vowel or
    /// й/ъ/ь. None when the letter is position-independent.
    pub initial: Option<&'static str>,

    /// Override applied in ASCII-only mode, in all positions.
    /// None when the default rendering is already ASCII.
    pub ascii: Option<&'static str>,
}

/// Forward mapping for a lowercase Russian letter.
///
/// Returns None for any character outside the 33-letter Russian alphabet;
/// the engine decides whether that is pass-through or malformed input.
pub fn russian_letter(lower: char) -> Option<RuMapping> {
    let m = |default, initial, ascii| RuMapping {
        default,
        initial,
        ascii,
    };
    Some(match lower {
        'а' => m("a", None, None),
        'б' => m("b", None, None),
        'в' => m("v", None, None),
        'г' => m("g", None, None),
        'д' => m("d", None, None),
        'е' => m("e", Some("ye"), None),
        'ё' => m("ë", Some("yë"), Some("yo")),
        'ж' => m("zh", None, None),
        'з' => m("z", None, None),
        'и' => m("i", None, None),
        'й' => m("y", None, None),
        'к' => m("k", None, None),
        'л' => m("l", None, None),
        'м' => m("m", None, None),
        'н' => m("n", None, None),
        'о' => m("o", None, None),
        'п' => m("p", None, None),
        'р' => m("r", None, None),
        'с' => m("s", None, None),
        'т' => m("t", None, None),
        'у' => m("u", None, None),
        'ф' => m("f", None, None),
        'х' => m("kh", None, None),
        'ц' => m("ts", None, None),
        'ч' => m("ch", None, None),
        'ш' => m("sh", None, None),
        'щ' => m("shch", None, None),
        'ъ' => m("\u{02BA}", None, Some("\"")),
        'ы' => m("y", None, None),
        'ь' => m("\u{02B9}", None, Some("'")),
        'э' => m("e", None, None),
        'ю' => m("yu", None, None),
        'я' => m("ya", None, None),
        _ => return None,
    })
}

/// Reverse patterns, longest first. Matched case-insensitively against the
/// romanized input; `y` is absent because its reading depends on context
/// (see the engine's bare-`y` rule).
pub const LATIN_PATTERNS: &[(&str, char)] = &[
    ("shch", 'щ'),
    ("yë", 'ё'),
    ("ye", 'е'),
    ("yo", 'ё'),
    ("yu", 'ю'),
    ("ya", 'я'),
    ("zh", 'ж'),
    ("kh", 'х'),
    ("ts", 'ц'),
    ("ch", 'ч'),
    ("sh", 'ш'),
    ("a", 'а'),
    ("b", 'б'),
    ("v", 'в'),
    ("g", 'г'),
    ("d", 'д'),
    ("e", 'е'),
    ("ë", 'ё'),
    ("z", 'з'),
    ("i", 'и'),
    ("k", 'к'),
    ("l", 'л'),
    ("m", 'м'),
    ("n", 'н'),
    ("o", 'о'),
    ("p", 'п'),
    ("r", 'р'),
    ("s", 'с'),
    ("t", 'т'),
    ("u", 'у'),
    ("f", 'ф'),
];

/// Characters decoded as the soft sign ь: modifier prime plus the
/// apostrophes an ASCII-mode export or hand-typed text would contain.
pub const SOFT_MARKS: &[char] = &['\u{02B9}', '\'', '\u{2019}'];

/// Characters decoded as the hard sign ъ.
pub const HARD_MARKS: &[char] = &['\u{02BA}', '"', '\u{201D}'];

/// Match the longest reverse pattern at the start of `rest` (already
/// lowercase). Returns the pattern length in chars and the Russian letter.
pub fn match_latin(rest: &[char]) -> Option<(usize, char)> {
    for &(pattern, ru) in LATIN_PATTERNS {
        let len = pattern.chars().count();
        if rest.len() >= len && pattern.chars().zip(rest).all(|(p, &c)| p == c) {
            return Some((len, ru));
        }
    }
    None
}

/// Lowercase a single character (first char of the Unicode lowering; the
/// alphabets involved here all lower 1:1).
pub fn lowercase(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// True for any character in the Cyrillic or Cyrillic Supplement blocks,
/// Russian or otherwise.
pub fn is_cyrillic(ch: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&ch) || ('\u{0500}'..='\u{052F}').contains(&ch)
}

/// True for a lowercase letter of the Russian alphabet.
pub fn is_russian_letter(lower: char) -> bool {
    ('а'..='я').contains(&lower) || lower == 'ё'
}

/// True for a lowercase Russian letter after which е/ё take their
/// y-glide form: vowels plus й, ъ, ь.
pub fn is_ye_trigger(lower: char) -> bool {
    matches!(
        lower,
        'а' | 'е' | 'ё' | 'и' | 'о' | 'у' | 'ы' | 'э' | 'ю' | 'я' | 'й' | 'ъ' | 'ь'
    )
}
