// CyrLat - tests/e2e_translit.rs
//
// End-to-end tests for the transliteration pipeline through the public
// library surface: real engine, real UTF-8 files on disk, real session
// persistence — no mocks, no stubs. This exercises the full path a user
// takes: load a text file, convert it, save the result, relaunch with the
// same options.

use cyrlat::app::session::{self, SessionData, SESSION_VERSION};
use cyrlat::app::state::{AppState, StatusKey};
use cyrlat::core::model::{Direction, FontChoice, Locale};
use cyrlat::core::{transliterate_auto, transliterate_bgn_to_ru, transliterate_ru_to_bgn};
use cyrlat::util::error::TranslitError;

// =============================================================================
// Helpers
// =============================================================================

fn state() -> AppState {
    AppState::new(Locale::En, FontChoice::Proportional, 11.0, false)
}

// =============================================================================
// Engine E2E
// =============================================================================

/// A multi-line Russian pangram converts line-for-line.
#[test]
fn e2e_paragraph_romanizes() {
    let russian = "Съешь же ещё этих мягких французских булок,\nда выпей чаю.";
    let romanized = transliterate_ru_to_bgn(russian, false).unwrap();
    assert_eq!(
        romanized,
        "S\u{02BA}yesh\u{02B9} zhe yeshch\u{00EB} etikh myagkikh frantsuzskikh bulok,\n\
         da vypey chayu."
    );
}

/// Romanization inverts exactly for text without э (whose romanization
/// coincides with е's and is therefore lossy by design).
#[test]
fn e2e_paragraph_round_trip() {
    let russian = "Съешь же ещё мягких французских булок,\nда выпей чаю.";
    let romanized = transliterate_ru_to_bgn(russian, false).unwrap();
    let cyrillic_again = transliterate_bgn_to_ru(&romanized).unwrap();
    assert_eq!(cyrillic_again, russian);
}

/// ASCII-only output contains no characters above U+007F.
#[test]
fn e2e_ascii_mode_is_pure_ascii() {
    let russian = "Подъём! Объявление: щёлкните сюда.";
    let romanized = transliterate_ru_to_bgn(russian, true).unwrap();
    assert!(
        romanized.is_ascii(),
        "expected pure ASCII, got: {romanized}"
    );
}

/// Auto direction converts each script to the other.
#[test]
fn e2e_auto_direction_both_ways() {
    assert_eq!(
        transliterate_auto("Новосибирск", false).unwrap(),
        "Novosibirsk"
    );
    assert_eq!(
        transliterate_auto("Novosibirsk", false).unwrap(),
        "Новосибирск"
    );
}

/// Auto direction refuses input without a dominant script.
#[test]
fn e2e_auto_rejects_ambiguous_input() {
    let result = transliterate_auto("2026-08-06", false);
    assert!(
        matches!(result, Err(TranslitError::DirectionUndetermined { .. })),
        "expected DirectionUndetermined, got {result:?}"
    );
}

/// Well-known place names romanize to their published BGN/PCGN forms.
#[test]
fn e2e_reference_place_names() {
    let cases = [
        ("Москва", "Moskva"),
        ("Санкт-Петербург", "Sankt-Peterburg"),
        ("Екатеринбург", "Yekaterinburg"),
        ("Нижний Новгород", "Nizhniy Novgorod"),
        ("Ярославль", "Yaroslavl\u{02B9}"),
        ("Хабаровск", "Khabarovsk"),
        ("Грозный", "Groznyy"),
    ];
    for (cyrillic, expected) in cases {
        assert_eq!(
            transliterate_ru_to_bgn(cyrillic, false).unwrap(),
            expected,
            "wrong romanization of {cyrillic}"
        );
    }
}

/// The same names decode back to Cyrillic.
#[test]
fn e2e_reference_place_names_reverse() {
    let cases = [
        ("Moskva", "Москва"),
        ("Sankt-Peterburg", "Санкт-Петербург"),
        ("Yekaterinburg", "Екатеринбург"),
        ("Nizhniy Novgorod", "Нижний Новгород"),
        ("Groznyy", "Грозный"),
    ];
    for (romanized, expected) in cases {
        assert_eq!(
            transliterate_bgn_to_ru(romanized).unwrap(),
            expected,
            "wrong decoding of {romanized}"
        );
    }
}

// =============================================================================
// File round trip E2E
// =============================================================================

/// Load a UTF-8 file from disk, convert it, save the result, and read it
/// back — the on-disk output is the romanization of the on-disk input.
#[test]
fn e2e_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.txt");
    let output_path = dir.path().join("output.txt");

    std::fs::write(&input_path, "Доброе утро, Москва!\n").unwrap();

    let content = std::fs::read_to_string(&input_path).unwrap();
    let mut s = state();
    s.input_text = content;
    s.transliterate();
    assert_eq!(s.status, StatusKey::Done);

    std::fs::write(&output_path, &s.output_text).unwrap();

    let saved = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(saved, "Dobroye utro, Moskva!");
}

/// A non-UTF-8 file is rejected by the read path rather than converted.
#[test]
fn e2e_non_utf8_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    // "Müller" in Latin-1: 0xFC is not valid UTF-8.
    std::fs::write(&path, [0x4D, 0xFC, 0x6C, 0x6C, 0x65, 0x72]).unwrap();

    assert!(std::fs::read_to_string(&path).is_err());
}

// =============================================================================
// Session E2E
// =============================================================================

/// Options chosen in one run are restored by the next.
#[test]
fn e2e_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut s = state();
    s.data_dir = Some(dir.path().to_path_buf());
    s.set_direction(Direction::RuToLat);
    s.ascii_only = true;
    s.set_font_choice(FontChoice::Monospace);
    s.set_font_size(16.0);
    s.locale = Locale::De;
    s.save_session();

    let restored = session::load(dir.path()).expect("session should load");
    assert_eq!(restored.version, SESSION_VERSION);
    assert_eq!(restored.direction, Direction::RuToLat);
    assert!(restored.ascii_only);
    assert_eq!(restored.font_choice, FontChoice::Monospace);
    assert_eq!(restored.font_size, 16.0);
    assert_eq!(restored.locale, Locale::De);
}

/// The ASCII flag is never persisted as set for a direction where the
/// toggle is disabled.
#[test]
fn e2e_session_normalises_ascii_flag() {
    let dir = tempfile::tempdir().unwrap();

    let mut s = state();
    s.data_dir = Some(dir.path().to_path_buf());
    s.set_direction(Direction::RuToLat);
    s.ascii_only = true;
    // Direction change forces the flag off; capture must agree.
    s.set_direction(Direction::Auto);

    let data = SessionData::capture(&s);
    assert!(!data.ascii_only);
}
