// CyrLat - ui/i18n.rs
//
// Locale string tables. One binary serves both languages the original
// shipped as separate builds; every label, menu entry, status message, and
// dialog text lives here and nowhere else.

use crate::app::state::{MessageBody, StatusKey};
use crate::core::model::Locale;

/// All user-visible strings for one locale.
#[derive(Debug)]
pub struct Strings {
    // Window and headings
    pub heading: &'static str,

    // Menus
    pub menu_file: &'static str,
    pub menu_edit: &'static str,
    pub menu_help: &'static str,
    pub menu_load_input: &'static str,
    pub menu_save_output: &'static str,
    pub menu_exit: &'static str,
    pub menu_options: &'static str,
    pub menu_about: &'static str,

    // Controls
    pub options_group: &'static str,
    pub direction_label: &'static str,
    pub dir_auto: &'static str,
    pub dir_ru2lat: &'static str,
    pub dir_lat2ru: &'static str,
    pub ascii_checkbox: &'static str,
    pub btn_transliterate: &'static str,
    pub btn_swap: &'static str,

    // Editor panes
    pub input_label: &'static str,
    pub output_label: &'static str,
    pub btn_load_file: &'static str,
    pub btn_save_file: &'static str,
    pub btn_output_to_input: &'static str,
    pub btn_clear: &'static str,

    // Options dialog
    pub appearance_heading: &'static str,
    pub language_label: &'static str,
    pub font_label: &'static str,
    pub size_label: &'static str,
    pub font_hint: &'static str,
    pub btn_reset: &'static str,
    pub btn_close: &'static str,

    // Dialogs
    pub info_title: &'static str,
    pub error_title: &'static str,
    pub btn_ok: &'static str,
    pub msg_empty_input: &'static str,
    pub msg_empty_output: &'static str,
    pub msg_translit_failed: &'static str,
    pub msg_read_failed: &'static str,
    pub msg_save_failed: &'static str,

    // File dialogs
    pub dlg_load_title: &'static str,
    pub dlg_save_title: &'static str,
    pub file_filter_text: &'static str,
    pub file_filter_all: &'static str,

    // Status bar
    pub credit: &'static str,
    pub status_ready: &'static str,
    pub status_done: &'static str,
    pub status_failed: &'static str,
    pub status_swapped: &'static str,
    pub status_output_copied: &'static str,
    pub status_cleared: &'static str,
    pub status_file_loaded: &'static str,
    pub status_file_saved: &'static str,
    pub status_font_updated: &'static str,

    // About dialog
    pub about_tagline_1: &'static str,
    pub about_tagline_2: &'static str,
}

static EN: Strings = Strings {
    heading: "Russian <-> NATO (BGN/PCGN) Transliterator",

    menu_file: "File",
    menu_edit: "Edit",
    menu_help: "Help",
    menu_load_input: "Load input file\u{2026}",
    menu_save_output: "Save output file\u{2026}",
    menu_exit: "Exit",
    menu_options: "Options\u{2026}",
    menu_about: "About CyrLat",

    options_group: "Options",
    direction_label: "Direction:",
    dir_auto: "Auto",
    dir_ru2lat: "RU -> LAT",
    dir_lat2ru: "LAT -> RU",
    ascii_checkbox: "ASCII mode (yo instead of \u{00EB})",
    btn_transliterate: "Transliterate",
    btn_swap: "Swap",

    input_label: "Input",
    output_label: "Output",
    btn_load_file: "Load file",
    btn_save_file: "Save file",
    btn_output_to_input: "Output -> Input",
    btn_clear: "Clear",

    appearance_heading: "Appearance",
    language_label: "Language:",
    font_label: "Font:",
    size_label: "Size:",
    font_hint: "Scales all text in the application. Takes effect immediately.",
    btn_reset: "Reset",
    btn_close: "Close",

    info_title: "Info",
    error_title: "Error",
    btn_ok: "OK",
    msg_empty_input: "Please enter input text first.",
    msg_empty_output: "Output is empty.",
    msg_translit_failed: "Transliteration failed:",
    msg_read_failed: "Could not read file:",
    msg_save_failed: "Could not save file:",

    dlg_load_title: "Load input file",
    dlg_save_title: "Save output file",
    file_filter_text: "Text files",
    file_filter_all: "All files",

    credit: "(c) Developed by blyatberry",
    status_ready: "Ready",
    status_done: "Done",
    status_failed: "Failed",
    status_swapped: "Texts swapped",
    status_output_copied: "Output copied",
    status_cleared: "Cleared",
    status_file_loaded: "File loaded",
    status_file_saved: "File saved",
    status_font_updated: "Font updated",

    about_tagline_1: "A desktop Russian <-> NATO (BGN/PCGN) transliterator",
    about_tagline_2: "with auto direction detection and an ASCII-only mode.",
};

static DE: Strings = Strings {
    heading: "Russisch <-> NATO (BGN/PCGN) Transliterator",

    menu_file: "Datei",
    menu_edit: "Bearbeiten",
    menu_help: "Hilfe",
    menu_load_input: "Eingabedatei laden\u{2026}",
    menu_save_output: "Ausgabedatei speichern\u{2026}",
    menu_exit: "Beenden",
    menu_options: "Optionen\u{2026}",
    menu_about: "\u{00DC}ber CyrLat",

    options_group: "Optionen",
    direction_label: "Richtung:",
    dir_auto: "Auto",
    dir_ru2lat: "RU -> LAT",
    dir_lat2ru: "LAT -> RU",
    ascii_checkbox: "ASCII-Mode (yo statt \u{00EB})",
    btn_transliterate: "Transliterieren",
    btn_swap: "Tauschen",

    input_label: "Eingabetext",
    output_label: "Ausgabe",
    btn_load_file: "Datei laden",
    btn_save_file: "Datei speichern",
    btn_output_to_input: "Ausgabe -> Eingabe",
    btn_clear: "Leeren",

    appearance_heading: "Darstellung",
    language_label: "Sprache:",
    font_label: "Schriftart:",
    size_label: "Gr\u{00F6}\u{00DF}e:",
    font_hint: "Skaliert den gesamten Text der Anwendung. Wirkt sofort.",
    btn_reset: "Zur\u{00FC}cksetzen",
    btn_close: "Schlie\u{00DF}en",

    info_title: "Hinweis",
    error_title: "Fehler",
    btn_ok: "OK",
    msg_empty_input: "Bitte zuerst Eingabetext einf\u{00FC}gen.",
    msg_empty_output: "Die Ausgabe ist leer.",
    msg_translit_failed: "Transliteration fehlgeschlagen:",
    msg_read_failed: "Datei konnte nicht gelesen werden:",
    msg_save_failed: "Datei konnte nicht gespeichert werden:",

    dlg_load_title: "Eingabedatei laden",
    dlg_save_title: "Ausgabedatei speichern",
    file_filter_text: "Textdateien",
    file_filter_all: "Alle Dateien",

    credit: "(c) Entwickelt von blyatberry",
    status_ready: "Bereit",
    status_done: "Fertig",
    status_failed: "Fehler",
    status_swapped: "Texte getauscht",
    status_output_copied: "Ausgabe \u{00FC}bernommen",
    status_cleared: "Geleert",
    status_file_loaded: "Datei geladen",
    status_file_saved: "Datei gespeichert",
    status_font_updated: "Schrift aktualisiert",

    about_tagline_1: "Ein Desktop-Transliterator Russisch <-> NATO (BGN/PCGN)",
    about_tagline_2: "mit automatischer Richtungserkennung und ASCII-Modus.",
};

/// The string table for a locale.
pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::En => &EN,
        Locale::De => &DE,
    }
}

impl Strings {
    /// Status-bar text for a status key.
    pub fn status(&self, key: StatusKey) -> &'static str {
        match key {
            StatusKey::Ready => self.status_ready,
            StatusKey::Done => self.status_done,
            StatusKey::Failed => self.status_failed,
            StatusKey::Swapped => self.status_swapped,
            StatusKey::OutputCopied => self.status_output_copied,
            StatusKey::Cleared => self.status_cleared,
            StatusKey::FileLoaded => self.status_file_loaded,
            StatusKey::FileSaved => self.status_file_saved,
            StatusKey::FontUpdated => self.status_font_updated,
        }
    }

    /// Full dialog text for a message body: leading sentence plus the
    /// error detail where one exists.
    pub fn message_text(&self, body: &MessageBody) -> String {
        match body {
            MessageBody::PromptEmptyInput => self.msg_empty_input.to_string(),
            MessageBody::PromptEmptyOutput => self.msg_empty_output.to_string(),
            MessageBody::TranslitFailed(detail) => {
                format!("{}\n{detail}", self.msg_translit_failed)
            }
            MessageBody::FileReadFailed(detail) => {
                format!("{}\n{detail}", self.msg_read_failed)
            }
            MessageBody::FileSaveFailed(detail) => {
                format!("{}\n{detail}", self.msg_save_failed)
            }
        }
    }

    /// Dialog title for a message kind.
    pub fn message_title(&self, kind: crate::app::state::MessageKind) -> &'static str {
        match kind {
            crate::app::state::MessageKind::Info => self.info_title,
            crate::app::state::MessageKind::Error => self.error_title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::MessageKind;

    #[test]
    fn both_locales_resolve_every_status_key() {
        let keys = [
            StatusKey::Ready,
            StatusKey::Done,
            StatusKey::Failed,
            StatusKey::Swapped,
            StatusKey::OutputCopied,
            StatusKey::Cleared,
            StatusKey::FileLoaded,
            StatusKey::FileSaved,
            StatusKey::FontUpdated,
        ];
        for locale in [Locale::En, Locale::De] {
            let tr = strings(locale);
            for key in keys {
                assert!(!tr.status(key).is_empty(), "{locale:?}/{key:?} is empty");
            }
        }
    }

    #[test]
    fn failure_messages_carry_the_detail() {
        let tr = strings(Locale::En);
        let text = tr.message_text(&MessageBody::TranslitFailed("boom".to_string()));
        assert!(text.starts_with("Transliteration failed:"));
        assert!(text.ends_with("boom"));
    }

    #[test]
    fn titles_differ_by_kind() {
        let tr = strings(Locale::De);
        assert_eq!(tr.message_title(MessageKind::Info), "Hinweis");
        assert_eq!(tr.message_title(MessageKind::Error), "Fehler");
    }
}
