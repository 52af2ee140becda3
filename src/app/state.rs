// CyrLat - app/state.rs
//
// Application state management. Holds the conversion options, the two text
// panes, the status-bar key, and the dialog/request flags consumed by the
// eframe::App each frame. Owned by the eframe::App implementation.
//
// Status and dialog texts are stored as typed keys, not strings, so the UI
// layer renders them in the active locale and state logic stays
// locale-independent.

use crate::core::model::{Direction, FontChoice, Locale};
use crate::core::{transliterate_auto, transliterate_bgn_to_ru, transliterate_ru_to_bgn};
use crate::util::constants::{DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};
use std::path::PathBuf;

/// Status-bar message key, rendered through the locale table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKey {
    Ready,
    Done,
    Failed,
    Swapped,
    OutputCopied,
    Cleared,
    FileLoaded,
    FileSaved,
    FontUpdated,
}

/// Kind of modal message dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// Body of a modal message dialog. Failure variants carry the rendered
/// error detail; the locale table supplies the leading sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    PromptEmptyInput,
    PromptEmptyOutput,
    TranslitFailed(String),
    FileReadFailed(String),
    FileSaveFailed(String),
}

/// A pending modal dialog. At most one is shown at a time; interaction with
/// the rest of the window resumes once it is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub kind: MessageKind,
    pub body: MessageBody,
}

impl UserMessage {
    pub fn info(body: MessageBody) -> Self {
        Self {
            kind: MessageKind::Info,
            body,
        }
    }

    pub fn error(body: MessageBody) -> Self {
        Self {
            kind: MessageKind::Error,
            body,
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Selected conversion direction.
    pub direction: Direction,

    /// ASCII-only rendering. Only meaningful while `direction` is RuToLat;
    /// `set_direction` forces it off otherwise.
    pub ascii_only: bool,

    /// Input pane contents.
    pub input_text: String,

    /// Output pane contents.
    pub output_text: String,

    /// Status-bar message key.
    pub status: StatusKey,

    /// Active UI locale.
    pub locale: Locale,

    /// Font family applied uniformly to all widgets.
    pub font_choice: FontChoice,

    /// Font size in points, always within [MIN_FONT_SIZE, MAX_FONT_SIZE].
    pub font_size: f32,

    /// Set when font settings changed; the eframe::App re-applies the text
    /// styles on the next frame and clears it.
    pub font_dirty: bool,

    /// Whether the Options dialog is open.
    pub show_options: bool,

    /// Whether the About dialog is open.
    pub show_about: bool,

    /// Pending modal message dialog, if any.
    pub message: Option<UserMessage>,

    /// A panel requested the load-input file dialog.
    pub request_load_input: bool,

    /// A panel requested the save-output file dialog.
    pub request_save_output: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,

    /// Platform data directory for session persistence (None in tests).
    pub data_dir: Option<PathBuf>,
}

impl AppState {
    /// Create initial state from the restored or configured options.
    pub fn new(locale: Locale, font_choice: FontChoice, font_size: f32, debug_mode: bool) -> Self {
        Self {
            direction: Direction::Auto,
            ascii_only: false,
            input_text: String::new(),
            output_text: String::new(),
            status: StatusKey::Ready,
            locale,
            font_choice,
            font_size: sanitize_font_size(font_size),
            font_dirty: true,
            show_options: false,
            show_about: false,
            message: None,
            request_load_input: false,
            request_save_output: false,
            debug_mode,
            data_dir: None,
        }
    }

    /// Change direction, keeping the ASCII flag consistent: it is only
    /// meaningful for RuToLat and is forced off for every other direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        if direction != Direction::RuToLat {
            self.ascii_only = false;
        }
    }

    /// Whether the ASCII checkbox is interactive.
    pub fn ascii_toggle_enabled(&self) -> bool {
        self.direction == Direction::RuToLat
    }

    /// Run the conversion for the current options and input pane.
    pub fn transliterate(&mut self) {
        let source = self.input_text.trim_end_matches('\n');
        if source.is_empty() {
            self.message = Some(UserMessage::info(MessageBody::PromptEmptyInput));
            return;
        }

        let result = match self.direction {
            Direction::RuToLat => transliterate_ru_to_bgn(source, self.ascii_only),
            Direction::LatToRu => transliterate_bgn_to_ru(source),
            Direction::Auto => transliterate_auto(source, self.ascii_only),
        };

        match result {
            Ok(converted) => {
                tracing::debug!(
                    direction = ?self.direction,
                    ascii = self.ascii_only,
                    chars_in = source.chars().count(),
                    chars_out = converted.chars().count(),
                    "Conversion succeeded"
                );
                self.output_text = converted;
                self.status = StatusKey::Done;
            }
            Err(e) => {
                tracing::warn!(direction = ?self.direction, error = %e, "Conversion failed");
                self.message = Some(UserMessage::error(MessageBody::TranslitFailed(
                    e.to_string(),
                )));
                self.status = StatusKey::Failed;
            }
        }
    }

    /// Exchange the two panes exactly.
    pub fn swap_texts(&mut self) {
        std::mem::swap(&mut self.input_text, &mut self.output_text);
        self.status = StatusKey::Swapped;
    }

    /// Copy the output pane into the input pane.
    pub fn copy_output_to_input(&mut self) {
        self.input_text = self.output_text.clone();
        self.status = StatusKey::OutputCopied;
    }

    /// Empty both panes.
    pub fn clear_texts(&mut self) {
        self.input_text.clear();
        self.output_text.clear();
        self.status = StatusKey::Cleared;
    }

    /// Set a new font size, sanitized into range, and mark fonts for
    /// re-application.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = sanitize_font_size(size);
        self.font_dirty = true;
        self.status = StatusKey::FontUpdated;
    }

    /// Set a new font family and mark fonts for re-application.
    pub fn set_font_choice(&mut self, choice: FontChoice) {
        self.font_choice = choice;
        self.font_dirty = true;
        self.status = StatusKey::FontUpdated;
    }

    /// Persist the current session, logging rather than surfacing failures.
    pub fn save_session(&self) {
        let Some(ref dir) = self.data_dir else {
            return;
        };
        let data = crate::app::session::SessionData::capture(self);
        if let Err(e) = crate::app::session::save(dir, &data) {
            tracing::warn!(error = %e, "Failed to save session");
        }
    }
}

/// Clamp a font size into the allowed range; anything non-finite falls back
/// to the default.
pub fn sanitize_font_size(size: f32) -> f32 {
    if size.is_finite() {
        size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    } else {
        DEFAULT_FONT_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Locale::En, FontChoice::Proportional, DEFAULT_FONT_SIZE, false)
    }

    #[test]
    fn font_size_is_always_clamped() {
        assert_eq!(sanitize_font_size(11.0), 11.0);
        assert_eq!(sanitize_font_size(1.0), MIN_FONT_SIZE);
        assert_eq!(sanitize_font_size(640.0), MAX_FONT_SIZE);
        assert_eq!(sanitize_font_size(f32::NAN), DEFAULT_FONT_SIZE);
        assert_eq!(sanitize_font_size(f32::INFINITY), DEFAULT_FONT_SIZE);
    }

    #[test]
    fn ascii_flag_forced_off_when_leaving_ru2lat() {
        let mut s = state();
        s.set_direction(Direction::RuToLat);
        s.ascii_only = true;
        assert!(s.ascii_toggle_enabled());

        s.set_direction(Direction::Auto);
        assert!(!s.ascii_only);
        assert!(!s.ascii_toggle_enabled());

        s.set_direction(Direction::LatToRu);
        assert!(!s.ascii_only);
        assert!(!s.ascii_toggle_enabled());
    }

    #[test]
    fn swap_exchanges_panes_exactly() {
        let mut s = state();
        s.input_text = "Москва".to_string();
        s.output_text = "Moskva".to_string();
        s.swap_texts();
        assert_eq!(s.input_text, "Moskva");
        assert_eq!(s.output_text, "Москва");
        assert_eq!(s.status, StatusKey::Swapped);
    }

    #[test]
    fn clear_empties_both_panes() {
        let mut s = state();
        s.input_text = "a".to_string();
        s.output_text = "b".to_string();
        s.clear_texts();
        assert!(s.input_text.is_empty());
        assert!(s.output_text.is_empty());
        assert_eq!(s.status, StatusKey::Cleared);
    }

    #[test]
    fn transliterate_empty_input_prompts_without_status_change() {
        let mut s = state();
        s.input_text = "\n\n".to_string();
        s.transliterate();
        assert_eq!(
            s.message,
            Some(UserMessage::info(MessageBody::PromptEmptyInput))
        );
        assert_eq!(s.status, StatusKey::Ready);
        assert!(s.output_text.is_empty());
    }

    #[test]
    fn transliterate_writes_output_and_status() {
        let mut s = state();
        s.input_text = "Москва".to_string();
        s.transliterate();
        assert_eq!(s.output_text, "Moskva");
        assert_eq!(s.status, StatusKey::Done);
        assert!(s.message.is_none());
    }

    #[test]
    fn transliterate_failure_raises_error_dialog() {
        let mut s = state();
        s.input_text = "12345".to_string(); // Auto cannot pick a direction
        s.transliterate();
        assert_eq!(s.status, StatusKey::Failed);
        match s.message {
            Some(UserMessage {
                kind: MessageKind::Error,
                body: MessageBody::TranslitFailed(_),
            }) => {}
            ref other => panic!("expected TranslitFailed error dialog, got {other:?}"),
        }
    }

    #[test]
    fn explicit_direction_honours_ascii_flag() {
        let mut s = state();
        s.set_direction(Direction::RuToLat);
        s.ascii_only = true;
        s.input_text = "ёлка".to_string();
        s.transliterate();
        assert_eq!(s.output_text, "yolka");
    }

    #[test]
    fn copy_output_to_input_copies() {
        let mut s = state();
        s.output_text = "Москва".to_string();
        s.copy_output_to_input();
        assert_eq!(s.input_text, "Москва");
        assert_eq!(s.output_text, "Москва");
        assert_eq!(s.status, StatusKey::OutputCopied);
    }
}
