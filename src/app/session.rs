// CyrLat - app/session.rs
//
// Session persistence: save and restore the conversion options, font
// settings, and locale between application restarts.
//
// Design principles:
// - Session is saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good session.
// - Load errors are silently discarded (corrupt or incompatible sessions
//   just start the app fresh rather than surfacing errors to the user).
// - The data directory is created on first save; no user action required.
// - Pane text is NOT persisted; the panes start empty each launch.

use crate::app::state::AppState;
use crate::core::model::{Direction, FontChoice, Locale};
use crate::util::constants::{DEFAULT_FONT_SIZE, SESSION_FILE_NAME};
use crate::util::error::SessionError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Version stamp for forward-compatibility checks.
///
/// Increment this constant whenever `SessionData` gains or removes fields
/// in a breaking way. Version mismatches silently discard the session.
pub const SESSION_VERSION: u32 = 1;

/// Complete persistent session snapshot.
///
/// All fields carry serde defaults so minor format additions are tolerated
/// without bumping the version.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version — must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// Last selected conversion direction.
    #[serde(default)]
    pub direction: Direction,

    /// Last ASCII-only flag. Only honoured when `direction` is RuToLat.
    #[serde(default)]
    pub ascii_only: bool,

    /// Last font family.
    #[serde(default)]
    pub font_choice: FontChoice,

    /// Last font size in points. Sanitized again on restore.
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Last UI locale.
    #[serde(default)]
    pub locale: Locale,
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

impl SessionData {
    /// Snapshot the persistable subset of the application state.
    pub fn capture(state: &AppState) -> Self {
        Self {
            version: SESSION_VERSION,
            direction: state.direction,
            ascii_only: state.ascii_only && state.direction == Direction::RuToLat,
            font_choice: state.font_choice,
            font_size: state.font_size,
            locale: state.locale,
        }
    }
}

/// Load the previous session from the data directory.
///
/// Returns None when no session exists or when it cannot be used (I/O
/// failure, parse failure, version mismatch); each case is logged.
pub fn load(data_dir: &Path) -> Option<SessionData> {
    let path = data_dir.join(SESSION_FILE_NAME);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No previous session");
        return None;
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Cannot read session file");
            return None;
        }
    };

    let data: SessionData = match serde_json::from_str(&content) {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Cannot parse session file");
            return None;
        }
    };

    if data.version != SESSION_VERSION {
        tracing::info!(
            found = data.version,
            expected = SESSION_VERSION,
            "Discarding session with incompatible version"
        );
        return None;
    }

    tracing::debug!(path = %path.display(), "Session restored");
    Some(data)
}

/// Save the session atomically into the data directory.
pub fn save(data_dir: &Path, data: &SessionData) -> Result<(), SessionError> {
    std::fs::create_dir_all(data_dir).map_err(|e| SessionError::Io {
        path: data_dir.to_path_buf(),
        source: e,
    })?;

    let path = data_dir.join(SESSION_FILE_NAME);
    let tmp = path.with_extension("json.tmp");

    let json = serde_json::to_string_pretty(data).map_err(|e| SessionError::Json {
        path: path.clone(),
        source: e,
    })?;

    std::fs::write(&tmp, json).map_err(|e| SessionError::Io {
        path: tmp.clone(),
        source: e,
    })?;

    std::fs::rename(&tmp, &path).map_err(|e| SessionError::Io {
        path: path.clone(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SessionData {
        SessionData {
            version: SESSION_VERSION,
            direction: Direction::RuToLat,
            ascii_only: true,
            font_choice: FontChoice::Monospace,
            font_size: 14.0,
            locale: Locale::De,
        }
    }

    #[test]
    fn session_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        save(dir.path(), &sample()).unwrap();

        let restored = load(dir.path()).expect("session should load");
        assert_eq!(restored.direction, Direction::RuToLat);
        assert!(restored.ascii_only);
        assert_eq!(restored.font_choice, FontChoice::Monospace);
        assert_eq!(restored.font_size, 14.0);
        assert_eq!(restored.locale, Locale::De);
    }

    #[test]
    fn missing_session_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path()).is_none());
    }

    #[test]
    fn corrupt_session_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE_NAME), "{not json").unwrap();
        assert!(load(dir.path()).is_none());
    }

    #[test]
    fn version_mismatch_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let mut data = sample();
        data.version = SESSION_VERSION + 1;
        save(dir.path(), &data).unwrap();
        assert!(load(dir.path()).is_none());
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        save(dir.path(), &sample()).unwrap();
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|x| x == "tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp file not cleaned up: {leftovers:?}");
    }
}
