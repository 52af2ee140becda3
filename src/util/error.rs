// CyrLat - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant carries the data
// needed to render a useful user-facing dialog.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all CyrLat operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CyrLatError {
    /// Transliteration of the input text failed.
    Translit(TranslitError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Session persistence failed.
    Session(SessionError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for CyrLatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translit(e) => write!(f, "Transliteration error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Session(e) => write!(f, "Session error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CyrLatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Translit(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Session(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Transliteration errors
// ---------------------------------------------------------------------------

/// Errors reported by the transliteration engine on malformed input.
///
/// Indices are character offsets into the input text (not byte offsets) so
/// they line up with what the user sees in the input pane.
#[derive(Debug, PartialEq, Eq)]
pub enum TranslitError {
    /// A Cyrillic letter outside the Russian alphabet (RU -> LAT direction).
    UnsupportedChar { ch: char, index: usize },

    /// A Latin letter sequence that never occurs in BGN/PCGN romanized
    /// output (LAT -> RU direction), e.g. 'q' or a bare 'h'.
    UnsupportedSequence { fragment: String, index: usize },

    /// Auto direction could not be decided: the input contains as many
    /// Cyrillic letters as Latin ones (both counts may be zero).
    DirectionUndetermined { cyrillic: usize, latin: usize },
}

impl fmt::Display for TranslitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedChar { ch, index } => write!(
                f,
                "character '{ch}' at position {index} is not a Russian Cyrillic letter"
            ),
            Self::UnsupportedSequence { fragment, index } => write!(
                f,
                "'{fragment}' at position {index} does not occur in BGN/PCGN romanization"
            ),
            Self::DirectionUndetermined { cyrillic, latin } => write!(
                f,
                "cannot determine conversion direction \
                 ({cyrillic} Cyrillic vs {latin} Latin letters)"
            ),
        }
    }
}

impl std::error::Error for TranslitError {}

impl From<TranslitError> for CyrLatError {
    fn from(e: TranslitError) -> Self {
        Self::Translit(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for CyrLatError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Session errors
// ---------------------------------------------------------------------------

/// Errors related to session persistence.
///
/// Load-side failures are logged and discarded by the caller (a corrupt
/// session just starts the app fresh); save-side failures surface in the
/// status bar.
#[derive(Debug)]
pub enum SessionError {
    /// JSON serialisation or deserialisation failed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// I/O error reading or writing the session file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { path, source } => {
                write!(f, "Session JSON error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Session I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<SessionError> for CyrLatError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

/// Convenience type alias for CyrLat results.
pub type Result<T> = std::result::Result<T, CyrLatError>;
