// CyrLat - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CyrLat";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CyrLat";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Window geometry
// =============================================================================

/// Initial window size in logical points.
pub const WINDOW_DEFAULT_SIZE: [f32; 2] = [1000.0, 700.0];

/// Minimum window size in logical points.
pub const WINDOW_MIN_SIZE: [f32; 2] = [780.0, 560.0];

// =============================================================================
// Font settings
// =============================================================================

/// Default UI font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 11.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 32.0;

/// The text panes render one point larger than the controls so pasted
/// paragraphs stay readable at small control sizes.
pub const TEXT_PANE_SIZE_OFFSET: f32 = 1.0;

// =============================================================================
// File I/O limits
// =============================================================================

/// Maximum size of a text file accepted by "Load file".
///
/// The whole file is held in the input pane as a single String; bounding the
/// read keeps a mis-click on a multi-gigabyte file from freezing the UI.
pub const MAX_INPUT_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10 MiB

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";
