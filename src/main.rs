// CyrLat - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config and previous-session restore
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use cyrlat::app;

pub use cyrlat::core;
pub use cyrlat::platform;
pub use cyrlat::ui;
pub use cyrlat::util;

use crate::core::model::Locale;
use clap::Parser;
use std::path::PathBuf;

/// Compile-time-embedded icon PNG bytes.
///
/// Using `include_bytes!` ensures the asset is baked into the binary so the
/// icon is always available regardless of the working directory at runtime.
static ICON_PNG: &[u8] = include_bytes!("../assets/icon.png");

/// Decode the embedded PNG and return an `eframe`-compatible `IconData`.
///
/// Falls back to a transparent 1x1 placeholder if decoding fails so the
/// application always launches rather than panicking on a missing asset.
fn load_icon() -> egui::IconData {
    use image::ImageDecoder;

    match image::codecs::png::PngDecoder::new(std::io::Cursor::new(ICON_PNG)) {
        Ok(decoder) => {
            let (w, h) = decoder.dimensions();
            match image::DynamicImage::from_decoder(decoder) {
                Ok(img) => {
                    let rgba = img.into_rgba8();
                    egui::IconData {
                        rgba: rgba.into_raw(),
                        width: w,
                        height: h,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to decode icon PNG; using placeholder");
                    placeholder_icon()
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to open icon PNG decoder; using placeholder");
            placeholder_icon()
        }
    }
}

/// 1x1 transparent RGBA icon used when the real icon cannot be loaded.
fn placeholder_icon() -> egui::IconData {
    egui::IconData {
        rgba: vec![0u8; 4],
        width: 1,
        height: 1,
    }
}

/// Configure fonts for the egui context.
///
/// On Windows, loads Segoe UI and its symbol companions from the system font
/// directory and sets them as the primary proportional fonts. Their Cyrillic
/// coverage matches the rest of the desktop, so Russian text renders in the
/// same face as every other application. The built-in egui fonts (which also
/// cover Cyrillic) are kept as final fallbacks so no glyph is ever lost.
///
/// On non-Windows platforms the egui defaults are used unchanged.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        let mut fonts = egui::FontDefinitions::default();

        let candidates: &[(&str, &str)] = &[
            ("Segoe UI", r"C:\Windows\Fonts\segoeui.ttf"),
            ("Segoe UI Symbol", r"C:\Windows\Fonts\seguisym.ttf"),
        ];

        let mut loaded_names: Vec<&str> = Vec::new();
        for (name, path) in candidates {
            match std::fs::read(path) {
                Ok(data) => {
                    fonts
                        .font_data
                        .insert((*name).to_owned(), egui::FontData::from_owned(data).into());
                    loaded_names.push(name);
                    tracing::debug!(font = name, "Loaded Windows system font");
                }
                Err(e) => {
                    tracing::warn!(
                        font = name,
                        error = %e,
                        "Failed to load Windows system font; falling back to egui built-ins"
                    );
                }
            }
        }

        if !loaded_names.is_empty() {
            // Proportional: place Windows fonts first so they take priority over
            // the egui default (NotoSans), while keeping it as a final fallback.
            if let Some(proportional) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                for (i, name) in loaded_names.iter().enumerate() {
                    proportional.insert(i, (*name).to_owned());
                }
            }

            // Monospace: append as symbol fallbacks after the primary monospace
            // font so column alignment is preserved.
            if let Some(monospace) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
                for name in &loaded_names {
                    monospace.push((*name).to_owned());
                }
            }

            ctx.set_fonts(fonts);
            tracing::info!(fonts = ?loaded_names, "Windows system fonts configured");
        }
    }

    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

/// CyrLat - Russian <-> NATO (BGN/PCGN) transliterator.
///
/// Paste or load Russian or romanized text, pick a direction (or let CyrLat
/// detect it), and save the converted result.
#[derive(Parser, Debug)]
#[command(name = "CyrLat", version, about)]
struct Cli {
    /// UTF-8 text file loaded into the input pane at startup.
    input: Option<PathBuf>,

    /// UI language: "en" or "de" (overrides session and config).
    #[arg(short = 'l', long = "lang")]
    lang: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging init so the
    // configured level can be honoured; config-load diagnostics are
    // re-reported below once the subscriber exists.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "CyrLat starting"
    );

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    // Restore the previous session, if any.
    let session = app::session::load(&platform_paths.data_dir);

    // Option priority: CLI > session > config > built-in default.
    let cli_locale = cli.lang.as_deref().and_then(|tag| {
        let parsed = Locale::parse(tag);
        if parsed.is_none() {
            tracing::warn!(lang = tag, "Unrecognised --lang value; expected \"en\" or \"de\"");
        }
        parsed
    });
    let locale = cli_locale
        .or(session.as_ref().map(|s| s.locale))
        .unwrap_or(config.locale);
    let font_choice = session
        .as_ref()
        .map(|s| s.font_choice)
        .unwrap_or(config.font_choice);
    let font_size = session
        .as_ref()
        .map(|s| s.font_size)
        .unwrap_or(config.font_size);

    // Create application state
    let mut state = app::state::AppState::new(locale, font_choice, font_size, cli.debug);
    state.data_dir = Some(platform_paths.data_dir.clone());

    if let Some(s) = &session {
        state.set_direction(s.direction);
        if state.ascii_toggle_enabled() {
            state.ascii_only = s.ascii_only;
        }
    }

    // If an input file was provided on the CLI, preload the input pane.
    if let Some(ref path) = cli.input {
        match gui::read_text_file(path) {
            Ok(content) => {
                tracing::info!(path = %path.display(), "Preloaded input file from CLI");
                state.input_text = content;
                state.status = app::state::StatusKey::FileLoaded;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot preload input file");
                state.message = Some(app::state::UserMessage::error(
                    app::state::MessageBody::FileReadFailed(e.to_string()),
                ));
            }
        }
    }

    // Launch the GUI
    //
    // The icon is applied at two levels:
    //   1. OS-level (Windows EXE resource) — embedded by build.rs via winres.
    //   2. Runtime (eframe viewport) — loaded here from the PNG asset.
    let icon_data = load_icon();

    let dark_mode = config.dark_mode;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::WINDOW_DEFAULT_SIZE)
            .with_min_inner_size(util::constants::WINDOW_MIN_SIZE)
            .with_icon(icon_data),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(gui::CyrLatApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch CyrLat GUI: {e}");
        std::process::exit(1);
    }
}
