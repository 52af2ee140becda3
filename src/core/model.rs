// CyrLat - core/model.rs
//
// Shared value types: conversion direction, detected script, UI locale,
// and font family choice. All are plain enums with serde derives so the
// session layer can persist them and the config layer can parse them.

use serde::{Deserialize, Serialize};

/// Conversion direction selected in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Decide per input text by counting Cyrillic vs Latin letters.
    Auto,
    /// Russian Cyrillic to BGN/PCGN romanization.
    RuToLat,
    /// BGN/PCGN romanization back to Russian Cyrillic.
    LatToRu,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Auto
    }
}

/// Script detected in an input text by `core::detect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Cyrillic,
    Latin,
}

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    De,
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl Locale {
    /// Parse a locale tag as used by the CLI and config file.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    /// The tag accepted back by [`Locale::parse`].
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }
}

/// Font family applied uniformly to all widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontChoice {
    Proportional,
    Monospace,
}

impl Default for FontChoice {
    fn default() -> Self {
        Self::Proportional
    }
}

impl FontChoice {
    /// Parse a family name as used by the config file.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "proportional" => Some(Self::Proportional),
            "monospace" => Some(Self::Monospace),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Proportional => "Proportional",
            Self::Monospace => "Monospace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_tags_round_trip() {
        for locale in [Locale::En, Locale::De] {
            assert_eq!(Locale::parse(locale.tag()), Some(locale));
        }
        assert_eq!(Locale::parse("fr"), None);
    }

    #[test]
    fn font_choice_parses_case_insensitively() {
        assert_eq!(FontChoice::parse("Monospace"), Some(FontChoice::Monospace));
        assert_eq!(
            FontChoice::parse("PROPORTIONAL"),
            Some(FontChoice::Proportional)
        );
        assert_eq!(FontChoice::parse("serif"), None);
    }
}
