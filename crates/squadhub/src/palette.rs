//! Tag badge colors.
//!
//! Primary tags map to a badge background through an explicit table. The
//! `general` entry is always present and catches every unknown tag.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::format::ideal_text_color;

/// Key of the fallback entry.
pub const GENERAL: &str = "general";

/// Built-in tag colors, keyed by lower-cased tag.
const BUILTIN: &[(&str, &str)] = &[
    ("official", "#D4AF37"),
    ("training", "#2A9D8F"),
    ("calendar", "#F4A261"),
    ("community", "#8ECAE6"),
    ("wellness", "#A8DADC"),
    ("forms", "#E76F51"),
    ("tools", "#264653"),
    ("programming", "#4F46E5"),
    (GENERAL, "#6B7280"),
];

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("Invalid regex pattern")
    })
}

/// Check that `color` is a 3- or 6-digit hex color.
#[must_use]
pub fn is_hex_color(color: &str) -> bool {
    hex_color_regex().is_match(color)
}

/// Background and text color for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColors<'a> {
    /// Badge background.
    pub background: &'a str,
    /// Text color chosen for contrast.
    pub foreground: &'static str,
}

/// Tag to color lookup table with an explicit default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPalette {
    colors: BTreeMap<String, String>,
}

impl Default for TagPalette {
    fn default() -> Self {
        Self {
            colors: BUILTIN
                .iter()
                .map(|(tag, color)| ((*tag).to_string(), (*color).to_string()))
                .collect(),
        }
    }
}

impl TagPalette {
    /// Built-in palette with `overrides` applied on top.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] if an override is not a hex color.
    pub fn with_overrides<'a>(
        overrides: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Result<Self> {
        let mut palette = Self::default();
        for (tag, color) in overrides {
            palette.insert(tag, color)?;
        }
        Ok(palette)
    }

    /// Add or replace the color for `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] if `color` is not a hex color.
    pub fn insert(&mut self, tag: &str, color: &str) -> Result<()> {
        if !is_hex_color(color) {
            return Err(Error::ConfigValidation {
                message: format!("palette color for '{tag}' is not a hex color: {color}"),
            });
        }
        self.colors.insert(tag.to_lowercase(), color.to_string());
        Ok(())
    }

    /// Background color for `tag`, falling back to the `general` entry.
    #[must_use]
    pub fn background(&self, tag: &str) -> &str {
        self.colors
            .get(&tag.to_lowercase())
            .or_else(|| self.colors.get(GENERAL))
            .map_or(BUILTIN[BUILTIN.len() - 1].1, String::as_str)
    }

    /// Background plus contrasting text color for `tag`.
    #[must_use]
    pub fn badge(&self, tag: &str) -> BadgeColors<'_> {
        let background = self.background(tag);
        BadgeColors {
            background,
            foreground: ideal_text_color(Some(background)),
        }
    }

    /// Number of entries, including the default.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// A palette always holds the default entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
