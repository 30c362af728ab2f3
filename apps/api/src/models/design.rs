//! Resolved design configuration handed to the layout engine.
//!
//! Dimension and color values are opaque tokens to the engine; they are
//! validated once here, then forwarded verbatim into the markup.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::layout::LayoutError;

// ────────────────────────────────────────────────────────────────────────────
// Tokens
// ────────────────────────────────────────────────────────────────────────────

const DIMENSION_UNITS: &[&str] = &["cm", "mm", "in", "pt", "em", "ex", "%", "fr"];

const NAMED_COLORS: &[&str] = &[
    "black", "gray", "silver", "white", "navy", "blue", "aqua", "teal", "eastern", "purple",
    "fuchsia", "maroon", "red", "orange", "yellow", "olive", "green", "lime",
];

/// A length such as `0.4cm`, `30%` or `1fr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dimension(String);

impl Dimension {
    /// Validates `value` as a signed decimal followed by a unit.
    pub fn parse(field: &str, value: &str) -> Result<Self, LayoutError> {
        let trimmed = value.trim();
        let unit = DIMENSION_UNITS
            .iter()
            .find(|unit| trimmed.ends_with(*unit))
            .ok_or_else(|| invalid_dimension(field, value))?;
        let number = &trimmed[..trimmed.len() - unit.len()];
        if !is_decimal(number) {
            return Err(invalid_dimension(field, value));
        }
        Ok(Dimension(trimmed.to_string()))
    }

    /// Wraps a built-in literal without validation.
    pub(crate) fn from_static(token: &'static str) -> Self {
        Dimension(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn invalid_dimension(field: &str, value: &str) -> LayoutError {
    LayoutError::config(
        field,
        value,
        "a number followed by one of cm, mm, in, pt, em, ex, %, fr",
    )
}

fn is_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let mut parts = digits.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let frac = parts.next();
    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    match frac {
        None => !whole.is_empty() && all_digits(whole),
        Some(frac) => {
            (!whole.is_empty() || !frac.is_empty()) && all_digits(whole) && all_digits(frac)
        }
    }
}

/// A color expression in Typst syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Accepts hex (`#004f90`, `004f90`, `#08f`), `rgb(...)` with numeric
    /// components, or a Typst named color. Hex is normalized to `rgb("#...")`.
    pub fn parse(field: &str, value: &str) -> Result<Self, LayoutError> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if (hex.len() == 6 || hex.len() == 3) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(Color(format!("rgb(\"#{}\")", hex.to_ascii_lowercase())));
        }

        if let Some(inner) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let components: Vec<&str> = inner.split(',').map(str::trim).collect();
            let numeric = components.iter().all(|c| {
                let n = c.strip_suffix('%').unwrap_or(c);
                !n.is_empty() && is_decimal(n)
            });
            if (components.len() == 3 || components.len() == 4) && numeric {
                return Ok(Color(trimmed.to_string()));
            }
        }

        let lower = trimmed.to_ascii_lowercase();
        if NAMED_COLORS.contains(&lower.as_str()) {
            return Ok(Color(lower));
        }

        Err(LayoutError::config(
            field,
            value,
            "a hex color, rgb(r, g, b) or a named color",
        ))
    }

    /// Wraps a built-in literal without validation.
    pub(crate) fn from_static(token: &'static str) -> Self {
        Color(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Design sections
// ────────────────────────────────────────────────────────────────────────────

/// Header geometry and colors. `photo_position` stays a raw token; the
/// header composer checks it on entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderDesignConfig {
    pub photo_space_left: Dimension,
    pub photo_space_right: Dimension,
    pub photo_width: Dimension,
    pub photo_position: String,
    pub tag_fill_color: Color,
}

/// Two-column layout for themes with a sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnLayoutConfig {
    pub sidebar_width: Dimension,
    pub sidebar_position: String,
    pub gutter: Dimension,
    /// Membership only; output order always follows the section catalog.
    pub sidebar_section_names: BTreeSet<String>,
    pub background_color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageSize {
    A4,
    A5,
    UsLetter,
    UsExecutive,
}

impl PageSize {
    pub fn parse(field: &str, value: &str) -> Result<Self, LayoutError> {
        match value {
            "a4" => Ok(PageSize::A4),
            "a5" => Ok(PageSize::A5),
            "us-letter" => Ok(PageSize::UsLetter),
            "us-executive" => Ok(PageSize::UsExecutive),
            other => Err(LayoutError::config(
                field,
                other,
                "one of `a4`, `a5`, `us-letter`, `us-executive`",
            )),
        }
    }

    /// Paper name as understood by Typst's `page` function.
    pub fn paper(self) -> &'static str {
        match self {
            PageSize::A4 => "a4",
            PageSize::A5 => "a5",
            PageSize::UsLetter => "us-letter",
            PageSize::UsExecutive => "us-executive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSettings {
    pub size: PageSize,
    pub top_margin: Dimension,
    pub bottom_margin: Dimension,
    pub left_margin: Dimension,
    pub right_margin: Dimension,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Colors {
    pub body: Color,
    pub name: Color,
    pub section_titles: Color,
}

/// A fully resolved design: theme defaults with request overrides applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Design {
    pub theme: String,
    pub page: PageSettings,
    pub colors: Colors,
    pub header: HeaderDesignConfig,
    /// `None` for single-column themes.
    pub sidebar: Option<ColumnLayoutConfig>,
}
