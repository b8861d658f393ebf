//! Token scales: named scale tables and ten-step color families.

use std::collections::BTreeMap;
use std::fmt;

use crate::style::value::format_number;

/// Number of shades in every color family.
pub const SHADE_COUNT: usize = 10;

/// Which theme scale a token reference is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenScale {
    Color,
    Spacing,
    Radius,
    Shadow,
    FontSize,
    FontWeight,
    LineHeight,
}

impl TokenScale {
    /// All non-color scales, in declaration order.
    pub const NAMED: [TokenScale; 6] = [
        TokenScale::Spacing,
        TokenScale::Radius,
        TokenScale::Shadow,
        TokenScale::FontSize,
        TokenScale::FontWeight,
        TokenScale::LineHeight,
    ];

    /// Parse the scale prefix of a qualified reference like `spacing.md`.
    ///
    /// Accepts the singular and plural spellings used in theme files.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "spacing" => Some(Self::Spacing),
            "radius" | "radii" => Some(Self::Radius),
            "shadow" | "shadows" => Some(Self::Shadow),
            "fontSize" | "fontSizes" => Some(Self::FontSize),
            "fontWeight" | "fontWeights" => Some(Self::FontWeight),
            "lineHeight" | "lineHeights" => Some(Self::LineHeight),
            _ => None,
        }
    }

    /// Whether bare numbers in this scale keep no unit.
    pub fn is_unitless(self) -> bool {
        matches!(self, Self::FontWeight | Self::LineHeight)
    }

    /// Name used in theme files and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Color => "colors",
            Self::Spacing => "spacing",
            Self::Radius => "radii",
            Self::Shadow => "shadows",
            Self::FontSize => "fontSizes",
            Self::FontWeight => "fontWeights",
            Self::LineHeight => "lineHeights",
        }
    }
}

impl fmt::Display for TokenScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A literal value as it appears in a theme file: a number or a string.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum ScaleValue {
    Number(f64),
    Text(String),
}

impl ScaleValue {
    /// Normalize into the literal stored in a [`Scale`].
    ///
    /// Numbers become pixel lengths unless the scale is unitless.
    pub fn into_literal(self, scale: TokenScale) -> String {
        match self {
            ScaleValue::Number(n) if scale.is_unitless() => format_number(n),
            ScaleValue::Number(n) => format!("{}px", format_number(n)),
            ScaleValue::Text(s) => s,
        }
    }
}

impl From<f64> for ScaleValue {
    fn from(n: f64) -> Self {
        ScaleValue::Number(n)
    }
}

impl From<i32> for ScaleValue {
    fn from(n: i32) -> Self {
        ScaleValue::Number(f64::from(n))
    }
}

impl From<&str> for ScaleValue {
    fn from(s: &str) -> Self {
        ScaleValue::Text(s.to_owned())
    }
}

/// A non-empty table of scale keys to literal values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scale {
    entries: BTreeMap<String, String>,
}

impl Scale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a normalized literal. Later inserts replace earlier ones.
    pub fn insert(&mut self, key: impl Into<String>, literal: impl Into<String>) {
        self.entries.insert(key.into(), literal.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// The ten shades of one color family, lightest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shades([String; SHADE_COUNT]);

impl Shades {
    pub fn new(shades: [String; SHADE_COUNT]) -> Self {
        Self(shades)
    }

    /// Build from a slice; `None` unless it holds exactly ten values.
    pub fn from_slice<S: AsRef<str>>(values: &[S]) -> Option<Self> {
        if values.len() != SHADE_COUNT {
            return None;
        }
        Some(Self(std::array::from_fn(|i| values[i].as_ref().to_owned())))
    }

    /// Shade at `index`, clamped into `0..=9`.
    pub fn shade(&self, index: i64) -> &str {
        let clamped = index.clamp(0, SHADE_COUNT as i64 - 1) as usize;
        &self.0[clamped]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue() -> Shades {
        Shades::from_slice(&[
            "#e7f5ff", "#d0ebff", "#a5d8ff", "#74c0fc", "#4dabf7", "#339af0", "#228be6",
            "#1c7ed6", "#1971c2", "#1864ab",
        ])
        .unwrap()
    }

    #[test]
    fn shade_in_range() {
        let shades = blue();
        for (i, expected) in shades.as_slice().iter().enumerate() {
            assert_eq!(shades.shade(i as i64), expected);
        }
    }

    #[test]
    fn shade_clamps_low_and_high() {
        let shades = blue();
        assert_eq!(shades.shade(-3), "#e7f5ff");
        assert_eq!(shades.shade(12), "#1864ab");
    }

    #[test]
    fn shades_require_exactly_ten() {
        assert!(Shades::from_slice(&["#fff"; 9]).is_none());
        assert!(Shades::from_slice(&["#fff"; 11]).is_none());
        assert!(Shades::from_slice(&["#fff"; 10]).is_some());
    }

    #[test]
    fn scale_value_normalization() {
        assert_eq!(ScaleValue::from(16).into_literal(TokenScale::Spacing), "16px");
        assert_eq!(ScaleValue::from(1.55).into_literal(TokenScale::LineHeight), "1.55");
        assert_eq!(ScaleValue::from(700).into_literal(TokenScale::FontWeight), "700");
        assert_eq!(ScaleValue::from("1rem").into_literal(TokenScale::Spacing), "1rem");
    }

    #[test]
    fn scale_prefixes() {
        assert_eq!(TokenScale::from_prefix("spacing"), Some(TokenScale::Spacing));
        assert_eq!(TokenScale::from_prefix("radii"), Some(TokenScale::Radius));
        assert_eq!(TokenScale::from_prefix("radius"), Some(TokenScale::Radius));
        assert_eq!(TokenScale::from_prefix("fontSizes"), Some(TokenScale::FontSize));
        assert_eq!(TokenScale::from_prefix("colors"), None);
        assert_eq!(TokenScale::from_prefix("sizes"), None);
    }

    #[test]
    fn scale_insert_replaces() {
        let mut scale = Scale::new();
        assert!(scale.is_empty());
        scale.insert("md", "16px");
        scale.insert("md", "18px");
        assert_eq!(scale.len(), 1);
        assert_eq!(scale.get("md"), Some("18px"));
        assert!(scale.contains("md"));
        assert!(!scale.contains("lg"));
    }
}
