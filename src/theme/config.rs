//! Deserialized theme configuration and its validation into a [`Theme`].
//!
//! A [`ThemeConfig`] is the shape a settings file hands over at startup or on
//! an explicit theme switch. It is plain data: nothing is checked until it is
//! turned into a [`Theme`], and that conversion rejects anything that breaks a
//! theme invariant instead of repairing it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::theme::scale::{ScaleValue, TokenScale};
use crate::theme::theme::{Theme, ThemeBuilder, ThemeError};

/// Theme shape as read from TOML. Map fields keep their declared order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub name: Option<String>,
    pub primary_color: Option<String>,
    pub primary_shade: Option<usize>,
    pub colors: IndexMap<String, Vec<String>>,
    pub spacing: IndexMap<String, ScaleValue>,
    #[serde(alias = "radius")]
    pub radii: IndexMap<String, ScaleValue>,
    pub shadows: IndexMap<String, ScaleValue>,
    pub font_sizes: IndexMap<String, ScaleValue>,
    pub font_weights: IndexMap<String, ScaleValue>,
    pub line_heights: IndexMap<String, ScaleValue>,
    pub breakpoints: IndexMap<String, f32>,
}

impl ThemeConfig {
    /// Parse a TOML document. Only syntax and types are checked here.
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeError> {
        toml::from_str(input).map_err(|err| ThemeError::Parse(err.to_string()))
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// Scalar fields are replaced when set; map entries are inserted or
    /// replaced key by key, keeping the position of keys that already exist.
    pub fn merge(mut self, overrides: ThemeConfig) -> Self {
        if overrides.name.is_some() {
            self.name = overrides.name;
        }
        if overrides.primary_color.is_some() {
            self.primary_color = overrides.primary_color;
        }
        if overrides.primary_shade.is_some() {
            self.primary_shade = overrides.primary_shade;
        }
        self.colors.extend(overrides.colors);
        self.spacing.extend(overrides.spacing);
        self.radii.extend(overrides.radii);
        self.shadows.extend(overrides.shadows);
        self.font_sizes.extend(overrides.font_sizes);
        self.font_weights.extend(overrides.font_weights);
        self.line_heights.extend(overrides.line_heights);
        self.breakpoints.extend(overrides.breakpoints);
        self
    }

    fn scale(&self, scale: TokenScale) -> Option<&IndexMap<String, ScaleValue>> {
        match scale {
            TokenScale::Spacing => Some(&self.spacing),
            TokenScale::Radius => Some(&self.radii),
            TokenScale::Shadow => Some(&self.shadows),
            TokenScale::FontSize => Some(&self.font_sizes),
            TokenScale::FontWeight => Some(&self.font_weights),
            TokenScale::LineHeight => Some(&self.line_heights),
            TokenScale::Color => None,
        }
    }

    fn to_builder(&self) -> ThemeBuilder {
        let mut builder = Theme::builder(self.name.as_deref().unwrap_or("custom"));
        for (family, shades) in &self.colors {
            builder = builder.color(family.clone(), shades.as_slice());
        }
        if let Some(primary) = &self.primary_color {
            builder = builder.primary_color(primary.clone());
        }
        if let Some(shade) = self.primary_shade {
            builder = builder.primary_shade(shade);
        }
        for scale in TokenScale::NAMED {
            for (key, value) in self.scale(scale).into_iter().flatten() {
                builder = builder.token(scale, key.clone(), value.clone());
            }
        }
        for (name, width) in &self.breakpoints {
            builder = builder.breakpoint(name.clone(), *width);
        }
        builder
    }
}

impl TryFrom<&ThemeConfig> for Theme {
    type Error = ThemeError;

    fn try_from(config: &ThemeConfig) -> Result<Self, Self::Error> {
        config.to_builder().build()
    }
}

impl TryFrom<ThemeConfig> for Theme {
    type Error = ThemeError;

    fn try_from(config: ThemeConfig) -> Result<Self, Self::Error> {
        Theme::try_from(&config)
    }
}

impl Theme {
    /// Parse and validate a complete theme from TOML.
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeError> {
        Theme::try_from(ThemeConfig::from_toml_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::breakpoints::BreakpointError;
    use pretty_assertions::assert_eq;

    const COMPACT: &str = r##"
name = "compact"
primaryColor = "blue"

[colors]
blue = ["#e7f5ff", "#d0ebff", "#a5d8ff", "#74c0fc", "#4dabf7", "#339af0", "#1c7ed6", "#1971c2", "#1864ab", "#145591"]

[spacing]
sm = 8
md = 16

[radius]
md = "0.5rem"

[shadows]
md = "0 1px 3px rgba(0, 0, 0, 0.1)"

[fontSizes]
md = 14

[fontWeights]
bold = 700

[lineHeights]
md = 1.55

[breakpoints]
base = 0
sm = 576
md = 768
lg = 992
"##;

    #[test]
    fn parses_and_builds() {
        let theme = Theme::from_toml_str(COMPACT).unwrap();
        assert_eq!(theme.name(), "compact");
        assert_eq!(theme.color("blue.6").unwrap(), "#1c7ed6");
        assert_eq!(theme.resolve("md", TokenScale::Spacing).unwrap(), "16px");
        assert_eq!(theme.resolve("md", TokenScale::Radius).unwrap(), "0.5rem");
        assert_eq!(theme.resolve("md", TokenScale::FontSize).unwrap(), "14px");
        assert_eq!(theme.resolve("bold", TokenScale::FontWeight).unwrap(), "700");
        assert_eq!(theme.resolve("md", TokenScale::LineHeight).unwrap(), "1.55");
        let names: Vec<&str> = theme.breakpoints().names().collect();
        assert_eq!(names, vec!["base", "sm", "md", "lg"]);
    }

    #[test]
    fn breakpoints_keep_declared_order() {
        let config = ThemeConfig::from_toml_str(COMPACT).unwrap();
        let names: Vec<&str> = config.breakpoints.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["base", "sm", "md", "lg"]);
    }

    #[test]
    fn unsorted_breakpoints_are_rejected() {
        let input = COMPACT.replace("md = 768\nlg = 992", "lg = 992\nmd = 768");
        let err = Theme::from_toml_str(&input).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::Breakpoints(BreakpointError::NotIncreasing { .. })
        ));
    }

    #[test]
    fn empty_scale_is_rejected() {
        let input = COMPACT.replace("[fontWeights]\nbold = 700", "[fontWeights]");
        let err = Theme::from_toml_str(&input).unwrap_err();
        assert_eq!(err, ThemeError::EmptyScale(TokenScale::FontWeight));
    }

    #[test]
    fn syntax_errors_surface_as_parse() {
        let err = Theme::from_toml_str("colors = [").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn merge_replaces_and_extends() {
        let base = ThemeConfig::from_toml_str(COMPACT).unwrap();
        let overrides = ThemeConfig::from_toml_str(
            r#"
primaryShade = 4

[spacing]
md = 20
xl = 32
"#,
        )
        .unwrap();

        let merged = base.merge(overrides);
        assert_eq!(merged.primary_shade, Some(4));
        assert_eq!(merged.spacing.get("md"), Some(&ScaleValue::Number(20.0)));
        assert_eq!(merged.spacing.get("xl"), Some(&ScaleValue::Number(32.0)));
        assert_eq!(merged.name.as_deref(), Some("compact"));

        let theme = Theme::try_from(merged).unwrap();
        assert_eq!(theme.resolve("md", TokenScale::Spacing).unwrap(), "20px");
        assert_eq!(theme.color("blue").unwrap(), "#4dabf7");
    }
}
