//! The immutable [`Theme`] and token reference resolution.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::theme::breakpoints::{BreakpointError, Breakpoints};
use crate::theme::scale::{Scale, ScaleValue, Shades, TokenScale, SHADE_COUNT};

static NEXT_THEME_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a constructed theme. Every construction gets a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeId(u64);

impl ThemeId {
    fn next() -> Self {
        ThemeId(NEXT_THEME_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "theme#{}", self.0)
    }
}

/// A token reference that does not exist in the theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("unknown color family `{family}` in `{reference}`")]
    UnknownColor { family: String, reference: String },
    #[error("unknown key `{key}` in scale `{scale}`")]
    UnknownKey { scale: TokenScale, key: String },
    #[error("unknown breakpoint `{tier}` for property `{property}`")]
    UnknownBreakpoint { property: String, tier: String },
    #[error("responsive value for `{property}` has no `base` tier")]
    MissingBaseTier { property: String },
}

/// A theme that failed structural validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeError {
    #[error("scale `{0}` is empty")]
    EmptyScale(TokenScale),
    #[error("theme defines no color families")]
    NoColors,
    #[error("color family `{family}` has {count} shades, expected 10")]
    ShadeCount { family: String, count: usize },
    #[error("primary color `{0}` is not a defined color family")]
    UnknownPrimaryColor(String),
    #[error("primary shade {0} is outside 0..=9")]
    PrimaryShade(usize),
    #[error("`{key}` is defined twice in `{table}`")]
    DuplicateKey { table: String, key: String },
    #[error("invalid breakpoints: {0}")]
    Breakpoints(#[from] BreakpointError),
    #[error("failed to parse theme config: {0}")]
    Parse(String),
}

/// Immutable design tokens: colors, scales, and breakpoints.
///
/// A theme is shared as `Arc<Theme>`. It has no interior mutability; switching
/// themes means building a new one, which carries a new [`ThemeId`].
#[derive(Debug)]
pub struct Theme {
    id: ThemeId,
    name: String,
    colors: BTreeMap<String, Shades>,
    primary_color: String,
    primary_shade: usize,
    scales: BTreeMap<TokenScale, Scale>,
    breakpoints: Breakpoints,
}

impl Theme {
    /// Start building a theme.
    pub fn builder(name: impl Into<String>) -> ThemeBuilder {
        ThemeBuilder::new(name)
    }

    pub fn id(&self) -> ThemeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn primary_color(&self) -> &str {
        &self.primary_color
    }

    pub fn primary_shade(&self) -> usize {
        self.primary_shade
    }

    /// Shades of a color family.
    pub fn colors(&self, family: &str) -> Option<&Shades> {
        let family = if family == "primary" {
            self.primary_color.as_str()
        } else {
            family
        };
        self.colors.get(family)
    }

    pub fn color_families(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// A non-color scale table.
    pub fn scale(&self, scale: TokenScale) -> Option<&Scale> {
        self.scales.get(&scale)
    }

    /// Resolve a token reference in the context of `scale`.
    ///
    /// - `family.index` addresses a color shade; the index clamps into `0..=9`.
    /// - `scale.key` (e.g. `spacing.md`) looks `key` up in the named scale.
    /// - A bare key is looked up in `scale`; in color context a bare family
    ///   name resolves to the primary shade.
    /// - Anything else is returned unchanged.
    ///
    /// Fails only when a qualified reference names a family, scale or key
    /// that does not exist.
    pub fn resolve<'a>(
        &'a self,
        reference: &'a str,
        scale: TokenScale,
    ) -> Result<Cow<'a, str>, TokenError> {
        if let Some((head, tail)) = split_reference(reference) {
            if let Some(index) = shade_index(tail) {
                return match self.colors(head) {
                    Some(shades) => Ok(Cow::Borrowed(shades.shade(index))),
                    None => Err(TokenError::UnknownColor {
                        family: head.to_owned(),
                        reference: reference.to_owned(),
                    }),
                };
            }
            if let Some(named) = TokenScale::from_prefix(head) {
                return self
                    .scale(named)
                    .and_then(|table| table.get(tail))
                    .map(Cow::Borrowed)
                    .ok_or_else(|| TokenError::UnknownKey {
                        scale: named,
                        key: tail.to_owned(),
                    });
            }
            return Ok(Cow::Borrowed(reference));
        }

        if scale == TokenScale::Color {
            if let Some(shades) = self.colors(reference) {
                return Ok(Cow::Borrowed(shades.shade(self.primary_shade as i64)));
            }
            return Ok(Cow::Borrowed(reference));
        }

        Ok(Cow::Borrowed(
            self.scale(scale)
                .and_then(|table| table.get(reference))
                .unwrap_or(reference),
        ))
    }

    /// Resolve a color reference, e.g. `blue.6` or `primary`.
    pub fn color(&self, reference: &str) -> Result<String, TokenError> {
        self.resolve(reference, TokenScale::Color).map(Cow::into_owned)
    }
}

/// Parse a shade index written as `-?[0-9]+`. Values beyond `i64` saturate
/// so they still clamp to the first or last shade.
fn shade_index(tail: &str) -> Option<i64> {
    let digits = tail.strip_prefix('-').unwrap_or(tail);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match tail.parse::<i64>() {
        Ok(index) => Some(index),
        Err(_) if tail.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Split `head.tail` where `head` is an identifier. Returns `None` for plain
/// numbers like `1.5` and for anything without a dot.
pub(crate) fn split_reference(reference: &str) -> Option<(&str, &str)> {
    let (head, tail) = reference.split_once('.')?;
    let mut chars = head.chars();
    let starts_alpha = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let rest_ident = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !starts_alpha || !rest_ident || tail.is_empty() || tail.contains('.') {
        return None;
    }
    Some((head, tail))
}

/// Builder for [`Theme`]. Validation happens in [`ThemeBuilder::build`].
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    name: String,
    colors: BTreeMap<String, Vec<String>>,
    primary_color: Option<String>,
    primary_shade: usize,
    scales: BTreeMap<TokenScale, Scale>,
    breakpoints: Vec<(String, f32)>,
    /// First family or scale key added twice, as `(table, key)`.
    duplicate: Option<(String, String)>,
}

impl ThemeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let scales = TokenScale::NAMED
            .iter()
            .map(|scale| (*scale, Scale::new()))
            .collect();
        Self {
            name: name.into(),
            colors: BTreeMap::new(),
            primary_color: None,
            primary_shade: 6,
            scales,
            breakpoints: Vec::new(),
            duplicate: None,
        }
    }

    fn record_duplicate(&mut self, table: &str, key: &str) {
        if self.duplicate.is_none() {
            self.duplicate = Some((table.to_owned(), key.to_owned()));
        }
    }

    /// Add a color family. Must have exactly ten shades by build time, and a
    /// family may only be added once.
    pub fn color<S: AsRef<str>>(mut self, family: impl Into<String>, shades: &[S]) -> Self {
        let family = family.into();
        if self.colors.contains_key(&family) {
            self.record_duplicate(TokenScale::Color.name(), &family);
        }
        let shades = shades.iter().map(|s| s.as_ref().to_owned()).collect();
        self.colors.insert(family, shades);
        self
    }

    /// Set the primary family. Defaults to the first family in name order.
    pub fn primary_color(mut self, family: impl Into<String>) -> Self {
        self.primary_color = Some(family.into());
        self
    }

    pub fn primary_shade(mut self, shade: usize) -> Self {
        self.primary_shade = shade;
        self
    }

    /// Add a value to a named scale.
    pub fn token(
        mut self,
        scale: TokenScale,
        key: impl Into<String>,
        value: impl Into<ScaleValue>,
    ) -> Self {
        let key = key.into();
        if self.scales.get(&scale).is_some_and(|table| table.contains(&key)) {
            self.record_duplicate(scale.name(), &key);
        }
        let literal = value.into().into_literal(scale);
        self.scales.entry(scale).or_default().insert(key, literal);
        self
    }

    pub fn spacing(self, key: impl Into<String>, value: impl Into<ScaleValue>) -> Self {
        self.token(TokenScale::Spacing, key, value)
    }

    pub fn radius(self, key: impl Into<String>, value: impl Into<ScaleValue>) -> Self {
        self.token(TokenScale::Radius, key, value)
    }

    pub fn shadow(self, key: impl Into<String>, value: impl Into<ScaleValue>) -> Self {
        self.token(TokenScale::Shadow, key, value)
    }

    pub fn font_size(self, key: impl Into<String>, value: impl Into<ScaleValue>) -> Self {
        self.token(TokenScale::FontSize, key, value)
    }

    pub fn font_weight(self, key: impl Into<String>, value: impl Into<ScaleValue>) -> Self {
        self.token(TokenScale::FontWeight, key, value)
    }

    pub fn line_height(self, key: impl Into<String>, value: impl Into<ScaleValue>) -> Self {
        self.token(TokenScale::LineHeight, key, value)
    }

    /// Append a breakpoint. Tiers must be appended in ascending order,
    /// starting with `base` at 0.
    pub fn breakpoint(mut self, name: impl Into<String>, min_width: f32) -> Self {
        self.breakpoints.push((name.into(), min_width));
        self
    }

    /// Validate all invariants and produce a theme with a fresh identity.
    pub fn build(self) -> Result<Theme, ThemeError> {
        if let Some((table, key)) = self.duplicate {
            return Err(ThemeError::DuplicateKey { table, key });
        }
        if self.colors.is_empty() {
            return Err(ThemeError::NoColors);
        }
        let mut colors = BTreeMap::new();
        for (family, values) in self.colors {
            let shades = Shades::from_slice(&values).ok_or_else(|| ThemeError::ShadeCount {
                family: family.clone(),
                count: values.len(),
            })?;
            colors.insert(family, shades);
        }

        for scale in TokenScale::NAMED {
            if self.scales.get(&scale).map_or(true, Scale::is_empty) {
                return Err(ThemeError::EmptyScale(scale));
            }
        }

        let primary_color = match self.primary_color {
            Some(family) if colors.contains_key(&family) => family,
            Some(family) => return Err(ThemeError::UnknownPrimaryColor(family)),
            None => colors.keys().next().cloned().ok_or(ThemeError::NoColors)?,
        };
        if self.primary_shade >= SHADE_COUNT {
            return Err(ThemeError::PrimaryShade(self.primary_shade));
        }

        let breakpoints = Breakpoints::new(self.breakpoints)?;

        Ok(Theme {
            id: ThemeId::next(),
            name: self.name,
            colors,
            primary_color,
            primary_shade: self.primary_shade,
            scales: self.scales,
            breakpoints,
        })
    }
}
