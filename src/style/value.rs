//! Raw style values as component authors supply them.

use std::fmt;

use indexmap::IndexMap;

/// A single raw value: a number (pixel length unless the property is
/// unitless) or a string (token reference or raw stylesheet value).
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Number(f64),
    Text(String),
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<f32> for PropValue {
    fn from(n: f32) -> Self {
        PropValue::Number(f64::from(n))
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(f64::from(n))
    }
}

impl From<u32> for PropValue {
    fn from(n: u32) -> Self {
        PropValue::Number(f64::from(n))
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Number(n) => f.write_str(&format_number(*n)),
            PropValue::Text(s) => f.write_str(s),
        }
    }
}

/// A raw prop value, either fixed or keyed by breakpoint tier.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Fixed(PropValue),
    /// Tier name to value, in the order the author wrote them.
    Responsive(IndexMap<String, PropValue>),
}

impl RawValue {
    /// Build a responsive value from `(tier, value)` pairs.
    pub fn responsive<I, K, V>(tiers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<PropValue>,
    {
        RawValue::Responsive(
            tiers
                .into_iter()
                .map(|(tier, value)| (tier.into(), value.into()))
                .collect(),
        )
    }

    pub fn is_responsive(&self) -> bool {
        matches!(self, RawValue::Responsive(_))
    }
}

impl From<PropValue> for RawValue {
    fn from(value: PropValue) -> Self {
        RawValue::Fixed(value)
    }
}

macro_rules! fixed_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue {
                fn from(value: $ty) -> Self {
                    RawValue::Fixed(value.into())
                }
            }
        )*
    };
}

fixed_from!(f64, f32, i32, u32, &str, String);

/// Format a number without a trailing `.0` for whole values.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Canonical properties whose bare numbers carry no unit.
pub fn is_unitless_property(property: &str) -> bool {
    matches!(
        property,
        "font-weight"
            | "line-height"
            | "opacity"
            | "z-index"
            | "flex"
            | "flex-grow"
            | "flex-shrink"
            | "order"
    )
}

/// Render a number for `property`: unitless properties keep the bare number,
/// everything else becomes a pixel length.
pub fn number_literal(property: &str, n: f64) -> String {
    if is_unitless_property(property) {
        format_number(n)
    } else {
        format!("{}px", format_number(n))
    }
}
