//! Mobile-first cascade of responsive values.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::style::property_set::{PropertyValue, StylePropertySet};
use crate::theme::{Breakpoints, BASE_TIER};

/// Flatten `set` for `tier`.
///
/// For each property the value is the last one defined walking from `base`
/// up to and including `tier`. Properties with nothing defined at or below
/// `tier` are left out. A tier the breakpoints do not know cascades as
/// `base`.
pub fn cascade(
    set: &StylePropertySet,
    tier: &str,
    breakpoints: &Breakpoints,
) -> BTreeMap<String, String> {
    let order = breakpoints.up_to(tier);
    set.iter()
        .filter_map(|(property, value)| {
            let resolved = match value {
                PropertyValue::Static(value) => Some(value.as_str()),
                PropertyValue::Responsive(_) => {
                    order.iter().rev().find_map(|bp| value.at(&bp.name))
                }
            };
            resolved.map(|v| (property.to_owned(), v.to_owned()))
        })
        .collect()
}

/// A value that may change with the active tier, for layout decisions that
/// are not stylesheet properties (a stack's direction, a grid's columns).
#[derive(Debug, Clone, PartialEq)]
pub enum Responsive<T> {
    Fixed(T),
    /// Tier name to value. Must contain `base` to be defined at every width.
    Tiers(IndexMap<String, T>),
}

impl<T> Responsive<T> {
    pub fn tiers<I, K>(tiers: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        Responsive::Tiers(tiers.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// The value in effect at `tier`, cascading from `base` upward.
    pub fn resolve(&self, tier: &str, breakpoints: &Breakpoints) -> Option<&T> {
        match self {
            Responsive::Fixed(value) => Some(value),
            Responsive::Tiers(values) => breakpoints
                .up_to(tier)
                .iter()
                .rev()
                .find_map(|bp| values.get(&bp.name)),
        }
    }

    /// The value at the base tier.
    pub fn base(&self) -> Option<&T> {
        match self {
            Responsive::Fixed(value) => Some(value),
            Responsive::Tiers(values) => values.get(BASE_TIER),
        }
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Fixed(value)
    }
}
