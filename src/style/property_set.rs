//! Canonical, fully resolved property sets.

use std::collections::BTreeMap;

use crate::style::props::StateKey;
use crate::theme::BASE_TIER;

/// A resolved property value: one literal, or literals keyed by tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    Static(String),
    /// Always contains a `base` entry.
    Responsive(BTreeMap<String, String>),
}

impl PropertyValue {
    /// Value at exactly `tier`, without cascading.
    pub fn at(&self, tier: &str) -> Option<&str> {
        match self {
            PropertyValue::Static(value) if tier == BASE_TIER => Some(value),
            PropertyValue::Static(_) => None,
            PropertyValue::Responsive(tiers) => tiers.get(tier).map(String::as_str),
        }
    }

    pub fn is_responsive(&self) -> bool {
        matches!(self, PropertyValue::Responsive(_))
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Static(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Static(value)
    }
}

/// Canonical property name to resolved value, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StylePropertySet {
    properties: BTreeMap<String, PropertyValue>,
}

impl StylePropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.properties.get(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn has_responsive(&self) -> bool {
        self.properties.values().any(PropertyValue::is_responsive)
    }
}

impl<K, V> FromIterator<(K, V)> for StylePropertySet
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = StylePropertySet::new();
        for (property, value) in iter {
            set.insert(property, value);
        }
        set
    }
}

/// Resolved property sets per interaction state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ComponentStateStyles {
    states: BTreeMap<StateKey, StylePropertySet>,
}

impl ComponentStateStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: impl Into<StateKey>, set: StylePropertySet) -> Self {
        self.insert(state, set);
        self
    }

    pub fn insert(&mut self, state: impl Into<StateKey>, set: StylePropertySet) {
        self.states.insert(state.into(), set);
    }

    pub fn get(&self, state: &StateKey) -> Option<&StylePropertySet> {
        self.states.get(state)
    }

    pub fn root(&self) -> Option<&StylePropertySet> {
        self.states.get(&StateKey::Root)
    }

    /// States in block order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &StylePropertySet)> {
        self.states.iter()
    }

    pub fn has_responsive(&self) -> bool {
        self.states.values().any(StylePropertySet::has_responsive)
    }
}
