//! Shorthand expansion and token resolution.
//!
//! [`expand`] turns a [`RawProps`] bag into a [`StylePropertySet`]:
//!
//! 1. every key is mapped to its canonical properties (`px` writes both
//!    `padding-left` and `padding-right`; unknown keys stay as written)
//! 2. numbers become pixel literals unless the property is unitless
//! 3. strings are resolved as token references in the property's scale;
//!    composite strings have each embedded reference replaced in place
//! 4. responsive values are resolved per tier and checked against the
//!    theme's breakpoints

use std::collections::BTreeMap;

use crate::style::property_set::{ComponentStateStyles, PropertyValue, StylePropertySet};
use crate::style::props::{RawProps, StateProps};
use crate::style::shorthand::{canonical_properties, scale_for};
use crate::style::tokenizer::{self, ValueToken};
use crate::style::value::{number_literal, PropValue, RawValue};
use crate::theme::theme::split_reference;
use crate::theme::{Theme, TokenError, TokenScale, BASE_TIER};

/// Expand a raw prop bag against `theme`.
///
/// Entries are applied in insertion order, so a later key overwrites any
/// canonical property an earlier key already wrote.
pub fn expand(raw: &RawProps, theme: &Theme) -> Result<StylePropertySet, TokenError> {
    let mut set = StylePropertySet::new();
    for (key, value) in raw.iter() {
        for property in canonical_properties(key) {
            let resolved = resolve_raw(key, property, value, theme)?;
            set.insert(property, resolved);
        }
    }
    Ok(set)
}

/// Expand every state of `states`.
pub fn expand_states(
    states: &StateProps,
    theme: &Theme,
) -> Result<ComponentStateStyles, TokenError> {
    let mut styles = ComponentStateStyles::new();
    for (state, raw) in states.iter() {
        styles.insert(state.clone(), expand(raw, theme)?);
    }
    Ok(styles)
}

fn resolve_raw(
    key: &str,
    property: &str,
    value: &RawValue,
    theme: &Theme,
) -> Result<PropertyValue, TokenError> {
    match value {
        RawValue::Fixed(value) => resolve_value(property, value, theme).map(PropertyValue::Static),
        RawValue::Responsive(tiers) => {
            if !tiers.contains_key(BASE_TIER) {
                return Err(TokenError::MissingBaseTier {
                    property: key.to_owned(),
                });
            }
            let mut resolved = BTreeMap::new();
            for (tier, value) in tiers {
                if !theme.breakpoints().contains(tier) {
                    return Err(TokenError::UnknownBreakpoint {
                        property: key.to_owned(),
                        tier: tier.clone(),
                    });
                }
                resolved.insert(tier.clone(), resolve_value(property, value, theme)?);
            }
            Ok(PropertyValue::Responsive(resolved))
        }
    }
}

/// Resolve one raw value for a canonical property.
pub fn resolve_value(
    property: &str,
    value: &PropValue,
    theme: &Theme,
) -> Result<String, TokenError> {
    match value {
        PropValue::Number(n) => Ok(number_literal(property, *n)),
        PropValue::Text(text) => {
            let scale = scale_for(property);
            if tokenizer::is_single_token(text) {
                return resolve_token(text, scale, theme);
            }
            tokenizer::rewrite(text, |token, text, next| match token {
                ValueToken::Reference => resolve_token(text, scale, theme).map(Some),
                ValueToken::Ident if next != Some(ValueToken::ParenOpen) && scale.is_some() => {
                    resolve_token(text, scale, theme).map(Some)
                }
                _ => Ok(None),
            })
        }
    }
}

/// Resolve a single token. Qualified references resolve everywhere; bare
/// keys only when the property has a scale.
fn resolve_token(
    text: &str,
    scale: Option<TokenScale>,
    theme: &Theme,
) -> Result<String, TokenError> {
    match scale {
        Some(scale) => theme.resolve(text, scale).map(|v| v.into_owned()),
        None if split_reference(text).is_some() => theme
            .resolve(text, TokenScale::Color)
            .map(|v| v.into_owned()),
        None => Ok(text.to_owned()),
    }
}
