//! Raw prop bags and interaction states.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;

use crate::style::value::RawValue;

/// A shorthand property bag as a component author writes it.
///
/// Keys keep insertion order. When two keys expand to the same canonical
/// property (`p` and `padding`), the one inserted last wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProps {
    entries: IndexMap<String, RawValue>,
}

impl RawProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`. Re-inserting an existing key moves it to the end so that
    /// "last written wins" holds against other aliases too.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        let key = key.into();
        self.entries.shift_remove(&key);
        self.entries.insert(key, value.into());
    }

    /// Builder-style [`RawProps::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append every entry of `other`, in its order.
    pub fn extend(&mut self, other: RawProps) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for RawProps
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = RawProps::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}

/// Interaction state a style block applies to.
///
/// The derived ordering is the block order in generated stylesheets: root
/// first, then the built-in states, then custom keys by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateKey {
    Root,
    Hover,
    Focus,
    Pressed,
    Disabled,
    Custom(String),
}

impl StateKey {
    /// Parse a state name. `active` is an alias for `pressed`; anything not
    /// built in becomes [`StateKey::Custom`].
    pub fn parse(name: &str) -> Self {
        match name {
            "root" => StateKey::Root,
            "hover" => StateKey::Hover,
            "focus" => StateKey::Focus,
            "pressed" | "active" => StateKey::Pressed,
            "disabled" => StateKey::Disabled,
            other => StateKey::Custom(other.to_owned()),
        }
    }

    /// Text appended to the selector for this state's block.
    ///
    /// Custom keys starting with `:` or `[` are appended verbatim, so both
    /// `:checked` and `[variant="filled"]` work.
    pub fn selector_suffix(&self) -> String {
        match self {
            StateKey::Root => String::new(),
            StateKey::Hover => ":hover".into(),
            StateKey::Focus => ":focus".into(),
            StateKey::Pressed => ":pressed".into(),
            StateKey::Disabled => ":disabled".into(),
            StateKey::Custom(key) if key.starts_with(':') || key.starts_with('[') => key.clone(),
            StateKey::Custom(key) => format!(":{key}"),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, StateKey::Root)
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKey::Root => f.write_str("root"),
            StateKey::Hover => f.write_str("hover"),
            StateKey::Focus => f.write_str("focus"),
            StateKey::Pressed => f.write_str("pressed"),
            StateKey::Disabled => f.write_str("disabled"),
            StateKey::Custom(key) => f.write_str(key),
        }
    }
}

impl From<&str> for StateKey {
    fn from(name: &str) -> Self {
        StateKey::parse(name)
    }
}

/// Raw props per interaction state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateProps {
    states: BTreeMap<StateKey, RawProps>,
}

impl StateProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Props for the root state only.
    pub fn root(props: RawProps) -> Self {
        Self::new().with_state(StateKey::Root, props)
    }

    pub fn with_state(mut self, state: impl Into<StateKey>, props: RawProps) -> Self {
        self.set(state, props);
        self
    }

    /// Replace the props of `state`.
    pub fn set(&mut self, state: impl Into<StateKey>, props: RawProps) {
        self.states.insert(state.into(), props);
    }

    /// Layer `other` over `self`, state by state. Within a state, keys from
    /// `other` are appended and so take precedence.
    pub fn merge(mut self, other: StateProps) -> Self {
        for (state, props) in other.states {
            self.states.entry(state).or_default().extend(props);
        }
        self
    }

    pub fn get(&self, state: &StateKey) -> Option<&RawProps> {
        self.states.get(state)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &RawProps)> {
        self.states.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::value::PropValue;

    #[test]
    fn reinsert_moves_key_to_end() {
        let mut props = RawProps::new();
        props.insert("p", "md");
        props.insert("bg", "blue.6");
        props.insert("p", 4);
        let keys: Vec<&str> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["bg", "p"]);
        assert_eq!(props.get("p"), Some(&RawValue::Fixed(PropValue::Number(4.0))));
    }

    #[test]
    fn state_parse_and_alias() {
        assert_eq!(StateKey::parse("root"), StateKey::Root);
        assert_eq!(StateKey::parse("active"), StateKey::Pressed);
        assert_eq!(StateKey::parse("checked"), StateKey::Custom("checked".into()));
    }

    #[test]
    fn selector_suffixes() {
        assert_eq!(StateKey::Root.selector_suffix(), "");
        assert_eq!(StateKey::Pressed.selector_suffix(), ":pressed");
        assert_eq!(StateKey::parse("checked").selector_suffix(), ":checked");
        assert_eq!(StateKey::parse(":!enabled").selector_suffix(), ":!enabled");
        assert_eq!(
            StateKey::parse("[variant=\"filled\"]").selector_suffix(),
            "[variant=\"filled\"]"
        );
    }

    #[test]
    fn state_order() {
        let mut states = vec![
            StateKey::parse("zeta"),
            StateKey::Disabled,
            StateKey::parse("alpha"),
            StateKey::Hover,
            StateKey::Root,
            StateKey::Pressed,
            StateKey::Focus,
        ];
        states.sort();
        let names: Vec<String> = states.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec!["root", "hover", "focus", "pressed", "disabled", "alpha", "zeta"]
        );
    }

    #[test]
    fn merge_layers_per_state() {
        let defaults = StateProps::root(RawProps::from_iter([("p", "md"), ("bg", "blue.6")]))
            .with_state("hover", RawProps::from_iter([("bg", "blue.7")]));
        let user = StateProps::root(RawProps::from_iter([("p", "xl")]));

        let merged = defaults.merge(user);
        let root = merged.get(&StateKey::Root).unwrap();
        assert_eq!(root.get("p"), Some(&RawValue::from("xl")));
        assert_eq!(root.get("bg"), Some(&RawValue::from("blue.6")));
        assert!(merged.get(&StateKey::Hover).is_some());
    }
}
