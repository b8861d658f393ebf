//! State-variant stylesheet generation.
//!
//! Produces one QSS block per state, scoped to a selector. Root becomes the
//! bare selector; every other state becomes `selector<suffix>` and carries
//! root's properties merged with the state's overrides, so a block never
//! depends on another block to be complete.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::style::cascade::cascade;
use crate::style::property_set::ComponentStateStyles;
use crate::theme::Breakpoints;

/// Indent used when none is configured.
pub const DEFAULT_INDENT: usize = 4;

/// Errors from stylesheet generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("no root state for selector `{selector}`")]
    MissingRootState { selector: String },
}

/// Generate stylesheet text for `selector` at `tier` with the default indent.
pub fn generate(
    selector: &str,
    states: &ComponentStateStyles,
    tier: &str,
    breakpoints: &Breakpoints,
) -> Result<String, GenerateError> {
    generate_with_indent(selector, states, tier, breakpoints, DEFAULT_INDENT)
}

/// Generate stylesheet text, indenting declarations by `indent` spaces.
///
/// Output is byte-identical for equal input: blocks follow state order and
/// declarations are sorted by property name.
pub fn generate_with_indent(
    selector: &str,
    states: &ComponentStateStyles,
    tier: &str,
    breakpoints: &Breakpoints,
    indent: usize,
) -> Result<String, GenerateError> {
    let root = states.root().ok_or_else(|| GenerateError::MissingRootState {
        selector: selector.to_owned(),
    })?;
    let root = cascade(root, tier, breakpoints);
    let pad = " ".repeat(indent);

    let mut out = String::new();
    for (state, set) in states.iter() {
        let declarations = if state.is_root() {
            root.clone()
        } else {
            let mut merged = root.clone();
            merged.extend(cascade(set, tier, breakpoints));
            merged
        };
        if !out.is_empty() {
            out.push('\n');
        }
        let block_selector = format!("{selector}{}", state.selector_suffix());
        write_block(&mut out, &block_selector, &declarations, &pad);
    }
    Ok(out)
}

fn write_block(
    out: &mut String,
    selector: &str,
    declarations: &BTreeMap<String, String>,
    pad: &str,
) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{selector} {{");
    for (property, value) in declarations {
        let _ = writeln!(out, "{pad}{property}: {value};");
    }
    out.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::property_set::{PropertyValue, StylePropertySet};
    use crate::style::props::StateKey;
    use crate::testing::fixture_theme;
    use pretty_assertions::assert_eq;

    fn button_styles() -> ComponentStateStyles {
        let root = StylePropertySet::from_iter([
            ("background-color", "#1c7ed6"),
            ("color", "#fff"),
            ("border-radius", "8px"),
        ]);
        let hover = StylePropertySet::from_iter([("background-color", "#1971c2")]);
        let disabled = StylePropertySet::from_iter([("color", "#adb5bd")]);
        ComponentStateStyles::new()
            .with_state(StateKey::Disabled, disabled)
            .with_state(StateKey::Hover, hover)
            .with_state(StateKey::Root, root)
    }

    #[test]
    fn blocks_in_state_order_with_merged_root() {
        let theme = fixture_theme();
        let qss = generate("QPushButton", &button_styles(), "base", theme.breakpoints()).unwrap();
        insta::assert_snapshot!(qss, @r"
        QPushButton {
            background-color: #1c7ed6;
            border-radius: 8px;
            color: #fff;
        }

        QPushButton:hover {
            background-color: #1971c2;
            border-radius: 8px;
            color: #fff;
        }

        QPushButton:disabled {
            background-color: #1c7ed6;
            border-radius: 8px;
            color: #adb5bd;
        }
        ");
    }

    #[test]
    fn output_is_deterministic() {
        let theme = fixture_theme();
        let a = generate("QPushButton", &button_styles(), "md", theme.breakpoints()).unwrap();
        let b = generate("QPushButton", &button_styles(), "md", theme.breakpoints()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_root_is_an_error() {
        let theme = fixture_theme();
        let states = ComponentStateStyles::new()
            .with_state(StateKey::Hover, StylePropertySet::from_iter([("color", "red")]));
        let err = generate("QLabel", &states, "base", theme.breakpoints()).unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingRootState {
                selector: "QLabel".into()
            }
        );
    }

    #[test]
    fn responsive_values_cascade_to_tier() {
        let theme = fixture_theme();
        let padding = PropertyValue::Responsive(
            [("base", "16px"), ("lg", "24px")]
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        );
        let mut root = StylePropertySet::new();
        root.insert("padding", padding);
        let states = ComponentStateStyles::new().with_state(StateKey::Root, root);

        let small = generate_with_indent("QFrame", &states, "md", theme.breakpoints(), 2).unwrap();
        assert_eq!(small, "QFrame {\n  padding: 16px;\n}\n");
        let large = generate_with_indent("QFrame", &states, "lg", theme.breakpoints(), 2).unwrap();
        assert_eq!(large, "QFrame {\n  padding: 24px;\n}\n");
    }

    #[test]
    fn custom_states_sort_after_builtins() {
        let theme = fixture_theme();
        let states = ComponentStateStyles::new()
            .with_state(StateKey::Root, StylePropertySet::from_iter([("color", "#000")]))
            .with_state("[variant=\"filled\"]", StylePropertySet::from_iter([("color", "#fff")]))
            .with_state("checked", StylePropertySet::from_iter([("color", "#1c7ed6")]))
            .with_state(StateKey::Focus, StylePropertySet::new());
        let qss =
            generate_with_indent("QCheckBox", &states, "base", theme.breakpoints(), 0).unwrap();
        let selectors: Vec<&str> = qss
            .lines()
            .filter(|line| line.ends_with('{'))
            .collect();
        assert_eq!(
            selectors,
            vec![
                "QCheckBox {",
                "QCheckBox:focus {",
                "QCheckBox[variant=\"filled\"] {",
                "QCheckBox:checked {",
            ]
        );
    }
}
