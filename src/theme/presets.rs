//! Built-in theme presets.

use indexmap::IndexMap;

use crate::theme::config::ThemeConfig;
use crate::theme::scale::ScaleValue;
use crate::theme::theme::{Theme, ThemeError};

const MANTINE_COLORS: [(&str, [&str; 10]); 14] = [
    ("dark", ["#c9c9c9", "#b8b8b8", "#828282", "#696969", "#424242", "#3b3b3b", "#2e2e2e", "#242424", "#1f1f1f", "#141414"]),
    ("gray", ["#f8f9fa", "#f1f3f5", "#e9ecef", "#dee2e6", "#ced4da", "#adb5bd", "#868e96", "#495057", "#343a40", "#212529"]),
    ("red", ["#fff5f5", "#ffe3e3", "#ffc9c9", "#ffa8a8", "#ff8787", "#ff6b6b", "#fa5252", "#f03e3e", "#e03131", "#c92a2a"]),
    ("pink", ["#fff0f6", "#ffdeeb", "#fcc2d7", "#faa2c1", "#f783ac", "#f06595", "#e64980", "#d6336c", "#c2255c", "#a61e4d"]),
    ("grape", ["#f8f0fc", "#f3d9fa", "#eebefa", "#e599f7", "#da77f2", "#cc5de8", "#be4bdb", "#ae3ec9", "#9c36b5", "#862e9c"]),
    ("violet", ["#f3f0ff", "#e5dbff", "#d0bfff", "#b197fc", "#9775fa", "#845ef7", "#7950f2", "#7048e8", "#6741d9", "#5f3dc4"]),
    ("indigo", ["#edf2ff", "#dbe4ff", "#bac8ff", "#91a7ff", "#748ffc", "#5c7cfa", "#4c6ef5", "#4263eb", "#3b5bdb", "#364fc7"]),
    ("blue", ["#e7f5ff", "#d0ebff", "#a5d8ff", "#74c0fc", "#4dabf7", "#339af0", "#228be6", "#1c7ed6", "#1971c2", "#1864ab"]),
    ("cyan", ["#e3fafc", "#c5f6fa", "#99e9f2", "#66d9e8", "#3bc9db", "#22b8cf", "#15aabf", "#1098ad", "#0c8599", "#0b7285"]),
    ("teal", ["#e6fcf5", "#c3fae8", "#96f2d7", "#63e6be", "#38d9a9", "#20c997", "#12b886", "#0ca678", "#099268", "#087f5b"]),
    ("green", ["#ebfbee", "#d3f9d8", "#b2f2bb", "#8ce99a", "#69db7c", "#51cf66", "#40c057", "#37b24d", "#2f9e44", "#2b8a3e"]),
    ("lime", ["#f4fce3", "#e9fac8", "#d8f5a2", "#c0eb75", "#a9e34b", "#94d82d", "#82c91e", "#74b816", "#66a80f", "#5c940d"]),
    ("yellow", ["#fff9db", "#fff3bf", "#ffec99", "#ffe066", "#ffd43b", "#fcc419", "#fab005", "#f59f00", "#f08c00", "#e67700"]),
    ("orange", ["#fff4e6", "#ffe8cc", "#ffd8a8", "#ffc078", "#ffa94d", "#ff922b", "#fd7e14", "#f76707", "#e8590c", "#d9480f"]),
];

fn numeric(entries: &[(&str, f64)]) -> IndexMap<String, ScaleValue> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_owned(), ScaleValue::Number(*value)))
        .collect()
}

fn textual(entries: &[(&str, &str)]) -> IndexMap<String, ScaleValue> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_owned(), ScaleValue::Text((*value).to_owned())))
        .collect()
}

impl ThemeConfig {
    /// Mantine's default light theme: open-color palette, `xs`..`xl` scales,
    /// and its em-based breakpoints expressed in pixels.
    pub fn mantine() -> Self {
        ThemeConfig {
            name: Some("mantine".into()),
            primary_color: Some("blue".into()),
            primary_shade: Some(6),
            colors: MANTINE_COLORS
                .iter()
                .map(|(family, shades)| {
                    let shades = shades.iter().map(|s| (*s).to_owned()).collect();
                    ((*family).to_owned(), shades)
                })
                .collect(),
            spacing: numeric(&[("xs", 10.0), ("sm", 12.0), ("md", 16.0), ("lg", 20.0), ("xl", 32.0)]),
            radii: numeric(&[("xs", 2.0), ("sm", 4.0), ("md", 8.0), ("lg", 16.0), ("xl", 32.0)]),
            shadows: textual(&[
                ("xs", "0 1px 3px rgba(0, 0, 0, 0.05), 0 1px 2px rgba(0, 0, 0, 0.1)"),
                ("sm", "0 1px 3px rgba(0, 0, 0, 0.05), 0 10px 15px -5px rgba(0, 0, 0, 0.05)"),
                ("md", "0 1px 3px rgba(0, 0, 0, 0.05), 0 20px 25px -5px rgba(0, 0, 0, 0.05)"),
                ("lg", "0 1px 3px rgba(0, 0, 0, 0.05), 0 28px 23px -7px rgba(0, 0, 0, 0.05)"),
                ("xl", "0 1px 3px rgba(0, 0, 0, 0.05), 0 36px 28px -7px rgba(0, 0, 0, 0.04)"),
            ]),
            font_sizes: numeric(&[("xs", 12.0), ("sm", 14.0), ("md", 16.0), ("lg", 18.0), ("xl", 20.0)]),
            font_weights: numeric(&[
                ("regular", 400.0),
                ("medium", 500.0),
                ("semibold", 600.0),
                ("bold", 700.0),
            ]),
            line_heights: numeric(&[("xs", 1.4), ("sm", 1.45), ("md", 1.55), ("lg", 1.6), ("xl", 1.65)]),
            breakpoints: [
                ("base", 0.0),
                ("xs", 576.0),
                ("sm", 768.0),
                ("md", 992.0),
                ("lg", 1200.0),
                ("xl", 1408.0),
            ]
            .into_iter()
            .map(|(name, width)| (name.to_owned(), width))
            .collect(),
        }
    }
}

impl Theme {
    /// Build the default Mantine theme.
    pub fn mantine() -> Result<Self, ThemeError> {
        Theme::try_from(ThemeConfig::mantine())
    }
}
