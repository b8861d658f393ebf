//! Test fixtures: a small, fully valid theme.
//!
//! Used by the crate's own tests and available to downstream crates that want
//! a deterministic theme for snapshot tests of their components.

use crate::theme::{Theme, ThemeBuilder};

/// Blue shades of the fixture theme, lightest first.
pub const FIXTURE_BLUE: [&str; 10] = [
    "#e7f5ff", "#d0ebff", "#a5d8ff", "#74c0fc", "#4dabf7", "#339af0", "#1c7ed6", "#1971c2",
    "#1864ab", "#145591",
];

/// Gray shades of the fixture theme, lightest first.
pub const FIXTURE_GRAY: [&str; 10] = [
    "#f8f9fa", "#f1f3f5", "#e9ecef", "#dee2e6", "#ced4da", "#adb5bd", "#868e96", "#495057",
    "#343a40", "#212529",
];

/// Red shades of the fixture theme, lightest first.
pub const FIXTURE_RED: [&str; 10] = [
    "#fff5f5", "#ffe3e3", "#ffc9c9", "#ffa8a8", "#ff8787", "#ff6b6b", "#fa5252", "#f03e3e",
    "#e03131", "#c92a2a",
];

/// Builder for the fixture theme, for tests that tweak one detail.
///
/// - colors: `blue` (primary, shade 6), `gray`, `red`
/// - spacing: xs 8, sm 12, md 16, lg 24, xl 32
/// - breakpoints: base 0, sm 576, md 768, lg 992
pub fn fixture_builder() -> ThemeBuilder {
    Theme::builder("fixture")
        .color("blue", &FIXTURE_BLUE)
        .color("gray", &FIXTURE_GRAY)
        .color("red", &FIXTURE_RED)
        .primary_color("blue")
        .primary_shade(6)
        .spacing("xs", 8)
        .spacing("sm", 12)
        .spacing("md", 16)
        .spacing("lg", 24)
        .spacing("xl", 32)
        .radius("sm", 4)
        .radius("md", 8)
        .radius("xl", 32)
        .shadow("sm", "0 1px 3px rgba(0, 0, 0, 0.1)")
        .shadow("md", "0 4px 12px rgba(0, 0, 0, 0.15)")
        .font_size("sm", 14)
        .font_size("md", 16)
        .font_weight("regular", 400)
        .font_weight("bold", 700)
        .line_height("sm", 1.4)
        .line_height("md", 1.55)
        .breakpoint("base", 0.0)
        .breakpoint("sm", 576.0)
        .breakpoint("md", 768.0)
        .breakpoint("lg", 992.0)
}

/// The fixture theme. Every call builds a new theme with a new id.
pub fn fixture_theme() -> Theme {
    match fixture_builder().build() {
        Ok(theme) => theme,
        Err(err) => panic!("fixture theme is invalid: {err}"),
    }
}
