//! Design tokens: scales, color families, breakpoints, and theme loading.

pub mod breakpoints;
pub mod config;
pub mod presets;
pub mod scale;
#[allow(clippy::module_inception)]
pub mod theme;

pub use breakpoints::{Breakpoint, BreakpointError, Breakpoints, Viewport, BASE_TIER};
pub use config::ThemeConfig;
pub use scale::{Scale, ScaleValue, Shades, TokenScale, SHADE_COUNT};
pub use theme::{Theme, ThemeBuilder, ThemeError, ThemeId, TokenError};
