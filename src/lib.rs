//! # poly-style
//!
//! Design-token resolution and state-aware stylesheet generation for native
//! desktop widgets.
//!
//! Component authors describe styles with Mantine's shorthand vocabulary
//! (`p`, `bg`, `radius`, ...), optionally per breakpoint tier and per
//! interaction state. poly-style resolves those props against an immutable
//! [`Theme`](theme::Theme), picks the values for the active tier, and emits
//! deterministic Qt-style stylesheet text, memoized per structural
//! fingerprint.
//!
//! ## Core Systems
//!
//! - **[`theme`]**: color families, token scales, breakpoints, TOML config, presets
//! - **[`style`]**: shorthand expansion, token resolution, cascade, QSS generation, cache
//! - **[`widget`]**: `StyledWidget` trait and builder-style prop layering
//! - **[`engine`]**: `ThemeProvider`, the active theme scope and render pipeline
//! - **[`responsive`]**: debounced breakpoint re-evaluation on resize
//! - **[`config`]**: engine settings (debounce window, indent)
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use poly_style::engine::ThemeProvider;
//! use poly_style::style::{RawProps, RawValue, StateProps};
//! use poly_style::theme::Theme;
//! use poly_style::widget::StyledWidget;
//!
//! struct Panel;
//!
//! impl StyledWidget for Panel {
//!     fn widget_type(&self) -> &str {
//!         "QFrame"
//!     }
//!
//!     fn default_styles(&self) -> StateProps {
//!         StateProps::root(
//!             RawProps::new()
//!                 .with("bg", "blue.6")
//!                 .with("p", RawValue::responsive([("base", "md"), ("lg", "xl")])),
//!         )
//!     }
//! }
//!
//! let provider = ThemeProvider::new(Arc::new(Theme::mantine()?));
//! let rendered = provider.render(&Panel, 1280.0)?;
//! assert_eq!(rendered.tier, "lg");
//! assert!(rendered.stylesheet.contains("padding: 32px;"));
//! # Ok::<(), poly_style::StyleError>(())
//! ```

// Foundation
pub mod config;
pub mod error;
pub mod theme;

// Style pipeline
pub mod style;

// Widget seam and provider
pub mod engine;
pub mod widget;

// Resize handling
pub mod responsive;

// Fixtures for tests and downstream snapshot tests
pub mod testing;

pub use error::StyleError;

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use poly_style_macros::props;
