//! StyledWidget trait: selector, default state props, author overrides.
//!
//! A [`StyledWidget`] describes how one native widget is styled: its type
//! name, the selector its stylesheet is scoped to, its built-in per-state
//! props, and any props supplied by whoever placed it. The
//! [`StyledWidgetExt`] trait adds builder-style methods for layering extra
//! props on top of any widget.

use crate::style::props::{RawProps, StateKey, StateProps};

// ---------------------------------------------------------------------------
// StyledWidget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every styled component.
///
/// Object-safe: all methods take `&self` and return owned values or borrows
/// of `self`.
pub trait StyledWidget {
    /// The component type name (e.g. "Button", "Stack").
    ///
    /// Part of the cache fingerprint.
    fn widget_type(&self) -> &str;

    /// Selector the generated stylesheet is scoped to. Defaults to the
    /// widget type.
    fn selector(&self) -> &str {
        self.widget_type()
    }

    /// Built-in props per state. Applied first.
    fn default_styles(&self) -> StateProps {
        StateProps::new()
    }

    /// Props supplied for this instance. Layered over the defaults.
    fn style_props(&self) -> StateProps {
        StateProps::new()
    }

    /// Defaults merged with instance props.
    fn state_props(&self) -> StateProps {
        self.default_styles().merge(self.style_props())
    }
}

// ---------------------------------------------------------------------------
// StyledWidgetExt
// ---------------------------------------------------------------------------

/// Builder-style methods for attaching props to a widget.
///
/// Automatically implemented for all types that implement `StyledWidget`.
pub trait StyledWidgetExt: StyledWidget {
    /// Wrap this widget with extra root-state props.
    fn with_props(self, props: RawProps) -> Styled<Self>
    where
        Self: Sized,
    {
        Styled::new(self).add_props(props)
    }

    /// Wrap this widget with extra props for one state.
    fn with_state_props(self, state: impl Into<StateKey>, props: RawProps) -> Styled<Self>
    where
        Self: Sized,
    {
        Styled::new(self).add_state_props(state, props)
    }

    /// Wrap this widget with a different selector.
    fn with_selector(self, selector: impl Into<String>) -> Styled<Self>
    where
        Self: Sized,
    {
        Styled::new(self).set_selector(selector)
    }
}

impl<T: StyledWidget> StyledWidgetExt for T {}

// ---------------------------------------------------------------------------
// Styled
// ---------------------------------------------------------------------------

/// A widget with extra props and an optional selector override.
///
/// Created by [`StyledWidgetExt`] methods. Delegates everything else to the
/// inner widget.
#[derive(Debug, Clone)]
pub struct Styled<W> {
    pub widget: W,
    pub selector: Option<String>,
    pub props: StateProps,
}

impl<W: StyledWidget> Styled<W> {
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            selector: None,
            props: StateProps::new(),
        }
    }

    /// Add root-state props (chainable). Later calls win.
    pub fn add_props(self, props: RawProps) -> Self {
        self.add_state_props(StateKey::Root, props)
    }

    /// Add props for `state` (chainable).
    pub fn add_state_props(mut self, state: impl Into<StateKey>, props: RawProps) -> Self {
        let extra = StateProps::new().with_state(state, props);
        self.props = std::mem::take(&mut self.props).merge(extra);
        self
    }

    /// Override the selector (chainable).
    pub fn set_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }
}

impl<W: StyledWidget> StyledWidget for Styled<W> {
    fn widget_type(&self) -> &str {
        self.widget.widget_type()
    }

    fn selector(&self) -> &str {
        self.selector.as_deref().unwrap_or_else(|| self.widget.selector())
    }

    fn default_styles(&self) -> StateProps {
        self.widget.default_styles()
    }

    fn style_props(&self) -> StateProps {
        self.widget.style_props().merge(self.props.clone())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
