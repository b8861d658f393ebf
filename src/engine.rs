//! Theme provider: the active theme and its stylesheet cache.
//!
//! A [`ThemeScope`] pairs one `Arc<Theme>` with the [`StyleCache`] for that
//! theme. The [`ThemeProvider`] swaps whole scopes under a lock, so a reader
//! always sees a theme together with the cache built from it.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;

use crate::config::EngineConfig;
use crate::error::StyleError;
use crate::responsive::watcher::WatchMessage;
use crate::responsive::{spawn_watcher, ResizeNotifier, TierChange, TierTracker};
use crate::style::cache::{Fingerprint, StyleCache};
use crate::style::property_set::StylePropertySet;
use crate::style::props::RawProps;
use crate::style::resolve::{expand, expand_states};
use crate::style::stylesheet::generate_with_indent;
use crate::theme::{Theme, ThemeConfig, ThemeError, ThemeId, TokenError};
use crate::widget::StyledWidget;

// ---------------------------------------------------------------------------
// RenderedStyle
// ---------------------------------------------------------------------------

/// Stylesheet text for one widget plus the tier it was generated for.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedStyle {
    pub stylesheet: Arc<str>,
    pub tier: String,
}

// ---------------------------------------------------------------------------
// ThemeScope
// ---------------------------------------------------------------------------

/// One theme and the cache of stylesheets generated from it.
#[derive(Debug)]
pub struct ThemeScope {
    theme: Arc<Theme>,
    cache: StyleCache,
    indent: usize,
}

impl ThemeScope {
    fn new(theme: Arc<Theme>, indent: usize) -> Self {
        Self {
            theme,
            cache: StyleCache::new(),
            indent,
        }
    }

    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    pub fn cache(&self) -> &StyleCache {
        &self.cache
    }

    /// Tier active at `width` under this scope's breakpoints.
    pub fn active_tier(&self, width: f32) -> &str {
        self.theme.breakpoints().active_tier(width)
    }

    /// Expand a raw prop bag against this scope's theme.
    pub fn expand(&self, raw: &RawProps) -> Result<StylePropertySet, TokenError> {
        expand(raw, &self.theme)
    }

    /// Run the full pipeline for `widget` at `width`.
    pub fn render<W: StyledWidget + ?Sized>(
        &self,
        widget: &W,
        width: f32,
    ) -> Result<RenderedStyle, StyleError> {
        let tier = self.active_tier(width).to_owned();
        self.render_at_tier(widget, &tier)
    }

    /// Run the full pipeline for `widget` at a known tier.
    pub fn render_at_tier<W: StyledWidget + ?Sized>(
        &self,
        widget: &W,
        tier: &str,
    ) -> Result<RenderedStyle, StyleError> {
        let states = expand_states(&widget.state_props(), &self.theme)?;
        let selector = widget.selector();
        let fingerprint =
            Fingerprint::new(widget.widget_type(), selector, states, self.theme.id(), tier);
        let stylesheet = self.cache.get_or_try_generate(&fingerprint, || {
            generate_with_indent(
                selector,
                fingerprint.states(),
                tier,
                self.theme.breakpoints(),
                self.indent,
            )
        })?;
        Ok(RenderedStyle {
            stylesheet,
            tier: tier.to_owned(),
        })
    }
}

// ---------------------------------------------------------------------------
// ThemeProvider
// ---------------------------------------------------------------------------

/// Owner of the active theme scope.
///
/// Readers clone the current `Arc<ThemeScope>` and work against it without
/// holding the lock; a theme switch installs a fresh scope, invalidates the
/// previous cache and hands the new breakpoints to every watcher spawned by
/// [`ThemeProvider::watch`].
#[derive(Debug)]
pub struct ThemeProvider {
    scope: RwLock<Arc<ThemeScope>>,
    watchers: Mutex<Vec<mpsc::WeakUnboundedSender<WatchMessage>>>,
    config: EngineConfig,
}

impl ThemeProvider {
    /// Create a provider with the default engine config.
    pub fn new(theme: Arc<Theme>) -> Self {
        Self::with_config(theme, EngineConfig::default())
    }

    pub fn with_config(theme: Arc<Theme>, config: EngineConfig) -> Self {
        tracing::debug!(theme = %theme.name(), id = %theme.id(), "theme provider created");
        let scope = Arc::new(ThemeScope::new(theme, config.indent));
        Self {
            scope: RwLock::new(scope),
            watchers: Mutex::new(Vec::new()),
            config,
        }
    }

    /// Validate `config` into a theme and wrap it. Fails fast on any
    /// invalid theme.
    pub fn from_config(config: &ThemeConfig, engine: EngineConfig) -> Result<Self, ThemeError> {
        let theme = Theme::try_from(config)?;
        Ok(Self::with_config(Arc::new(theme), engine))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The current scope.
    pub fn scope(&self) -> Arc<ThemeScope> {
        self.scope.read().clone()
    }

    pub fn theme(&self) -> Arc<Theme> {
        Arc::clone(&self.scope.read().theme)
    }

    /// Install an already validated theme.
    pub fn set_theme(&self, theme: Arc<Theme>) -> ThemeId {
        let id = theme.id();
        let next = Arc::new(ThemeScope::new(theme, self.config.indent));
        let previous = std::mem::replace(&mut *self.scope.write(), next);
        previous.cache.invalidate();
        tracing::debug!(from = %previous.theme.id(), to = %id, "theme switched");
        self.broadcast_breakpoints();
        id
    }

    /// Push the current breakpoints to live watchers and forget stopped ones.
    fn broadcast_breakpoints(&self) {
        let mut watchers = self.watchers.lock();
        let breakpoints = self.scope().theme.breakpoints().clone();
        watchers.retain(|weak| match weak.upgrade() {
            Some(tx) => tx.send(WatchMessage::Breakpoints(breakpoints.clone())).is_ok(),
            None => false,
        });
    }

    /// Validate `config` and install it. On failure the current theme stays
    /// active and the error is returned.
    pub fn switch_theme(&self, config: &ThemeConfig) -> Result<ThemeId, ThemeError> {
        match Theme::try_from(config) {
            Ok(theme) => Ok(self.set_theme(Arc::new(theme))),
            Err(err) => {
                tracing::warn!(error = %err, "theme switch rejected, keeping current theme");
                Err(err)
            }
        }
    }

    /// Render `widget` at `width` against the current scope.
    pub fn render<W: StyledWidget + ?Sized>(
        &self,
        widget: &W,
        width: f32,
    ) -> Result<RenderedStyle, StyleError> {
        self.scope().render(widget, width)
    }

    /// A tier tracker seeded with the current breakpoints.
    ///
    /// The tracker is a snapshot; it does not follow theme switches. Use
    /// [`ThemeProvider::watch`] for that.
    pub fn tracker(&self, width: f32) -> TierTracker {
        TierTracker::new(self.scope().theme.breakpoints().clone(), width)
    }

    /// Spawn a debounced resize watcher that follows this provider's theme.
    ///
    /// Uses the configured debounce window. Must be called inside a tokio
    /// runtime. The provider holds only a weak handle, so dropping every
    /// returned notifier still stops the watcher.
    pub fn watch(&self, width: f32) -> (ResizeNotifier, mpsc::UnboundedReceiver<TierChange>) {
        let mut watchers = self.watchers.lock();
        let (notifier, changes) = spawn_watcher(self.tracker(width), self.config.debounce());
        watchers.push(notifier.downgrade());
        (notifier, changes)
    }
}
