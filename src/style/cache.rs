//! Memoized stylesheet text keyed by structural fingerprint.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::style::property_set::ComponentStateStyles;
use crate::theme::{ThemeId, BASE_TIER};

/// Everything generated stylesheet text depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    widget_type: String,
    selector: String,
    states: ComponentStateStyles,
    theme: ThemeId,
    tier: String,
}

impl Fingerprint {
    /// Build a fingerprint. When no state holds a responsive value the tier
    /// cannot change the output, so it is recorded as `base`.
    pub fn new(
        widget_type: impl Into<String>,
        selector: impl Into<String>,
        states: ComponentStateStyles,
        theme: ThemeId,
        tier: &str,
    ) -> Self {
        let tier = if states.has_responsive() { tier } else { BASE_TIER };
        Self {
            widget_type: widget_type.into(),
            selector: selector.into(),
            states,
            theme,
            tier: tier.to_owned(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn states(&self) -> &ComponentStateStyles {
        &self.states
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    pub fn tier(&self) -> &str {
        &self.tier
    }
}

/// Hit and miss counts since creation or the last invalidation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: FxHashMap<Fingerprint, Arc<str>>,
    hits: u64,
    misses: u64,
}

/// Stylesheet cache.
///
/// One lock guards the map and is held while a missing entry is generated,
/// so a fingerprint is generated at most once. Generators must not call back
/// into the same cache.
#[derive(Debug, Default)]
pub struct StyleCache {
    inner: Mutex<CacheInner>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached text for `fingerprint`, generating it on a miss.
    pub fn get_or_generate<F>(&self, fingerprint: &Fingerprint, generate: F) -> Arc<str>
    where
        F: FnOnce() -> String,
    {
        let result: Result<_, std::convert::Infallible> =
            self.get_or_try_generate(fingerprint, || Ok(generate()));
        match result {
            Ok(text) => text,
            Err(never) => match never {},
        }
    }

    /// Like [`StyleCache::get_or_generate`] for fallible generators. Errors
    /// are returned as-is and nothing is cached.
    pub fn get_or_try_generate<E, F>(
        &self,
        fingerprint: &Fingerprint,
        generate: F,
    ) -> Result<Arc<str>, E>
    where
        F: FnOnce() -> Result<String, E>,
    {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        if let Some(text) = inner.entries.get(fingerprint) {
            let text = Arc::clone(text);
            inner.hits += 1;
            tracing::trace!(
                selector = %fingerprint.selector,
                tier = %fingerprint.tier,
                "stylesheet cache hit"
            );
            return Ok(text);
        }

        inner.misses += 1;
        tracing::trace!(
            selector = %fingerprint.selector,
            tier = %fingerprint.tier,
            "stylesheet cache miss"
        );
        let text: Arc<str> = Arc::from(generate()?);
        inner.entries.insert(fingerprint.clone(), Arc::clone(&text));
        Ok(text)
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<Arc<str>> {
        self.inner.lock().entries.get(fingerprint).cloned()
    }

    /// Drop every entry and reset the counters.
    pub fn invalidate(&self) {
        let mut inner = self.inner.lock();
        *inner = CacheInner::default();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            entries: inner.entries.len(),
        }
    }
}
