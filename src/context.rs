//! Shared render-time state
//!
//! One [`RenderContext`] travels through every widget render on a page. It
//! resolves link targets, decides which menu items count as active, and
//! collects the asset bundles those widgets depend on.

use crate::assets::AssetRegistry;
use crate::menu::{LinkTarget, MenuItem};
use crate::url::{PrefixResolver, UrlResolver};

/// State threaded through widget rendering.
///
/// Active detection runs in precedence order: an item's explicit
/// `active: Some(..)` wins, then a caller-installed predicate, then
/// comparison of the item's resolved URL against [`current_url`]. With none
/// of the three, nothing is active.
///
/// [`current_url`]: RenderContext::with_current_url
pub struct RenderContext<'a> {
    urls: Box<dyn UrlResolver + 'a>,
    current_url: Option<String>,
    active_fn: Option<Box<dyn Fn(&MenuItem) -> bool + 'a>>,
    /// Bundles registered by widgets rendered through this context.
    pub assets: AssetRegistry,
}

impl<'a> RenderContext<'a> {
    pub fn new(urls: impl UrlResolver + 'a) -> Self {
        Self {
            urls: Box::new(urls),
            current_url: None,
            active_fn: None,
            assets: AssetRegistry::new(),
        }
    }

    /// The URL of the page being rendered, compared against resolved item
    /// URLs for active detection.
    pub fn with_current_url(mut self, url: impl Into<String>) -> Self {
        self.current_url = Some(url.into());
        self
    }

    /// Install a predicate that decides whether an item is active. Takes
    /// precedence over URL comparison.
    pub fn with_active_fn(mut self, f: impl Fn(&MenuItem) -> bool + 'a) -> Self {
        self.active_fn = Some(Box::new(f));
        self
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn resolve(&self, target: &LinkTarget) -> String {
        self.urls.resolve(target)
    }

    pub fn home_url(&self) -> String {
        self.urls.home_url()
    }

    /// Whether `item` should render as the active link.
    pub fn is_active(&self, item: &MenuItem) -> bool {
        if let Some(explicit) = item.active {
            return explicit;
        }
        if let Some(f) = &self.active_fn {
            return f(item);
        }
        match (&self.current_url, &item.url) {
            (Some(current), Some(target)) => self.urls.resolve(target) == *current,
            _ => false,
        }
    }
}

impl Default for RenderContext<'static> {
    fn default() -> Self {
        Self::new(PrefixResolver::default())
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("current_url", &self.current_url)
            .field("assets", &self.assets)
            .finish_non_exhaustive()
    }
}
