//! URL resolution for menu link targets
//!
//! Menus name destinations either as literal URLs or as application routes.
//! [`UrlResolver`] is the seam between the two: widgets hand every
//! [`LinkTarget`] to the resolver and emit whatever comes back. Applications
//! with a real router implement the trait; everything else gets
//! [`PrefixResolver`].

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::menu::LinkTarget;

/// Characters percent-encoded inside query keys and values.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%');

/// Maps link targets to concrete URLs.
pub trait UrlResolver {
    /// Resolve a target to the exact string emitted into `href`.
    fn resolve(&self, target: &LinkTarget) -> String;

    /// URL of the application home page, used by brand links.
    fn home_url(&self) -> String {
        "/".to_string()
    }
}

impl<T: UrlResolver + ?Sized> UrlResolver for &T {
    fn resolve(&self, target: &LinkTarget) -> String {
        (**self).resolve(target)
    }

    fn home_url(&self) -> String {
        (**self).home_url()
    }
}

/// Route resolution by path prefix.
///
/// `route: reports/view` with base `/admin` becomes `/admin/reports/view`;
/// params append as a percent-encoded query string in sorted key order.
/// Literal URL targets pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixResolver {
    base: String,
    home: String,
}

impl PrefixResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim_end_matches('/').to_string();
        let home = if base.is_empty() {
            "/".to_string()
        } else {
            base.clone()
        };
        Self { base, home }
    }

    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }
}

impl Default for PrefixResolver {
    fn default() -> Self {
        Self::new("")
    }
}

impl UrlResolver for PrefixResolver {
    fn resolve(&self, target: &LinkTarget) -> String {
        match target {
            LinkTarget::Url(url) => url.clone(),
            LinkTarget::Route { route, params } => {
                let path = route.trim_start_matches('/');
                let mut url = format!("{}/{}", self.base, path);
                if !params.is_empty() {
                    let query = params
                        .iter()
                        .map(|(key, value)| {
                            format!(
                                "{}={}",
                                utf8_percent_encode(key, QUERY),
                                utf8_percent_encode(value, QUERY)
                            )
                        })
                        .collect::<Vec<_>>()
                        .join("&");
                    url.push('?');
                    url.push_str(&query);
                }
                url
            }
        }
    }

    fn home_url(&self) -> String {
        self.home.clone()
    }
}
