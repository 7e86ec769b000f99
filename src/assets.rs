//! Asset bundle registration
//!
//! Rendered widgets depend on the AdminLTE stylesheet and script being on the
//! page. Widgets record that dependency by registering a bundle with the
//! [`AssetRegistry`] carried in the render context; the page layer asks the
//! registry for `<head>` markup once, after all widgets have rendered.

use tracing::debug;

use crate::html::escape;

/// A named set of stylesheet and script URLs.
#[derive(Debug, PartialEq, Eq)]
pub struct AssetBundle {
    pub name: &'static str,
    pub css: &'static [&'static str],
    pub js: &'static [&'static str],
}

/// The AdminLTE theme bundle registered by every widget in this crate.
pub fn admin_lte() -> &'static AssetBundle {
    static ADMIN_LTE: AssetBundle = AssetBundle {
        name: "adminlte",
        css: &["/assets/adminlte/css/adminlte.min.css"],
        js: &["/assets/adminlte/js/adminlte.min.js"],
    };
    &ADMIN_LTE
}

/// Collects bundles across renders, first registration wins.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    bundles: Vec<&'static AssetBundle>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundle. Returns `false` if a bundle with the same name is
    /// already present.
    pub fn register(&mut self, bundle: &'static AssetBundle) -> bool {
        if self.is_registered(bundle.name) {
            return false;
        }
        debug!(bundle = bundle.name, "registering asset bundle");
        self.bundles.push(bundle);
        true
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.bundles.iter().any(|b| b.name == name)
    }

    pub fn bundles(&self) -> &[&'static AssetBundle] {
        &self.bundles
    }

    /// `<link>` and `<script>` tags for everything registered, stylesheets
    /// first, one element per line.
    pub fn head_markup(&self) -> String {
        let mut lines = Vec::new();
        for bundle in &self.bundles {
            for css in bundle.css {
                lines.push(format!(r#"<link rel="stylesheet" href="{}">"#, escape(css)));
            }
        }
        for bundle in &self.bundles {
            for js in bundle.js {
                lines.push(format!(r#"<script src="{}"></script>"#, escape(js)));
            }
        }
        lines.join("\n")
    }
}
