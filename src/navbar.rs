//! Sidebar container widget
//!
//! [`SideNavBar`] renders the `<aside>` chrome around sidebar content: theme
//! classes, an optional brand block, and the scroll wrapper. It is a
//! begin/end pair rather than a single render call so arbitrary content
//! (usually a [`SideNav`](crate::SideNav), but anything goes) can sit inside.
//!
//! [`begin`](SideNavBar::begin) returns an [`OpenSideNavBar`] guard; the
//! container is only well-formed once [`end`](OpenSideNavBar::end) consumes
//! it. The guard is `#[must_use]`, so dropping a sidebar open is a compiler
//! warning instead of broken markup in production.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::assets;
use crate::context::RenderContext;
use crate::html::{self, Attrs};
use crate::menu::{null_as_default, LinkTarget};
use crate::theme;

/// Where the brand block links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BrandUrl {
    /// The resolver's home URL.
    #[default]
    Home,
    /// No link at all; the brand renders as a bare `<span>`.
    None,
    /// An explicit target.
    To(LinkTarget),
}

impl BrandUrl {
    fn is_home(&self) -> bool {
        matches!(self, BrandUrl::Home)
    }
}

/// The brand block at the top of the sidebar.
///
/// An `image` replaces the `label` inside the brand text span. `custom` is an
/// escape hatch: when set, its markup is emitted verbatim and every other
/// field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    /// Brand text. Not HTML-escaped; escape upstream if it carries user input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Logo image source. Overrides `label`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Attributes for the `<img>` element.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub image_options: Attrs,

    /// Attributes for the brand text `<span>`.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub text_options: Attrs,

    /// Attributes for the brand `<a>` link.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub link_options: Attrs,

    /// Link destination. In config input, a missing key means [`BrandUrl::Home`]
    /// and an explicit `null` means [`BrandUrl::None`].
    #[serde(default, skip_serializing_if = "BrandUrl::is_home")]
    pub url: BrandUrl,

    /// Complete brand markup, emitted verbatim instead of the assembled block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
}

/// Value of the container's `data-bs-theme` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Renders the sidebar container chrome.
#[derive(Debug, Clone, Default)]
pub struct SideNavBar {
    /// The brand block, if any.
    pub brand: BrandConfig,
    /// Attributes for the container element.
    pub options: Attrs,
    /// Container tag name override. Empty means `aside`.
    pub tag: String,
    /// Theme attribute applied unless the caller set one.
    pub theme: ThemeMode,
}

/// Proof of an open container; closing it emits the matching end tags.
#[must_use = "the container stays unclosed until end() is called"]
#[derive(Debug)]
pub struct OpenSideNavBar {
    tag: String,
}

impl SideNavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(brand: BrandConfig) -> Self {
        Self {
            brand,
            ..Self::default()
        }
    }

    pub fn with_brand(mut self, brand: BrandConfig) -> Self {
        self.brand = brand;
        self
    }

    pub fn with_options(mut self, options: Attrs) -> Self {
        self.options = options;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    fn tag_name(&self) -> &str {
        if self.tag.is_empty() {
            "aside"
        } else {
            &self.tag
        }
    }

    /// Open the container: container tag, brand block, scroll wrapper. Each
    /// element lands on its own line in `out`.
    pub fn begin(&self, ctx: &RenderContext<'_>, out: &mut String) -> OpenSideNavBar {
        debug!(tag = self.tag_name(), "opening sidebar container");
        let mut container = self.options.clone();
        if container.classes().is_empty() {
            container.add_class(theme::classes::APP_SIDEBAR);
            container.add_class(theme::classes::BG_DARK);
            container.add_class(theme::classes::SHADOW);
        } else {
            container.add_class(theme::classes::APP_SIDEBAR);
        }
        if container.get("data-bs-theme").is_none() {
            container.set_data("bs-theme", self.theme.as_str());
        }

        out.push_str(&html::begin_tag(self.tag_name(), &container));
        out.push('\n');

        let brand = self.render_brand(ctx);
        if !brand.is_empty() {
            out.push_str(&html::tag(
                "div",
                &brand,
                &Attrs::from_class(theme::classes::SIDEBAR_BRAND),
            ));
            out.push('\n');
        }

        out.push_str(&html::begin_tag(
            "div",
            &Attrs::from_class(theme::classes::SIDEBAR_WRAPPER),
        ));
        out.push('\n');

        OpenSideNavBar {
            tag: self.tag_name().to_string(),
        }
    }

    /// Render the whole container around `content` in one call.
    ///
    /// Content is placed inside the wrapper and given a trailing newline if
    /// it lacks one, keeping the line-per-element shape of [`begin`].
    ///
    /// [`begin`]: SideNavBar::begin
    pub fn render(&self, content: &str, ctx: &mut RenderContext<'_>) -> String {
        let mut out = String::new();
        let open = self.begin(ctx, &mut out);
        out.push_str(content);
        if !content.is_empty() && !content.ends_with('\n') {
            out.push('\n');
        }
        open.end(ctx, &mut out);
        out
    }

    fn render_brand(&self, ctx: &RenderContext<'_>) -> String {
        if let Some(custom) = &self.brand.custom {
            return custom.clone();
        }
        let mut label = self.brand.label.clone();
        if let Some(src) = &self.brand.image {
            let mut image = self.brand.image_options.clone();
            image.add_class(theme::classes::BRAND_IMAGE);
            label = Some(html::img(src, &image));
        }
        let Some(label) = label else {
            return String::new();
        };

        let mut text = self.brand.text_options.clone();
        text.add_class(theme::classes::BRAND_TEXT);
        let span = html::tag("span", &label, &text);

        let href = match &self.brand.url {
            BrandUrl::None => return span,
            BrandUrl::Home => ctx.home_url(),
            BrandUrl::To(target) => ctx.resolve(target),
        };
        let mut link = self.brand.link_options.clone();
        link.add_class(theme::classes::BRAND_LINK);
        html::a(&span, &href, &link)
    }
}

impl OpenSideNavBar {
    /// Close the wrapper and container, then register the widget's asset
    /// bundle on `ctx`.
    pub fn end(self, ctx: &mut RenderContext<'_>, out: &mut String) {
        debug!(tag = %self.tag, "closing sidebar container");
        out.push_str(&html::end_tag("div"));
        out.push('\n');
        out.push_str(&html::end_tag(&self.tag));
        out.push('\n');
        ctx.assets.register(assets::admin_lte());
    }
}

impl<'de> Deserialize<'de> for BrandUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        struct BrandUrlVisitor;

        impl<'de> Visitor<'de> for BrandUrlVisitor {
            type Value = BrandUrl;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("null, a URL string, or a {route, params} map")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(BrandUrl::None)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(BrandUrl::None)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(BrandUrl::To(LinkTarget::Url(v.to_string())))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(BrandUrl::To(LinkTarget::Url(v)))
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                LinkTarget::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(BrandUrl::To)
            }
        }

        deserializer.deserialize_any(BrandUrlVisitor)
    }
}

impl Serialize for BrandUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            // Home only appears in config by key absence; fields holding it
            // carry skip_serializing_if = "BrandUrl::is_home".
            BrandUrl::Home | BrandUrl::None => serializer.serialize_unit(),
            BrandUrl::To(target) => target.serialize(serializer),
        }
    }
}
