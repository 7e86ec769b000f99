//! Menu tree data model
//!
//! A sidebar menu is a list of [`MenuEntry`] values; each entry is either a
//! raw markup string passed through untouched or a [`MenuItem`] with an
//! optional subtree. The model is plain data: rendering lives in
//! [`SideNav`](crate::SideNav), URL resolution in
//! [`UrlResolver`](crate::UrlResolver).

use std::collections::BTreeMap;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::html::{AttrValue, Attrs};

/// One entry in a menu list.
///
/// In YAML or JSON, a bare string is a raw entry and a map is an item:
///
/// ```yaml
/// menu:
///   - '<li class="nav-header">REPORTS</li>'
///   - label: Dashboard
///     url: /dashboard
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MenuEntry {
    /// Markup emitted verbatim, bypassing item rendering and escaping.
    Raw(String),
    /// A regular menu item.
    Item(MenuItem),
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

/// Where a menu link points.
///
/// Either a literal URL string or an application route with parameters. A
/// route is turned into a concrete URL by the
/// [`UrlResolver`](crate::UrlResolver) at render time:
///
/// ```yaml
/// url: /reports            # literal
/// url:                     # route form
///   route: reports/view
///   params: { id: "7" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LinkTarget {
    Url(String),
    Route {
        route: String,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        params: BTreeMap<String, String>,
    },
}

impl LinkTarget {
    /// A route target with no parameters.
    pub fn route(route: impl Into<String>) -> Self {
        Self::Route {
            route: route.into(),
            params: BTreeMap::new(),
        }
    }
}

impl From<&str> for LinkTarget {
    fn from(value: &str) -> Self {
        Self::Url(value.to_string())
    }
}

impl From<String> for LinkTarget {
    fn from(value: String) -> Self {
        Self::Url(value)
    }
}

/// A single menu item.
///
/// Only `label` is required; everything else has a rendering default.
/// Unknown keys in config input are ignored here but surfaced as warnings by
/// [`SidebarConfig::from_yaml_with_warnings`](crate::SidebarConfig::from_yaml_with_warnings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Link text. Required at render time; `None` fails with
    /// [`RenderError::MissingLabel`](crate::RenderError::MissingLabel).
    pub label: Option<String>,

    /// Link destination. `None` renders as `href="#"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<LinkTarget>,

    /// Icon name resolved through the active [`IconSet`](crate::IconSet).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Pre-rendered icon markup. Overrides `icon` when non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_html: Option<String>,

    /// Extra attributes merged into the icon element.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub icon_options: Attrs,

    /// Child entries. Non-empty turns this item into a treeview branch.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<MenuEntry>,

    /// Invisible items are skipped entirely, children included.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub visible: bool,

    /// Disabled items render inert: `tabindex="-1"`, `aria-disabled="true"`,
    /// never marked active.
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,

    /// Explicit active override. `None` defers to the render context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Per-item HTML-escaping override. `None` defers to the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encode: Option<bool>,

    /// Attributes for the `<li>` container.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub options: Attrs,

    /// Attributes for the `<a>` link.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub link_options: Attrs,

    /// Attributes for the nested `<ul>` when this item has children.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub dropdown_options: Attrs,
}

impl MenuItem {
    /// An item with a label and nothing else.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// An item linking somewhere.
    pub fn link(label: impl Into<String>, url: impl Into<LinkTarget>) -> Self {
        Self {
            label: Some(label.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<LinkTarget>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_items(mut self, items: Vec<MenuEntry>) -> Self {
        self.items = items;
        self
    }

    /// Append a single child entry.
    pub fn add_child(mut self, entry: impl Into<MenuEntry>) -> Self {
        self.items.push(entry.into());
        self
    }

    /// Mark the item disabled. It still renders, but its link is inert.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Hide the item and its whole subtree.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

impl Default for MenuItem {
    fn default() -> Self {
        Self {
            label: None,
            url: None,
            icon: None,
            icon_html: None,
            icon_options: Attrs::new(),
            items: Vec::new(),
            visible: true,
            disabled: false,
            active: None,
            encode: None,
            options: Attrs::new(),
            link_options: Attrs::new(),
            dropdown_options: Attrs::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Treat an explicit `null` like a missing field.
///
/// YAML authors leave keys dangling (`items:` with nothing after it); the
/// derived impl would reject the null, this maps it to the default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Hand-written rather than #[serde(untagged)]: the derive buffers the whole
// subtree through a private Content value, which swallows the unknown-key
// reporting that serde_ignored relies on.
impl<'de> Deserialize<'de> for MenuEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = MenuEntry;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a raw markup string or a menu item map")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(MenuEntry::Raw(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(MenuEntry::Raw(v))
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                MenuItem::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(MenuEntry::Item)
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

impl<'de> Deserialize<'de> for LinkTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RouteForm {
            route: String,
            #[serde(default, deserialize_with = "lenient_params")]
            params: BTreeMap<String, String>,
        }

        struct TargetVisitor;

        impl<'de> Visitor<'de> for TargetVisitor {
            type Value = LinkTarget;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a URL string or a {route, params} map")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(LinkTarget::Url(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(LinkTarget::Url(v))
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let form = RouteForm::deserialize(de::value::MapAccessDeserializer::new(map))?;
                Ok(LinkTarget::Route {
                    route: form.route,
                    params: form.params,
                })
            }
        }

        deserializer.deserialize_any(TargetVisitor)
    }
}

/// Route params tolerate unquoted scalars (`id: 7`).
fn lenient_params<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, AttrValue>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw.into_iter().map(|(k, v)| (k, v.0)).collect())
}
