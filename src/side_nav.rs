//! Sidebar menu widget
//!
//! [`SideNav`] turns a [`MenuEntry`] tree into the nested `<nav>`/`<ul>`
//! markup an AdminLTE treeview expects. Branches with children render a
//! caret and a nested list; the branch picks up `menu-open` when any visible
//! descendant is the active item, so the open path in the UI always leads to
//! the current page.
//!
//! Rendering walks the tree once per list level. Each nested list is
//! rendered by a child `SideNav` derived from the parent, which keeps
//! per-level options (`dropdown_options`) and inherited settings
//! (`encode_labels`, icon defaults) in one obvious place.

use tracing::debug;

use crate::assets;
use crate::context::RenderContext;
use crate::error::{RenderError, RenderResult};
use crate::html::{self, Attrs};
use crate::icon::IconSet;
use crate::menu::{MenuEntry, MenuItem};
use crate::theme;

/// Renders a menu tree to sidebar markup.
#[derive(Debug, Clone)]
pub struct SideNav {
    /// The entries to render.
    pub items: Vec<MenuEntry>,
    /// Attributes for the `<ul>` list container.
    pub options: Attrs,
    /// Attributes for the outer `<nav>` wrapper.
    pub nav_options: Attrs,
    /// Default attributes merged into every item's icon element.
    pub icon_options: Attrs,
    /// Icon font in use.
    pub icons: IconSet,
    /// HTML-escape labels unless an item overrides with `encode`.
    pub encode_labels: bool,
    /// Apply the `active` class to active links.
    pub activate_items: bool,
    /// Nested lists skip the `<nav>` wrapper.
    pub is_submenu: bool,
}

impl SideNav {
    pub fn new(items: Vec<MenuEntry>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: Attrs) -> Self {
        self.options = options;
        self
    }

    pub fn with_nav_options(mut self, nav_options: Attrs) -> Self {
        self.nav_options = nav_options;
        self
    }

    pub fn with_icon_options(mut self, icon_options: Attrs) -> Self {
        self.icon_options = icon_options;
        self
    }

    pub fn with_icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_encode_labels(mut self, encode: bool) -> Self {
        self.encode_labels = encode;
        self
    }

    pub fn with_activate_items(mut self, activate: bool) -> Self {
        self.activate_items = activate;
        self
    }

    pub fn as_submenu(mut self) -> Self {
        self.is_submenu = true;
        self
    }

    /// Render the menu and register the widget's asset bundle on `ctx`.
    pub fn render(&self, ctx: &mut RenderContext<'_>) -> RenderResult<String> {
        debug!(
            entries = self.items.len(),
            submenu = self.is_submenu,
            "rendering sidebar menu"
        );
        let mut trail = Vec::new();
        let markup = self.render_entries(ctx, &mut trail)?;
        ctx.assets.register(assets::admin_lte());
        Ok(markup)
    }

    fn render_entries(
        &self,
        ctx: &RenderContext<'_>,
        trail: &mut Vec<usize>,
    ) -> RenderResult<String> {
        let mut rendered = Vec::new();
        for (index, entry) in self.items.iter().enumerate() {
            trail.push(index);
            match entry {
                MenuEntry::Raw(markup) => rendered.push(markup.clone()),
                MenuEntry::Item(item) => {
                    if item.visible {
                        rendered.push(self.render_item(item, ctx, trail)?);
                    }
                }
            }
            trail.pop();
        }

        let mut list = self.options.clone();
        list.add_class(theme::classes::SIDEBAR_MENU);
        list.add_class(theme::classes::FLEX_COLUMN);
        // Widget defaults; values the caller already set stay untouched.
        if list.get("data-lte-toggle").is_none() {
            list.set_data("lte-toggle", "treeview");
        }
        if list.get("role").is_none() {
            list.set("role", "menu");
        }
        if list.get("data-accordion").is_none() {
            list.set_data("accordion", "false");
        }
        let menu = html::tag("ul", &rendered.join("\n"), &list);

        if self.is_submenu {
            Ok(menu)
        } else {
            Ok(format!(
                "{}\n{menu}\n{}",
                html::begin_tag("nav", &self.nav_options),
                html::end_tag("nav")
            ))
        }
    }

    fn render_item(
        &self,
        item: &MenuItem,
        ctx: &RenderContext<'_>,
        trail: &mut Vec<usize>,
    ) -> RenderResult<String> {
        let Some(label_raw) = &item.label else {
            return Err(RenderError::MissingLabel {
                path: breadcrumb(trail),
            });
        };
        let encode = item.encode.unwrap_or(self.encode_labels);
        let label = if encode {
            html::escape(label_raw)
        } else {
            label_raw.clone()
        };

        let mut container = item.options.clone();
        container.add_class(theme::classes::NAV_ITEM);

        let icon = self.render_icon(item);

        let mut caret = String::new();
        let mut submenu = String::new();
        if !item.items.is_empty() {
            container.add_class(theme::classes::HAS_TREEVIEW);
            if has_active_entry(&item.items, ctx) {
                container.add_class(theme::classes::MENU_OPEN);
            }
            caret = self.icons.markup(
                theme::icons::TREEVIEW_CARET,
                &Attrs::from_class(theme::classes::TREEVIEW_STATUS_ICON),
            );
            submenu = self.dropdown_renderer(item).render_entries(ctx, trail)?;
        }

        let mut link = item.link_options.clone();
        link.add_class(theme::classes::NAV_LINK);
        if item.disabled {
            link.set("tabindex", "-1");
            link.set("aria-disabled", "true");
            link.add_class(theme::classes::DISABLED);
        } else if self.activate_items && ctx.is_active(item) {
            link.add_class(theme::classes::ACTIVE);
        }
        let href = match &item.url {
            Some(target) => ctx.resolve(target),
            None => "#".to_string(),
        };

        let text = html::tag("p", &format!("{label}{caret}"), &Attrs::new());
        let anchor = html::a(&format!("{icon}{text}"), &href, &link);
        let body = if submenu.is_empty() {
            anchor
        } else {
            format!("{anchor}\n{submenu}")
        };
        Ok(html::tag("li", &body, &container))
    }

    /// Icon precedence: `icon_html` verbatim, then a named icon, then the
    /// transparent placeholder that keeps labels aligned.
    fn render_icon(&self, item: &MenuItem) -> String {
        if let Some(markup) = &item.icon_html {
            if !markup.is_empty() {
                return markup.clone();
            }
        }
        let mut attrs = self.icon_options.clone();
        attrs.merge(&item.icon_options);
        attrs.add_class(theme::classes::NAV_ICON);
        match &item.icon {
            Some(name) => self.icons.markup(name, &attrs),
            None => {
                attrs.set_style("color", "transparent");
                self.icons.markup(theme::icons::PLACEHOLDER, &attrs)
            }
        }
    }

    /// The renderer for an item's nested list.
    fn dropdown_renderer(&self, item: &MenuItem) -> SideNav {
        let mut options = item.dropdown_options.clone();
        options.add_class(theme::classes::NAV_TREEVIEW);
        SideNav {
            items: item.items.clone(),
            options,
            nav_options: Attrs::new(),
            icon_options: self.icon_options.clone(),
            icons: self.icons.clone(),
            encode_labels: self.encode_labels,
            activate_items: self.activate_items,
            is_submenu: true,
        }
    }
}

impl Default for SideNav {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            options: Attrs::new(),
            nav_options: Attrs::new(),
            icon_options: Attrs::new(),
            icons: IconSet::default(),
            encode_labels: true,
            activate_items: true,
            is_submenu: false,
        }
    }
}

/// Whether any visible entry in `entries` (or below) is active.
///
/// Raw entries never count. Visibility gates a whole subtree; `disabled` does
/// not: it only suppresses the link's `active` class, so a disabled item whose
/// URL matches still opens its ancestors.
pub fn has_active_entry(entries: &[MenuEntry], ctx: &RenderContext<'_>) -> bool {
    entries.iter().any(|entry| match entry {
        MenuEntry::Raw(_) => false,
        MenuEntry::Item(item) => {
            item.visible && (ctx.is_active(item) || has_active_entry(&item.items, ctx))
        }
    })
}

fn breadcrumb(trail: &[usize]) -> String {
    trail
        .iter()
        .map(|index| format!("items[{index}]"))
        .collect::<Vec<_>>()
        .join(" > ")
}
