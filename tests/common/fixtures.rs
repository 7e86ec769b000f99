//! Test fixtures - reusable menu builders and config documents.

use treenav::{LinkTarget, MenuEntry, MenuItem};

/// A visible leaf item linking to a literal URL.
pub fn leaf(label: &str, url: &str) -> MenuEntry {
    MenuEntry::Item(MenuItem::link(label, url))
}

/// A branch item with children and no URL of its own.
pub fn branch(label: &str, children: Vec<MenuEntry>) -> MenuEntry {
    MenuEntry::Item(MenuItem::new(label).with_items(children))
}

/// A leaf item that should never appear in output.
pub fn hidden(label: &str, url: &str) -> MenuEntry {
    MenuEntry::Item(MenuItem::link(label, url).hidden())
}

/// A leaf item rendered inert.
pub fn inert(label: &str, url: &str) -> MenuEntry {
    MenuEntry::Item(MenuItem::link(label, url).disabled())
}

/// A leaf item with a route-style target.
pub fn routed(label: &str, route: &str) -> MenuEntry {
    MenuEntry::Item(MenuItem::link(label, LinkTarget::route(route)))
}

/// The transparent spacer icon emitted for items without an icon.
pub const PLACEHOLDER_ICON: &str =
    r#"<i class="nav-icon fas fa-circle" style="color: transparent;"></i>"#;

/// The caret appended to branch labels.
pub const TREEVIEW_CARET: &str = r#"<i class="nav-treeview-status-icon fas fa-angle-left"></i>"#;

/// A complete dashboard sidebar in YAML: brand block plus a three-level menu
/// with raw separators, an icon override, and a route-style link.
pub const DASHBOARD_SIDEBAR_YAML: &str = r#"
brand:
  label: Acme Admin
  image: /img/logo.png
menu:
  - label: Dashboard
    url: /dashboard
    icon: tachometer-alt
  - '<li class="nav-header">REPORTS</li>'
  - label: Reports
    icon: chart-pie
    items:
      - label: Monthly
        url:
          route: reports/monthly
          params:
            year: 2026
      - label: Annual
        url: /reports/annual
  - label: Retired
    url: /retired
    disabled: true
"#;

/// The same sidebar as [`DASHBOARD_SIDEBAR_YAML`], in JSON.
pub const DASHBOARD_SIDEBAR_JSON: &str = r#"{
  "brand": {"label": "Acme Admin", "image": "/img/logo.png"},
  "menu": [
    {"label": "Dashboard", "url": "/dashboard", "icon": "tachometer-alt"},
    "<li class=\"nav-header\">REPORTS</li>",
    {"label": "Reports", "icon": "chart-pie", "items": [
      {"label": "Monthly", "url": {"route": "reports/monthly", "params": {"year": "2026"}}},
      {"label": "Annual", "url": "/reports/annual"}
    ]},
    {"label": "Retired", "url": "/retired", "disabled": true}
  ]
}"#;
