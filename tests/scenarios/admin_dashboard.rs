//! Scenario: Admin Dashboard Page Assembly
//!
//! Journey: An application serves an admin dashboard whose sidebar is defined
//! in a config document checked in next to the code.
//!
//! Steps:
//! 1. Load the sidebar definition from YAML
//! 2. Build a render context for the incoming request
//! 3. Render the menu tree
//! 4. Wrap it in the sidebar container with the brand block
//! 5. Emit stylesheet/script tags for everything the page used
//!
//! Success Criteria:
//! - The current page is highlighted and its branch is open
//! - Disabled and raw entries survive the trip through config intact
//! - The theme bundle is registered exactly once across both widgets

use crate::common::*;
use treenav::{PrefixResolver, RenderContext, SideNav, SideNavBar, SidebarConfig};

/// SCENARIO: Config file to finished sidebar markup
#[test]
fn scenario_dashboard_page_from_yaml_config() {
    // Step 1: Load the checked-in sidebar definition
    let (config, warnings) =
        SidebarConfig::from_yaml_with_warnings(DASHBOARD_SIDEBAR_YAML).unwrap();
    assert!(
        warnings.is_empty(),
        "the shipped config should parse clean, got: {warnings:?}"
    );

    // Step 2: The request is for the monthly report page
    let mut ctx = RenderContext::default().with_current_url("/reports/monthly?year=2026");

    // Step 3: Render the menu tree
    let menu = SideNav::new(config.menu.clone()).render(&mut ctx).unwrap();

    // Step 4: Wrap it in the container with the brand block
    let page = SideNavBar::from_config(config.brand.clone().unwrap_or_default())
        .render(&menu, &mut ctx);

    assert!(page.starts_with(r#"<aside class="app-sidebar bg-dark shadow" data-bs-theme="dark">"#));
    assert!(page.ends_with("</aside>\n"));

    // Brand: the logo replaces the label inside the text span
    assert!(page.contains(
        r#"<a class="brand-link" href="/"><span class="brand-text"><img class="brand-image" src="/img/logo.png"></span></a>"#
    ));

    // The raw section header passes through verbatim
    assert!(page.contains(r#"<li class="nav-header">REPORTS</li>"#));

    // The current page is highlighted and its branch is open
    assert!(page.contains(r#"<a class="nav-link active" href="/reports/monthly?year=2026">"#));
    assert!(page.contains(r#"<li class="nav-item has-treeview menu-open">"#));
    assert!(page.contains(r#"<a class="nav-link" href="/dashboard">"#));

    // The retired entry renders inert
    assert!(page.contains(
        r#"<a class="nav-link disabled" href="/retired" tabindex="-1" aria-disabled="true">"#
    ));

    // Step 5: Both widgets used the same bundle; the page gets it once
    assert_eq!(ctx.assets.bundles().len(), 1);
    let head = ctx.assets.head_markup();
    assert!(head.contains(r#"<link rel="stylesheet" href="/assets/adminlte/css/adminlte.min.css">"#));
    assert!(head.contains(r#"<script src="/assets/adminlte/js/adminlte.min.js"></script>"#));
}

/// SCENARIO: The same sidebar served from JSON instead of YAML
#[test]
fn scenario_json_config_is_interchangeable() {
    let from_yaml = SidebarConfig::from_yaml(DASHBOARD_SIDEBAR_YAML).unwrap();
    let from_json = SidebarConfig::from_json(DASHBOARD_SIDEBAR_JSON).unwrap();
    assert_eq!(from_yaml, from_json);
}

/// SCENARIO: Deploying the dashboard under a URL prefix
///
/// Route-style targets pick up the prefix; literal URLs are left alone.
#[test]
fn scenario_dashboard_mounted_under_prefix() {
    let config = SidebarConfig::from_yaml(DASHBOARD_SIDEBAR_YAML).unwrap();

    let resolver = PrefixResolver::new("/admin");
    let mut ctx = RenderContext::new(resolver).with_current_url("/admin/reports/monthly?year=2026");
    let markup = SideNav::new(config.menu).render(&mut ctx).unwrap();

    assert!(markup.contains(r#"<a class="nav-link active" href="/admin/reports/monthly?year=2026">"#));
    assert!(markup.contains("menu-open"));
    assert!(markup.contains(r#"href="/dashboard""#));
    assert!(!markup.contains(r#"href="/admin/dashboard""#));
}
