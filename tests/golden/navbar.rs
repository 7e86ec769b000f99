//! Golden markup for the sidebar container widget.

use insta::assert_snapshot;
use treenav::{BrandConfig, BrandUrl, RenderContext, SideNavBar, ThemeMode};
use treenav::{Attrs, LinkTarget};

const EMPTY_SHELL: &str = r#"<aside class="app-sidebar bg-dark shadow" data-bs-theme="dark">
<div class="sidebar-wrapper">
</div>
</aside>
"#;

const BRANDED_SHELL: &str = r#"<aside class="app-sidebar bg-dark shadow" data-bs-theme="dark">
<div class="sidebar-brand"><a class="brand-link" href="/"><span class="brand-text">Acme Admin</span></a></div>
<div class="sidebar-wrapper">
</div>
</aside>
"#;

#[test]
fn test_golden_default_shell_is_empty_wrapper() {
    let mut ctx = RenderContext::default();
    assert_eq!(SideNavBar::new().render("", &mut ctx), EMPTY_SHELL);
}

#[test]
fn test_golden_labeled_brand_links_home() {
    let brand = BrandConfig {
        label: Some("Acme Admin".to_string()),
        ..BrandConfig::default()
    };
    let mut ctx = RenderContext::default();
    assert_eq!(
        SideNavBar::from_config(brand).render("", &mut ctx),
        BRANDED_SHELL
    );
}

#[test]
fn test_golden_content_lands_inside_wrapper_on_its_own_line() {
    let mut ctx = RenderContext::default();
    let markup = SideNavBar::new().render("<p>menu goes here</p>", &mut ctx);
    assert_eq!(
        markup,
        EMPTY_SHELL.replace(
            "<div class=\"sidebar-wrapper\">\n",
            "<div class=\"sidebar-wrapper\">\n<p>menu goes here</p>\n"
        )
    );
}

#[test]
fn test_golden_brand_image_replaces_label() {
    let brand = BrandConfig {
        label: Some("Acme Admin".to_string()),
        image: Some("/img/logo.png".to_string()),
        url: BrandUrl::To(LinkTarget::from("/dashboard")),
        ..BrandConfig::default()
    };
    let mut ctx = RenderContext::default();
    let markup = SideNavBar::from_config(brand).render("", &mut ctx);
    let brand_line = markup.lines().nth(1).unwrap();
    assert_snapshot!(brand_line, @r#"<div class="sidebar-brand"><a class="brand-link" href="/dashboard"><span class="brand-text"><img class="brand-image" src="/img/logo.png"></span></a></div>"#);
}

#[test]
fn test_golden_null_brand_url_renders_bare_span() {
    let brand = BrandConfig {
        label: Some("Plain".to_string()),
        url: BrandUrl::None,
        ..BrandConfig::default()
    };
    let mut ctx = RenderContext::default();
    let markup = SideNavBar::from_config(brand).render("", &mut ctx);
    let brand_line = markup.lines().nth(1).unwrap();
    assert_snapshot!(brand_line, @r#"<div class="sidebar-brand"><span class="brand-text">Plain</span></div>"#);
}

#[test]
fn test_golden_caller_classes_suppress_skin_defaults() {
    let mut ctx = RenderContext::default();
    let markup = SideNavBar::new()
        .with_options(Attrs::from_class("sidebar-dark"))
        .with_theme(ThemeMode::Light)
        .render("", &mut ctx);
    assert!(markup.starts_with(
        r#"<aside class="sidebar-dark app-sidebar" data-bs-theme="light">"#
    ));
}

#[test]
fn test_golden_custom_tag_closes_itself() {
    let mut ctx = RenderContext::default();
    let markup = SideNavBar::new().with_tag("section").render("", &mut ctx);
    assert!(markup.starts_with("<section "));
    assert!(markup.ends_with("</section>\n"));
}
