//! AdminLTE vocabulary: the class and icon names the widgets emit
//!
//! Single source of truth for every CSS hook in generated markup. Rendering
//! code references these constants instead of string literals so the
//! stylesheet contract lives in one place.

/// CSS class names.
pub mod classes {
    // Menu list and entries
    pub const SIDEBAR_MENU: &str = "sidebar-menu";
    pub const FLEX_COLUMN: &str = "flex-column";
    pub const NAV_ITEM: &str = "nav-item";
    pub const NAV_LINK: &str = "nav-link";
    pub const NAV_ICON: &str = "nav-icon";
    pub const ACTIVE: &str = "active";
    pub const DISABLED: &str = "disabled";

    // Nested treeview branches
    pub const HAS_TREEVIEW: &str = "has-treeview";
    pub const MENU_OPEN: &str = "menu-open";
    pub const NAV_TREEVIEW: &str = "nav-treeview";
    pub const TREEVIEW_STATUS_ICON: &str = "nav-treeview-status-icon";

    // Container chrome
    pub const APP_SIDEBAR: &str = "app-sidebar";
    pub const BG_DARK: &str = "bg-dark";
    pub const SHADOW: &str = "shadow";
    pub const SIDEBAR_BRAND: &str = "sidebar-brand";
    pub const SIDEBAR_WRAPPER: &str = "sidebar-wrapper";
    pub const BRAND_IMAGE: &str = "brand-image";
    pub const BRAND_TEXT: &str = "brand-text";
    pub const BRAND_LINK: &str = "brand-link";
}

/// Icon names resolved through the active [`IconSet`](crate::IconSet).
pub mod icons {
    /// Invisible spacer icon for items without one, keeps labels aligned.
    pub const PLACEHOLDER: &str = "circle";
    /// Caret shown on branches that expand.
    pub const TREEVIEW_CARET: &str = "angle-left";
}
