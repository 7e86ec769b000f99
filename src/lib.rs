//! treenav - AdminLTE-flavored sidebar navigation widgets
//!
//! treenav renders the two building blocks of an admin dashboard sidebar as
//! plain HTML strings: a recursive treeview menu ([`SideNav`]) and the
//! container chrome around it ([`SideNavBar`]). There is no template engine
//! and no framework coupling; widgets take data in, hand markup back, and
//! record their stylesheet/script needs in an [`AssetRegistry`].
//!
//! ```
//! use treenav::{MenuEntry, MenuItem, RenderContext, SideNav};
//!
//! let nav = SideNav::new(vec![
//!     MenuEntry::Item(MenuItem::link("Home", "/home")),
//!     MenuEntry::Item(MenuItem::new("Settings").with_items(vec![
//!         MenuEntry::Item(MenuItem::link("Profile", "/profile")),
//!     ])),
//! ]);
//!
//! let mut ctx = RenderContext::default().with_current_url("/profile");
//! let html = nav.render(&mut ctx)?;
//! assert!(html.contains("menu-open"));
//! assert!(html.contains(r#"<a class="nav-link active" href="/profile">"#));
//! # Ok::<(), treenav::RenderError>(())
//! ```

pub mod assets;
pub mod config;
pub mod context;
pub mod error;
pub mod html;
pub mod icon;
pub mod menu;
pub mod navbar;
pub mod side_nav;
pub mod theme;
pub mod url;

// Re-exports for convenience
pub use assets::{admin_lte, AssetBundle, AssetRegistry};
pub use config::{ConfigWarning, SidebarConfig};
pub use context::RenderContext;
pub use error::{RenderError, RenderResult};
pub use html::Attrs;
pub use icon::IconSet;
pub use menu::{LinkTarget, MenuEntry, MenuItem};
pub use navbar::{BrandConfig, BrandUrl, OpenSideNavBar, SideNavBar, ThemeMode};
pub use side_nav::{has_active_entry, SideNav};
pub use url::{PrefixResolver, UrlResolver};
