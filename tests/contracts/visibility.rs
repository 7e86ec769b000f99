//! Visibility contracts (VIS-001 through VIS-003)
//!
//! These contracts guarantee that `visible: false` removes an item without a
//! trace and without disturbing anything around it.

use crate::common::*;
use treenav::{MenuEntry, MenuItem, RenderContext, SideNav};

fn render(items: Vec<MenuEntry>) -> String {
    let mut ctx = RenderContext::default();
    SideNav::new(items).render(&mut ctx).expect("render")
}

/// CONTRACT VIS-001: Invisible Items Leave No Trace
///
/// Neither the label, the URL, nor any attribute of an invisible item may
/// appear in the output.
mod no_trace {
    use super::*;

    #[test]
    fn contract_invisible_leaf_is_absent() {
        let markup = render(vec![leaf("Shown", "/shown"), hidden("Secret", "/secret")]);
        assert!(!markup.contains("Secret"));
        assert!(!markup.contains("/secret"));
    }

    #[test]
    fn contract_invisible_branch_hides_whole_subtree() {
        let tree = MenuEntry::Item(
            MenuItem::new("Hidden Branch")
                .with_items(vec![leaf("Gone", "/gone"), leaf("AlsoGone", "/also-gone")])
                .hidden(),
        );
        let markup = render(vec![leaf("Shown", "/shown"), tree]);
        assert!(!markup.contains("Hidden Branch"));
        assert!(!markup.contains("AlsoGone"));
        assert!(!markup.contains("has-treeview"));
    }

    #[test]
    fn contract_invisible_items_render_no_empty_li() {
        let markup = render(vec![hidden("Gone", "/gone")]);
        assert!(!markup.contains("<li"));
    }
}

/// CONTRACT VIS-002: Siblings Are Undisturbed
///
/// Removing an invisible item never changes how its siblings render.
mod siblings {
    use super::*;

    #[test]
    fn contract_sibling_markup_is_identical() {
        let with_hidden = render(vec![
            leaf("A", "/a"),
            hidden("Ghost", "/ghost"),
            leaf("B", "/b"),
        ]);
        let without = render(vec![leaf("A", "/a"), leaf("B", "/b")]);
        assert_eq!(with_hidden, without);
    }

    #[test]
    fn contract_raw_entries_ignore_visibility_of_neighbors() {
        let markup = render(vec![hidden("Ghost", "/ghost"), MenuEntry::Raw("<hr>".into())]);
        assert!(markup.contains("<hr>"));
    }
}

/// CONTRACT VIS-003: Invisible Items Cannot Open Branches
///
/// Active detection skips invisible entries entirely.
mod open_state {
    use super::*;

    #[test]
    fn contract_invisible_active_child_keeps_branch_closed() {
        let tree = vec![branch("Top", vec![hidden("Ghost", "/ghost")])];
        let mut ctx = RenderContext::default().with_current_url("/ghost");
        let markup = SideNav::new(tree).render(&mut ctx).expect("render");
        assert!(!markup.contains("menu-open"));
    }

    #[test]
    fn contract_visible_sibling_still_opens_branch() {
        let tree = vec![branch(
            "Top",
            vec![hidden("Ghost", "/here"), leaf("Real", "/here")],
        )];
        let mut ctx = RenderContext::default().with_current_url("/here");
        let markup = SideNav::new(tree).render(&mut ctx).expect("render");
        assert!(markup.contains("menu-open"));
        assert!(!markup.contains("Ghost"));
    }
}
