//! Property tests for sidebar config parsing.

use proptest::prelude::*;

use treenav::{BrandConfig, MenuEntry, MenuItem, SidebarConfig};

/// Keys and labels that stay unambiguous as YAML scalars start with a letter.
fn slug() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,11}").unwrap()
}

fn simple_menu() -> impl Strategy<Value = Vec<MenuEntry>> {
    let item = (slug(), proptest::option::of(slug()), any::<bool>()).prop_map(
        |(label, url, disabled)| {
            let mut item = MenuItem::new(label);
            item.url = url.map(|u| format!("/{u}").into());
            item.disabled = disabled;
            MenuEntry::Item(item)
        },
    );
    proptest::collection::vec(item, 0..5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `from_yaml` never panics on arbitrary input.
    #[test]
    fn property_from_yaml_never_panics(
        content in "(?s).{0,256}"
    ) {
        let _ = SidebarConfig::from_yaml(&content);
    }

    /// PROPERTY: `from_json` never panics on arbitrary input.
    #[test]
    fn property_from_json_never_panics(
        content in "(?s).{0,256}"
    ) {
        let _ = SidebarConfig::from_json(&content);
    }

    /// PROPERTY: A config this crate serialized parses back equal, with no
    /// unknown-key warnings.
    #[test]
    fn property_serialized_config_round_trips(
        brand_label in proptest::option::of(slug()),
        menu in simple_menu(),
    ) {
        let config = SidebarConfig {
            brand: brand_label.map(|label| BrandConfig {
                label: Some(label),
                ..BrandConfig::default()
            }),
            menu,
        };
        let yaml = serde_yaml_ng::to_string(&config).expect("config serializes");
        let (parsed, warnings) =
            SidebarConfig::from_yaml_with_warnings(&yaml).expect("serialized config parses");
        prop_assert_eq!(parsed, config);
        prop_assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
    }

    /// PROPERTY: A top-level key one letter short of a real one draws a
    /// warning that names the real key.
    #[test]
    fn property_dropped_letter_draws_a_suggestion(
        which in 0..2usize,
        pos in any::<prop::sample::Index>(),
    ) {
        let original = ["brand", "menu"][which];
        let mut mutated = original.to_string();
        mutated.remove(pos.index(original.len()));

        let yaml = format!("{mutated}: {{}}\nmenu: []\n");
        let (_, warnings) =
            SidebarConfig::from_yaml_with_warnings(&yaml).expect("unknown keys are not fatal");

        prop_assert_eq!(warnings.len(), 1);
        prop_assert_eq!(&warnings[0].key, &mutated);
        prop_assert_eq!(warnings[0].suggestion.as_deref(), Some(original));
        prop_assert_eq!(warnings[0].line, Some(1));
    }
}
