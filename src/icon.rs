//! Icon font strategy
//!
//! AdminLTE themes ship with Font Awesome, but nothing in the markup depends
//! on it beyond a class naming scheme. [`IconSet`] captures that scheme so a
//! sidebar can switch icon fonts without touching menu definitions.

use crate::html::{self, Attrs};

/// How icon names translate to markup.
///
/// An icon renders as an empty `<{tag} class="... {base_class} {name_prefix}{name}">`
/// element. Caller-provided classes come first so theme hooks like `nav-icon`
/// stay at the front of the class list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    pub tag: String,
    pub base_class: String,
    pub name_prefix: String,
}

impl IconSet {
    /// Font Awesome solid: `<i class="fas fa-{name}">`.
    pub fn font_awesome() -> Self {
        Self {
            tag: "i".to_string(),
            base_class: "fas".to_string(),
            name_prefix: "fa-".to_string(),
        }
    }

    /// Bootstrap Icons: `<i class="bi bi-{name}">`.
    pub fn bootstrap() -> Self {
        Self {
            tag: "i".to_string(),
            base_class: "bi".to_string(),
            name_prefix: "bi-".to_string(),
        }
    }

    /// Render the markup for a named icon with the given extra attributes.
    pub fn markup(&self, name: &str, attrs: &Attrs) -> String {
        let mut attrs = attrs.clone();
        attrs.add_class(&self.base_class);
        attrs.add_class(&format!("{}{}", self.name_prefix, name));
        html::tag(&self.tag, "", &attrs)
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::font_awesome()
    }
}
