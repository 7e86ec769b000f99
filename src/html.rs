//! HTML primitives: escaping, attribute bags, and tag assembly
//!
//! Widgets in this crate never touch a template engine; they build markup by
//! concatenating small, well-escaped pieces. This module owns those pieces so
//! the rest of the crate never formats an attribute by hand.

use std::collections::BTreeMap;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Escape a string for use in HTML text or attribute values.
///
/// Covers the five characters that can change parsing context:
/// `&`, `<`, `>`, `"`, and `'`.
pub fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// An element's attribute set.
///
/// Classes and inline styles get dedicated storage because widgets layer them
/// incrementally (caller options first, widget defaults on top). Everything
/// else is a flat name/value list that preserves insertion order.
///
/// Rendering is deterministic: `id`, `class`, `style`, `href`, `src`, then the
/// remaining attributes in insertion order. Values are escaped on output, not
/// on input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    attrs: Vec<(String, String)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a set holding a single class.
    pub fn from_class(class: &str) -> Self {
        let mut attrs = Self::new();
        attrs.add_class(class);
        attrs
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.styles.is_empty() && self.attrs.is_empty()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.iter().any(|c| c == token)
    }

    /// Add one or more space-separated class tokens, skipping duplicates.
    pub fn add_class(&mut self, class: &str) {
        for token in class.split_whitespace() {
            if !self.has_class(token) {
                self.classes.push(token.to_string());
            }
        }
    }

    /// Remove a class token if present.
    pub fn remove_class(&mut self, token: &str) {
        self.classes.retain(|c| c != token);
    }

    /// Set an inline style property, replacing any previous value.
    pub fn set_style(&mut self, prop: &str, value: &str) {
        if let Some(slot) = self.styles.iter_mut().find(|(p, _)| p == prop) {
            slot.1 = value.to_string();
        } else {
            self.styles.push((prop.to_string(), value.to_string()));
        }
    }

    pub fn style(&self, prop: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == prop)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any previous value. `class` and `style`
    /// route to their dedicated storage and replace it wholesale.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "class" => {
                self.classes.clear();
                self.add_class(&value);
            }
            "style" => {
                self.styles.clear();
                for rule in value.split(';') {
                    if let Some((prop, v)) = rule.split_once(':') {
                        self.set_style(prop.trim(), v.trim());
                    }
                }
            }
            _ => {
                if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
                    slot.1 = value;
                } else {
                    self.attrs.push((name, value));
                }
            }
        }
    }

    /// Set a `data-*` attribute.
    pub fn set_data(&mut self, name: &str, value: impl Into<String>) {
        self.set(format!("data-{name}"), value);
    }

    /// Look up a plain attribute. Classes and styles have their own accessors.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Fold another set into this one. Classes accumulate, styles and plain
    /// attributes from `other` win on conflict.
    pub fn merge(&mut self, other: &Attrs) {
        for class in &other.classes {
            self.add_class(class);
        }
        for (prop, value) in &other.styles {
            self.set_style(prop, value);
        }
        for (name, value) in &other.attrs {
            self.set(name.clone(), value.clone());
        }
    }

    /// Render to ` name="value"` pairs, each with a leading space so the
    /// result can sit directly after a tag name.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(id) = self.get("id") {
            push_attr(&mut out, "id", id);
        }
        if !self.classes.is_empty() {
            push_attr(&mut out, "class", &self.classes.join(" "));
        }
        if !self.styles.is_empty() {
            push_attr(&mut out, "style", &self.style_value());
        }
        for name in ["href", "src"] {
            if let Some(value) = self.get(name) {
                push_attr(&mut out, name, value);
            }
        }
        for (name, value) in &self.attrs {
            if matches!(name.as_str(), "id" | "href" | "src") {
                continue;
            }
            push_attr(&mut out, name, value);
        }
        out
    }

    fn style_value(&self) -> String {
        self.styles
            .iter()
            .map(|(prop, value)| format!("{prop}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

/// Wrap `content` in `<name ...>` / `</name>`.
pub fn tag(name: &str, content: &str, attrs: &Attrs) -> String {
    format!("<{name}{}>{content}</{name}>", attrs.render())
}

pub fn begin_tag(name: &str, attrs: &Attrs) -> String {
    format!("<{name}{}>", attrs.render())
}

pub fn end_tag(name: &str) -> String {
    format!("</{name}>")
}

/// Render an anchor. `href` overrides any `href` already in `attrs`.
pub fn a(content: &str, href: &str, attrs: &Attrs) -> String {
    let mut attrs = attrs.clone();
    attrs.set("href", href);
    tag("a", content, &attrs)
}

/// Render a void `<img>` element.
pub fn img(src: &str, attrs: &Attrs) -> String {
    let mut attrs = attrs.clone();
    attrs.set("src", src);
    format!("<img{}>", attrs.render())
}

// ---------------------------------------------------------------------------
// Serde support
// ---------------------------------------------------------------------------

/// Scalar attribute value decoded leniently from config input.
///
/// YAML authors write `tabindex: -1` or `aria-expanded: true` without quotes.
/// Attribute values are strings in HTML, so numbers and booleans fold into
/// their canonical string form on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrValue(pub String);

impl<'de> Deserialize<'de> for AttrValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = AttrValue;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a string, number, or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(AttrValue(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(AttrValue(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(AttrValue(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(AttrValue(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(AttrValue(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(AttrValue(v.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(AttrValue(String::new()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// `class` accepts either a space-separated string or a list of tokens.
struct ClassList(Vec<String>);

impl<'de> Deserialize<'de> for ClassList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ClassVisitor;

        impl<'de> Visitor<'de> for ClassVisitor {
            type Value = ClassList;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a class string or a list of class tokens")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ClassList(v.split_whitespace().map(String::from).collect()))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut tokens = Vec::new();
                while let Some(token) = seq.next_element::<String>()? {
                    tokens.push(token);
                }
                Ok(ClassList(tokens))
            }
        }

        deserializer.deserialize_any(ClassVisitor)
    }
}

/// `style` accepts either a `prop: value; ...` string or a map.
struct StyleRules(Vec<(String, String)>);

impl<'de> Deserialize<'de> for StyleRules {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StyleVisitor;

        impl<'de> Visitor<'de> for StyleVisitor {
            type Value = StyleRules;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a style string or a map of style properties")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                let mut rules = Vec::new();
                for rule in v.split(';') {
                    if let Some((prop, value)) = rule.split_once(':') {
                        rules.push((prop.trim().to_string(), value.trim().to_string()));
                    }
                }
                Ok(StyleRules(rules))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rules = Vec::new();
                while let Some((prop, value)) = map.next_entry::<String, AttrValue>()? {
                    rules.push((prop, value.0));
                }
                Ok(StyleRules(rules))
            }
        }

        deserializer.deserialize_any(StyleVisitor)
    }
}

impl Serialize for Attrs {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut len = self.attrs.len();
        if !self.classes.is_empty() {
            len += 1;
        }
        if !self.styles.is_empty() {
            len += 1;
        }
        let mut map = serializer.serialize_map(Some(len))?;
        if !self.classes.is_empty() {
            map.serialize_entry("class", &self.classes.join(" "))?;
        }
        if !self.styles.is_empty() {
            map.serialize_entry("style", &self.style_value())?;
        }
        for (name, value) in &self.attrs {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Attrs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AttrsVisitor;

        impl<'de> Visitor<'de> for AttrsVisitor {
            type Value = Attrs;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of HTML attributes")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Attrs::new())
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut attrs = Attrs::new();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "class" => {
                            let ClassList(tokens) = map.next_value()?;
                            for token in &tokens {
                                attrs.add_class(token);
                            }
                        }
                        "style" => {
                            let StyleRules(rules) = map.next_value()?;
                            for (prop, value) in rules {
                                attrs.set_style(&prop, &value);
                            }
                        }
                        "data" => {
                            let nested: BTreeMap<String, AttrValue> = map.next_value()?;
                            for (name, value) in nested {
                                attrs.set_data(&name, value.0);
                            }
                        }
                        _ => {
                            let value: AttrValue = map.next_value()?;
                            attrs.set(key, value.0);
                        }
                    }
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_any(AttrsVisitor)
    }
}
