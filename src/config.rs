//! Declarative sidebar configuration
//!
//! A whole sidebar (brand block plus menu tree) can live in a YAML or JSON
//! document instead of code. Parsing is strict about types but tolerant of
//! unknown keys: those come back as [`ConfigWarning`]s with a line number and
//! a did-you-mean suggestion, so a typo like `lable:` surfaces instead of
//! silently dropping an item attribute.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{RenderError, RenderResult};
use crate::menu::{null_as_default, MenuEntry};
use crate::navbar::BrandConfig;

/// Root of a sidebar config document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Brand block for [`SideNavBar`](crate::SideNavBar).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandConfig>,

    /// Menu tree for [`SideNav`](crate::SideNav).
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub menu: Vec<MenuEntry>,
}

/// Non-fatal finding from config parsing, typically an unknown key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl SidebarConfig {
    /// Parse a YAML document.
    pub fn from_yaml(content: &str) -> RenderResult<Self> {
        let (config, _warnings) = Self::from_yaml_with_warnings(content)?;
        Ok(config)
    }

    /// Parse a YAML document and collect unknown-key warnings.
    pub fn from_yaml_with_warnings(content: &str) -> RenderResult<(Self, Vec<ConfigWarning>)> {
        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = serde_yaml_ng::Deserializer::from_str(content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| RenderError::InvalidConfig {
            message: e.to_string(),
        })?;

        Ok((config, collect_warnings(content, unknown_paths)))
    }

    /// Parse a JSON document.
    pub fn from_json(content: &str) -> RenderResult<Self> {
        let (config, _warnings) = Self::from_json_with_warnings(content)?;
        Ok(config)
    }

    /// Parse a JSON document and collect unknown-key warnings.
    pub fn from_json_with_warnings(content: &str) -> RenderResult<(Self, Vec<ConfigWarning>)> {
        let mut unknown_paths: Vec<String> = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);

        let config: Self = serde_ignored::deserialize(&mut deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| RenderError::InvalidConfig {
            message: e.to_string(),
        })?;
        deserializer.end().map_err(|e| RenderError::InvalidConfig {
            message: e.to_string(),
        })?;

        Ok((config, collect_warnings(content, unknown_paths)))
    }
}

fn collect_warnings(content: &str, unknown_paths: Vec<String>) -> Vec<ConfigWarning> {
    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path| {
            let key = path.split('.').last().unwrap_or(path.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
            }
        })
        .collect();

    if !warnings.is_empty() {
        warn!(count = warnings.len(), "sidebar config contains unknown keys");
    }
    warnings
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Nearest schema key within edit distance 2, if any.
fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "brand",
        "menu",
        "label",
        "url",
        "icon",
        "icon_html",
        "icon_options",
        "items",
        "visible",
        "disabled",
        "active",
        "encode",
        "options",
        "link_options",
        "dropdown_options",
        "route",
        "params",
        "image",
        "image_options",
        "text_options",
        "custom",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((candidate, dist)),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let substitution = diagonal + usize::from(ac != bc);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j + 1] + 1).min(row[j] + 1);
        }
    }

    row[b_chars.len()]
}
