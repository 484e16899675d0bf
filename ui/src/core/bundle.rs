//! Translation bundles: nested JSON objects with string leaves.

use serde_json::{Map, Value};

use super::error::LocaleError;

/// One language's translations. Lookups never fail loudly: anything that is
/// not a non-empty string at the end of the path reads as "no translation".
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationBundle {
    root: Value,
}

impl Default for TranslationBundle {
    fn default() -> Self {
        Self::empty()
    }
}

impl TranslationBundle {
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    pub fn from_value(root: Value) -> Result<Self, LocaleError> {
        if root.is_object() {
            Ok(Self { root })
        } else {
            Err(LocaleError::NotAnObject)
        }
    }

    pub fn from_json(src: &str) -> Result<Self, LocaleError> {
        Self::from_value(serde_json::from_str(src)?)
    }

    pub fn is_empty(&self) -> bool {
        self.root.as_object().map_or(true, Map::is_empty)
    }

    /// Strict left-to-right descent through `a.b.c`.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        let mut current = &self.root;
        for segment in path.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        current.as_str().filter(|s| !s.is_empty())
    }

    /// Every dotted path that ends in a string leaf, sorted.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_leaves(&self.root, &mut String::new(), &mut out);
        out.sort();
        out
    }
}

fn collect_leaves(node: &Value, prefix: &mut String, out: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                let len = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(key);
                collect_leaves(child, prefix, out);
                prefix.truncate(len);
            }
        }
        Value::String(_) => out.push(prefix.clone()),
        _ => {}
    }
}
