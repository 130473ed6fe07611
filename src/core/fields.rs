//! Serialize configuration and sparse-fieldset selection
//!
//! A [`SerializeConfig`] describes which fields of a resource may appear in a
//! response. Clients can narrow it further with a flat list of dotted field
//! paths (`name`, `address.city`); [`SerializeConfig::select`] builds the
//! pruned config and [`SerializeConfig::apply`] trims a serialized record
//! down to it.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::Arc;

/// Exposure rule for a single field
#[derive(Debug, Clone)]
pub enum FieldConfig {
    /// Scalar field, emitted exactly as serialized
    Leaf,

    /// Nested relation carrying its own exposure config
    Nested(Arc<SerializeConfig>),
}

/// Ordered mapping of exposable fields for one resource
///
/// Field order is preserved so responses stay deterministic. Nested configs
/// are shared behind `Arc` and may form cycles for self-referential
/// relations; selection guards against that with a pointer-identity memo.
#[derive(Debug, Clone, Default)]
pub struct SerializeConfig {
    pub fields: IndexMap<String, FieldConfig>,
}

impl SerializeConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Add a scalar field (builder style)
    pub fn leaf(mut self, name: &str) -> Self {
        self.fields.insert(name.to_string(), FieldConfig::Leaf);
        self
    }

    /// Add a nested relation (builder style)
    pub fn nested(mut self, name: &str, config: Arc<SerializeConfig>) -> Self {
        self.fields
            .insert(name.to_string(), FieldConfig::Nested(config));
        self
    }

    /// Whether this config exposes no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Restrict this config to the requested dotted field paths
    ///
    /// Unknown paths are skipped and an empty request yields an empty
    /// config, never an error. Paths with a dot route into the nested
    /// sub-config of their prefix; multiple paths under the same prefix are
    /// merged. A dotted selection takes precedence over selecting the same
    /// relation as a whole. The cycle guard is scoped to the current
    /// recursion path, so sibling relations sharing a config node each get
    /// their own selection.
    pub fn select<S: AsRef<str>>(&self, paths: &[S]) -> SerializeConfig {
        let paths: Vec<&str> = paths
            .iter()
            .map(AsRef::as_ref)
            .filter(|p| !p.is_empty())
            .collect();
        let mut memo = HashSet::new();
        self.select_inner(&paths, &mut memo)
    }

    fn select_inner(
        &self,
        paths: &[&str],
        memo: &mut HashSet<*const SerializeConfig>,
    ) -> SerializeConfig {
        let mut concrete: Vec<&str> = Vec::new();
        let mut subfields: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for &path in paths {
            match path.split_once('.') {
                None => concrete.push(path),
                Some((prefix, rest)) => subfields.entry(prefix).or_default().push(rest),
            }
        }

        let mut selected = SerializeConfig::new();
        for name in concrete {
            // dotted selection under the same prefix wins
            if subfields.contains_key(name) {
                continue;
            }
            match self.fields.get(name) {
                Some(FieldConfig::Leaf) => {
                    selected
                        .fields
                        .insert(name.to_string(), FieldConfig::Leaf);
                }
                Some(FieldConfig::Nested(config)) => {
                    // whole-relation selection clones the Arc, no recursion
                    selected
                        .fields
                        .insert(name.to_string(), FieldConfig::Nested(config.clone()));
                }
                None => {}
            }
        }

        for (prefix, rest) in subfields {
            let Some(FieldConfig::Nested(config)) = self.fields.get(prefix) else {
                continue;
            };
            // nodes already on the current path are dropped to break cycles;
            // siblings sharing a node are each selected on their own
            let ptr = Arc::as_ptr(config);
            if !memo.insert(ptr) {
                continue;
            }
            let sub = config.select_inner(&rest, memo);
            memo.remove(&ptr);
            selected
                .fields
                .insert(prefix.to_string(), FieldConfig::Nested(Arc::new(sub)));
        }

        selected
    }

    /// Prune a serialized record down to the configured fields
    ///
    /// Objects keep only configured keys; arrays prune each element. Missing
    /// fields are skipped. Scalars pass through untouched, so applying a
    /// config to a non-object value is a no-op. Recursion is bounded by the
    /// value's depth, so cyclic configs are safe here.
    pub fn apply(&self, value: &Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut out = Map::new();
                for (name, config) in &self.fields {
                    let Some(field_value) = map.get(name) else {
                        continue;
                    };
                    match config {
                        FieldConfig::Leaf => {
                            out.insert(name.clone(), field_value.clone());
                        }
                        FieldConfig::Nested(sub) => {
                            out.insert(name.clone(), sub.apply(field_value));
                        }
                    }
                }
                Value::Object(out)
            }
            Value::Array(items) => Value::Array(items.iter().map(|v| self.apply(v)).collect()),
            scalar => scalar.clone(),
        }
    }
}
