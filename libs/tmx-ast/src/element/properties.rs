use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named string properties attached to a node. Keys are unique; storage
/// order is lexicographic, which callers must not rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TmxProperties {
    pub properties: BTreeMap<String, String>,
}

impl TmxProperties {
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// One `<property>` entry as it appears in the document, before it is folded
/// into a [`TmxProperties`] set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TmxProperty {
    pub name: String,
    pub value: String,
}
