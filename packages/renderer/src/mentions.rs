use std::collections::HashMap;

use contractdoc_document::{ContractNode, ElementKind};
use tracing::{debug, warn};

/// Key-value store keeping duplicate mentions of the same id in sync.
///
/// Seeded once per document with a first-wins policy; runtime updates are
/// last-write-wins. The asymmetry mirrors the observed behavior of the
/// source system and is kept deliberately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MentionStore {
    values: HashMap<String, String>,
}

impl MentionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the whole tree pre-order and record the first value seen for
    /// each mention id. Mentions missing an id or a value never enter the
    /// store.
    pub fn seed(nodes: &[ContractNode]) -> Self {
        let mut store = MentionStore::new();
        store.collect(nodes);
        debug!(mentions = store.values.len(), "Seeded mention store");
        store
    }

    fn collect(&mut self, nodes: &[ContractNode]) {
        for node in nodes {
            if let Some(element) = node.as_element() {
                if element.kind == ElementKind::Mention {
                    if let (Some(id), Some(value)) = (&element.id, &element.value) {
                        if !id.is_empty() && !value.is_empty() {
                            if let Some(existing) = self.values.get(id) {
                                if existing != value {
                                    warn!(
                                        id = %id,
                                        kept = %existing,
                                        ignored = %value,
                                        "Duplicate mention id with divergent value, keeping first"
                                    );
                                }
                            } else {
                                self.values.insert(id.clone(), value.clone());
                            }
                        }
                    }
                }
            }
            // Text nodes may carry nested children too
            self.collect(node.children());
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overwrite the stored value unconditionally. Every rendered occurrence
    /// of the id reflects the new value on the next render pass.
    pub fn update(&mut self, id: impl Into<String>, value: impl Into<String>) {
        let id = id.into();
        let value = value.into();
        debug!(id = %id, value = %value, "Updating mention value");
        self.values.insert(id, value);
    }
}
