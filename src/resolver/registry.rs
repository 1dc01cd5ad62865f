//! Seed registry of intrinsic values, doubling as the resolution cache.

use std::collections::HashMap;

use crate::ds::value::JsValue;
use crate::std_lib::register_core_intrinsics;

/// One registry slot. `Absent` records that the intrinsic is known but has
/// no value in this realm - a different state from "never looked up".
#[derive(Debug, Clone)]
pub enum IntrinsicEntry {
    Present(JsValue),
    Absent,
}

impl IntrinsicEntry {
    pub fn is_absent(&self) -> bool {
        matches!(self, IntrinsicEntry::Absent)
    }

    /// The carried value; `Absent` reads as `undefined`.
    pub fn value(&self) -> JsValue {
        match self {
            IntrinsicEntry::Present(v) => v.clone(),
            IntrinsicEntry::Absent => JsValue::Undefined,
        }
    }
}

/// Registry of canonical names to availability-tagged values.
///
/// Keys are always delimited canonical names (`"%Array.prototype.push%"`).
/// Seeded once at construction, then extended append-only by the
/// resolver's cache writes; an overwrite is idempotent and harmless.
pub struct IntrinsicRegistry {
    entries: HashMap<String, IntrinsicEntry>,
}

impl IntrinsicRegistry {
    /// Create an empty registry. The host seeds it before handing it to a
    /// resolver.
    pub fn new() -> Self {
        IntrinsicRegistry {
            entries: HashMap::new(),
        }
    }

    /// Create a registry seeded with the core realm built-ins.
    pub fn with_core() -> Self {
        let mut registry = Self::new();
        register_core_intrinsics(&mut registry);
        registry
    }

    /// Construction-time seeding.
    pub fn seed(&mut self, name: impl Into<String>, entry: IntrinsicEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn seed_present(&mut self, name: impl Into<String>, value: JsValue) {
        self.seed(name, IntrinsicEntry::Present(value));
    }

    pub fn seed_absent(&mut self, name: impl Into<String>) {
        self.seed(name, IntrinsicEntry::Absent);
    }

    /// Cache write. Last write wins; no error on overwrite.
    pub fn set(&mut self, name: impl Into<String>, value: JsValue) {
        self.entries.insert(name.into(), IntrinsicEntry::Present(value));
    }

    pub fn get(&self, name: &str) -> Option<&IntrinsicEntry> {
        self.entries.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of live entries, seeded and cached alike. Useful for
    /// asserting that a resolution wrote (or did not write) to the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

impl Default for IntrinsicRegistry {
    fn default() -> Self {
        Self::with_core()
    }
}
