//! Legacy alias redirection table.
//!
//! Maps an older/alternate canonical name to a replacement path rooted at a
//! modern base name. Resolving `%ArrayPrototype%` is equivalent to
//! resolving `%Array%` followed by the `prototype` segment.

use std::collections::HashMap;

/// Legacy name to replacement path. The first element of each path is the
/// modern base name; the rest are member segments spliced into the walk.
static LEGACY_ALIAS_DATA: &[(&str, &[&str])] = &[
    ("%ArrayBufferPrototype%", &["ArrayBuffer", "prototype"]),
    ("%ArrayPrototype%", &["Array", "prototype"]),
    ("%ArrayProto_entries%", &["Array", "prototype", "entries"]),
    ("%ArrayProto_forEach%", &["Array", "prototype", "forEach"]),
    ("%ArrayProto_keys%", &["Array", "prototype", "keys"]),
    ("%ArrayProto_values%", &["Array", "prototype", "values"]),
    ("%AsyncFunctionPrototype%", &["AsyncFunction", "prototype"]),
    ("%AsyncGenerator%", &["AsyncGeneratorFunction", "prototype"]),
    (
        "%AsyncGeneratorPrototype%",
        &["AsyncGeneratorFunction", "prototype", "prototype"],
    ),
    ("%BooleanPrototype%", &["Boolean", "prototype"]),
    ("%DataViewPrototype%", &["DataView", "prototype"]),
    ("%DatePrototype%", &["Date", "prototype"]),
    ("%ErrorPrototype%", &["Error", "prototype"]),
    ("%EvalErrorPrototype%", &["EvalError", "prototype"]),
    ("%Float32ArrayPrototype%", &["Float32Array", "prototype"]),
    ("%Float64ArrayPrototype%", &["Float64Array", "prototype"]),
    ("%FunctionPrototype%", &["Function", "prototype"]),
    ("%Generator%", &["GeneratorFunction", "prototype"]),
    (
        "%GeneratorPrototype%",
        &["GeneratorFunction", "prototype", "prototype"],
    ),
    ("%Int8ArrayPrototype%", &["Int8Array", "prototype"]),
    ("%Int16ArrayPrototype%", &["Int16Array", "prototype"]),
    ("%Int32ArrayPrototype%", &["Int32Array", "prototype"]),
    ("%JSONParse%", &["JSON", "parse"]),
    ("%JSONStringify%", &["JSON", "stringify"]),
    ("%MapPrototype%", &["Map", "prototype"]),
    ("%NumberPrototype%", &["Number", "prototype"]),
    ("%ObjectPrototype%", &["Object", "prototype"]),
    ("%ObjProto_toString%", &["Object", "prototype", "toString"]),
    ("%ObjProto_valueOf%", &["Object", "prototype", "valueOf"]),
    ("%PromisePrototype%", &["Promise", "prototype"]),
    ("%PromiseProto_then%", &["Promise", "prototype", "then"]),
    ("%Promise_all%", &["Promise", "all"]),
    ("%Promise_reject%", &["Promise", "reject"]),
    ("%Promise_resolve%", &["Promise", "resolve"]),
    ("%RangeErrorPrototype%", &["RangeError", "prototype"]),
    ("%ReferenceErrorPrototype%", &["ReferenceError", "prototype"]),
    ("%RegExpPrototype%", &["RegExp", "prototype"]),
    ("%SetPrototype%", &["Set", "prototype"]),
    (
        "%SharedArrayBufferPrototype%",
        &["SharedArrayBuffer", "prototype"],
    ),
    ("%StringPrototype%", &["String", "prototype"]),
    ("%SymbolPrototype%", &["Symbol", "prototype"]),
    ("%SyntaxErrorPrototype%", &["SyntaxError", "prototype"]),
    ("%TypedArrayPrototype%", &["TypedArray", "prototype"]),
    ("%TypeErrorPrototype%", &["TypeError", "prototype"]),
    ("%Uint8ArrayPrototype%", &["Uint8Array", "prototype"]),
    (
        "%Uint8ClampedArrayPrototype%",
        &["Uint8ClampedArray", "prototype"],
    ),
    ("%Uint16ArrayPrototype%", &["Uint16Array", "prototype"]),
    ("%Uint32ArrayPrototype%", &["Uint32Array", "prototype"]),
    ("%URIErrorPrototype%", &["URIError", "prototype"]),
    ("%WeakMapPrototype%", &["WeakMap", "prototype"]),
    ("%WeakSetPrototype%", &["WeakSet", "prototype"]),
];

lazy_static! {
    static ref LEGACY_ALIASES: HashMap<&'static str, &'static [&'static str]> =
        LEGACY_ALIAS_DATA.iter().copied().collect();
}

/// Immutable-after-construction lookup table from legacy canonical name to
/// replacement path.
pub struct AliasTable {
    entries: HashMap<String, Vec<String>>,
}

impl AliasTable {
    /// An empty table - no redirections.
    pub fn new() -> Self {
        AliasTable {
            entries: HashMap::new(),
        }
    }

    /// The standard legacy-alias set.
    pub fn with_legacy_aliases() -> Self {
        let mut table = Self::new();
        for (legacy, path) in LEGACY_ALIASES.iter() {
            table.insert(legacy, path.iter().map(|s| s.to_string()).collect());
        }
        table
    }

    /// Construction-time registration. `path[0]` must be the modern base
    /// name.
    pub fn insert(&mut self, legacy: &str, path: Vec<String>) {
        self.entries.insert(legacy.to_string(), path);
    }

    pub fn lookup(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(|p| p.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::with_legacy_aliases()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_alias() {
        let table = AliasTable::with_legacy_aliases();
        assert_eq!(
            table.lookup("%ArrayPrototype%").unwrap(),
            ["Array", "prototype"]
        );
        assert_eq!(
            table.lookup("%GeneratorPrototype%").unwrap(),
            ["GeneratorFunction", "prototype", "prototype"]
        );
    }

    #[test]
    fn test_lookup_unknown_name() {
        let table = AliasTable::with_legacy_aliases();
        assert!(table.lookup("%Array%").is_none());
        assert!(table.lookup("ArrayPrototype").is_none());
    }

    #[test]
    fn test_full_data_set_is_loaded() {
        assert_eq!(
            AliasTable::with_legacy_aliases().len(),
            super::LEGACY_ALIAS_DATA.len()
        );
    }
}
