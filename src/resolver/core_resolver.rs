//! The stepwise descriptor resolver.
//!
//! Walks a parsed property path against the seed registry, applying legacy
//! aliasing, per-step member access with own-property tracking, and
//! selective memoization of the values it passes through.

use crate::ds::error::IntrinsicError;
use crate::ds::object_property::PropertyDescriptor;
use crate::ds::object::ORIGINAL_VALUE_MARKER;
use crate::ds::operations::{get_member, get_own_property, has_member, has_own_member};
use crate::ds::value::JsValue;
use crate::parser::parse_property_path;
use crate::resolver::aliases::AliasTable;
use crate::resolver::registry::IntrinsicRegistry;

const QUOTE_CHARS: [char; 3] = ['"', '\'', '`'];

/// Member name shared by every object graph through its prototype chain.
/// A walk that passes through it can no longer cache safely, because the
/// cached entry would alias unrelated values.
const CONSTRUCTOR_TOKEN: &str = "constructor";

/// Resolved base intrinsic, before the member walk starts.
struct BaseIntrinsic {
    /// Replacement path when the requested base was a legacy alias.
    alias: Option<Vec<String>>,
    value: JsValue,
}

/// Resolves descriptors against an injected registry/alias-table pair.
///
/// The registry is owned by the resolver and serves as a write-through
/// cache: nested paths resolved through own properties are memoized under
/// their full canonical name, so repeated lookups return the exact same
/// reference without re-walking the object graph.
pub struct IntrinsicResolver {
    registry: IntrinsicRegistry,
    aliases: AliasTable,
}

impl IntrinsicResolver {
    pub fn new(registry: IntrinsicRegistry, aliases: AliasTable) -> Self {
        IntrinsicResolver { registry, aliases }
    }

    /// A resolver over the core seed realm and the standard legacy
    /// aliases.
    pub fn with_core() -> Self {
        Self::new(
            IntrinsicRegistry::with_core(),
            AliasTable::with_legacy_aliases(),
        )
    }

    pub fn registry(&self) -> &IntrinsicRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut IntrinsicRegistry {
        &mut self.registry
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Resolve a descriptor, failing when the target is unavailable.
    /// Shorthand for `resolve(name, false)`.
    pub fn get(&mut self, name: &str) -> Result<JsValue, IntrinsicError> {
        self.resolve(name, false)
    }

    /// Resolve a descriptor into the value it names.
    ///
    /// With `allow_missing` set, an intrinsic (or a property along the
    /// path) that is legitimately unavailable in this realm yields
    /// `Ok(JsValue::Undefined)` instead of a type error. Malformed
    /// descriptors and unknown base names fail regardless.
    pub fn resolve(
        &mut self,
        name: &str,
        allow_missing: bool,
    ) -> Result<JsValue, IntrinsicError> {
        if name.is_empty() {
            return Err(IntrinsicError::TypeError(
                "intrinsic name must be a non-empty string".to_string(),
            ));
        }

        let mut parts = parse_property_path(name)?;
        let mut base_name = parts.first().cloned().unwrap_or_default();

        let base = self.base_intrinsic(&format!("%{}%", base_name), allow_missing)?;
        let mut value = base.value;
        if let Some(alias) = base.alias {
            base_name = alias[0].clone();
            parts.splice(0..1, alias);
        }

        let mut is_own = true;
        let mut skip_further_caching = false;
        for i in 1..parts.len() {
            let part = parts[i].clone();

            let first = part.chars().next();
            let last = part.chars().last();
            if let (Some(f), Some(l)) = (first, last) {
                if (QUOTE_CHARS.contains(&f) || QUOTE_CHARS.contains(&l)) && f != l {
                    return Err(IntrinsicError::SyntaxError(
                        "property names with quotes must have matching quotes".to_string(),
                    ));
                }
            }

            // Absorbing state: once a step is reached through inheritance,
            // or names the universally shared member, no deeper step may be
            // written into the registry. Reads of already-cached names stay
            // allowed.
            if part == CONSTRUCTOR_TOKEN || !is_own {
                skip_further_caching = true;
            }

            base_name = format!("{}.{}", base_name, part);
            let real_name = format!("%{}%", base_name);

            if let Some(entry) = self.registry.get(&real_name) {
                value = entry.value();
            } else if !value.is_nullish() {
                if !has_member(&value, &part) {
                    if !allow_missing {
                        return Err(IntrinsicError::TypeError(format!(
                            "base intrinsic for {} exists, but the property is not available.",
                            name
                        )));
                    }
                    return Ok(JsValue::Undefined);
                }
                if i + 1 >= parts.len() {
                    let desc = get_own_property(&value, &part);
                    is_own = desc.is_some();

                    // By convention, a getter installed to emulate a plain
                    // data value carries an `originalValue` marker. A
                    // marked getter is looked through; an unmarked own
                    // accessor IS the intrinsic, so it is handed out
                    // as-is, invocable against an arbitrary receiver.
                    let plain_getter = match &desc {
                        Some(PropertyDescriptor::Accessor { get: Some(g), .. })
                            if !g.borrow().has_property(ORIGINAL_VALUE_MARKER) =>
                        {
                            Some(g.clone())
                        }
                        _ => None,
                    };
                    value = match plain_getter {
                        Some(getter) => JsValue::Object(getter),
                        None => get_member(&value, &part)?,
                    };
                } else {
                    is_own = has_own_member(&value, &part);
                    value = get_member(&value, &part)?;
                }

                if is_own && !skip_further_caching {
                    self.registry.set(real_name, value.clone());
                }
            } else {
                // Nothing cached under this name and nothing to descend
                // into: the base intrinsic resolved to the absent sentinel.
                if !allow_missing {
                    return Err(IntrinsicError::TypeError(format!(
                        "base intrinsic for {} exists, but the property is not available.",
                        name
                    )));
                }
                return Ok(JsValue::Undefined);
            }
        }
        Ok(value)
    }

    /// Look up the base canonical name, redirecting legacy aliases first.
    fn base_intrinsic(
        &self,
        name: &str,
        allow_missing: bool,
    ) -> Result<BaseIntrinsic, IntrinsicError> {
        let mut intrinsic_name = name.to_string();
        let mut alias = None;
        if let Some(path) = self.aliases.lookup(&intrinsic_name) {
            alias = Some(path.to_vec());
            intrinsic_name = format!("%{}%", path[0]);
        }

        match self.registry.get(&intrinsic_name) {
            Some(entry) => {
                if entry.is_absent() && !allow_missing {
                    return Err(IntrinsicError::TypeError(format!(
                        "intrinsic {} exists, but is not available. Please file an issue!",
                        name
                    )));
                }
                Ok(BaseIntrinsic {
                    alias,
                    value: entry.value(),
                })
            }
            None => Err(IntrinsicError::SyntaxError(format!(
                "intrinsic {} does not exist!",
                name
            ))),
        }
    }
}

impl Default for IntrinsicResolver {
    fn default() -> Self {
        Self::with_core()
    }
}
