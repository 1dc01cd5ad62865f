use std::rc::Rc;

use super::aliases::AliasTable;
use super::core_resolver::IntrinsicResolver;
use super::registry::IntrinsicRegistry;
use crate::ds::object::{
    define_data_emulating_accessor, define_data_property, new_object, same_object,
};
use crate::ds::value::{JsNumberType, JsValue};

fn object_of(value: &JsValue) -> &crate::ds::object::JsObjectRef {
    match value {
        JsValue::Object(o) => o,
        other => panic!("expected an object, got {:?}", other),
    }
}

#[test]
fn test_resolves_seeded_base_intrinsic() {
    let marker = new_object("Array", None);
    let mut registry = IntrinsicRegistry::new();
    registry.seed_present("%Array%", JsValue::Object(marker.clone()));
    let mut resolver = IntrinsicResolver::new(registry, AliasTable::new());

    let resolved = resolver.get("%Array%").unwrap();
    assert!(same_object(object_of(&resolved), &marker));
}

#[test]
fn test_delimiters_are_optional() {
    let mut resolver = IntrinsicResolver::with_core();

    let with_delimiters = resolver.get("%Array%").unwrap();
    let without = resolver.get("Array").unwrap();
    assert_eq!(with_delimiters, without);
}

#[test]
fn test_nested_path_is_cached_and_referentially_stable() {
    let mut resolver = IntrinsicResolver::with_core();
    assert!(!resolver.registry().has("%Array.prototype.push%"));

    let first = resolver.get("%Array.prototype.push%").unwrap();
    assert!(resolver.registry().has("%Array.prototype%"));
    assert!(resolver.registry().has("%Array.prototype.push%"));

    let second = resolver.get("%Array.prototype.push%").unwrap();
    assert!(Rc::ptr_eq(object_of(&first), object_of(&second)));
}

#[test]
fn test_legacy_alias_resolves_to_modern_path() {
    let mut resolver = IntrinsicResolver::with_core();

    let aliased = resolver.get("%ArrayPrototype%").unwrap();
    let modern = resolver.get("%Array.prototype%").unwrap();
    assert!(Rc::ptr_eq(object_of(&aliased), object_of(&modern)));
}

#[test]
fn test_deep_legacy_alias() {
    let mut resolver = IntrinsicResolver::with_core();

    let aliased = resolver.get("%ArrayProto_forEach%").unwrap();
    let modern = resolver.get("%Array.prototype.forEach%").unwrap();
    assert!(Rc::ptr_eq(object_of(&aliased), object_of(&modern)));
}

#[test]
fn test_empty_name_is_a_type_error() {
    let mut resolver = IntrinsicResolver::with_core();

    let err = resolver.get("").unwrap_err();
    assert!(err.is_type_error());
    assert!(err.message().contains("non-empty"));
}

#[test]
fn test_absent_intrinsic() {
    let mut resolver = IntrinsicResolver::with_core();
    let before = resolver.registry().len();

    let err = resolver.resolve("%Symbol%", false).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(
        err.message(),
        "intrinsic %Symbol% exists, but is not available. Please file an issue!"
    );

    assert_eq!(resolver.resolve("%Symbol%", true).unwrap(), JsValue::Undefined);
    assert_eq!(resolver.registry().len(), before);
}

#[test]
fn test_absent_base_with_path() {
    let mut resolver = IntrinsicResolver::with_core();

    let err = resolver.resolve("%Symbol.iterator%", false).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(
        resolver.resolve("%Symbol.iterator%", true).unwrap(),
        JsValue::Undefined
    );
}

#[test]
fn test_alias_of_absent_base() {
    let mut resolver = IntrinsicResolver::with_core();

    let err = resolver.resolve("%Generator%", false).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(resolver.resolve("%Generator%", true).unwrap(), JsValue::Undefined);
}

#[test]
fn test_unknown_base_is_a_syntax_error_even_when_missing_allowed() {
    let mut resolver = IntrinsicResolver::with_core();

    for allow_missing in [false, true] {
        let err = resolver.resolve("%TotallyMadeUp%", allow_missing).unwrap_err();
        assert!(err.is_syntax_error());
        assert!(err.message().contains("does not exist!"));
    }
}

#[test]
fn test_bare_percent_names_the_empty_intrinsic() {
    let mut resolver = IntrinsicResolver::with_core();

    for name in ["%", "%%"] {
        let err = resolver.get(name).unwrap_err();
        assert!(err.is_syntax_error());
        assert!(err.message().contains("does not exist!"));
    }
}

#[test]
fn test_mismatched_quotes_in_property_name() {
    let mut resolver = IntrinsicResolver::with_core();

    let err = resolver.get("%Object.'toString%").unwrap_err();
    assert!(err.is_syntax_error());
    assert!(err.message().contains("matching quotes"));
}

#[test]
fn test_missing_property_on_present_base() {
    let mut resolver = IntrinsicResolver::with_core();

    let err = resolver.resolve("%Array.prototype.flatMap%", false).unwrap_err();
    assert!(err.is_type_error());
    assert!(err.message().contains("property is not available"));

    assert_eq!(
        resolver.resolve("%Array.prototype.flatMap%", true).unwrap(),
        JsValue::Undefined
    );
    assert!(!resolver.registry().has("%Array.prototype.flatMap%"));
}

#[test]
fn test_constructor_step_is_never_cached() {
    let mut resolver = IntrinsicResolver::with_core();

    let ctor = resolver.get("%Array.prototype.constructor%").unwrap();
    let array = resolver.get("%Array%").unwrap();
    assert!(Rc::ptr_eq(object_of(&ctor), object_of(&array)));

    // The intermediate own step is memoized, the constructor step is not.
    assert!(resolver.registry().has("%Array.prototype%"));
    assert!(!resolver.registry().has("%Array.prototype.constructor%"));
}

#[test]
fn test_inherited_final_step_is_not_cached() {
    let mut resolver = IntrinsicResolver::with_core();

    // hasOwnProperty lives on Object.prototype, reached by inheritance.
    let resolved = resolver.get("%Array.prototype.hasOwnProperty%").unwrap();
    assert!(object_of(&resolved).borrow().is_callable());
    assert!(!resolver.registry().has("%Array.prototype.hasOwnProperty%"));
}

#[test]
fn test_inherited_step_suppresses_all_deeper_caching() {
    let shared = new_object("Object", None);
    define_data_property(&shared, "deep", JsValue::Number(JsNumberType::Integer(42)));
    let parent = new_object("Object", None);
    define_data_property(&parent, "shared", JsValue::Object(shared));
    let child = new_object("Object", Some(parent));

    let mut registry = IntrinsicRegistry::new();
    registry.seed_present("%Child%", JsValue::Object(child));
    let mut resolver = IntrinsicResolver::new(registry, AliasTable::new());

    let resolved = resolver.get("%Child.shared.deep%").unwrap();
    assert_eq!(resolved, JsValue::Number(JsNumberType::Integer(42)));

    // "shared" came through the prototype chain, so neither it nor the
    // own "deep" step below it may be written back.
    assert!(!resolver.registry().has("%Child.shared%"));
    assert!(!resolver.registry().has("%Child.shared.deep%"));
}

#[test]
fn test_cache_reads_stay_allowed_after_suppression() {
    let shared = new_object("Object", None);
    define_data_property(&shared, "deep", JsValue::Number(JsNumberType::Integer(42)));
    let parent = new_object("Object", None);
    define_data_property(&parent, "shared", JsValue::Object(shared));
    let child = new_object("Object", Some(parent));

    let mut registry = IntrinsicRegistry::new();
    registry.seed_present("%Child%", JsValue::Object(child));
    let mut resolver = IntrinsicResolver::new(registry, AliasTable::new());

    resolver
        .registry_mut()
        .set("%Child.shared.deep%", JsValue::Number(JsNumberType::Integer(99)));
    let before = resolver.registry().len();

    // The suppressed walk still short-circuits through the seeded entry.
    let resolved = resolver.get("%Child.shared.deep%").unwrap();
    assert_eq!(resolved, JsValue::Number(JsNumberType::Integer(99)));
    assert_eq!(resolver.registry().len(), before);
}

#[test]
fn test_accessor_property_resolves_to_its_getter() {
    let mut resolver = IntrinsicResolver::with_core();

    let size = resolver.get("%Map.prototype.size%").unwrap();
    let getter = object_of(&size);
    assert!(getter.borrow().is_callable());

    let result = getter
        .borrow()
        .callable()
        .unwrap()
        .call(&JsValue::Undefined, &[])
        .unwrap();
    assert_eq!(result, JsValue::Number(JsNumberType::Integer(0)));

    assert!(resolver.registry().has("%Map.prototype.size%"));
}

#[test]
fn test_marked_getter_is_looked_through() {
    let config = new_object("Object", None);
    define_data_emulating_accessor(
        &config,
        "answer",
        JsValue::Number(JsNumberType::Integer(42)),
        None,
    );

    let mut registry = IntrinsicRegistry::new();
    registry.seed_present("%Config%", JsValue::Object(config));
    let mut resolver = IntrinsicResolver::new(registry, AliasTable::new());

    let resolved = resolver.get("%Config.answer%").unwrap();
    assert_eq!(resolved, JsValue::Number(JsNumberType::Integer(42)));
    assert!(resolver.registry().has("%Config.answer%"));
}

#[test]
fn test_preseeded_dotted_name_matches_the_member_walk() {
    let mut resolver = IntrinsicResolver::with_core();

    let seeded = resolver.get("%Math.abs%").unwrap();
    let math = resolver.get("%Math%").unwrap();
    let walked = crate::ds::operations::get_member(&math, "abs").unwrap();
    assert!(Rc::ptr_eq(object_of(&seeded), object_of(&walked)));
}

#[test]
fn test_bracketed_segments_resolve_like_dotted_ones() {
    let mut resolver = IntrinsicResolver::with_core();

    let bracketed = resolver.get("%Array.prototype['push']%").unwrap();
    let dotted = resolver.get("%Array.prototype.push%").unwrap();
    assert!(Rc::ptr_eq(object_of(&bracketed), object_of(&dotted)));
}

#[test]
fn test_one_sided_delimiter_is_rejected() {
    let mut resolver = IntrinsicResolver::with_core();

    assert!(resolver.get("%Array").unwrap_err().is_syntax_error());
    assert!(resolver.get("Array%").unwrap_err().is_syntax_error());
}
