//! Keyed collection built-ins: Map, Set, WeakMap and WeakSet.

use crate::ds::error::IntrinsicError;
use crate::ds::object::{define_accessor_property, JsObjectRef};
use crate::ds::value::{JsNumberType, JsValue};
use crate::resolver::registry::IntrinsicRegistry;
use crate::std_lib::CoreObjects;

pub(crate) fn register(registry: &mut IntrinsicRegistry, core: &CoreObjects) {
    let map_proto = core.ordinary("Map");
    core.method(&map_proto, "get", collection_undefined);
    core.method(&map_proto, "set", collection_self);
    core.method(&map_proto, "has", collection_false);
    core.method(&map_proto, "delete", collection_false);
    core.method(&map_proto, "forEach", collection_undefined);
    define_size_accessor(core, &map_proto);
    let map_ctor = core.constructor("Map", collection_constructor, &map_proto);
    registry.seed_present("%Map%", JsValue::Object(map_ctor));

    let set_proto = core.ordinary("Set");
    core.method(&set_proto, "add", collection_self);
    core.method(&set_proto, "has", collection_false);
    core.method(&set_proto, "delete", collection_false);
    core.method(&set_proto, "forEach", collection_undefined);
    define_size_accessor(core, &set_proto);
    let set_ctor = core.constructor("Set", collection_constructor, &set_proto);
    registry.seed_present("%Set%", JsValue::Object(set_ctor));

    let weak_map_proto = core.ordinary("WeakMap");
    core.method(&weak_map_proto, "get", collection_undefined);
    core.method(&weak_map_proto, "set", collection_self);
    core.method(&weak_map_proto, "has", collection_false);
    core.method(&weak_map_proto, "delete", collection_false);
    let weak_map_ctor = core.constructor("WeakMap", collection_constructor, &weak_map_proto);
    registry.seed_present("%WeakMap%", JsValue::Object(weak_map_ctor));

    let weak_set_proto = core.ordinary("WeakSet");
    core.method(&weak_set_proto, "add", collection_self);
    core.method(&weak_set_proto, "has", collection_false);
    core.method(&weak_set_proto, "delete", collection_false);
    let weak_set_ctor = core.constructor("WeakSet", collection_constructor, &weak_set_proto);
    registry.seed_present("%WeakSet%", JsValue::Object(weak_set_ctor));
}

/// `size` is a genuine accessor, unlike the data-valued methods, so
/// resolving through it yields the getter function itself.
fn define_size_accessor(core: &CoreObjects, proto: &JsObjectRef) {
    let getter = core.native("get size", size_getter);
    define_accessor_property(proto, "size", Some(getter), None);
}

fn size_getter(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Number(JsNumberType::Integer(0)))
}

fn collection_constructor(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Undefined)
}

fn collection_self(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(this.clone())
}

fn collection_undefined(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Undefined)
}

fn collection_false(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Boolean(false))
}
