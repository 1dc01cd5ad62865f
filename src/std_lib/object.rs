//! Object built-in.

use crate::ds::error::IntrinsicError;
use crate::ds::operations::has_own_member;
use crate::ds::value::JsValue;
use crate::resolver::registry::IntrinsicRegistry;
use crate::std_lib::CoreObjects;

pub(crate) fn register(registry: &mut IntrinsicRegistry, core: &CoreObjects) {
    let proto = &core.object_prototype;
    core.method(proto, "toString", object_to_string);
    core.method(proto, "valueOf", object_value_of);
    core.method(proto, "hasOwnProperty", object_has_own_property);

    let ctor = core.constructor("Object", object_constructor, proto);
    let gopd = core.method(&ctor, "getOwnPropertyDescriptor", object_get_own_property_descriptor);
    let define = core.method(&ctor, "defineProperty", object_define_property);
    let get_proto = core.method(&ctor, "getPrototypeOf", object_get_prototype_of);
    core.method(&ctor, "keys", object_keys);

    registry.seed_present("%Object%", JsValue::Object(ctor));
    registry.seed_present("%Object.getOwnPropertyDescriptor%", JsValue::Object(gopd));
    registry.seed_present("%Object.defineProperty%", JsValue::Object(define));
    registry.seed_present("%Object.getPrototypeOf%", JsValue::Object(get_proto));
}

fn object_constructor(
    _this: &JsValue,
    args: &[JsValue],
) -> Result<JsValue, IntrinsicError> {
    match args.first() {
        Some(JsValue::Object(_)) => Ok(args[0].clone()),
        _ => Ok(JsValue::Undefined),
    }
}

/// Object.prototype.toString
fn object_to_string(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let class = match this.as_object() {
        Some(o) => o.borrow().class_name().to_string(),
        None if this.is_null() => "Null".to_string(),
        None if this.is_undefined() => "Undefined".to_string(),
        None => "Object".to_string(),
    };
    Ok(JsValue::String(format!("[object {}]", class)))
}

/// Object.prototype.valueOf
fn object_value_of(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(this.clone())
}

/// Object.prototype.hasOwnProperty
fn object_has_own_property(
    this: &JsValue,
    args: &[JsValue],
) -> Result<JsValue, IntrinsicError> {
    let key = match args.first() {
        Some(JsValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => return Ok(JsValue::Boolean(false)),
    };
    Ok(JsValue::Boolean(has_own_member(this, &key)))
}

fn object_get_own_property_descriptor(
    _this: &JsValue,
    _args: &[JsValue],
) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Undefined)
}

fn object_define_property(
    _this: &JsValue,
    args: &[JsValue],
) -> Result<JsValue, IntrinsicError> {
    match args.first() {
        Some(JsValue::Object(_)) => Ok(args[0].clone()),
        _ => Err(IntrinsicError::TypeError(
            "Object.defineProperty called on non-object".to_string(),
        )),
    }
}

fn object_get_prototype_of(
    _this: &JsValue,
    args: &[JsValue],
) -> Result<JsValue, IntrinsicError> {
    match args.first().and_then(|v| v.as_object()) {
        Some(o) => Ok(match o.borrow().prototype() {
            Some(p) => JsValue::Object(p),
            None => JsValue::Null,
        }),
        None => Err(IntrinsicError::TypeError(
            "Object.getPrototypeOf called on non-object".to_string(),
        )),
    }
}

fn object_keys(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Undefined)
}
