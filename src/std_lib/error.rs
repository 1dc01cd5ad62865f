//! The Error family of built-ins.

use crate::ds::error::IntrinsicError;
use crate::ds::object::{define_data_property, new_object};
use crate::ds::operations::get_member;
use crate::ds::value::JsValue;
use crate::resolver::registry::IntrinsicRegistry;
use crate::std_lib::CoreObjects;

const NATIVE_ERROR_NAMES: &[&str] = &[
    "EvalError",
    "RangeError",
    "ReferenceError",
    "SyntaxError",
    "TypeError",
    "URIError",
];

pub(crate) fn register(registry: &mut IntrinsicRegistry, core: &CoreObjects) {
    let error_prototype = core.ordinary("Error");
    define_data_property(&error_prototype, "name", JsValue::String("Error".to_string()));
    define_data_property(&error_prototype, "message", JsValue::String(String::new()));
    core.method(&error_prototype, "toString", error_to_string);

    let error_ctor = core.constructor("Error", error_constructor, &error_prototype);
    registry.seed_present("%Error%", JsValue::Object(error_ctor));
    registry.seed_present("%Error.prototype%", JsValue::Object(error_prototype.clone()));

    // Each native error prototype delegates to Error.prototype.
    for name in NATIVE_ERROR_NAMES {
        let proto = new_object(name, Some(error_prototype.clone()));
        define_data_property(&proto, "name", JsValue::String(name.to_string()));
        let ctor = core.constructor(name, error_constructor, &proto);
        registry.seed_present(format!("%{}%", name), JsValue::Object(ctor));
    }
}

fn error_constructor(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Undefined)
}

/// Error.prototype.toString
fn error_to_string(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let name = match get_member(this, "name")? {
        JsValue::String(s) => s,
        _ => "Error".to_string(),
    };
    let message = match get_member(this, "message")? {
        JsValue::String(s) => s,
        _ => String::new(),
    };
    Ok(JsValue::String(if message.is_empty() {
        name
    } else {
        format!("{}: {}", name, message)
    }))
}
