//! String, Number and Boolean wrapper built-ins.

use crate::ds::error::IntrinsicError;
use crate::ds::value::{JsNumberType, JsValue};
use crate::resolver::registry::IntrinsicRegistry;
use crate::std_lib::CoreObjects;

pub(crate) fn register(registry: &mut IntrinsicRegistry, core: &CoreObjects) {
    let string_proto = core.ordinary("String");
    core.method(&string_proto, "toString", wrapper_to_string);
    core.method(&string_proto, "valueOf", wrapper_value_of);
    core.method(&string_proto, "charAt", string_char_at);
    core.method(&string_proto, "slice", string_slice);
    core.method(&string_proto, "replace", string_replace);
    let string_ctor = core.constructor("String", string_constructor, &string_proto);
    registry.seed_present("%String%", JsValue::Object(string_ctor));

    let number_proto = core.ordinary("Number");
    core.method(&number_proto, "toString", wrapper_to_string);
    core.method(&number_proto, "valueOf", wrapper_value_of);
    let number_ctor = core.constructor("Number", number_constructor, &number_proto);
    registry.seed_present("%Number%", JsValue::Object(number_ctor));

    let boolean_proto = core.ordinary("Boolean");
    core.method(&boolean_proto, "toString", wrapper_to_string);
    core.method(&boolean_proto, "valueOf", wrapper_value_of);
    let boolean_ctor = core.constructor("Boolean", boolean_constructor, &boolean_proto);
    registry.seed_present("%Boolean%", JsValue::Object(boolean_ctor));
}

fn string_constructor(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::String(match args.first() {
        Some(v) => v.to_string(),
        None => String::new(),
    }))
}

fn number_constructor(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(match args.first() {
        Some(JsValue::Number(n)) => JsValue::Number(n.clone()),
        Some(JsValue::Boolean(true)) => JsValue::Number(JsNumberType::Integer(1)),
        Some(JsValue::Boolean(false)) | None => JsValue::Number(JsNumberType::Integer(0)),
        _ => JsValue::Number(JsNumberType::NaN),
    })
}

fn boolean_constructor(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let truthy = match args.first() {
        Some(JsValue::Boolean(b)) => *b,
        Some(JsValue::String(s)) => !s.is_empty(),
        Some(JsValue::Number(n)) => {
            let f = n.as_f64();
            !(f == 0.0 || f.is_nan())
        }
        Some(JsValue::Object(_)) => true,
        Some(JsValue::Undefined) | Some(JsValue::Null) | None => false,
    };
    Ok(JsValue::Boolean(truthy))
}

fn wrapper_to_string(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::String(this.to_string()))
}

fn wrapper_value_of(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(this.clone())
}

fn string_char_at(this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let s = match this {
        JsValue::String(s) => s,
        _ => return Ok(JsValue::String(String::new())),
    };
    let index = match args.first() {
        Some(JsValue::Number(n)) => n.as_f64() as usize,
        _ => 0,
    };
    Ok(JsValue::String(
        s.chars().nth(index).map(|c| c.to_string()).unwrap_or_default(),
    ))
}

fn string_slice(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(this.clone())
}

fn string_replace(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(this.clone())
}
