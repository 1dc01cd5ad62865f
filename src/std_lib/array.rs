//! Array built-in.

use crate::ds::error::IntrinsicError;
use crate::ds::value::{JsNumberType, JsValue};
use crate::resolver::registry::IntrinsicRegistry;
use crate::std_lib::CoreObjects;

pub(crate) fn register(registry: &mut IntrinsicRegistry, core: &CoreObjects) {
    let proto = core.ordinary("Array");
    core.method(&proto, "push", array_push);
    core.method(&proto, "slice", array_self);
    core.method(&proto, "concat", array_self);
    core.method(&proto, "forEach", array_undefined);
    core.method(&proto, "keys", array_undefined);
    core.method(&proto, "values", array_undefined);
    core.method(&proto, "entries", array_undefined);

    let ctor = core.constructor("Array", array_constructor, &proto);
    core.method(&ctor, "isArray", array_is_array);

    registry.seed_present("%Array%", JsValue::Object(ctor));
}

fn array_constructor(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Undefined)
}

fn array_push(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Number(JsNumberType::Integer(args.len() as i64)))
}

fn array_self(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(this.clone())
}

fn array_undefined(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Undefined)
}

fn array_is_array(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let is_array = matches!(args.first(), Some(JsValue::Object(o)) if o.borrow().class_name() == "Array");
    Ok(JsValue::Boolean(is_array))
}
