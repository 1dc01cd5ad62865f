//! Promise built-in.

use crate::ds::error::IntrinsicError;
use crate::ds::value::JsValue;
use crate::resolver::registry::IntrinsicRegistry;
use crate::std_lib::CoreObjects;

pub(crate) fn register(registry: &mut IntrinsicRegistry, core: &CoreObjects) {
    let proto = core.ordinary("Promise");
    core.method(&proto, "then", promise_self);
    core.method(&proto, "catch", promise_self);
    core.method(&proto, "finally", promise_self);

    let ctor = core.constructor("Promise", promise_constructor, &proto);
    core.method(&ctor, "all", promise_undefined);
    core.method(&ctor, "race", promise_undefined);
    core.method(&ctor, "reject", promise_undefined);
    core.method(&ctor, "resolve", promise_undefined);

    registry.seed_present("%Promise%", JsValue::Object(ctor));
}

fn promise_constructor(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    match args.first() {
        Some(JsValue::Object(o)) if o.borrow().is_callable() => Ok(JsValue::Undefined),
        _ => Err(IntrinsicError::TypeError(
            "Promise resolver is not a function".to_string(),
        )),
    }
}

fn promise_self(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(this.clone())
}

fn promise_undefined(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Undefined)
}
