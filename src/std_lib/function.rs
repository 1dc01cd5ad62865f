//! Function built-in.

use crate::ds::error::IntrinsicError;
use crate::ds::operations::get_member;
use crate::ds::value::JsValue;
use crate::resolver::registry::IntrinsicRegistry;
use crate::std_lib::CoreObjects;

pub(crate) fn register(registry: &mut IntrinsicRegistry, core: &CoreObjects) {
    let proto = &core.function_prototype;
    let call = core.method(proto, "call", function_call);
    let apply = core.method(proto, "apply", function_apply);
    core.method(proto, "bind", function_bind);
    core.method(proto, "toString", function_to_string);

    let ctor = core.constructor("Function", function_constructor, proto);

    registry.seed_present("%Function%", JsValue::Object(ctor));
    registry.seed_present("%Function.prototype.call%", JsValue::Object(call));
    registry.seed_present("%Function.prototype.apply%", JsValue::Object(apply));
}

fn function_constructor(
    _this: &JsValue,
    _args: &[JsValue],
) -> Result<JsValue, IntrinsicError> {
    Err(IntrinsicError::TypeError(
        "the Function constructor is not supported in this realm".to_string(),
    ))
}

/// Function.prototype.call - invokes `this` with `args[0]` as receiver.
fn function_call(this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let callable = this
        .as_object()
        .and_then(|o| o.borrow().callable().cloned());
    match callable {
        Some(c) => {
            let (receiver, rest): (JsValue, &[JsValue]) = match args.split_first() {
                Some((head, tail)) => (head.clone(), tail),
                None => (JsValue::Undefined, &[]),
            };
            c.call(&receiver, rest)
        }
        None => Err(IntrinsicError::TypeError(
            "Function.prototype.call invoked on a non-callable".to_string(),
        )),
    }
}

/// Function.prototype.apply - like `call`, but the argument list stays
/// packed (this realm's arrays are opaque, so only the receiver is used).
fn function_apply(this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let callable = this
        .as_object()
        .and_then(|o| o.borrow().callable().cloned());
    match callable {
        Some(c) => {
            let receiver = args.first().cloned().unwrap_or(JsValue::Undefined);
            c.call(&receiver, &[])
        }
        None => Err(IntrinsicError::TypeError(
            "Function.prototype.apply invoked on a non-callable".to_string(),
        )),
    }
}

fn function_bind(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(this.clone())
}

fn function_to_string(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let name = match get_member(this, "name")? {
        JsValue::String(s) => s,
        _ => String::new(),
    };
    Ok(JsValue::String(format!(
        "function {}() {{ [native code] }}",
        name
    )))
}
