//! Free-standing globals plus the remaining namespace built-ins:
//! Reflect, Date, ArrayBuffer and RegExp.

use crate::ds::error::IntrinsicError;
use crate::ds::value::{JsNumberType, JsValue};
use crate::resolver::registry::IntrinsicRegistry;
use crate::std_lib::CoreObjects;

pub(crate) fn register(registry: &mut IntrinsicRegistry, core: &CoreObjects) {
    registry.seed_present("%eval%", JsValue::Object(core.native("eval", global_eval)));
    registry.seed_present(
        "%isFinite%",
        JsValue::Object(core.native("isFinite", global_is_finite)),
    );
    registry.seed_present(
        "%isNaN%",
        JsValue::Object(core.native("isNaN", global_is_nan)),
    );
    registry.seed_present(
        "%parseFloat%",
        JsValue::Object(core.native("parseFloat", global_parse_float)),
    );
    registry.seed_present(
        "%parseInt%",
        JsValue::Object(core.native("parseInt", global_parse_int)),
    );
    for name in &[
        "decodeURI",
        "decodeURIComponent",
        "encodeURI",
        "encodeURIComponent",
    ] {
        registry.seed_present(
            format!("%{}%", name),
            JsValue::Object(core.native(name, global_identity_string)),
        );
    }
    registry.seed_present(
        "%ThrowTypeError%",
        JsValue::Object(core.native("", throw_type_error)),
    );

    let reflect = core.ordinary("Reflect");
    let get_prototype_of = core.method(&reflect, "getPrototypeOf", reflect_get_prototype_of);
    registry.seed_present("%Reflect%", JsValue::Object(reflect));
    registry.seed_present(
        "%Reflect.getPrototypeOf%",
        JsValue::Object(get_prototype_of),
    );

    let date_proto = core.ordinary("Date");
    core.method(&date_proto, "getTime", date_get_time);
    core.method(&date_proto, "toISOString", date_to_iso_string);
    let date_ctor = core.constructor("Date", noop_constructor, &date_proto);
    registry.seed_present("%Date%", JsValue::Object(date_ctor));

    let array_buffer_proto = core.ordinary("ArrayBuffer");
    core.method(&array_buffer_proto, "slice", global_self);
    let array_buffer_ctor =
        core.constructor("ArrayBuffer", noop_constructor, &array_buffer_proto);
    core.method(&array_buffer_ctor, "isView", global_false);
    registry.seed_present("%ArrayBuffer%", JsValue::Object(array_buffer_ctor));

    let reg_exp_proto = core.ordinary("RegExp");
    core.method(&reg_exp_proto, "exec", global_null);
    core.method(&reg_exp_proto, "test", global_false);
    let reg_exp_ctor = core.constructor("RegExp", noop_constructor, &reg_exp_proto);
    registry.seed_present("%RegExp%", JsValue::Object(reg_exp_ctor));
}

/// Indirect eval is refused rather than silently misbehaving.
fn global_eval(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Err(IntrinsicError::TypeError(
        "eval is not supported in this realm".to_string(),
    ))
}

fn number_arg(args: &[JsValue]) -> f64 {
    match args.first() {
        Some(JsValue::Number(n)) => n.as_f64(),
        Some(JsValue::String(s)) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        Some(JsValue::Boolean(true)) => 1.0,
        Some(JsValue::Boolean(false)) | Some(JsValue::Null) => 0.0,
        _ => f64::NAN,
    }
}

fn global_is_finite(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Boolean(number_arg(args).is_finite()))
}

fn global_is_nan(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Boolean(number_arg(args).is_nan()))
}

fn global_parse_float(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let text = match args.first() {
        Some(JsValue::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
        None => return Ok(JsValue::Number(JsNumberType::NaN)),
    };
    // Longest numeric prefix, as the host function takes it.
    let mut end = 0;
    for (i, c) in text.char_indices() {
        let next = i + c.len_utf8();
        if text[..next].parse::<f64>().is_ok() {
            end = next;
        }
    }
    match text[..end].parse::<f64>() {
        Ok(f) => Ok(JsValue::Number(JsNumberType::from_f64(f))),
        Err(_) => Ok(JsValue::Number(JsNumberType::NaN)),
    }
}

fn global_parse_int(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let text = match args.first() {
        Some(JsValue::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
        None => return Ok(JsValue::Number(JsNumberType::NaN)),
    };
    let digits: String = text
        .chars()
        .enumerate()
        .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(_, c)| c)
        .collect();
    match digits.parse::<i64>() {
        Ok(i) => Ok(JsValue::Number(JsNumberType::Integer(i))),
        Err(_) => Ok(JsValue::Number(JsNumberType::NaN)),
    }
}

fn global_identity_string(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::String(match args.first() {
        Some(v) => v.to_string(),
        None => "undefined".to_string(),
    }))
}

fn throw_type_error(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Err(IntrinsicError::TypeError(
        "'caller', 'callee', and 'arguments' properties may not be accessed".to_string(),
    ))
}

fn reflect_get_prototype_of(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    match args.first() {
        Some(JsValue::Object(o)) => Ok(match o.borrow().prototype() {
            Some(p) => JsValue::Object(p),
            None => JsValue::Null,
        }),
        _ => Err(IntrinsicError::TypeError(
            "Reflect.getPrototypeOf called on non-object".to_string(),
        )),
    }
}

fn date_get_time(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Number(JsNumberType::NaN))
}

fn date_to_iso_string(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Err(IntrinsicError::TypeError("Invalid time value".to_string()))
}

fn noop_constructor(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Undefined)
}

fn global_self(this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(this.clone())
}

fn global_false(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Boolean(false))
}

fn global_null(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Null)
}
