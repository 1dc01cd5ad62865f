//! Math built-in.

use crate::ds::error::IntrinsicError;
use crate::ds::object::{define_data_property, NativeFn};
use crate::ds::value::{JsNumberType, JsValue};
use crate::resolver::registry::IntrinsicRegistry;
use crate::std_lib::CoreObjects;

pub(crate) fn register(registry: &mut IntrinsicRegistry, core: &CoreObjects) {
    let math = core.ordinary("Math");
    define_data_property(
        &math,
        "PI",
        JsValue::Number(JsNumberType::Float(std::f64::consts::PI)),
    );
    define_data_property(
        &math,
        "E",
        JsValue::Number(JsNumberType::Float(std::f64::consts::E)),
    );

    let methods: &[(&str, NativeFn)] = &[
        ("abs", math_abs),
        ("floor", math_floor),
        ("max", math_max),
        ("min", math_min),
        ("pow", math_pow),
        ("round", math_round),
        ("sign", math_sign),
    ];
    for (name, f) in methods {
        let func = core.method(&math, name, *f);
        registry.seed_present(format!("%Math.{}%", name), JsValue::Object(func));
    }

    registry.seed_present("%Math%", JsValue::Object(math));
}

fn number_arg(args: &[JsValue], index: usize) -> f64 {
    match args.get(index) {
        Some(JsValue::Number(n)) => n.as_f64(),
        _ => f64::NAN,
    }
}

fn result(n: f64) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Number(JsNumberType::from_f64(n)))
}

fn math_abs(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    result(number_arg(args, 0).abs())
}

fn math_floor(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    result(number_arg(args, 0).floor())
}

fn math_max(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let mut acc = f64::NEG_INFINITY;
    for i in 0..args.len() {
        let n = number_arg(args, i);
        if n.is_nan() {
            return result(f64::NAN);
        }
        acc = acc.max(n);
    }
    result(acc)
}

fn math_min(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let mut acc = f64::INFINITY;
    for i in 0..args.len() {
        let n = number_arg(args, i);
        if n.is_nan() {
            return result(f64::NAN);
        }
        acc = acc.min(n);
    }
    result(acc)
}

fn math_pow(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    result(number_arg(args, 0).powf(number_arg(args, 1)))
}

fn math_round(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    // Halfway cases round toward positive infinity.
    result((number_arg(args, 0) + 0.5).floor())
}

fn math_sign(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let n = number_arg(args, 0);
    if n.is_nan() || n == 0.0 {
        result(n)
    } else {
        result(n.signum())
    }
}
