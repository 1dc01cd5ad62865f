//! JSON built-in.

use crate::ds::error::IntrinsicError;
use crate::ds::value::{JsNumberType, JsValue};
use crate::resolver::registry::IntrinsicRegistry;
use crate::std_lib::CoreObjects;

pub(crate) fn register(registry: &mut IntrinsicRegistry, core: &CoreObjects) {
    let json = core.ordinary("JSON");
    let parse = core.method(&json, "parse", json_parse);
    let stringify = core.method(&json, "stringify", json_stringify);

    registry.seed_present("%JSON%", JsValue::Object(json));
    registry.seed_present("%JSON.parse%", JsValue::Object(parse));
    registry.seed_present("%JSON.stringify%", JsValue::Object(stringify));
}

/// Scalar literals only; structured input is out of scope for this realm.
fn json_parse(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    let text = match args.first() {
        Some(JsValue::String(s)) => s.trim(),
        _ => {
            return Err(IntrinsicError::SyntaxError(
                "Unexpected end of JSON input".to_string(),
            ))
        }
    };
    match text {
        "true" => return Ok(JsValue::Boolean(true)),
        "false" => return Ok(JsValue::Boolean(false)),
        "null" => return Ok(JsValue::Null),
        _ => {}
    }
    if let Ok(i) = text.parse::<i64>() {
        return Ok(JsValue::Number(JsNumberType::Integer(i)));
    }
    if let Ok(f) = text.parse::<f64>() {
        return Ok(JsValue::Number(JsNumberType::from_f64(f)));
    }
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        return Ok(JsValue::String(text[1..text.len() - 1].to_string()));
    }
    Ok(JsValue::Undefined)
}

fn json_stringify(_this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(match args.first() {
        Some(JsValue::String(s)) => {
            let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
            JsValue::String(format!("\"{}\"", escaped))
        }
        Some(JsValue::Boolean(b)) => JsValue::String(b.to_string()),
        Some(JsValue::Null) => JsValue::String("null".to_string()),
        Some(JsValue::Number(n)) => JsValue::String(JsValue::Number(n.clone()).to_string()),
        Some(JsValue::Object(_)) => JsValue::String("{}".to_string()),
        Some(JsValue::Undefined) | None => JsValue::Undefined,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stringify_escapes_quotes_and_backslashes() {
        let out = json_stringify(
            &JsValue::Undefined,
            &[JsValue::String("a\"b\\c".to_string())],
        )
        .unwrap();
        assert_eq!(out, JsValue::String("\"a\\\"b\\\\c\"".to_string()));
    }

    #[test]
    fn test_parse_scalar_literals() {
        let parse = |text: &str| {
            json_parse(&JsValue::Undefined, &[JsValue::String(text.to_string())]).unwrap()
        };
        assert_eq!(parse("true"), JsValue::Boolean(true));
        assert_eq!(parse("null"), JsValue::Null);
        assert_eq!(parse("7"), JsValue::Number(JsNumberType::Integer(7)));
        assert_eq!(parse("\"hi\""), JsValue::String("hi".to_string()));
    }
}
