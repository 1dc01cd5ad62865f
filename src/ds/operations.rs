//! Container capabilities over [`JsValue`].
//!
//! The resolver never touches object internals directly; it works through
//! this small surface: "has member" (own or inherited), "get member", and
//! own-descriptor access for the accessor/data disambiguation on the final
//! walk step. Only objects have members - primitives answer negatively.

use crate::ds::error::IntrinsicError;
use crate::ds::object::{same_object, JsObjectRef};
use crate::ds::object_property::PropertyDescriptor;
use crate::ds::value::JsValue;

pub fn has_member(container: &JsValue, key: &str) -> bool {
    match container.as_object() {
        Some(o) => o.borrow().has_property(key),
        None => false,
    }
}

pub fn has_own_member(container: &JsValue, key: &str) -> bool {
    match container.as_object() {
        Some(o) => o.borrow().has_own_property(key),
        None => false,
    }
}

/// Clone of the own descriptor, if any. Cheap - descriptor payloads are
/// `Rc`-backed.
pub fn get_own_property(container: &JsValue, key: &str) -> Option<PropertyDescriptor> {
    container
        .as_object()
        .and_then(|o| o.borrow().get_own_property(key).cloned())
}

/// Ordinary `[[Get]]`: data properties yield their value, accessors invoke
/// their getter with the container as receiver, misses delegate up the
/// prototype chain and finally yield `undefined`.
pub fn get_member(container: &JsValue, key: &str) -> Result<JsValue, IntrinsicError> {
    let mut current = match container.as_object() {
        Some(o) => Some(o.clone()),
        None => return Ok(JsValue::Undefined),
    };
    while let Some(obj) = current {
        let lookup = {
            let borrowed = obj.borrow();
            match borrowed.get_own_property(key) {
                Some(PropertyDescriptor::Data { value, .. }) => Lookup::Data(value.clone()),
                Some(PropertyDescriptor::Accessor { get, .. }) => Lookup::Getter(get.clone()),
                None => Lookup::Delegate(borrowed.prototype()),
            }
        };
        match lookup {
            Lookup::Data(value) => return Ok(value),
            Lookup::Getter(Some(getter)) => {
                let callable = getter.borrow().callable().cloned();
                return match callable {
                    Some(c) => c.call(container, &[]),
                    None => Ok(JsValue::Undefined),
                };
            }
            Lookup::Getter(None) => return Ok(JsValue::Undefined),
            Lookup::Delegate(proto) => current = proto,
        }
    }
    Ok(JsValue::Undefined)
}

enum Lookup {
    Data(JsValue),
    Getter(Option<JsObjectRef>),
    Delegate(Option<JsObjectRef>),
}

/// SameValue comparison: NaN equals NaN, objects compare by identity.
pub fn same_value(a: &JsValue, b: &JsValue) -> bool {
    match (a, b) {
        (JsValue::Number(x), JsValue::Number(y)) => {
            let (x, y) = (x.as_f64(), y.as_f64());
            (x.is_nan() && y.is_nan()) || x == y
        }
        (JsValue::Object(x), JsValue::Object(y)) => same_object(x, y),
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::object::{
        define_accessor_property, define_data_property, new_native_function, new_object,
    };
    use crate::ds::value::JsNumberType;

    fn answer_getter(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
        Ok(JsValue::Number(JsNumberType::Integer(7)))
    }

    #[test]
    fn test_get_member_follows_prototype_chain() {
        let root = new_object("Object", None);
        define_data_property(&root, "inherited", JsValue::String("up".to_string()));
        let child = new_object("Object", Some(root));

        assert!(has_member(&JsValue::Object(child.clone()), "inherited"));
        assert!(!has_own_member(&JsValue::Object(child.clone()), "inherited"));
        assert_eq!(
            get_member(&JsValue::Object(child), "inherited").unwrap(),
            JsValue::String("up".to_string())
        );
    }

    #[test]
    fn test_get_member_invokes_getter() {
        let obj = new_object("Object", None);
        let getter = new_native_function("answer", answer_getter, None);
        define_accessor_property(&obj, "answer", Some(getter), None);

        assert_eq!(
            get_member(&JsValue::Object(obj), "answer").unwrap(),
            JsValue::Number(JsNumberType::Integer(7))
        );
    }

    #[test]
    fn test_primitives_have_no_members() {
        assert!(!has_member(&JsValue::String("abc".to_string()), "length"));
        assert_eq!(
            get_member(&JsValue::Null, "anything").unwrap(),
            JsValue::Undefined
        );
    }

    #[test]
    fn test_same_value_nan_and_identity() {
        let nan = JsValue::Number(JsNumberType::NaN);
        assert!(same_value(&nan, &nan.clone()));
        assert!(!same_value(
            &JsValue::Object(new_object("Object", None)),
            &JsValue::Object(new_object("Object", None))
        ));
    }
}
