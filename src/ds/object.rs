//! Object model for seeded built-ins.
//!
//! A deliberately small rendition of an ordinary-object model: string-keyed
//! property maps, a prototype delegation chain, and an optional `[[Call]]`
//! slot that marks function objects. One container kind is enough here; the
//! resolver only needs "has member", "get member" and own-descriptor access.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use uuid::Uuid;

use crate::ds::error::IntrinsicError;
use crate::ds::object_property::PropertyDescriptor;
use crate::ds::value::JsValue;

pub type JsObjectRef = Rc<RefCell<JsObjectBase>>;

/// Property name that marks a getter as a transparent stand-in for a plain
/// data value (override-mistake emulation). A getter carrying this marker
/// is never unwrapped by the resolver.
pub const ORIGINAL_VALUE_MARKER: &str = "originalValue";

/// Signature shared by all native built-in functions.
pub type NativeFn = fn(this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError>;

/// Boxed closure form, for natives that capture state (e.g. the getter
/// installed by [`define_data_emulating_accessor`]).
pub type ClosureFn = Rc<dyn Fn(&JsValue, &[JsValue]) -> Result<JsValue, IntrinsicError>>;

/// The `[[Call]]` slot of a function object.
#[derive(Clone)]
pub enum JsCallable {
    /// Direct function pointer - zero overhead for compiled-in functions.
    Native(NativeFn),
    /// Capturing closure - small vtable indirection cost.
    Closure(ClosureFn),
}

impl JsCallable {
    pub fn call(&self, this: &JsValue, args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
        match self {
            JsCallable::Native(f) => f(this, args),
            JsCallable::Closure(f) => f(this, args),
        }
    }
}

pub struct JsObjectBase {
    object_id: Uuid,
    class_name: String,
    properties: HashMap<String, PropertyDescriptor>,
    prototype: Option<JsObjectRef>,
    call: Option<JsCallable>,
}

impl JsObjectBase {
    pub fn new(class_name: &str) -> Self {
        JsObjectBase {
            object_id: Uuid::new_v4(),
            class_name: class_name.to_string(),
            properties: HashMap::new(),
            prototype: None,
            call: None,
        }
    }

    pub fn object_id(&self) -> Uuid {
        self.object_id
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn is_callable(&self) -> bool {
        self.call.is_some()
    }

    pub fn callable(&self) -> Option<&JsCallable> {
        self.call.as_ref()
    }

    pub fn set_callable(&mut self, callable: JsCallable) {
        self.call = Some(callable);
    }

    pub fn prototype(&self) -> Option<JsObjectRef> {
        self.prototype.clone()
    }

    pub fn set_prototype(&mut self, prototype: Option<JsObjectRef>) {
        self.prototype = prototype;
    }

    pub fn get_own_property(&self, key: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(key)
    }

    /// Insert or replace a property. Last write wins.
    pub fn define_own_property(&mut self, key: &str, descriptor: PropertyDescriptor) {
        self.properties.insert(key.to_string(), descriptor);
    }

    pub fn has_own_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Own or inherited, walking the prototype chain.
    pub fn has_property(&self, key: &str) -> bool {
        if self.properties.contains_key(key) {
            true
        } else {
            match &self.prototype {
                None => false,
                Some(p) => p.borrow().has_property(key),
            }
        }
    }

    pub fn own_property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|k| k.as_str())
    }
}

pub fn new_object(class_name: &str, prototype: Option<JsObjectRef>) -> JsObjectRef {
    let mut base = JsObjectBase::new(class_name);
    base.set_prototype(prototype);
    Rc::new(RefCell::new(base))
}

pub fn new_native_function(
    name: &str,
    f: NativeFn,
    prototype: Option<JsObjectRef>,
) -> JsObjectRef {
    let func = new_object("Function", prototype);
    func.borrow_mut().set_callable(JsCallable::Native(f));
    define_data_property(&func, "name", JsValue::String(name.to_string()));
    func
}

pub fn new_closure_function(
    name: &str,
    f: ClosureFn,
    prototype: Option<JsObjectRef>,
) -> JsObjectRef {
    let func = new_object("Function", prototype);
    func.borrow_mut().set_callable(JsCallable::Closure(f));
    define_data_property(&func, "name", JsValue::String(name.to_string()));
    func
}

pub fn define_data_property(obj: &JsObjectRef, key: &str, value: JsValue) {
    obj.borrow_mut()
        .define_own_property(key, PropertyDescriptor::data(value));
}

pub fn define_accessor_property(
    obj: &JsObjectRef,
    key: &str,
    get: Option<JsObjectRef>,
    set: Option<JsObjectRef>,
) {
    obj.borrow_mut()
        .define_own_property(key, PropertyDescriptor::accessor(get, set));
}

/// Install an accessor whose getter stands in for a plain data value.
///
/// The getter returns `value` and carries an own `originalValue` property,
/// so the resolver treats the member as a data property rather than
/// handing out the getter itself.
pub fn define_data_emulating_accessor(
    obj: &JsObjectRef,
    key: &str,
    value: JsValue,
    function_prototype: Option<JsObjectRef>,
) {
    let captured = value.clone();
    let getter = new_closure_function(
        &format!("get {}", key),
        Rc::new(move |_this: &JsValue, _args: &[JsValue]| Ok(captured.clone())),
        function_prototype,
    );
    define_data_property(&getter, ORIGINAL_VALUE_MARKER, value);
    define_accessor_property(obj, key, Some(getter), None);
}

/// Reference identity, as the SameValue operation sees it.
pub fn same_object(a: &JsObjectRef, b: &JsObjectRef) -> bool {
    Rc::ptr_eq(a, b) || a.borrow().object_id() == b.borrow().object_id()
}

impl std::fmt::Debug for JsObjectBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsObjectBase")
            .field("object_id", &self.object_id)
            .field("class_name", &self.class_name)
            .field("callable", &self.call.is_some())
            .field("own_properties", &self.properties.len())
            .finish()
    }
}
