//! The default seed realm.
//!
//! Builds a prototype-linked object graph of core built-ins and registers
//! each under its canonical name, tagged present, together with the names
//! this realm knows about but does not provide (tagged absent). Hosts that
//! probe a real environment supply their own registry instead; this realm
//! exists so the resolver has a complete, self-contained default.

mod array;
mod collections;
mod error;
mod function;
mod global;
mod json;
mod math;
mod object;
mod promise;
mod wrappers;

use crate::ds::error::IntrinsicError;
use crate::ds::object::{
    define_data_property, new_native_function, new_object, JsCallable, JsObjectRef, NativeFn,
};
use crate::ds::value::JsValue;
use crate::resolver::registry::IntrinsicRegistry;

/// Canonical names known to the realm but carrying no value in it.
static ABSENT_INTRINSICS: &[&str] = &[
    "%AggregateError%",
    "%ArrayIteratorPrototype%",
    "%AsyncFromSyncIteratorPrototype%",
    "%AsyncFunction%",
    "%AsyncGeneratorFunction%",
    "%AsyncIteratorPrototype%",
    "%Atomics%",
    "%BigInt%",
    "%BigInt64Array%",
    "%BigUint64Array%",
    "%DataView%",
    "%FinalizationRegistry%",
    "%Float16Array%",
    "%Float32Array%",
    "%Float64Array%",
    "%GeneratorFunction%",
    "%Int8Array%",
    "%Int16Array%",
    "%Int32Array%",
    "%IteratorPrototype%",
    "%MapIteratorPrototype%",
    "%Proxy%",
    "%SetIteratorPrototype%",
    "%SharedArrayBuffer%",
    "%StringIteratorPrototype%",
    "%Symbol%",
    "%TypedArray%",
    "%Uint8Array%",
    "%Uint8ClampedArray%",
    "%Uint16Array%",
    "%Uint32Array%",
    "%WeakRef%",
];

/// Register every core built-in with the given registry.
pub fn register_core_intrinsics(registry: &mut IntrinsicRegistry) {
    let core = CoreObjects::bootstrap();

    object::register(registry, &core);
    function::register(registry, &core);
    array::register(registry, &core);
    wrappers::register(registry, &core);
    error::register(registry, &core);
    math::register(registry, &core);
    json::register(registry, &core);
    collections::register(registry, &core);
    promise::register(registry, &core);
    global::register(registry, &core);

    for name in ABSENT_INTRINSICS {
        registry.seed_absent(*name);
    }
}

/// The bootstrap pair every other built-in hangs off: `Object.prototype`
/// and `Function.prototype`.
pub(crate) struct CoreObjects {
    pub object_prototype: JsObjectRef,
    pub function_prototype: JsObjectRef,
}

impl CoreObjects {
    fn bootstrap() -> Self {
        let object_prototype = new_object("Object", None);
        let function_prototype = new_object("Function", Some(object_prototype.clone()));
        function_prototype
            .borrow_mut()
            .set_callable(JsCallable::Native(noop));
        define_data_property(&function_prototype, "name", JsValue::String(String::new()));
        CoreObjects {
            object_prototype,
            function_prototype,
        }
    }

    /// A native function object, prototype-linked to `Function.prototype`.
    pub fn native(&self, name: &str, f: NativeFn) -> JsObjectRef {
        new_native_function(name, f, Some(self.function_prototype.clone()))
    }

    /// An ordinary object, prototype-linked to `Object.prototype`.
    pub fn ordinary(&self, class_name: &str) -> JsObjectRef {
        new_object(class_name, Some(self.object_prototype.clone()))
    }

    /// A constructor wired to its prototype object, with the
    /// `constructor` back-link installed on the prototype.
    pub fn constructor(&self, name: &str, f: NativeFn, prototype: &JsObjectRef) -> JsObjectRef {
        let ctor = self.native(name, f);
        define_data_property(&ctor, "prototype", JsValue::Object(prototype.clone()));
        define_data_property(prototype, "constructor", JsValue::Object(ctor.clone()));
        ctor
    }

    /// Define `target[name]` as a fresh native method and return it, so
    /// callers can also seed it under a dotted canonical name.
    pub fn method(&self, target: &JsObjectRef, name: &str, f: NativeFn) -> JsObjectRef {
        let func = self.native(name, f);
        define_data_property(target, name, JsValue::Object(func.clone()));
        func
    }
}

fn noop(_this: &JsValue, _args: &[JsValue]) -> Result<JsValue, IntrinsicError> {
    Ok(JsValue::Undefined)
}
