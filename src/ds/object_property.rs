use crate::ds::object::JsObjectRef;
use crate::ds::value::JsValue;

/// A property slot on an object: either an ordinary data property or an
/// accessor pair. Getters and setters are function objects.
#[derive(Debug, Clone)]
pub enum PropertyDescriptor {
    Data {
        value: JsValue,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    },
    Accessor {
        get: Option<JsObjectRef>,
        set: Option<JsObjectRef>,
        enumerable: bool,
        configurable: bool,
    },
}

impl PropertyDescriptor {
    /// A writable, non-enumerable data property - the shape used for
    /// seeded built-in members.
    pub fn data(value: JsValue) -> Self {
        PropertyDescriptor::Data {
            value,
            writable: true,
            enumerable: false,
            configurable: true,
        }
    }

    pub fn accessor(get: Option<JsObjectRef>, set: Option<JsObjectRef>) -> Self {
        PropertyDescriptor::Accessor {
            get,
            set,
            enumerable: false,
            configurable: true,
        }
    }

    pub fn is_data_descriptor(&self) -> bool {
        matches!(self, PropertyDescriptor::Data { .. })
    }

    pub fn is_accessor_descriptor(&self) -> bool {
        matches!(self, PropertyDescriptor::Accessor { .. })
    }

    pub fn is_enumerable(&self) -> bool {
        match self {
            PropertyDescriptor::Data { enumerable, .. } => *enumerable,
            PropertyDescriptor::Accessor { enumerable, .. } => *enumerable,
        }
    }

    pub fn is_configurable(&self) -> bool {
        match self {
            PropertyDescriptor::Data { configurable, .. } => *configurable,
            PropertyDescriptor::Accessor { configurable, .. } => *configurable,
        }
    }

    /// The data value, if this is a data property.
    pub fn value(&self) -> Option<&JsValue> {
        match self {
            PropertyDescriptor::Data { value, .. } => Some(value),
            PropertyDescriptor::Accessor { .. } => None,
        }
    }

    /// The getter function object, if this is an accessor with one.
    pub fn getter(&self) -> Option<&JsObjectRef> {
        match self {
            PropertyDescriptor::Accessor { get, .. } => get.as_ref(),
            PropertyDescriptor::Data { .. } => None,
        }
    }
}
