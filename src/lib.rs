//! # just-intrinsics - Pristine JavaScript built-in references
//!
//! Resolves textual intrinsic descriptors such as `%Array.prototype.push%`
//! into references taken from a seeded registry of built-in objects, before
//! user code has had a chance to replace or shadow them. Resolved nested
//! paths are memoized, so repeated lookups of the same descriptor are O(1)
//! and return the exact same reference.
//!
//! ## Quick Start
//!
//! ```
//! use just_intrinsics::resolver::IntrinsicResolver;
//!
//! let mut resolver = IntrinsicResolver::with_core();
//!
//! // The % delimiters are optional: both forms name the same intrinsic.
//! let push = resolver.get("%Array.prototype.push%").unwrap();
//! let push_again = resolver.get("Array.prototype.push").unwrap();
//! assert_eq!(push, push_again);
//! ```
//!
//! ### Handling intrinsics the host does not provide
//!
//! ```
//! use just_intrinsics::resolver::IntrinsicResolver;
//! use just_intrinsics::ds::value::JsValue;
//!
//! let mut resolver = IntrinsicResolver::with_core();
//!
//! // `%Symbol%` is known but unavailable in the core realm.
//! assert!(resolver.get("%Symbol%").is_err());
//! assert_eq!(resolver.resolve("%Symbol%", true).unwrap(), JsValue::Undefined);
//! ```
//!
//! ### Legacy aliases
//!
//! Older canonical names are redirected before resolution continues:
//!
//! ```
//! use just_intrinsics::resolver::IntrinsicResolver;
//!
//! let mut resolver = IntrinsicResolver::with_core();
//! let a = resolver.get("%ArrayPrototype%").unwrap();
//! let b = resolver.get("%Array.prototype%").unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! ## Architecture
//!
//! - **[`parser`]** - PEG parser turning a descriptor into path segments
//! - **[`resolver`]** - alias table, seed registry and the stepwise walk
//! - **[`ds`]** - data structures (values, objects, property descriptors)
//! - **[`std_lib`]** - the default seed realm of core built-ins
//!
//! The registry and alias table are injected at construction, so isolated
//! resolver instances can be built for testing or for embedding hosts that
//! supply their own feature-availability map.

#[macro_use]
extern crate lazy_static;

pub mod ds;
pub mod parser;
pub mod resolver;
pub mod std_lib;

pub use ds::error::IntrinsicError;
pub use ds::value::{JsNumberType, JsValue};
pub use resolver::IntrinsicResolver;
