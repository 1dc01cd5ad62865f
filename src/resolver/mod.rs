//! Intrinsic resolution: alias redirection, the seed registry, and the
//! stepwise resolver/cache.

pub mod aliases;
pub mod core_resolver;
pub mod registry;
#[cfg(test)]
mod unit_tests;

pub use aliases::AliasTable;
pub use core_resolver::IntrinsicResolver;
pub use registry::{IntrinsicEntry, IntrinsicRegistry};
