//! Data structures shared by the parser and the resolver.

pub mod error;
pub mod object;
pub mod object_property;
pub mod operations;
pub mod value;
