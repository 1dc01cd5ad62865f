//! Descriptor parsing: tokenizes a dotted/bracketed intrinsic descriptor
//! into an ordered sequence of path segments.

mod api;
#[cfg(test)]
mod unit_tests;

pub use api::{parse_property_path, DescriptorParser, Rule, DELIMITER};
