use pest::Parser;
use pest_derive::Parser;

use crate::ds::error::IntrinsicError;

#[derive(Parser)]
#[grammar = "parser/descriptor_grammar.pest"] // relative to src
pub struct DescriptorParser;

/// The canonical-name delimiter. Optional, but must appear on both ends of
/// a descriptor or on neither.
pub const DELIMITER: char = '%';

/// Parse a descriptor into its ordered property-path segments.
///
/// The first segment is the base intrinsic name; the rest are member
/// accesses performed in order. Quoted bracket segments have their
/// backslash escapes resolved; numeric bracket segments keep their literal
/// text. Bare `.` / `[]` boundaries contribute no segment.
///
/// Fails with a syntax error when the delimiter appears on only one side,
/// or anywhere other than the very start and end.
pub fn parse_property_path(descriptor: &str) -> Result<Vec<String>, IntrinsicError> {
    let starts = descriptor.starts_with(DELIMITER);
    let ends = descriptor.ends_with(DELIMITER);
    if starts && !ends {
        return Err(IntrinsicError::SyntaxError(
            "invalid intrinsic syntax, expected closing `%`".to_string(),
        ));
    }
    if ends && !starts {
        return Err(IntrinsicError::SyntaxError(
            "invalid intrinsic syntax, expected opening `%`".to_string(),
        ));
    }

    let inner = descriptor.strip_prefix(DELIMITER).unwrap_or(descriptor);
    let inner = inner.strip_suffix(DELIMITER).unwrap_or(inner);
    if inner.contains(DELIMITER) {
        return Err(IntrinsicError::SyntaxError(
            "`%` may not be present anywhere but at the beginning and end of the intrinsic name"
                .to_string(),
        ));
    }

    let pairs = DescriptorParser::parse(Rule::property_path, inner)
        .map_err(|e| IntrinsicError::SyntaxError(format!("invalid intrinsic syntax: {}", e)))?;

    let mut parts = Vec::new();
    for pair in pairs {
        if pair.as_rule() != Rule::property_path {
            continue;
        }
        for segment in pair.into_inner() {
            match segment.as_rule() {
                Rule::bare_segment | Rule::number_segment => {
                    parts.push(segment.as_str().to_string());
                }
                Rule::double_quoted_text
                | Rule::single_quoted_text
                | Rule::backtick_quoted_text => {
                    parts.push(resolve_escapes(segment.as_str()));
                }
                Rule::EOI => {}
                _ => {}
            }
        }
    }
    Ok(parts)
}

/// Collapse backslash escapes inside a quoted segment: `\x` becomes `x`,
/// `\\` becomes `\`. A trailing lone backslash is dropped.
fn resolve_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
