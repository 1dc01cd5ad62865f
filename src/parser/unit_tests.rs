use super::api::{parse_property_path, DescriptorParser, Rule};
use crate::ds::error::IntrinsicError;

use pest::consumes_to;
use pest::parses_to;

fn parts(descriptor: &str) -> Vec<String> {
    parse_property_path(descriptor).unwrap()
}

fn syntax_error(descriptor: &str) -> IntrinsicError {
    let err = parse_property_path(descriptor).unwrap_err();
    assert!(err.is_syntax_error(), "expected syntax error, got {:?}", err);
    err
}

#[test]
fn test_bare_segments() {
    parses_to! {
        parser: DescriptorParser,
        input: "Array.prototype.push",
        rule: Rule::property_path,
        tokens: [
            property_path(0, 20, [
                bare_segment(0, 5),
                bare_segment(6, 15),
                bare_segment(16, 20),
                EOI(20, 20)
            ])
        ]
    };
}

#[test]
fn test_bracket_number_segment() {
    parses_to! {
        parser: DescriptorParser,
        input: "-1.5",
        rule: Rule::number_segment,
        tokens: [
            number_segment(0, 4)
        ]
    };
}

#[test]
fn test_bracketed_tokens() {
    parses_to! {
        parser: DescriptorParser,
        input: "a[3]['b']",
        rule: Rule::property_path,
        tokens: [
            property_path(0, 9, [
                bare_segment(0, 1),
                number_segment(2, 3),
                single_quoted_text(6, 7),
                EOI(9, 9)
            ])
        ]
    };
}

#[test]
fn test_simple_dotted_path() {
    assert_eq!(parts("Array.prototype.push"), ["Array", "prototype", "push"]);
    assert_eq!(
        parts("%Array.prototype.push%"),
        ["Array", "prototype", "push"]
    );
}

#[test]
fn test_single_base_name() {
    assert_eq!(parts("%Array%"), ["Array"]);
    assert_eq!(parts("Array"), ["Array"]);
}

#[test]
fn test_bracketed_numeric_index_keeps_literal_text() {
    assert_eq!(parts("a[3]"), ["a", "3"]);
    assert_eq!(parts("a[-1.5]"), ["a", "-1.5"]);
    assert_eq!(parts("a[3.0].b"), ["a", "3.0", "b"]);
}

#[test]
fn test_bracketed_quoted_segments() {
    assert_eq!(parts("a[\"b.c\"]"), ["a", "b.c"]);
    assert_eq!(parts("a['push']"), ["a", "push"]);
    assert_eq!(parts("a[`tick`]"), ["a", "tick"]);
}

#[test]
fn test_quoted_segment_escapes_are_resolved() {
    assert_eq!(parts(r"a['it\'s']"), ["a", "it's"]);
    assert_eq!(parts(r#"a["q\"q"]"#), ["a", "q\"q"]);
    assert_eq!(parts(r"a['back\\slash']"), ["a", "back\\slash"]);
}

#[test]
fn test_explicitly_quoted_empty_segment() {
    assert_eq!(parts("a[\"\"]"), ["a", ""]);
}

#[test]
fn test_empty_boundaries_contribute_no_segment() {
    assert_eq!(parts("a..b"), ["a", "b"]);
    assert_eq!(parts("a[]b"), ["a", "b"]);
    assert_eq!(parts("a.[].b"), ["a", "b"]);
}

#[test]
fn test_lenient_skipping_of_stray_brackets() {
    // The source regex silently skips characters that start no segment.
    assert_eq!(parts("a]b"), ["a", "b"]);
    assert_eq!(parts("[foo]"), ["foo"]);
    assert_eq!(parts("a[3abc]"), ["a", "3abc"]);
}

#[test]
fn test_bare_segments_keep_quote_characters() {
    // Mismatched quoting is the resolver's diagnosis, not the parser's.
    assert_eq!(parts("a.'b'"), ["a", "'b'"]);
    assert_eq!(parts(r#"a["b]"#), ["a", "\"b"]);
}

#[test]
fn test_one_sided_delimiter_is_rejected() {
    let err = syntax_error("%Array");
    assert_eq!(err.message(), "invalid intrinsic syntax, expected closing `%`");
    let err = syntax_error("Array%");
    assert_eq!(err.message(), "invalid intrinsic syntax, expected opening `%`");
}

#[test]
fn test_interior_delimiter_is_rejected() {
    syntax_error("Ar%ray");
    syntax_error("%a%b%");
    syntax_error("%Array.proto%type%");
}

#[test]
fn test_lone_delimiter_parses_to_no_segments() {
    // "%" is balanced (the one character is both the start and the end);
    // the unknown-base error is raised later, by the resolver.
    assert_eq!(parts("%"), Vec::<String>::new());
    assert_eq!(parts("%%"), Vec::<String>::new());
}
