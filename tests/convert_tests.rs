use std::path::PathBuf;

use brev::{brev_to_html, convert, convert_file, BrevError, RenderOptions};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_example_note() {
    let note = brev_to_html(fixture("example.brev")).unwrap();

    assert_eq!(note.title, "My Note");
    insta::assert_snapshot!(note.html, @r#"<div><h1 style="font-size:2rem;font-weight:700;color:#ff0000">Hello</h1></div><div><span style="font-size:1rem;font-weight:400;color:#ffffff">World</span></div><div><img style="width:10rem;" src="https://x/y.png"></div>"#);
}

#[test]
fn test_mixed_note_skips_bad_lines() {
    let conversion = convert_file(&fixture("mixed.brev"), RenderOptions::default()).unwrap();

    assert_eq!(conversion.note.title, "Shopping list");

    let expected = [
        r#"<div><h2 style="font-size:2rem;font-weight:600;color:rgb(0, 128, 0)">Groceries</h2></div>"#,
        r#"<div><span style="font-size:1rem;font-weight:400;color:#ffffff">Milk, "organic" if possible</span></div>"#,
        r#"<div><span style="font-size:1rem;font-weight:700;color:#ffffff">Bread</span></div>"#,
        r#"<div><img style="width:5rem;" src="https://example.com/bread.png"></div>"#,
    ]
    .concat();
    assert_eq!(conversion.note.html, expected);

    let lines: Vec<Option<usize>> = conversion.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![Some(6), Some(10)]);

    let messages: Vec<&str> = conversion
        .diagnostics
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Syntax error at line 6: \"this line is not an element\"",
            "Syntax error at line 10: \"h3 Missing quotes\"",
        ]
    );
}

#[test]
fn test_injection_aborts_conversion() {
    let err = brev_to_html(fixture("injection.brev")).unwrap_err();

    match err {
        BrevError::InvalidElement {
            line, identifier, ..
        } => {
            assert_eq!(line, 3);
            assert_eq!(identifier, "h1");
        }
        other => panic!("expected InvalidElement, got {other:?}"),
    }
}

#[test]
fn test_malformed_metadata_aborts_conversion() {
    let err = brev_to_html(fixture("malformed.brev")).unwrap_err();
    assert!(matches!(err, BrevError::MalformedMetadata { line: 2, .. }));
}

#[test]
fn test_missing_file() {
    let err = brev_to_html(fixture("does-not-exist.brev")).unwrap_err();
    assert!(matches!(err, BrevError::Io { .. }));
}

#[test]
fn test_javascript_colour_rejected() {
    let result = convert("T\nh1 {\"color\":\"javascript:alert(1)\"} \"x\"\n");
    assert!(matches!(result, Err(BrevError::InvalidElement { .. })));
}

#[test]
fn test_explicit_values_override_defaults() {
    let note = convert("T\nh3 {\"weight\":900,\"font-size\":0.5,\"color\":\"navy\"} \"Small\"\n")
        .unwrap()
        .note;

    assert_eq!(
        note.html,
        r#"<div><h3 style="font-size:0.5rem;font-weight:900;color:navy">Small</h3></div>"#
    );
}

#[test]
fn test_escaped_quote_unescaped_exactly_once() {
    let note = convert(r#"T
text "a \"b\" \\\" c"
"#)
    .unwrap()
    .note;

    // Only each `\"` pair is unescaped; the `\\` before the last one stays
    assert!(note.html.contains(r#">a "b" \\" c</span>"#));
}

#[test]
fn test_negative_zero_width_renders_as_zero() {
    let note = convert("T\nimg {\"width\":-0} \"a.png\"\n").unwrap().note;
    assert_eq!(note.html, r#"<div><img style="width:0rem;" src="a.png"></div>"#);
}
