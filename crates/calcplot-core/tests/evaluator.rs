// File: crates/calcplot-core/tests/evaluator.rs
// Purpose: Classification of in-band evaluator error text, and statement splitting.

use calcplot_core::evaluator::{classify_output, parse_value};
use calcplot_core::session::statements;
use calcplot_core::{EvalError, EvalErrorKind};

#[test]
fn prefixes_map_to_kinds() {
    let kind = |t: &str| classify_output(t).unwrap_err().kind;
    assert_eq!(kind("Lexer error: unexpected '$'"), EvalErrorKind::Lexer);
    assert_eq!(kind("Parser error: missing ')'"), EvalErrorKind::Parser);
    assert_eq!(kind("Runtime error: division by zero"), EvalErrorKind::Runtime);
    assert_eq!(kind("Error: something"), EvalErrorKind::Generic);
}

#[test]
fn other_text_is_success() {
    assert_eq!(classify_output("3.5"), Ok("3.5".to_string()));
    assert_eq!(classify_output("y(x) defined"), Ok("y(x) defined".to_string()));
    // only a leading prefix counts
    assert_eq!(classify_output("no Error here"), Ok("no Error here".to_string()));
}

#[test]
fn error_keeps_full_text() {
    let e = classify_output("Runtime error: overflow").unwrap_err();
    assert_eq!(e, EvalError::runtime("Runtime error: overflow"));
    assert_eq!(e.to_string(), "Runtime error: overflow");
}

#[test]
fn values_parse_with_whitespace() {
    assert_eq!(parse_value(" 4 "), Some(4.0));
    assert_eq!(parse_value("-1.5e3"), Some(-1500.0));
    assert_eq!(parse_value("four"), None);
}

#[test]
fn statements_split_on_newlines_and_semicolons() {
    let input = "a = 5;\r\n  y(x) = a*x ;\n\n;y(x)  ";
    assert_eq!(statements(input), vec!["a = 5", "y(x) = a*x", "y(x)"]);
    assert!(statements(" ;\n ").is_empty());
}
