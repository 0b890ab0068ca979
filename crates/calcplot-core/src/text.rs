// File: crates/calcplot-core/src/text.rs
// Summary: Locale-invariant number formatting for tick labels and user-facing messages.

/// Format with at most three decimals, trailing zeros trimmed (`1.5`, `0.333`, `2`).
/// Values that round to zero never print a sign.
pub fn format_decimal(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let mut s = format!("{:.3}", v);
    if s.contains('.') {
        while s.ends_with('0') { s.pop(); }
        if s.ends_with('.') { s.pop(); }
    }
    if s == "-0" { s = "0".to_string(); }
    s
}

/// Format as an integer when `v` is within `1e-9` of one, else like `format_decimal`.
pub fn format_tick_label(v: f64) -> String {
    let r = v.round();
    if v.is_finite() && (v - r).abs() < 1e-9 {
        // 0.0 and -0.0 both print as "0"
        return format!("{:.0}", r + 0.0);
    }
    format_decimal(v)
}

/// Shortest round-trip rendering used when building evaluator calls (`0`, `2`, `0.5`).
pub fn format_argument(v: f64) -> String {
    format!("{}", v + 0.0)
}
