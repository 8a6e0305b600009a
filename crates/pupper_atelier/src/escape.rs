//! Vue attribute literal escaping.

use pupper_carton::String;

/// Wrap `raw` in double quotes, escaping embedded `"` and deleting newlines.
///
/// Multi-line source values collapse onto one line.
pub fn escape(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len() + 2);
    result.push('"');
    for c in raw.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\n' => {}
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}
