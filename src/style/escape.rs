//! CSS selector escaping.

/// Characters that must be backslash-escaped inside a class selector.
const SPECIAL: &[char] = &[
    ' ', '#', '.', ';', '?', '%', '&', ',', '@', '+', '*', '~', '\'', '"', '!', '^', '$', '[',
    ']', '(', ')', '=', '>', '|', ':', '/', '{', '}', '`', '<', '\\',
];

/// Escape a class name for use after `.` in a selector.
pub fn escape_selector(class_name: &str) -> String {
    let mut out = String::with_capacity(class_name.len() + 8);
    for ch in class_name.chars() {
        if SPECIAL.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
