//! Property-name case conversion.

/// Vendor prefixes recognised in camelCase names (`webkitTransform`).
const VENDOR_PREFIXES: [&str; 4] = ["webkit", "moz", "ms", "o"];

/// Convert a camelCase property name to its hyphenated CSS form.
///
/// Custom properties (`--brand`) are returned unchanged. A leading vendor
/// prefix followed by an uppercase letter gains a leading hyphen, so
/// `webkitTransform` becomes `-webkit-transform` while `opacity` stays put.
pub fn to_kebab_case(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    let mut rest = name;

    for vendor in VENDOR_PREFIXES {
        if let Some(tail) = name.strip_prefix(vendor) {
            if tail.starts_with(|c: char| c.is_ascii_uppercase()) {
                out.push('-');
                out.push_str(vendor);
                rest = tail;
                break;
            }
        }
    }

    for ch in rest.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(to_kebab_case("justifyContent"), "justify-content");
        assert_eq!(to_kebab_case("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_already_kebab() {
        assert_eq!(to_kebab_case("background"), "background");
        assert_eq!(to_kebab_case("align-items"), "align-items");
    }

    #[test]
    fn test_vendor_prefixes() {
        assert_eq!(to_kebab_case("webkitTransform"), "-webkit-transform");
        assert_eq!(to_kebab_case("msFlex"), "-ms-flex");
        assert_eq!(to_kebab_case("WebkitTransform"), "-webkit-transform");
    }

    #[test]
    fn test_words_starting_like_vendors() {
        assert_eq!(to_kebab_case("opacity"), "opacity");
        assert_eq!(to_kebab_case("order"), "order");
        assert_eq!(to_kebab_case("outlineOffset"), "outline-offset");
    }

    #[test]
    fn test_custom_property_untouched() {
        assert_eq!(to_kebab_case("--myColor"), "--myColor");
    }
}
