//! Machine-name derivation.

/// Derive a camelCase identifier from a human label.
///
/// Every run of characters outside `[a-zA-Z0-9]` is removed and the character
/// right after it is upper-cased; the first character of the result is then
/// lower-cased. Letters that are already upper-case stay that way, so
/// `"HTTP Port"` becomes `"hTTPPort"`.
///
/// An empty or entirely non-alphanumeric label yields an empty string.
///
/// ```rust
/// use form_forge::to_camel_case;
///
/// assert_eq!(to_camel_case("New dropdown"), "newDropdown");
/// assert_eq!(to_camel_case("Enable Feature"), "enableFeature");
/// assert_eq!(to_camel_case("--"), "");
/// ```
pub fn to_camel_case(label: &str) -> String {
    let mut result = String::with_capacity(label.len());
    let mut capitalize_next = false;

    for c in label.chars() {
        if !c.is_ascii_alphanumeric() {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    if let Some(first) = result.get_mut(..1) {
        first.make_ascii_lowercase();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("New dropdown"), "newDropdown");
        assert_eq!(to_camel_case("Enable Feature"), "enableFeature");
        assert_eq!(to_camel_case("First name"), "firstName");
        assert_eq!(to_camel_case("e-mail address"), "eMailAddress");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case("   "), "");
        assert_eq!(to_camel_case("?!-_"), "");
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        assert_eq!(to_camel_case("  Zip code  "), "zipCode");
        assert_eq!(to_camel_case("_id"), "id");
        assert_eq!(to_camel_case("Total ($)"), "total");
    }

    #[test]
    fn test_keeps_existing_case_and_digits() {
        assert_eq!(to_camel_case("HTTP Port"), "hTTPPort");
        assert_eq!(to_camel_case("Address line 2"), "addressLine2");
        assert_eq!(to_camel_case("2nd choice"), "2ndChoice");
        assert_eq!(to_camel_case("alreadyCamel"), "alreadyCamel");
    }

    #[test]
    fn test_non_ascii_letters_are_separators() {
        assert_eq!(to_camel_case("café menu"), "cafMenu");
        assert_eq!(to_camel_case("naïve user"), "naVeUser");
    }
}
