//! String transformation utilities for scaffolding
//!
//! Used to derive identifiers (slugs, tracking keys, handler names) from the
//! free-form names supplied for a demo.

/// Converts a string to snake_case.
///
/// Handles camelCase, PascalCase, kebab-case, and space-separated input.
///
/// # Examples
/// ```
/// use demogen::generation::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("orderCompleted"), "order_completed");
/// assert_eq!(to_snake_case("Order Completed"), "order_completed");
/// assert_eq!(to_snake_case("order-completed"), "order_completed");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_numeric();
        } else if !result.is_empty() && !result.ends_with('_') {
            // Any other separator collapses into a single underscore
            result.push('_');
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Converts a string to kebab-case, suitable for package names and URLs.
///
/// # Examples
/// ```
/// use demogen::generation::utils::to_kebab_case;
///
/// assert_eq!(to_kebab_case("Sunny Resorts Inc."), "sunny-resorts-inc");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}

/// Converts a string to camelCase for JavaScript identifiers.
///
/// # Examples
/// ```
/// use demogen::generation::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("Order Completed"), "orderCompleted");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::new();
    for (i, word) in to_snake_case(s)
        .split('_')
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}
