#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        value.to_lowercase()
    }
}

#[doc(hidden)]
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    normalize_lower(a) == normalize_lower(b)
}

/// Case-insensitive substring test. `needle` must already be lowercase.
#[doc(hidden)]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    if haystack.len() < needle.len() {
        return false;
    }

    if haystack.bytes().any(|byte| byte.is_ascii_uppercase()) || !haystack.is_ascii() {
        normalize_lower(haystack).contains(needle)
    } else {
        haystack.contains(needle)
    }
}

/// Mount-style route matching: `route` itself, or anything below it after a `/`.
pub(crate) fn is_within_route(path: &str, route: &str) -> bool {
    let route = route.trim_end_matches('/');
    if route.is_empty() {
        return true;
    }

    match path.strip_prefix(route) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
