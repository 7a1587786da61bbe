/// Convert camelCase or PascalCase to snake_case.
///
/// Runs of capitals are kept together as one word, so acronyms survive.
///
/// # Examples
/// ```
/// use tsdecl_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("fooBar"), "foo_bar");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// assert_eq!(to_snake_case("foo_bar"), "foo_bar");  // idempotent
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let word_start =
                prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower);
            if word_start && prev != '_' {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Convert snake_case to camelCase.
///
/// Empty segments (leading, trailing or doubled `_`) are dropped.
///
/// # Examples
/// ```
/// use tsdecl_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("foo_bar"), "fooBar");
/// assert_eq!(to_camel_case("fooBar"), "fooBar");  // idempotent
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, part) in s.split('_').filter(|p| !p.is_empty()).enumerate() {
        let mut chars = part.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if i == 0 {
            result.extend(first.to_lowercase());
        } else {
            result.extend(first.to_uppercase());
        }
        result.push_str(chars.as_str());
    }
    result
}

/// Last segment of a fully-qualified class name.
///
/// Both `.` (package) and `$` (nested class) separate segments.
pub fn simple_name(fqn: &str) -> &str {
    fqn.rsplit(['.', '$']).next().unwrap_or(fqn)
}

/// Quote `s` as a JavaScript string literal.
pub fn to_js_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
