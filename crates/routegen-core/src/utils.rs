/// Convert a route parameter or route name to a Rust `snake_case` identifier.
///
/// Handles camelCase, PascalCase, acronyms, and `-`/`.`/space separators.
/// Characters that cannot appear in an identifier become `_`.
///
/// # Examples
/// ```
/// use routegen_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("productId"), "product_id");
/// assert_eq!(to_snake_case("HTMLPage"), "html_page");
/// assert_eq!(to_snake_case("catch-all"), "catch_all");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }

        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let after_lower = prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
            // Last capital of an acronym starts the next word: `HTMLPage` -> `html_page`.
            let acronym_end = prev.is_some_and(|p| p.is_ascii_uppercase())
                && next.is_some_and(|n| n.is_ascii_lowercase());
            if (after_lower || acronym_end) && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    let trimmed = result.trim_end_matches('_');
    let trimmed = if trimmed.is_empty() { "_" } else { trimmed };
    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{trimmed}")
    } else {
        trimmed.to_string()
    }
}

/// Rust keywords (strict and reserved, edition 2024) that need `r#` to be used as identifiers.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Identifiers that cannot be raw either.
const NON_RAW: &[&str] = &["self", "Self", "super", "crate"];

pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s) || NON_RAW.contains(&s)
}

/// Make `s` usable as a Rust identifier.
///
/// # Examples
/// ```
/// use routegen_core::utils::escape_ident;
/// assert_eq!(escape_ident("id"), "id");
/// assert_eq!(escape_ident("type"), "r#type");
/// assert_eq!(escape_ident("self"), "self_");
/// ```
pub fn escape_ident(s: &str) -> String {
    if NON_RAW.contains(&s) {
        format!("{s}_")
    } else if KEYWORDS.contains(&s) {
        format!("r#{s}")
    } else {
        s.to_string()
    }
}
