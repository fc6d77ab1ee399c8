use crate::utils::{escape_ident, is_keyword, to_snake_case};

#[test]
fn snake_case_camel() {
    assert_eq!(to_snake_case("catchAll"), "catch_all");
    assert_eq!(to_snake_case("a"), "a");
    assert_eq!(to_snake_case("ProductId"), "product_id");
}

#[test]
fn snake_case_acronyms() {
    assert_eq!(to_snake_case("ID"), "id");
    assert_eq!(to_snake_case("userID"), "user_id");
    assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
}

#[test]
fn snake_case_digits() {
    assert_eq!(to_snake_case("q1"), "q1");
    assert_eq!(to_snake_case("page2Size"), "page2_size");
    assert_eq!(to_snake_case("2fa"), "_2fa");
}

#[test]
fn snake_case_separators() {
    assert_eq!(to_snake_case("foo-bar.baz qux"), "foo_bar_baz_qux");
    assert_eq!(to_snake_case("foo--bar"), "foo_bar");
    assert_eq!(to_snake_case("trailing-"), "trailing");
    assert_eq!(to_snake_case("_private"), "_private");
    assert_eq!(to_snake_case("---"), "_");
}

#[test]
fn keywords() {
    assert!(is_keyword("fn"));
    assert!(is_keyword("gen"));
    assert!(is_keyword("Self"));
    assert!(!is_keyword("format"));
}

#[test]
fn escape() {
    assert_eq!(escape_ident("match"), "r#match");
    assert_eq!(escape_ident("crate"), "crate_");
    assert_eq!(escape_ident("format"), "format");
}
