use indoc::indoc;

use crate::Error;
use crate::bind::ParameterRole;
use crate::diagnostics::DiagnosticKind;
use crate::manifest::{Defaults, Manifest};
use crate::render::Arguments;

const MANIFEST: &str = indoc! {r#"
    {
      "defaults": { "lowercase_urls": true },
      "routes": [
        {
          "name": "product",
          "pattern": "/Product/{productId:int}.{format?}",
          "parameters": [
            { "name": "productId", "type": "i32" },
            { "name": "format", "type": "Option<String>" },
            { "name": "q", "type": "Option<String>", "query": { "name": "search" } }
          ]
        },
        {
          "name": "docs",
          "pattern": "/Docs/{**path}",
          "lowercase_urls": false,
          "append_trailing_slash": true,
          "parameters": [
            { "name": "path", "type": "Option<String>" },
            { "name": "section", "type": "Option<String>", "fragment": true }
          ]
        }
      ]
    }
"#};

#[test]
fn parses_defaults_and_routes() {
    let manifest = Manifest::from_json(MANIFEST).unwrap();
    assert_eq!(
        manifest.defaults,
        Defaults {
            lowercase_urls: true,
            ..Defaults::default()
        }
    );
    assert_eq!(manifest.routes.len(), 2);

    let product = manifest.route("product").unwrap();
    assert_eq!(product.parameters[2].query.as_ref().unwrap().name.as_deref(), Some("search"));
    assert!(manifest.route("missing").is_none());
}

#[test]
fn route_flags_override_defaults() {
    let manifest = Manifest::from_json(MANIFEST).unwrap();

    let product = manifest.routes[0].options(&manifest.defaults);
    assert!(product.is_lowercase_urls());
    assert!(!product.is_append_trailing_slash());

    let docs = manifest.routes[1].options(&manifest.defaults);
    assert!(!docs.is_lowercase_urls());
    assert!(docs.is_append_trailing_slash());
}

#[test]
fn binds_and_renders_every_route() {
    let manifest = Manifest::from_json(MANIFEST).unwrap();
    let routes = manifest.bind_all().unwrap();

    let product = &routes[0];
    assert_eq!(
        product.parameters()[2].role,
        ParameterRole::Query {
            key: "search".into(),
            lowercase_value: false,
        }
    );
    let args = Arguments::new().with("productId", 5).with("format", "TXT").with("q", "Red");
    assert_eq!(product.render(&args).unwrap(), "/product/5.txt?search=Red");

    let docs = &routes[1];
    let args = Arguments::new().with("path", "Guide/intro").with("section", "top");
    assert_eq!(docs.render(&args).unwrap(), "/Docs/Guide/intro/#top");
}

#[test]
fn rejected_routes_are_collected() {
    let manifest = Manifest::from_json(indoc! {r#"
        {
          "routes": [
            { "name": "ok", "pattern": "/ok" },
            { "name": "bad", "pattern": "/a/{x}", "parameters": [] },
            { "name": "worse", "pattern": "/{*a?}", "parameters": [{ "name": "a", "type": "String" }] }
          ]
        }
    "#})
    .unwrap();

    let outcomes = manifest.bind().unwrap();
    assert!(outcomes[0].result.is_ok());
    assert_eq!(
        outcomes[1].result.as_ref().unwrap_err().kind(),
        DiagnosticKind::ParameterMissingFromArguments
    );
    assert_eq!(
        outcomes[2].result.as_ref().unwrap_err().kind(),
        DiagnosticKind::CatchAllCannotBeOptional
    );

    let Err(Error::Rejected(diagnostics)) = manifest.bind_all() else {
        panic!("expected rejected routes");
    };
    assert_eq!(diagnostics.error_count(), 2);
    assert_eq!(
        Error::Rejected(diagnostics).to_string(),
        "2 route(s) failed validation"
    );
}

#[test]
fn duplicate_route_names() {
    let manifest = Manifest::from_json(indoc! {r#"
        {
          "routes": [
            { "name": "productPage", "pattern": "/a" },
            { "name": "product_page", "pattern": "/b" }
          ]
        }
    "#})
    .unwrap();

    let err = manifest.bind().unwrap_err();
    assert_eq!(err.to_string(), "route name `product_page` is used more than once");
}

#[test]
fn invalid_type_names_route_and_parameter() {
    let manifest = Manifest::from_json(indoc! {r#"
        {
          "routes": [
            { "name": "r", "pattern": "/{a}", "parameters": [{ "name": "a", "type": "Vec<" }] }
          ]
        }
    "#})
    .unwrap();

    let err = manifest.bind().unwrap_err();
    let Error::InvalidType { route, parameter, ty, .. } = &err else {
        panic!("expected an invalid type error, got {err}");
    };
    assert_eq!((route.as_str(), parameter.as_str(), ty.as_str()), ("r", "a", "Vec<"));
}

#[test]
fn bind_route_by_name() {
    let manifest = Manifest::from_json(MANIFEST).unwrap();
    let route = manifest.bind_route("docs").unwrap().unwrap();
    assert_eq!(route.name(), "docs");
    assert!(matches!(
        manifest.bind_route("nope"),
        Err(Error::UnknownRoute(name)) if name == "nope"
    ));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Manifest::from_json(r#"{ "routes": [], "extra": 1 }"#).unwrap_err();
    assert!(matches!(err, Error::Manifest(_)));
    assert!(err.to_string().starts_with("invalid route manifest: unknown field `extra`"));
}

#[test]
fn load_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routes.json");
    std::fs::write(&path, MANIFEST).unwrap();
    assert_eq!(Manifest::load(&path).unwrap().routes.len(), 2);

    let missing = dir.path().join("missing.json");
    let err = Manifest::load(&missing).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().starts_with("failed to read `"));
}
