//! URI checks through the public API.

use crate::common::{expect_kind, expect_violation};
use guardclause::prelude::*;
use guardclause::Violation;
use url::Url;

#[test]
fn absolute_uris() {
    for uri in ["https://example.com", "file:///tmp/x", "urn:isbn:0451450523"] {
        assert_eq!(uri.must_be_absolute_uri("uri"), Ok(uri));
    }
    let error = expect_violation(
        "../up".must_be_absolute_uri("uri"),
        ViolationKind::AbsoluteUriExpected,
        "uri",
    );
    assert_eq!(
        error.message(),
        "uri must be an absolute URI, but it actually is \"../up\"."
    );
}

#[test]
fn relative_uris() {
    for uri in ["../up", "index.html", "/root?q=1", ""] {
        assert!(uri.must_be_relative_uri("uri").is_ok(), "{uri:?}");
    }
    expect_kind(
        "http://example.com/a".must_be_relative_uri("uri"),
        ViolationKind::RelativeUriExpected,
    );
}

#[test]
fn scheme_must_match() {
    let url = Url::parse("HTTP://example.com/a").unwrap();
    assert!((&url).must_have_scheme("http", "endpoint").is_ok());
    let error = expect_violation(
        (&url).must_have_scheme("https", "endpoint"),
        ViolationKind::InvalidUriScheme,
        "endpoint",
    );
    assert_eq!(
        error.message(),
        "endpoint must use the scheme \"https\", but it actually is \"http://example.com/a\"."
    );
}

#[test]
fn one_of_several_schemes() {
    let url = Url::parse("wss://example.com/socket").unwrap();
    assert!((&url).must_have_one_scheme_of(&["ws", "wss"], "endpoint").is_ok());
    let error = expect_kind(
        (&url).must_be_http_or_https("endpoint"),
        ViolationKind::InvalidUriScheme,
    );
    assert_eq!(
        error.violation(),
        &Violation::InvalidUriScheme {
            actual: "wss://example.com/socket".into(),
            expected: vec!["http".into(), "https".into()]
        }
    );
    assert_eq!(
        error.message(),
        "endpoint must use one of the following schemes\nhttp,\nhttps\nbut it actually is \"wss://example.com/socket\"."
    );
}
