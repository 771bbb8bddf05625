//! Verify endpoint resolution and resource decoding against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Decoded values are compared as parsed records, not raw strings, so field
//! ordering and timestamp offsets in the vectors do not matter.

use afterparty_core::{Endpoint, Event, Location, Resource, RootUrl, User};
use serde::de::DeserializeOwned;
use url::Url;

/// Parse the endpoint name and parameter from a test vector into `Endpoint`.
fn parse_endpoint(name: &str, param: &serde_json::Value) -> Endpoint {
    match name {
        "hello" => Endpoint::Hello(param.as_str().map(str::to_string)),
        "mock_events" => Endpoint::MockEvents,
        "mock_users" => Endpoint::MockUsers,
        "mock_locations" => Endpoint::MockLocations,
        other => panic!("unknown endpoint: {other}"),
    }
}

fn url() -> Url {
    Url::parse("http://localhost:3000/").unwrap()
}

/// Decode `body` with a JSON resource and compare against `expected`, where a
/// null `expected` means decoding must fail.
fn check_json<T>(name: &str, body: &str, expected: &serde_json::Value)
where
    T: DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let result = Resource::<Vec<T>>::json(url()).parse(body.as_bytes());
    if expected.is_null() {
        assert!(result.is_err(), "{name}: expected a parse failure");
        return;
    }
    let expected: Vec<T> = serde_json::from_value(expected.clone()).unwrap();
    assert_eq!(result.unwrap(), expected, "{name}: parsed result");
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

#[test]
fn endpoint_test_vectors() {
    let raw = include_str!("../../test-vectors/endpoints.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let root = RootUrl::parse(case["root"].as_str().unwrap()).unwrap();
        let endpoint = parse_endpoint(case["endpoint"].as_str().unwrap(), &case["param"]);

        assert_eq!(
            endpoint.url(&root).as_str(),
            case["expected_url"].as_str().unwrap(),
            "{name}: url"
        );
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let body = case["body"].as_str().unwrap();
        let expected = &case["expected_result"];

        match case["kind"].as_str().unwrap() {
            "text" => {
                let text = Resource::text(url()).parse(body.as_bytes()).unwrap();
                assert_eq!(text, expected.as_str().unwrap(), "{name}: parsed result");
            }
            "users" => check_json::<User>(name, body, expected),
            "locations" => check_json::<Location>(name, body, expected),
            "events" => check_json::<Event>(name, body, expected),
            other => panic!("unknown kind: {other}"),
        }
    }
}
