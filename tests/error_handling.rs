//! Behavior-driven tests for error classification and key hygiene.
//!
//! Callers must be able to tell "my request was bad" from "the network or
//! API failed" from "the response shape changed".

mod support;

use std::str::FromStr;

use marketwire_core::{
    parse_adjusted, parse_date, redact_api_key, BarsQuery, DetailsQuery, ErrorKind,
    MarketDataError, QueryError, SortOrder, Timespan,
};
use serde_json::json;

use support::{client_for, FixtureHttpClient};

fn details_query(ticker: &str) -> DetailsQuery {
    DetailsQuery::new(ticker, None, "secret-key").expect("valid query")
}

fn bars_query() -> BarsQuery {
    BarsQuery::builder(
        "MSFT",
        parse_date("2022-01-01").expect("valid date"),
        parse_date("2022-01-31").expect("valid date"),
    )
    .build("secret-key")
    .expect("valid query")
}

// =============================================================================
// Error Handling: caller input
// =============================================================================

#[test]
fn when_sort_or_adjusted_tokens_are_unrecognized_user_gets_invalid_query() {
    // Given: Tokens outside the two accepted literals
    let sort = SortOrder::from_str("sideways");
    let adjusted = parse_adjusted("maybe");

    // Then: Both fail as invalid queries instead of producing a silent value
    for error in [sort.expect_err("must fail"), adjusted.expect_err("must fail")] {
        assert_eq!(
            MarketDataError::from(error).kind(),
            ErrorKind::InvalidQuery
        );
    }
}

#[test]
fn when_multiplier_or_limit_is_zero_user_gets_invalid_query() {
    let start = parse_date("2022-01-01").expect("valid date");
    let end = parse_date("2022-01-31").expect("valid date");

    let zero_multiplier = BarsQuery::builder("AAPL", start, end).multiplier(0).build("K");
    assert_eq!(zero_multiplier, Err(QueryError::ZeroMultiplier));

    let zero_limit = BarsQuery::builder("AAPL", start, end).limit(0).build("K");
    assert_eq!(zero_limit, Err(QueryError::ZeroLimit));
}

#[test]
fn when_timespan_or_date_is_malformed_error_names_the_value() {
    let err = Timespan::from_str("decade").expect_err("must fail");
    assert!(err.to_string().contains("decade"));

    let err = parse_date("2022/01/01").expect_err("must fail");
    assert!(err.to_string().contains("2022/01/01"));
}

#[test]
fn when_api_key_is_missing_query_cannot_be_built() {
    let err = DetailsQuery::new("AAPL", None, "   ").expect_err("must fail");
    assert_eq!(err, QueryError::EmptyApiKey);
}

// =============================================================================
// Error Handling: API and transport failures
// =============================================================================

#[tokio::test]
async fn when_details_return_404_user_gets_api_error_with_status() {
    // Given: The API does not know the ticker
    let transport = FixtureHttpClient::status(
        404,
        json!({ "status": "NOT_FOUND", "message": "Ticker not found." }).to_string(),
    );

    // When: Details are requested
    let result = client_for(&transport)
        .fetch_details(&details_query("ZZZZZZ"))
        .await;

    // Then: An API error carries the status and the raw body
    let error = result.expect_err("404 must fail");
    assert_eq!(error.kind(), ErrorKind::Api);
    assert_eq!(error.status(), Some(404));
    match error {
        MarketDataError::Api { body, .. } => assert!(body.contains("Ticker not found.")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn when_bars_hit_an_auth_failure_no_retry_is_attempted() {
    // Given: The API rejects the key
    let transport = FixtureHttpClient::status(401, r#"{"status":"ERROR"}"#);

    // When: Bars are requested
    let error = client_for(&transport)
        .fetch_bars(&bars_query())
        .await
        .expect_err("401 must fail");

    // Then: The failure surfaces after a single attempt
    assert_eq!(error.status(), Some(401));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn when_network_is_down_user_gets_transport_error() {
    let transport = FixtureHttpClient::failing("connection failed: dns error");

    let error = client_for(&transport)
        .fetch_details(&details_query("AAPL"))
        .await
        .expect_err("must fail");

    assert_eq!(error.kind(), ErrorKind::Transport);
    assert!(error.to_string().contains("dns error"));
}

// =============================================================================
// Error Handling: response shape drift
// =============================================================================

#[tokio::test]
async fn when_body_is_not_json_user_gets_malformed_response() {
    let transport = FixtureHttpClient::json("<html>Bad Gateway</html>");

    let error = client_for(&transport)
        .fetch_bars(&bars_query())
        .await
        .expect_err("must fail");

    assert_eq!(error.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn when_bar_fields_change_type_user_gets_malformed_response() {
    let transport = FixtureHttpClient::json(
        json!({
            "ticker": "MSFT",
            "results": [{ "v": "lots", "vw": 1.0, "o": 1.0, "c": 1.0, "h": 1.0, "l": 1.0, "n": 1 }]
        })
        .to_string(),
    );

    let error = client_for(&transport)
        .fetch_bars(&bars_query())
        .await
        .expect_err("must fail");

    assert_eq!(error.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn when_details_lack_results_user_gets_malformed_response() {
    let transport = FixtureHttpClient::json(json!({ "status": "OK" }).to_string());

    let error = client_for(&transport)
        .fetch_details(&details_query("AAPL"))
        .await
        .expect_err("must fail");

    assert_eq!(error.kind(), ErrorKind::MalformedResponse);
}

// =============================================================================
// Security: api key handling
// =============================================================================

#[test]
fn api_key_never_appears_in_debug_or_redacted_urls() {
    let query = bars_query();
    assert!(!format!("{query:?}").contains("secret-key"));

    let client = client_for(&FixtureHttpClient::json("{}"));
    let url = client.build_bars_url(&query);
    assert!(url.contains("apiKey=secret-key"));
    assert!(!redact_api_key(&url).contains("secret-key"));
}
