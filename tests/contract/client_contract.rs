//! Request-shape contract for the two supported endpoints.

#[path = "../support/mod.rs"]
mod support;

use marketwire_core::{
    parse_date, resolve, BarsQuery, DetailsQuery, MarketDataClient, SortOrder, Timespan,
};

use support::{client_for, FixtureHttpClient, TEST_BASE_URL};

const ALIAS_TABLE: &[(&str, &[&str])] = &[
    ("AAPL", &["apple", "apple inc."]),
    ("GOOGL", &["google", "alphabet inc. class a"]),
    ("AMZN", &["amazon", "amazon.com, inc."]),
    ("MSFT", &["microsoft", "microsoft corporation"]),
];

fn client() -> MarketDataClient {
    client_for(&FixtureHttpClient::json("{}"))
}

fn bars_query(ticker: &str) -> BarsQuery {
    BarsQuery::builder(
        ticker,
        parse_date("2022-01-01").expect("valid date"),
        parse_date("2022-06-01").expect("valid date"),
    )
    .multiplier(1)
    .timespan(Timespan::Day)
    .adjusted(true)
    .sort_order(SortOrder::Ascending)
    .limit(50_000)
    .build("K")
    .expect("valid query")
}

fn case_variants(name: &str) -> Vec<String> {
    let mut title = String::new();
    let mut upper_next = true;
    for ch in name.chars() {
        if upper_next {
            title.extend(ch.to_uppercase());
        } else {
            title.push(ch);
        }
        upper_next = ch == ' ';
    }

    vec![name.to_lowercase(), name.to_uppercase(), title]
}

#[test]
fn every_alias_in_any_case_resolves_to_its_symbol() {
    for (symbol, names) in ALIAS_TABLE {
        for name in *names {
            for variant in case_variants(name) {
                assert_eq!(resolve(&variant), *symbol, "alias '{variant}'");
            }
        }
    }
}

#[test]
fn names_outside_the_table_are_returned_unchanged() {
    for input in ["TSLA", "nvda", "Google Inc", "apple computer", "Amazon ", "BRK.B"] {
        assert_eq!(resolve(input), input);
    }
}

#[test]
fn bars_url_path_and_query_match_the_documented_shape() {
    let url = client().build_bars_url(&bars_query("Apple"));
    let (path, query) = url.split_once('?').expect("url has a query string");

    assert!(path.starts_with(TEST_BASE_URL));
    assert!(
        path.ends_with("/v2/aggs/ticker/AAPL/range/1/day/2022-01-01/2022-06-01/"),
        "{path}"
    );
    assert_eq!(query, "sort=asc&adjusted=true&limit=50000&apiKey=K");
}

#[test]
fn bars_url_for_every_timespan_uses_lowercase_token() {
    for timespan in Timespan::ALL {
        let query = BarsQuery::builder(
            "AMZN",
            parse_date("2022-01-01").expect("valid date"),
            parse_date("2022-01-02").expect("valid date"),
        )
        .timespan(timespan)
        .build("K")
        .expect("valid query");

        let url = client().build_bars_url(&query);
        assert!(
            url.contains(&format!("/range/1/{}/", timespan.as_str())),
            "{url}"
        );
    }
}

#[test]
fn details_url_carries_date_only_when_requested() {
    let client = client();

    let plain = DetailsQuery::new("google", None, "K").expect("valid query");
    assert_eq!(
        client.build_details_url(&plain),
        format!("{TEST_BASE_URL}/v3/reference/tickers/GOOGL?apiKey=K")
    );

    let dated = DetailsQuery::new(
        "google",
        Some(parse_date("2021-11-30").expect("valid date")),
        "K",
    )
    .expect("valid query");
    let url = client.build_details_url(&dated);
    assert_eq!(
        url,
        format!("{TEST_BASE_URL}/v3/reference/tickers/GOOGL?date=2021-11-30&apiKey=K")
    );
    assert!(!url.contains("sort="));
    assert!(!url.contains("limit="));
}

#[test]
fn url_building_is_pure() {
    let transport = FixtureHttpClient::json("{}");
    let client = client_for(&transport);

    let first = client.build_bars_url(&bars_query("microsoft"));
    let second = client.build_bars_url(&bars_query("microsoft"));

    assert_eq!(first, second);
    assert!(transport.requests().is_empty(), "no request may be issued");
}
