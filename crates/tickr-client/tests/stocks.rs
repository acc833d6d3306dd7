use serde_json::json;
use std::time::Duration;
use tickr_client::{AlphaVantageClient, Config, Error};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, timeout_secs: u64) -> AlphaVantageClient {
  let config = Config { api_key: "test_key".to_string(), timeout_secs, base_url: server.uri() };
  AlphaVantageClient::new(config).expect("client")
}

fn aapl_quote() -> serde_json::Value {
  json!({
    "Global Quote": {
      "01. symbol": "AAPL",
      "02. open": "227.1500",
      "03. high": "229.9700",
      "04. low": "226.6000",
      "05. price": "229.0050",
      "06. volume": "38428549",
      "07. latest trading day": "2024-11-08",
      "08. previous close": "227.4800",
      "09. change": "1.5250",
      "10. change percent": "0.6704%"
    }
  })
}

fn search_entry(symbol: &str) -> serde_json::Value {
  json!({
    "1. symbol": symbol,
    "2. name": format!("{symbol} Holdings"),
    "3. type": "Equity",
    "4. region": "United States"
  })
}

#[tokio::test]
async fn global_quote_sends_expected_query_and_maps_fields() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .and(query_param("function", "GLOBAL_QUOTE"))
    .and(query_param("symbol", "AAPL"))
    .and(query_param("apikey", "test_key"))
    .respond_with(ResponseTemplate::new(200).set_body_json(aapl_quote()))
    .expect(1)
    .mount(&server)
    .await;

  let quote = client_for(&server, 5).stocks().global_quote("AAPL").await.unwrap();

  assert_eq!(quote.symbol, "AAPL");
  assert_eq!(quote.price, 229.005);
  assert_eq!(quote.change, 1.525);
  assert_eq!(quote.volume, 38_428_549);
  assert!(quote.is_up());
}

#[tokio::test]
async fn global_quote_empty_object_is_not_found() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Global Quote": {} })))
    .mount(&server)
    .await;

  let err = client_for(&server, 5).stocks().global_quote("NOPE").await.unwrap_err();
  assert!(matches!(err, Error::NotFound(symbol) if symbol == "NOPE"));
}

#[tokio::test]
async fn global_quote_missing_key_is_not_found() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
    .mount(&server)
    .await;

  let err = client_for(&server, 5).stocks().global_quote("NOPE").await.unwrap_err();
  assert!(err.is_not_found());
}

#[tokio::test]
async fn non_json_body_is_parse_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
    .mount(&server)
    .await;

  let err = client_for(&server, 5).stocks().global_quote("IBM").await.unwrap_err();
  assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn server_error_is_http_error_without_retry() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .respond_with(ResponseTemplate::new(503))
    .expect(1)
    .mount(&server)
    .await;

  let err = client_for(&server, 5).stocks().global_quote("IBM").await.unwrap_err();
  match err {
    Error::Http(message) => assert!(message.contains("503")),
    other => panic!("expected Http error, got {other:?}"),
  }
}

#[tokio::test]
async fn slow_response_times_out() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .respond_with(ResponseTemplate::new(200).set_body_json(aapl_quote()).set_delay(Duration::from_secs(3)))
    .mount(&server)
    .await;

  let err = client_for(&server, 1).stocks().global_quote("AAPL").await.unwrap_err();
  match err {
    Error::Http(message) => assert!(message.contains("timed out")),
    other => panic!("expected Http error, got {other:?}"),
  }
}

#[tokio::test]
async fn throttling_notice_is_rate_limit() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Information": "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day."
    })))
    .mount(&server)
    .await;

  let err = client_for(&server, 5).stocks().symbol_search("tesco").await.unwrap_err();
  assert!(matches!(err, Error::RateLimit(_)));
}

#[tokio::test]
async fn symbol_search_returns_first_three_in_order() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .and(query_param("function", "SYMBOL_SEARCH"))
    .and(query_param("keywords", "s&p 500"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "bestMatches": [
        search_entry("SPY"),
        search_entry("VOO"),
        search_entry("IVV"),
        search_entry("SPLG"),
        search_entry("RSP")
      ]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let matches = client_for(&server, 5).stocks().symbol_search("s&p 500").await.unwrap();
  let symbols: Vec<&str> = matches.iter().map(|m| m.symbol.as_str()).collect();
  assert_eq!(symbols, vec!["SPY", "VOO", "IVV"]);
}

#[tokio::test]
async fn symbol_search_without_matches_is_not_found() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "bestMatches": [] })))
    .mount(&server)
    .await;

  let err = client_for(&server, 5).stocks().symbol_search("zzzzzz").await.unwrap_err();
  assert!(err.is_not_found());
}

#[tokio::test]
async fn unreachable_host_is_http_error() {
  let config = Config {
    api_key: "test_key".to_string(),
    timeout_secs: 2,
    base_url: "http://127.0.0.1:9".to_string(),
  };
  let client = AlphaVantageClient::new(config).unwrap();

  let err = client.stocks().global_quote("IBM").await.unwrap_err();
  assert!(matches!(err, Error::Http(_)));
}
