mod common;

use std::time::Duration;

use common::{init_logging, CHAT_BODY};
use gptcall::{
  Error, ErrorKind, HttpRequest, ReqwestTransport, Transport, TransportConfig
};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request_to(
  server: &MockServer
, route: &str
, method: Method
, body: Option<serde_json::Value>
) -> HttpRequest
{   let mut headers = HeaderMap::new();
    headers.insert(
      CONTENT_TYPE
    , HeaderValue::from_static("application/json;charset=utf-8")
    );
    headers.insert(
      AUTHORIZATION
    , HeaderValue::from_static("Bearer sk-test")
    );
    headers.insert(
      "openai-organization"
    , HeaderValue::from_static("org-123")
    );
    HttpRequest
    {   method
      , url: Url::parse(&format!("{}{}", server.uri(), route)).unwrap()
      , headers
      , body: body.map(|b| serde_json::to_vec(&b).unwrap())
    }
}

#[tokio::test]
async fn sends_headers_and_body_and_reads_response()
{   init_logging();
    let server = MockServer::start().await;
    let payload = serde_json::json!({"model": "gpt-3.5-turbo", "n": 1});

    Mock::given(method("POST"))
      .and(path("/v1/chat/completions"))
      .and(header("authorization", "Bearer sk-test"))
      .and(header("content-type", "application/json;charset=utf-8"))
      .and(header("openai-organization", "org-123"))
      .and(body_json(&payload))
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_raw(CHAT_BODY, "application/json")
      )
      .expect(1)
      .mount(&server)
      .await;

    let transport = ReqwestTransport::new(&TransportConfig::default())
      .unwrap();
    let response = transport.send(request_to(
      &server
    , "/v1/chat/completions"
    , Method::POST
    , Some(payload)
    )).await.unwrap();

    assert!(response.status.is_success());
    assert_eq!(response.body, CHAT_BODY.as_bytes());
}

#[tokio::test]
async fn non_success_status_is_returned_not_raised()
{   let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/v1/models"))
      .respond_with(
        ResponseTemplate::new(500).set_body_string("upstream down")
      )
      .mount(&server)
      .await;

    let transport = ReqwestTransport::new(&TransportConfig::default())
      .unwrap();
    let response = transport.send(request_to(
      &server
    , "/v1/models"
    , Method::GET
    , None
    )).await.unwrap();

    assert_eq!(response.status.as_u16(), 500);
    assert_eq!(response.body, b"upstream down");
}

#[tokio::test]
async fn slow_server_hits_the_timeout()
{   let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_string(CHAT_BODY)
          .set_delay(Duration::from_secs(5))
      )
      .mount(&server)
      .await;

    let config = TransportConfig::default()
      .with_timeout(Duration::from_millis(200));
    let transport = ReqwestTransport::new(&config).unwrap();
    let err = transport.send(request_to(
      &server
    , "/v1/completions"
    , Method::POST
    , Some(serde_json::json!({}))
    )).await.unwrap_err();

    assert_eq!(err, Error::Timeout);
}

#[tokio::test]
async fn refused_connection_is_a_transport_error()
{   let transport = ReqwestTransport::new(&TransportConfig::default())
      .unwrap();
    let request = HttpRequest
    {   method: Method::GET
      , url: Url::parse("http://127.0.0.1:1/v1/models").unwrap()
      , headers: HeaderMap::new()
      , body: None
    };

    let err = transport.send(request).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn configured_proxy_carries_the_request()
{   let proxy = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/v1/models"))
      .respond_with(
        ResponseTemplate::new(200).set_body_string("via-proxy")
      )
      .expect(1)
      .mount(&proxy)
      .await;

    let config = TransportConfig::default().with_proxy(proxy.uri());
    let transport = ReqwestTransport::new(&config).unwrap();
    let request = HttpRequest
    {   method: Method::GET
      , url: Url::parse("http://unresolvable.invalid/v1/models").unwrap()
      , headers: HeaderMap::new()
      , body: None
    };

    let response = transport.send(request).await.unwrap();
    assert!(response.status.is_success());
    assert_eq!(response.body, b"via-proxy");
}
