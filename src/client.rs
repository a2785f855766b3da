use log::{debug, error, trace, warn};
use reqwest::header::{
  HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE
};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{Credentials, TransportConfig};
use crate::error::Error;
use crate::transport::{HttpRequest, ReqwestTransport, Transport};

pub const API_BASE: &str
  = "https://api.openai.com/v1";

pub const JSON_CONTENT_TYPE: &str
  = "application/json;charset=utf-8";

pub const ORGANIZATION_HEADER: &str = "openai-organization";

/// Remote capability each call is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint
{   ChatCompletions
  , Completions
  , Edits
  , ListModels
  , RetrieveModel(String)
}

impl Endpoint
{   pub fn name(&self) -> &'static str
    {   match self
        {   Endpoint::ChatCompletions => "chat"
          , Endpoint::Completions => "completion"
          , Endpoint::Edits => "edit"
          , Endpoint::ListModels => "list-models"
          , Endpoint::RetrieveModel(_) => "retrieve-model"
        }
    }

    /// Model lookups are read-only and go out as GET
    pub fn method(&self) -> Method
    {   match self
        {   Endpoint::ListModels
          | Endpoint::RetrieveModel(_) => Method::GET
          , _ => Method::POST
        }
    }

    pub fn url(&self) -> Result<Url, Error>
    {   if let Endpoint::RetrieveModel(model) = self
        {   // dot segments would be collapsed into the listing path
            if matches!(model.trim(), "." | "..")
            {   error!("Rejected call: model id {:?}", model);
                return Err(Error::InvalidParameter(
                  format!("model id {:?} is not a path segment", model)
                ));
            }
        }
        let mut url = Url::parse(API_BASE).map_err(|e| {
          Error::InvalidConfiguration(e.to_string())
        })?;
        {   let mut segments = url.path_segments_mut().map_err(|_| {
              Error::InvalidConfiguration(
                format!("{} cannot carry a path", API_BASE)
              )
            })?;
            match self
            {   Endpoint::ChatCompletions => {
                  segments.extend(["chat", "completions"]);
                }
              , Endpoint::Completions => {
                  segments.push("completions");
                }
              , Endpoint::Edits => {
                  segments.push("edits");
                }
              , Endpoint::ListModels => {
                  segments.push("models");
                }
              , Endpoint::RetrieveModel(model) => {
                  segments.extend(["models", model.trim()]);
                }
            }
        }
        Ok(url)
    }
}

/// Validated, encoded request ready for a transport
#[derive(Debug, Clone)]
pub struct PreparedCall
{   endpoint: Endpoint
  , request: HttpRequest
}

impl PreparedCall
{   /// Call carrying `body` as JSON
    pub fn with_body<B>(
      endpoint: Endpoint
    , body: &B
    , credentials: &Credentials
    ) -> Result<Self, Error>
    where B: Serialize + ?Sized
    {   credentials.validate()?;
        let bytes = serde_json::to_vec(body).map_err(|e| {
          error!("Failed to encode {} body: {}", endpoint.name(), e);
          Error::EncodeError(e.to_string())
        })?;
        PreparedCall::build(endpoint, Some(bytes), credentials)
    }

    /// Call with no request body
    pub fn without_body(
      endpoint: Endpoint
    , credentials: &Credentials
    ) -> Result<Self, Error>
    {   credentials.validate()?;
        PreparedCall::build(endpoint, None, credentials)
    }

    fn build(
      endpoint: Endpoint
    , body: Option<Vec<u8>>
    , credentials: &Credentials
    ) -> Result<Self, Error>
    {   let request = HttpRequest
        {   method: endpoint.method()
          , url: endpoint.url()?
          , headers: build_headers(credentials)?
          , body
        };
        Ok(PreparedCall { endpoint, request })
    }

    pub fn endpoint(&self) -> &Endpoint
    {   &self.endpoint
    }

    pub fn request(&self) -> &HttpRequest
    {   &self.request
    }
}

fn build_headers(credentials: &Credentials)
  -> Result<HeaderMap, Error>
{   let mut headers = HeaderMap::new();
    headers.insert(
      CONTENT_TYPE
    , HeaderValue::from_static(JSON_CONTENT_TYPE)
    );

    let mut bearer = HeaderValue::from_str(
      &format!("Bearer {}", credentials.api_key())
    ).map_err(|_| {
      Error::InvalidParameter(
        "api_key is not a valid header value".to_string()
      )
    })?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);

    if let Some(org) = credentials.organization()
    {   let value = HeaderValue::from_str(org).map_err(|_| {
          Error::InvalidParameter(
            "organization is not a valid header value".to_string()
          )
        })?;
        headers.insert(
          HeaderName::from_static(ORGANIZATION_HEADER)
        , value
        );
    }
    Ok(headers)
}

/// Send a prepared call through `transport` and decode the body
///
/// The exchange is bounded by `config.timeout()` whatever the
/// transport does internally. HTTP status is not checked: any body
/// that decodes into `R` is a success.
pub async fn execute<T, R>(
  transport: &T
, call: PreparedCall
, config: &TransportConfig
) -> Result<R, Error>
where
  T: Transport
, R: DeserializeOwned
{   let PreparedCall { endpoint, request } = call;
    debug!(
      "Sending {} request: {} {}"
    , endpoint.name(), request.method, request.url
    );
    if config.verbose
    {   if let Some(body) = &request.body
        {   trace!("Request body: {}", String::from_utf8_lossy(body));
        }
    }

    let response = tokio::time::timeout(
      config.timeout()
    , transport.send(request)
    ).await
      .map_err(|_| {
        error!(
          "{} call exceeded {:?}"
        , endpoint.name(), config.timeout()
        );
        Error::Timeout
      })??;

    trace!("{} response status: {}", endpoint.name(), response.status);
    if !response.status.is_success()
    {   warn!(
          "{} returned HTTP {}, decoding body anyway"
        , endpoint.name(), response.status
        );
    }
    if config.verbose
    {   trace!(
          "Response body: {}"
        , String::from_utf8_lossy(&response.body)
        );
    }

    serde_json::from_slice(&response.body).map_err(|e| {
      error!("Failed to decode {} response: {}", endpoint.name(), e);
      Error::ParseError(
        format!("{} (HTTP {})", e, response.status)
      )
    })
}

/// `execute` over a fresh `ReqwestTransport` built from `config`
pub async fn execute_default<R>(
  call: PreparedCall
, config: &TransportConfig
) -> Result<R, Error>
where R: DeserializeOwned
{   let transport = ReqwestTransport::new(config)?;
    execute(&transport, call, config).await
}
