//! The single network hop behind every call

use std::future::Future;
use log::{debug, error, trace};
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};

/// Fully built outgoing request
#[derive(Debug, Clone)]
pub struct HttpRequest
{   pub method: Method
  , pub url: Url
  , pub headers: HeaderMap
  , /// JSON bytes, `None` for bodiless lookups
    pub body: Option<Vec<u8>>
}

/// Status and fully read body of a response
#[derive(Debug, Clone)]
pub struct HttpResponse
{   pub status: StatusCode
  , pub body: Vec<u8>
}

/// Performs exactly one HTTP exchange per `send`
pub trait Transport
{   fn send(
      &self
    , request: HttpRequest
    ) -> impl Future<Output = Result<HttpResponse, crate::error::Error>>
      + Send;
}

/// reqwest-backed transport, built fresh for each call
#[derive(Debug, Clone)]
pub struct ReqwestTransport
{   http_client: reqwest::Client
}

impl ReqwestTransport
{   pub fn new(
      config: &crate::config::TransportConfig
    ) -> Result<Self, crate::error::Error>
    {   let timeout = config.timeout();
        debug!("Building reqwest transport (timeout {:?})", timeout);

        let mut builder = reqwest::Client::builder()
          .timeout(timeout)
          .connect_timeout(timeout);

        builder = match config.proxy()
        {   Some(proxy_url) => {
              debug!("Routing through proxy {}", proxy_url);
              let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| {
                  error!("Invalid proxy {}: {}", proxy_url, e);
                  crate::error::Error::InvalidConfiguration(
                    format!("proxy {}: {}", proxy_url, e)
                  )
                })?;
              builder.proxy(proxy)
            }
          , None => builder.no_proxy()
        };

        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          crate::error::Error::InvalidConfiguration(e.to_string())
        })?;

        Ok(ReqwestTransport { http_client })
    }
}

impl Transport for ReqwestTransport
{   async fn send(
      &self
    , request: HttpRequest
    ) -> Result<HttpResponse, crate::error::Error>
    {   let HttpRequest { method, url, headers, body } = request;
        trace!("{} {}", method, url);

        let mut builder = self.http_client
          .request(method, url)
          .headers(headers);
        if let Some(body) = body
        {   builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
          error!("HTTP error: {}", e);
          request_error(e)
        })?;

        let status = response.status();
        trace!("Response status: {}", status);

        let body = response.bytes().await.map_err(|e| {
          error!("Failed to read response body: {}", e);
          if e.is_timeout()
          {   crate::error::Error::Timeout
          } else
          {   crate::error::Error::ReadError(e.to_string())
          }
        })?;

        Ok(HttpResponse
        {   status
          , body: body.to_vec()
        })
    }
}

fn request_error(e: reqwest::Error) -> crate::error::Error
{   if e.is_timeout()
    {   crate::error::Error::Timeout
    } else
    {   crate::error::Error::HttpError(e.to_string())
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::config::TransportConfig;

    #[test]
    fn builds_without_proxy()
    {   assert!(ReqwestTransport::new(&TransportConfig::default()).is_ok());
    }

    #[test]
    fn blank_proxy_is_ignored()
    {   let config = TransportConfig::default().with_proxy("   ");
        assert!(ReqwestTransport::new(&config).is_ok());
    }

    #[test]
    fn malformed_proxy_is_a_configuration_error()
    {   let config = TransportConfig::default()
          .with_proxy("http://[::1");
        let err = ReqwestTransport::new(&config).unwrap_err();
        assert!(matches!(
          err
        , crate::error::Error::InvalidConfiguration(_)
        ));
        assert!(err.is_precondition());
    }
}
