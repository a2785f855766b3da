#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use gptcall::{Error, HttpRequest, HttpResponse, Transport};
use reqwest::StatusCode;

pub const CHAT_BODY: &str = r#"{"id":"chatcmpl-1","object":"chat.completion","created":1681291743,"model":"gpt-3.5-turbo-0301","choices":[{"finish_reason":"stop","index":0}],"usage":{"prompt_tokens":5,"completion_tokens":7,"total_tokens":12}}"#;

/// Canned-response transport counting every `send`
pub struct MockTransport
{   status: StatusCode
  , body: Vec<u8>
  , delay: Option<Duration>
  , calls: AtomicUsize
  , requests: Mutex<Vec<HttpRequest>>
}

impl MockTransport
{   pub fn new(body: &str) -> Self
    {   MockTransport
        {   status: StatusCode::OK
          , body: body.as_bytes().to_vec()
          , delay: None
          , calls: AtomicUsize::new(0)
          , requests: Mutex::new(Vec::new())
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self
    {   self.status = status;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self
    {   self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize
    {   self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> HttpRequest
    {   self.requests.lock().unwrap()
          .last()
          .cloned()
          .expect("no request was sent")
    }

    /// Last request body parsed as JSON
    pub fn last_body(&self) -> serde_json::Value
    {   let body = self.last_request().body.expect("request had no body");
        serde_json::from_slice(&body).unwrap()
    }
}

impl Transport for MockTransport
{   async fn send(
      &self
    , request: HttpRequest
    ) -> Result<HttpResponse, Error>
    {   self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        if let Some(delay) = self.delay
        {   tokio::time::sleep(delay).await;
        }
        Ok(HttpResponse
        {   status: self.status
          , body: self.body.clone()
        })
    }
}

pub fn init_logging()
{   let _ = env_logger::builder().is_test(true).try_init();
}
