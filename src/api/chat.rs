use log::debug;

use crate::client::{Endpoint, PreparedCall};
use crate::config::{Credentials, TransportConfig};
use crate::error::Error;
use crate::request::ChatRequest;
use crate::response::ChatResponse;
use crate::transport::Transport;

/// Chat completion over a fresh HTTPS transport
pub async fn chat(
  request: &ChatRequest
, credentials: &Credentials
, config: &TransportConfig
) -> Result<ChatResponse, Error>
{   let call = prepare(request, credentials)?;
    crate::client::execute_default(call, config).await
}

/// Chat completion through `transport`
pub async fn chat_with<T: Transport>(
  transport: &T
, request: &ChatRequest
, credentials: &Credentials
, config: &TransportConfig
) -> Result<ChatResponse, Error>
{   let call = prepare(request, credentials)?;
    crate::client::execute(transport, call, config).await
}

fn prepare(
  request: &ChatRequest
, credentials: &Credentials
) -> Result<PreparedCall, Error>
{   debug!(
      "Preparing chat for model {} ({} messages)"
    , request.model, request.messages.len()
    );
    request.validate()?;
    PreparedCall::with_body(
      Endpoint::ChatCompletions
    , request
    , credentials
    )
}
