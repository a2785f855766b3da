use log::debug;

use crate::client::{Endpoint, PreparedCall};
use crate::config::{Credentials, TransportConfig};
use crate::error::Error;
use crate::request::CompletionRequest;
use crate::response::CompletionResponse;
use crate::transport::Transport;

pub async fn completion(
  request: &CompletionRequest
, credentials: &Credentials
, config: &TransportConfig
) -> Result<CompletionResponse, Error>
{   let call = prepare(request, credentials)?;
    crate::client::execute_default(call, config).await
}

pub async fn completion_with<T: Transport>(
  transport: &T
, request: &CompletionRequest
, credentials: &Credentials
, config: &TransportConfig
) -> Result<CompletionResponse, Error>
{   let call = prepare(request, credentials)?;
    crate::client::execute(transport, call, config).await
}

fn prepare(
  request: &CompletionRequest
, credentials: &Credentials
) -> Result<PreparedCall, Error>
{   debug!("Preparing completion for model {}", request.model);
    request.validate()?;
    PreparedCall::with_body(Endpoint::Completions, request, credentials)
}
