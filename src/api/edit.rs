use log::debug;

use crate::client::{Endpoint, PreparedCall};
use crate::config::{Credentials, TransportConfig};
use crate::error::Error;
use crate::request::EditRequest;
use crate::response::EditResponse;
use crate::transport::Transport;

/// Revise `request.input` following `request.instruction`
///
/// Model, input, instruction and API key must all be non-blank.
pub async fn edit(
  request: &EditRequest
, credentials: &Credentials
, config: &TransportConfig
) -> Result<EditResponse, Error>
{   let call = prepare(request, credentials)?;
    crate::client::execute_default(call, config).await
}

pub async fn edit_with<T: Transport>(
  transport: &T
, request: &EditRequest
, credentials: &Credentials
, config: &TransportConfig
) -> Result<EditResponse, Error>
{   let call = prepare(request, credentials)?;
    crate::client::execute(transport, call, config).await
}

fn prepare(
  request: &EditRequest
, credentials: &Credentials
) -> Result<PreparedCall, Error>
{   debug!("Preparing edit for model {}", request.model);
    request.validate()?;
    PreparedCall::with_body(Endpoint::Edits, request, credentials)
}
