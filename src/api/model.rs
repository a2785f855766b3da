//! Read-only model lookups, sent as GET without a body

use log::debug;

use crate::client::{Endpoint, PreparedCall};
use crate::config::{Credentials, TransportConfig};
use crate::error::Error;
use crate::response::{Model, ModelList};
use crate::transport::Transport;

pub async fn list_models(
  credentials: &Credentials
, config: &TransportConfig
) -> Result<ModelList, Error>
{   let call = PreparedCall::without_body(
      Endpoint::ListModels
    , credentials
    )?;
    crate::client::execute_default(call, config).await
}

pub async fn list_models_with<T: Transport>(
  transport: &T
, credentials: &Credentials
, config: &TransportConfig
) -> Result<ModelList, Error>
{   let call = PreparedCall::without_body(
      Endpoint::ListModels
    , credentials
    )?;
    crate::client::execute(transport, call, config).await
}

pub async fn retrieve_model(
  model: &str
, credentials: &Credentials
, config: &TransportConfig
) -> Result<Model, Error>
{   let call = prepare_retrieve(model, credentials)?;
    crate::client::execute_default(call, config).await
}

pub async fn retrieve_model_with<T: Transport>(
  transport: &T
, model: &str
, credentials: &Credentials
, config: &TransportConfig
) -> Result<Model, Error>
{   let call = prepare_retrieve(model, credentials)?;
    crate::client::execute(transport, call, config).await
}

fn prepare_retrieve(
  model: &str
, credentials: &Credentials
) -> Result<PreparedCall, Error>
{   debug!("Preparing retrieve-model for {}", model);
    crate::error::require_non_blank("model", model)?;
    PreparedCall::without_body(
      Endpoint::RetrieveModel(model.to_string())
    , credentials
    )
}
