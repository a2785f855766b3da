//! One module per remote capability
//!
//! Every operation comes in two forms: the plain one builds a fresh
//! `ReqwestTransport` from the `TransportConfig`, the `_with` one sends
//! through any caller-supplied `Transport`.

pub mod chat;
pub mod completion;
pub mod edit;
pub mod model;

pub use chat::{chat, chat_with};
pub use completion::{completion, completion_with};
pub use edit::{edit, edit_with};
pub use model::{
  list_models, list_models_with, retrieve_model, retrieve_model_with
};
