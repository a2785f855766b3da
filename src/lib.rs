pub mod error;
pub mod config;
pub mod request;
pub mod response;
pub mod transport;
pub mod client;
pub mod api;

/*

gptcall: typed, stateless wrappers over the OpenAI text endpoints.
Every call is one request/response cycle: validate -> encode ->
POST/GET -> read body -> decode. No shared client, no retries,
no streaming.

gptcall/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports
│   ├── error.rs        # Error + ErrorKind taxonomy
│   ├── config.rs       # Credentials and TransportConfig
│   ├── request.rs      # Request records (chat, completion, edit)
│   ├── response.rs     # Response records
│   ├── transport.rs    # Transport trait + reqwest implementation
│   ├── client.rs       # Endpoints, header building, execute
│   └── api/            # One module per remote capability
│       ├── chat.rs
│       ├── completion.rs
│       ├── edit.rs
│       └── model.rs
└── tests/

*/

pub use api::{
  chat, chat_with
, completion, completion_with
, edit, edit_with
, list_models, list_models_with
, retrieve_model, retrieve_model_with
};
pub use client::{Endpoint, PreparedCall};
pub use config::{Credentials, TransportConfig};
pub use error::{Error, ErrorKind};
pub use request::{
  ChatMessage, ChatRequest, CompletionRequest, EditRequest, StopSequences
};
pub use response::{
  ChatChoice, ChatResponse, CompletionChoice, CompletionResponse
, EditChoice, EditResponse, Model, ModelList, Permission, Usage
};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
