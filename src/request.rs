//! Request records sent as the JSON body of each call

use serde::{Deserialize, Serialize};

/// Stop sequences accepted by the remote service per request
pub const MAX_STOP_SEQUENCES: usize = 4;

/// Token limit applied to chat and completion requests
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

// ===== Stop sequences =====

/// Ordered list of at most `MAX_STOP_SEQUENCES` strings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct StopSequences(Vec<String>);

impl StopSequences
{   pub fn new<I, S>(sequences: I)
      -> Result<Self, crate::error::Error>
    where
      I: IntoIterator<Item = S>
    , S: Into<String>
    {   let sequences: Vec<String>
          = sequences.into_iter().map(Into::into).collect();
        if sequences.len() > MAX_STOP_SEQUENCES
        {   return Err(crate::error::Error::TooManyStopSequences(
              sequences.len()
            ));
        }
        Ok(StopSequences(sequences))
    }

    pub fn is_empty(&self) -> bool
    {   self.0.is_empty()
    }

    pub fn len(&self) -> usize
    {   self.0.len()
    }

    pub fn as_slice(&self) -> &[String]
    {   &self.0
    }
}

impl TryFrom<Vec<String>> for StopSequences
{   type Error = crate::error::Error;

    fn try_from(sequences: Vec<String>) -> Result<Self, Self::Error>
    {   StopSequences::new(sequences)
    }
}

impl From<StopSequences> for Vec<String>
{   fn from(stop: StopSequences) -> Self
    {   stop.0
    }
}

// ===== Chat =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage
{   /// user / system / assistant
    pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn new(
      role: impl Into<String>
    , content: impl Into<String>
    ) -> Self
    {   ChatMessage
        {   role: role.into()
          , content: content.into()
        }
    }

    pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self
    {   ChatMessage::new("assistant", content)
    }
}

/// Body of `POST /v1/chat/completions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>
  , pub max_tokens: u32
  , /// 0..2
    pub temperature: f32
  , /// 0..1
    pub top_p: f32
  , pub n: u32
  , pub stream: bool
  , #[serde(default, skip_serializing_if = "StopSequences::is_empty")]
    pub stop: StopSequences
  , /// -2.0..2.0
    pub presence_penalty: f32
  , /// -2.0..2.0
    pub frequency_penalty: f32
}

impl ChatRequest
{   /// Single user message with default sampling
    pub fn new(
      model: impl Into<String>
    , content: impl Into<String>
    ) -> Self
    {   ChatRequest::with_messages(
          model
        , vec![ChatMessage::user(content)]
        )
    }

    pub fn with_messages(
      model: impl Into<String>
    , messages: Vec<ChatMessage>
    ) -> Self
    {   ChatRequest
        {   model: model.into()
          , messages
          , user: None
          , max_tokens: DEFAULT_MAX_TOKENS
          , temperature: 1.0
          , top_p: 1.0
          , n: 1
          , stream: false
          , stop: StopSequences::default()
          , presence_penalty: 0.0
          , frequency_penalty: 0.0
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self
    {   self.user = Some(user.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self
    {   self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self
    {   self.temperature = temperature;
        self
    }

    pub fn with_stop(mut self, stop: StopSequences) -> Self
    {   self.stop = stop;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), crate::error::Error>
    {   reject_streaming(self.stream)
    }
}

// ===== Completion =====

/// Body of `POST /v1/completions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest
{   pub model: String
  , pub prompt: String
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>
  , pub max_tokens: u32
  , pub temperature: f32
  , pub top_p: f32
  , pub n: u32
  , pub stream: bool
  , #[serde(default, skip_serializing_if = "StopSequences::is_empty")]
    pub stop: StopSequences
  , /// Number of most likely tokens to return log probabilities for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<u32>
}

impl CompletionRequest
{   pub fn new(
      model: impl Into<String>
    , prompt: impl Into<String>
    ) -> Self
    {   CompletionRequest
        {   model: model.into()
          , prompt: prompt.into()
          , user: None
          , max_tokens: DEFAULT_MAX_TOKENS
          , temperature: 1.0
          , top_p: 1.0
          , n: 1
          , stream: false
          , stop: StopSequences::default()
          , logprobs: None
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self
    {   self.user = Some(user.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self
    {   self.max_tokens = max_tokens;
        self
    }

    pub fn with_stop(mut self, stop: StopSequences) -> Self
    {   self.stop = stop;
        self
    }

    pub fn with_logprobs(mut self, logprobs: u32) -> Self
    {   self.logprobs = Some(logprobs);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), crate::error::Error>
    {   reject_streaming(self.stream)
    }
}

// ===== Edit =====

/// Body of `POST /v1/edits`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRequest
{   pub model: String
  , /// Text to revise
    pub input: String
  , pub instruction: String
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>
  , pub temperature: f32
  , pub top_p: f32
  , pub n: u32
}

impl EditRequest
{   pub fn new(
      model: impl Into<String>
    , input: impl Into<String>
    , instruction: impl Into<String>
    ) -> Self
    {   EditRequest
        {   model: model.into()
          , input: input.into()
          , instruction: instruction.into()
          , max_tokens: None
          , temperature: 1.0
          , top_p: 1.0
          , n: 1
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self
    {   self.max_tokens = Some(max_tokens);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), crate::error::Error>
    {   crate::error::require_non_blank("model", &self.model)?;
        crate::error::require_non_blank("input", &self.input)?;
        crate::error::require_non_blank(
          "instruction"
        , &self.instruction
        )
    }
}

fn reject_streaming(stream: bool) -> Result<(), crate::error::Error>
{   if stream
    {   log::error!("Rejected call: streaming is not supported");
        return Err(crate::error::Error::InvalidParameter(
          "stream must be false".to_string()
        ));
    }
    Ok(())
}
