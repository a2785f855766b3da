//! Response records decoded from each call's JSON body
//!
//! Choices keep the order the remote service returned them in.
//! Fields whose shape the remote service owns (`logprobs`, permission
//! `group`) are kept as raw JSON.

use serde::{Deserialize, Serialize};

/// Token accounting shared by every generation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage
{   pub prompt_tokens: u32
  , #[serde(default)]
    pub completion_tokens: u32
  , pub total_tokens: u32
}

// ===== Chat =====

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatResponse
{   /// e.g. chatcmpl-74R4hDTKxzh5EzElrhofHa5msxvKz
    pub id: String
  , /// chat.completion
    pub object: String
  , /// Epoch seconds
    pub created: u64
  , pub model: String
  , pub choices: Vec<ChatChoice>
  , pub usage: Usage
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatChoice
{   #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<crate::request::ChatMessage>
  , /// "stop" when the answer is complete
    pub finish_reason: Option<String>
  , pub index: u32
}

impl ChatResponse
{   /// Content of the first choice, if it carries a message
    pub fn first_content(&self) -> Option<&str>
    {   self.choices.first()
          .and_then(|c| c.message.as_ref())
          .map(|m| m.content.as_str())
    }
}

// ===== Completion =====

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompletionResponse
{   pub id: String
  , /// text_completion
    pub object: String
  , pub created: u64
  , pub model: String
  , pub choices: Vec<CompletionChoice>
  , pub usage: Usage
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompletionChoice
{   #[serde(default)]
    pub text: String
  , pub index: u32
  , pub finish_reason: Option<String>
  , #[serde(default)]
    pub logprobs: Option<serde_json::Value>
}

impl CompletionResponse
{   pub fn first_text(&self) -> Option<&str>
    {   self.choices.first().map(|c| c.text.as_str())
    }
}

// ===== Edit =====

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditResponse
{   /// edit
    pub object: String
  , pub created: u64
  , pub choices: Vec<EditChoice>
  , pub usage: Usage
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditChoice
{   #[serde(default)]
    pub text: String
  , pub index: u32
}

impl EditResponse
{   pub fn first_text(&self) -> Option<&str>
    {   self.choices.first().map(|c| c.text.as_str())
    }
}

// ===== Models =====

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelList
{   pub object: String
  , pub data: Vec<Model>
}

impl ModelList
{   /// Model identifiers in listing order
    pub fn ids(&self) -> Vec<&str>
    {   self.data.iter().map(|m| m.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model
{   /// e.g. gpt-3.5-turbo
    pub id: String
  , /// model
    pub object: String
  , pub created: u64
  , pub owned_by: String
  , #[serde(default)]
    pub permission: Vec<Permission>
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Permission
{   pub id: String
  , pub object: String
  , pub created: u64
  , pub allow_create_engine: bool
  , pub allow_sampling: bool
  , pub allow_logprobs: bool
  , pub allow_search_indices: bool
  , pub allow_view: bool
  , pub allow_fine_tuning: bool
  , pub organization: String
  , pub group: Option<serde_json::Value>
  , pub is_blocking: bool
}
