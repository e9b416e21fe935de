//! Wire types, request construction and reply parsing for the
//! OpenRouter-style chat completions API

use serde::{Deserialize, Serialize};
use log::debug;

/// Server-side default temperature; omitted when matched
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Server-side default top_p; omitted when matched
pub const DEFAULT_TOP_P: f32 = 0.9;

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   #[serde(default)]
    pub role: String
  , pub content: String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>
  , #[serde(default)]
    pub stream: bool
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
}

// ===== Request Construction =====

/// Build the chat request for one prompt. Pure; sampling
/// parameters are included only when they differ from the
/// server-side defaults, and streaming is always disabled.
pub fn build_chat_request(
  prompt: &str
, config: &crate::config::QueryConfig
) -> ChatRequest
{   let mut messages = Vec::new();

    if !config.system_prompt.is_empty()
    {   messages.push(ChatMessage
        {   role: "system".to_string()
          , content: config.system_prompt.clone()
        });
    }

    messages.push(ChatMessage
    {   role: "user".to_string()
      , content: prompt.to_string()
    });

    let temperature
      = if config.temperature != DEFAULT_TEMPERATURE
        {   Some(config.temperature)
        } else
        {   None
        };

    let top_p
      = if config.top_p != DEFAULT_TOP_P
        {   Some(config.top_p)
        } else
        {   None
        };

    let top_k
      = if config.top_k > 0
        {   Some(config.top_k)
        } else
        {   None
        };

    let max_tokens
      = if config.max_tokens > 0
        {   Some(config.max_tokens)
        } else
        {   None
        };

    // A seed that fails to parse is dropped, never fatal.
    let seed
      = if config.seed.is_empty()
        {   None
        } else
        {   match config.seed.parse::<i64>()
            {   Ok(value) => Some(value)
              , Err(_) => {
                  if config.debug
                  {   debug!(
                        "Invalid seed value, ignoring: {}",
                        config.seed
                      );
                  }
                  None
                }
            }
        };

    ChatRequest
    {   model: config.model.clone()
      , messages
      , temperature
      , top_p
      , top_k
      , max_tokens
      , seed
      , stream: false
    }
}

// ===== Reply Parsing =====

/// Extract the reply text from a response body on the
/// success path. Malformed JSON, an embedded error object
/// and a missing choices/message/content shape are three
/// distinct failures; an empty reply string is returned
/// as-is for the caller to police.
pub fn parse_chat_reply(body: &str)
  -> Result<String, crate::error::Error>
{   let value: serde_json::Value
      = serde_json::from_str(body)
          .map_err(|e| {
            crate::error::Error::Parse(e.to_string())
          })?;

    // Some APIs embed errors in 200-status bodies.
    if let Some(error_value) = value.get("error")
    {   let message = error_value
          .get("message")
          .and_then(|m| m.as_str())
          .unwrap_or("API Error");
        return Err(crate::error::Error::Api(
          message.to_string()
        ));
    }

    let response: ChatResponse
      = serde_json::from_value(value)
          .map_err(|_| {
            crate::error::Error::InvalidResponse
          })?;

    response.choices.first()
      .map(|c| c.message.content.clone())
      .ok_or(crate::error::Error::InvalidResponse)
}
