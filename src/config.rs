//! Configuration for the chat query client

use serde::{Deserialize, Serialize};

/// Default chat completions endpoint
pub const DEFAULT_ENDPOINT: &str
  = "https://openrouter.ai/api/v1/chat/completions";

/// Query configuration, read-only for the lifetime of the
/// worker. Empty strings mean "not configured"; an empty
/// `api_key` short-circuits every query to a fixed reply
/// without touching the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig
{   /// Chat completions endpoint URL
    pub endpoint: String
  , /// Bearer token for the Authorization header
    pub api_key: String
  , /// Model identifier sent with every request
    pub model: String
  , /// Optional system message, prepended when non-empty
    pub system_prompt: String
  , /// Sampling temperature, sent only when not 0.7
    pub temperature: f32
  , /// Nucleus sampling, sent only when not 0.9
    pub top_p: f32
  , /// Top-k sampling, sent only when positive
    pub top_k: u32
  , /// Response length cap, sent only when positive
    pub max_tokens: usize
  , /// Seed as text, parsed to an integer; unparsable
    /// values are dropped without failing the request
    pub seed: String
  , /// Attribution URL for the HTTP-Referer header
    pub site_url: String
  , /// Attribution name for the X-Title header
    pub site_name: String
  , /// Emit raw failure detail to the log
    pub debug: bool
}

impl Default for QueryConfig
{   fn default() -> Self
    {   QueryConfig
        {   endpoint: DEFAULT_ENDPOINT.to_string()
          , api_key: String::new()
          , model: String::new()
          , system_prompt: String::new()
          , temperature: 0.7
          , top_p: 0.9
          , top_k: 0
          , max_tokens: 0
          , seed: String::new()
          , site_url: String::new()
          , site_name: String::new()
          , debug: false
        }
    }
}
