//! HTTP transport and the single-query pipeline

use log::{debug, trace, error};
use std::time::Duration;

use crate::config::QueryConfig;
use crate::error::Error;
use crate::request::{build_chat_request, parse_chat_reply};

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;

// ===== Fixed Replies =====

// Every failure degrades to one of these user-safe strings;
// the real cause only ever reaches the log.
pub const REPLY_NOT_CONFIGURED: &str
  = "AI service not properly configured.";
pub const REPLY_LOST_IN_THOUGHT: &str
  = "Hmm... I'm lost in thought.";
pub const REPLY_REQUEST_FAILED: &str
  = "Error preparing request.";
pub const REPLY_UNREACHABLE: &str
  = "Failed to reach AI service.";
pub const REPLY_SERVICE_ERROR: &str
  = "AI service error occurred.";
pub const REPLY_BAD_RESPONSE: &str
  = "Error processing response.";
pub const REPLY_EMPTY: &str
  = "I'm having trouble understanding.";

/// Map an error to the fixed reply shown to the player
pub fn fallback_reply(error: &Error) -> &'static str
{   match error
    {   Error::NotConfigured => REPLY_NOT_CONFIGURED
      , Error::ClientInit(_) => REPLY_LOST_IN_THOUGHT
      , Error::RequestBuild(_) => REPLY_REQUEST_FAILED
      , Error::Transport(_) => REPLY_UNREACHABLE
      , Error::BadRequest { .. } => REPLY_SERVICE_ERROR
      , Error::Unauthorized { .. } => REPLY_SERVICE_ERROR
      , Error::PaymentRequired { .. } => REPLY_SERVICE_ERROR
      , Error::RateLimited { .. } => REPLY_SERVICE_ERROR
      , Error::HttpStatus { .. } => REPLY_SERVICE_ERROR
      , Error::Api(_) => REPLY_BAD_RESPONSE
      , Error::Parse(_) => REPLY_BAD_RESPONSE
      , Error::InvalidResponse => REPLY_BAD_RESPONSE
      , Error::EmptyReply => REPLY_EMPTY
      , Error::Other(_) => REPLY_SERVICE_ERROR
    }
}

// ===== Status Classification =====

/// Decide whether the exchange succeeded at the protocol
/// level. The body is opaque context carried on the error,
/// never interpreted here.
pub fn classify_status(code: u16, body: &str)
  -> Result<(), Error>
{   match code
    {   400 => Err(Error::BadRequest
        {   code
          , body: body.to_string()
        })
      , 401 => Err(Error::Unauthorized
        {   code
          , body: body.to_string()
        })
      , 402 => Err(Error::PaymentRequired
        {   code
          , body: body.to_string()
        })
      , 429 => Err(Error::RateLimited
        {   code
          , body: body.to_string()
        })
      , c if c >= 400 => Err(Error::HttpStatus
        {   code
          , body: body.to_string()
        })
      , _ => Ok(())
    }
}

// ===== Client =====

/// One-shot chat client for an OpenRouter-style endpoint
pub struct OpenRouterClient
{   config: QueryConfig
  , http_client: Option<reqwest::Client>
}

impl OpenRouterClient
{   /// Create a client with the transport timeouts applied
    pub fn new(config: QueryConfig) -> Self
    {   debug!("Creating OpenRouterClient");
        let http_client
          = match reqwest::Client::builder()
              .connect_timeout(Duration::from_secs(
                CONNECT_TIMEOUT_SECS
              ))
              .timeout(Duration::from_secs(
                REQUEST_TIMEOUT_SECS
              ))
              .build()
        {   Ok(client) => Some(client)
          , Err(e) => {
              error!(
                "Failed to initialize HTTP client: {}",
                e
              );
              None
            }
        };

        OpenRouterClient
        {   config
          , http_client
        }
    }

    /// Run one prompt end to end and always produce a
    /// reply string; failures come back as fixed replies,
    /// never as faults.
    pub async fn query(&self, prompt: &str) -> String
    {   match self.try_query(prompt).await
        {   Ok(reply) => {
              if self.config.debug
              {   debug!("Parsed bot reply: {}", reply);
              }
              reply
            }
          , Err(e) => {
              if self.config.debug
              {   debug!("Chat query failed: {}", e);
              }
              fallback_reply(&e).to_string()
            }
        }
    }

    async fn try_query(&self, prompt: &str)
      -> Result<String, Error>
    {   if self.config.api_key.is_empty()
        {   return Err(Error::NotConfigured);
        }

        let http_client = self.http_client.as_ref()
          .ok_or_else(|| {
            Error::ClientInit(
              "HTTP client unavailable".to_string()
            )
          })?;

        let request
          = build_chat_request(prompt, &self.config);
        trace!("Chat request: {:?}", request);

        let body = serde_json::to_string(&request)
          .map_err(|e| {
            Error::RequestBuild(e.to_string())
          })?;

        let (status, response_body)
          = self.perform(http_client, body).await?;

        classify_status(status, &response_body)?;

        let reply = parse_chat_reply(&response_body)?;
        if reply.is_empty()
        {   return Err(Error::EmptyReply);
        }

        Ok(reply)
    }

    /// Exactly one POST; returns the raw status and body
    async fn perform(
      &self
    , http_client: &reqwest::Client
    , body: String
    ) -> Result<(u16, String), Error>
    {   let mut request = http_client
          .post(&self.config.endpoint)
          .header(
            "Authorization",
            format!("Bearer {}", self.config.api_key)
          )
          .header("Content-Type", "application/json")
          .body(body);

        // Optional attribution headers
        if !self.config.site_url.is_empty()
        {   request = request.header(
              "HTTP-Referer",
              self.config.site_url.clone()
            );
        }
        if !self.config.site_name.is_empty()
        {   request = request.header(
              "X-Title",
              self.config.site_name.clone()
            );
        }

        let response = request.send().await
          .map_err(|e| {
            Error::Transport(e.to_string())
          })?;

        let status = response.status().as_u16();
        trace!("Chat response status: {}", status);

        let text = response.text().await
          .map_err(|e| {
            Error::Transport(e.to_string())
          })?;

        Ok((status, text))
    }
}
