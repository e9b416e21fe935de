use std::fmt;

/// Custom error type for banter query operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// No API key configured
    NotConfigured
  , /// HTTP client could not be initialized
    ClientInit(String)
  , /// Failed to build/serialize the outgoing request
    RequestBuild(String)
  , /// Transport never completed the exchange
    Transport(String)
  , /// 400: invalid request parameters
    BadRequest { code: u16, body: String }
  , /// 401: invalid or missing API key
    Unauthorized { code: u16, body: String }
  , /// 402: account or billing issue
    PaymentRequired { code: u16, body: String }
  , /// 429: too many requests
    RateLimited { code: u16, body: String }
  , /// Any other HTTP error status
    HttpStatus { code: u16, body: String }
  , /// API returned an error object in the body
    Api(String)
  , /// Response body was not valid JSON
    Parse(String)
  , /// Response JSON missing choices/message/content
    InvalidResponse
  , /// Parsed reply was empty
    EmptyReply
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::NotConfigured => {
              write!(f, "API key not configured")
            }
          , Error::ClientInit(msg) => {
              write!(f,
                "Failed to initialize HTTP client: {}",
                msg
              )
            }
          , Error::RequestBuild(msg) => {
              write!(f, "Failed to build request: {}", msg)
            }
          , Error::Transport(msg) => {
              write!(f, "Transport failure: {}", msg)
            }
          , Error::BadRequest { body, .. } => {
              write!(f,
                "Bad Request: Invalid parameters - {}",
                body
              )
            }
          , Error::Unauthorized { body, .. } => {
              write!(f,
                "Unauthorized: Invalid API key - {}",
                body
              )
            }
          , Error::PaymentRequired { body, .. } => {
              write!(f,
                "Payment Required: Account issue - {}",
                body
              )
            }
          , Error::RateLimited { body, .. } => {
              write!(f,
                "Rate Limited: Too many requests - {}",
                body
              )
            }
          , Error::HttpStatus { code, body } => {
              write!(f, "HTTP Error {} - {}", code, body)
            }
          , Error::Api(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::Parse(msg) => {
              write!(f, "Failed to parse response: {}", msg)
            }
          , Error::InvalidResponse => {
              write!(f,
                "Invalid response format: missing choices or content"
              )
            }
          , Error::EmptyReply => {
              write!(f, "No valid response extracted")
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
