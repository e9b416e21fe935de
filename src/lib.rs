pub mod error;
pub mod config;
pub mod request;
pub mod client;
pub mod manager;
use tokio::sync::mpsc;

/*

banter is the async ai-chat core for the game server: the chat
module hands a player prompt to a query manager, the manager runs
one openrouter-style chat completion on a background task, and the
caller gets back a single reply string it can show in-game. every
failure collapses to a fixed in-character reply, so the server
never sees a fault from this crate.

banter/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports and handle types
│   ├── error.rs        # Custom error types and handling
│   ├── config.rs       # Query configuration
│   ├── request.rs      # Wire types, builder and parser
│   ├── client.rs       # HTTP transport and query pipeline
│   └── manager.rs      # Query manager actor
└── tests/              # Integration and unit tests

*/

/// BANTER API INTERFACE:

// ===== Query =====

pub type QueryReply = String;
pub type QueryReplySender
  = mpsc::UnboundedSender<QueryReply>;

/// Handle for one submitted query. Resolved exactly once
/// with the reply string; if the worker goes away first,
/// it resolves to the fixed service-error reply instead.
pub struct QueryHandle
{   rx: mpsc::UnboundedReceiver<QueryReply>
}

impl QueryHandle
{   pub(crate) fn new(
      rx: mpsc::UnboundedReceiver<QueryReply>
    ) -> Self
    {   QueryHandle
        {   rx
        }
    }

    /// Wait for the reply
    pub async fn wait(mut self) -> String
    {   match self.rx.recv().await
        {   Some(reply) => reply
          , None => {
              crate::client::REPLY_SERVICE_ERROR
                .to_string()
            }
        }
    }
}

pub use config::QueryConfig;
pub use error::Error;
pub use manager::QueryManager;
