//! Query manager actor: queues prompts and runs them one
//! at a time on a background worker task

use tokio::sync::mpsc;
use log::{debug, error, info};

use crate::client::OpenRouterClient;
use crate::config::QueryConfig;
use crate::error::Error;
use crate::{QueryHandle, QueryReplySender};

/// Commands for the query worker
pub enum QueryCommand
{   Submit
    {   prompt: String
      , reply: QueryReplySender
    }
  , Shutdown
}

/// Owned query manager. Created at host startup, torn down
/// at shutdown; owns the worker task and the command queue.
pub struct QueryManager
{   tx: mpsc::UnboundedSender<QueryCommand>
  , _task: tokio::task::JoinHandle<()>
}

impl QueryManager
{   /// Create the manager and spawn its worker loop
    pub fn new(config: QueryConfig) -> Self
    {   debug!("Creating QueryManager");
        let (cmd_tx, cmd_rx)
          = mpsc::unbounded_channel();

        let _task = tokio::spawn(async move {
          run_query_loop(cmd_rx, config).await;
        });

        QueryManager
        {   tx: cmd_tx
          , _task
        }
    }

    /// Queue a prompt - returns a handle immediately.
    /// Never fails: if the worker is gone the handle still
    /// resolves, to the fixed service-error reply.
    pub async fn submit(&self, prompt: String)
      -> QueryHandle
    {   debug!("submit queuing prompt");
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let sent = self.tx.send(QueryCommand::Submit
        {   prompt
          , reply: reply_tx
        });

        if sent.is_err()
        {   error!("Query worker disconnected");
        }

        QueryHandle::new(reply_rx)
    }

    /// Shut down the worker; queued prompts ahead of the
    /// shutdown command still complete.
    pub async fn shutdown(self)
      -> Result<(), Error>
    {   debug!("Shutting down QueryManager");
        self.tx.send(QueryCommand::Shutdown)
          .map_err(|_| {
            Error::Other(
              "Manager already shutdown".to_string()
            )
          })
    }
}

/// Main query worker loop
async fn run_query_loop(
  mut cmd_rx: mpsc::UnboundedReceiver<QueryCommand>
, config: QueryConfig
)
{   debug!("Starting query worker loop");
    let client = OpenRouterClient::new(config);

    loop
    { match cmd_rx.recv().await
      {   Some(QueryCommand::Submit { prompt, reply }) => {
            debug!("Processing Submit");
            let result = client.query(&prompt).await;
            let _ = reply.send(result);
          }
        , Some(QueryCommand::Shutdown) => {
            info!("Query worker shutting down");
            break;
          }
        , None => {
            debug!("Command channel closed");
            break;
          }
      }
    }
}
