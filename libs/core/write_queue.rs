use smarttodo_storage::StorageBox;
use tokio::sync::{mpsc, oneshot};

enum WriteCommand {
    Set { key: String, value: String },
    Flush(oneshot::Sender<()>),
}

/// Fire-and-forget writer in front of a storage.
///
/// Writes are applied one at a time in the order they were enqueued, the
/// last write enqueued for a key is the one left in storage. Failed writes
/// are logged and dropped, there is no retry. The queue is unbounded and
/// every write is applied, nothing is coalesced.
///
/// The worker stops once every handle has been dropped and the pending
/// commands were applied.
#[derive(Clone)]
pub struct WriteQueue {
    sender: mpsc::UnboundedSender<WriteCommand>,
}

impl WriteQueue {
    /// Spawn the worker on the current tokio runtime
    pub fn spawn(storage: StorageBox) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(storage, receiver));
        Self { sender }
    }

    pub fn enqueue_set(&self, key: impl Into<String>, value: String) {
        self.send(WriteCommand::Set {
            key: key.into(),
            value,
        });
    }

    /// Wait until every command enqueued before this call was applied
    pub async fn flush(&self) -> eyre::Result<()> {
        let (done, wait) = oneshot::channel();
        self.sender
            .send(WriteCommand::Flush(done))
            .map_err(|_| eyre::eyre!("write queue worker is not running"))?;
        wait.await
            .map_err(|_| eyre::eyre!("write queue worker stopped before flushing"))?;
        Ok(())
    }

    fn send(&self, command: WriteCommand) {
        if self.sender.send(command).is_err() {
            tracing::warn!("write queue worker is not running, dropping write");
        }
    }
}

async fn run_worker(storage: StorageBox, mut receiver: mpsc::UnboundedReceiver<WriteCommand>) {
    while let Some(command) = receiver.recv().await {
        match command {
            WriteCommand::Set { key, value } => {
                tracing::trace!(key = %key, bytes = value.len(), "writing document");
                if let Err(e) = storage.set(key.clone(), value).await {
                    tracing::warn!(key = %key, error = %e, "write failed, change is lost");
                }
            }
            WriteCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    tracing::debug!("write queue worker stopped");
}
