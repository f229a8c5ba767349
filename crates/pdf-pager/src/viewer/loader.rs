use crate::constants::LOADER_THREAD_NAME;
use crate::engine::{DocumentSource, LoadedDocument, RenderEngine};
use crate::error::{PdfError, Result};
use crossbeam::channel::{self, Receiver, TryRecvError};
use std::sync::Arc;

enum Pending {
    Worker(Receiver<Result<LoadedDocument>>),
    SpawnFailed(PdfError),
    Done,
}

/// One in-flight document load. The worker sends exactly one result; if the
/// handle is dropped first, the send fails and the result is discarded.
pub struct LoadHandle {
    pending: Pending,
}

impl LoadHandle {
    pub fn spawn(engine: Arc<dyn RenderEngine>, source: DocumentSource) -> Self {
        let (sender, receiver) = channel::bounded(1);

        let spawned = std::thread::Builder::new()
            .name(LOADER_THREAD_NAME.into())
            .spawn(move || {
                log::info!("Loading {}", source);
                let result = engine.load(&source);
                if sender.send(result).is_err() {
                    log::debug!("Viewer gone before {} finished loading", source);
                }
            });

        match spawned {
            Ok(_) => Self {
                pending: Pending::Worker(receiver),
            },
            Err(e) => Self::spawn_failed(e),
        }
    }

    fn spawn_failed(error: std::io::Error) -> Self {
        log::error!("Failed to spawn loader thread: {}", error);
        Self {
            pending: Pending::SpawnFailed(PdfError::ThreadError(format!(
                "Failed to spawn loader: {}",
                error
            ))),
        }
    }

    /// Non-blocking. Returns the load result once, then `None` forever.
    pub fn poll(&mut self) -> Option<Result<LoadedDocument>> {
        match std::mem::replace(&mut self.pending, Pending::Done) {
            Pending::Worker(receiver) => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => {
                    self.pending = Pending::Worker(receiver);
                    None
                }
                Err(TryRecvError::Disconnected) => Some(Err(PdfError::ThreadError(
                    "Loader exited without a result".into(),
                ))),
            },
            Pending::SpawnFailed(error) => Some(Err(error)),
            Pending::Done => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        !matches!(self.pending, Pending::Done)
    }
}
