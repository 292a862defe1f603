use std::sync::Arc;

use log::{info, warn};
use tokio::{runtime::Handle, sync::oneshot};

use super::state::WidgetState;
use crate::datasources::{RateDataSource, RateResult, INTERRUPTED_MESSAGE};

/// Runs fetches on the runtime and feeds results back into the UI state.
pub struct Refresher {
    source: Arc<dyn RateDataSource>,
    handle: Handle,
    pending: Option<oneshot::Receiver<RateResult>>,
}

impl Refresher {
    pub fn new(source: Arc<dyn RateDataSource>, handle: Handle) -> Refresher {
        Refresher {
            source,
            handle,
            pending: None,
        }
    }

    /// Starts a fetch unless one is already running. `wake` is called from the
    /// runtime once the result is ready.
    pub fn start(&mut self, state: &mut WidgetState, wake: impl FnOnce() + Send + 'static) -> bool {
        if !state.begin_refresh() {
            return false;
        }
        info!("Refreshing rate");
        let (tx, rx) = oneshot::channel();
        let source = self.source.clone();
        self.handle.spawn(async move {
            let result = source.fetch_rate().await;
            if tx.send(result).is_ok() {
                wake();
            }
        });
        self.pending = Some(rx);
        true
    }

    /// Applies a finished fetch, if any. Returns true when the state changed.
    pub fn poll(&mut self, state: &mut WidgetState) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                state.complete_refresh(result);
                true
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
            Err(oneshot::error::TryRecvError::Closed) => {
                warn!("Rate fetch was dropped before completing");
                self.pending = None;
                state.complete_refresh(RateResult::Failure {
                    message: INTERRUPTED_MESSAGE.to_owned(),
                });
                true
            }
        }
    }
}
