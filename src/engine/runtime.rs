// src/engine/runtime.rs

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace, warn};

use crate::render::RenderGraph;

use super::core::StepGraphEngine;
use super::source::StepSourceProvider;

/// Handle for a running refresh loop.
///
/// - `stop` cancels the loop and waits for it to finish.
/// - Dropping the handle also cancels it (the loop sees its cancel channel
///   close), but without waiting.
pub struct RefreshHandle {
    cancel: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl fmt::Debug for RefreshHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshHandle")
            .field("finished", &self.is_finished())
            .finish_non_exhaustive()
    }
}

impl RefreshHandle {
    /// Cancel the loop and wait until it has exited.
    pub async fn stop(mut self) {
        if let Some(cancel) = self.cancel.take() {
            // The loop may already be gone (e.g. receiver dropped).
            let _ = cancel.send(());
        }
        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await {
                warn!(error = %err, "refresh loop task did not shut down cleanly");
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }
}

/// Spawn a loop that re-fetches the step source every `interval` and sends
/// the rendered graph on `graph_tx` whenever its cache key changed.
///
/// - The first tick fires immediately, so the first successful fetch is
///   always sent.
/// - A failed fetch is logged and the previous graph stays current.
/// - The loop ends when cancelled via the handle or when `graph_tx`'s
///   receiver is dropped. Cancellation also interrupts an in-flight fetch
///   or a send blocked on a full channel.
pub fn spawn_refresh_loop<P>(
    mut provider: P,
    mut engine: StepGraphEngine,
    interval: Duration,
    graph_tx: mpsc::Sender<Arc<RenderGraph>>,
) -> RefreshHandle
where
    P: StepSourceProvider + 'static,
{
    let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "refresh loop started");

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = &mut cancel_rx => {
                    debug!("refresh loop cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    // Fetch and send both race the cancel signal.
                    let fetched = tokio::select! {
                        biased;

                        _ = &mut cancel_rx => {
                            debug!("refresh loop cancelled during fetch");
                            break;
                        }
                        fetched = provider.fetch() => fetched,
                    };
                    let source = match fetched {
                        Ok(source) => source,
                        Err(err) => {
                            warn!(error = %err, "failed to fetch steps; keeping previous graph");
                            continue;
                        }
                    };

                    let rendered = engine.render(&source);
                    if !rendered.recomputed {
                        trace!("step source unchanged");
                        continue;
                    }

                    debug!(
                        nodes = rendered.graph.nodes.len(),
                        edges = rendered.graph.edges.len(),
                        "publishing refreshed graph"
                    );
                    tokio::select! {
                        biased;

                        _ = &mut cancel_rx => {
                            debug!("refresh loop cancelled while publishing");
                            break;
                        }
                        sent = graph_tx.send(rendered.graph) => {
                            if sent.is_err() {
                                debug!("graph receiver dropped; stopping refresh loop");
                                break;
                            }
                        }
                    }
                }
            }
        }

        info!("refresh loop finished");
    });

    RefreshHandle {
        cancel: Some(cancel_tx),
        handle: Some(handle),
    }
}
