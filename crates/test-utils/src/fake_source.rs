use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use stepgraph::engine::StepSourceProvider;
use stepgraph::errors::{Result, StepgraphError};
use stepgraph::input::StepSource;

/// A fake step source that:
/// - replays a scripted list of fetch results, one per call
/// - keeps returning the last scripted result once the script runs out
/// - counts how many times it was fetched.
pub struct ScriptedSource {
    script: VecDeque<std::result::Result<StepSource, String>>,
    last: Option<std::result::Result<StepSource, String>>,
    fetches: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new(fetches: Arc<AtomicUsize>) -> Self {
        Self {
            script: VecDeque::new(),
            last: None,
            fetches,
        }
    }

    pub fn then_ok(mut self, source: StepSource) -> Self {
        self.script.push_back(Ok(source));
        self
    }

    pub fn then_err(mut self, message: &str) -> Self {
        self.script.push_back(Err(message.to_string()));
        self
    }
}

impl StepSourceProvider for ScriptedSource {
    fn fetch(&mut self) -> Pin<Box<dyn Future<Output = Result<StepSource>> + Send + '_>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(next) = self.script.pop_front() {
            self.last = Some(next);
        }
        let result = match &self.last {
            Some(Ok(source)) => Ok(source.clone()),
            Some(Err(message)) => Err(StepgraphError::Other(anyhow::anyhow!(message.clone()))),
            None => Err(StepgraphError::Other(anyhow::anyhow!("empty script"))),
        };

        Box::pin(async move { result })
    }
}
