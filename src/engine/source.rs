// src/engine/source.rs

//! Pluggable step source abstraction.
//!
//! The refresh loop asks a `StepSourceProvider` for the current step list
//! instead of reading a file directly, so tests can script what each fetch
//! returns.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use crate::errors::Result;
use crate::input::{StepSource, parse_steps};
use crate::types::ViewMode;

/// Trait abstracting where step lists come from.
pub trait StepSourceProvider: Send {
    /// Fetch the current step list.
    fn fetch(&mut self) -> Pin<Box<dyn Future<Output = Result<StepSource>> + Send + '_>>;
}

/// Reads a JSON step list from disk on every fetch.
#[derive(Debug, Clone)]
pub struct FileStepSource {
    path: PathBuf,
    mode: ViewMode,
}

impl FileStepSource {
    pub fn new(path: impl Into<PathBuf>, mode: ViewMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }
}

impl StepSourceProvider for FileStepSource {
    fn fetch(&mut self) -> Pin<Box<dyn Future<Output = Result<StepSource>> + Send + '_>> {
        let path = self.path.clone();
        let mode = self.mode;

        Box::pin(async move {
            let contents = tokio::fs::read_to_string(&path).await?;
            parse_steps(&contents, mode)
        })
    }
}
