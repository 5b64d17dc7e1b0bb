//! Error types for the demo runner.

use std::io;

use primer_queue::QueueError;
use thiserror::Error;

/// Errors from running the demo.
///
/// Argument errors are reported by `clap` before a run starts.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The queue rejected its configuration.
    #[error("invalid queue configuration")]
    Queue(#[from] QueueError),
    /// Writing the transcript failed.
    #[error("failed to write demo output")]
    Io(#[from] io::Error),
}
