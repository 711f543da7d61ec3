//! Cooperative cancellation shared between the Ctrl+C handler and the
//! pipeline.

use crate::errors::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag raised once by the signal handler and polled by the walks and
/// by extraction.
///
/// A raised token makes the run stop before any preference or summary file
/// is written.
///
/// # Examples
///
/// ```
/// use foldermap::CancellationToken;
///
/// let token = CancellationToken::new();
/// let seen_by_worker = token.clone();
/// assert!(seen_by_worker.ensure_active().is_ok());
///
/// token.cancel();
/// assert!(seen_by_worker.is_cancelled());
/// assert!(seen_by_worker.ensure_active().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    raised: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag for this token and every clone.
    pub fn cancel(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// `Err(Error::Interrupted)` once the flag is raised.
    pub fn ensure_active(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Interrupted)
        } else {
            Ok(())
        }
    }
}
