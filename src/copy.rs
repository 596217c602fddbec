//! The "copy share text" action.
//!
//! The page itself copies in the browser (`assets/copy.js`), with the labels and reset delay
//! rendered from the constants below. [`CopyButton`] is the same action with the clipboard
//! passed in, so its flag behaviour can be driven without a browser.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinSet;
use tokio::time::Instant;

/// How long the confirmation label stays up after a successful copy
pub const RESET_AFTER: Duration = Duration::from_millis(2000);

pub const COPY_LABEL: &str = "Instagram投稿用テキストをコピー";
pub const COPIED_LABEL: &str = "✓ コピーしました";

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard access was denied")]
    PermissionDenied,
    #[error("Clipboard is not available: {0}")]
    Unavailable(String),
}

/// Platform clipboard write capability
#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Whether the share text was copied recently
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopiedFlag(bool);

impl CopiedFlag {
    pub fn is_set(self) -> bool {
        self.0
    }

    pub fn label(self) -> &'static str {
        if self.0 {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}

pub struct CopyButton<C> {
    clipboard: C,
    /// End of the latest confirmation window. `None` once the last reset has fired
    copied_until: Arc<Mutex<Option<Instant>>>,
    /// Pending resets. Dropping the button aborts them
    resets: JoinSet<()>,
}

impl<C: ClipboardWriter> CopyButton<C> {
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            copied_until: Arc::default(),
            resets: JoinSet::new(),
        }
    }

    pub fn flag(&self) -> CopiedFlag {
        let copied_until = self
            .copied_until
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        CopiedFlag(copied_until.is_some())
    }

    pub fn label(&self) -> &'static str {
        self.flag().label()
    }

    /// Writes the text to the clipboard and raises the flag for [`RESET_AFTER`].
    /// Every successful click arms its own reset, so overlapping windows keep the flag up until
    /// the last one ends. Failures are only logged.
    pub async fn click(&mut self, text: &str) {
        if let Err(error) = self.clipboard.write_text(text).await {
            tracing::error!("Failed to copy: {error}");
            return;
        }

        let deadline = Instant::now() + RESET_AFTER;
        *self
            .copied_until
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(deadline);

        // Finished resets stay in the set until joined
        while self.resets.try_join_next().is_some() {}

        let copied_until = Arc::clone(&self.copied_until);
        self.resets.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let mut copied_until = copied_until.lock().unwrap_or_else(PoisonError::into_inner);
            // A later click moved the window further out
            if copied_until.is_some_and(|until| until <= deadline) {
                *copied_until = None;
            }
        });
    }
}
