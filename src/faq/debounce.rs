//! Trailing-edge debounce for the live search query.
//!
//! Keystrokes update a draft immediately; only a quiet period of at least
//! one window commits the draft as the active query that drives filtering.
//! At most one commit is pending at a time, and replacing the draft
//! supersedes the previous pending commit entirely.

use std::time::{Duration, Instant};

/// Default quiet period before a draft commits.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Debouncer configuration.
#[derive(Debug, Clone)]
pub struct DebounceConfig {
    /// Quiet period in milliseconds.
    pub window_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            window_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl DebounceConfig {
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

/// Poll-style query debouncer.
///
/// The caller's event loop feeds keystrokes through [`set_draft`] and calls
/// [`poll_commit`] each tick; the draft commits once the window has elapsed
/// with no further keystrokes.
///
/// [`set_draft`]: QueryDebouncer::set_draft
/// [`poll_commit`]: QueryDebouncer::poll_commit
pub struct QueryDebouncer {
    config: DebounceConfig,
    draft: String,
    committed: String,
    /// Time of the last keystroke; Some while a commit is pending.
    last_keystroke: Option<Instant>,
}

impl QueryDebouncer {
    pub fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            draft: String::new(),
            committed: String::new(),
            last_keystroke: None,
        }
    }

    /// Replace the draft and restart the window. Any previously pending
    /// commit is superseded.
    pub fn set_draft(&mut self, draft: &str) {
        if draft != self.draft {
            self.draft.clear();
            self.draft.push_str(draft);
        }
        self.last_keystroke = Some(Instant::now());
    }

    /// The draft as typed so far (may not be committed yet).
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The query that last committed; this is what drives filtering.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Whether a commit is pending (keystrokes seen, window not yet elapsed
    /// or not yet polled).
    pub fn has_pending(&self) -> bool {
        self.last_keystroke.is_some()
    }

    /// Check if the quiet period has elapsed since the last keystroke.
    pub fn is_ready(&self) -> bool {
        match self.last_keystroke {
            Some(last) => last.elapsed() >= self.config.window(),
            None => false,
        }
    }

    /// Time until the pending commit is ready (None if nothing is pending).
    pub fn time_until_ready(&self) -> Option<Duration> {
        self.last_keystroke.map(|last| {
            let elapsed = last.elapsed();
            let window = self.config.window();
            if elapsed >= window {
                Duration::ZERO
            } else {
                window - elapsed
            }
        })
    }

    /// Commit the draft if the window has elapsed.
    ///
    /// Returns the newly committed query, or None if nothing was ready.
    pub fn poll_commit(&mut self) -> Option<&str> {
        if !self.is_ready() {
            return None;
        }
        self.last_keystroke = None;
        self.committed.clear();
        self.committed.push_str(&self.draft);
        tracing::debug!(query = %self.committed, "query committed");
        Some(&self.committed)
    }

    /// Commit the draft immediately, bypassing the window (Enter key).
    pub fn flush(&mut self) -> &str {
        self.last_keystroke = None;
        self.committed.clear();
        self.committed.push_str(&self.draft);
        &self.committed
    }

    /// Discard the pending draft, restoring it to the committed query.
    pub fn cancel(&mut self) {
        self.last_keystroke = None;
        self.draft.clear();
        let committed = self.committed.clone();
        self.draft.push_str(&committed);
    }
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::new(DebounceConfig::default())
    }
}
