//! Copy-link action.
//!
//! Writing a resource URL to the clipboard either succeeds or fails; both
//! outcomes become transient feedback text on the button. Failures are
//! logged and never propagated.

use std::time::Duration;

use clipboard_rs::{Clipboard, ClipboardContext};
use tracing::{debug, warn};

use crate::config::UiConfig;
use crate::error::{Error, Result};

/// Button text after a successful copy.
pub const COPIED: &str = "Copied!";

/// Button text after a failed copy.
pub const COPY_FAILED: &str = "Copy failed";

/// Something that can receive text, usually the system clipboard.
pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] when the write is rejected or no
    /// clipboard is available.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard, via `clipboard-rs`.
///
/// The context that performed the last successful write is kept alive. On
/// X11 and Wayland the writing process serves the selection itself, so the
/// copied text disappears once that context is dropped; see
/// [`SystemClipboard::hold`].
#[derive(Default)]
pub struct SystemClipboard {
    owner: Option<(ClipboardContext, String)>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("written", &self.owner.as_ref().map(|(_, text)| text))
            .finish()
    }
}

impl SystemClipboard {
    /// Whether copied text only lives as long as the writing process.
    #[must_use]
    pub fn selection_is_process_bound() -> bool {
        cfg!(all(unix, not(target_os = "macos")))
    }

    /// Keep serving the last write until another client replaces it or
    /// `ui.clipboard_hold` elapses.
    ///
    /// Returns immediately when nothing was written or the platform clipboard
    /// outlives the process.
    pub fn hold(&mut self, ui: &UiConfig) -> HoldOutcome {
        let Some((ctx, written)) = self.owner.take() else {
            return HoldOutcome::NotNeeded;
        };
        if !Self::selection_is_process_bound() {
            return HoldOutcome::NotNeeded;
        }
        debug!(limit = ?ui.clipboard_hold(), "Holding clipboard selection");
        let outcome = wait_for_replacement(
            || ctx.get_text().ok(),
            &written,
            ui.clipboard_poll(),
            ui.clipboard_hold(),
            std::thread::sleep,
        );
        debug!(?outcome, "Released clipboard selection");
        outcome
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let ctx = ClipboardContext::new().map_err(|e| Error::clipboard(e.to_string()))?;
        ctx.set_text(text.to_string())
            .map_err(|e| Error::clipboard(e.to_string()))?;
        self.owner = Some((ctx, text.to_string()));
        Ok(())
    }
}

/// How a held selection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldOutcome {
    /// Nothing to hold on this platform, or nothing was copied.
    NotNeeded,
    /// Another client took over the clipboard.
    Replaced,
    /// The hold limit passed; the text is gone once the process exits.
    TimedOut,
}

/// Poll `read` until it reports something other than `written`, or until
/// `limit` has been slept away. An unreadable clipboard counts as replaced.
fn wait_for_replacement(
    mut read: impl FnMut() -> Option<String>,
    written: &str,
    poll: Duration,
    limit: Duration,
    mut sleep: impl FnMut(Duration),
) -> HoldOutcome {
    let mut waited = Duration::ZERO;
    while waited < limit {
        let step = poll.min(limit - waited);
        sleep(step);
        waited += step;
        match read() {
            Some(current) if current == written => {}
            _ => return HoldOutcome::Replaced,
        }
    }
    HoldOutcome::TimedOut
}

/// Outcome of a copy, with how long to show it before restoring the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFeedback {
    /// The URL is on the clipboard.
    Copied {
        /// How long the feedback stays up.
        revert_after: Duration,
    },
    /// The clipboard refused the write.
    Failed {
        /// How long the feedback stays up.
        revert_after: Duration,
    },
}

impl CopyFeedback {
    /// Text to show on the button.
    #[must_use]
    pub fn text(&self) -> &'static str {
        match self {
            Self::Copied { .. } => COPIED,
            Self::Failed { .. } => COPY_FAILED,
        }
    }

    /// How long before the button text is restored.
    #[must_use]
    pub fn revert_after(&self) -> Duration {
        match self {
            Self::Copied { revert_after } | Self::Failed { revert_after } => *revert_after,
        }
    }

    /// Whether the copy succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }
}

/// Copy `url` to `clipboard` and report the feedback to show.
///
/// No retry, no timeout: a rejected write is final.
pub fn copy_link(clipboard: &mut dyn ClipboardWriter, url: &str, ui: &UiConfig) -> CopyFeedback {
    match clipboard.write_text(url) {
        Ok(()) => {
            debug!(url, "Copied link");
            CopyFeedback::Copied {
                revert_after: ui.copy_feedback(),
            }
        }
        Err(e) => {
            warn!(url, error = %e, "Failed to copy link");
            CopyFeedback::Failed {
                revert_after: ui.copy_failure_feedback(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct MemoryClipboard {
        contents: Option<String>,
    }

    impl ClipboardWriter for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct DeniedClipboard;

    impl ClipboardWriter for DeniedClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(Error::clipboard("permission denied"))
        }
    }

    #[test]
    fn test_copy_success() {
        crate::logging::init_test_logging();
        let mut clipboard = MemoryClipboard::default();
        let feedback = copy_link(&mut clipboard, "https://example.com", &UiConfig::default());
        assert!(feedback.is_success());
        assert_eq!(feedback.text(), "Copied!");
        assert_eq!(feedback.revert_after(), Duration::from_millis(1100));
        assert_eq!(clipboard.contents.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_copy_failure_is_contained() {
        crate::logging::init_test_logging();
        let feedback = copy_link(&mut DeniedClipboard, "https://example.com", &UiConfig::default());
        assert!(!feedback.is_success());
        assert_eq!(feedback.text(), "Copy failed");
        assert_eq!(feedback.revert_after(), Duration::from_millis(1200));
    }

    fn no_sleep(_: Duration) {}

    #[test]
    fn test_hold_ends_when_replaced() {
        let mut reads = vec![None, Some("other".to_string()), Some("url".to_string())];
        let outcome = wait_for_replacement(
            || reads.pop().flatten(),
            "url",
            Duration::from_millis(100),
            Duration::from_secs(5),
            no_sleep,
        );
        assert_eq!(outcome, HoldOutcome::Replaced);
        assert_eq!(reads.len(), 1);
    }

    #[test]
    fn test_hold_times_out_while_still_owned() {
        let mut slept = Duration::ZERO;
        let outcome = wait_for_replacement(
            || Some("url".to_string()),
            "url",
            Duration::from_millis(400),
            Duration::from_millis(1000),
            |d| slept += d,
        );
        assert_eq!(outcome, HoldOutcome::TimedOut);
        assert_eq!(slept, Duration::from_millis(1000));
    }

    #[test]
    fn test_hold_with_zero_limit_returns_at_once() {
        let outcome = wait_for_replacement(
            || panic!("clipboard should not be read"),
            "url",
            Duration::from_millis(500),
            Duration::ZERO,
            no_sleep,
        );
        assert_eq!(outcome, HoldOutcome::TimedOut);
    }

    #[test]
    fn test_hold_without_write_is_not_needed() {
        let mut clipboard = SystemClipboard::default();
        assert_eq!(clipboard.hold(&UiConfig::default()), HoldOutcome::NotNeeded);
    }

    #[test]
    fn test_feedback_durations_follow_config() {
        let ui = UiConfig {
            copy_feedback_ms: 50,
            copy_failure_feedback_ms: 75,
            ..UiConfig::default()
        };
        let ok = copy_link(&mut MemoryClipboard::default(), "u", &ui);
        let failed = copy_link(&mut DeniedClipboard, "u", &ui);
        assert_eq!(ok.revert_after(), Duration::from_millis(50));
        assert_eq!(failed.revert_after(), Duration::from_millis(75));
    }
}
