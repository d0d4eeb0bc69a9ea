//! Share action. There is no share sheet on the desktop, so the project's
//! homepage is copied to the clipboard instead.

use std::time::{Duration, Instant};

use super::App;

/// Link copied by the share action.
pub const SHARE_URL: &str = env!("CARGO_PKG_REPOSITORY");

/// How long the "Link Copied!" confirmation stays up.
const SHARE_FLASH: Duration = Duration::from_secs(2);

impl App {
    /// Copies [`SHARE_URL`] to the clipboard. The confirmation is shown
    /// whether or not the copy succeeded.
    pub fn share(&mut self) {
        self.share_flash = Some(Instant::now());
        match self.clipboard.as_mut() {
            Some(clipboard) => {
                if let Err(e) = clipboard.set_text(SHARE_URL) {
                    tracing::warn!("Failed to copy share link: {e}");
                }
            }
            None => tracing::warn!("Clipboard unavailable, cannot copy share link"),
        }
    }

    /// True while the "Link Copied!" confirmation is showing.
    pub fn share_link_copied(&self) -> bool {
        self.share_flash_remaining().is_some()
    }

    pub(crate) fn share_flash_remaining(&self) -> Option<Duration> {
        let started = self.share_flash?;
        SHARE_FLASH
            .checked_sub(started.elapsed())
            .filter(|d| !d.is_zero())
    }
}
