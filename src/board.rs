//! Post board: submit, list and clear local posts

use crate::consts::CLEAR_CONFIRM_PROMPT;
use crate::error::Result;
use crate::platform::KeyValueStore;
use crate::port::RenderPort;
use crate::posts::{Post, PostStore, feed_view};

/// The post board, owning its [`PostStore`]
pub struct PostBoard<S> {
    store: PostStore<S>,
}

impl<S: KeyValueStore> PostBoard<S> {
    pub fn new(store: PostStore<S>) -> Self {
        Self { store }
    }

    /// Submit a post from the form.
    ///
    /// Both fields are trimmed; if either ends up empty nothing happens and
    /// `Ok(false)` is returned. Otherwise the post is stored, the form is
    /// reset and the feed redrawn.
    pub fn submit(
        &mut self,
        port: &mut impl RenderPort,
        title: &str,
        text: &str,
        now_ms: i64,
    ) -> Result<bool> {
        let title = title.trim();
        let text = text.trim();
        if title.is_empty() || text.is_empty() {
            return Ok(false);
        }

        self.store.append(Post {
            title: title.to_string(),
            text: text.to_string(),
            ts: now_ms,
        })?;
        port.reset_post_form();
        self.render(port);
        Ok(true)
    }

    /// Redraw the feed, newest first
    pub fn render(&self, port: &mut impl RenderPort) {
        port.set_feed(&feed_view(&self.store));
    }

    /// Clear every post after the user confirms.
    ///
    /// Returns `Ok(false)` if the user declined.
    pub fn clear_all(&mut self, port: &mut impl RenderPort) -> Result<bool> {
        if !port.confirm(CLEAR_CONFIRM_PROMPT) {
            return Ok(false);
        }
        self.store.clear()?;
        self.render(port);
        Ok(true)
    }

    pub fn store(&self) -> &PostStore<S> {
        &self.store
    }
}
