//! User posts persisted to LocalStorage
//!
//! The whole sequence is stored as one JSON array under a single key:
//! `[{"title": "...", "text": "...", "ts": 1700000000000}, ...]`.
//! After every mutation the stored value is exactly the serialized in-memory
//! sequence, or absent when the sequence was cleared.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::escape_html;
use crate::platform::KeyValueStore;
use crate::port::FeedView;

/// A single user post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub text: String,
    /// Unix timestamp (ms) when posted
    pub ts: i64,
}

/// Owns the post sequence and keeps it mirrored in a [`KeyValueStore`]
#[derive(Debug)]
pub struct PostStore<S> {
    posts: Vec<Post>,
    store: S,
    key: String,
}

impl<S: KeyValueStore> PostStore<S> {
    /// Load posts stored under `key`.
    ///
    /// A missing entry, unreadable storage or data that does not match the
    /// post schema all start an empty board. Malformed data is left in place
    /// until the next write replaces it.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let posts = match store.get_item(&key) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Post>>(&json) {
                Ok(posts) => {
                    log::info!("Loaded {} posts", posts.len());
                    posts
                }
                Err(e) => {
                    log::warn!("Ignoring malformed posts under '{}': {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => {
                log::info!("No posts found, starting fresh");
                Vec::new()
            }
            Err(e) => {
                log::warn!("Could not read posts: {}", e);
                Vec::new()
            }
        };
        Self { posts, store, key }
    }

    /// Append a post and persist the full sequence.
    ///
    /// On a failed write the post is dropped again so memory and storage
    /// stay identical.
    pub fn append(&mut self, post: Post) -> Result<()> {
        self.posts.push(post);
        if let Err(e) = self.persist() {
            self.posts.pop();
            return Err(e);
        }
        log::info!("Posts saved ({} entries)", self.posts.len());
        Ok(())
    }

    /// Drop every post and remove the stored entry
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove_item(&self.key)?;
        self.posts.clear();
        log::info!("Posts cleared");
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.posts)?;
        self.store.set_item(&self.key, &json)
    }

    /// Posts in the order they were appended
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Posts most recent first
    pub fn newest_first(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// A post prepared for display; title and text are already escaped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub title_html: String,
    pub when: String,
    pub text_html: String,
}

impl PostView {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title_html: escape_html(&post.title),
            when: format_timestamp(post.ts),
            text_html: escape_html(&post.text),
        }
    }

    /// Inner markup for one `div.post`
    pub fn to_html(&self) -> String {
        format!(
            "<strong>{}</strong><small> • {}</small><p>{}</p>",
            self.title_html,
            escape_html(&self.when),
            self.text_html
        )
    }
}

/// Build the feed for `store`: placeholder when empty, else newest first
pub fn feed_view<S: KeyValueStore>(store: &PostStore<S>) -> FeedView {
    if store.is_empty() {
        return FeedView::Empty {
            message: crate::consts::EMPTY_FEED_MESSAGE,
        };
    }
    FeedView::Posts(store.newest_first().map(PostView::from_post).collect())
}

/// Format a timestamp in the browser's locale
#[cfg(target_arch = "wasm32")]
pub fn format_timestamp(ts: i64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ts as f64));
    String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

/// Format a timestamp as `M/D/YYYY, h:mm:ss AM` (UTC)
#[cfg(not(target_arch = "wasm32"))]
pub fn format_timestamp(ts: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(ts) {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => "Invalid Date".to_string(),
    }
}
