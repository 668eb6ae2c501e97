//! Rendering surface abstraction
//!
//! Core logic talks to the page only through [`RenderPort`], so gallery
//! filtering, post storage and URL validation run without a browser.

use crate::people::Person;
use crate::posts::PostView;
use crate::settings::ScrollBehavior;

/// One gallery card, ready to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub image_src: &'static str,
    pub image_alt: &'static str,
    /// Shown as literal text
    pub title: &'static str,
    /// Shown as literal text
    pub description: &'static str,
    pub link: &'static str,
}

impl From<&Person> for CardView {
    fn from(p: &Person) -> Self {
        Self {
            image_src: p.image,
            image_alt: p.name,
            title: p.name,
            description: p.description,
            link: p.source,
        }
    }
}

/// Contents of the post feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    /// No posts: a single placeholder message
    Empty { message: &'static str },
    /// Posts, newest first
    Posts(Vec<PostView>),
}

/// Everything the site needs from its display surface.
///
/// Implemented by the DOM on wasm32 and by a recording double in tests.
pub trait RenderPort {
    // === Content ===
    /// Replace the gallery with `cards`, in order
    fn set_cards(&mut self, cards: &[CardView]);
    /// Replace the post feed
    fn set_feed(&mut self, feed: &FeedView);
    /// Clear the post form inputs
    fn reset_post_form(&mut self);

    // === Game frame ===
    fn set_frame_source(&mut self, url: &str);
    fn focus_frame(&mut self);
    /// Open `url` in a new top-level context with no opener reference
    fn open_window(&mut self, url: &str);

    // === Dialogs ===
    fn alert(&mut self, message: &str);
    /// Ask the user to confirm; `false` if declined or unavailable
    fn confirm(&mut self, message: &str) -> bool;

    // === Navigation ===
    /// Scroll to the element with `target_id`; `false` if it does not exist
    fn scroll_to(&mut self, target_id: &str, behavior: ScrollBehavior) -> bool;
    fn set_location_hash(&mut self, hash: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Port that records every call for assertions
    #[derive(Debug, Default)]
    pub struct RecordingPort {
        pub cards: Vec<CardView>,
        pub card_renders: usize,
        pub feed: Option<FeedView>,
        pub form_resets: usize,
        pub frame_src: Option<String>,
        pub frame_focused: bool,
        pub opened: Vec<String>,
        pub alerts: Vec<String>,
        pub confirms: Vec<String>,
        /// Answer returned from `confirm`
        pub confirm_answer: bool,
        /// Element ids that exist on the fake page
        pub targets: Vec<String>,
        pub scrolled: Vec<(String, ScrollBehavior)>,
        pub hash: Option<String>,
    }

    impl RecordingPort {
        pub fn confirming(answer: bool) -> Self {
            Self {
                confirm_answer: answer,
                ..Self::default()
            }
        }

        pub fn with_targets(ids: &[&str]) -> Self {
            Self {
                targets: ids.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl RenderPort for RecordingPort {
        fn set_cards(&mut self, cards: &[CardView]) {
            self.cards = cards.to_vec();
            self.card_renders += 1;
        }

        fn set_feed(&mut self, feed: &FeedView) {
            self.feed = Some(feed.clone());
        }

        fn reset_post_form(&mut self) {
            self.form_resets += 1;
        }

        fn set_frame_source(&mut self, url: &str) {
            self.frame_src = Some(url.to_string());
        }

        fn focus_frame(&mut self) {
            self.frame_focused = true;
        }

        fn open_window(&mut self, url: &str) {
            self.opened.push(url.to_string());
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn confirm(&mut self, message: &str) -> bool {
            self.confirms.push(message.to_string());
            self.confirm_answer
        }

        fn scroll_to(&mut self, target_id: &str, behavior: ScrollBehavior) -> bool {
            if !self.targets.iter().any(|t| t == target_id) {
                return false;
            }
            self.scrolled.push((target_id.to_string(), behavior));
            true
        }

        fn set_location_hash(&mut self, hash: &str) {
            self.hash = Some(hash.to_string());
        }
    }
}
