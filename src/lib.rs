//! Failing Forward - a small static personal site
//!
//! Core modules:
//! - `gallery`: Filterable gallery of biographical cards
//! - `board`: Post board backed by browser-local storage
//! - `game`: Embedded game loader with URL validation
//! - `nav`: Navigation buttons and call-to-action targets
//! - `port`: Rendering surface abstraction
//! - `platform`: Browser/native platform layer (storage, DOM)

pub mod board;
pub mod error;
pub mod gallery;
pub mod game;
pub mod nav;
pub mod people;
pub mod platform;
pub mod port;
pub mod posts;
pub mod settings;

pub use board::PostBoard;
pub use error::{Error, Result};
pub use gallery::Gallery;
pub use game::GameLoader;
pub use people::{PEOPLE, Person};
pub use port::{CardView, FeedView, RenderPort};
pub use posts::{Post, PostStore};
pub use settings::{ScrollBehavior, SiteSettings};

/// Site-wide constants
pub mod consts {
    /// LocalStorage key holding the serialized post array
    pub const POSTS_STORAGE_KEY: &str = "failingPosts";

    /// Placeholder shown when the post board is empty
    pub const EMPTY_FEED_MESSAGE: &str = "No posts yet. Share something that helped you learn.";
    /// Confirmation prompt before wiping every post
    pub const CLEAR_CONFIRM_PROMPT: &str = "Clear all local posts?";
    /// Alert shown when the game URL does not parse
    pub const INVALID_GAME_URL_ALERT: &str =
        "Paste a valid GitHub Pages URL (https://atharvodin.github.io/Fail-Game/).";

    /// Element ids the page must provide
    pub mod ids {
        pub const CARDS: &str = "cards";
        pub const CARD_TEMPLATE: &str = "cardTemplate";
        pub const SEARCH: &str = "search";

        pub const POST_FORM: &str = "postForm";
        pub const POST_TITLE: &str = "postTitle";
        pub const POST_TEXT: &str = "postText";
        pub const FEED: &str = "feed";
        pub const CLEAR_POSTS: &str = "clearPosts";

        pub const GAME_URL: &str = "gameUrl";
        pub const LOAD_GAME: &str = "loadGame";
        pub const OPEN_GAME: &str = "openGame";
        pub const GAME_FRAME: &str = "gameFrame";

        pub const SETTINGS: &str = "site-settings";
    }

    /// Selector for navigation buttons (each carries `data-target`)
    pub const NAV_BUTTON_SELECTOR: &str = ".tb-item";
}

/// Escape text for insertion into markup.
///
/// Covers the five characters that can open a tag, close an attribute or
/// start an entity.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_markup() {
        assert_eq!(escape_html("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(
            escape_html(r#"Tom & "Jerry's""#),
            "Tom &amp; &quot;Jerry&#39;s&quot;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_untouched() {
        assert_eq!(escape_html("plain text, 100%"), "plain text, 100%");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_does_not_double_decode() {
        // An already-escaped entity must stay literal
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }
}
