//! DOM implementation of the rendering port (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{
    Document, DocumentFragment, Element, HtmlAnchorElement, HtmlFormElement, HtmlIFrameElement,
    HtmlImageElement, HtmlTemplateElement, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::consts::ids;
use crate::error::{Error, Result};
use crate::escape_html;
use crate::port::{CardView, FeedView, RenderPort};
use crate::settings::ScrollBehavior;

/// Look up a required element by id and cast it
pub fn element<T: JsCast>(document: &Document, id: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(Error::MissingElement { id })
}

/// The live page
pub struct DomPort {
    window: Window,
    document: Document,
    cards: Element,
    card_template: HtmlTemplateElement,
    feed: Element,
    post_form: HtmlFormElement,
    frame: HtmlIFrameElement,
}

impl DomPort {
    /// Bind to the page's elements; fails if any is missing
    pub fn new(window: Window, document: Document) -> Result<Self> {
        Ok(Self {
            cards: element(&document, ids::CARDS)?,
            card_template: element(&document, ids::CARD_TEMPLATE)?,
            feed: element(&document, ids::FEED)?,
            post_form: element(&document, ids::POST_FORM)?,
            frame: element(&document, ids::GAME_FRAME)?,
            window,
            document,
        })
    }

    /// Fill one copy of the card template
    fn build_card(&self, card: &CardView) -> Option<DocumentFragment> {
        let node = self
            .card_template
            .content()
            .clone_node_with_deep(true)
            .ok()?
            .dyn_into::<DocumentFragment>()
            .ok()?;

        if let Some(img) = slot::<HtmlImageElement>(&node, ".card-img") {
            img.set_src(card.image_src);
            img.set_alt(card.image_alt);
        }
        if let Some(title) = slot::<Element>(&node, ".card-title") {
            title.set_text_content(Some(card.title));
        }
        if let Some(desc) = slot::<Element>(&node, ".card-desc") {
            desc.set_text_content(Some(card.description));
        }
        if let Some(link) = slot::<HtmlAnchorElement>(&node, ".learn-more") {
            link.set_href(card.link);
        }
        Some(node)
    }

    fn append_post(&self, inner_html: &str) {
        match self.document.create_element("div") {
            Ok(el) => {
                el.set_class_name("post");
                el.set_inner_html(inner_html);
                let _ = self.feed.append_child(&el);
            }
            Err(e) => log::error!("Failed to create post element: {:?}", e),
        }
    }
}

fn slot<T: JsCast>(node: &DocumentFragment, selector: &str) -> Option<T> {
    node.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

impl RenderPort for DomPort {
    fn set_cards(&mut self, cards: &[CardView]) {
        self.cards.set_inner_html("");
        for card in cards {
            match self.build_card(card) {
                Some(node) => {
                    let _ = self.cards.append_child(&node);
                }
                None => log::warn!("Card template unusable, skipped {}", card.title),
            }
        }
    }

    fn set_feed(&mut self, feed: &FeedView) {
        self.feed.set_inner_html("");
        match feed {
            FeedView::Empty { message } => {
                self.append_post(&format!("<em>{}</em>", escape_html(message)));
            }
            FeedView::Posts(posts) => {
                for post in posts {
                    self.append_post(&post.to_html());
                }
            }
        }
    }

    fn reset_post_form(&mut self) {
        self.post_form.reset();
    }

    fn set_frame_source(&mut self, url: &str) {
        self.frame.set_src(url);
    }

    fn focus_frame(&mut self) {
        let _ = self.frame.focus();
    }

    fn open_window(&mut self, url: &str) {
        if let Err(e) = self
            .window
            .open_with_url_and_target_and_features(url, "_blank", "noopener")
        {
            log::warn!("window.open failed: {:?}", e);
        }
    }

    fn alert(&mut self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn scroll_to(&mut self, target_id: &str, behavior: ScrollBehavior) -> bool {
        let Some(target) = self.document.get_element_by_id(target_id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn set_location_hash(&mut self, hash: &str) {
        if let Err(e) = self.window.location().set_hash(hash) {
            log::warn!("Failed to set location hash: {:?}", e);
        }
    }
}
