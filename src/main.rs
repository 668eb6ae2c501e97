//! Failing Forward entry point
//!
//! Binds the page's controls to the site logic on wasm32. The native build
//! prints the gallery so the data can be checked from a terminal.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlInputElement, HtmlTextAreaElement};

    use failing_forward::consts::{NAV_BUTTON_SELECTOR, ids};
    use failing_forward::nav::{self, CallToAction};
    use failing_forward::platform::{DomPort, KeyValueStore, LocalStore, MemoryStore};
    use failing_forward::{Gallery, GameLoader, PostBoard, PostStore, SiteSettings};

    /// Everything the event handlers share
    struct Site {
        gallery: Gallery,
        board: PostBoard<Box<dyn KeyValueStore>>,
        loader: GameLoader,
        settings: SiteSettings,
        port: DomPort,
    }

    /// Current value of an `<input>` or `<textarea>`
    fn field_value(document: &Document, id: &str) -> String {
        let Some(el) = document.get_element_by_id(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    /// Attach a click handler to the element with `id`, if present
    fn on_click(document: &Document, id: &str, mut handler: impl FnMut() + 'static) {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("No #{} element, handler not attached", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| handler());
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn open_store() -> Box<dyn KeyValueStore> {
        match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{}; posts will not survive a reload", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let settings = SiteSettings::load();
        console_log::init_with_level(settings.log_level()).expect("Failed to init logger");

        log::info!("Failing Forward starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let port = match DomPort::new(window, document.clone()) {
            Ok(port) => port,
            Err(e) => {
                log::error!("Page layout incomplete: {}", e);
                return;
            }
        };

        let store = PostStore::load(open_store(), settings.posts_key.clone());
        let site = Rc::new(RefCell::new(Site {
            gallery: Gallery::default(),
            board: PostBoard::new(store),
            loader: GameLoader::new(),
            settings,
            port,
        }));

        {
            let mut s = site.borrow_mut();
            let Site {
                gallery,
                board,
                port,
                ..
            } = &mut *s;
            gallery.render(port, "");
            board.render(port);
        }

        setup_search(&document, site.clone());
        setup_posts(&document, site.clone());
        setup_game_loader(&document, site.clone());
        setup_nav(&document, site);

        log::info!("Failing Forward ready");
    }

    fn setup_search(document: &Document, site: Rc<RefCell<Site>>) {
        let Some(search) = document.get_element_by_id(ids::SEARCH) else {
            log::warn!("No search box");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let filter = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();
            let mut s = site.borrow_mut();
            let Site { gallery, port, .. } = &mut *s;
            gallery.render(port, &filter);
        });
        let _ = search.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_posts(document: &Document, site: Rc<RefCell<Site>>) {
        // Form submit
        if let Some(form) = document.get_element_by_id(ids::POST_FORM) {
            let site = site.clone();
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                let title = field_value(&document, ids::POST_TITLE);
                let text = field_value(&document, ids::POST_TEXT);
                let now = js_sys::Date::now() as i64;

                let mut s = site.borrow_mut();
                let Site { board, port, .. } = &mut *s;
                if let Err(e) = board.submit(port, &title, &text, now) {
                    log::warn!("Post not saved: {}", e);
                }
            });
            let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Clear button
        on_click(document, ids::CLEAR_POSTS, move || {
            let mut s = site.borrow_mut();
            let Site { board, port, .. } = &mut *s;
            if let Err(e) = board.clear_all(port) {
                log::warn!("Posts not cleared: {}", e);
            }
        });
    }

    fn setup_game_loader(document: &Document, site: Rc<RefCell<Site>>) {
        // Load into frame
        {
            let site = site.clone();
            let doc = document.clone();
            on_click(document, ids::LOAD_GAME, move || {
                let raw = field_value(&doc, ids::GAME_URL);
                let mut s = site.borrow_mut();
                let Site { loader, port, .. } = &mut *s;
                // Rejections are already shown to the user
                let _ = loader.load_embedded(port, &raw);
            });
        }

        // Open in new tab
        let doc = document.clone();
        on_click(document, ids::OPEN_GAME, move || {
            let raw = field_value(&doc, ids::GAME_URL);
            let mut s = site.borrow_mut();
            let Site { loader, port, .. } = &mut *s;
            let _ = loader.open_external(port, &raw);
        });
    }

    fn setup_nav(document: &Document, site: Rc<RefCell<Site>>) {
        // Section buttons
        if let Ok(buttons) = document.query_selector_all(NAV_BUTTON_SELECTOR) {
            for i in 0..buttons.length() {
                let Some(button) = buttons
                    .item(i)
                    .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
                else {
                    continue;
                };
                let target = button.get_attribute("data-target").unwrap_or_default();
                let site = site.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    let mut s = site.borrow_mut();
                    let behavior = s.settings.scroll_behavior;
                    nav::scroll_to_target(&mut s.port, &target, behavior);
                });
                let _ = button
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Calls to action
        for cta in CallToAction::ALL {
            let site = site.clone();
            on_click(document, cta.element_id(), move || {
                nav::follow_call_to_action(&mut site.borrow_mut().port, cta);
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_site::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use failing_forward::Gallery;

    env_logger::init();
    log::info!("Failing Forward (native) starting...");
    log::info!("The site runs in the browser - use `trunk serve` for the web version");

    let filter = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let cards = Gallery::default().cards(&filter);
    println!("{} of {} people match {:?}\n", cards.len(), failing_forward::PEOPLE.len(), filter);
    for card in cards {
        println!("{}\n  {}\n  {}\n", card.title, card.description, card.link);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
