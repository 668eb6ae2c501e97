//! Navigation buttons and call-to-action links

use crate::port::RenderPort;
use crate::settings::ScrollBehavior;

/// Buttons that jump to a section by changing the URL fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallToAction {
    Posts,
    Gallery,
    GetStarted,
}

impl CallToAction {
    pub const ALL: [CallToAction; 3] = [
        CallToAction::Posts,
        CallToAction::Gallery,
        CallToAction::GetStarted,
    ];

    /// Id of the button element
    pub fn element_id(&self) -> &'static str {
        match self {
            CallToAction::Posts => "ctaPosts",
            CallToAction::Gallery => "ctaGallery",
            CallToAction::GetStarted => "getStarted",
        }
    }

    /// Fragment the button navigates to
    pub fn fragment(&self) -> &'static str {
        match self {
            CallToAction::Posts | CallToAction::GetStarted => "#posts",
            CallToAction::Gallery => "#gallery",
        }
    }
}

/// Scroll to `target_id`. Missing or empty targets are ignored.
pub fn scroll_to_target(
    port: &mut impl RenderPort,
    target_id: &str,
    behavior: ScrollBehavior,
) -> bool {
    if target_id.is_empty() {
        return false;
    }
    let found = port.scroll_to(target_id, behavior);
    if !found {
        log::debug!("Nav target #{} not found", target_id);
    }
    found
}

pub fn follow_call_to_action(port: &mut impl RenderPort, cta: CallToAction) {
    port.set_location_hash(cta.fragment());
}
