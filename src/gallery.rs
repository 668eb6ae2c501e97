//! Gallery of people who failed before they succeeded

use crate::people::{PEOPLE, Person, filter_people};
use crate::port::{CardView, RenderPort};

/// Renders the static person list, optionally filtered
pub struct Gallery {
    people: &'static [Person],
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(&PEOPLE)
    }
}

impl Gallery {
    pub fn new(people: &'static [Person]) -> Self {
        Self { people }
    }

    /// Cards matching `filter`, in list order
    pub fn cards(&self, filter: &str) -> Vec<CardView> {
        filter_people(self.people, filter)
            .into_iter()
            .map(CardView::from)
            .collect()
    }

    /// Replace the displayed cards with those matching `filter`.
    ///
    /// No placeholder is shown when nothing matches.
    pub fn render(&self, port: &mut impl RenderPort, filter: &str) {
        let cards = self.cards(filter);
        log::debug!("Gallery filter {:?}: {} cards", filter, cards.len());
        port.set_cards(&cards);
    }
}
