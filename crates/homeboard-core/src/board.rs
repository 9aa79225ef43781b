//! Render targets for the widgets.
//!
//! A `Board` is the surface feed renderers write into: a set of elements
//! identified by stable ids. Writing to an id that was never registered is a
//! no-op, so a renderer never fails because its widget is not on screen.
//! Clones share the same elements, which lets feed tasks render while the
//! front end reads.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::trace;

pub const WEATHER: &str = "weather";
pub const NEWS: &str = "news";
pub const CURRENCY: &str = "currency";
pub const TIME: &str = "time";
pub const CALENDAR: &str = "calendar";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    Loading,
    Lines(Vec<String>),
    Error(String),
}

impl Content {
    pub fn is_loading(&self) -> bool {
        matches!(self, Content::Loading)
    }
}

#[derive(Clone, Default)]
pub struct Board {
    elements: Arc<RwLock<HashMap<String, Content>>>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element in its loading state. Re-registering keeps existing content.
    pub fn register(&self, id: &str) {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        elements.entry(id.to_string()).or_default();
    }

    pub fn contains(&self, id: &str) -> bool {
        let elements = self.elements.read().unwrap_or_else(|e| e.into_inner());
        elements.contains_key(id)
    }

    pub fn content(&self, id: &str) -> Option<Content> {
        let elements = self.elements.read().unwrap_or_else(|e| e.into_inner());
        elements.get(id).cloned()
    }

    pub fn set_lines(&self, id: &str, lines: Vec<String>) {
        self.write(id, Content::Lines(lines));
    }

    pub fn set_text(&self, id: &str, text: impl Into<String>) {
        self.write(id, Content::Lines(vec![text.into()]));
    }

    /// Replace the element's content with an inline error.
    pub fn show_error(&self, id: &str, message: impl Into<String>) {
        self.write(id, Content::Error(message.into()));
    }

    fn write(&self, id: &str, content: Content) {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        match elements.get_mut(id) {
            Some(slot) => *slot = content,
            None => trace!(id = %id, "Render target not on board, skipping"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_board() -> Board {
        let board = Board::new();
        for id in [WEATHER, NEWS, CURRENCY] {
            board.register(id);
        }
        board
    }

    #[test]
    fn test_registered_elements_start_loading() {
        let board = feed_board();
        assert_eq!(board.content(WEATHER), Some(Content::Loading));
        assert!(board.content(WEATHER).unwrap().is_loading());
        assert!(board.contains(NEWS));
    }

    #[test]
    fn test_writes_to_missing_elements_are_noops() {
        let board = Board::new();
        board.set_text("nowhere", "hello");
        board.show_error("nowhere", "boom");
        assert_eq!(board.content("nowhere"), None);
        assert!(!board.contains("nowhere"));
    }

    #[test]
    fn test_set_and_error() {
        let board = feed_board();
        board.set_text(CURRENCY, "109.72");
        assert_eq!(
            board.content(CURRENCY),
            Some(Content::Lines(vec!["109.72".to_string()]))
        );

        board.show_error(CURRENCY, "Unable to fetch currency rate.");
        assert_eq!(
            board.content(CURRENCY),
            Some(Content::Error("Unable to fetch currency rate.".to_string()))
        );
    }

    #[test]
    fn test_clones_share_elements() {
        let board = Board::new();
        board.register(TIME);
        let clone = board.clone();
        clone.set_text(TIME, "10:00:00");
        assert_eq!(
            board.content(TIME),
            Some(Content::Lines(vec!["10:00:00".to_string()]))
        );

        // Re-registering does not reset content
        board.register(TIME);
        assert!(!board.content(TIME).unwrap().is_loading());
    }
}
