//! Single modal surface state machine.
//!
//! `Closed ⇄ Open(content)`. Opening while open swaps the content without
//! passing through `Closed`.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState<C> {
    #[default]
    Closed,
    Open(C),
}

impl<C> ModalState<C> {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub fn content(&self) -> Option<&C> {
        match self {
            Self::Open(content) => Some(content),
            Self::Closed => None,
        }
    }

    pub fn open(&mut self, content: C) {
        *self = Self::Open(content);
    }

    /// Close; returns whether anything changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }

    /// Escape closes an open modal and is ignored otherwise.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            return self.close();
        }
        false
    }

    /// Clicks close only when they land on the overlay itself, not content.
    pub fn handle_click(&mut self, on_overlay: bool) -> bool {
        if on_overlay {
            return self.close();
        }
        false
    }
}
