#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Open/closed state of the mobile navigation panel.
///
/// Owned by the navbar; flipped only by the menu button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
}

impl MenuState {
    /// Flip the panel and return the new open state.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    /// Accessible label for the menu button.
    pub fn button_label(&self) -> &'static str {
        if self.is_open { "Close menu" } else { "Open menu" }
    }
}
