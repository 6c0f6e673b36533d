/// Scroll offset, in CSS pixels, past which the navigation bar turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

pub const TRANSPARENT_CLASS: &str = "bg-transparent";
pub const SCROLLED_CLASS: &str = "bg-gray-900/90 backdrop-blur-md shadow-md";

/// Two independent axes: page scroll styling and the mobile menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Recomputed on every scroll event, so it is reversible both ways.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = is_scrolled(scroll_y);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any link inside the mobile menu closes it.
    pub fn link_activated(&mut self) {
        self.menu_open = false;
    }

    pub fn bar_class(&self) -> String {
        format!(
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
            if self.scrolled {
                SCROLLED_CLASS
            } else {
                TRANSPARENT_CLASS
            }
        )
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(state: &NavState) -> Vec<String> {
        state
            .bar_class()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = NavState::default();
        assert!(!state.scrolled());
        assert!(!state.menu_open());
    }

    #[test]
    fn test_transparent_at_top() {
        let mut state = NavState::default();
        state.on_scroll(0.0);
        let c = classes(&state);
        assert!(c.contains(&"bg-transparent".to_string()));
        assert!(!c.contains(&"bg-gray-900/90".to_string()));

        state.on_scroll(10.0);
        assert!(!state.scrolled());
        assert!(classes(&state).contains(&"bg-transparent".to_string()));
    }

    #[test]
    fn test_scrolled_past_threshold() {
        let mut state = NavState::default();
        state.on_scroll(50.0);
        let c = classes(&state);
        assert!(c.contains(&"bg-gray-900/90".to_string()));
        assert!(c.contains(&"backdrop-blur-md".to_string()));
        assert!(!c.contains(&"bg-transparent".to_string()));
    }

    #[test]
    fn test_scroll_is_reversible() {
        let mut state = NavState::default();
        state.on_scroll(50.0);
        assert!(state.scrolled());
        state.on_scroll(3.0);
        assert!(!state.scrolled());
        state.on_scroll(10.5);
        assert!(state.scrolled());
    }

    #[test]
    fn test_menu_toggle() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open());
        state.toggle_menu();
        assert!(!state.menu_open());
    }

    #[test]
    fn test_link_closes_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.on_scroll(100.0);
        state.link_activated();
        assert!(!state.menu_open());
        assert!(state.scrolled());

        // closing an already closed menu is harmless
        state.link_activated();
        assert!(!state.menu_open());
    }
}
