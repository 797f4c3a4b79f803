//! Open/close state for animated overlays (menu, quote and video modals)
//!
//! An overlay stays mounted while it animates out, so a close is two steps:
//! `Closing` and then, once the transition timer fires, `Closed`. Every
//! transition bumps a generation counter and transition timers report back
//! with the generation they were started under. A timer from an interrupted
//! transition is therefore ignored, and rapid open/close/open toggling
//! always settles on the last request.

/// Duration of the opening transition (ms)
pub const OPEN_TRANSITION_MS: u32 = 400;

/// Duration of the closing transition (ms)
pub const CLOSE_TRANSITION_MS: u32 = 300;

/// Wait between closing the menu and scrolling to the chosen section (ms)
pub const MENU_SCROLL_DELAY_MS: u32 = 400;

/// Wait between closing the quote modal and moving on to contact (ms)
pub const MODAL_NAVIGATE_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl OverlayPhase {
    /// Backdrop class for the enter/leave animation
    pub fn transition_class(self) -> &'static str {
        match self {
            OverlayPhase::Opening | OverlayPhase::Open => "overlay-enter",
            OverlayPhase::Closing | OverlayPhase::Closed => "overlay-leave",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    phase: OverlayPhase,
    generation: u64,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Rendered at all (including while animating out)
    pub fn is_mounted(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    /// Showing, or animating in
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, OverlayPhase::Opening | OverlayPhase::Open)
    }

    /// Request the overlay to open. Returns the generation of the opening
    /// transition, or `None` if it is already opening or open.
    pub fn open(&mut self) -> Option<u64> {
        if self.is_shown() {
            return None;
        }
        self.generation += 1;
        self.phase = OverlayPhase::Opening;
        Some(self.generation)
    }

    /// Request the overlay to close. Returns the generation of the closing
    /// transition, or `None` if it is already closing or closed.
    pub fn close(&mut self) -> Option<u64> {
        if !self.is_shown() {
            return None;
        }
        self.generation += 1;
        self.phase = OverlayPhase::Closing;
        Some(self.generation)
    }

    /// Finish the transition started under `generation`.
    ///
    /// Returns `false` when a newer transition has superseded it.
    pub fn complete(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.phase {
            OverlayPhase::Opening => self.phase = OverlayPhase::Open,
            OverlayPhase::Closing => self.phase = OverlayPhase::Closed,
            OverlayPhase::Open | OverlayPhase::Closed => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_cycle() {
        let mut overlay = OverlayState::new();
        assert!(!overlay.is_mounted());

        let opening = overlay.open().unwrap();
        assert_eq!(overlay.phase(), OverlayPhase::Opening);
        assert!(overlay.complete(opening));
        assert_eq!(overlay.phase(), OverlayPhase::Open);

        let closing = overlay.close().unwrap();
        assert!(overlay.is_mounted());
        assert!(!overlay.is_shown());
        assert!(overlay.complete(closing));
        assert!(!overlay.is_mounted());
    }

    #[test]
    fn test_repeated_open_does_not_stack() {
        let mut overlay = OverlayState::new();
        let first = overlay.open();
        assert!(first.is_some());
        assert!(overlay.open().is_none());
        assert_eq!(first, Some(1));
    }

    #[test]
    fn test_transition_class_follows_phase() {
        let mut overlay = OverlayState::new();
        let opening = overlay.open().unwrap();
        assert_eq!(overlay.phase().transition_class(), "overlay-enter");
        overlay.complete(opening);
        assert_eq!(overlay.phase().transition_class(), "overlay-enter");
        overlay.close();
        assert_eq!(overlay.phase().transition_class(), "overlay-leave");
    }

    #[test]
    fn test_rapid_open_close_open_ignores_stale_timers() {
        let mut overlay = OverlayState::new();
        let opening = overlay.open().unwrap();
        let closing = overlay.close().unwrap();
        let reopening = overlay.open().unwrap();

        // Timers from the interrupted transitions fire late
        assert!(!overlay.complete(opening));
        assert!(!overlay.complete(closing));
        assert_eq!(overlay.phase(), OverlayPhase::Opening);

        assert!(overlay.complete(reopening));
        assert_eq!(overlay.phase(), OverlayPhase::Open);
        assert!(overlay.is_shown());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut overlay = OverlayState::new();
        assert!(overlay.close().is_none());
        assert!(!overlay.complete(0));
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
    }
}
