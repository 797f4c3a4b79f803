//! Transient error cue on a form field
//!
//! Raising the cue shows the shake; the caller lowers it after
//! [`SHAKE_MS`] with the generation it got back. Raising again before
//! then restarts the cue, and the earlier lowering is ignored.

/// How long the shake stays on (ms)
pub const SHAKE_MS: u32 = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShakeCue {
    raised: bool,
    generation: u64,
}

impl ShakeCue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_raised(&self) -> bool {
        self.raised
    }

    /// Raise (or restart) the cue. Returns the generation that may lower it.
    pub fn raise(&mut self) -> u64 {
        self.generation += 1;
        self.raised = true;
        self.generation
    }

    /// Lower the cue raised under `generation`. Returns `false` if a newer
    /// raise superseded it or the cue is already down.
    pub fn lower(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.raised {
            return false;
        }
        self.raised = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_then_lower() {
        let mut cue = ShakeCue::new();
        assert!(!cue.is_raised());

        let generation = cue.raise();
        assert!(cue.is_raised());

        assert!(cue.lower(generation));
        assert!(!cue.is_raised());
        assert!(!cue.lower(generation));
    }

    #[test]
    fn test_restart_keeps_cue_up_until_latest_lowering() {
        let mut cue = ShakeCue::new();
        let first = cue.raise();
        let second = cue.raise();

        // The first timer fires while the second shake is still running
        assert!(!cue.lower(first));
        assert!(cue.is_raised());

        assert!(cue.lower(second));
        assert!(!cue.is_raised());
    }
}
