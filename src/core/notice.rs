//! Copy confirmation notice sequence
//!
//! After a quote is copied, two notices are shown one after the other:
//! first a clipboard confirmation, then a prompt to get in touch. The
//! sequence is `Idle -> Copied -> PromptingContact -> Idle`. Each step is
//! scheduled on its own timer by the caller. Steps carry the generation
//! they were scheduled under, so a restarted or cancelled sequence ignores
//! timers that fire late.

/// Delay from the copy to the contact prompt (ms)
pub const CONTACT_PROMPT_DELAY_MS: u32 = 2000;

/// How long each notice stays visible (ms)
pub const NOTICE_VISIBLE_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeStage {
    #[default]
    Idle,
    Copied,
    PromptingContact,
}

impl NoticeStage {
    pub fn title(&self) -> &'static str {
        match self {
            NoticeStage::Idle => "",
            NoticeStage::Copied => "Portapapeles",
            NoticeStage::PromptingContact => "¡Plan copiado!",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            NoticeStage::Idle => "",
            NoticeStage::Copied => "Los detalles de tu plan se han copiado al portapapeles",
            NoticeStage::PromptingContact => {
                "Contáctanos en la página de inicio con los detalles de tu plan"
            }
        }
    }
}

/// A stage change due `at_ms` after the sequence starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeStep {
    pub at_ms: u32,
    pub stage: NoticeStage,
}

/// Stage changes after the first one, in firing order.
pub fn schedule() -> [NoticeStep; 2] {
    [
        NoticeStep {
            at_ms: CONTACT_PROMPT_DELAY_MS,
            stage: NoticeStage::PromptingContact,
        },
        NoticeStep {
            at_ms: CONTACT_PROMPT_DELAY_MS + NOTICE_VISIBLE_MS,
            stage: NoticeStage::Idle,
        },
    ]
}

#[derive(Debug, Clone, Default)]
pub struct NoticeSequence {
    stage: NoticeStage,
    generation: u64,
}

impl NoticeSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> NoticeStage {
        self.stage
    }

    /// Begin (or restart) the sequence. Returns the generation that the
    /// caller's scheduled steps must present to [`apply`](Self::apply).
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.stage = NoticeStage::Copied;
        self.generation
    }

    /// Apply a scheduled step. Returns `false` for steps of an older run.
    pub fn apply(&mut self, generation: u64, step: NoticeStep) -> bool {
        if generation != self.generation || self.stage == NoticeStage::Idle {
            return false;
        }
        self.stage = step.stage;
        true
    }

    /// Abort the sequence and invalidate every pending step.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.stage = NoticeStage::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_is_ordered_and_ends_idle() {
        let steps = schedule();
        assert!(steps.windows(2).all(|w| w[0].at_ms < w[1].at_ms));
        assert_eq!(steps[0].stage, NoticeStage::PromptingContact);
        assert_eq!(steps.last().map(|s| s.stage), Some(NoticeStage::Idle));
        assert_eq!(steps[1].at_ms, 6000);
    }

    #[test]
    fn test_full_sequence() {
        let mut seq = NoticeSequence::new();
        let generation = seq.start();
        assert_eq!(seq.stage(), NoticeStage::Copied);

        for step in schedule() {
            assert!(seq.apply(generation, step));
        }
        assert_eq!(seq.stage(), NoticeStage::Idle);
    }

    #[test]
    fn test_restart_ignores_previous_run() {
        let mut seq = NoticeSequence::new();
        let first = seq.start();
        let second = seq.start();

        let [prompt, idle] = schedule();
        assert!(!seq.apply(first, idle));
        assert_eq!(seq.stage(), NoticeStage::Copied);
        assert!(seq.apply(second, prompt));
        assert_eq!(seq.stage(), NoticeStage::PromptingContact);
    }

    #[test]
    fn test_cancel_invalidates_pending_steps() {
        let mut seq = NoticeSequence::new();
        let generation = seq.start();
        seq.cancel();

        assert!(!seq.apply(generation, schedule()[0]));
        assert_eq!(seq.stage(), NoticeStage::Idle);
    }

    #[test]
    fn test_stage_copy() {
        assert_eq!(NoticeStage::Copied.title(), "Portapapeles");
        assert!(NoticeStage::PromptingContact.message().starts_with("Contáctanos"));
        assert_eq!(NoticeStage::Idle.message(), "");
    }
}
