//! Scroll-scrubbed tweens for pinned sections
//!
//! A pinned section exposes its scroll progress in `[0,1]`. Each animated
//! property is a [`Tween`] that interpolates between two values over a
//! sub-window of that progress. [`Track`] chains an entrance tween with an
//! exit tween, matching the enter-hold-leave choreography of pinned sections.

use super::snap::Ease;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    /// Progress at which the tween starts
    pub start: f64,
    /// Progress at which the tween ends
    pub end: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: f64, end: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            end,
            ease,
        }
    }

    /// Value at `progress`; holds `from` before the window and `to` after it.
    pub fn sample(&self, progress: f64) -> f64 {
        let span = self.end - self.start;
        let t = if span <= 0.0 {
            if progress >= self.end { 1.0 } else { 0.0 }
        } else {
            ((progress - self.start) / span).clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * self.ease.apply(t)
    }
}

/// An entrance tween followed by an exit tween on the same property
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub enter: Tween,
    pub exit: Tween,
}

impl Track {
    /// Slide in from `offset` to 0 starting at `delay`, then out to
    /// `exit_offset` from 0.6, fading opacity alongside.
    pub fn slide(offset: f64, exit_offset: f64, delay: f64) -> (Track, Track) {
        let position = Track {
            enter: Tween::new(offset, 0.0, delay, delay + 0.3, Ease::PowerTwoOut),
            exit: Tween::new(0.0, exit_offset, 0.6, 0.9, Ease::PowerTwoIn),
        };
        let opacity = Track {
            enter: Tween::new(0.0, 1.0, delay, delay + 0.3, Ease::PowerTwoOut),
            exit: Tween::new(1.0, 0.0, 0.6, 0.9, Ease::PowerTwoIn),
        };
        (position, opacity)
    }

    pub fn sample(&self, progress: f64) -> f64 {
        if progress < self.exit.start {
            self.enter.sample(progress)
        } else {
            self.exit.sample(progress)
        }
    }
}

/// Inline style for a horizontal or vertical slide at `progress`.
pub fn slide_style(progress: f64, offset: f64, exit_offset: f64, delay: f64, vertical: bool) -> String {
    let (position, opacity) = Track::slide(offset, exit_offset, delay);
    let axis = if vertical { "Y" } else { "X" };
    format!(
        "opacity: {:.3}; transform: translate{}({:.1}px);",
        opacity.sample(progress),
        axis,
        position.sample(progress)
    )
}

/// Inline style for an element that starts visible and only leaves: it
/// slides to `exit_offset` and fades out over `[start, start + 0.3]`.
pub fn exit_style(progress: f64, exit_offset: f64, start: f64, vertical: bool) -> String {
    let position = Tween::new(0.0, exit_offset, start, start + 0.3, Ease::PowerTwoIn);
    let opacity = Tween::new(1.0, 0.0, start, start + 0.3, Ease::PowerTwoIn);
    let axis = if vertical { "Y" } else { "X" };
    format!(
        "opacity: {:.3}; transform: translate{}({:.1}px);",
        opacity.sample(progress),
        axis,
        position.sample(progress)
    )
}
