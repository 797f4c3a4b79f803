//! Common reusable UI components
//!
//! Form controls and the transition-aware overlay shared by the menu, the
//! quote picker and the showreel player.

pub mod form;
pub mod modal;

pub use form::{CheckboxField, FormField, SelectField, TextAreaField};
pub use modal::Overlay;
