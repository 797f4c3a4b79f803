//! Core models and logic: pinned-section snapping and quotation totals

pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod cue;
pub mod format;
pub mod notice;
pub mod overlay;
pub mod quote;
pub mod registry;
pub mod snap;
#[cfg(test)]
mod tests;
pub mod timeline;

pub use catalog::{CatalogError, Plan, Product, Service, ServiceOption};
pub use cue::ShakeCue;
pub use notice::{NoticeSequence, NoticeStage};
pub use overlay::{OverlayPhase, OverlayState};
pub use quote::{ContactDetails, LineItem, PlanQuote, QuotationSummary, QuoteError, ServiceSelection};
pub use registry::{PinRegistry, SnapCoordinator};
pub use snap::{Ease, PinnedRegion, PinnedTrigger, SnapConfig, SnapRule};
