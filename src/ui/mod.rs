pub mod clipboard;
pub mod common;
pub mod icon;
pub mod menu_overlay;
pub mod notifications;
pub mod pages;
pub mod quote_modal;
pub mod scroll;
pub mod sections;
pub mod timers;
pub mod video_modal;

pub use icon::{Icon, icons};
pub use notifications::{NotificationsContainer, provide_notifications, use_notifications};
pub use scroll::{PinnedSection, SnapContext, SnapController, scroll_to_anchor};
