//! Toast notifications
//!
//! Fire-and-forget transient messages shown at the top of the page. The
//! [`NotificationManager`] is provided as context at the app root; any
//! component can grab it with [`use_notifications`] and call one of its
//! helpers. Auto-dismiss timers belong to the manager, not to the toasts,
//! so a toast never cancels the timer that is removing it.

use leptos::prelude::*;
use std::collections::VecDeque;

use crate::ui::icon::{Icon, icons};
use crate::ui::timers::TimerSet;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 3;

/// How long a toast stays on screen (ms)
pub const TOAST_VISIBLE_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(TOAST_VISIBLE_MS),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(TOAST_VISIBLE_MS),
        }
    }
}

/// Notification item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: StoredValue<u64>,
    timers: TimerSet,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: StoredValue::new(0),
            timers: TimerSet::new(),
        }
    }

    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    pub fn notify(&self, toast: Toast) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let auto_dismiss = toast.auto_dismiss_ms;

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, toast });

            // Remove oldest if we exceed max
            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });

        if let Some(ms) = auto_dismiss {
            let this = *self;
            self.timers.schedule(ms, move || this.dismiss(id));
        }
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Toast::success(title, message));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Toast::error(title, message));
    }

    pub fn dismiss(&self, id: u64) {
        self.notifications.try_update(|n| n.retain(|i| i.id != id));
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the notification manager and provide it as context
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

pub fn use_notifications() -> NotificationManager {
    use_context::<NotificationManager>().expect("NotificationManager should be provided")
}

/// Toast stack, placed once at the app root
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let manager = use_notifications();
    let notifications = manager.notifications();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    view! {
                        <ToastView toast=item.toast on_close=Callback::new(move |_| manager.dismiss(id)) />
                    }
                }
            />
        </div>
    }
}

#[component]
fn ToastView(toast: Toast, on_close: Callback<()>) -> impl IntoView {
    let (kind_class, icon) = match toast.kind {
        ToastKind::Success => ("toast toast-success", icons::CHECK),
        ToastKind::Error => ("toast toast-error", icons::ALERT_CIRCLE),
    };

    view! {
        <div class=kind_class>
            <Icon name=icon class="toast-icon" />
            <div class="toast-body">
                {(!toast.title.is_empty()).then(|| view! { <h4 class="toast-title">{toast.title.clone()}</h4> })}
                <p class="toast-message">{toast.message.clone()}</p>
            </div>
            <button class="toast-close" on:click=move |_| on_close.run(()) aria-label="Cerrar">
                <Icon name=icons::X class="icon-sm" />
            </button>
        </div>
    }
}
