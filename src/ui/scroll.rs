//! Pinned sections and scroll snapping in the browser
//!
//! [`PinnedSection`] measures where it pins once mounted and registers itself
//! with the page's [`SnapContext`]. [`SnapController`] listens to window
//! scrolling and, once scrolling settles, animates the window toward the
//! target resolved by the installed snap rule.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::logging::{log, warn};

use crate::core::PinnedTrigger;
use crate::core::SnapCoordinator;
#[cfg(not(feature = "ssr"))]
use crate::core::{Ease, registry::SNAP_SETTLE_DELAY_MS, snap::is_scroll_echo};
#[cfg(not(feature = "ssr"))]
use crate::ui::timers::TimerSet;

/// Quiet period after the last scroll event before snapping (ms)
#[cfg(not(feature = "ssr"))]
const SCROLL_SETTLE_MS: u32 = 120;

/// Snap animation frame interval (ms)
#[cfg(not(feature = "ssr"))]
const FRAME_MS: u32 = 16;

/// Shared snapping state for one page
#[derive(Clone, Copy)]
pub struct SnapContext {
    coordinator: StoredValue<SnapCoordinator>,
    scroll_y: RwSignal<f64>,
    installed: RwSignal<bool>,
}

impl SnapContext {
    pub fn new(expected_sections: usize) -> Self {
        Self {
            coordinator: StoredValue::new(SnapCoordinator::new(expected_sections)),
            scroll_y: RwSignal::new(0.0),
            installed: RwSignal::new(false),
        }
    }

    /// Current window scroll offset in pixels
    pub fn scroll_y(&self) -> Signal<f64> {
        self.scroll_y.into()
    }

    pub fn register(&self, key: &'static str, trigger: PinnedTrigger) {
        self.coordinator.update_value(|c| {
            c.register(key, trigger);
        });
        self.try_install(false);
    }

    pub fn deregister(&self, key: &str) {
        self.coordinator.try_update_value(|c| {
            c.deregister(key);
        });
    }

    /// Install the snap rule if the registry is ready, or unconditionally
    /// when `force` is set. Does nothing once installed.
    pub fn try_install(&self, force: bool) {
        if self.installed.get_untracked() {
            return;
        }

        let max = max_scroll();
        let outcome = self
            .coordinator
            .try_update_value(|c| {
                if !c.should_install(force) {
                    return None;
                }
                let regions = c.try_install(max, force).map(|rule| rule.regions().len());
                let registry = c.registry();
                Some((regions, registry.len(), registry.expected()))
            })
            .flatten();

        if let Some((regions, registered, expected)) = outcome {
            self.installed.set(true);
            #[cfg(not(feature = "ssr"))]
            match regions {
                Some(n) => log!("scroll snap installed over {n} pinned sections ({registered}/{expected} registered)"),
                None => log!("scroll snap installed without pinned sections ({registered}/{expected} registered)"),
            }
            #[cfg(feature = "ssr")]
            let _ = (regions, registered, expected);
        }
    }

    /// Pixel target and duration (seconds) for a snap from pixel offset `y`.
    ///
    /// `None` when no rule is installed or the target is under a pixel away.
    pub fn snap_target(&self, y: f64) -> Option<(f64, f64)> {
        let max = max_scroll();
        if max <= 0.0 {
            return None;
        }
        let value = y / max;

        self.coordinator
            .with_value(|c| {
                c.rule().map(|rule| {
                    let target = rule.resolve(value);
                    (target * max, rule.config().duration_for(target - value))
                })
            })
            .filter(|(target, _)| (target - y).abs() >= 1.0)
    }

    #[cfg(not(feature = "ssr"))]
    fn sync_scroll(&self) {
        self.scroll_y.set(window_scroll_y());
    }
}

/// Create the page's snap context and provide it to descendants
pub fn provide_snap_context(expected_sections: usize) -> SnapContext {
    let ctx = SnapContext::new(expected_sections);
    provide_context(ctx);
    ctx
}

pub fn use_snap_context() -> SnapContext {
    use_context::<SnapContext>().expect("SnapContext should be provided")
}

/// Scroll progress through the enclosing pinned section, in `[0,1]`
#[derive(Clone, Copy)]
pub struct SectionProgress(pub Signal<f64>);

/// Progress of the nearest enclosing [`PinnedSection`], or 0 outside one.
pub fn use_section_progress() -> Signal<f64> {
    use_context::<SectionProgress>()
        .map(|p| p.0)
        .unwrap_or_else(|| Signal::derive(|| 0.0))
}

/// A section that stays pinned to the viewport for `length` screen heights.
#[component]
pub fn PinnedSection(
    /// Anchor id, also the registry key
    id: &'static str,
    /// Document order of the section
    order: usize,
    #[prop(default = "")] class: &'static str,
    /// Pinned scroll length in viewport heights
    #[prop(default = 1.0)]
    length: f64,
    children: Children,
) -> impl IntoView {
    let snap = use_snap_context();
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let trigger = RwSignal::new(None::<PinnedTrigger>);

    let progress = Memo::new(move |_| {
        let y = snap.scroll_y().get();
        trigger.get().map(|t| t.progress_at(y)).unwrap_or(0.0)
    });
    provide_context(SectionProgress(progress.into()));

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let Some(el) = section_ref.get() else {
            return;
        };
        match measure(&el, order) {
            Some(measured) => {
                trigger.set(Some(measured));
                snap.register(id, measured);
            }
            None => warn!("could not measure pinned section `{id}`"),
        }
    });

    on_cleanup(move || snap.deregister(id));

    #[cfg(feature = "ssr")]
    let _ = order;

    view! {
        <section
            id=id
            node_ref=section_ref
            class=format!("pin-track {class}")
            style=format!("height: {}vh;", (1.0 + length) * 100.0)
        >
            <div class="pin-stage">{children()}</div>
        </section>
    }
}

/// Drives snapping for the page; render once next to the pinned sections.
#[component]
pub fn SnapController() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::{Interval, Timeout};

        let snap = use_snap_context();
        let settle: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);
        let animation: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);
        let covered = StoredValue::new(None::<(f64, f64)>);

        // Sections that never report in must not block snapping forever
        let timers = TimerSet::new();
        timers.schedule(SNAP_SETTLE_DELAY_MS, move || snap.try_install(true));

        snap.sync_scroll();

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            snap.sync_scroll();
            if animation.with_value(Option::is_some) {
                if is_scroll_echo(covered.get_value(), window_scroll_y()) {
                    return;
                }
                // The user scrolled during a snap; their gesture wins
                animation.set_value(None);
            }

            // Replacing the pending timeout cancels it
            let timeout = Timeout::new(SCROLL_SETTLE_MS, move || {
                let from = window_scroll_y();
                if let Some((to, duration)) = snap.snap_target(from) {
                    animate_scroll(animation, covered, from, to, duration, Ease::default());
                }
            });
            settle.set_value(Some(timeout));
        });

        on_cleanup(move || {
            handle.remove();
            settle.try_update_value(|t| *t = None);
            animation.try_update_value(|a| *a = None);
        });
    }
}

/// Animate the window from `from` to `to`, cancelling any snap in flight.
///
/// The stretch of the path covered so far is kept in `covered` so the scroll
/// listener can tell the animation's own scroll events from the user's.
#[cfg(not(feature = "ssr"))]
fn animate_scroll(
    animation: StoredValue<Option<gloo_timers::callback::Interval>, LocalStorage>,
    covered: StoredValue<Option<(f64, f64)>>,
    from: f64,
    to: f64,
    duration_secs: f64,
    ease: Ease,
) {
    let started = js_sys::Date::now();
    let duration_ms = (duration_secs * 1000.0).max(1.0);
    covered.set_value(None);

    let interval = gloo_timers::callback::Interval::new(FRAME_MS, move || {
        let t = ((js_sys::Date::now() - started) / duration_ms).clamp(0.0, 1.0);
        let y = from + (to - from) * ease.apply(t);
        covered.set_value(Some((from, y)));
        scroll_window_to(y);
        if t >= 1.0 {
            animation.set_value(None);
        }
    });
    animation.set_value(Some(interval));
}

/// Smooth-scroll to the element with `id`; a missing element is a no-op.
pub fn scroll_to_anchor(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            warn!("no element with id `{id}` to scroll to");
            return;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(feature = "ssr")]
    let _ = id;
}

#[cfg(not(feature = "ssr"))]
fn measure(el: &web_sys::HtmlElement, order: usize) -> Option<PinnedTrigger> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;

    let start = el.get_bounding_client_rect().top() + scroll_y;
    let end = start + f64::from(el.offset_height()) - viewport;
    Some(PinnedTrigger::new(order, start, (end > start).then_some(end)))
}

#[cfg(not(feature = "ssr"))]
fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(not(feature = "ssr"))]
fn scroll_window_to(y: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, y);
    }
}

/// Maximum scroll extent of the document in pixels
#[cfg(not(feature = "ssr"))]
fn max_scroll() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (height - viewport).max(0.0)
}

#[cfg(feature = "ssr")]
fn max_scroll() -> f64 {
    0.0
}
