use crate::core::OverlayState;
use crate::core::overlay::{CLOSE_TRANSITION_MS, OPEN_TRANSITION_MS};
use crate::ui::timers::TimerSet;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Full-screen layer with enter/leave transitions.
///
/// `open` drives an [`OverlayState`]; the content stays mounted until the
/// leave transition has finished, and a transition superseded by a newer
/// one never completes.
#[component]
pub fn Overlay(
    /// Whether the overlay should be showing
    open: Signal<bool>,
    /// Callback to close the overlay
    on_close: Callback<()>,
    /// Extra classes on the backdrop element
    #[prop(default = "")]
    class: &'static str,
    /// Accessible name of the dialog
    #[prop(default = "")]
    label: &'static str,
    /// Whether clicking the backdrop closes the overlay
    #[prop(default = true)]
    close_on_backdrop: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let state = RwSignal::new(OverlayState::new());
    let timers = TimerSet::new();

    Effect::new(move |_| {
        let transition = if open.get() {
            state
                .try_update(|s| s.open())
                .flatten()
                .map(|generation| (generation, OPEN_TRANSITION_MS))
        } else {
            state
                .try_update(|s| s.close())
                .flatten()
                .map(|generation| (generation, CLOSE_TRANSITION_MS))
        };

        if let Some((generation, delay)) = transition {
            timers.schedule(delay, move || {
                state.try_update(|s| s.complete(generation));
            });
        }
    });

    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && state.with_untracked(|s| s.is_shown()) {
                on_close.run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <Show when=move || state.with(|s| s.is_mounted())>
            <div
                class=move || {
                    let phase = state.with(|s| s.phase().transition_class());
                    format!("overlay-backdrop {} {}", class, phase)
                }
                role="dialog"
                aria-modal="true"
                aria-label=label
                on:click=move |e| {
                    if close_on_backdrop {
                        #[cfg(not(feature = "ssr"))]
                        {
                            if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                                if element.class_list().contains("overlay-backdrop") {
                                    on_close.run(());
                                }
                            }
                        }
                        #[cfg(feature = "ssr")]
                        {
                            let _ = (e, on_close);
                        }
                    }
                }
            >
                {children()}
            </div>
        </Show>
    }
}
