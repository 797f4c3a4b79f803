use leptos::prelude::*;

use crate::ui::common::Overlay;
use crate::ui::icon::{Icon, icons};

/// Showreel player. Plays on open and pauses on close; without a
/// `video_url` a placeholder is shown instead.
#[component]
pub fn VideoModal(
    open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: Signal<Option<String>>,
    #[prop(optional)] video_url: Option<&'static str>,
) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let is_open = open.get();
        let Some(video) = video_ref.get() else {
            return;
        };
        if is_open {
            // Autoplay may be refused; the controls stay usable
            let _ = video.play();
        } else {
            let _ = video.pause();
        }
    });

    view! {
        <Overlay open=open on_close=on_close class="video-overlay" label="Video">
            <div class="video-frame">
                <button class="overlay-close video-close" on:click=move |_| on_close.run(()) aria-label="Cerrar video">
                    <Icon name=icons::X class="icon" />
                </button>

                <div class="video-screen">
                    {match video_url {
                        Some(src) => view! {
                            <video node_ref=video_ref src=src class="video-player" controls playsinline></video>
                        }.into_any(),
                        None => view! {
                            <div class="video-placeholder">
                                <div class="video-play-badge">
                                    <Icon name=icons::PLAY class="icon-lg" />
                                </div>
                                <p class="video-placeholder-title">"Video de prueba"</p>
                                <p class="video-placeholder-note">"Aquí se reproducirá tu video"</p>
                            </div>
                        }.into_any(),
                    }}
                </div>

                {move || title.get().map(|t| view! { <h3 class="video-title">{t}</h3> })}
            </div>
        </Overlay>
    }
}
