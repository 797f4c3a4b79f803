use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::video_modal::VideoModal;

/// Selected projects as (title, tag)
const PROJECTS: [(&str, &str); 2] = [("Ojos asi", "Shakira"), ("Bolones Picapiedra", "Video Prom")];

#[component]
pub fn PortfolioSection() -> impl IntoView {
    let playing = RwSignal::new(None::<String>);

    view! {
        <section id="portfolio" class="section">
            <div class="container">
                <h2 class="headline-lg scroll-animate">"Trabajos seleccionados."</h2>

                <div class="project-grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, &(title, tag))| {
                            view! {
                                <button
                                    class="project scroll-animate"
                                    style=format!("transition-delay: {}ms;", index * 120)
                                    on:click=move |_| playing.set(Some(title.to_string()))
                                >
                                    <span class="project-play">
                                        <Icon name=icons::PLAY class="icon" />
                                    </span>
                                    <span class="project-tag label-mono">{tag}</span>
                                    <span class="project-title">{title}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <a href="#portfolio" class="link-arrow scroll-animate">
                    "Ver archivo completo"
                    <Icon name=icons::ARROW_RIGHT class="icon-sm" />
                </a>
            </div>

            <VideoModal
                open=Signal::derive(move || playing.with(Option::is_some))
                on_close=Callback::new(move |_| playing.set(None))
                title=playing
            />
        </section>
    }
}
