use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

struct ServiceCard {
    title: &'static str,
    items: [&'static str; 3],
}

const SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        title: "Contenido Social",
        items: ["Video short-form", "Hooks y captions", "Guía de publicación"],
    },
    ServiceCard {
        title: "Brand Films",
        items: ["Concepto de campaña", "Edición cinematográfica", "Color y sonido"],
    },
    ServiceCard {
        title: "Creative Ads",
        items: ["Variaciones de anuncios", "Frames que detienen", "Testing de performance"],
    },
];

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="section">
            <div class="container">
                <h2 class="headline-lg scroll-animate">
                    "Producción full-service para marcas que se mueven rápido."
                </h2>

                <div class="card-grid">
                    {SERVICE_CARDS
                        .iter()
                        .enumerate()
                        .map(|(index, card)| {
                            view! {
                                <div class="card scroll-animate" style=format!("transition-delay: {}ms;", index * 100)>
                                    <h3 class="card-title">{card.title}</h3>
                                    <ul class="card-list">
                                        {card.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <a href="#portfolio" class="link-arrow scroll-animate">
                    "Ver trabajos seleccionados"
                    <Icon name=icons::ARROW_RIGHT class="icon-sm" />
                </a>
            </div>
        </section>
    }
}
