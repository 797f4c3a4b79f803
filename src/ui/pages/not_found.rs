//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Tell the server to send a real 404 status
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Página no encontrada | Frame House" />

        <div class="not-found">
            <p class="label-mono muted">"404"</p>
            <h1 class="headline-lg">"Esta toma no existe."</h1>
            <p class="muted">"La página que buscas no existe o fue movida."</p>
            <A href="/" attr:class="btn-primary">
                <Icon name=icons::ARROW_LEFT class="icon-sm" />
                "Volver al inicio"
            </A>
        </div>
    }
}
