use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::Plan;
use crate::core::catalog::{PLANS, featured_plan};
use crate::core::format::format_usd;
use crate::core::timeline::slide_style;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::{PinnedSection, scroll_to_anchor, use_section_progress};

#[component]
pub fn PlansSection() -> impl IntoView {
    view! {
        <PinnedSection id="plans" order=2 class="plans">
            <PlansStage />
        </PinnedSection>
    }
}

#[component]
fn PlansStage() -> impl IntoView {
    let progress = use_section_progress();
    let selected = RwSignal::new(featured_plan());

    view! {
        <div class="stage-grid">
            <div class="stage-headline" style=move || slide_style(progress.get(), -60.0, -40.0, 0.0, false)>
                <h2 class="headline-xl">"ELIGE UN PLAN"</h2>
                <p class="lead muted">"Escala tu contenido sin construir un equipo."</p>
                <A href="/plan-personalizado" attr:class="link-arrow">
                    "Crea tu propio plan"
                    <Icon name=icons::ARROW_RIGHT class="icon-sm" />
                </A>
            </div>

            <div class="stage-phone" style=move || slide_style(progress.get(), 60.0, -40.0, 0.05, true)>
                {move || view! { <PlanCard plan=selected.get() /> }}
            </div>

            <div class="plan-list">
                {PLANS
                    .iter()
                    .enumerate()
                    .map(|(index, plan)| {
                        let delay = 0.08 + index as f64 * 0.04;
                        view! {
                            <button
                                class="plan-option"
                                class:is-selected=move || selected.get().id == plan.id
                                style=move || slide_style(progress.get(), 40.0, 30.0, delay, false)
                                on:click=move |_| selected.set(plan)
                            >
                                <h4 class="plan-option-name">{plan.headline}</h4>
                                <p class="muted">{plan.tagline}</p>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PlanCard(plan: &'static Plan) -> impl IntoView {
    view! {
        <div class="plan-card" class:is-featured=plan.featured>
            {plan.featured.then(|| view! { <span class="label-mono accent">"POPULAR"</span> })}
            <h3 class="plan-card-name">{plan.headline}</h3>
            <p class="plan-card-price">{format_usd(plan.price)}</p>
            <p class="muted">{plan.description}</p>
            <ul class="feature-list">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li>
                                <Icon name=icons::CHECK class="icon-sm accent" />
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="btn-primary btn-block" on:click=move |_| scroll_to_anchor("contact")>
                "Agendar llamada"
                <Icon name=icons::ARROW_RIGHT class="icon-sm" />
            </button>
        </div>
    }
}
