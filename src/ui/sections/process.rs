use leptos::prelude::*;

use crate::core::timeline::slide_style;
use crate::ui::scroll::{PinnedSection, use_section_progress};

const STEPS: [(&str, &str, &str); 5] = [
    ("01", "Descubrir", "Objetivos, audiencia, restricciones"),
    ("02", "Planificar", "Dirección creativa + shot list"),
    ("03", "Producir", "Filmación + edición + sonido"),
    ("04", "Entregar", "Exports, captions, variantes"),
    ("05", "Optimizar", "Aprender, iterar, escalar"),
];

#[component]
pub fn ProcessSection() -> impl IntoView {
    view! {
        <PinnedSection id="process" order=1 class="process grain">
            <ProcessStage />
        </PinnedSection>
    }
}

#[component]
fn ProcessStage() -> impl IntoView {
    let progress = use_section_progress();

    view! {
        <div class="stage-grid">
            <div class="stage-headline" style=move || slide_style(progress.get(), -60.0, -40.0, 0.0, false)>
                <h2 class="headline-xl">"HECHO IN-HOUSE"</h2>
                <p class="lead">"Del brief a la entrega, sin el caos."</p>
            </div>

            <div class="stage-phone phone-frame" style=move || slide_style(progress.get(), 60.0, -40.0, 0.05, true)></div>

            <ol class="step-list">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, &(number, title, desc))| {
                        let delay = 0.08 + index as f64 * 0.04;
                        view! {
                            <li class="step" style=move || slide_style(progress.get(), 40.0, 30.0, delay, false)>
                                <span class="step-number">{number}</span>
                                <div>
                                    <h4 class="step-title">{title}</h4>
                                    <p class="muted">{desc}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}
