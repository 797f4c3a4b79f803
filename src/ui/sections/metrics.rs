use leptos::prelude::*;

struct Metric {
    value: &'static str,
    label: &'static str,
    chart_path: &'static str,
}

const METRICS: [Metric; 3] = [
    Metric {
        value: "+120%",
        label: "Lift promedio en view-through vs baseline",
        chart_path: "M0,40 Q20,35 40,25 T80,20 T120,15 T160,10",
    },
    Metric {
        value: "3×",
        label: "Más hooks testeados por campaña",
        chart_path: "M0,50 Q25,45 50,30 T100,25 T150,15 T200,5",
    },
    Metric {
        value: "48h",
        label: "Turnaround típico para un batch de contenido",
        chart_path: "M0,45 Q30,40 60,35 T120,25 T180,20 T240,10",
    },
];

#[component]
pub fn MetricsSection() -> impl IntoView {
    view! {
        <section id="metrics" class="section section-alt">
            <div class="container">
                <h2 class="headline-lg scroll-animate">"Construido para performance."</h2>

                <div class="card-grid">
                    {METRICS
                        .iter()
                        .enumerate()
                        .map(|(index, metric)| {
                            view! {
                                <div class="card metric scroll-animate" style=format!("transition-delay: {}ms;", index * 120)>
                                    <svg class="metric-chart" viewBox="0 0 240 60" preserveAspectRatio="none" aria-hidden="true">
                                        <path d=metric.chart_path class="chart-line" />
                                    </svg>
                                    <p class="metric-value">{metric.value}</p>
                                    <p class="muted">{metric.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="footnote scroll-animate">"Métricas basadas en promedios de clientes de 90 días."</p>
            </div>
        </section>
    }
}
