use leptos::prelude::*;

/// (quote, name, role)
const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Convirtieron nuestros lanzamientos de producto en un sistema de contenido.",
        "A. R.",
        "CMO",
    ),
    (
        "El turnaround más rápido que hemos tenido, sin sacrificar calidad.",
        "M. T.",
        "Founder",
    ),
    (
        "Nuestros anuncios finalmente se ven como la marca que queremos ser.",
        "S. L.",
        "Head of Growth",
    ),
];

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id="testimonials" class="section section-alt">
            <div class="container card-grid">
                {TESTIMONIALS
                    .iter()
                    .enumerate()
                    .map(|(index, &(quote, name, role))| {
                        view! {
                            <figure class="card testimonial scroll-animate" style=format!("transition-delay: {}ms;", index * 120)>
                                <blockquote class="testimonial-quote">{format!("\u{201c}{quote}\u{201d}")}</blockquote>
                                <figcaption class="testimonial-author">
                                    <span class="testimonial-name">{name}</span>
                                    <span class="muted">{role}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
