//! Home page sections, in document order
//!
//! Hero, process and plans are pinned and scrubbed by scroll progress; the
//! others reveal once with the `scroll-animate` observer.

mod contact;
mod hero;
mod metrics;
mod plans;
mod portfolio;
mod process;
mod services;
mod testimonials;

pub use contact::ContactSection;
pub use hero::HeroSection;
pub use metrics::MetricsSection;
pub use plans::PlansSection;
pub use portfolio::PortfolioSection;
pub use process::ProcessSection;
pub use services::ServicesSection;
pub use testimonials::TestimonialsSection;

use leptos::prelude::*;

/// Number of pinned sections on the home page
pub const PINNED_SECTIONS: usize = 3;

/// Reveals `.scroll-animate` elements as they enter the viewport
#[component]
pub fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
