use leptos::prelude::*;

use crate::core::catalog::STUDIO_EMAIL;
use crate::ui::common::{FormField, TextAreaField};
use crate::ui::notifications::use_notifications;

/// Shown once the contact form is submitted
pub const MESSAGE_SENT: &str = "Mensaje enviado. Te contactaremos en 24h.";

#[component]
pub fn ContactSection() -> impl IntoView {
    let notifications = use_notifications();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    // Nothing is sent anywhere; confirm and reset right away
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        notifications.success("", MESSAGE_SENT);
        for field in [name, email, company, message] {
            field.set(String::new());
        }
    };

    view! {
        <section id="contact" class="section contact">
            <div class="container contact-grid">
                <div class="contact-headline scroll-animate">
                    <h2 class="headline-xl">"VAMOS A FILMAR."</h2>
                    <p class="lead muted">
                        "Cuéntanos qué estás construyendo. Respondemos dentro de un día hábil."
                    </p>
                </div>

                <form class="card contact-form scroll-animate" on:submit=on_submit>
                    <FormField
                        label="Nombre"
                        placeholder="Nombre"
                        required=true
                        hide_label=true
                        value=name.into()
                        on_input=Callback::new(move |v| name.set(v))
                    />
                    <FormField
                        label="Email"
                        placeholder="Email"
                        input_type="email"
                        required=true
                        hide_label=true
                        value=email.into()
                        on_input=Callback::new(move |v| email.set(v))
                    />
                    <FormField
                        label="Empresa"
                        placeholder="Empresa"
                        hide_label=true
                        value=company.into()
                        on_input=Callback::new(move |v| company.set(v))
                    />
                    <TextAreaField
                        label="Detalles del proyecto"
                        placeholder="Detalles del proyecto"
                        required=true
                        hide_label=true
                        value=message.into()
                        on_input=Callback::new(move |v| message.set(v))
                    />
                    <button type="submit" class="btn-primary btn-block">"Enviar mensaje"</button>
                </form>

                <dl class="contact-details scroll-animate">
                    <div>
                        <dt class="label-mono muted">"EMAIL"</dt>
                        <dd><a href=format!("mailto:{STUDIO_EMAIL}")>{STUDIO_EMAIL}</a></dd>
                    </div>
                    <div>
                        <dt class="label-mono muted">"OFICINAS"</dt>
                        <dd>"Manta, Ecuador"</dd>
                    </div>
                    <div>
                        <dt class="label-mono muted">"RESPUESTA"</dt>
                        <dd>"~24h"</dd>
                    </div>
                </dl>
            </div>

            <footer class="site-footer">
                <p class="muted">"© 2026 Frame House. Todos los derechos reservados."</p>
            </footer>
        </section>
    }
}
