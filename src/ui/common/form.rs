use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled text input
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows an asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Hide the label visually, keeping it for screen readers
    #[prop(default = false)]
    hide_label: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class=if hide_label { "field-label sr-only" } else { "field-label" }>
                {label}
                {required.then(|| view! { <span class="field-required">"*"</span> })}
            </span>
            <input
                type=input_type
                class="field-input"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Labelled multi-line text input
#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(default = false)] required: bool,
    #[prop(default = "")] placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    #[prop(default = false)] hide_label: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class=if hide_label { "field-label sr-only" } else { "field-label" }>
                {label}
                {required.then(|| view! { <span class="field-required">"*"</span> })}
            </span>
            <textarea
                class="field-input field-textarea"
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Select/dropdown with an optional shake cue on error
#[component]
pub fn SelectField(
    label: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    /// Set while the field should shake to draw attention
    #[prop(optional)]
    error: Option<Signal<bool>>,
    /// Message shown under the field while `error` is set
    #[prop(default = "")]
    error_message: &'static str,
) -> impl IntoView {
    let has_error = move || error.map(|e| e.get()).unwrap_or(false);

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                class="field-input field-select"
                class:error-shake=has_error
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val>{text}</option>
                    }
                }).collect_view()}
            </select>
            <Show when=move || has_error() && !error_message.is_empty()>
                <span class="field-error">
                    <Icon name=icons::ALERT_CIRCLE class="icon-inline" />
                    {error_message}
                </span>
            </Show>
        </label>
    }
}

/// Checkbox row with a trailing amount
#[component]
pub fn CheckboxField(
    label: String,
    /// Right-aligned detail, e.g. a price
    #[prop(default = String::new())]
    detail: String,
    checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="check-row" class:is-checked=move || checked.get()>
            <input
                type="checkbox"
                class="check-input"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="check-label">{label}</span>
            <span class="check-detail">{detail}</span>
        </label>
    }
}
