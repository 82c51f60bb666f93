//! Contact form component, for pages that provide a host element instead of
//! their own form markup.
//!
//! Renders the form with the ids the site stylesheet targets and drives it
//! through [`FormState`]. The view only reads the state; focus, reset and
//! scrolling happen here in response to the state's decisions.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::{ContactFormConfig, CONTACT_FORM_HOST_ID};
use crate::dom;
use crate::error::{SiteError, SiteResult};
use crate::form::{FormState, Settled, SubmitDecision};
use crate::services::{deliver, HttpTransport};
use crate::types::{Field, FormSnapshot};

#[component]
pub fn ContactForm(
    /// Endpoint the form posts to.
    #[prop(into)]
    action: String,
    /// Button label while idle.
    #[prop(into)]
    submit_label: String,
) -> impl IntoView {
    let state = create_rw_signal(FormState::new(submit_label));
    let transport = HttpTransport::new(action.clone());

    let form_ref = create_node_ref::<html::Form>();
    let name_ref = create_node_ref::<html::Input>();
    let phone_ref = create_node_ref::<html::Input>();
    let email_ref = create_node_ref::<html::Input>();
    let message_ref = create_node_ref::<html::Textarea>();
    let status_ref = create_node_ref::<html::Div>();

    let snapshot = move || FormSnapshot {
        name: name_ref.get().map(|el| el.value()).unwrap_or_default(),
        phone: phone_ref.get().map(|el| el.value()).unwrap_or_default(),
        email: email_ref.get().map(|el| el.value()).unwrap_or_default(),
        message: message_ref.get().map(|el| el.value()).unwrap_or_default(),
    };

    let focus_field = move |field: Field| {
        let input = match field {
            Field::Name => name_ref.get(),
            Field::Phone => phone_ref.get(),
            Field::Email => email_ref.get(),
            Field::Message => None,
        };
        if let Some(input) = input {
            let _ = input.focus();
        }
    };

    let reveal_status = move || {
        if let Some(status) = status_ref.get() {
            dom::reveal(&status);
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let values = snapshot();
        let decision = state
            .try_update(|s| s.begin_submit(values))
            .unwrap_or(SubmitDecision::Busy);

        match decision {
            SubmitDecision::Busy => log::debug!("Submit ignored: form is sending or already sent"),
            SubmitDecision::Blocked(field) => {
                log::debug!("Contact form blocked at #{}", field.id());
                focus_field(field);
                reveal_status();
            }
            SubmitDecision::Send(payload) => {
                log::info!("📤 Sending contact form to {}", transport.action());
                let transport = transport.clone();
                spawn_local(async move {
                    let outcome = deliver(&transport, &payload).await;
                    if let Err(e) = &outcome {
                        log::error!("❌ Contact form not delivered: {:?}", e);
                    }

                    if state.try_update(|s| s.settle(outcome)) == Some(Settled::Sent) {
                        if let Some(form) = form_ref.get() {
                            form.reset();
                        }
                    }
                    reveal_status();
                });
            }
        }
    };

    let on_edit = move || {
        if state.try_update(|s| s.on_edit()).unwrap_or(false) {
            log::debug!("Status cleared after edit");
        }
    };

    view! {
        <form
            id="contact-form"
            class="contact-form"
            action=action
            method="POST"
            novalidate=true
            node_ref=form_ref
            on:submit=on_submit
        >
            <div class="form-group">
                <label for=Field::Name.id() class="form-label">"Nimi"</label>
                <input
                    type="text"
                    id=Field::Name.id()
                    name=Field::Name.form_key()
                    class="form-input"
                    autocomplete="name"
                    node_ref=name_ref
                    on:input=move |_| on_edit()
                />
            </div>
            <div class="form-group">
                <label for=Field::Phone.id() class="form-label">"Puhelin"</label>
                <input
                    type="tel"
                    id=Field::Phone.id()
                    name=Field::Phone.form_key()
                    class="form-input"
                    autocomplete="tel"
                    node_ref=phone_ref
                    on:input=move |_| on_edit()
                />
            </div>
            <div class="form-group">
                <label for=Field::Email.id() class="form-label">"Sähköposti"</label>
                <input
                    type="email"
                    id=Field::Email.id()
                    name=Field::Email.form_key()
                    class="form-input"
                    autocomplete="email"
                    node_ref=email_ref
                    on:input=move |_| on_edit()
                />
            </div>
            <div class="form-group">
                <label for=Field::Message.id() class="form-label">"Viesti"</label>
                <textarea
                    id=Field::Message.id()
                    name=Field::Message.form_key()
                    class="form-input"
                    rows="4"
                    node_ref=message_ref
                    on:input=move |_| on_edit()
                ></textarea>
            </div>

            <div
                id="form-status"
                class=move || state.with(|s| s.status().kind.css_class())
                role="status"
                aria-live="polite"
                node_ref=status_ref
            >
                {move || state.with(|s| s.status().message.clone())}
            </div>

            <button
                type="submit"
                id="submit-btn"
                class="btn btn-primary"
                prop:disabled=move || state.with(|s| s.button().disabled())
                aria-busy=move || state.with(|s| if s.button().busy() { "true" } else { "false" })
                style=move || state.with(|s| s.button().style())
            >
                {move || state.with(|s| s.button_label().to_string())}
            </button>
        </form>
    }
}

/// Mount [`ContactForm`] into `#contact-form-host`.
///
/// Only used when the page has no `#contact-form` of its own. Returns
/// `Ok(false)` when the page has no host element either.
pub fn mount_contact_form() -> SiteResult<bool> {
    let Some(host) = gloo_utils::document().get_element_by_id(CONTACT_FORM_HOST_ID) else {
        return Ok(false);
    };

    let config = ContactFormConfig::from_host(&host)?;
    let host = host
        .dyn_into::<HtmlElement>()
        .map_err(|e| SiteError::dom("mount_to", e.into()))?;

    log::info!("📝 Mounting contact form → {}", config.action);
    let ContactFormConfig { action, submit_label } = config;
    mount_to(host, move || view! { <ContactForm action=action submit_label=submit_label/> });

    Ok(true)
}
