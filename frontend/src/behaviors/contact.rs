//! Submission controller for a contact form already in the page markup.
//!
//! Binds to `#contact-form`, posts to the form's own `action` and renders
//! [`FormState`] into `#form-status` and `#submit-btn`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, FormData, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

use super::BehaviorHandle;
use crate::dom::{self, Listener};
use crate::error::{SiteError, SiteResult};
use crate::form::{FormState, Settled, SubmitDecision};
use crate::services::{deliver, ContactTransport, HttpTransport};
use crate::types::{ContactPayload, Field, FormSnapshot};

pub const FORM_ID: &str = "contact-form";
pub const STATUS_ID: &str = "form-status";
pub const BUTTON_ID: &str = "submit-btn";

/// The page elements the controller reads and writes.
#[derive(Clone)]
struct FormView {
    form: HtmlFormElement,
    status: Element,
    button: HtmlButtonElement,
}

impl FormView {
    fn find() -> Option<Self> {
        let form = dom::by_id(FORM_ID)?.dyn_into::<HtmlFormElement>().ok()?;
        let status = dom::by_id(STATUS_ID)?;
        let button = dom::by_id(BUTTON_ID)?.dyn_into::<HtmlButtonElement>().ok()?;
        Some(Self { form, status, button })
    }

    fn field(&self, field: Field) -> Option<Element> {
        self.form.query_selector(&format!("#{}", field.id())).ok().flatten()
    }

    /// Current value of a field; a missing control reads as empty.
    fn value(&self, field: Field) -> String {
        let Some(element) = self.field(field) else {
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            name: self.value(Field::Name),
            phone: self.value(Field::Phone),
            email: self.value(Field::Email),
            message: self.value(Field::Message),
        }
    }

    /// Every named text control of the form, the way the browser would post it.
    fn payload(&self) -> Option<ContactPayload> {
        let data = FormData::new_with_form(&self.form).ok()?;
        let entries = js_sys::try_iter(&data).ok().flatten()?;

        // File inputs have no string value and are left out.
        let entries = entries.filter_map(Result::ok).filter_map(|pair| {
            let pair = pair.dyn_into::<js_sys::Array>().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        });
        Some(ContactPayload::from_entries(entries))
    }

    fn render(&self, state: &FormState) {
        self.status.set_text_content(Some(&state.status().message));
        self.status.set_class_name(state.status().kind.css_class());

        let button = state.button();
        self.button.set_disabled(button.disabled());
        self.button.set_text_content(Some(state.button_label()));
        for (property, value) in button.style_properties() {
            dom::set_style(&self.button, property, value);
        }
        dom::set_attribute(&self.button, "aria-busy", if button.busy() { "true" } else { "false" });
    }
}

/// Bind the page's `#contact-form`, posting to its `action` attribute.
pub fn init_contact_form() -> SiteResult<Option<BehaviorHandle>> {
    bind_contact_form(|form| HttpTransport::new(form.action()))
}

/// Bind the page's `#contact-form` with the transport `connect` builds for it.
///
/// Returns `None` when the form, its status line or its submit button is
/// missing.
pub fn bind_contact_form<T, F>(connect: F) -> SiteResult<Option<BehaviorHandle>>
where
    T: ContactTransport + Clone + 'static,
    F: FnOnce(&HtmlFormElement) -> T,
{
    let Some(view) = FormView::find() else {
        return Ok(None);
    };

    let transport = connect(&view.form);
    let idle_label = view.button.text_content().unwrap_or_default();
    let state = Rc::new(RefCell::new(FormState::new(idle_label)));
    let mut handle = BehaviorHandle::new("contact-form");

    let submit_view = view.clone();
    let submit_state = state.clone();
    handle.push(Listener::new(&view.form, "submit", move |event| {
        event.prevent_default();

        let decision = submit_state.borrow_mut().begin_submit(submit_view.snapshot());
        submit_view.render(&submit_state.borrow());

        match decision {
            SubmitDecision::Busy => log::debug!("Submit ignored: form is sending or already sent"),
            SubmitDecision::Blocked(field) => {
                log::debug!("Contact form blocked at #{}", field.id());
                if let Some(input) = submit_view.field(field) {
                    dom::focus(&input);
                }
                dom::reveal(&submit_view.status);
            }
            SubmitDecision::Send(fields) => {
                let payload = submit_view.payload().unwrap_or(fields);
                let view = submit_view.clone();
                let state = submit_state.clone();
                let transport = transport.clone();

                log::info!("📤 Sending contact form ({} fields)", payload.entries().len());
                spawn_local(async move {
                    let outcome = deliver(&transport, &payload).await;
                    if let Err(e) = &outcome {
                        log::error!("❌ Contact form not delivered: {:?}", e);
                    }

                    let settled = state.borrow_mut().settle(outcome);
                    if settled == Settled::Sent {
                        view.form.reset();
                    }
                    view.render(&state.borrow());
                    dom::reveal(&view.status);
                });
            }
        }
    })?);

    let inputs = view
        .form
        .query_selector_all(".form-input")
        .map_err(|e| SiteError::dom("querySelectorAll", e))?;
    for input in dom::elements(inputs) {
        let view = view.clone();
        let state = state.clone();
        handle.push(Listener::new(&input, "input", move |_| {
            if state.borrow_mut().on_edit() {
                view.render(&state.borrow());
            }
        })?);
    }

    Ok(Some(handle))
}
