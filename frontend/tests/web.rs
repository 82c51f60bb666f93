//! Browser tests, run with `wasm-pack test --headless --firefox frontend`.

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use leptos::*;
use luova_frontend::behaviors::{active_link, contact, fade_in, nav, smooth_scroll, trust_bar};
use luova_frontend::{
    init_behaviors, ContactForm, ContactPayload, ContactTransport, SubmitError, TransportReply,
    ValidationError, SENDING_LABEL, SENT_LABEL, SUCCESS_MESSAGE,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Event, HtmlButtonElement, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit,
    MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn set_body(html: &str) -> HtmlElement {
    let body = gloo_utils::body();
    body.set_inner_html(html);
    body
}

fn element(id: &str) -> HtmlElement {
    gloo_utils::document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn input(id: &str) -> HtmlInputElement {
    element(id).dyn_into().unwrap()
}

fn active_id() -> Option<String> {
    gloo_utils::document().active_element().map(|e| e.id())
}

/// Let spawned tasks run until they wait on something again.
async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        gloo_utils::window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

const NAV_MARKUP: &str = r##"
    <header class="site-header">
        <button id="hamburger" aria-expanded="false" aria-label="Avaa valikko"></button>
        <nav id="nav-menu">
            <a class="nav-link" id="first-link" href="#palvelut">Palvelut</a>
        </nav>
    </header>
    <main id="outside"></main>
"##;

#[wasm_bindgen_test]
fn hamburger_toggles_menu() {
    set_body(NAV_MARKUP);
    let _handle = nav::init_nav().unwrap().expect("nav markup present");

    let hamburger = element("hamburger");
    let menu = element("nav-menu");

    hamburger.click();
    assert!(menu.class_list().contains("open"));
    assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert_eq!(hamburger.get_attribute("aria-label").as_deref(), Some("Sulje valikko"));
    assert_eq!(gloo_utils::body().style().get_property_value("overflow").unwrap(), "hidden");

    hamburger.click();
    assert!(!menu.class_list().contains("open"));
    assert_eq!(hamburger.get_attribute("aria-label").as_deref(), Some("Avaa valikko"));
}

#[wasm_bindgen_test]
fn escape_and_outside_click_close_menu() {
    set_body(NAV_MARKUP);
    let _handle = nav::init_nav().unwrap().expect("nav markup present");
    let hamburger = element("hamburger");
    let menu = element("nav-menu");

    hamburger.click();
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    gloo_utils::document().dispatch_event(&escape).unwrap();
    assert!(!menu.class_list().contains("open"));

    hamburger.click();
    element("outside").click();
    assert!(!menu.class_list().contains("open"));

    hamburger.click();
    element("first-link").click();
    assert!(!menu.class_list().contains("open"));
}

#[wasm_bindgen_test]
fn dropped_handle_detaches_listeners() {
    set_body(NAV_MARKUP);
    let handle = nav::init_nav().unwrap().expect("nav markup present");
    drop(handle);

    element("hamburger").click();
    assert!(!element("nav-menu").class_list().contains("open"));
}

#[wasm_bindgen_test]
fn nav_skipped_without_markup() {
    set_body("<main></main>");
    assert!(nav::init_nav().unwrap().is_none());
}

#[wasm_bindgen_test]
fn site_handle_tracks_and_disposes_behaviors() {
    set_body(NAV_MARKUP);
    let site = init_behaviors();

    assert!(site.is_installed("nav"));
    assert!(site.is_installed("smooth-scroll"));
    assert!(!site.is_installed("contact-form"));
    assert_eq!(site.len(), 2);
    assert!(!site.is_empty());

    site.dispose();
    element("hamburger").click();
    assert!(!element("nav-menu").class_list().contains("open"));
}

#[wasm_bindgen_test]
fn trust_item_lifts_on_hover() {
    set_body(r#"<div class="trust-item" id="trust"></div>"#);
    let _handle = trust_bar::init_trust_bar().unwrap().expect("trust items present");
    let item = element("trust");

    let enter = MouseEvent::new("mouseenter").unwrap();
    item.dispatch_event(&enter).unwrap();
    assert_eq!(item.style().get_property_value("transform").unwrap(), "translateY(-2px)");

    let leave = MouseEvent::new("mouseleave").unwrap();
    item.dispatch_event(&leave).unwrap();
    assert_eq!(item.style().get_property_value("transform").unwrap(), "");
}

#[wasm_bindgen_test]
fn anchor_clicks_are_taken_over_only_for_existing_targets() {
    set_body(
        r##"
        <a id="to-target" href="#kohde">Kohde</a>
        <a id="to-top" href="#">Ylös</a>
        <a id="to-missing" href="#puuttuu">Puuttuu</a>
        <section id="kohde"></section>
    "##,
    );
    let _handle = smooth_scroll::init_smooth_scroll().unwrap().expect("anchors present");

    // `dispatch_event` answers false once a listener prevented the default.
    let click = |id: &str| {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
        element(id).dispatch_event(&event).unwrap()
    };

    assert!(!click("to-target"));
    assert!(click("to-top"));
    assert!(click("to-missing"));
}

#[wasm_bindgen_test]
fn fade_in_marks_blocks_and_staggers_siblings() {
    set_body(
        r#"
        <div class="services-grid">
            <div class="service-card" id="card-0"></div>
            <div class="service-card" id="card-1"></div>
            <div class="service-card" id="card-2"></div>
        </div>
    "#,
    );
    let _handle = fade_in::init_fade_in().unwrap().expect("fade-in targets present");

    // Browsers may serialize the delay in seconds.
    let delay_ms = |value: String| match value.strip_suffix("ms") {
        Some(ms) => ms.parse::<f64>().unwrap(),
        None => value.trim_end_matches('s').parse::<f64>().unwrap() * 1000.0,
    };

    for (id, delay) in [("card-0", 0.0), ("card-1", 80.0), ("card-2", 160.0)] {
        let card = element(id);
        assert!(card.class_list().contains("fade-in"), "#{id} not marked");
        let value = card.style().get_property_value("transition-delay").unwrap();
        assert!((delay_ms(value) - delay).abs() < 0.5, "#{id} delay");
    }
}

#[wasm_bindgen_test]
fn active_link_follows_section_under_nav() {
    set_body(
        r##"
        <nav>
            <a class="nav-link" id="link-alku" href="#alku">Alku</a>
            <a class="nav-link" id="link-palvelut" href="#palvelut">Palvelut</a>
            <a class="nav-link" id="link-yhteys" href="#yhteys">Yhteys</a>
        </nav>
        <section id="alku" style="height: 10px"></section>
        <section id="palvelut" style="height: 3000px"></section>
        <section id="yhteys" style="height: 10px"></section>
    "##,
    );
    gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
    let _handle = active_link::init_active_link().unwrap().expect("sections present");

    let assert_active = |active: &str| {
        for id in ["link-alku", "link-palvelut", "link-yhteys"] {
            let link = element(id);
            let expected = id == active;
            assert_eq!(link.class_list().contains("nav-link--active"), expected, "#{id}");
            assert_eq!(link.get_attribute("aria-current").is_some(), expected, "#{id}");
        }
    };
    assert_active("link-palvelut");

    // The nav height is read once at startup; later changes do not move the
    // highlight on scroll.
    let root: HtmlElement = gloo_utils::document_element().dyn_into().unwrap();
    root.style().set_property("--nav-height", "5000px").unwrap();
    gloo_utils::window().dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert_active("link-palvelut");
    root.style().remove_property("--nav-height").unwrap();
}

// =============================================================================
// Contact form bound to page markup
// =============================================================================

const FORM_MARKUP: &str = r#"
    <form id="contact-form" action="/yhteydenotto" method="POST" novalidate>
        <input class="form-input" id="name" name="nimi">
        <input class="form-input" id="phone" name="puhelin">
        <input class="form-input" id="email-input" name="sahkoposti">
        <textarea class="form-input" id="message" name="viesti"></textarea>
        <input type="hidden" name="_subject" value="Ajanvaraus">
        <div id="form-status" class="form-status"></div>
        <button type="submit" id="submit-btn">Lähetä viesti</button>
    </form>
"#;

/// Endpoint that answers only when the test says so.
#[derive(Clone)]
struct Endpoint {
    reply: Rc<RefCell<Option<oneshot::Receiver<TransportReply>>>>,
    requests: Rc<Cell<usize>>,
    posted: Rc<RefCell<Vec<(String, String)>>>,
}

impl Endpoint {
    fn pending() -> (Self, oneshot::Sender<TransportReply>) {
        let (tx, rx) = oneshot::channel();
        let endpoint = Self {
            reply: Rc::new(RefCell::new(Some(rx))),
            requests: Rc::new(Cell::new(0)),
            posted: Rc::new(RefCell::new(Vec::new())),
        };
        (endpoint, tx)
    }
}

impl ContactTransport for Endpoint {
    async fn send(&self, payload: &ContactPayload) -> Result<TransportReply, SubmitError> {
        self.requests.set(self.requests.get() + 1);
        *self.posted.borrow_mut() = payload.entries().to_vec();

        let reply = self.reply.borrow_mut().take();
        let reply = reply.ok_or_else(|| SubmitError::Transport("no reply scripted".into()))?;
        reply.await.map_err(|_| SubmitError::Transport("reply dropped".into()))
    }
}

fn submit_form() {
    element("contact-form").dispatch_event(&Event::new("submit").unwrap()).unwrap();
}

fn submit_button() -> HtmlButtonElement {
    element("submit-btn").dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn empty_submit_focuses_name_and_shows_error() {
    set_body(FORM_MARKUP);
    let (endpoint, _reply) = Endpoint::pending();
    let _handle = contact::bind_contact_form(|_| endpoint.clone()).unwrap().expect("form present");

    submit_form();

    let status = element("form-status");
    assert_eq!(active_id().as_deref(), Some("name"));
    assert_eq!(status.class_name(), "form-status error");
    assert_eq!(status.text_content().unwrap(), ValidationError::MissingName.to_string());
    assert!(!submit_button().disabled());
}

#[wasm_bindgen_test]
fn typing_clears_the_error() {
    set_body(FORM_MARKUP);
    let (endpoint, _reply) = Endpoint::pending();
    let _handle = contact::bind_contact_form(|_| endpoint.clone()).unwrap().expect("form present");

    submit_form();
    assert_eq!(element("form-status").class_name(), "form-status error");

    let phone = input("phone");
    phone.set_value("0");
    phone.dispatch_event(&Event::new("input").unwrap()).unwrap();

    let status = element("form-status");
    assert_eq!(status.class_name(), "form-status");
    assert_eq!(status.text_content().as_deref(), Some(""));
}

#[wasm_bindgen_test]
fn whitespace_name_is_blocked_even_with_phone() {
    set_body(FORM_MARKUP);
    let (endpoint, _reply) = Endpoint::pending();
    let _handle = contact::bind_contact_form(|_| endpoint.clone()).unwrap().expect("form present");

    input("name").set_value(" \u{FEFF} ");
    input("phone").set_value("040 123 4567");
    submit_form();

    assert_eq!(active_id().as_deref(), Some("name"));
    assert_eq!(element("form-status").class_name(), "form-status error");
    assert!(!submit_button().disabled());
}

#[wasm_bindgen_test]
fn form_skipped_without_markup() {
    set_body(r#"<form id="contact-form"></form>"#);
    let (endpoint, _reply) = Endpoint::pending();
    assert!(contact::bind_contact_form(|_| endpoint.clone()).unwrap().is_none());
}

#[wasm_bindgen_test]
async fn sending_locks_button_and_success_resets_form() {
    set_body(FORM_MARKUP);
    let (endpoint, reply) = Endpoint::pending();
    let _handle = contact::bind_contact_form(|_| endpoint.clone()).unwrap().expect("form present");

    input("name").set_value("Aino Virtanen");
    input("phone").set_value("040 123 4567");
    submit_form();

    let button = submit_button();
    assert!(button.disabled());
    assert_eq!(button.text_content().as_deref(), Some(SENDING_LABEL));
    assert_eq!(button.get_attribute("aria-busy").as_deref(), Some("true"));
    assert_eq!(button.style().get_property_value("cursor").unwrap(), "not-allowed");

    next_tick().await;
    assert_eq!(endpoint.requests.get(), 1);
    submit_form();
    next_tick().await;
    assert_eq!(endpoint.requests.get(), 1, "submit while sending must be ignored");

    // The page's own field names are posted, hidden fields included.
    let posted = endpoint.posted.borrow().clone();
    assert!(posted.contains(&("nimi".to_string(), "Aino Virtanen".to_string())));
    assert!(posted.contains(&("_subject".to_string(), "Ajanvaraus".to_string())));

    reply
        .send(TransportReply { status: 200, body: Some(r#"{"ok":true}"#.into()) })
        .unwrap();
    next_tick().await;

    let status = element("form-status");
    assert_eq!(status.class_name(), "form-status success");
    assert_eq!(status.text_content().as_deref(), Some(SUCCESS_MESSAGE));
    assert!(button.disabled());
    assert_eq!(button.text_content().as_deref(), Some(SENT_LABEL));
    assert_eq!(button.get_attribute("aria-busy").as_deref(), Some("false"));
    assert_eq!(input("name").value(), "");
    assert_eq!(input("phone").value(), "");
}

#[wasm_bindgen_test]
async fn rejection_restores_button_and_keeps_input() {
    set_body(FORM_MARKUP);
    let (endpoint, reply) = Endpoint::pending();
    let _handle = contact::bind_contact_form(|_| endpoint.clone()).unwrap().expect("form present");

    input("name").set_value("Aino Virtanen");
    input("email-input").set_value("aino@example.fi");
    submit_form();
    next_tick().await;

    let body = r#"{"errors":[{"message":"Invalid phone"},{"message":"Missing consent"}]}"#;
    reply.send(TransportReply { status: 422, body: Some(body.into()) }).unwrap();
    next_tick().await;

    let status = element("form-status");
    let button = submit_button();
    assert_eq!(status.class_name(), "form-status error");
    assert_eq!(status.text_content().as_deref(), Some("Invalid phone, Missing consent"));
    assert!(!button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("Lähetä viesti"));
    assert_eq!(button.get_attribute("aria-busy").as_deref(), Some("false"));
    assert_eq!(input("name").value(), "Aino Virtanen");
}

#[wasm_bindgen_test]
fn contact_form_renders_dom_contract() {
    set_body(r#"<div id="host"></div>"#);
    mount_to(element("host"), || {
        view! { <ContactForm action="https://example.invalid/f/test" submit_label="Lähetä"/> }
    });

    for id in ["contact-form", "form-status", "submit-btn", "name", "phone", "email-input"] {
        assert!(gloo_utils::document().get_element_by_id(id).is_some(), "#{id} missing");
    }
    let button = element("submit-btn");
    assert_eq!(button.text_content().as_deref(), Some("Lähetä"));
    assert_eq!(button.get_attribute("aria-busy").as_deref(), Some("false"));
    assert_eq!(element("form-status").class_name(), "form-status");
    let inputs = gloo_utils::document().query_selector_all(".form-input").unwrap();
    assert_eq!(inputs.length(), 4);
}
