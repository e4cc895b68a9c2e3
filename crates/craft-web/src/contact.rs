//! Contact form wiring.

use crate::dom;
use craft_core::ContactForm;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) {
    let form = match document.get_element_by_id("contact-form") {
        Some(el) => el,
        None => return,
    };

    let doc = document.clone();
    dom::on_event(form.as_ref(), "submit", move |ev| {
        ev.prevent_default();
        let submission = ContactForm {
            name: input_value(&doc, "name"),
            email: input_value(&doc, "email"),
            message: textarea_value(&doc, "message"),
        };
        match submission.validate() {
            Ok(()) => {
                clear_fields(&doc);
                alert("Thank you for your message! We will get back to you soon.");
            }
            Err(errors) => {
                let text = errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("\n");
                alert(&text);
            }
        }
    });
}

fn input_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

fn textarea_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

fn clear_fields(document: &web::Document) {
    for id in ["name", "email"] {
        if let Some(el) = document.get_element_by_id(id) {
            if let Ok(input) = el.dyn_into::<web::HtmlInputElement>() {
                input.set_value("");
            }
        }
    }
    if let Some(el) = document.get_element_by_id("message") {
        if let Ok(area) = el.dyn_into::<web::HtmlTextAreaElement>() {
            area.set_value("");
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web::window() {
        let _ = window.alert_with_message(message);
    }
}
