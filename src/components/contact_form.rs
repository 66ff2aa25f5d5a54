use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::components::anchor::scroll_to_top;
use crate::contact::submission::{submit_contact, ContactSubmitter, FormSurface, SimulatedSubmitter};
use crate::contact::validation::{ContactFields, FormField};
use crate::context::use_ready;

struct ContactFormSurface {
    form: NodeRef,
    sending: UseStateSetter<bool>,
}

impl FormSurface for ContactFormSurface {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn focus(&self, field: FormField) {
        let Some(form) = self.form.cast::<HtmlFormElement>() else {
            return;
        };
        let selector = format!("[name=\"{}\"]", field.input_name());
        if let Some(input) = form
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = input.focus();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            input.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn set_sending(&self, sending: bool) {
        self.sending.set(sending);
    }

    fn reset(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn scroll_to_top(&self) {
        scroll_to_top();
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let ready = use_ready();
    let form_ref = use_node_ref();
    let sending = use_state(|| false);
    let submitter: Rc<dyn ContactSubmitter> = use_memo(|_| SimulatedSubmitter::default(), ());

    let onsubmit = {
        let form_ref = form_ref.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !ready.is_ready() || *sending {
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let Ok(data) = FormData::new_with_form(&form) else {
                return;
            };
            let fields = ContactFields::from_form(&data);
            debug!("Contact form submitted");

            let surface = ContactFormSurface {
                form: form_ref.clone(),
                sending: sending.setter(),
            };
            let submitter = submitter.clone();
            spawn_local(async move {
                submit_contact(&surface, &*submitter, fields).await;
            });
        })
    };

    let label = if *sending { "Sending..." } else { "Send message" };
    let button_style = if *sending { "cursor: not-allowed;" } else { "cursor: pointer;" };

    html! {
        <section id="contact" class="contact">
            <style>
                {r#"
                    .contact {
                        padding: 96px 24px;
                        background: #f5f7fb;
                    }
                    .contact-form {
                        display: grid;
                        gap: 16px;
                        max-width: 640px;
                        margin: 0 auto;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        padding: 12px 14px;
                        border: 1px solid #cfd6e2;
                        border-radius: 8px;
                        font: inherit;
                    }
                    .contact-form textarea {
                        min-height: 160px;
                    }
                    .submit-btn {
                        padding: 14px;
                        border: none;
                        border-radius: 8px;
                        background: #1e6fff;
                        color: #fff;
                        font-weight: 600;
                    }
                    .submit-btn:disabled {
                        opacity: 0.6;
                    }
                "#}
            </style>
            <h2 class="section-title fade-in">{"Contact us"}</h2>
            <form class="contact-form fade-in" ref={form_ref} {onsubmit} novalidate=true>
                <input type="text" name="name" placeholder="Name *" />
                <input type="email" name="email" placeholder="Email *" />
                <input type="text" name="company" placeholder="Company" />
                <textarea name="message" placeholder="How can we help? *"></textarea>
                <button type="submit" class="submit-btn" disabled={*sending} style={button_style}>
                    { label }
                </button>
            </form>
        </section>
    }
}
