use dioxus::prelude::*;

use gloo_timers::callback::Timeout;
use tracing::{debug, info};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use shop::contact;
use shop::contact::{ContactForm, ContactMethod, ContactSubmission, FieldErrors};

// how long the confirmation stays on screen before clearing itself
const CONFIRMATION_MS: u32 = 10_000;

const CONFIRMATION_ID: &str = "form-success";

// smooth-scrolls the confirmation into the middle of the viewport; runs from
// onmounted, so the element is guaranteed to be in the document
fn scroll_confirmation_into_view() {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIRMATION_ID));

    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);

        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[component]
pub fn ContactSection() -> Element {
    // Form state
    let mut first_name = use_signal(|| String::new());
    let mut last_name = use_signal(|| String::new());
    let mut method = use_signal(|| ContactMethod::Email);
    let mut email = use_signal(|| String::new());
    let mut phone = use_signal(|| String::new());
    let mut comments = use_signal(|| String::new());

    // Form validation state
    let mut errors = use_signal(|| FieldErrors::default());

    // Last accepted submission, shown until the timer clears it
    let mut confirmation = use_signal(|| None::<ContactSubmission>);

    // Handle submission
    let handle_submit = move |_| {
        // Reset validation errors so stale marks never survive a new attempt
        errors.set(FieldErrors::default());

        let form = ContactForm {
            first_name: first_name(),
            last_name: last_name(),
            method: method(),
            email: email(),
            phone: phone(),
            comments: comments(),
        };

        match contact::validate(&form) {
            Err(report) => {
                debug!("contact form rejected");
                errors.set(report);
            }
            Ok(submission) => {
                info!("contact form accepted via {}", submission.method.label());

                confirmation.set(Some(submission));

                first_name.set(String::new());
                last_name.set(String::new());
                method.set(ContactMethod::Email);
                email.set(String::new());
                phone.set(String::new());
                comments.set(String::new());

                // a second submission schedules a second timer; both just
                // clear the signal, so the overlap is harmless
                let task = Timeout::new(CONFIRMATION_MS, move || {
                    confirmation.set(None);
                });
                task.forget();
            }
        }
    };

    rsx! {
        section { class: "contact-section", id: "contact",
            div { class: "container",
                h2 { class: "section-title", "Contact the Shop" }
                p { class: "section-lede",
                    "Hunting for a pressing we don't have on the floor? Tell us about it."
                }

                div { class: "contact-card card",
                    form { novalidate: true, onsubmit: handle_submit,
                        div { class: "form-group",
                            label { class: "form-label", r#for: "first-name",
                                "First Name"
                                span { class: "required", "*" }
                            }
                            input {
                                id: "first-name",
                                class: if errors().first_name.is_some() { "form-input error" } else { "form-input" },
                                r#type: "text",
                                value: "{first_name()}",
                                oninput: move |evt| first_name.set(evt.value()),
                            }
                            if let Some(message) = errors().first_name {
                                div { class: "form-error", "{message}" }
                            }
                        }

                        div { class: "form-group",
                            label { class: "form-label", r#for: "last-name",
                                "Last Name"
                                span { class: "required", "*" }
                            }
                            input {
                                id: "last-name",
                                class: if errors().last_name.is_some() { "form-input error" } else { "form-input" },
                                r#type: "text",
                                value: "{last_name()}",
                                oninput: move |evt| last_name.set(evt.value()),
                            }
                            if let Some(message) = errors().last_name {
                                div { class: "form-error", "{message}" }
                            }
                        }

                        div { class: "form-group",
                            span { class: "form-label", "Preferred Contact Method" }
                            div { class: "radio-row",
                                label { class: "radio-option",
                                    input {
                                        r#type: "radio",
                                        name: "contact-method",
                                        checked: method() == ContactMethod::Email,
                                        onchange: move |_| method.set(ContactMethod::Email),
                                    }
                                    "Email"
                                }
                                label { class: "radio-option",
                                    input {
                                        r#type: "radio",
                                        name: "contact-method",
                                        checked: method() == ContactMethod::Phone,
                                        onchange: move |_| method.set(ContactMethod::Phone),
                                    }
                                    "Phone"
                                }
                            }
                        }

                        div { class: "form-group",
                            label { class: "form-label", r#for: "email",
                                "Email"
                                // the marker tracks the radio choice live
                                if method() == ContactMethod::Email {
                                    span { class: "required", "*" }
                                } else {
                                    span { class: "conditional-required" }
                                }
                            }
                            input {
                                id: "email",
                                class: if errors().email.is_some() { "form-input error" } else { "form-input" },
                                r#type: "email",
                                placeholder: "user@example.com",
                                value: "{email()}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                            if let Some(message) = errors().email {
                                div { class: "form-error", "{message}" }
                            }
                        }

                        div { class: "form-group",
                            label { class: "form-label", r#for: "phone",
                                "Phone"
                                if method() == ContactMethod::Phone {
                                    span { class: "required", "*" }
                                } else {
                                    span { class: "conditional-required" }
                                }
                            }
                            input {
                                id: "phone",
                                class: if errors().phone.is_some() { "form-input error" } else { "form-input" },
                                r#type: "tel",
                                placeholder: "(555) 123-4567",
                                value: "{phone()}",
                                oninput: move |evt| phone.set(evt.value()),
                            }
                            if let Some(message) = errors().phone {
                                div { class: "form-error", "{message}" }
                            }
                        }

                        div { class: "form-group",
                            label { class: "form-label", r#for: "comments",
                                "How Can We Help?"
                                span { class: "required", "*" }
                            }
                            textarea {
                                id: "comments",
                                class: if errors().comments.is_some() { "form-textarea error" } else { "form-textarea" },
                                rows: 4,
                                placeholder: "Looking for an original pressing? Selling a collection?",
                                value: "{comments()}",
                                oninput: move |evt| comments.set(evt.value()),
                            }
                            if let Some(message) = errors().comments {
                                div { class: "form-error", "{message}" }
                            }
                        }

                        button { class: "btn btn-primary", r#type: "submit", "Send Message" }
                    }

                    if let Some(submission) = confirmation() {
                        div {
                            id: CONFIRMATION_ID,
                            class: "form-success",
                            onmounted: move |_| scroll_confirmation_into_view(),
                            h3 { "Thank You for Contacting Groove Haven Records!" }
                            p {
                                strong { "Name: " }
                                "{submission.full_name()}"
                            }
                            p {
                                strong { "Preferred Contact Method: " }
                                "{submission.method.label()}"
                            }
                            p {
                                strong { "{submission.method.label()}: " }
                                "{submission.contact_value()}"
                            }
                            p {
                                strong { "Your Message: " }
                                "{submission.comments}"
                            }
                            p { "We'll get back to you soon about your vinyl inquiry!" }
                        }
                    }
                }
            }
        }
    }
}
