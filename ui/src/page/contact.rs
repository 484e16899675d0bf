use dioxus::prelude::*;

use crate::core::config::PageConfig;
use crate::core::contact::{self, ContactForm, FormCell};
use crate::core::timing;

use super::text::{use_placeholder, use_text, Text};
use super::PageSignals;

impl FormCell for Signal<ContactForm> {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        self.with_mut(f)
    }
}

/// Contact form. There is no backend: submission waits a fixed delay and then
/// reports success.
#[component]
pub fn Contact() -> Element {
    let signals = use_context::<PageSignals>();
    let delay_ms = use_context::<PageConfig>().submit_delay_ms;
    let mut form = use_signal(ContactForm::default);

    let submit_idle = use_text("contact.form.submit", "Send Message");
    let name_placeholder = use_placeholder("contact.form.name", "Your name");
    let email_placeholder = use_placeholder("contact.form.email", "Your email");
    let company_placeholder = use_placeholder("contact.form.company", "Winery name");
    let message_placeholder = use_placeholder("contact.form.message", "How can we help?");

    let snapshot = form();
    let submitting = snapshot.is_submitting();
    let submit_label = snapshot.submit_label(&submit_idle).to_string();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if form.peek().is_submitting() {
            return;
        }
        let sending = {
            let loc = signals.localization.peek();
            contact::sending_label(loc.bundle(), loc.language())
        };

        let mut notice = signals.notice;
        let localization = signals.localization;
        spawn(async move {
            let mut cell = form;
            let outcome = contact::run_submit(
                &mut cell,
                sending,
                timing::sleep_ms(delay_ms),
                || contact::success_message(localization.peek().bundle()),
            )
            .await;
            if let Some(outcome) = outcome {
                notice.set(Some(outcome.notice));
            }
        });
    };

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "section-header",
                h2 { Text { i18n: "contact.title", fallback: "Let's talk about your winery" } }
                p {
                    Text {
                        i18n: "contact.subtitle",
                        fallback: "Tell us a little about your operation and we will get back to you within one business day."
                    }
                }
            }
            form { class: "contact-form", onsubmit: onsubmit,
                input {
                    r#type: "text",
                    name: "name",
                    required: true,
                    placeholder: "{name_placeholder}",
                    value: "{snapshot.name}",
                    oninput: move |evt| form.with_mut(|f| f.name = evt.value()),
                }
                input {
                    r#type: "email",
                    name: "email",
                    required: true,
                    placeholder: "{email_placeholder}",
                    value: "{snapshot.email}",
                    oninput: move |evt| form.with_mut(|f| f.email = evt.value()),
                }
                input {
                    r#type: "text",
                    name: "company",
                    placeholder: "{company_placeholder}",
                    value: "{snapshot.company}",
                    oninput: move |evt| form.with_mut(|f| f.company = evt.value()),
                }
                textarea {
                    name: "message",
                    rows: 5,
                    required: true,
                    placeholder: "{message_placeholder}",
                    value: "{snapshot.message}",
                    oninput: move |evt| form.with_mut(|f| f.message = evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: submitting,
                    "{submit_label}"
                }
            }
        }
    }
}

/// Dismissible notice raised when a contact submission completes.
#[component]
pub fn NoticeToast() -> Element {
    let mut notice = use_context::<PageSignals>().notice;
    let dismiss = use_text("notice.dismiss", "Dismiss");

    let Some(current) = notice() else {
        return rsx! {};
    };

    rsx! {
        div { class: "notice-toast", role: "status",
            span { class: "notice-toast__message", "{current.message}" }
            button {
                r#type: "button",
                class: "notice-toast__dismiss",
                onclick: move |_| notice.set(None),
                "{dismiss}"
            }
        }
    }
}
