//! Contact form model and the simulated submission round trip.

use std::future::Future;

use serde::Serialize;
use tracing::info;

use super::bundle::TranslationBundle;
use super::language::Language;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you for your message!";

/// Payload snapshot taken at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Ready,
    /// Control disabled and showing `label`.
    Sending { label: String },
}

/// Shown once the simulated request finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    submit: SubmitState,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            company: company.into(),
            message: message.into(),
            submit: SubmitState::Ready,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.submit, SubmitState::Sending { .. })
    }

    /// Label to render on the submit control. Once the submission settles the
    /// control goes back to `idle`, the label of the active language.
    pub fn submit_label<'a>(&'a self, idle: &'a str) -> &'a str {
        match &self.submit {
            SubmitState::Ready => idle,
            SubmitState::Sending { label } => label,
        }
    }

    /// Disable the control and show `sending`. `None` if already in flight.
    pub fn start_submit(&mut self, sending: impl Into<String>) -> Option<ContactMessage> {
        if self.is_submitting() {
            return None;
        }
        self.submit = SubmitState::Sending {
            label: sending.into(),
        };
        Some(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            message: self.message.clone(),
        })
    }

    /// Clear fields and re-enable the control.
    pub fn finish_submit(&mut self, success: impl Into<String>) -> Notice {
        self.submit = SubmitState::Ready;
        self.name.clear();
        self.email.clear();
        self.company.clear();
        self.message.clear();
        Notice {
            message: success.into(),
        }
    }
}

/// Somewhere a [`ContactForm`] lives between the two halves of a submission.
pub trait FormCell {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R;
}

impl FormCell for ContactForm {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(self)
    }
}

/// What a completed simulated submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub payload: ContactMessage,
    pub notice: Notice,
}

/// Simulated round trip: disable and snapshot, log the payload, await `wait`,
/// then clear the form and produce the notice from `success` (evaluated after
/// the wait, so it reflects the language active at completion).
///
/// Returns `None` without waiting if a submission is already in flight.
pub async fn run_submit<C, W>(
    form: &mut C,
    sending: String,
    wait: W,
    success: impl FnOnce() -> String,
) -> Option<SubmitOutcome>
where
    C: FormCell,
    W: Future<Output = ()>,
{
    let payload = form.with_form(|f| f.start_submit(sending))?;
    info!(
        payload = %serde_json::to_string(&payload).unwrap_or_default(),
        "simulating contact submission"
    );

    wait.await;

    let notice = form.with_form(|f| f.finish_submit(success()));
    Some(SubmitOutcome { payload, notice })
}

pub fn success_message(bundle: &TranslationBundle) -> String {
    bundle
        .resolve("contact.form.success")
        .unwrap_or(DEFAULT_SUCCESS_MESSAGE)
        .to_string()
}

pub fn sending_label(bundle: &TranslationBundle, language: Language) -> String {
    bundle
        .resolve("contact.form.sending")
        .map(str::to_string)
        .unwrap_or_else(|| match language {
            Language::En => "Sending...".to_string(),
            Language::Es => "Enviando...".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    fn filled() -> ContactForm {
        ContactForm::new("Ana", "ana@bodega.es", "Bodega Sur", "Demo please")
    }

    #[test]
    fn submit_disables_then_returns_to_idle_label() {
        let mut form = filled();
        let payload = form.start_submit("Sending...").unwrap();
        assert_eq!(payload.company, "Bodega Sur");
        assert!(form.is_submitting());
        assert_eq!(form.submit_label("Send Message"), "Sending...");

        // second submit while sending is refused
        assert!(form.start_submit("Sending...").is_none());

        let notice = form.finish_submit(DEFAULT_SUCCESS_MESSAGE);
        assert_eq!(notice.message, "Thank you for your message!");
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label("Send Message"), "Send Message");
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[test]
    fn run_submit_waits_between_disable_and_notice() {
        let mut form = filled();
        let outcome = block_on(run_submit(
            &mut form,
            "Sending...".into(),
            async {},
            || "Thanks".to_string(),
        ))
        .unwrap();
        assert_eq!(outcome.payload.email, "ana@bodega.es");
        assert_eq!(outcome.notice.message, "Thanks");
        assert!(!form.is_submitting());
        assert!(form.company.is_empty());
    }

    #[test]
    fn run_submit_refuses_while_in_flight() {
        let mut form = filled();
        form.start_submit("Sending...");
        let outcome = block_on(run_submit(&mut form, "Sending...".into(), async {}, || {
            panic!("completion must not run for a refused submit")
        }));
        assert!(outcome.is_none());
        // the in-flight submission is untouched
        assert!(form.is_submitting());
        assert_eq!(form.name, "Ana");
    }

    #[test]
    fn messages_prefer_bundle_then_fall_back() {
        let empty = TranslationBundle::empty();
        assert_eq!(success_message(&empty), DEFAULT_SUCCESS_MESSAGE);
        assert_eq!(sending_label(&empty, Language::Es), "Enviando...");
        assert_eq!(sending_label(&empty, Language::En), "Sending...");

        let bundle = TranslationBundle::from_value(json!({
            "contact": { "form": { "success": "¡Gracias!", "sending": "Enviando…" } }
        }))
        .unwrap();
        assert_eq!(success_message(&bundle), "¡Gracias!");
        assert_eq!(sending_label(&bundle, Language::Es), "Enviando…");
    }

    #[test]
    fn payload_serializes_like_form_data() {
        let payload = filled().start_submit("…").unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["email"], "ana@bodega.es");
        assert_eq!(value["message"], "Demo please");
    }
}
