use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, EmailConfig, MissingSetting};
use crate::inquiry::InquiryParams;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] MissingSetting),
    #[error("network error: {0}")]
    Network(String),
    #[error("dispatcher rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl From<gloo_net::Error> for DispatchError {
    fn from(e: gloo_net::Error) -> Self {
        DispatchError::Network(e.to_string())
    }
}

/// Sends a finished inquiry to whoever delivers the email.
pub trait Dispatcher {
    async fn send(&self, params: &InquiryParams) -> Result<(), DispatchError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a InquiryParams,
}

/// EmailJS REST transport.
pub struct EmailJs {
    config: EmailConfig,
    endpoint: &'static str,
}

impl EmailJs {
    pub fn new(config: EmailConfig, endpoint: &'static str) -> Self {
        Self { config, endpoint }
    }

    pub fn from_build_env() -> Result<Self, DispatchError> {
        Ok(Self::new(EmailConfig::from_build_env()?, config::get_email_api_url()))
    }

    fn request_body<'a>(&'a self, params: &'a InquiryParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        }
    }
}

impl Dispatcher for EmailJs {
    async fn send(&self, params: &InquiryParams) -> Result<(), DispatchError> {
        let response = Request::post(self.endpoint)
            .json(&self.request_body(params))?
            .send()
            .await?;

        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(DispatchError::Rejected { status, body })
    }
}

/// Resolves the build-time transport and sends. A missing setting fails the
/// submission like any other dispatch error.
pub async fn deliver(params: &InquiryParams) -> Result<(), DispatchError> {
    EmailJs::from_build_env()?.send(params).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::{Field, InquiryDesk, SubmissionStatus, SubmitRefused};
    use chrono::{TimeZone, Utc};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn params() -> InquiryParams {
        InquiryParams {
            client_name: "Ada".into(),
            client_email: "ada@x.test".into(),
            client_company: "Not specified".into(),
            client_phone: "Not provided".into(),
            service_requested: "General Legal Consultation".into(),
            urgency_level: "Not specified".into(),
            client_message: "Hi".into(),
            submission_date: "October 16, 2026 at 02:30 PM".into(),
        }
    }

    /// Holds every send open until the test releases it.
    struct GatedDispatcher {
        calls: Cell<usize>,
        gate: RefCell<Option<oneshot::Receiver<Result<(), DispatchError>>>>,
    }

    impl Dispatcher for GatedDispatcher {
        async fn send(&self, _params: &InquiryParams) -> Result<(), DispatchError> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx.await.unwrap_or_else(|_| Err(DispatchError::Network("gate dropped".into()))),
                None => Err(DispatchError::Network("no gate".into())),
            }
        }
    }

    fn ready_desk() -> InquiryDesk {
        let mut desk = InquiryDesk::default();
        desk.edit(Field::Name, "Ada".into());
        desk.edit(Field::Email, "ada@x.test".into());
        desk.edit(Field::Service, "General Legal Consultation".into());
        desk.edit(Field::Message, "Hi".into());
        desk
    }

    #[test]
    fn request_body_uses_emailjs_field_names() {
        let transport = EmailJs::new(
            EmailConfig {
                service_id: "svc".into(),
                template_id: "tpl".into(),
                public_key: "pk".into(),
            },
            "https://example.invalid/send",
        );
        let params = params();
        let body = serde_json::to_value(transport.request_body(&params)).unwrap();
        assert_eq!(body["service_id"], "svc");
        assert_eq!(body["template_id"], "tpl");
        assert_eq!(body["user_id"], "pk");
        assert_eq!(body["template_params"]["client_name"], "Ada");
        assert_eq!(body["template_params"]["submission_date"], "October 16, 2026 at 02:30 PM");
    }

    #[test]
    fn blocked_send_is_never_doubled() {
        let (tx, rx) = oneshot::channel();
        let dispatcher = GatedDispatcher {
            calls: Cell::new(0),
            gate: RefCell::new(Some(rx)),
        };
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 13, 30, 0).unwrap();
        let mut desk = ready_desk();

        let first = desk.begin(now).unwrap();
        let in_flight = dispatcher.send(&first);

        // A second click while the first send is parked goes nowhere.
        assert_eq!(desk.begin(now), Err(SubmitRefused::InFlight));
        assert!(desk.inputs_disabled());

        tx.send(Ok(())).unwrap();
        let outcome = block_on(in_flight);
        assert_eq!(dispatcher.calls.get(), 1);
        assert_eq!(desk.finish(&outcome), SubmissionStatus::Success);
        assert!(desk.form().is_blank());
    }

    #[test]
    fn rejected_send_lands_in_error() {
        let (tx, rx) = oneshot::channel();
        let dispatcher = GatedDispatcher {
            calls: Cell::new(0),
            gate: RefCell::new(Some(rx)),
        };
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 13, 30, 0).unwrap();
        let mut desk = ready_desk();

        let params = desk.begin(now).unwrap();
        tx.send(Err(DispatchError::Rejected { status: 400, body: "bad template".into() }))
            .unwrap();
        let outcome = block_on(dispatcher.send(&params));

        assert_eq!(desk.finish(&outcome), SubmissionStatus::Error);
        assert_eq!(desk.form().name, "Ada");
    }

    #[test]
    fn missing_setting_error_names_variable_only() {
        let err = DispatchError::from(MissingSetting("EMAIL_SERVICE_ID"));
        assert_eq!(err.to_string(), "build-time setting EMAIL_SERVICE_ID is not configured");
    }
}
