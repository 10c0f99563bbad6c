use chrono::{DateTime, Utc};
use chrono_tz::Africa::Lagos;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::dispatch::DispatchError;

/// How long a success or error banner stays up before the form returns to idle.
pub const STATUS_DISPLAY_MS: u32 = 5_000;

const NOT_SPECIFIED: &str = "Not specified";
const NOT_PROVIDED: &str = "Not provided";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Service,
    Urgency,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "Full name",
            Field::Email => "Email address",
            Field::Company => "Company",
            Field::Phone => "Phone number",
            Field::Service => "Service",
            Field::Urgency => "Urgency level",
            Field::Message => "Message",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("`{0}` is not a valid email address")]
    MalformedEmail(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitRefused {
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub service: String,
    pub urgency: String,
    pub message: String,
}

impl InquiryForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Urgency => &self.urgency,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Phone => &mut self.phone,
            Field::Service => &mut self.service,
            Field::Urgency => &mut self.urgency,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Mirrors the `required` and `type="email"` constraints on the form controls.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in [Field::Name, Field::Email, Field::Service, Field::Message] {
            if self.get(field).is_empty() {
                return Err(ValidationError::Missing(field));
            }
        }
        if !is_valid_email(self.normalized_email()) {
            return Err(ValidationError::MalformedEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Browsers strip surrounding whitespace from `type="email"` values.
    pub fn normalized_email(&self) -> &str {
        self.email.trim()
    }

    pub fn to_params(&self, submitted_at: DateTime<Utc>) -> InquiryParams {
        InquiryParams {
            client_name: self.name.clone(),
            client_email: self.normalized_email().to_string(),
            client_company: or_placeholder(&self.company, NOT_SPECIFIED),
            client_phone: or_placeholder(&self.phone, NOT_PROVIDED),
            service_requested: self.service.clone(),
            urgency_level: or_placeholder(&self.urgency, NOT_SPECIFIED),
            client_message: self.message.clone(),
            submission_date: format_submission_date(submitted_at),
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// The HTML "valid e-mail address" production: a dot-atom local part, then
/// one or more hostname labels.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));
    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });
    local_ok && domain_ok
}

/// en-US long date with hour and minute, on the office clock.
pub fn format_submission_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Lagos)
        .format("%B %-d, %Y at %I:%M %p")
        .to_string()
}

/// Flat parameter record handed to the email template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InquiryParams {
    pub client_name: String,
    pub client_email: String,
    pub client_company: String,
    pub client_phone: String,
    pub service_requested: String,
    pub urgency_level: String,
    pub client_message: String,
    pub submission_date: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// The contact form's fields together with where the current submission stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InquiryDesk {
    form: InquiryForm,
    status: SubmissionStatus,
}

impl InquiryDesk {
    pub fn form(&self) -> &InquiryForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn inputs_disabled(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Ignored while a submission is in flight.
    pub fn edit(&mut self, field: Field, value: String) -> bool {
        if self.inputs_disabled() {
            return false;
        }
        self.form.set(field, value);
        true
    }

    /// Moves to `Sending` and returns the parameters to dispatch.
    pub fn begin(&mut self, submitted_at: DateTime<Utc>) -> Result<InquiryParams, SubmitRefused> {
        if self.status == SubmissionStatus::Sending {
            return Err(SubmitRefused::InFlight);
        }
        self.form.validate()?;
        self.status = SubmissionStatus::Sending;
        Ok(self.form.to_params(submitted_at))
    }

    pub fn finish(&mut self, outcome: &Result<(), DispatchError>) -> SubmissionStatus {
        if self.status != SubmissionStatus::Sending {
            return self.status;
        }
        self.status = match outcome {
            Ok(()) => {
                self.form = InquiryForm::default();
                SubmissionStatus::Success
            }
            Err(_) => SubmissionStatus::Error,
        };
        self.status
    }

    /// Drops a success or error banner. Never interrupts a send.
    pub fn revert(&mut self) -> bool {
        match self.status {
            SubmissionStatus::Success | SubmissionStatus::Error => {
                self.status = SubmissionStatus::Idle;
                true
            }
            SubmissionStatus::Idle | SubmissionStatus::Sending => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 13, 30, 0).unwrap()
    }

    fn filled() -> InquiryForm {
        InquiryForm {
            name: "Ada".into(),
            email: "ada@x.test".into(),
            service: "General Legal Consultation".into(),
            message: "Hi".into(),
            ..InquiryForm::default()
        }
    }

    fn desk_with(form: InquiryForm) -> InquiryDesk {
        let mut desk = InquiryDesk::default();
        for field in [Field::Name, Field::Email, Field::Company, Field::Phone, Field::Service, Field::Urgency, Field::Message] {
            desk.edit(field, form.get(field).to_string());
        }
        desk
    }

    #[test]
    fn submission_date_is_lagos_long_form() {
        assert_eq!(format_submission_date(at()), "October 16, 2026 at 02:30 PM");
    }

    #[test]
    fn empty_optional_fields_get_placeholders() {
        let params = filled().to_params(at());
        assert_eq!(params.client_company, "Not specified");
        assert_eq!(params.client_phone, "Not provided");
        assert_eq!(params.urgency_level, "Not specified");
        assert_eq!(params.client_name, "Ada");
        assert_eq!(params.service_requested, "General Legal Consultation");
    }

    #[test]
    fn filled_optional_fields_pass_through() {
        let form = InquiryForm {
            company: "Analytical Engines Ltd".into(),
            phone: "+234 800 000 0000".into(),
            urgency: "High - Within 2-3 days".into(),
            ..filled()
        };
        let params = form.to_params(at());
        assert_eq!(params.client_company, "Analytical Engines Ltd");
        assert_eq!(params.client_phone, "+234 800 000 0000");
        assert_eq!(params.urgency_level, "High - Within 2-3 days");
    }

    #[test]
    fn params_serialize_with_template_field_names() {
        let value = serde_json::to_value(filled().to_params(at())).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "client_company",
                "client_email",
                "client_message",
                "client_name",
                "client_phone",
                "service_requested",
                "submission_date",
                "urgency_level",
            ]
        );
    }

    #[test]
    fn validation_requires_each_mandatory_field() {
        assert_eq!(filled().validate(), Ok(()));
        for field in [Field::Name, Field::Email, Field::Service, Field::Message] {
            let mut form = filled();
            form.set(field, String::new());
            assert_eq!(form.validate(), Err(ValidationError::Missing(field)));
        }
    }

    #[test]
    fn validation_rejects_malformed_email() {
        let mut form = filled();
        form.email = "ada-at-x.test".into();
        assert_eq!(
            form.validate(),
            Err(ValidationError::MalformedEmail("ada-at-x.test".into()))
        );
    }

    #[test]
    fn email_syntax() {
        for good in ["ada@x.test", "a.b+c@mail.example.com", "x@localhost"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in ["", "@x.test", "ada@", "ada@x..test", "ada@-x.test", "a b@x.test", "ada@x_y.test"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn happy_path_clears_the_form() {
        let mut desk = desk_with(filled());
        assert_eq!(desk.status(), SubmissionStatus::Idle);

        desk.begin(at()).unwrap();
        assert_eq!(desk.status(), SubmissionStatus::Sending);
        assert!(desk.inputs_disabled());

        assert_eq!(desk.finish(&Ok(())), SubmissionStatus::Success);
        assert!(desk.form().is_blank());
        assert!(!desk.inputs_disabled());

        assert!(desk.revert());
        assert_eq!(desk.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn failure_keeps_the_form_for_retry() {
        let mut desk = desk_with(filled());
        desk.begin(at()).unwrap();
        let outcome = Err(DispatchError::Network("connection reset".into()));
        assert_eq!(desk.finish(&outcome), SubmissionStatus::Error);
        assert_eq!(desk.form().name, "Ada");
        assert!(!desk.inputs_disabled());

        assert!(desk.revert());
        assert!(desk.begin(at()).is_ok());
    }

    #[test]
    fn second_begin_is_refused_while_sending() {
        let mut desk = desk_with(filled());
        desk.begin(at()).unwrap();
        assert_eq!(desk.begin(at()), Err(SubmitRefused::InFlight));
    }

    #[test]
    fn edits_are_dropped_while_sending() {
        let mut desk = desk_with(filled());
        desk.begin(at()).unwrap();
        assert!(!desk.edit(Field::Name, "Grace".into()));
        assert_eq!(desk.form().name, "Ada");
    }

    #[test]
    fn invalid_form_never_leaves_idle() {
        let mut desk = InquiryDesk::default();
        let refused = desk.begin(at()).unwrap_err();
        assert_eq!(refused, SubmitRefused::Invalid(ValidationError::Missing(Field::Name)));
        assert_eq!(desk.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn revert_never_interrupts_a_send() {
        let mut desk = desk_with(filled());
        assert!(!desk.revert());
        desk.begin(at()).unwrap();
        assert!(!desk.revert());
        assert_eq!(desk.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn finish_outside_sending_is_ignored() {
        let mut desk = desk_with(filled());
        assert_eq!(desk.finish(&Ok(())), SubmissionStatus::Idle);
        assert_eq!(desk.form().name, "Ada");
    }

    #[test]
    fn whitespace_only_name_is_still_sent() {
        let mut desk = desk_with(InquiryForm {
            name: "   ".into(),
            ..filled()
        });
        let params = desk.begin(at()).unwrap();
        assert_eq!(desk.status(), SubmissionStatus::Sending);
        assert_eq!(params.client_name, "   ");
    }

    #[test]
    fn whitespace_optional_fields_pass_through_untouched() {
        let form = InquiryForm {
            company: " ".into(),
            ..filled()
        };
        assert_eq!(form.to_params(at()).client_company, " ");
    }

    #[test]
    fn padded_email_is_sent_as_validated() {
        let form = InquiryForm {
            email: "  ada@x.test ".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(form.to_params(at()).client_email, "ada@x.test");
    }

    #[test]
    fn status_banner_lasts_five_seconds() {
        assert_eq!(STATUS_DISPLAY_MS, 5_000);
    }

    #[test]
    fn stale_revert_after_resubmit_leaves_send_alone() {
        let mut desk = desk_with(filled());
        desk.begin(at()).unwrap();
        desk.finish(&Err(DispatchError::Network("timeout".into())));
        assert_eq!(desk.status(), SubmissionStatus::Error);

        // Retry before the banner timer fires; a late revert must not cut in.
        desk.begin(at()).unwrap();
        assert!(!desk.revert());
        assert_eq!(desk.status(), SubmissionStatus::Sending);
        assert!(desk.inputs_disabled());
    }
}
