use thiserror::Error;

const DEFAULT_EMAIL_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub fn get_email_api_url() -> &'static str {
    option_env!("EMAIL_API_URL").unwrap_or(DEFAULT_EMAIL_API_URL)
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("build-time setting {0} is not configured")]
pub struct MissingSetting(pub &'static str);

/// Dispatcher credentials baked in at bundle time.
#[derive(Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

// Identifiers must never reach a log line.
impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig").finish_non_exhaustive()
    }
}

impl EmailConfig {
    pub fn from_build_env() -> Result<Self, MissingSetting> {
        Self::resolve(
            option_env!("EMAIL_SERVICE_ID"),
            option_env!("EMAIL_TEMPLATE_ID"),
            option_env!("EMAIL_PUBLIC_KEY"),
        )
    }

    fn resolve(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, MissingSetting> {
        let present = |value: Option<&str>, name| match value.map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            _ => Err(MissingSetting(name)),
        };

        Ok(Self {
            service_id: present(service_id, "EMAIL_SERVICE_ID")?,
            template_id: present(template_id, "EMAIL_TEMPLATE_ID")?,
            public_key: present(public_key, "EMAIL_PUBLIC_KEY")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_settings_present() {
        let config = EmailConfig::resolve(Some("svc_1"), Some("tpl_1"), Some("pk_1")).unwrap();
        assert_eq!(config.service_id, "svc_1");
        assert_eq!(config.template_id, "tpl_1");
        assert_eq!(config.public_key, "pk_1");
    }

    #[test]
    fn first_missing_setting_is_reported() {
        let err = EmailConfig::resolve(Some("svc_1"), None, None).unwrap_err();
        assert_eq!(err, MissingSetting("EMAIL_TEMPLATE_ID"));
    }

    #[test]
    fn blank_setting_counts_as_missing() {
        let err = EmailConfig::resolve(Some("svc_1"), Some("tpl_1"), Some("  ")).unwrap_err();
        assert_eq!(err, MissingSetting("EMAIL_PUBLIC_KEY"));
    }

    #[test]
    fn debug_output_hides_identifiers() {
        let config = EmailConfig::resolve(Some("svc_secret"), Some("tpl_secret"), Some("pk_secret")).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
    }
}
