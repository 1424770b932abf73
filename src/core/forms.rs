use crate::core::gateway::SubmissionGateway;
use crate::domain::model::{FormPayload, PackageType, SubmissionStatus};
use crate::domain::ports::FormRelay;
use crate::utils::error::Result;
use crate::utils::validation::{email_input_value, validate_email_input, validate_required_input};
use std::sync::RwLock;

/// Field values of a form plus the rules a browser would enforce on them.
pub trait FormInput: Clone + Default + Send + Sync {
    /// Whether the inputs go back to their defaults once a submission completes.
    const RESETS_AFTER_SUBMIT: bool;

    fn validate(&self) -> Result<()>;

    fn to_payload(&self) -> FormPayload;

    fn status_message(status: SubmissionStatus) -> Option<&'static str>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub full_name: String,
    pub email: String,
    pub origin: String,
    pub destination: String,
    pub package_type: PackageType,
    pub message: String,
}

impl FormInput for ContactInput {
    const RESETS_AFTER_SUBMIT: bool = true;

    fn validate(&self) -> Result<()> {
        validate_required_input("fullName", &self.full_name)?;
        validate_required_input("email", email_input_value(&self.email))?;
        validate_email_input("email", &self.email)
    }

    fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .with("fullName", &self.full_name)
            .with("email", email_input_value(&self.email))
            .with("origin", &self.origin)
            .with("destination", &self.destination)
            .with("packageType", self.package_type.label())
            .with("message", &self.message)
    }

    fn status_message(status: SubmissionStatus) -> Option<&'static str> {
        match status {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some("Sending..."),
            SubmissionStatus::Success => Some("Thanks — we'll respond within 24–48 hrs."),
            SubmissionStatus::Error => Some("There was an error. Try again later."),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackInput {
    pub full_name: String,
    pub email: String,
    pub tracking_number: String,
}

impl FormInput for TrackInput {
    // The tracking number stays visible after the request.
    const RESETS_AFTER_SUBMIT: bool = false;

    fn validate(&self) -> Result<()> {
        validate_email_input("email", &self.email)?;
        validate_required_input("trackingNumber", &self.tracking_number)
    }

    fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .with("fullName", &self.full_name)
            .with("email", email_input_value(&self.email))
            .with("trackingNumber", &self.tracking_number)
    }

    fn status_message(status: SubmissionStatus) -> Option<&'static str> {
        match status {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some("Checking..."),
            SubmissionStatus::Success => Some("Request received — check your email for updates."),
            SubmissionStatus::Error => Some("Error — try again later."),
        }
    }
}

/// A form whose submissions go through a [`SubmissionGateway`].
pub struct RelayForm<R: FormRelay, I: FormInput> {
    gateway: SubmissionGateway<R>,
    input: RwLock<I>,
}

pub type ContactForm<R> = RelayForm<R, ContactInput>;
pub type TrackForm<R> = RelayForm<R, TrackInput>;

impl<R: FormRelay, I: FormInput> RelayForm<R, I> {
    pub fn new(gateway: SubmissionGateway<R>) -> Self {
        Self {
            gateway,
            input: RwLock::new(I::default()),
        }
    }

    pub fn input(&self) -> I {
        self.input.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn set_input(&self, input: I) {
        *self.input.write().unwrap_or_else(|e| e.into_inner()) = input;
    }

    pub fn status(&self) -> SubmissionStatus {
        self.gateway.status()
    }

    pub fn status_message(&self) -> Option<&'static str> {
        I::status_message(self.status())
    }

    pub fn gateway(&self) -> &SubmissionGateway<R> {
        &self.gateway
    }

    pub fn detach(&self) {
        self.gateway.detach();
    }

    /// Validates a snapshot of the current inputs and submits it.
    ///
    /// A validation error is returned before any network call and leaves the
    /// status unchanged. Otherwise the outcome of this request is returned.
    pub async fn submit(&self) -> Result<SubmissionStatus> {
        let snapshot = self.input();
        if let Err(e) = snapshot.validate() {
            tracing::debug!("Form rejected before submission: {}", e);
            return Err(e);
        }

        let outcome = self.gateway.submit(snapshot.to_payload()).await;

        if I::RESETS_AFTER_SUBMIT && self.gateway.status_cell().is_attached() {
            self.set_input(I::default());
        }
        Ok(outcome)
    }
}

/// The home page "Quick Quote" card. It is a demo and never posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickQuoteForm {
    pub origin: String,
    pub destination: String,
    pub weight_kg: String,
}

impl QuickQuoteForm {
    pub const NOTICE: &'static str =
        "This demo form posts to your Formspree endpoint when configured.";

    pub fn submit(&self) -> &'static str {
        tracing::info!(
            "Quick quote requested from '{}' to '{}' ({} kg)",
            self.origin,
            self.destination,
            self.weight_kg
        );
        Self::NOTICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_validation() {
        let mut input = ContactInput::default();
        assert!(input.validate().is_err());

        input.full_name = "Ada Obi".to_string();
        input.email = "not-an-email".to_string();
        assert!(input.validate().is_err());

        input.email = "ada@example.com".to_string();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_contact_payload_fields() {
        let input = ContactInput {
            full_name: "Ada Obi".to_string(),
            email: "ada@example.com".to_string(),
            origin: "UK".to_string(),
            destination: "Lagos".to_string(),
            package_type: PackageType::BusinessGoods,
            message: String::new(),
        };
        let payload = input.to_payload();

        let names: Vec<&str> = payload.iter().map(|(k, _)| k).collect();
        assert_eq!(
            names,
            vec!["fullName", "email", "origin", "destination", "packageType", "message"]
        );
        assert_eq!(payload.get("packageType"), Some("Business Goods"));
        assert_eq!(payload.get("message"), Some(""));
    }

    #[test]
    fn test_track_requires_tracking_number_only() {
        let mut input = TrackInput::default();
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("trackingNumber"));

        input.tracking_number = "QLX-20931".to_string();
        assert!(input.validate().is_ok());

        input.email = "nope".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(ContactInput::status_message(SubmissionStatus::Idle), None);
        assert_eq!(
            TrackInput::status_message(SubmissionStatus::Sending),
            Some("Checking...")
        );
        assert_eq!(
            ContactInput::status_message(SubmissionStatus::Error),
            Some("There was an error. Try again later.")
        );
    }

    #[test]
    fn test_quick_quote_never_posts() {
        let form = QuickQuoteForm {
            origin: "Canada".to_string(),
            destination: "Abuja".to_string(),
            weight_kg: "12".to_string(),
        };
        assert_eq!(form.submit(), QuickQuoteForm::NOTICE);
    }

    #[test]
    fn test_email_whitespace_is_stripped() {
        let track = TrackInput {
            email: " ada@example.com ".to_string(),
            tracking_number: "QLX-1".to_string(),
            ..TrackInput::default()
        };
        assert!(track.validate().is_ok());
        assert_eq!(track.to_payload().get("email"), Some("ada@example.com"));

        let contact = ContactInput {
            full_name: "Ada Obi".to_string(),
            email: "  ada@example.com\t".to_string(),
            ..ContactInput::default()
        };
        assert!(contact.validate().is_ok());
        assert_eq!(contact.to_payload().get("email"), Some("ada@example.com"));
    }

    #[test]
    fn test_blank_required_email_is_missing() {
        let contact = ContactInput {
            full_name: "Ada Obi".to_string(),
            email: "   ".to_string(),
            ..ContactInput::default()
        };
        let err = contact.validate().unwrap_err();
        assert!(matches!(err, crate::utils::error::SiteError::MissingFieldError { ref field } if field == "email"));
    }
}
