use log::{info, warn};
use thiserror::Error;

use crate::config::ClinicProfile;
use crate::content::SERVICE_OPTIONS;
use crate::forms::message::{compose, whatsapp_url};
use crate::forms::validate::{Field, FormState, PhoneShape, Rule};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0} field(s) need attention")]
    Invalid(usize),
    #[error("could not open the messaging link: {0}")]
    Launch(String),
}

/// Opens an outbound URL. Swapped for a recorder in tests.
pub trait Launcher {
    fn launch(&self, url: &str) -> Result<(), SubmitError>;
}

/// Opens the URL in a new tab with no opener reference.
pub struct NewTabLauncher;

impl Launcher for NewTabLauncher {
    fn launch(&self, url: &str) -> Result<(), SubmitError> {
        let window =
            web_sys::window().ok_or_else(|| SubmitError::Launch("no window".to_string()))?;
        // With `noopener` the returned handle is always null, so only a thrown
        // error counts as failure.
        window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map(|_| ())
            .map_err(|e| SubmitError::Launch(format!("{:?}", e)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Appointment,
    Contact,
}

impl FormKind {
    pub fn schema(&self) -> Vec<(Field, Rule)> {
        match self {
            FormKind::Appointment => vec![
                (Field::Name, Rule::Name { max: 100 }),
                (Field::Phone, Rule::Phone { max: 20, shape: PhoneShape::Strict }),
                (Field::Email, Rule::OptionalEmail),
                (Field::Service, Rule::Choice(SERVICE_OPTIONS)),
                (Field::PreferredDate, Rule::Free),
                (Field::PreferredTime, Rule::Free),
                (Field::Message, Rule::OptionalText { max: 1000 }),
            ],
            FormKind::Contact => vec![
                (Field::Name, Rule::Name { max: 80 }),
                (Field::Phone, Rule::Phone { max: 18, shape: PhoneShape::Loose }),
                (Field::Service, Rule::Choice(SERVICE_OPTIONS)),
                (Field::Message, Rule::RequiredText { min: 10, max: 500 }),
            ],
        }
    }

    /// Empty form. The appointment form starts on the first listed service.
    pub fn new_form(&self) -> FormState {
        let form = FormState::new(&self.schema());
        match (self, SERVICE_OPTIONS.first()) {
            (FormKind::Appointment, Some(first)) => form.with_initial(Field::Service, first),
            _ => form,
        }
    }

    pub fn header(&self, clinic: &ClinicProfile) -> String {
        match self {
            FormKind::Appointment => {
                format!("Hello {}, I'd like to book an appointment.", clinic.name)
            }
            FormKind::Contact => "Appointment request".to_string(),
        }
    }

    /// Only the contact form tidies up the phone's spacing.
    pub fn cleans_phone(&self) -> bool {
        matches!(self, FormKind::Contact)
    }

    /// Toast title and description shown after a successful handoff.
    pub fn acknowledgment(&self) -> (&'static str, &'static str) {
        match self {
            FormKind::Appointment => (
                "Appointment request received",
                "We\u{2019}ll contact you shortly to confirm a suitable slot.",
            ),
            FormKind::Contact => (
                "Ready to send",
                "We\u{2019}ll open WhatsApp with your message pre-filled.",
            ),
        }
    }
}

/// Validates `form`, builds the message and hands it to `launcher`. The form is
/// reset only once the launch went through. Returns the launched URL.
pub fn submit(
    kind: FormKind,
    clinic: &ClinicProfile,
    form: &mut FormState,
    launcher: &dyn Launcher,
) -> Result<String, SubmitError> {
    if !form.validate_all() {
        let count = form.error_count();
        info!("{:?} form blocked with {} invalid field(s)", kind, count);
        return Err(SubmitError::Invalid(count));
    }

    let message = compose(&kind.header(clinic), &form.submission(), kind.cleans_phone());
    let url = whatsapp_url(clinic.whatsapp, &message);
    if let Err(e) = launcher.launch(&url) {
        warn!("{:?} form handoff failed: {}", kind, e);
        return Err(e);
    }

    info!("{:?} form handed off to WhatsApp", kind);
    form.reset();
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::config::CLINIC;

    #[derive(Default)]
    struct Recorder {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Launcher for Recorder {
        fn launch(&self, url: &str) -> Result<(), SubmitError> {
            if self.fail {
                return Err(SubmitError::Launch("popup blocked".to_string()));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn decoded_text(url: &str) -> String {
        let text = url.split("?text=").nth(1).unwrap_or_default();
        urlencoding::decode(text).unwrap().into_owned()
    }

    #[test]
    fn invalid_appointment_is_blocked() {
        let recorder = Recorder::default();
        let mut form = FormKind::Appointment.new_form();
        form.set(Field::Name, "A");
        form.set(Field::Phone, "123");

        let result = submit(FormKind::Appointment, &CLINIC, &mut form, &recorder);
        assert_eq!(result, Err(SubmitError::Invalid(2)));
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Phone).is_some());
        assert!(recorder.opened.borrow().is_empty());
        assert_eq!(form.value(Field::Name), "A");
    }

    #[test]
    fn valid_appointment_opens_whatsapp_and_resets() {
        let recorder = Recorder::default();
        let mut form = FormKind::Appointment.new_form();
        form.set(Field::Name, "Jordan Lee");
        form.set(Field::Phone, "+91 98733 73281");
        form.set(Field::Service, "Preventive Care");
        form.set(Field::Message, "");

        let url = submit(FormKind::Appointment, &CLINIC, &mut form, &recorder).unwrap();
        assert!(url.starts_with("https://wa.me/919873373281?text="));
        assert_eq!(*recorder.opened.borrow(), vec![url.clone()]);

        let text = decoded_text(&url);
        assert_eq!(
            text,
            "Hello Bhasin Dental Clinic, I'd like to book an appointment.\n\
             Name: Jordan Lee\n\
             Phone: +91 98733 73281\n\
             Service: Preventive Care"
        );
        assert!(!text.contains("Email:"));
        assert!(!text.contains("Message:"));

        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Service), "Preventive Care");
    }

    #[test]
    fn appointment_sends_phone_as_typed() {
        let recorder = Recorder::default();
        let mut form = FormKind::Appointment.new_form();
        form.set(Field::Name, "Jordan Lee");
        form.set(Field::Phone, " +91  98733-73281 ");

        let url = submit(FormKind::Appointment, &CLINIC, &mut form, &recorder).unwrap();
        assert!(decoded_text(&url).contains("\nPhone: +91  98733-73281\n"));
    }

    #[test]
    fn appointment_includes_optional_lines_in_order() {
        let recorder = Recorder::default();
        let mut form = FormKind::Appointment.new_form();
        form.set(Field::Message, "Sensitive molar");
        form.set(Field::PreferredTime, "18:30");
        form.set(Field::PreferredDate, "2026-11-02");
        form.set(Field::Email, "jordan@example.com");
        form.set(Field::Service, "Cosmetic Dentistry");
        form.set(Field::Phone, "9873373281");
        form.set(Field::Name, "Jordan Lee");

        let url = submit(FormKind::Appointment, &CLINIC, &mut form, &recorder).unwrap();
        let labels: Vec<String> = decoded_text(&url)
            .lines()
            .skip(1)
            .filter_map(|line| line.split(':').next().map(str::to_string))
            .collect();
        assert_eq!(
            labels,
            vec!["Name", "Phone", "Email", "Service", "Preferred date", "Preferred time", "Message"]
        );
    }

    #[test]
    fn contact_message_is_fixed_block() {
        let recorder = Recorder::default();
        let mut form = FormKind::Contact.new_form();
        assert_eq!(form.value(Field::Service), "");
        form.set(Field::Name, " Jordan Lee ");
        form.set(Field::Phone, "+91   98733 73281");
        form.set(Field::Service, "Sedation Dentistry");
        form.set(Field::Message, "Nervous about a root canal.");

        let url = submit(FormKind::Contact, &CLINIC, &mut form, &recorder).unwrap();
        assert_eq!(
            decoded_text(&url),
            "Appointment request\n\
             Name: Jordan Lee\n\
             Phone: +91 98733 73281\n\
             Service: Sedation Dentistry\n\
             Message: Nervous about a root canal."
        );
        assert_eq!(form.value(Field::Message), "");
    }

    #[test]
    fn contact_requires_a_message() {
        let recorder = Recorder::default();
        let mut form = FormKind::Contact.new_form();
        form.set(Field::Name, "Jordan Lee");
        form.set(Field::Phone, "+91 98733 73281");
        form.set(Field::Service, "Preventive Care");

        let result = submit(FormKind::Contact, &CLINIC, &mut form, &recorder);
        assert_eq!(result, Err(SubmitError::Invalid(1)));
        assert_eq!(
            form.error(Field::Message).map(ToString::to_string),
            Some("Please add a short message".to_string())
        );
    }

    #[test]
    fn failed_launch_keeps_the_form() {
        let recorder = Recorder { fail: true, ..Recorder::default() };
        let mut form = FormKind::Appointment.new_form();
        form.set(Field::Name, "Jordan Lee");
        form.set(Field::Phone, "+91 98733 73281");

        let result = submit(FormKind::Appointment, &CLINIC, &mut form, &recorder);
        assert!(matches!(result, Err(SubmitError::Launch(_))));
        assert_eq!(form.value(Field::Name), "Jordan Lee");
    }
}
