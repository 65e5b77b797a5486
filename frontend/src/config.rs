use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Identity and contact details of the clinic, shared by every page and by
/// the messaging handoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClinicProfile {
    pub name: &'static str,
    pub doctor: &'static str,
    pub tagline: &'static str,
    pub address_line: &'static str,
    pub phones: [&'static str; 2],
    /// Digits only, country code first. Used as the `wa.me` path segment.
    pub whatsapp: &'static str,
    pub established: i32,
}

pub const CLINIC: ClinicProfile = ClinicProfile {
    name: "Bhasin Dental Clinic",
    doctor: "Dr. Damini Bhasin",
    tagline: "Advanced, Pain‑Free Dental Care in Pitampura",
    address_line: "25 RAJ NAGAR, NEAR RAM MANDIR, PITAMPURA, DELHI - 110034",
    phones: ["+91 98733 73281", "+91 92662 17218"],
    whatsapp: "919873373281",
    established: 2017,
};

impl ClinicProfile {
    pub fn primary_phone(&self) -> &'static str {
        self.phones[0]
    }

    /// WhatsApp number as shown to visitors, e.g. `+919873373281`.
    pub fn whatsapp_display(&self) -> String {
        format!("+{}", self.whatsapp)
    }
}

/// Asset shown in gallery slots that are still waiting for a real photo.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_number_is_plain_digits() {
        assert!(!CLINIC.whatsapp.is_empty());
        assert!(CLINIC.whatsapp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn primary_phone_is_first_listed() {
        assert_eq!(CLINIC.primary_phone(), "+91 98733 73281");
    }

    #[test]
    fn whatsapp_display_adds_plus() {
        assert_eq!(CLINIC.whatsapp_display(), "+919873373281");
    }
}
