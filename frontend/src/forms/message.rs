use crate::config::ClinicProfile;
use crate::forms::validate::{Field, Submission};

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Plain chat link without a prefilled message.
pub fn chat_url(number: &str) -> String {
    format!("{}{}", WHATSAPP_BASE, number)
}

/// Chat link that opens with `message` typed in.
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!("{}{}?text={}", WHATSAPP_BASE, number, urlencoding::encode(message))
}

/// `tel:` href for a display-formatted number.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

pub fn map_embed_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps?q={}&output=embed",
        urlencoding::encode(address)
    )
}

pub fn service_enquiry_url(clinic: &ClinicProfile, service: &str) -> String {
    let message = format!(
        "Hi, I\u{2019}d like to know more about {} at {}. Please share the next steps.",
        service, clinic.name
    );
    whatsapp_url(clinic.whatsapp, &message)
}

/// Collapses whitespace runs to single spaces.
pub fn normalize_spaces(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Header line followed by one `Label: value` line per present field, in
/// field order. With `clean_phone` the phone's whitespace runs are collapsed.
pub fn compose(header: &str, submission: &Submission, clean_phone: bool) -> String {
    let mut lines = vec![header.to_string()];
    lines.extend(
        submission
            .present()
            .map(|(field, value)| match field {
                Field::Phone if clean_phone => {
                    format!("{}: {}", field.label(), normalize_spaces(value))
                }
                _ => format!("{}: {}", field.label(), value),
            }),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CLINIC;
    use crate::forms::validate::{FormState, Rule};

    #[test]
    fn tel_href_strips_whitespace() {
        assert_eq!(tel_href("+91 98733 73281"), "tel:+919873373281");
        assert_eq!(tel_href(" 011\t2345 6789 "), "tel:01123456789");
    }

    #[test]
    fn whatsapp_url_encodes_the_message() {
        let url = whatsapp_url("919873373281", "Hello there\nName: A&B");
        assert_eq!(url, "https://wa.me/919873373281?text=Hello%20there%0AName%3A%20A%26B");
    }

    #[test]
    fn chat_url_has_no_query() {
        assert_eq!(chat_url(CLINIC.whatsapp), "https://wa.me/919873373281");
    }

    #[test]
    fn map_url_encodes_address() {
        let url = map_embed_url("25 RAJ NAGAR, DELHI");
        assert_eq!(url, "https://www.google.com/maps?q=25%20RAJ%20NAGAR%2C%20DELHI&output=embed");
    }

    #[test]
    fn service_enquiry_names_service_and_clinic() {
        let url = service_enquiry_url(&CLINIC, "Dental Implants");
        let text = url.split("?text=").nth(1).unwrap();
        let decoded = urlencoding::decode(text).unwrap();
        assert_eq!(
            decoded,
            "Hi, I\u{2019}d like to know more about Dental Implants at Bhasin Dental Clinic. Please share the next steps."
        );
    }

    #[test]
    fn compose_keeps_field_order_and_normalises_phone() {
        let mut form = FormState::new(&[
            (Field::Message, Rule::Free),
            (Field::Phone, Rule::Free),
            (Field::Name, Rule::Free),
        ]);
        form.set(Field::Message, "See you soon");
        form.set(Field::Phone, "+91  98733   73281");
        form.set(Field::Name, "Jordan Lee");

        let text = compose("Appointment request", &form.submission(), true);
        assert_eq!(
            text,
            "Appointment request\nName: Jordan Lee\nPhone: +91 98733 73281\nMessage: See you soon"
        );
        let raw = compose("Appointment request", &form.submission(), false);
        assert!(raw.contains("Phone: +91  98733   73281"));
    }
}
