use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static STRICT_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+\d][\d\s-]{7,}$").unwrap());
static LOOSE_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+0-9\s-]+$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const EMAIL_MAX: usize = 255;

/// Form fields in message order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Service,
    PreferredDate,
    PreferredTime,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone",
            Field::Email => "Email",
            Field::Service => "Service",
            Field::PreferredDate => "Preferred date",
            Field::PreferredTime => "Preferred time",
            Field::Message => "Message",
        }
    }
}

/// User-facing validation failures. The `Display` text is what appears under
/// the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your name")]
    NameTooShort,
    #[error("Name is too long")]
    NameTooLong,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Phone number is too long")]
    PhoneTooLong,
    #[error("Phone can only contain digits, spaces, + or -")]
    PhoneCharacters,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Email is too long")]
    EmailTooLong,
    #[error("Please select a service")]
    MissingService,
    #[error("Please add a short message")]
    MessageTooShort,
    #[error("Message is too long")]
    MessageTooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneShape {
    /// Leading `+` or digit followed by at least seven digits, spaces or hyphens.
    Strict,
    /// Any mix of digits, spaces, `+` and `-`.
    Loose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Name { max: usize },
    Phone { max: usize, shape: PhoneShape },
    OptionalEmail,
    Choice(&'static [&'static str]),
    OptionalText { max: usize },
    RequiredText { min: usize, max: usize },
    Free,
}

impl Rule {
    /// Checks the trimmed value.
    pub fn check(&self, raw: &str) -> Result<(), FieldError> {
        let value = raw.trim();
        let len = value.chars().count();
        match *self {
            Rule::Name { max } => {
                if len < 2 {
                    Err(FieldError::NameTooShort)
                } else if len > max {
                    Err(FieldError::NameTooLong)
                } else {
                    Ok(())
                }
            }
            Rule::Phone { max, shape } => {
                if len < 8 {
                    return Err(FieldError::InvalidPhone);
                }
                if len > max {
                    return Err(FieldError::PhoneTooLong);
                }
                match shape {
                    PhoneShape::Strict if !STRICT_PHONE.is_match(value) => Err(FieldError::InvalidPhone),
                    PhoneShape::Loose if !LOOSE_PHONE.is_match(value) => Err(FieldError::PhoneCharacters),
                    _ => Ok(()),
                }
            }
            Rule::OptionalEmail => {
                if value.is_empty() {
                    Ok(())
                } else if !EMAIL.is_match(value) {
                    Err(FieldError::InvalidEmail)
                } else if len > EMAIL_MAX {
                    Err(FieldError::EmailTooLong)
                } else {
                    Ok(())
                }
            }
            Rule::Choice(options) => {
                if options.contains(&value) {
                    Ok(())
                } else {
                    Err(FieldError::MissingService)
                }
            }
            Rule::OptionalText { max } => {
                if len > max {
                    Err(FieldError::MessageTooLong)
                } else {
                    Ok(())
                }
            }
            Rule::RequiredText { min, max } => {
                if len < min {
                    Err(FieldError::MessageTooShort)
                } else if len > max {
                    Err(FieldError::MessageTooLong)
                } else {
                    Ok(())
                }
            }
            Rule::Free => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct FieldState {
    value: String,
    initial: String,
    rule: Rule,
    error: Option<FieldError>,
    touched: bool,
}

impl FieldState {
    fn validate(&mut self) -> bool {
        self.error = self.rule.check(&self.value).err();
        self.error.is_none()
    }
}

/// Trimmed field values of a form that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    values: BTreeMap<Field, String>,
}

impl Submission {
    /// `None` for fields that are absent or blank.
    #[cfg(test)]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values
            .get(&field)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Present, non-blank fields in message order.
    pub fn present(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| (*field, value.as_str()))
    }
}

/// Values, rules and inline errors of one form. Errors only appear for
/// fields the user has touched or after a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    fields: BTreeMap<Field, FieldState>,
}

impl FormState {
    pub fn new(schema: &[(Field, Rule)]) -> Self {
        let fields = schema
            .iter()
            .map(|(field, rule)| {
                let state = FieldState {
                    value: String::new(),
                    initial: String::new(),
                    rule: *rule,
                    error: None,
                    touched: false,
                };
                (*field, state)
            })
            .collect();
        Self { fields }
    }

    /// Sets the value a reset returns `field` to.
    pub fn with_initial(mut self, field: Field, value: &str) -> Self {
        if let Some(state) = self.fields.get_mut(&field) {
            state.initial = value.to_string();
            state.value = value.to_string();
        }
        self
    }

    #[cfg(test)]
    pub fn has(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(&field).map(|state| state.value.as_str()).unwrap_or("")
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.fields.get(&field).and_then(|state| state.error.as_ref())
    }

    /// Updates a value on input. Re-validates only fields already touched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if let Some(state) = self.fields.get_mut(&field) {
            state.value = value.into();
            if state.touched {
                state.validate();
            }
        }
    }

    /// Marks the field touched (blur or change) and validates it.
    pub fn touch(&mut self, field: Field) {
        if let Some(state) = self.fields.get_mut(&field) {
            state.touched = true;
            state.validate();
        }
    }

    /// Sets and validates in one go, for programmatic preselection.
    pub fn preselect(&mut self, field: Field, value: &str) {
        self.set(field, value);
        self.touch(field);
    }

    /// Validates every field and reports whether the form may be submitted.
    pub fn validate_all(&mut self) -> bool {
        let mut ok = true;
        for state in self.fields.values_mut() {
            state.touched = true;
            ok &= state.validate();
        }
        ok
    }

    /// Whether a submit would pass, without surfacing any errors.
    pub fn is_submittable(&self) -> bool {
        self.fields.values().all(|state| state.rule.check(&state.value).is_ok())
    }

    pub fn error_count(&self) -> usize {
        self.fields.values().filter(|state| state.error.is_some()).count()
    }

    pub fn submission(&self) -> Submission {
        Submission {
            values: self
                .fields
                .iter()
                .map(|(field, state)| (*field, state.value.trim().to_string()))
                .collect(),
        }
    }

    pub fn reset(&mut self) {
        for state in self.fields.values_mut() {
            state.value = state.initial.clone();
            state.error = None;
            state.touched = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[&str] = &["Preventive Care", "Cosmetic Dentistry"];

    fn schema() -> Vec<(Field, Rule)> {
        vec![
            (Field::Name, Rule::Name { max: 100 }),
            (Field::Phone, Rule::Phone { max: 20, shape: PhoneShape::Strict }),
            (Field::Email, Rule::OptionalEmail),
            (Field::Service, Rule::Choice(OPTIONS)),
            (Field::Message, Rule::OptionalText { max: 1000 }),
        ]
    }

    #[test]
    fn name_length_is_checked_after_trimming() {
        let rule = Rule::Name { max: 80 };
        assert_eq!(rule.check("A"), Err(FieldError::NameTooShort));
        assert_eq!(rule.check("  A  "), Err(FieldError::NameTooShort));
        assert_eq!(rule.check("Jo"), Ok(()));
        assert_eq!(rule.check(&"x".repeat(81)), Err(FieldError::NameTooLong));
    }

    #[test]
    fn strict_phone_shape() {
        let rule = Rule::Phone { max: 20, shape: PhoneShape::Strict };
        assert_eq!(rule.check("+91 98733 73281"), Ok(()));
        assert_eq!(rule.check("9873373281"), Ok(()));
        assert_eq!(rule.check("123"), Err(FieldError::InvalidPhone));
        assert_eq!(rule.check("-9873373281"), Err(FieldError::InvalidPhone));
        assert_eq!(rule.check("98733 7328x"), Err(FieldError::InvalidPhone));
        assert_eq!(rule.check("+91 98733 73281 12345"), Err(FieldError::PhoneTooLong));
    }

    #[test]
    fn loose_phone_shape() {
        let rule = Rule::Phone { max: 18, shape: PhoneShape::Loose };
        assert_eq!(rule.check("-98733-73281"), Ok(()));
        assert_eq!(rule.check("98733 73281 ext"), Err(FieldError::PhoneCharacters));
        assert_eq!(rule.check("+91 98733 73281 123"), Err(FieldError::PhoneTooLong));
    }

    #[test]
    fn email_is_optional_but_shaped() {
        let rule = Rule::OptionalEmail;
        assert_eq!(rule.check(""), Ok(()));
        assert_eq!(rule.check("   "), Ok(()));
        assert_eq!(rule.check("jordan@example.com"), Ok(()));
        assert_eq!(rule.check("jordan@example"), Err(FieldError::InvalidEmail));
        assert_eq!(rule.check("jordan lee@example.com"), Err(FieldError::InvalidEmail));
        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(rule.check(&long), Err(FieldError::EmailTooLong));
    }

    #[test]
    fn service_must_come_from_the_list() {
        let rule = Rule::Choice(OPTIONS);
        assert_eq!(rule.check("Preventive Care"), Ok(()));
        assert_eq!(rule.check(""), Err(FieldError::MissingService));
        assert_eq!(rule.check("Brain surgery"), Err(FieldError::MissingService));
    }

    #[test]
    fn message_rules() {
        assert_eq!(Rule::OptionalText { max: 10 }.check(""), Ok(()));
        assert_eq!(Rule::OptionalText { max: 3 }.check("four"), Err(FieldError::MessageTooLong));
        let required = Rule::RequiredText { min: 10, max: 500 };
        assert_eq!(required.check("Too short"), Err(FieldError::MessageTooShort));
        assert_eq!(required.check("Tooth pain since Monday"), Ok(()));
    }

    #[test]
    fn errors_use_user_facing_text() {
        assert_eq!(FieldError::NameTooShort.to_string(), "Please enter your name");
        assert_eq!(
            FieldError::PhoneCharacters.to_string(),
            "Phone can only contain digits, spaces, + or -"
        );
    }

    #[test]
    fn untouched_fields_show_no_errors_while_typing() {
        let mut form = FormState::new(&schema());
        form.set(Field::Name, "A");
        assert_eq!(form.error(Field::Name), None);

        form.touch(Field::Name);
        assert_eq!(form.error(Field::Name), Some(&FieldError::NameTooShort));

        form.set(Field::Name, "Al");
        assert_eq!(form.error(Field::Name), None);
    }

    #[test]
    fn submit_attempt_surfaces_every_error() {
        let mut form = FormState::new(&schema());
        form.set(Field::Name, "A");
        form.set(Field::Phone, "123");
        assert!(!form.is_submittable());
        assert!(!form.validate_all());
        assert_eq!(form.error(Field::Name), Some(&FieldError::NameTooShort));
        assert_eq!(form.error(Field::Phone), Some(&FieldError::InvalidPhone));
        assert_eq!(form.error(Field::Service), Some(&FieldError::MissingService));
        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.error_count(), 3);
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut form = FormState::new(&schema()).with_initial(Field::Service, "Preventive Care");
        form.set(Field::Name, "Jordan Lee");
        form.preselect(Field::Service, "Cosmetic Dentistry");
        form.validate_all();

        form.reset();
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Service), "Preventive Care");
        assert_eq!(form.error_count(), 0);
    }

    #[test]
    fn submission_trims_and_skips_blanks() {
        let mut form = FormState::new(&schema());
        form.set(Field::Name, "  Jordan Lee ");
        form.set(Field::Email, "   ");
        let submission = form.submission();
        assert_eq!(submission.get(Field::Name), Some("Jordan Lee"));
        assert_eq!(submission.get(Field::Email), None);
        assert_eq!(submission.get(Field::PreferredDate), None);
        let present: Vec<Field> = submission.present().map(|(field, _)| field).collect();
        assert_eq!(present, vec![Field::Name]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut form = FormState::new(&schema());
        assert!(!form.has(Field::PreferredTime));
        form.set(Field::PreferredTime, "10:00");
        assert_eq!(form.value(Field::PreferredTime), "");
    }
}
