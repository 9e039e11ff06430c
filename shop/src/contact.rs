use std::sync::LazyLock;

use regex::Regex;

// rejection copy lives next to the rules it describes so the page and the
// tests share one source of truth
pub const FIRST_NAME_MESSAGE: &str = "Please enter a valid first name (at least 2 letters, only letters, spaces, hyphens, and apostrophes allowed).";
pub const LAST_NAME_MESSAGE: &str = "Please enter a valid last name (at least 2 letters, only letters, spaces, hyphens, and apostrophes allowed).";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address (e.g., user@example.com).";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number (e.g., (555) 123-4567 or 555-123-4567).";
pub const COMMENTS_MESSAGE: &str = "Please tell us how we can help you.";

// two or more letters, then optional space, hyphen, or apostrophe separated
// letter groups
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,}(?:[\s'-][A-Za-z]+)*$").expect("name pattern compiles")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

// ten digits in the usual North American groupings, separators optional
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})$")
        .expect("phone pattern compiles")
});

pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
}

impl ContactMethod {
    pub fn label(self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::Phone => "Phone",
        }
    }
}

impl From<String> for ContactMethod {
    fn from(string: String) -> ContactMethod {
        match string.as_str() {
            "Phone" | "phone" => ContactMethod::Phone,
            _ => ContactMethod::Email,
        }
    }
}

impl Into<String> for ContactMethod {
    fn into(self) -> String {
        match self {
            ContactMethod::Email => String::from("email"),
            ContactMethod::Phone => String::from("phone"),
        }
    }
}

// raw field contents exactly as typed into the page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub method: ContactMethod,
    pub email: String,
    pub phone: String,
    pub comments: String,
}

// one slot per field so a single attempt can surface every problem at once
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub comments: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.comments.is_none()
    }
}

// a validated, trimmed submission
//
// only the channel the visitor picked is carried; the other one is left empty
// no matter what was typed into its field
#[derive(Clone, Debug, PartialEq)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub method: ContactMethod,
    pub email: String,
    pub phone: String,
    pub comments: String,
}

impl ContactSubmission {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn contact_value(&self) -> &str {
        match self.method {
            ContactMethod::Email => &self.email,
            ContactMethod::Phone => &self.phone,
        }
    }
}

pub fn validate(form: &ContactForm) -> Result<ContactSubmission, FieldErrors> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();
    let comments = form.comments.trim();

    let mut errors = FieldErrors::default();

    if !is_valid_name(first_name) {
        errors.first_name = Some(FIRST_NAME_MESSAGE);
    }

    if !is_valid_name(last_name) {
        errors.last_name = Some(LAST_NAME_MESSAGE);
    }

    // the inactive channel is not validated, even if something was typed there
    match form.method {
        ContactMethod::Email => {
            if !is_valid_email(email) {
                errors.email = Some(EMAIL_MESSAGE);
            }
        }
        ContactMethod::Phone => {
            if !is_valid_phone(phone) {
                errors.phone = Some(PHONE_MESSAGE);
            }
        }
    }

    if comments.is_empty() {
        errors.comments = Some(COMMENTS_MESSAGE);
    }

    if !errors.is_clean() {
        return Err(errors);
    }

    Ok(ContactSubmission {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        method: form.method,
        email: match form.method {
            ContactMethod::Email => email.to_string(),
            ContactMethod::Phone => String::new(),
        },
        phone: match form.method {
            ContactMethod::Phone => phone.to_string(),
            ContactMethod::Email => String::new(),
        },
        comments: comments.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            first_name: String::from("Ramona"),
            last_name: String::from("Flowers"),
            method: ContactMethod::Email,
            email: String::from("ramona@example.com"),
            phone: String::new(),
            comments: String::from("Do you buy used collections?"),
        }
    }

    #[test]
    fn two_letter_names_pass() {
        assert!(is_valid_name("Jo"));
        assert!(is_valid_name("Li"));
    }

    #[test]
    fn separated_name_groups_pass() {
        assert!(is_valid_name("Mary Jane"));
        assert!(is_valid_name("Jean-Luc"));
        assert!(is_valid_name("Di'Marco"));
    }

    #[test]
    fn short_or_nonalphabetic_names_fail() {
        assert!(!is_valid_name("J"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("J0e"));
        assert!(!is_valid_name("Anne  Marie"));
    }

    #[test]
    fn leading_separator_needs_two_letters_first() {
        // the first group carries the two letter minimum
        assert!(!is_valid_name("O'Brien"));
        assert!(is_valid_name("Obi'Wan"));
    }

    #[test]
    fn plausible_emails_pass() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("dj.crate-digger_77@groove-haven.shop"));
    }

    #[test]
    fn malformed_emails_fail() {
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user.example.com"));
        assert!(!is_valid_email("user@host"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn common_phone_groupings_pass() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("555.123.4567"));
        assert!(is_valid_phone("5551234567"));
    }

    #[test]
    fn wrong_digit_counts_fail() {
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("555-12"));
        assert!(!is_valid_phone("(555) 123-45678"));
        assert!(!is_valid_phone("call me"));
    }

    #[test]
    fn method_round_trips_through_storage_form() {
        for method in [ContactMethod::Email, ContactMethod::Phone] {
            let stored: String = method.into();
            assert_eq!(ContactMethod::from(stored), method);
        }
    }

    #[test]
    fn unknown_method_string_defaults_to_email() {
        assert_eq!(ContactMethod::from(String::from("carrier pigeon")), ContactMethod::Email);
    }

    #[test]
    fn clean_form_is_accepted() {
        let submission = validate(&filled_form()).unwrap();

        assert_eq!(submission.full_name(), "Ramona Flowers");
        assert_eq!(submission.method, ContactMethod::Email);
        assert_eq!(submission.contact_value(), "ramona@example.com");
        assert_eq!(submission.comments, "Do you buy used collections?");
    }

    #[test]
    fn fields_are_trimmed_before_checking() {
        let mut form = filled_form();
        form.first_name = String::from("  Jo  ");
        form.email = String::from(" jo@example.com ");

        let submission = validate(&form).unwrap();

        assert_eq!(submission.first_name, "Jo");
        assert_eq!(submission.email, "jo@example.com");
    }

    #[test]
    fn inactive_channel_is_ignored_and_emptied() {
        let mut form = filled_form();
        form.method = ContactMethod::Phone;
        form.phone = String::from("555-123-4567");
        form.email = String::from("not an address at all");

        let submission = validate(&form).unwrap();

        assert_eq!(submission.contact_value(), "555-123-4567");
        assert_eq!(submission.email, "");
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&ContactForm::default()).unwrap_err();

        assert_eq!(errors.first_name, Some(FIRST_NAME_MESSAGE));
        assert_eq!(errors.last_name, Some(LAST_NAME_MESSAGE));
        assert_eq!(errors.email, Some(EMAIL_MESSAGE));
        assert_eq!(errors.phone, None);
        assert_eq!(errors.comments, Some(COMMENTS_MESSAGE));
    }

    #[test]
    fn short_phone_marks_only_the_phone_field() {
        let mut form = filled_form();
        form.method = ContactMethod::Phone;
        form.phone = String::from("555-12");

        let errors = validate(&form).unwrap_err();

        assert_eq!(errors.phone, Some(PHONE_MESSAGE));
        assert_eq!(errors.first_name, None);
        assert_eq!(errors.last_name, None);
        assert_eq!(errors.email, None);
        assert_eq!(errors.comments, None);
        assert!(!errors.is_clean());
    }

    #[test]
    fn whitespace_comments_count_as_empty() {
        let mut form = filled_form();
        form.comments = String::from("   ");

        let errors = validate(&form).unwrap_err();

        assert_eq!(errors.comments, Some(COMMENTS_MESSAGE));
    }
}
