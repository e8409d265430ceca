use std::{fmt, time::Duration};

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex_lite::Regex;
use thiserror::Error;
use tracing::warn;
use url::Url;

/// Simulated hand-off latency before the deep link opens.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1_000);
pub const SUBMIT_LABEL: &str = "Send Message";
pub const PENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Message prepared! WhatsApp should open shortly.";

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Characters `encodeURIComponent` leaves alone; everything else is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static EMAIL_SHAPE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map_err(|error| warn!(%error, "email pattern failed to compile, every address will be rejected"))
        .ok()
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("field `{0}` is empty")]
    MissingField(Field),
    #[error("email address is malformed")]
    InvalidEmail,
    #[error("could not build the WhatsApp link: {0}")]
    Link(#[from] url::ParseError),
}

impl FormError {
    /// Text shown to the visitor in an error toast.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "Please fill in all fields.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::Link(_) => "Could not prepare your message. Please try again.",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE
        .as_ref()
        .map(|shape| shape.is_match(email))
        .unwrap_or(false)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
        {
            return Err(FormError::MissingField(field));
        }

        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(())
    }

    /// Message body pre-filled into the chat.
    pub fn body(&self, owner: &str) -> String {
        format!(
            "Hello {owner},\n\nI would like to get in touch.\n\nName: {}\nEmail: {}\nSubject: {}\nMessage: {}",
            self.name, self.email, self.subject, self.message
        )
    }

    /// `https://wa.me/<number>?text=<body>` with the whole body percent-encoded.
    pub fn deep_link(&self, whatsapp_number: &str, owner: &str) -> Result<Url, FormError> {
        self.validate()?;
        let mut link = Url::parse(WHATSAPP_BASE)?.join(whatsapp_number)?;
        let body = utf8_percent_encode(&self.body(owner), URI_COMPONENT).to_string();
        link.set_query(Some(&format!("text={body}")));
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "foo@bar.com".to_string(),
            subject: "Hiring & such".to_string(),
            message: "Let's talk?\nSoon.".to_string(),
        }
    }

    #[test]
    fn email_shape_matches_the_permissive_pattern() {
        assert!(is_valid_email("foo@bar.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("foo bar@baz.com"));
        assert!(!is_valid_email("foo@@bar.com"));
        assert!(!is_valid_email("@bar.com"));
        assert!(!is_valid_email("foo@bar."));
    }

    #[test]
    fn email_without_dot_is_rejected() {
        let mut form = filled();
        form.email = "foo@bar".to_string();

        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
        assert_eq!(
            form.validate().map_err(|err| err.user_message()),
            Err("Please enter a valid email address.")
        );
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL_SHAPE.is_some());
    }

    #[test]
    fn email_with_surrounding_spaces_is_rejected() {
        let mut form = filled();
        form.email = " foo@bar.com ".to_string();

        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
        assert_eq!(
            form.deep_link("917020685839", "Shiven"),
            Err(FormError::InvalidEmail)
        );
    }

    #[test]
    fn plus_signs_in_text_stay_distinct_from_spaces() {
        let mut form = filled();
        form.message = "C++ and Rust".to_string();
        let link = form.deep_link("917020685839", "Shiven").expect("valid form");

        assert!(link.as_str().contains("C%2B%2B%20and%20Rust"));
        let (_, text) = link.query_pairs().next().expect("text parameter");
        assert!(text.ends_with("Message: C++ and Rust"));
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let mut form = filled();
        form.subject = "   ".to_string();

        assert_eq!(form.validate(), Err(FormError::MissingField(Field::Subject)));
    }

    #[test]
    fn deep_link_carries_every_field_encoded() {
        let form = filled();
        let link = form.deep_link("917020685839", "Shiven").expect("valid form");

        assert_eq!(link.host_str(), Some("wa.me"));
        assert_eq!(link.path(), "/917020685839");
        assert!(!link.as_str().contains(' '));
        assert!(!link.as_str().contains('\n'));
        assert!(link.as_str().contains("%0A"));
        assert!(link.as_str().contains("Ada%20Lovelace"));
        assert!(link.as_str().contains("Hiring%20%26%20such"));
        assert!(!link.as_str().contains('+'));

        let (key, text) = link.query_pairs().next().expect("text parameter");
        assert_eq!(key, "text");
        assert_eq!(text, form.body("Shiven"));
        for field in Field::ALL {
            assert!(text.contains(form.field(field)));
        }
    }

    proptest! {
        #[test]
        fn any_empty_field_blocks_the_link(index in 0usize..4) {
            let mut form = filled();
            form.set(Field::ALL[index], String::new());

            prop_assert_eq!(
                form.deep_link("917020685839", "Shiven"),
                Err(FormError::MissingField(Field::ALL[index]))
            );
        }
    }
}
