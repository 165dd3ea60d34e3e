//! Contact-form body decoding and field defaulting.

use std::collections::HashMap;

/// Honeypot field name. Hidden from humans, so any value means a bot.
pub const HONEYPOT_FIELD: &str = "bot-field";

pub const DEFAULT_NAME: &str = "Anonymous";
pub const DEFAULT_EMAIL: &str = "no-reply@example.com";
pub const DEFAULT_SERVICE: &str = "General Inquiry";

/// A decoded `application/x-www-form-urlencoded` submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    fields: HashMap<String, String>,
}

impl FormSubmission {
    /// Value of a field, if it was submitted.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Non-empty value of a field.
    fn non_empty(&self, field: &str) -> Option<&str> {
        self.get(field).filter(|v| !v.is_empty())
    }

    /// Whether the honeypot field was filled in.
    pub fn is_spam(&self) -> bool {
        self.non_empty(HONEYPOT_FIELD).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Decode a URL-encoded body. Later duplicates overwrite earlier ones.
pub fn parse_form(body: &[u8]) -> FormSubmission {
    url::form_urlencoded::parse(body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Submission fields with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactDetails {
    /// Fill in defaults for missing or empty fields.
    pub fn from_submission(submission: &FormSubmission) -> Self {
        let field = |name: &str, default: &str| {
            submission.non_empty(name).unwrap_or(default).to_string()
        };

        Self {
            name: field("name", DEFAULT_NAME),
            email: field("email", DEFAULT_EMAIL),
            service: field("service", DEFAULT_SERVICE),
            message: field("message", ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes_plus_and_percent() {
        let form = parse_form(b"name=Ada+Lovelace&email=ada%40example.org&message=Hi%21%0Athere");
        assert_eq!(form.get("name"), Some("Ada Lovelace"));
        assert_eq!(form.get("email"), Some("ada@example.org"));
        assert_eq!(form.get("message"), Some("Hi!\nthere"));
        assert_eq!(form.len(), 3);
    }

    #[test]
    fn test_parse_last_value_wins() {
        let form = parse_form(b"service=Design&service=Photography");
        assert_eq!(form.get("service"), Some("Photography"));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_parse_empty_body() {
        let form = parse_form(b"");
        assert!(form.is_empty());
        assert!(!form.is_spam());
    }

    #[test]
    fn test_honeypot_detection() {
        assert!(parse_form(b"name=x&bot-field=gotcha").is_spam());
        assert!(!parse_form(b"name=x&bot-field=").is_spam());
        assert!(!parse_form(b"name=x").is_spam());
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let details = ContactDetails::from_submission(&FormSubmission::default());
        assert_eq!(details.name, DEFAULT_NAME);
        assert_eq!(details.email, DEFAULT_EMAIL);
        assert_eq!(details.service, "General Inquiry");
        assert_eq!(details.message, "");
    }

    #[test]
    fn test_empty_fields_take_defaults() {
        let form = parse_form(b"name=&email=&service=&message=");
        let details = ContactDetails::from_submission(&form);
        assert_eq!(details.name, DEFAULT_NAME);
        assert_eq!(details.email, DEFAULT_EMAIL);
        assert_eq!(details.service, DEFAULT_SERVICE);
        assert_eq!(details.message, "");
    }

    #[test]
    fn test_provided_fields_kept() {
        let form: FormSubmission = [
            ("name", "Grace"),
            ("email", "grace@navy.test"),
            ("service", "Portraits"),
            ("message", "Hello"),
        ]
        .into_iter()
        .collect();

        let details = ContactDetails::from_submission(&form);
        assert_eq!(
            details,
            ContactDetails {
                name: "Grace".into(),
                email: "grace@navy.test".into(),
                service: "Portraits".into(),
                message: "Hello".into(),
            }
        );
    }
}
