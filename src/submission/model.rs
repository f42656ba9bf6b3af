//! The registry form payload and its validation rules.

use lazy_regex::regex_is_match;
use serde::Deserialize;
use serde_json::Value;

use super::error::ValidationError;

/// Form submission as posted by the registry front-end.
///
/// Every field is optional at the parsing stage so that absent fields are
/// reported as validation errors rather than parse failures. A field that is
/// present with a non-string value fails parsing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Submission {
    pub title: Option<String>,
    pub maturity: Option<String>,
    pub ministry: Option<String>,
    pub problem: Option<String>,
    pub description: Option<String>,
    pub contact: Option<String>,
    pub tech: Option<String>,
    /// Honeypot. Hidden in the form, so people leave it empty.
    pub website: Option<String>,
}

/// A submission whose required fields are all present and non-blank.
///
/// Values are kept exactly as submitted; trimming only decides blankness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub title: &'a str,
    pub maturity: &'a str,
    pub ministry: &'a str,
    pub problem: &'a str,
    pub description: &'a str,
    pub contact: &'a str,
    pub tech: Option<&'a str>,
}

impl Submission {
    /// Parse a request body.
    ///
    /// Well-formed JSON that is not an object (array, string, number, bool)
    /// has no named fields, so every field reads as absent. Arrays are never
    /// read positionally. `null` and malformed JSON are errors.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        match serde_json::from_slice::<Value>(body)? {
            value @ (Value::Object(_) | Value::Null) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }

    /// Check required fields in form order and borrow them as an `Entry`.
    ///
    /// Reports only the first missing or blank field.
    pub fn validate_required(&self) -> Result<Entry<'_>, ValidationError> {
        fn required<'a>(
            name: &'static str,
            value: &'a Option<String>,
        ) -> Result<&'a str, ValidationError> {
            value
                .as_deref()
                .filter(|v| !is_blank(v))
                .ok_or(ValidationError::MissingField(name))
        }

        Ok(Entry {
            title: required("title", &self.title)?,
            maturity: required("maturity", &self.maturity)?,
            ministry: required("ministry", &self.ministry)?,
            problem: required("problem", &self.problem)?,
            description: required("description", &self.description)?,
            contact: required("contact", &self.contact)?,
            tech: self.tech.as_deref(),
        })
    }

    /// Whether the honeypot field was filled in, i.e. a bot sent this.
    pub fn is_honeypot_filled(&self) -> bool {
        self.website.as_deref().is_some_and(|w| !w.is_empty())
    }
}

impl Entry<'_> {
    /// Loose `local@domain.tld` shape check. No RFC parsing, no DNS.
    pub fn validate_contact(&self) -> Result<(), ValidationError> {
        if is_email_shaped(self.contact) {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

/// Blank after trimming whitespace and byte order marks.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

fn is_email_shaped(value: &str) -> bool {
    regex_is_match!(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", value)
}
