//! Contact form fields and their rules.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Loose email shape: `local@domain.tld`, no whitespace, one `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Optional leading `+`, then at least ten digits, spaces or hyphens.
///
/// Ten *characters*, not ten digits: `"+1 2 3 4 5"` passes.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{10,}$").unwrap());

/// The contact form's controls, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

pub(crate) const FIELD_COUNT: usize = 5;

impl FieldName {
    pub const ALL: [FieldName; FIELD_COUNT] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Service,
        FieldName::Message,
    ];

    /// The control's `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::Message => "message",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn rule(self) -> Option<FieldRule> {
        match self {
            Self::Email => Some(FieldRule::Email),
            Self::Phone => Some(FieldRule::Phone),
            _ => None,
        }
    }

    /// A `<select>` has no whitespace to trim; text inputs do.
    pub(crate) fn trims_before_required_check(self) -> bool {
        !matches!(self, Self::Service)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A format check applied after the required check passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Email,
    Phone,
}

impl FieldRule {
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::Email => EMAIL_RE.is_match(value),
            Self::Phone => PHONE_RE.is_match(value),
        }
    }
}

/// One field as read from the live form at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub raw_value: String,
    pub required: bool,
    pub pattern: Option<FieldRule>,
}

impl FormField {
    /// Build a field with the contact form's rules for `name`.
    pub fn read(name: FieldName, raw_value: impl Into<String>) -> Self {
        Self {
            name,
            raw_value: raw_value.into(),
            required: true,
            pattern: name.rule(),
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        if self.name.trims_before_required_check() {
            self.raw_value.trim().is_empty()
        } else {
            self.raw_value.is_empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_validation_order() {
        let names: Vec<&str> = FieldName::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["name", "email", "phone", "service", "message"]);
        for (i, f) in FieldName::ALL.iter().enumerate() {
            assert_eq!(f.index(), i);
        }
    }

    #[test]
    fn parses_attribute_names() {
        assert_eq!("phone".parse::<FieldName>(), Ok(FieldName::Phone));
        assert_eq!(
            "Phone".parse::<FieldName>(),
            Err(UnknownField("Phone".into()))
        );
        assert!("company".parse::<FieldName>().is_err());
    }

    #[test]
    fn only_email_and_phone_have_rules() {
        assert_eq!(FieldName::Email.rule(), Some(FieldRule::Email));
        assert_eq!(FieldName::Phone.rule(), Some(FieldRule::Phone));
        assert_eq!(FieldName::Name.rule(), None);
        assert_eq!(FieldName::Service.rule(), None);
        assert_eq!(FieldName::Message.rule(), None);
    }

    #[test]
    fn email_rule() {
        assert!(FieldRule::Email.matches("user@domain.tld"));
        assert!(FieldRule::Email.matches("a.b+c@sub.example.co.uk"));
        assert!(!FieldRule::Email.matches("user@domain"));
        assert!(!FieldRule::Email.matches("userdomain.tld"));
        assert!(!FieldRule::Email.matches("us er@domain.tld"));
        assert!(!FieldRule::Email.matches("a@b@c.d"));
        assert!(!FieldRule::Email.matches(" user@domain.tld"));
    }

    #[test]
    fn phone_rule_counts_characters_not_digits() {
        assert!(FieldRule::Phone.matches("+1 555-123-4567"));
        assert!(FieldRule::Phone.matches("0123456789"));
        assert!(FieldRule::Phone.matches("1 2 3 4 5 "));
        assert!(FieldRule::Phone.matches("----------"));
        assert!(!FieldRule::Phone.matches("123456789"));
        assert!(!FieldRule::Phone.matches("+123456789"));
        assert!(!FieldRule::Phone.matches("555-CALL-NOW"));
        assert!(!FieldRule::Phone.matches("1+2345678901"));
    }

    #[test]
    fn service_blank_is_exact_emptiness() {
        assert!(FormField::read(FieldName::Service, "").is_blank());
        assert!(!FormField::read(FieldName::Service, "consulting").is_blank());
        assert!(FormField::read(FieldName::Message, " \n\t").is_blank());
    }
}
