use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Field that failed validation along with the constraint it broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {constraint}")]
pub struct ValidationError {
    pub field: &'static str,
    pub constraint: &'static str,
}

impl ValidationError {
    pub const fn new(field: &'static str, constraint: &'static str) -> Self {
        Self { field, constraint }
    }
}

const NAME_CONSTRAINT: &str =
    "names should only contain alphanumeric characters and spaces, and it should not be blank";
const TITLE_CONSTRAINT: &str =
    "titles should only contain alphanumeric characters and spaces, and it should not be blank";
const PHONE_CONSTRAINT: &str = "phone numbers should only contain digits and be at least 3 long";
const EMAIL_CONSTRAINT: &str =
    "emails should be of the format local-part@domain, and the domain should end in a label \
     of at least 2 characters";
const ADDRESS_CONSTRAINT: &str = "addresses can take any value but should not be blank";
const DESCRIPTION_CONSTRAINT: &str = "descriptions can take any value but should not be blank";
const PROFILE_URL_CONSTRAINT: &str = "profile urls should start with http:// or https://";

fn alnum_words_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[[:alnum:]][[:alnum:] ]*$")
            .expect("alphanumeric words regex must compile")
    })
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{3,}$").expect("phone regex must compile"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^[[:alnum:]]+(?:[+_.\-][[:alnum:]]+)*",
            r"@(?:[[:alnum:]]+(?:-[[:alnum:]]+)*\.)*[[:alnum:]]{2,}(?:-[[:alnum:]]+)*$",
        ))
        .expect("email regex must compile")
    })
}

fn not_blank_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\S").expect("non-blank regex must compile"))
}

fn profile_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https?://\S+$").expect("profile url regex must compile"))
}

macro_rules! text_field {
    ($(#[$meta:meta])* $name:ident, $field:literal, $re:expr, $constraint:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn parse(raw: &str) -> Result<Self, ValidationError> {
                if $re.is_match(raw) {
                    Ok(Self(raw.to_owned()))
                } else {
                    Err(ValidationError::new($field, $constraint))
                }
            }

            pub fn is_valid(raw: &str) -> bool {
                $re.is_match(raw)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

text_field!(
    /// Applicant name. Identity comparisons go through [`Name::same_identity`].
    Name,
    "name",
    alnum_words_re(),
    NAME_CONSTRAINT
);
text_field!(
    /// Position title; the identity key of a position.
    Title,
    "title",
    alnum_words_re(),
    TITLE_CONSTRAINT
);
text_field!(Phone, "phone", phone_re(), PHONE_CONSTRAINT);
text_field!(Email, "email", email_re(), EMAIL_CONSTRAINT);
text_field!(Address, "address", not_blank_re(), ADDRESS_CONSTRAINT);
text_field!(
    Description,
    "description",
    not_blank_re(),
    DESCRIPTION_CONSTRAINT
);

impl Name {
    /// Case-insensitive comparison with whitespace kept significant.
    pub fn same_identity(&self, other: &Name) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

/// Optional public profile link (GitHub or similar).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProfileUrl(Option<String>);

impl ProfileUrl {
    pub const fn none() -> Self {
        Self(None)
    }

    /// Blank input means "no profile"; anything else must look like an http(s) link.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self(None));
        }
        if profile_url_re().is_match(trimmed) {
            Ok(Self(Some(trimmed.to_owned())))
        } else {
            Err(ValidationError::new("profile url", PROFILE_URL_CONSTRAINT))
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Display for ProfileUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or(""))
    }
}

/// Where an applicant stands on the position they applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Pending, Self::Accepted, Self::Rejected]
    }

    /// Stable upper-case name used by storage.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::ordered()
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(raw.trim()))
            .ok_or(ValidationError::new(
                "application status",
                "status should be one of PENDING, ACCEPTED or REJECTED",
            ))
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a position is still taking applicants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionStatus {
    #[default]
    Open,
    Closed,
}

impl PositionStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        [Self::Open, Self::Closed]
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(raw.trim()))
            .ok_or(ValidationError::new(
                "position status",
                "status should be either OPEN or CLOSED",
            ))
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
