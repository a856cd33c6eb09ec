//! Contributor record re-exposed by the validating proxy.
//!
//! Every `Contributor` in circulation has passed the full schema: the field
//! newtypes below can only be built through their validating constructors,
//! and batches are assembled by [`validate_contributors`], which rejects the
//! whole payload on the first non-conforming element.
//!
//! Records are ephemeral. They are built per request and dropped after the
//! response is written.

mod validation;

pub use validation::{SchemaViolation, validate_contributors};

use std::fmt;
use std::num::NonZeroU64;
use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Serialize, Serializer};
use url::Url;

/// Reasons a single field fails the contributor schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("required field is missing")]
    Missing,
    #[error("expected an array")]
    ExpectedArray,
    #[error("expected an object")]
    ExpectedObject,
    #[error("expected a string")]
    ExpectedString,
    #[error("expected a positive integer")]
    ExpectedPositiveInteger,
    #[error("must not be empty")]
    EmptyText,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("invalid absolute URL")]
    InvalidUrl,
    #[error("value cannot be coerced to a date")]
    InvalidDate,
    #[error("duplicate contributor id {id}")]
    DuplicateId { id: u64 },
}

/// Unique positive contributor identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContributorId(NonZeroU64);

impl ContributorId {
    /// Validate and wrap a raw identifier.
    ///
    /// # Examples
    /// ```
    /// use bbq_tips::domain::ContributorId;
    ///
    /// assert_eq!(ContributorId::new(7).map(|id| id.get()), Ok(7));
    /// assert!(ContributorId::new(0).is_err());
    /// ```
    pub fn new(raw: u64) -> Result<Self, FieldError> {
        NonZeroU64::new(raw)
            .map(Self)
            .ok_or(FieldError::ExpectedPositiveInteger)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ContributorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContributorName(String);

impl ContributorName {
    pub fn new(name: impl Into<String>) -> Result<Self, FieldError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FieldError::EmptyText);
        }
        Ok(Self(name))
    }

    /// First character of the name, used as the avatar glyph.
    pub fn initial(&self) -> Option<char> {
        self.0.chars().next()
    }
}

impl AsRef<str> for ContributorName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Leading dots and consecutive dots are rejected separately; the
        // regex crate has no lookahead. Classes are ASCII-only; Unicode case
        // folding would admit U+212A KELVIN SIGN.
        let pattern = r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate an email address.
    ///
    /// # Examples
    /// ```
    /// use bbq_tips::domain::EmailAddress;
    ///
    /// assert!(EmailAddress::new("Sincere@april.biz").is_ok());
    /// assert!(EmailAddress::new("not-an-email").is_err());
    /// ```
    pub fn new(address: impl Into<String>) -> Result<Self, FieldError> {
        let address = address.into();
        if address.starts_with('.') || address.contains("..") {
            return Err(FieldError::InvalidEmail);
        }
        if !email_regex().is_match(&address) {
            return Err(FieldError::InvalidEmail);
        }
        Ok(Self(address))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Absolute URL, kept in the exact form the upstream supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WebsiteUrl(String);

impl WebsiteUrl {
    /// Validate that `raw` parses as an absolute URL.
    ///
    /// Bare host names such as `example.org` have no scheme and are rejected.
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        Url::parse(&raw).map_err(|_| FieldError::InvalidUrl)?;
        Ok(Self(raw))
    }
}

impl AsRef<str> for WebsiteUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Employer block nested inside a contributor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    catch_phrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bs: Option<String>,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catch_phrase: None,
            bs: None,
        }
    }

    #[must_use]
    pub fn with_catch_phrase(mut self, catch_phrase: impl Into<String>) -> Self {
        self.catch_phrase = Some(catch_phrase.into());
        self
    }

    #[must_use]
    pub fn with_bs(mut self, bs: impl Into<String>) -> Self {
        self.bs = Some(bs.into());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn catch_phrase(&self) -> Option<&str> {
        self.catch_phrase.as_deref()
    }

    pub fn bs(&self) -> Option<&str> {
        self.bs.as_deref()
    }
}

/// Validated contributor record.
///
/// Serialises with camelCase keys and omits absent optional fields; `date`
/// is written as an RFC 3339 UTC timestamp with millisecond precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    id: ContributorId,
    name: ContributorName,
    email: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_instant"
    )]
    date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    website: Option<WebsiteUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<Company>,
}

impl Contributor {
    /// Build a contributor from its required fields.
    ///
    /// # Examples
    /// ```
    /// use bbq_tips::domain::{Contributor, ContributorId, ContributorName, EmailAddress};
    ///
    /// let contributor = Contributor::new(
    ///     ContributorId::new(1).expect("positive id"),
    ///     ContributorName::new("Leanne Graham").expect("non-empty name"),
    ///     EmailAddress::new("Sincere@april.biz").expect("valid email"),
    /// )
    /// .with_username("Bret");
    /// assert_eq!(contributor.username(), Some("Bret"));
    /// ```
    pub fn new(id: ContributorId, name: ContributorName, email: EmailAddress) -> Self {
        Self {
            id,
            name,
            email,
            username: None,
            phone: None,
            date: None,
            website: None,
            company: None,
        }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn with_website(mut self, website: WebsiteUrl) -> Self {
        self.website = Some(website);
        self
    }

    #[must_use]
    pub fn with_company(mut self, company: Company) -> Self {
        self.company = Some(company);
        self
    }

    pub fn id(&self) -> ContributorId {
        self.id
    }

    pub fn name(&self) -> &ContributorName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    pub fn website(&self) -> Option<&WebsiteUrl> {
        self.website.as_ref()
    }

    pub fn company(&self) -> Option<&Company> {
        self.company.as_ref()
    }
}

fn serialize_instant<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(instant) => {
            serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        None => serializer.serialize_none(),
    }
}
