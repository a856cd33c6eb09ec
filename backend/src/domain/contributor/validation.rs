//! Schema validation of untyped upstream payloads.
//!
//! The payload arrives as a generic JSON value. Validation walks it once,
//! building [`Contributor`] records in upstream order, and stops at the first
//! violation. Keys the schema does not name are ignored, so they never reach
//! the caller.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use super::{
    Company, Contributor, ContributorId, ContributorName, EmailAddress, FieldError, WebsiteUrl,
};

/// First schema violation found in a payload.
///
/// `path` is a JSON path such as `$[3].company.name`. The violation is meant
/// for logs; callers only ever see a generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    path: String,
    reason: FieldError,
}

impl SchemaViolation {
    fn new(path: impl Into<String>, reason: FieldError) -> Self {
        Self {
            path: path.into(),
            reason,
        }
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub fn reason(&self) -> &FieldError {
        &self.reason
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

impl std::error::Error for SchemaViolation {}

/// Validate `payload` as an ordered array of contributors.
///
/// The batch is all-or-nothing: one bad element rejects the lot.
///
/// # Examples
/// ```
/// use bbq_tips::domain::validate_contributors;
/// use serde_json::json;
///
/// let payload = json!([{ "id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz" }]);
/// let contributors = validate_contributors(&payload).expect("valid payload");
/// assert_eq!(contributors.len(), 1);
///
/// let bad = json!([{ "id": 1, "name": "Leanne Graham", "email": "nope" }]);
/// let violation = validate_contributors(&bad).expect_err("bad email");
/// assert_eq!(violation.path(), "$[0].email");
/// ```
pub fn validate_contributors(payload: &Value) -> Result<Vec<Contributor>, SchemaViolation> {
    let Value::Array(items) = payload else {
        return Err(SchemaViolation::new("$", FieldError::ExpectedArray));
    };

    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let path = format!("$[{index}]");
            let contributor = validate_contributor(item, &path)?;
            let id = contributor.id().get();
            if !seen.insert(id) {
                return Err(SchemaViolation::new(
                    format!("{path}.id"),
                    FieldError::DuplicateId { id },
                ));
            }
            Ok(contributor)
        })
        .collect()
}

fn validate_contributor(item: &Value, path: &str) -> Result<Contributor, SchemaViolation> {
    let fields = ObjectFields::new(item, path)?;

    let id = fields.required("id", |value| {
        positive_integer(value).and_then(ContributorId::new)
    })?;
    let name = fields.required("name", |value| ContributorName::new(text(value)?))?;
    let email = fields.required("email", |value| EmailAddress::new(text(value)?))?;

    let mut contributor = Contributor::new(id, name, email);
    if let Some(username) = fields.optional("username", owned_text)? {
        contributor = contributor.with_username(username);
    }
    if let Some(phone) = fields.optional("phone", owned_text)? {
        contributor = contributor.with_phone(phone);
    }
    if let Some(date) = fields.optional("date", coerce_date)? {
        contributor = contributor.with_date(date);
    }
    if let Some(website) = fields.optional("website", |value| WebsiteUrl::new(text(value)?))? {
        contributor = contributor.with_website(website);
    }
    if let Some(value) = fields.get("company") {
        let company = validate_company(value, &fields.child_path("company"))?;
        contributor = contributor.with_company(company);
    }
    Ok(contributor)
}

fn validate_company(value: &Value, path: &str) -> Result<Company, SchemaViolation> {
    let fields = ObjectFields::new(value, path)?;
    let mut company = Company::new(fields.required("name", owned_text)?);
    if let Some(catch_phrase) = fields.optional("catchPhrase", owned_text)? {
        company = company.with_catch_phrase(catch_phrase);
    }
    if let Some(bs) = fields.optional("bs", owned_text)? {
        company = company.with_bs(bs);
    }
    Ok(company)
}

/// Borrowed view of one JSON object together with its path.
struct ObjectFields<'a> {
    object: &'a Map<String, Value>,
    path: &'a str,
}

impl<'a> ObjectFields<'a> {
    fn new(value: &'a Value, path: &'a str) -> Result<Self, SchemaViolation> {
        value
            .as_object()
            .map(|object| Self { object, path })
            .ok_or_else(|| SchemaViolation::new(path, FieldError::ExpectedObject))
    }

    fn child_path(&self, key: &str) -> String {
        format!("{}.{key}", self.path)
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key)
    }

    fn required<T>(
        &self,
        key: &str,
        parse: impl FnOnce(&'a Value) -> Result<T, FieldError>,
    ) -> Result<T, SchemaViolation> {
        let value = self
            .get(key)
            .ok_or_else(|| SchemaViolation::new(self.child_path(key), FieldError::Missing))?;
        parse(value).map_err(|reason| SchemaViolation::new(self.child_path(key), reason))
    }

    // Absent keys are fine; a present `null` still goes through `parse`.
    fn optional<T>(
        &self,
        key: &str,
        parse: impl FnOnce(&'a Value) -> Result<T, FieldError>,
    ) -> Result<Option<T>, SchemaViolation> {
        self.get(key)
            .map(|value| {
                parse(value).map_err(|reason| SchemaViolation::new(self.child_path(key), reason))
            })
            .transpose()
    }
}

// JSON has a single number type, so `1.0` names the same id as `1`.
fn positive_integer(value: &Value) -> Result<u64, FieldError> {
    if let Some(id) = value.as_u64() {
        return Ok(id);
    }
    match value.as_f64() {
        Some(float) if float.fract() == 0.0 && float >= 1.0 && float < u64::MAX as f64 => {
            Ok(float as u64)
        }
        _ => Err(FieldError::ExpectedPositiveInteger),
    }
}

fn text(value: &Value) -> Result<&str, FieldError> {
    value.as_str().ok_or(FieldError::ExpectedString)
}

fn owned_text(value: &Value) -> Result<String, FieldError> {
    text(value).map(str::to_owned)
}

/// Coerce an RFC 3339 string, a `YYYY-MM-DD` string, or epoch milliseconds
/// into a UTC instant.
fn coerce_date(value: &Value) -> Result<DateTime<Utc>, FieldError> {
    match value {
        Value::String(raw) => parse_date_text(raw.trim()),
        Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .ok_or(FieldError::InvalidDate),
        _ => Err(FieldError::InvalidDate),
    }
}

fn parse_date_text(raw: &str) -> Result<DateTime<Utc>, FieldError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or(FieldError::InvalidDate)
}
