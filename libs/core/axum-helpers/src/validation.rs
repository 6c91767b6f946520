//! Declarative request validation.
//!
//! Each operation declares a static table of [`FieldRule`]s. A rule names one
//! field, where it comes from (path or body) and an ordered list of
//! [`Check`]s. [`validate`] runs every rule against the merged request input
//! and either returns the (normalized) input or the full [`ViolationList`].
//!
//! Fields are independent: a failure in one field never prevents the others
//! from being checked. Within a field, checks stop at the first failure since
//! later checks assume the earlier ones held (`GreaterThan` needs a number).
//!
//! ```rust
//! use axum_helpers::validation::{validate, Check, Constraint, FieldRule, Location};
//! use serde_json::json;
//!
//! const RULES: &[FieldRule] = &[FieldRule::body(
//!     "price",
//!     &[
//!         Check::new(Constraint::Numeric, "price must be a number"),
//!         Check::new(Constraint::GreaterThan(0.0), "price must be positive"),
//!     ],
//! )];
//!
//! let input = json!({ "price": -1 });
//! let violations = validate(RULES, input.as_object().unwrap().clone()).unwrap_err();
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations.iter().next().unwrap().message, "price must be positive");
//! ```

use serde::Serialize;
use serde_json::{Map, Number, Value};
use utoipa::ToSchema;
use validator::{ValidateLength, ValidateRange};

/// Where a validated field was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// A single constraint a field value must satisfy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// A string containing at least one non-whitespace character
    NonEmpty,
    /// A string whose length in characters lies in `min..=max`
    Length { min: u64, max: u64 },
    /// A JSON number
    Numeric,
    /// A number strictly greater than the bound
    GreaterThan(f64),
    /// A JSON boolean
    Boolean,
    /// A 32-bit integer, either a JSON number or a decimal string
    Integer,
}

impl Constraint {
    fn holds(&self, value: Option<&Value>) -> bool {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return false;
        };

        match *self {
            Constraint::NonEmpty => value.as_str().is_some_and(|s| !s.trim().is_empty()),
            Constraint::Length { min, max } => value
                .as_str()
                .is_some_and(|s| s.validate_length(Some(min), Some(max), None)),
            Constraint::Numeric => value.as_f64().is_some_and(f64::is_finite),
            Constraint::GreaterThan(bound) => value
                .as_f64()
                .is_some_and(|n| n.validate_range(None, None, Some(bound), None)),
            Constraint::Boolean => value.is_boolean(),
            Constraint::Integer => as_integer(value).is_some(),
        }
    }
}

fn as_integer(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

/// A constraint paired with the message reported when it fails
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Check {
    pub constraint: Constraint,
    pub message: &'static str,
}

impl Check {
    pub const fn new(constraint: Constraint, message: &'static str) -> Self {
        Self {
            constraint,
            message,
        }
    }
}

/// Validation rule for one request field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: &'static str,
    pub location: Location,
    /// Absent (or null) values skip the checks instead of failing them
    pub optional: bool,
    pub checks: &'static [Check],
}

impl FieldRule {
    pub const fn param(field: &'static str, checks: &'static [Check]) -> Self {
        Self {
            field,
            location: Location::Params,
            optional: false,
            checks,
        }
    }

    pub const fn body(field: &'static str, checks: &'static [Check]) -> Self {
        Self {
            field,
            location: Location::Body,
            optional: false,
            checks,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One failed check, as reported to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Violation {
    /// Name of the offending field (`body` when the payload itself is unusable)
    pub field: String,
    pub location: Location,
    /// Human-readable explanation
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, location: Location, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            location,
            message: message.into(),
        }
    }
}

/// Every violation found in one request, in rule order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ViolationList(Vec<Violation>);

impl ViolationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn extend(&mut self, other: ViolationList) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }
}

impl std::fmt::Display for ViolationList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.0.iter().map(|v| v.field.as_str()).collect();
        write!(f, "{} violation(s) on [{}]", self.0.len(), fields.join(", "))
    }
}

impl From<Violation> for ViolationList {
    fn from(violation: Violation) -> Self {
        Self(vec![violation])
    }
}

/// Run `rules` against `input`.
///
/// On success the input is returned as a JSON object, with integer fields
/// that arrived as strings (path parameters) converted to numbers so the
/// result deserializes straight into the typed request.
pub fn validate<'a, I>(rules: I, mut input: Map<String, Value>) -> Result<Value, ViolationList>
where
    I: IntoIterator<Item = &'a FieldRule>,
{
    let mut violations = ViolationList::new();

    for rule in rules {
        let value = input.get(rule.field);

        if rule.optional && value.is_none_or(Value::is_null) {
            continue;
        }

        let failed = rule
            .checks
            .iter()
            .find(|check| !check.constraint.holds(value));

        match failed {
            Some(check) => {
                violations.push(Violation::new(rule.field, rule.location, check.message));
            }
            None => normalize(rule, &mut input),
        }
    }

    if violations.is_empty() {
        Ok(Value::Object(input))
    } else {
        Err(violations)
    }
}

fn normalize(rule: &FieldRule, input: &mut Map<String, Value>) {
    let is_integer = rule
        .checks
        .iter()
        .any(|check| check.constraint == Constraint::Integer);

    if !is_integer {
        return;
    }

    if let Some(value) = input.get_mut(rule.field) {
        if let Some(n) = as_integer(value) {
            *value = Value::Number(Number::from(n));
        }
    }
}
