//! @acp:module "Numeric Coercion"
//! @acp:summary "Turn raw field text into non-negative scalars without failing mid-typing"
//! @acp:domain estimate
//! @acp:layer utility

use serde::{Deserialize, Serialize};

use crate::error::{RenoError, Result};

/// Largest accepted scalar. Keeps every cost product finite.
pub const MAX_QUANTITY: f64 = 1.0e9;

/// What to do with a negative number typed into a scalar field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativePolicy {
    /// Replace with zero and report an input issue
    #[default]
    Clamp,
    /// Refuse the input with [`RenoError::NegativeInput`]
    Reject,
}

/// Kind of recoverable problem found while coercing a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Text was not a number; treated as zero
    InvalidNumericInput,
    /// Number was negative; clamped to zero
    NegativeClamped,
    /// Number was above [`MAX_QUANTITY`]; treated as zero
    OutOfRange,
}

/// @acp:summary "A coercion event reported alongside an estimate"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputIssue {
    pub field: String,
    pub raw: String,
    pub kind: IssueKind,
}

impl std::fmt::Display for InputIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            IssueKind::InvalidNumericInput => {
                write!(f, "{}: {:?} is not a number, using 0", self.field, self.raw)
            }
            IssueKind::NegativeClamped => {
                write!(f, "{}: {:?} is negative, using 0", self.field, self.raw)
            }
            IssueKind::OutOfRange => {
                write!(f, "{}: {:?} is too large, using 0", self.field, self.raw)
            }
        }
    }
}

/// @acp:summary "Finite, non-negative scalar no larger than MAX_QUANTITY"
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Quantity(f64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0.0);

    /// Accepts only values in `0..=MAX_QUANTITY`
    pub fn new(value: f64) -> Option<Self> {
        (0.0..=MAX_QUANTITY).contains(&value).then_some(Quantity(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl TryFrom<f64> for Quantity {
    type Error = String;

    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        Quantity::new(value)
            .ok_or_else(|| format!("{} is not a number between 0 and {}", value, MAX_QUANTITY))
    }
}

impl From<Quantity> for f64 {
    fn from(q: Quantity) -> f64 {
        q.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse field text as a number. Blank or malformed text yields `None`.
/// A comma is accepted as decimal separator (`12,5`).
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };
    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Coerce text to a [`Quantity`], recording any issue in `issues`.
///
/// Blank text is zero with no issue, matching an untouched field.
pub fn coerce_quantity(
    field: &str,
    raw: &str,
    policy: NegativePolicy,
    issues: &mut Vec<InputIssue>,
) -> Result<Quantity> {
    if raw.trim().is_empty() {
        return Ok(Quantity::ZERO);
    }
    let Some(value) = parse_number(raw) else {
        tracing::debug!("Non-numeric input for {}: {:?}", field, raw);
        issues.push(issue(field, raw, IssueKind::InvalidNumericInput));
        return Ok(Quantity::ZERO);
    };
    if value < 0.0 {
        return match policy {
            NegativePolicy::Clamp => {
                tracing::debug!("Negative input for {} clamped to 0: {}", field, value);
                issues.push(issue(field, raw, IssueKind::NegativeClamped));
                Ok(Quantity::ZERO)
            }
            NegativePolicy::Reject => Err(RenoError::NegativeInput {
                field: field.to_string(),
                value,
            }),
        };
    }
    if value > MAX_QUANTITY {
        tracing::debug!("Out-of-range input for {}: {}", field, value);
        issues.push(issue(field, raw, IssueKind::OutOfRange));
        return Ok(Quantity::ZERO);
    }
    // -0.0 parses as negative zero and passes the check above
    Ok(Quantity::new(value.abs()).unwrap_or_default())
}

/// Coerce text to a whole count. Fractional values are not counts.
pub fn coerce_count(
    field: &str,
    raw: &str,
    policy: NegativePolicy,
    issues: &mut Vec<InputIssue>,
) -> Result<u32> {
    let quantity = coerce_quantity(field, raw, policy, issues)?;
    let value = quantity.get();
    if value.fract() != 0.0 {
        tracing::debug!("Non-integer input for {}: {:?}", field, raw);
        issues.push(issue(field, raw, IssueKind::InvalidNumericInput));
        return Ok(0);
    }
    Ok(value as u32)
}

fn issue(field: &str, raw: &str, kind: IssueKind) -> InputIssue {
    InputIssue {
        field: field.to_string(),
        raw: raw.to_string(),
        kind,
    }
}
