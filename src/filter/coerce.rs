//! Conversion of directive fields into typed parameter values.
//!
//! Numbers use Rust's locale-independent parsers, so `0.5` means the same thing on
//! every machine. Surrounding whitespace is tolerated; anything else malformed fails.

use super::error::DirectiveError;
use super::parameter::{ModificationType, ParameterValue, ValueKind};

/// A scalar a parameter can hold.
pub trait ScalarValue: Copy + PartialOrd + std::fmt::Debug {
    const KIND: ValueKind;
    /// Lower bound used when `#param` omits `min`.
    const MIN: Self;
    /// Upper bound used when `#param` omits `max`.
    const MAX: Self;
    /// Default used when `#param` omits `default`.
    const ZERO: Self;

    fn coerce(field: &str) -> Result<Self, DirectiveError>;

    /// Combine `value` into `current` the way `kind` describes.
    fn modify(current: Self, value: Self, kind: ModificationType) -> Self;

    fn into_value(self) -> ParameterValue;

    fn from_value(value: ParameterValue) -> Option<Self>;

    fn clamp_to(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }
}

fn conversion_error(target: ValueKind, field: &str) -> DirectiveError {
    DirectiveError::Conversion {
        target,
        value: field.to_string(),
    }
}

impl ScalarValue for f32 {
    const KIND: ValueKind = ValueKind::Float;
    const MIN: Self = f32::MIN;
    const MAX: Self = f32::MAX;
    const ZERO: Self = 0.0;

    fn coerce(field: &str) -> Result<Self, DirectiveError> {
        field
            .trim()
            .parse()
            .map_err(|_| conversion_error(Self::KIND, field))
    }

    fn modify(current: Self, value: Self, kind: ModificationType) -> Self {
        match kind {
            ModificationType::Add => current + value,
            ModificationType::Multiply => current * value,
            ModificationType::Set => value,
        }
    }

    fn into_value(self) -> ParameterValue {
        ParameterValue::Float(self)
    }

    fn from_value(value: ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl ScalarValue for i32 {
    const KIND: ValueKind = ValueKind::Int;
    const MIN: Self = i32::MIN;
    const MAX: Self = i32::MAX;
    const ZERO: Self = 0;

    fn coerce(field: &str) -> Result<Self, DirectiveError> {
        field
            .trim()
            .parse()
            .map_err(|_| conversion_error(Self::KIND, field))
    }

    fn modify(current: Self, value: Self, kind: ModificationType) -> Self {
        match kind {
            ModificationType::Add => current.saturating_add(value),
            ModificationType::Multiply => current.saturating_mul(value),
            ModificationType::Set => value,
        }
    }

    fn into_value(self) -> ParameterValue {
        ParameterValue::Int(self)
    }

    fn from_value(value: ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl ScalarValue for bool {
    const KIND: ValueKind = ValueKind::Bool;
    const MIN: Self = false;
    const MAX: Self = true;
    const ZERO: Self = false;

    fn coerce(field: &str) -> Result<Self, DirectiveError> {
        match field.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(conversion_error(Self::KIND, field)),
        }
    }

    // add toggles, multiply masks
    fn modify(current: Self, value: Self, kind: ModificationType) -> Self {
        match kind {
            ModificationType::Add => current ^ value,
            ModificationType::Multiply => current && value,
            ModificationType::Set => value,
        }
    }

    fn into_value(self) -> ParameterValue {
        ParameterValue::Bool(self)
    }

    fn from_value(value: ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

/// Parse an integer field that is not a parameter value (locations, bindings).
pub fn parse_index(field: &'static str, value: &str) -> Result<i32, DirectiveError> {
    value.trim().parse().map_err(|_| DirectiveError::NotANumber {
        field,
        value: value.to_string(),
    })
}
