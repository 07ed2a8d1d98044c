use std::path::PathBuf;
use thiserror::Error;

use super::parameter::ValueKind;

/// Failure of a single directive. The loader wraps it with the line it occurred on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectiveError {
    #[error("not enough arguments for {directive} provided (expected {expected}, found {found})")]
    NotEnoughArguments {
        directive: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("unknown {what} '{value}'")]
    UnknownKeyword { what: &'static str, value: String },
    #[error("cannot convert '{value}' to {target}")]
    Conversion { target: ValueKind, value: String },
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
    #[error("texture binding 0 is reserved")]
    ReservedBinding,
    #[error("texture binding {0} was used more than once")]
    DuplicateBinding(i32),
    #[error("could not match '{0}' to any parameter")]
    UnresolvedParameter(String),
    #[error("could not match key '{0}' in keybinding")]
    InvalidKey(String),
}

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("failed to read filter {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{source} at line {line}")]
    Directive {
        line: usize,
        #[source]
        source: DirectiveError,
    },
}

impl FilterError {
    /// 1-based line of the failing directive, if the failure came from one.
    pub fn line(&self) -> Option<usize> {
        match self {
            FilterError::Directive { line, .. } => Some(*line),
            FilterError::Io { .. } => None,
        }
    }

    pub fn directive_error(&self) -> Option<&DirectiveError> {
        match self {
            FilterError::Directive { source, .. } => Some(source),
            FilterError::Io { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_error_is_wrapped_with_line() {
        let err = FilterError::Directive {
            line: 7,
            source: DirectiveError::ReservedBinding,
        };
        assert_eq!(err.to_string(), "texture binding 0 is reserved at line 7");
        assert_eq!(err.line(), Some(7));
        assert_eq!(err.directive_error(), Some(&DirectiveError::ReservedBinding));
    }

    #[test]
    fn unresolved_reference_names_target() {
        let msg = DirectiveError::UnresolvedParameter("angle".into()).to_string();
        assert!(msg.contains("could not match"));
        assert!(msg.contains("angle"));
    }

    #[test]
    fn conversion_names_target_type() {
        let err = DirectiveError::Conversion {
            target: ValueKind::Bool,
            value: "yes".into(),
        };
        assert_eq!(err.to_string(), "cannot convert 'yes' to bool");
    }
}
