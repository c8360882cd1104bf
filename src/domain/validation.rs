use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    RequiredForEmergency {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    WrongLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    RetryBelowMinimum {
        min: i64,
        actual: i64,
    },
    ExpireAboveMaximum {
        max: i64,
        actual: i64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::RequiredForEmergency { field } => {
                write!(f, "{field} is required for emergency priority")
            }
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} too long: {actual} characters (max {max})")
            }
            Self::WrongLength {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{field} must be exactly {expected} characters (got {actual})"
                )
            }
            Self::RetryBelowMinimum { min, actual } => {
                write!(f, "retry interval too short: {actual}s (min {min}s)")
            }
            Self::ExpireAboveMaximum { max, actual } => {
                write!(f, "expire interval too long: {actual}s (max {max}s)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
