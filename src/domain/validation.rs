use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MessageTooLong { max: usize, actual: usize },
    ExternalReferenceTooLong { max: usize, actual: usize },
    MissingSenderId,
    MissingEnvVar { name: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MessageTooLong { max, actual } => {
                write!(f, "message too long: {actual} characters (max {max})")
            }
            Self::ExternalReferenceTooLong { max, actual } => {
                write!(
                    f,
                    "external reference too long: {actual} characters (max {max})"
                )
            }
            Self::MissingSenderId => write!(
                f,
                "no sender id: pass one with the request or configure a default sender"
            ),
            Self::MissingEnvVar { name } => {
                write!(f, "environment variable {name} is not set")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
