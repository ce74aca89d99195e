use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    ExtentsMismatch,
    InhibitUnsupported,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::ExtentsMismatch => write!(f, "grid extents mismatch"),
            Self::InhibitUnsupported => {
                write!(f, "inhibit grid not supported by this operator")
            }
        }
    }
}

impl std::error::Error for Error {}
