use std::fmt;

/// Error type shared by shape construction and the generation orchestrator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    /// A generation parameter lies outside its documented domain.
    InvalidArgument { reason: String },
    /// Geometry collapsed below a proper polygon (hull < 3 vertices, empty vertex set).
    DegenerateGeometry { reason: String },
}

impl GeneratorError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::DegenerateGeometry { reason } => write!(f, "degenerate geometry: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}
