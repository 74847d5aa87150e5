use std::fmt;

/// Errors surfaced by polygon construction, sequence access and comparisons.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    /// Constructor argument out of its domain (vertex count below 3, slice step 0).
    InvalidArgument { reason: String },
    /// Non-slice index outside `-len..len`.
    IndexOutOfRange { index: isize, len: usize },
    /// Neither equality nor a vertex-count order relates the two operands.
    UnsupportedComparison,
    /// Aggregate query over a sequence with no elements.
    EmptySequence,
}

impl PolygonError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of length {len}")
            }
            Self::UnsupportedComparison => {
                write!(f, "comparison not supported between these polygons")
            }
            Self::EmptySequence => write!(f, "sequence is empty"),
        }
    }
}

impl std::error::Error for PolygonError {}
