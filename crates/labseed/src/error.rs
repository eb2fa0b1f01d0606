use std::fmt;

/// Error type shared by all samplers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SampleError {
    /// A bounded draw was asked for an empty or malformed range.
    InvalidRange { reason: String },
    /// A negative subset size was requested.
    InvalidLimit { requested: i64 },
    /// Geofenced sampling hit its attempt cap without an accepted point.
    SamplingExhausted { attempts: u64 },
    /// A single pick was requested from a catalog without items.
    EmptyCatalog,
}

impl SampleError {
    pub(crate) fn range(reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { reason } => write!(f, "invalid range: {reason}"),
            Self::InvalidLimit { requested } => {
                write!(f, "invalid subset limit {requested}: must be >= 0")
            }
            Self::SamplingExhausted { attempts } => write!(
                f,
                "no point inside the region after {attempts} attempts; \
                 check that the bounding box overlaps the region"
            ),
            Self::EmptyCatalog => write!(f, "catalog has no items to pick from"),
        }
    }
}

impl std::error::Error for SampleError {}
