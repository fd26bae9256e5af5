//! Error types for random draws.

use std::fmt;

/// Invalid-argument failures from [`Random`](crate::Random) operations.
///
/// These indicate caller misuse. No operation degrades silently: a bad
/// argument always yields one of these. Arguments are validated before
/// any draw, so a failed call leaves the generator untouched, with the
/// exception of [`NoCandidates`](RandomError::NoCandidates), which can
/// only be known after sampling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RandomError {
    /// `uniform_int(0)`: the half-open range `[0, 0)` is empty.
    EmptyRange,
    /// `range(lo, hi)` with `hi < lo`.
    InvertedRange {
        /// Lower bound.
        lo: i64,
        /// Upper bound.
        hi: i64,
    },
    /// A probability outside `[0, 1]` (or NaN).
    ProbabilityOutOfRange {
        /// The offending probability, formatted (f64 is not `Eq`).
        value: String,
    },
    /// A choice over an empty sequence.
    EmptySequence,
    /// A weight function returned a negative weight.
    NegativeWeight {
        /// Index of the element with the negative weight.
        index: usize,
        /// The weight returned.
        weight: i64,
    },
    /// Total weight is zero: no element can be selected.
    NoPositiveWeight,
    /// Total weight does not fit in 64 bits.
    WeightOverflow,
    /// `filtered_choice` found no element satisfying the predicate.
    NoCandidates,
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRange => write!(f, "uniform range bound must be positive"),
            Self::InvertedRange { lo, hi } => {
                write!(f, "range upper bound {hi} is below lower bound {lo}")
            }
            Self::ProbabilityOutOfRange { value } => {
                write!(f, "probability {value} is outside [0, 1]")
            }
            Self::EmptySequence => write!(f, "cannot choose from an empty sequence"),
            Self::NegativeWeight { index, weight } => {
                write!(f, "element {index} has negative weight {weight}")
            }
            Self::NoPositiveWeight => write!(f, "total weight must be positive"),
            Self::WeightOverflow => write!(f, "total weight overflows u64"),
            Self::NoCandidates => write!(f, "no element satisfies the filter"),
        }
    }
}

impl std::error::Error for RandomError {}
