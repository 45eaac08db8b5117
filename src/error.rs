use std::fmt;

use fp::prime::ValidPrime;

pub type Result<T> = std::result::Result<T, SteenrodError>;

/// Everything that can go wrong while turning user input into a basis name or a profile.
///
/// These are all raised at construction time. None of them is transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SteenrodError {
    /// The (lower-cased) name does not denote a basis at this prime.
    InvalidBasis { name: String, p: ValidPrime },
    /// The profile does not define a sub-Hopf algebra.
    InvalidProfile,
    /// The profile has the wrong form for the prime, e.g. a single sequence at an odd prime.
    InvalidProfileShape(String),
}

impl fmt::Display for SteenrodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBasis { name, p } => {
                write!(f, "{name} is not a recognized basis at the prime {p}.")
            }
            Self::InvalidProfile => write!(f, "Invalid profile"),
            Self::InvalidProfileShape(s) => write!(f, "Invalid form for profile: {s}"),
        }
    }
}

impl std::error::Error for SteenrodError {}
