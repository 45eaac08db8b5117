use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

pub const TWO: ValidPrime = ValidPrime::new(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimeError {
    NotAnInteger(ParseIntError),
    InvalidPrime(u32),
}

impl fmt::Display for PrimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger(s) => write!(f, "Not an integer: {s}"),
            Self::InvalidPrime(p) => write!(f, "{p} is not a valid prime"),
        }
    }
}

impl std::error::Error for PrimeError {}

#[cfg(feature = "odd-primes")]
pub const fn is_prime(p: u32) -> bool {
    if p < 2 {
        return false;
    }
    // (2..).take_while(|k| k * k <= p).all(|k| p % k != 0), but make it const
    let mut k = 2;
    while k * k <= p {
        if p % k == 0 {
            return false;
        }
        k += 1;
    }
    true
}

#[cfg(not(feature = "odd-primes"))]
pub const fn is_prime(p: u32) -> bool {
    p == 2
}

/// A prime number, checked at construction time.
///
/// The bound $p < 2^{31}$ keeps `p` representable as an `i32`, which the callers that do signed
/// degree arithmetic rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidPrime {
    p: u32,
}

impl ValidPrime {
    pub const fn new(p: u32) -> Self {
        assert!(p < (1 << 31), "Tried to construct a prime larger than 2^31");
        assert!(is_prime(p), "Tried to construct a composite dynamic prime");
        Self { p }
    }

    pub const fn as_u32(self) -> u32 {
        self.p
    }

    /// Whether we are working at an odd prime, i.e. whether the dual Steenrod algebra has
    /// exterior generators $\tau_i$.
    pub const fn is_odd(self) -> bool {
        self.p != 2
    }
}

impl PartialEq<u32> for ValidPrime {
    fn eq(&self, other: &u32) -> bool {
        self.p == *other
    }
}

impl TryFrom<u32> for ValidPrime {
    type Error = PrimeError;

    fn try_from(p: u32) -> Result<Self, PrimeError> {
        if p < (1 << 31) && is_prime(p) {
            Ok(Self { p })
        } else {
            Err(PrimeError::InvalidPrime(p))
        }
    }
}

impl FromStr for ValidPrime {
    type Err = PrimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let p: u32 = s.trim().parse().map_err(PrimeError::NotAnInteger)?;
        Self::try_from(p)
    }
}

impl fmt::Display for ValidPrime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        <u32 as fmt::Display>::fmt(&self.p, f)
    }
}

impl Serialize for ValidPrime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.p.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidPrime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let p: u32 = u32::deserialize(deserializer)?;
        Self::try_from(p).map_err(D::Error::custom)
    }
}
