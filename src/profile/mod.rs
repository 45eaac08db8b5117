//! Profile functions of sub-Hopf algebras of the Steenrod algebra.
//!
//! At the prime 2, a sub-Hopf algebra is determined by a profile function $e$ from the positive
//! integers to the non-negative integers or $\infty$: the quotient of the dual Steenrod algebra
//! by the ideal generated by $\xi_r^{2^{e(r)}}$. At odd primes there is an additional function
//! $k$ from the non-negative integers to $\{1, 2\}$, and $k(j) = 1$ means that $\tau_j$ is killed.
//!
//! Only finitely many values are ever stored. Past the end of the stored values the profile is
//! constant, equal to the [`TruncationType`].

use std::{fmt, str::FromStr};

use fp::prime::ValidPrime;
use itertools::Itertools;
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

mod normalize;
mod validate;

pub use normalize::{normalize_profile, DEFAULT_PRECISION};
pub use validate::{is_valid_generic, is_valid_mod2, is_valid_profile};

/// A value of a profile function $e$: a non-negative integer or $\infty$.
///
/// The derived ordering puts [`ProfileValue::Infinite`] above every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileValue {
    Finite(u32),
    Infinite,
}

impl ProfileValue {
    pub const ZERO: Self = Self::Finite(0);

    /// `self - i`, clamped at zero. $\infty - i = \infty$.
    pub fn saturating_sub(self, i: u32) -> Self {
        match self {
            Self::Finite(n) => Self::Finite(n.saturating_sub(i)),
            Self::Infinite => Self::Infinite,
        }
    }

    pub fn is_infinite(self) -> bool {
        self == Self::Infinite
    }

    /// Whether `self > j`.
    pub fn exceeds(self, j: u32) -> bool {
        self > Self::Finite(j)
    }
}

impl From<u32> for ProfileValue {
    fn from(n: u32) -> Self {
        Self::Finite(n)
    }
}

/// Negative values are clamped to zero.
impl From<i64> for ProfileValue {
    fn from(n: i64) -> Self {
        Self::Finite(n.clamp(0, u32::MAX as i64) as u32)
    }
}

/// Negative values are clamped to zero.
impl From<i32> for ProfileValue {
    fn from(n: i32) -> Self {
        Self::from(n as i64)
    }
}

impl fmt::Display for ProfileValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{n}"),
            Self::Infinite => write!(f, "+Infinity"),
        }
    }
}

/// Either a number or a spelling of infinity
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(i64),
    Name(String),
}

fn is_infinity_name(s: &str) -> bool {
    matches!(
        s.to_lowercase().as_str(),
        "infinity" | "+infinity" | "inf" | "+inf"
    )
}

impl Serialize for ProfileValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Finite(n) => n.serialize(serializer),
            Self::Infinite => "infinity".serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ProfileValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawValue::deserialize(deserializer)? {
            RawValue::Number(n) => Ok(Self::from(n)),
            RawValue::Name(s) if is_infinity_name(&s) => Ok(Self::Infinite),
            RawValue::Name(s) => Err(D::Error::custom(format!(
                "Invalid profile value: {s}"
            ))),
        }
    }
}

/// The value a profile function takes past its explicitly stored entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruncationType {
    Zero,
    Infinite,
}

impl TruncationType {
    pub fn value(self) -> ProfileValue {
        match self {
            Self::Zero => ProfileValue::ZERO,
            Self::Infinite => ProfileValue::Infinite,
        }
    }

    /// The value the auxiliary function $k$ takes past its stored entries. Trailing entries equal
    /// to this are redundant.
    pub fn k_value(self) -> u32 {
        match self {
            Self::Zero => 1,
            Self::Infinite => 2,
        }
    }
}

impl fmt::Display for TruncationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

impl Serialize for TruncationType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TruncationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match ProfileValue::deserialize(deserializer)? {
            ProfileValue::Finite(0) => Ok(Self::Zero),
            ProfileValue::Infinite => Ok(Self::Infinite),
            ProfileValue::Finite(n) => Err(D::Error::custom(format!(
                "Truncation type must be 0 or infinity, not {n}"
            ))),
        }
    }
}

/// The truncation type as supplied by a user. `Auto` lets the normalizer pick: zero for explicit
/// sequences, infinity for functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TruncationSpec {
    #[default]
    Auto,
    Zero,
    Infinite,
}

impl TruncationSpec {
    pub fn resolve(self, default: TruncationType) -> TruncationType {
        match self {
            Self::Auto => default,
            Self::Zero => TruncationType::Zero,
            Self::Infinite => TruncationType::Infinite,
        }
    }
}

impl From<TruncationType> for TruncationSpec {
    fn from(t: TruncationType) -> Self {
        match t {
            TruncationType::Zero => Self::Zero,
            TruncationType::Infinite => Self::Infinite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTruncationType(String);

impl fmt::Display for InvalidTruncationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid truncation type: {}", self.0)
    }
}

impl std::error::Error for InvalidTruncationType {}

impl FromStr for TruncationSpec {
    type Err = InvalidTruncationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "zero" | "0" => Ok(Self::Zero),
            x if is_infinity_name(x) => Ok(Self::Infinite),
            _ => Err(InvalidTruncationType(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for TruncationSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawValue::deserialize(deserializer)? {
            RawValue::Number(0) => Ok(Self::Zero),
            RawValue::Number(n) => Err(D::Error::custom(InvalidTruncationType(n.to_string()))),
            RawValue::Name(s) => s.parse().map_err(D::Error::custom),
        }
    }
}

/// A finite sequence, either listed or sampled from a function.
pub enum Sequence<'a, T> {
    Explicit(Vec<T>),
    Generator(Box<dyn Fn(u32) -> T + 'a>),
}

impl<'a, T: 'a> Sequence<'a, T> {
    pub fn explicit<V: Into<T>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::Explicit(values.into_iter().map(Into::into).collect())
    }

    pub fn function<V: Into<T> + 'a>(f: impl Fn(u32) -> V + 'a) -> Self {
        Self::Generator(Box::new(move |n| f(n).into()))
    }

    /// Evaluate the sequence at every point of `domain`. Explicit sequences are returned as is.
    pub(crate) fn sample(self, domain: std::ops::Range<u32>) -> Vec<T> {
        match self {
            Self::Explicit(v) => v,
            Self::Generator(f) => domain.map(f).collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Explicit(v) => f.debug_tuple("Explicit").field(v).finish(),
            Self::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

/// A profile function as supplied by a user, before normalization.
#[derive(Debug)]
pub enum ProfileInput<'a> {
    /// The profile of the whole Steenrod algebra.
    Full,
    /// The profile $e$ at the prime 2.
    Mod2(Sequence<'a, ProfileValue>),
    /// The pair $(e, k)$ at an odd prime.
    Generic {
        e: Sequence<'a, ProfileValue>,
        k: Sequence<'a, u32>,
    },
}

impl<'a> ProfileInput<'a> {
    pub fn explicit<V: Into<ProfileValue>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::Mod2(Sequence::explicit(values))
    }

    /// A profile sampled from a function on the positive integers. Negative values are clamped to
    /// zero.
    pub fn function<V: Into<ProfileValue> + 'a>(f: impl Fn(u32) -> V + 'a) -> Self {
        Self::Mod2(Sequence::function(f))
    }

    pub fn generic(e: Sequence<'a, ProfileValue>, k: Sequence<'a, u32>) -> Self {
        Self::Generic { e, k }
    }
}

/// The stored values of a profile function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Profile {
    Mod2(Vec<ProfileValue>),
    Generic { e: Vec<ProfileValue>, k: Vec<u32> },
}

impl Profile {
    pub fn e(&self) -> &[ProfileValue] {
        match self {
            Self::Mod2(e) => e,
            Self::Generic { e, .. } => e,
        }
    }

    pub fn k(&self) -> Option<&[u32]> {
        match self {
            Self::Mod2(_) => None,
            Self::Generic { k, .. } => Some(k),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Mod2(e) => write!(f, "[{}]", e.iter().format(", ")),
            Self::Generic { e, k } => write!(
                f,
                "([{}], [{}])",
                e.iter().format(", "),
                k.iter().format(", ")
            ),
        }
    }
}

/// A validated profile in canonical form.
///
/// Canonical means that no trailing entry of $e$ equals the truncation value when the truncation
/// type is zero, and no trailing entry of $k$ equals [`TruncationType::k_value`]. Equal
/// normalized profiles describe the same sub-Hopf algebra, so this can be used as a cache key.
/// The converse fails when the truncation type is infinity: entries sampled from a function are
/// kept, so `[+Infinity, +Infinity]` and `[]` both describe the whole algebra.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedProfile {
    pub profile: Profile,
    pub truncation_type: TruncationType,
}

impl NormalizedProfile {
    /// The profile of the whole Steenrod algebra at `p`.
    pub fn full(p: ValidPrime) -> Self {
        let profile = if p.is_odd() {
            Profile::Generic {
                e: Vec::new(),
                k: Vec::new(),
            }
        } else {
            Profile::Mod2(Vec::new())
        };
        Self {
            profile,
            truncation_type: TruncationType::Infinite,
        }
    }

    pub fn is_full(&self) -> bool {
        self.truncation_type == TruncationType::Infinite
            && self.profile.e().iter().all(|x| x.is_infinite())
            && self.profile.k().map_or(true, |k| k.iter().all(|&x| x == 2))
    }

    /// The value $e(r)$ for $r \geq 1$.
    ///
    /// # Panics
    ///
    /// Panics if `r` is zero.
    pub fn e(&self, r: usize) -> ProfileValue {
        assert!(r > 0, "Profile functions are indexed from 1");
        self.profile
            .e()
            .get(r - 1)
            .copied()
            .unwrap_or_else(|| self.truncation_type.value())
    }

    /// The value $k(j)$ for $j \geq 0$, or `None` at the prime 2.
    pub fn k(&self, j: usize) -> Option<u32> {
        let k = self.profile.k()?;
        Some(
            k.get(j)
                .copied()
                .unwrap_or_else(|| self.truncation_type.k_value()),
        )
    }

    /// Turn the profile back into user input, e.g. to normalize it again.
    pub fn to_input(&self) -> (ProfileInput<'static>, TruncationSpec) {
        let input = match &self.profile {
            Profile::Mod2(e) => ProfileInput::Mod2(Sequence::Explicit(e.clone())),
            Profile::Generic { e, k } => ProfileInput::Generic {
                e: Sequence::Explicit(e.clone()),
                k: Sequence::Explicit(k.clone()),
            },
        };
        (input, self.truncation_type.into())
    }
}

impl fmt::Display for NormalizedProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.profile, self.truncation_type) {
            (profile, TruncationType::Zero) => fmt::Display::fmt(profile, f),
            (Profile::Mod2(e), TruncationType::Infinite) => {
                write!(f, "[")?;
                for x in e {
                    write!(f, "{x}, ")?;
                }
                write!(f, "+Infinity, ...]")
            }
            (Profile::Generic { e, k }, TruncationType::Infinite) => {
                write!(f, "([")?;
                for x in e {
                    write!(f, "{x}, ")?;
                }
                write!(f, "+Infinity, ...], [")?;
                for x in k {
                    write!(f, "{x}, ")?;
                }
                write!(f, "2, ...])")
            }
        }
    }
}
